// index.rs — per-line context embeddings, positionally aligned with the corpus.
//
// The embedding at position i is what the bot would have heard just before
// line i was spoken: the encoding of line i-1. When a reply to position i is
// wanted, line i's own text IS the scripted answer.

use crate::corpus::CorpusLine;
use crate::embedding::SentenceEncoder;

/// One precomputed context embedding per corpus line, same length and order
/// as the corpus. Built once at startup, read-only afterwards.
pub struct CorpusIndex {
    embeddings: Vec<Vec<f32>>,
}

impl CorpusIndex {
    /// Precompute context embeddings.
    ///
    /// Position 0 always gets the zero vector: there is no line -1, whatever
    /// the stored flag claims. Any other non-usable (scene-initial) line also
    /// gets the zero vector; the retriever's degenerate rule keeps those from
    /// ever winning a search.
    pub fn build(lines: &[CorpusLine], encoder: &SentenceEncoder) -> Self {
        let dims = encoder.dims();
        let embeddings = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 || !line.is_usable() {
                    vec![0.0f32; dims]
                } else {
                    encoder.encode(&lines[i - 1].text)
                }
            })
            .collect();
        Self { embeddings }
    }

    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }

    /// Iterate embeddings in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &[f32]> {
        self.embeddings.iter().map(Vec::as_slice)
    }

    #[cfg(test)]
    pub fn embedding(&self, i: usize) -> &[f32] {
        &self.embeddings[i]
    }
}
