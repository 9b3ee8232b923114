// encoder.rs — sentence → embedding by averaging known word vectors.

use crate::embedding::VectorTable;

/// Turns an arbitrary sentence into one fixed-dimension vector: the
/// component-wise mean of the vectors of its known tokens.
///
/// Tokenization is a plain whitespace split with no normalization; callers
/// that want punctuation removed must pre-clean (the query path strips commas,
/// the corpus is indexed verbatim).
pub struct SentenceEncoder<'a> {
    table: &'a VectorTable,
}

impl<'a> SentenceEncoder<'a> {
    pub fn new(table: &'a VectorTable) -> Self {
        Self { table }
    }

    /// Dimensionality of every produced embedding.
    pub fn dims(&self) -> usize {
        self.table.dims()
    }

    /// Encode a sentence. Unknown tokens are silently dropped; when no token
    /// resolves (including the empty string), the result is the zero vector.
    /// Never fails.
    pub fn encode(&self, text: &str) -> Vec<f32> {
        let dims = self.table.dims();
        let mut sum = vec![0.0f32; dims];
        let mut resolved = 0usize;

        for token in text.split_whitespace() {
            if let Some(vec) = self.table.get(token) {
                for (acc, v) in sum.iter_mut().zip(vec) {
                    *acc += v;
                }
                resolved += 1;
            }
        }

        if resolved > 0 {
            let n = resolved as f32;
            for acc in sum.iter_mut() {
                *acc /= n;
            }
        }
        // resolved == 0 leaves the zero vector; the retriever's degenerate
        // rule scores it 0 against everything.
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Cursor;

    fn table_2d() -> VectorTable {
        let src = "2 2\nbonjour 1.0 0.0\nle 0.0 1.0\n";
        VectorTable::from_reader(Cursor::new(src), 10, &HashSet::new()).unwrap()
    }

    #[test]
    fn test_mean_of_known_tokens() {
        let table = table_2d();
        let enc = SentenceEncoder::new(&table);
        assert_eq!(enc.encode("bonjour le"), vec![0.5, 0.5]);
    }

    #[test]
    fn test_token_order_does_not_matter() {
        let table = table_2d();
        let enc = SentenceEncoder::new(&table);
        assert_eq!(enc.encode("le bonjour"), enc.encode("bonjour le"));
    }

    #[test]
    fn test_unknown_tokens_are_dropped() {
        let table = table_2d();
        let enc = SentenceEncoder::new(&table);
        assert_eq!(enc.encode("bonjour xyzzy"), vec![1.0, 0.0]);
    }

    #[test]
    fn test_empty_string_is_zero_vector() {
        let table = table_2d();
        let enc = SentenceEncoder::new(&table);
        assert_eq!(enc.encode(""), vec![0.0, 0.0]);
    }

    #[test]
    fn test_all_oov_is_zero_vector() {
        let table = table_2d();
        let enc = SentenceEncoder::new(&table);
        assert_eq!(enc.encode("foo bar baz"), vec![0.0, 0.0]);
    }

    #[test]
    fn test_repeated_token_weights_the_mean() {
        let table = table_2d();
        let enc = SentenceEncoder::new(&table);
        // (1,0) + (1,0) + (0,1) averaged over 3 resolved tokens
        let got = enc.encode("bonjour bonjour le");
        assert!((got[0] - 2.0 / 3.0).abs() < 1e-6);
        assert!((got[1] - 1.0 / 3.0).abs() < 1e-6);
    }
}
