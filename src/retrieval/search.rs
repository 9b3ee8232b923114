// search.rs — cosine similarity and the exhaustive best-match scan.

use crate::error::{BotError, Result};
use crate::retrieval::CorpusIndex;

#[inline]
fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[inline]
fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity in [-1, 1], with the degenerate rule: if either vector
/// has zero norm the similarity is 0, not NaN. Zero-vector index entries
/// (scene-initial lines, all-OOV queries) score as maximally uninteresting
/// instead of poisoning the argmax.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product(a, b) / (norm_a * norm_b)
}

/// Exhaustively score `query` against every index entry and return the
/// position of the best match. Ties go to the first (lowest) position, so the
/// result is a stable, deterministic argmax.
///
/// An empty index is a caller contract violation, not a searchable state.
pub fn find_best_match(query: &[f32], index: &CorpusIndex) -> Result<usize> {
    if index.is_empty() {
        return Err(BotError::invalid_argument("cannot search an empty corpus index"));
    }

    let mut best_pos = 0usize;
    let mut best_score = f32::NEG_INFINITY;

    for (pos, entry) in index.iter().enumerate() {
        let score = cosine_similarity(query, entry);
        // Strict > keeps the earliest position on ties.
        if score > best_score {
            best_score = score;
            best_pos = pos;
        }
    }

    Ok(best_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::test_line;
    use crate::embedding::{SentenceEncoder, VectorTable};
    use std::collections::HashSet;
    use std::io::Cursor;

    #[test]
    fn test_cosine_of_vector_with_itself_is_one() {
        let v = [0.3f32, -1.2, 4.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_against_zero_vector_is_exactly_zero() {
        let v = [1.0f32, 2.0];
        let zero = [0.0f32, 0.0];
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_and_opposite() {
        assert!((cosine_similarity(&[1.0, 0.0], &[0.0, 1.0])).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    fn index_from(lines: &[crate::corpus::CorpusLine], table: &VectorTable) -> CorpusIndex {
        let encoder = SentenceEncoder::new(table);
        CorpusIndex::build(lines, &encoder)
    }

    fn table(src: &str) -> VectorTable {
        VectorTable::from_reader(Cursor::new(src), 10, &HashSet::new()).unwrap()
    }

    #[test]
    fn test_empty_index_is_invalid_argument() {
        let t = table("1 2\nhi 1.0 0.0\n");
        let index = index_from(&[], &t);
        let err = find_best_match(&[1.0, 0.0], &index).unwrap_err();
        assert!(matches!(err, BotError::InvalidArgument(_)));
    }

    #[test]
    fn test_picks_highest_similarity_position() {
        let t = table("2 2\nhi 1.0 0.0\nbye 0.0 1.0\n");
        let lines = vec![
            test_line("intro", false),
            test_line("bye bye", true), // context: encode("intro") = zero
            test_line("hi hi", true),   // context: encode("bye bye") = [0,1]
            test_line("end", true),     // context: encode("hi hi") = [1,0]
        ];
        let index = index_from(&lines, &t);

        let pos = find_best_match(&[1.0, 0.0], &index).unwrap();
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_tie_goes_to_first_position() {
        let t = table("1 2\nhi 1.0 0.0\n");
        // Positions 2 and 3 both carry context [1,0]: exact tie.
        let lines = vec![
            test_line("intro", false),
            test_line("hi", true),
            test_line("hi", true),
            test_line("hi", true),
        ];
        let index = index_from(&lines, &t);

        let pos = find_best_match(&[1.0, 0.0], &index).unwrap();
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_zero_query_returns_first_position() {
        // Every pair scores 0 under the degenerate rule; argmax stays at 0.
        let t = table("1 2\nhi 1.0 0.0\n");
        let lines = vec![test_line("intro", false), test_line("hi", true)];
        let index = index_from(&lines, &t);

        let pos = find_best_match(&[0.0, 0.0], &index).unwrap();
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_deterministic() {
        let t = table("2 2\nhi 1.0 0.0\nbye 0.0 1.0\n");
        let lines = vec![
            test_line("intro", false),
            test_line("hi bye", true),
            test_line("bye", true),
        ];
        let index = index_from(&lines, &t);

        let first = find_best_match(&[0.7, 0.3], &index).unwrap();
        for _ in 0..10 {
            assert_eq!(find_best_match(&[0.7, 0.3], &index).unwrap(), first);
        }
    }
}
