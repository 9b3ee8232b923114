// retrieval/ — precomputed context embeddings and exhaustive best-match scan.

pub mod index;
pub mod search;

pub use index::CorpusIndex;
