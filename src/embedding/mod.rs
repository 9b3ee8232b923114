// embedding/ — word-vector lookup table and sentence encoding.
//
// Provides:
// - VectorTable: pretrained fasttext-style `.vec` file → token→vector map
// - SentenceEncoder: sentence → mean of its known word vectors

pub mod encoder;
pub mod table;

pub use encoder::SentenceEncoder;
pub use table::VectorTable;
