// table.rs — immutable token → embedding map built from a pretrained `.vec` file.
//
// File format (fasttext text export): one header line (`count dims`), then one
// line per token: `token v1 v2 ... vD`, space-separated, UTF-8.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{BotError, Result};

/// Immutable mapping from token to fixed-dimension embedding. Built once at
/// startup, read-only thereafter; queries only look tokens up.
#[derive(Debug)]
pub struct VectorTable {
    vectors: HashMap<String, Vec<f32>>,
    dims: usize,
}

impl VectorTable {
    /// Load up to `max_tokens` accepted entries from a `.vec` file.
    ///
    /// Tokens in `excluded` are dropped without consuming the budget: the cap
    /// counts accepted insertions only. Frequency-sorted vector files front-load
    /// punctuation, so a naive "stop after reading line max_tokens" would cost
    /// real vocabulary.
    pub fn load(path: &Path, max_tokens: usize, excluded: &HashSet<&str>) -> Result<Self> {
        let file = File::open(path).map_err(|source| BotError::ResourceNotFound {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), max_tokens, excluded)
    }

    /// Build from any line source. First line is the count/dims header and is
    /// skipped unparsed; dimensionality is inferred from the first accepted
    /// entry and enforced on every later one.
    pub fn from_reader<R: BufRead>(reader: R, max_tokens: usize, excluded: &HashSet<&str>) -> Result<Self> {
        let mut vectors: HashMap<String, Vec<f32>> = HashMap::with_capacity(max_tokens);
        let mut dims = 0usize;

        let mut lines = reader.lines().enumerate();

        // Header line.
        if let Some((_, header)) = lines.next() {
            header?;
        }

        for (i, line) in lines {
            if vectors.len() >= max_tokens {
                break;
            }
            let line = line?;
            let line_no = i + 1; // 1-based, header included

            let (token, raw_vec) = line
                .split_once(' ')
                .ok_or_else(|| BotError::parse(line_no, "missing vector payload"))?;

            if excluded.contains(token) {
                continue;
            }

            let vec = parse_vector(raw_vec, line_no)?;
            if dims == 0 {
                dims = vec.len();
                if dims == 0 {
                    return Err(BotError::parse(line_no, "empty vector"));
                }
            } else if vec.len() != dims {
                return Err(BotError::parse(
                    line_no,
                    format!("expected {} components, got {}", dims, vec.len()),
                ));
            }

            vectors.insert(token.to_string(), vec);
        }

        Ok(Self { vectors, dims })
    }

    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    /// Number of accepted vocabulary entries.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimensionality of every stored vector (0 for an empty table).
    pub fn dims(&self) -> usize {
        self.dims
    }
}

fn parse_vector(raw: &str, line_no: usize) -> Result<Vec<f32>> {
    raw.split_ascii_whitespace()
        .map(|field| {
            field
                .parse::<f32>()
                .map_err(|_| BotError::parse(line_no, format!("non-numeric component {field:?}")))
        })
        .collect()
}
