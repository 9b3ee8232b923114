// corpus.rs — the reference transcript: CSV rows of who said what, when.
//
// Expected columns: temps, scene, acteur, phrase, utilisable. The `utilisable`
// flag is 0 for the first line of a scene (no meaningful predecessor to learn
// a reply from) and 1 otherwise.

use std::path::Path;

use serde::Deserialize;

use crate::error::{BotError, Result};

/// One spoken line of the transcript, in screen order.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusLine {
    #[serde(rename = "temps")]
    pub time: String,
    #[serde(rename = "scene")]
    pub scene: u32,
    #[serde(rename = "acteur")]
    pub actor: String,
    #[serde(rename = "phrase")]
    pub text: String,
    #[serde(rename = "utilisable")]
    usable: u8,
}

impl CorpusLine {
    /// Whether this line has a meaningful preceding line (not scene-initial).
    pub fn is_usable(&self) -> bool {
        self.usable != 0
    }
}

/// Load the transcript in screen order. Any malformed row aborts startup.
pub fn load_corpus(path: &Path) -> Result<Vec<CorpusLine>> {
    let file = std::fs::File::open(path).map_err(|source| BotError::ResourceNotFound {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut lines = Vec::new();
    for row in reader.deserialize() {
        let line: CorpusLine = row?;
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
pub(crate) fn test_line(text: &str, usable: bool) -> CorpusLine {
    CorpusLine {
        time: String::new(),
        scene: 1,
        actor: String::new(),
        text: text.to_string(),
        usable: usable as u8,
    }
}
