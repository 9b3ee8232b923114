// IMPORTANT:
// Keep ALL numeric values centralized here (repo rule: no hardcoded numeric values scattered around).

// NOTE: BOT_VERSION must stay in sync with the `version` field in Cargo.toml.
pub const BOT_VERSION: &str = "0.1.0";

pub mod logging {
    pub const LOG_DIR_REL: &str = ".replique/logs";
    pub const LOG_FILE_NAME: &str = "replique.log";

    pub const LOG_ROTATE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
    pub const LOG_ROTATE_KEEP_FILES: usize = 5;
}

pub mod embedding {
    /// Dimensionality of the reference word-vector model (fasttext wiki.fr).
    /// The table infers its real dimensionality from the file; startup warns
    /// when the loaded model differs from this.
    pub const EXPECTED_DIMS: usize = 300;

    /// How many vocabulary entries to keep from the pretrained file. The cap
    /// counts accepted tokens only; excluded punctuation is free.
    pub const MAX_VOCAB_TOKENS: usize = 50_000;

    /// Punctuation and markers dropped while loading the vocabulary. These
    /// dominate the head of a frequency-sorted vector file and carry no
    /// sentence meaning.
    pub const EXCLUDED_TOKENS: &[&str] = &[
        ",", ".", "#", "!", "\"", "'", ":", ";", "(", ")", "/", "</s>", "-",
    ];
}

pub mod display {
    /// Substrings removed from a reply before display: non-breaking spaces
    /// and the transcript's voice-over stage direction.
    pub const STRIPPED_MARKERS: &[&str] = &["\u{a0}", "(Voix off.)"];

    /// Stripped from the user's sentence before encoding. Corpus lines are
    /// indexed verbatim; only the query side is cleaned.
    pub const QUERY_STRIPPED: &str = ",";
}
