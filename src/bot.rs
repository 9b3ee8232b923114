// bot.rs — the Responder: one shot of encode → scan → scripted reply.
//
// The index stores, at position i, the context the bot would have heard just
// before line i was spoken. The best-matching position's own text is
// therefore the line that FOLLOWED the closest context in the transcript.

use crate::config;
use crate::corpus::CorpusLine;
use crate::embedding::{SentenceEncoder, VectorTable};
use crate::error::Result;
use crate::retrieval::{search, CorpusIndex};

/// Holds the immutable startup artifacts and answers queries against them.
pub struct Responder {
    table: VectorTable,
    lines: Vec<CorpusLine>,
    index: CorpusIndex,
}

impl Responder {
    /// Build the index once over the transcript. Read-only from here on.
    pub fn new(table: VectorTable, lines: Vec<CorpusLine>) -> Self {
        let index = {
            let encoder = SentenceEncoder::new(&table);
            CorpusIndex::build(&lines, &encoder)
        };
        Self { table, lines, index }
    }

    pub fn corpus_len(&self) -> usize {
        self.lines.len()
    }

    /// Encode the user's sentence, find the closest context in the
    /// transcript, and return the scripted line that follows it.
    pub fn respond(&self, user_text: &str) -> Result<String> {
        let cleaned = user_text.replace(config::display::QUERY_STRIPPED, "");

        let encoder = SentenceEncoder::new(&self.table);
        let query = encoder.encode(&cleaned);

        let pos = search::find_best_match(&query, &self.index)?;
        log::debug!("query {:?} matched corpus position {}", user_text, pos);

        Ok(clean_reply(&self.lines[pos].text))
    }
}

/// Display cleanup: non-breaking spaces and stage directions come straight
/// from the transcript and mean nothing in a chat window.
fn clean_reply(text: &str) -> String {
    let mut reply = text.to_string();
    for marker in config::display::STRIPPED_MARKERS {
        reply = reply.replace(marker, "");
    }
    reply
}
