mod bot;
mod config;
mod corpus;
mod embedding;
mod error;
mod logging;
mod retrieval;

use std::collections::HashSet;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::Path;

use anyhow::Context;

use crate::bot::Responder;
use crate::embedding::VectorTable;

fn main() {
    if let Err(e) = real_main() {
        // Keep stderr noisy for bug reports; logs also go to file.
        eprintln!("[replique] fatal error: {e:?}");
        log::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}

fn real_main() -> anyhow::Result<()> {
    logging::init_logging()?;

    let args: Vec<String> = std::env::args().collect();
    let vectors_path = read_arg_value(&args, "--vectors").context(USAGE)?;
    let corpus_path = read_arg_value(&args, "--corpus").context(USAGE)?;

    let bot = startup(Path::new(&vectors_path), Path::new(&corpus_path))?;

    log::info!("Ready, waiting for queries on stdin");

    let in_stream = stdin();
    let mut out_stream = stdout();

    let mut query_count: u64 = 0;
    for line in in_stream.lock().lines() {
        let line = line.context("failed reading from stdin")?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        query_count += 1;
        log::info!("Processing query #{}", query_count);

        let reply = bot.respond(text)?;
        writeln!(out_stream, "{reply}").context("failed writing reply")?;
        out_stream.flush().context("failed flushing stdout")?;
    }

    log::info!("stdin closed after {} queries, exiting", query_count);
    Ok(())
}

/// Load both input files and build the one-time artifacts. Every failure here
/// is fatal: the inputs are static, so retrying cannot help.
fn startup(vectors_path: &Path, corpus_path: &Path) -> anyhow::Result<Responder> {
    let excluded: HashSet<&str> = config::embedding::EXCLUDED_TOKENS.iter().copied().collect();

    let table = VectorTable::load(vectors_path, config::embedding::MAX_VOCAB_TOKENS, &excluded)
        .with_context(|| format!("loading word vectors from {}", vectors_path.display()))?;
    log::info!("Loaded {} pretrained word vectors (dims={})", table.len(), table.dims());
    if !table.is_empty() && table.dims() != config::embedding::EXPECTED_DIMS {
        log::warn!(
            "Word-vector dimensionality {} differs from the reference model's {}",
            table.dims(),
            config::embedding::EXPECTED_DIMS
        );
    }

    let lines = corpus::load_corpus(corpus_path)
        .with_context(|| format!("loading transcript from {}", corpus_path.display()))?;
    log::info!("Loaded {} transcript lines", lines.len());
    anyhow::ensure!(!lines.is_empty(), "transcript {} has no rows", corpus_path.display());

    Ok(Responder::new(table, lines))
}

const USAGE: &str = "usage: replique --vectors <path/to/model.vec> --corpus <path/to/transcript.csv>";

fn read_arg_value(args: &[String], key: &str) -> Option<String> {
    let idx = args.iter().position(|a| a == key)?;
    args.get(idx + 1).cloned()
}
