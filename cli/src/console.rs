//! Line protocol: stop words, document count, that many documents, then queries.

use anyhow::{bail, Context, Result};
use search_core::{DocId, EngineConfig, SearchEngine};
use std::io::{BufRead, Lines, Write};

/// Build an engine from `reader` and answer every query line after the corpus.
pub fn run_console<R: BufRead, W: Write>(reader: R, mut writer: W, config: EngineConfig) -> Result<()> {
    let mut lines = reader.lines();
    let engine = read_corpus(&mut lines, config)?;

    while let Some(query) = next_line(&mut lines)? {
        for doc in engine.find_top_documents(&query) {
            writeln!(writer, "{doc}")?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Read the stop-word line, the count line and the documents that follow.
///
/// Input that ends before the announced number of documents stops loading with a
/// warning; only documents actually read are indexed.
pub fn read_corpus<R: BufRead>(lines: &mut Lines<R>, config: EngineConfig) -> Result<SearchEngine> {
    let mut engine = SearchEngine::with_config(config);
    engine.configure_stop_words(&next_line(lines)?.unwrap_or_default());

    let expected = match next_line(lines)? {
        Some(line) => parse_document_count(&line)?,
        None => 0,
    };
    for doc_id in 0..expected {
        let Some(text) = next_line(lines)? else {
            tracing::warn!(expected, read = doc_id, "input ended before all documents were read");
            break;
        };
        engine.add_document(doc_id, &text)?;
    }
    tracing::info!(num_docs = engine.document_count(), "console corpus loaded");
    Ok(engine)
}

/// Read the leading integer of the count line, like a C++ `istream >> int`:
/// trailing text is ignored and negative counts mean no documents.
pub fn parse_document_count(line: &str) -> Result<DocId> {
    let trimmed = line.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        bail!("invalid document count {line:?}");
    }
    let count: i64 = trimmed[..sign_len + digits_len]
        .parse()
        .with_context(|| format!("invalid document count {line:?}"))?;
    if count < 0 {
        return Ok(0);
    }
    DocId::try_from(count).with_context(|| format!("document count {count} is too large"))
}

fn next_line<R: BufRead>(lines: &mut Lines<R>) -> Result<Option<String>> {
    lines.next().transpose().context("reading input")
}
