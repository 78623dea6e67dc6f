use crate::corpus::{build_engine, load_corpus};
use anyhow::Result;
use search_core::{EngineConfig, ScoredDocument, TopKStrategy};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments of `searcher search`.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub corpus: PathBuf,
    pub stop_words: String,
    pub queries: Vec<String>,
    /// Overrides `EngineConfig::max_results`.
    pub k: Option<usize>,
    /// Overrides `EngineConfig::strategy`.
    pub strategy: Option<TopKStrategy>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<ScoredDocument>,
}

/// Load the corpus, run every query and write either console records or one JSON
/// response per line.
pub fn run_search<W: Write>(mut writer: W, options: &SearchOptions, mut config: EngineConfig) -> Result<()> {
    if let Some(k) = options.k { config.max_results = k; }
    if let Some(strategy) = options.strategy { config.strategy = strategy; }

    let documents = load_corpus(&options.corpus)?;
    let engine = build_engine(&options.stop_words, &documents, config)?;

    for query in &options.queries {
        let start = Instant::now();
        let total_hits = engine.find_all_documents(query).len();
        let results = engine.find_top_documents(query);
        if options.json {
            let response = SearchResponse { query, took_s: start.elapsed().as_secs_f64(), total_hits, results };
            writeln!(writer, "{}", serde_json::to_string(&response)?)?;
        } else {
            for doc in &results {
                writeln!(writer, "{doc}")?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write document, term and stop-word counts for a corpus.
pub fn run_stats<W: Write>(mut writer: W, corpus: &Path, stop_words: &str, config: EngineConfig) -> Result<()> {
    let documents = load_corpus(corpus)?;
    let engine = build_engine(stop_words, &documents, config)?;
    writeln!(writer, "documents: {}", engine.document_count())?;
    writeln!(writer, "terms: {}", engine.index().vocabulary_size())?;
    writeln!(writer, "stop words: {}", engine.stop_words().len())?;
    Ok(())
}
