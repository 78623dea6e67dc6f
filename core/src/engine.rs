use crate::index::InvertedIndex;
use crate::query::Query;
use crate::ranker::{self, TopKStrategy};
use crate::tokenizer::StopWords;
use crate::{DocId, Result, ScoredDocument, MAX_RESULT_DOCUMENT_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// K used by `find_top_documents`.
    pub max_results: usize,
    pub strategy: TopKStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_results: MAX_RESULT_DOCUMENT_COUNT, strategy: TopKStrategy::default() }
    }
}

/// Single-corpus TF-IDF search engine.
///
/// Build it with `configure_stop_words` and `add_document`, then query it through
/// `&self`. Stop words only affect documents added after they are configured.
#[derive(Debug, Default)]
pub struct SearchEngine {
    stop_words: StopWords,
    index: InvertedIndex,
    config: EngineConfig,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn configure_stop_words(&mut self, text: &str) {
        self.stop_words.extend_from_text(text);
        tracing::debug!(stop_words = self.stop_words.len(), "configured stop words");
    }

    /// Index `text` under `doc_id`. Fails only when `doc_id` was already added.
    pub fn add_document(&mut self, doc_id: DocId, text: &str) -> Result<()> {
        let words = self.stop_words.split_into_words_no_stop(text);
        self.index.add_document(doc_id, &words)?;
        tracing::debug!(doc_id, words = words.len(), "added document");
        Ok(())
    }

    pub fn parse_query(&self, raw_query: &str) -> Query { Query::parse(raw_query, &self.stop_words) }

    /// Every matching document, ascending by id.
    pub fn find_all_documents(&self, raw_query: &str) -> Vec<ScoredDocument> {
        ranker::find_all_documents(&self.index, &self.parse_query(raw_query))
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Vec<ScoredDocument> {
        self.find_top_documents_with(raw_query, self.config.max_results, self.config.strategy)
    }

    pub fn find_top_documents_with(&self, raw_query: &str, k: usize, strategy: TopKStrategy) -> Vec<ScoredDocument> {
        let matched = self.find_all_documents(raw_query);
        let total_hits = matched.len();
        let top = ranker::select_top_k(matched, k, strategy);
        tracing::debug!(total_hits, returned = top.len(), k, ?strategy, "ranked query");
        top
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    pub fn config(&self) -> &EngineConfig { &self.config }
}
