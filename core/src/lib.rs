pub mod engine;
pub mod error;
pub mod format;
pub mod index;
pub mod query;
pub mod ranker;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use engine::{EngineConfig, SearchEngine};
pub use error::{Result, SearchError};
pub use index::InvertedIndex;
pub use query::Query;
pub use ranker::TopKStrategy;
pub use tokenizer::{split_into_words, StopWords};

pub type DocId = u32;

/// Number of results returned by `find_top_documents` unless configured otherwise.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// A ranked search hit.
///
/// Displays as `{ document_id = <id>, relevance = <score> }` with six significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document_id: DocId,
    pub relevance: f64,
}

impl ScoredDocument {
    pub fn new(document_id: DocId, relevance: f64) -> Self {
        Self { document_id, relevance }
    }
}

impl fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ document_id = {}, relevance = {} }}", self.document_id, format::format_general(self.relevance))
    }
}
