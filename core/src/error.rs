use crate::DocId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("document {0} has already been added")]
    DuplicateDocument(DocId),
}

pub type Result<T> = std::result::Result<T, SearchError>;
