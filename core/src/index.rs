use crate::{DocId, Result, SearchError};
use std::collections::{BTreeSet, HashMap};

static EMPTY_POSTING: BTreeSet<DocId> = BTreeSet::new();

/// Append-only inverted index.
///
/// Keeps two views of the corpus: token -> posting set, and document -> (token -> TF).
/// Stop-word filtering happens before words reach the index, so stop words never
/// appear as keys here.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, BTreeSet<DocId>>,
    term_freqs: HashMap<DocId, HashMap<String, f64>>,
    documents: BTreeSet<DocId>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index one document given its already filtered words.
    ///
    /// A document without words still counts toward N but emits no postings.
    pub fn add_document(&mut self, doc_id: DocId, words: &[&str]) -> Result<()> {
        if !self.documents.insert(doc_id) {
            return Err(SearchError::DuplicateDocument(doc_id));
        }
        if words.is_empty() {
            return Ok(());
        }

        let tf_unit = 1.0 / words.len() as f64;
        let freqs = self.term_freqs.entry(doc_id).or_default();
        for &word in words {
            *freqs.entry(word.to_owned()).or_insert(0.0) += tf_unit;
            self.postings.entry(word.to_owned()).or_default().insert(doc_id);
        }
        Ok(())
    }

    /// Documents containing `token`; empty for unseen tokens.
    pub fn lookup(&self, token: &str) -> &BTreeSet<DocId> {
        self.postings.get(token).unwrap_or(&EMPTY_POSTING)
    }

    pub fn term_frequency(&self, doc_id: DocId, token: &str) -> Option<f64> {
        self.term_freqs.get(&doc_id)?.get(token).copied()
    }

    pub fn document_frequency(&self, token: &str) -> usize { self.lookup(token).len() }

    /// `ln(N / df)`, or `None` when the token is unseen or the corpus is empty.
    pub fn idf(&self, token: &str) -> Option<f64> {
        let df = self.document_frequency(token);
        if df == 0 || self.documents.is_empty() {
            return None;
        }
        Some((self.document_count() as f64 / df as f64).ln())
    }

    pub fn document_count(&self) -> usize { self.documents.len() }

    pub fn contains_document(&self, doc_id: DocId) -> bool { self.documents.contains(&doc_id) }

    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ { self.documents.iter().copied() }

    pub fn vocabulary_size(&self) -> usize { self.postings.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-12 }

    #[test]
    fn term_frequency_is_share_of_words() {
        let mut idx = InvertedIndex::new();
        idx.add_document(0, &["white", "cat", "white", "tail"]).unwrap();
        assert!(approx(idx.term_frequency(0, "white").unwrap(), 0.5));
        assert!(approx(idx.term_frequency(0, "cat").unwrap(), 0.25));
        assert_eq!(idx.term_frequency(0, "dog"), None);
        assert_eq!(idx.term_frequency(1, "cat"), None);
    }

    #[test]
    fn postings_track_every_document() {
        let mut idx = InvertedIndex::new();
        idx.add_document(0, &["cat"]).unwrap();
        idx.add_document(1, &["dog"]).unwrap();
        idx.add_document(2, &["cat", "dog"]).unwrap();
        assert_eq!(idx.lookup("cat").iter().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(idx.document_frequency("dog"), 2);
        assert!(idx.lookup("bird").is_empty());
        assert_eq!(idx.vocabulary_size(), 2);
    }

    #[test]
    fn empty_document_counts_without_postings() {
        let mut idx = InvertedIndex::new();
        idx.add_document(0, &[]).unwrap();
        idx.add_document(1, &["cat"]).unwrap();
        assert_eq!(idx.document_count(), 2);
        assert!(idx.contains_document(0));
        assert_eq!(idx.term_frequency(0, "cat"), None);
        assert!(approx(idx.idf("cat").unwrap(), 2f64.ln()));
    }

    #[test]
    fn duplicate_id_is_rejected_without_changes() {
        let mut idx = InvertedIndex::new();
        idx.add_document(3, &["cat"]).unwrap();
        assert_eq!(idx.add_document(3, &["dog"]), Err(SearchError::DuplicateDocument(3)));
        assert_eq!(idx.document_count(), 1);
        assert!(idx.lookup("dog").is_empty());
        assert!(approx(idx.term_frequency(3, "cat").unwrap(), 1.0));
    }

    #[test]
    fn idf_is_none_for_unknown_or_empty() {
        let idx = InvertedIndex::new();
        assert_eq!(idx.idf("cat"), None);

        let mut idx = InvertedIndex::new();
        idx.add_document(0, &["cat"]).unwrap();
        assert_eq!(idx.idf("dog"), None);
        assert!(approx(idx.idf("cat").unwrap(), 0.0));
    }
}
