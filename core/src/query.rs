use crate::tokenizer::StopWords;
use std::collections::BTreeSet;

/// A parsed query: must-have terms that score, must-not-have terms that filter.
///
/// A term may sit in both sets; the ranker applies minus terms last, so exclusion wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_terms: BTreeSet<String>,
    pub minus_terms: BTreeSet<String>,
}

impl Query {
    /// Parse a raw query after stop-word removal.
    ///
    /// `-word` becomes a minus term (without the prefix), a lone `-` is dropped,
    /// anything else is a plus term. Stop words are matched before the prefix is
    /// stripped, so `-the` stays a minus term even when `the` is a stop word.
    pub fn parse(raw_query: &str, stop_words: &StopWords) -> Self {
        let mut query = Self::default();
        for word in stop_words.split_into_words_no_stop(raw_query) {
            match word.strip_prefix('-') {
                Some("") => {}
                Some(minus) => {
                    query.minus_terms.insert(minus.to_owned());
                }
                None => {
                    query.plus_terms.insert(word.to_owned());
                }
            }
        }
        tracing::trace!(plus = query.plus_terms.len(), minus = query.minus_terms.len(), "parsed query");
        query
    }

    pub fn is_empty(&self) -> bool { self.plus_terms.is_empty() && self.minus_terms.is_empty() }
}
