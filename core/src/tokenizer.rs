use std::collections::HashSet;

/// Split text into tokens on the space character only.
///
/// Runs of spaces and leading/trailing spaces never produce empty tokens. Tabs,
/// newlines and punctuation are kept verbatim inside tokens, and case is preserved.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Stop words excluded from both indexing and queries.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Build a stop-word set from space-delimited text.
    pub fn from_text(text: &str) -> Self {
        let mut stop_words = Self::new();
        stop_words.extend_from_text(text);
        stop_words
    }

    /// Union every token of `text` into the set.
    pub fn extend_from_text(&mut self, text: &str) {
        self.words.extend(split_into_words(text).into_iter().map(str::to_owned));
    }

    pub fn contains(&self, token: &str) -> bool { self.words.contains(token) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Tokenize `text` and drop every stop word.
    pub fn split_into_words_no_stop<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_into_words(text)
            .into_iter()
            .filter(|word| !self.contains(word))
            .collect()
    }
}
