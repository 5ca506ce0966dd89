use crate::vectorizer::token::TermFrequency;

/// Splits text into terms.
///
/// Every character that is not alphanumeric acts as a separator, so
/// punctuation never reaches the vocabulary. By default every term is kept;
/// `with_min_term_len(2)` drops one-character terms the way a `\w\w+`
/// token pattern does.
///
/// The same `Tokenizer` must be used for corpus questions and for queries,
/// which is why `CorpusIndex` owns one and exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    lowercase: bool,
    min_term_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_term_len: 1,
        }
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// `0` and `1` both keep every term
    pub fn with_min_term_len(mut self, min_term_len: usize) -> Self {
        self.min_term_len = min_term_len;
        self
    }

    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    pub fn min_term_len(&self) -> usize {
        self.min_term_len
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .filter(|s| s.chars().count() >= self.min_term_len)
            .map(|s| {
                if self.lowercase {
                    s.to_lowercase()
                } else {
                    s.to_string()
                }
            })
            .collect()
    }

    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        let mut freq = TermFrequency::new();
        freq.add_terms(&self.tokenize(text));
        freq
    }
}
