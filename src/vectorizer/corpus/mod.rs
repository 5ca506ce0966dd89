use indexmap::IndexMap;

use crate::TermFrequency;

/// keep document count and per-term document counts
///
/// The insertion order of `term_counts` is the vocabulary:
/// a term's position in the map is its dimension in every TF-IDF vector.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// term -> number of documents containing it
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Add a document's terms to the corpus
    /// Each unique term counts once per document.
    ///
    /// # Returns
    /// * `Vec<usize>` - vocabulary positions of the document's terms, in first-seen order
    pub fn add_doc(&mut self, freq: &TermFrequency) -> Vec<usize> {
        self.doc_num += 1;
        freq.iter()
            .map(|(term, _)| {
                let entry = self.term_counts.entry(term.into());
                let pos = entry.index();
                *entry.or_insert(0) += 1;
                pos
            })
            .collect()
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a term (0 if unseen)
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Vocabulary position of a term
    #[inline]
    pub fn term_position(&self, term: &str) -> Option<usize> {
        self.term_counts.get_index_of(term)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// `(term, document frequency)` in vocabulary order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.term_counts.iter().map(|(term, &count)| (term.as_ref(), count))
    }
}
