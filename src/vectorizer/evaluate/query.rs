use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{tfidf::TFIDFEngine, token::TermFrequency, CorpusIndex},
};

/// A query projected into an index's term-weight space.
///
/// Built per call and dropped with it; the index is only read.
#[derive(Debug, Clone)]
pub struct Query {
    pub(crate) term_freq: TermFrequency,
    pub(crate) vector: ZeroSpVec<f64>,
}

impl Query {
    pub fn new<E>(text: &str, index: &CorpusIndex<E>) -> Self
    where
        E: TFIDFEngine,
    {
        let term_freq = index.tokenizer().term_frequency(text);
        let vector = E::tf_idf_vec(&term_freq, index.corpus(), &index.idf_cache.idf_vec);
        Query { term_freq, vector }
    }

    /// terms produced by the tokenizer, including ones the vocabulary lacks
    pub fn term_freq(&self) -> &TermFrequency {
        &self.term_freq
    }

    /// unit-normalized TF-IDF vector (zero when no term is in the vocabulary)
    pub fn vector(&self) -> &ZeroSpVec<f64> {
        &self.vector
    }

    /// true when no query term is in the vocabulary
    pub fn is_zero(&self) -> bool {
        self.vector.nnz() == 0
    }

    /// Entry indices sharing at least one term with the query, ascending and unique.
    pub fn candidates<E>(&self, index: &CorpusIndex<E>) -> Vec<usize>
    where
        E: TFIDFEngine,
    {
        let mut indices: Vec<usize> = self
            .vector
            .indices()
            .iter()
            .flat_map(|&pos| index.postings(pos).iter().copied())
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CorpusEntry;

    fn index() -> CorpusIndex {
        CorpusIndex::build(vec![
            CorpusEntry::new("reset password", "a"),
            CorpusEntry::new("what is twitter", "b"),
            CorpusEntry::new("forgot password twitter", "c"),
        ])
        .unwrap()
    }

    #[test]
    fn candidates_union_postings() {
        let index = index();
        let query = Query::new("twitter password", &index);
        assert_eq!(query.candidates(&index), vec![0, 1, 2]);
        let query = Query::new("reset", &index);
        assert_eq!(query.candidates(&index), vec![0]);
    }

    #[test]
    fn unknown_terms_have_no_candidates() {
        let index = index();
        let query = Query::new("banana spaceship", &index);
        assert!(query.is_zero());
        assert!(query.candidates(&index).is_empty());
        assert_eq!(query.term_freq().len(), 2);
    }
}
