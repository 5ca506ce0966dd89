pub mod corpus;
pub mod entry;
pub mod evaluate;
pub mod tfidf;
pub mod token;
pub mod tokenizer;

use std::marker::PhantomData;

use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        corpus::Corpus,
        entry::CorpusEntry,
        evaluate::scoring::Matcher,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        tokenizer::Tokenizer,
    },
};

/// Immutable TF-IDF index over a fixed set of question/answer pairs.
///
/// `CorpusIndex<E>` has one generic parameter:
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// Nothing mutates the index after `build`, so it can be shared between
/// threads behind a plain reference or an `Arc`.
#[derive(Debug, Clone)]
pub struct CorpusIndex<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    /// entries in corpus order
    entries: Vec<CorpusEntry>,
    /// vocabulary and document frequencies
    corpus: Corpus,
    /// unit-normalized TF-IDF vector of each question, aligned with `entries`
    documents: Vec<ZeroSpVec<f64>>,
    /// vocabulary position -> ascending entry indices containing that term
    term_dim_rev_index: Vec<Vec<usize>>,
    /// IDF Vector
    idf_cache: IDFVector,
    tokenizer: Tokenizer,
    _marker: PhantomData<E>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IDFVector {
    /// IDF Vector it is not sparse because every vocabulary term has a weight
    pub idf_vec: Vec<f64>,
}

impl CorpusIndex {
    /// Build an index with the default tokenizer and `DefaultTFIDFEngine`.
    ///
    /// # Errors
    /// * `Error::EmptyCorpus` - `entries` is empty
    /// * `Error::EmptyQuestion` - an entry's question is blank
    pub fn build(entries: Vec<CorpusEntry>) -> Result<Self> {
        Self::build_with_tokenizer(entries, Tokenizer::default())
    }

    pub fn builder() -> CorpusIndexBuilder {
        CorpusIndexBuilder::new()
    }
}

impl<E> CorpusIndex<E>
where
    E: TFIDFEngine,
{
    pub fn build_with_tokenizer(entries: Vec<CorpusEntry>, tokenizer: Tokenizer) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        if let Some(index) = entries.iter().position(|e| e.question.trim().is_empty()) {
            return Err(Error::EmptyQuestion { index });
        }

        let freqs: Vec<_> = entries
            .iter()
            .map(|e| tokenizer.term_frequency(&e.question))
            .collect();

        // 語彙と逆Indexを同時に作る
        let mut corpus = Corpus::new();
        let mut term_dim_rev_index: Vec<Vec<usize>> = Vec::new();
        for (doc_idx, freq) in freqs.iter().enumerate() {
            for pos in corpus.add_doc(freq) {
                if pos >= term_dim_rev_index.len() {
                    term_dim_rev_index.resize_with(pos + 1, Vec::new);
                }
                term_dim_rev_index[pos].push(doc_idx);
            }
        }

        let idf_cache = IDFVector {
            idf_vec: E::idf_vec(&corpus),
        };

        let documents: Vec<ZeroSpVec<f64>> = freqs
            .par_iter()
            .map(|freq| {
                let mut vec = E::tf_idf_vec(freq, &corpus, &idf_cache.idf_vec);
                vec.shrink_to_fit();
                vec
            })
            .collect();

        tracing::debug!(
            entries = entries.len(),
            vocabulary = corpus.vocab_size(),
            "corpus index built"
        );

        Ok(Self {
            entries,
            corpus,
            documents,
            term_dim_rev_index,
            idf_cache,
            tokenizer,
            _marker: PhantomData,
        })
    }

    /// Project text into this index's term-weight space.
    /// Terms outside the vocabulary contribute nothing.
    pub fn vectorize(&self, text: &str) -> ZeroSpVec<f64> {
        let freq = self.tokenizer.term_frequency(text);
        E::tf_idf_vec(&freq, &self.corpus, &self.idf_cache.idf_vec)
    }

    pub fn matcher(&self) -> Matcher<'_, E> {
        Matcher::new(self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// always false for a built index
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    #[inline]
    pub fn entry(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    #[inline]
    pub fn documents(&self) -> &[ZeroSpVec<f64>] {
        &self.documents
    }

    #[inline]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[inline]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    #[inline]
    pub fn vocabulary_len(&self) -> usize {
        self.corpus.vocab_size()
    }

    /// IDF weight of a term, `None` when it is not in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        let pos = self.corpus.term_position(term)?;
        self.idf_cache.idf_vec.get(pos).copied()
    }

    /// Entry indices whose question contains the term at `pos`, ascending
    #[inline]
    pub fn postings(&self, pos: usize) -> &[usize] {
        self.term_dim_rev_index
            .get(pos)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Builder for a `CorpusIndex` with a non-default tokenizer or engine.
///
/// ```
/// use qa_matcher::{CorpusEntry, CorpusIndex, SublinearTFIDFEngine, Tokenizer};
///
/// let index = CorpusIndex::builder()
///     .tokenizer(Tokenizer::new().with_min_term_len(2))
///     .engine::<SublinearTFIDFEngine>()
///     .build(vec![CorpusEntry::new("What is Twitter?", "A social media platform.")])
///     .unwrap();
/// assert_eq!(index.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CorpusIndexBuilder<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    tokenizer: Tokenizer,
    _marker: PhantomData<E>,
}

impl CorpusIndexBuilder {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            _marker: PhantomData,
        }
    }
}

impl Default for CorpusIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> CorpusIndexBuilder<E>
where
    E: TFIDFEngine,
{
    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn engine<E2>(self) -> CorpusIndexBuilder<E2>
    where
        E2: TFIDFEngine,
    {
        CorpusIndexBuilder {
            tokenizer: self.tokenizer,
            _marker: PhantomData,
        }
    }

    pub fn build(self, entries: Vec<CorpusEntry>) -> Result<CorpusIndex<E>> {
        CorpusIndex::<E>::build_with_tokenizer(entries, self.tokenizer)
    }
}
