/// This crate is a question/answer retrieval engine using a TF-IDF Vectorizer.
pub mod config;
pub mod error;
pub mod loader;
pub mod utils;
pub mod vectorizer;

/// Error type and result alias shared by the whole crate
pub use error::{Error, Result};

/// Corpus Index
/// The top-level struct of this crate.
/// It holds a fixed set of question/answer pairs and converts every question
/// into a unit-normalized TF-IDF vector.
///
/// Internally, it holds:
/// - The entries in corpus order
/// - The vocabulary with per-term document frequencies
/// - One sparse TF-IDF vector per question
/// - An IDF vector cache
/// - An inverted index from term to the entries containing it
///
/// `CorpusIndex<E>` has one generic parameter:
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// The index is immutable once built and is `Send + Sync`.
pub use vectorizer::{CorpusIndex, CorpusIndexBuilder};

/// Question/answer pair stored in the corpus
pub use vectorizer::entry::CorpusEntry;

/// Corpus statistics
/// It does not store question text; it only manages:
/// - The number of documents
/// - The number of documents in which each term appears
/// - The vocabulary order (a term's position is its vector dimension)
pub use vectorizer::corpus::Corpus;

/// Term Frequency structure
/// Counts term occurrences within one text.
/// Used as base data for TF (Term Frequency) calculation.
pub use vectorizer::token::TermFrequency;

/// Tokenizer
/// The single tokenization policy used for questions and queries.
pub use vectorizer::tokenizer::Tokenizer;

/// TF IDF Calculation Engine Trait
/// A trait that defines the behavior of a TF-IDF calculation engine.
///
/// By implementing this trait, you can plug different TF-IDF calculation strategies
/// into `CorpusIndex<E>`.
/// - `DefaultTFIDFEngine`: raw term count × smoothed IDF
/// - `SublinearTFIDFEngine`: `1 + ln(count)` × smoothed IDF
pub use vectorizer::tfidf::{DefaultTFIDFEngine, SublinearTFIDFEngine, TFIDFEngine};

/// Matcher and match results
/// - `Matcher`: finds the most similar corpus question for a query
/// - `MatchResult`: matched question, answer, score and entry index
/// - `ScanStrategy`: full scan or inverted-index shortlist
/// - `Hits` / `HitEntry`: raw per-entry scores
pub use vectorizer::evaluate::scoring::{
    find_match, HitEntry, Hits, MatchResult, Matcher, ScanStrategy,
};

/// Query projected into an index's term-weight space
pub use vectorizer::evaluate::query::Query;

/// Sparse vector
pub use utils::math::vector::ZeroSpVec;

/// Configuration
pub use config::MatcherConfig;

/// Dataset loading
pub use loader::{load_path, load_reader, load_str, LoadOptions, LoadReport, MalformedPolicy};
