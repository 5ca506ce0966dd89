use std::fmt::{self, Debug, Display};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vectorizer::{
    evaluate::query::Query,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    CorpusIndex,
};

/// How the matcher walks the corpus for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanStrategy {
    /// Score every entry
    #[default]
    FullScan,
    /// Score only entries sharing a term with the query
    /// Entries outside the shortlist would score 0 anyway
    InvertedIndex,
}

/// One scored corpus entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEntry {
    /// position in corpus order
    pub index: usize,
    /// cosine similarity
    pub score: f64,
}

/// Structure to store scores of one query, in ascending entry index order
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Highest score; on ties the lowest entry index wins.
    /// NaN scores are ignored.
    pub fn best(&self) -> Option<HitEntry> {
        let mut best: Option<HitEntry> = None;
        for hit in self.list.iter().filter(|h| !h.score.is_nan()) {
            match best {
                // ties go to the lower index
                Some(b) if hit.score > b.score || (hit.score == b.score && hit.index < b.index) => {
                    best = Some(*hit)
                }
                None => best = Some(*hit),
                _ => {}
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    #{}: {:.6}", hit.index, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|h| (h.index, h.score)))
                .finish()
        }
    }
}

/// The answer to one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub matched_question: String,
    pub matched_answer: String,
    /// cosine similarity in `[0, 1]`; 0 means no shared term
    pub score: f64,
    /// position of the matched entry in corpus order
    pub index: usize,
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matched Question: {}", self.matched_question)?;
        write!(f, "Answer: {}", self.matched_answer)
    }
}

/// Finds the closest corpus question for a query.
/// Holds no state besides the index reference, so one matcher can serve
/// any number of calls (and threads).
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a, E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    index: &'a CorpusIndex<E>,
    strategy: ScanStrategy,
}

impl<'a, E> Matcher<'a, E>
where
    E: TFIDFEngine,
{
    pub fn new(index: &'a CorpusIndex<E>) -> Self {
        Self::with_strategy(index, ScanStrategy::default())
    }

    pub fn with_strategy(index: &'a CorpusIndex<E>, strategy: ScanStrategy) -> Self {
        Self { index, strategy }
    }

    pub fn strategy(&self) -> ScanStrategy {
        self.strategy
    }

    pub fn index(&self) -> &'a CorpusIndex<E> {
        self.index
    }

    /// Similarity of the query against the entries the strategy visits.
    /// `FullScan` returns one hit per entry; `InvertedIndex` only the shortlist.
    pub fn scores(&self, query: &str) -> Hits {
        let query = Query::new(query, self.index);
        self.scores_for(&query)
    }

    fn scores_for(&self, query: &Query) -> Hits {
        let documents = self.index.documents();
        let list: Vec<HitEntry> = match self.strategy {
            ScanStrategy::FullScan => documents
                .par_iter()
                .enumerate()
                .map(|(index, doc)| HitEntry {
                    index,
                    score: query.vector.dot(doc),
                })
                .collect(),
            ScanStrategy::InvertedIndex => query
                .candidates(self.index)
                .into_iter()
                .map(|index| HitEntry {
                    index,
                    score: query.vector.dot(&documents[index]),
                })
                .collect(),
        };
        Hits::new(list)
    }

    /// Best match for `query`. Never fails: with no shared term the first
    /// entry is returned with score 0.
    pub fn find_match(&self, query: &str) -> MatchResult {
        let query = Query::new(query, self.index);
        let best = self
            .scores_for(&query)
            .best()
            .unwrap_or(HitEntry { index: 0, score: 0.0 });
        debug_assert!(best.index < self.index.len());

        let entry = &self.index.entries()[best.index];
        tracing::trace!(index = best.index, score = best.score, "query matched");
        MatchResult {
            matched_question: entry.question.clone(),
            matched_answer: entry.answer.clone(),
            score: best.score,
            index: best.index,
        }
    }
}

/// Best match for `query` in `index` with the default full scan.
pub fn find_match<E>(query: &str, index: &CorpusIndex<E>) -> MatchResult
where
    E: TFIDFEngine,
{
    Matcher::new(index).find_match(query)
}
