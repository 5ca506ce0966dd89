use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{corpus::Corpus, token::TermFrequency},
};

pub trait TFIDFEngine {
    /// IDFベクトルを生成するメソッド
    /// # Arguments
    /// * `corpus` - コーパス
    /// # Returns
    /// * `Vec<f64>` - IDFベクトル (語彙の位置順)
    fn idf_vec(corpus: &Corpus) -> Vec<f64>;

    /// 文書内の出現回数からTFを計算する
    fn tf(count: u32) -> f64;

    /// TF-IDFベクトルを生成するメソッド
    /// Terms missing from the vocabulary are ignored.
    /// The result is L2-normalized; an empty result stays the zero vector.
    fn tf_idf_vec(freq: &TermFrequency, corpus: &Corpus, idf_vec: &[f64]) -> ZeroSpVec<f64> {
        let pairs = freq
            .iter()
            .filter_map(|(term, count)| {
                let pos = corpus.term_position(term)?;
                let idf = idf_vec.get(pos).copied()?;
                Some((pos, Self::tf(count) * idf))
            })
            .collect();
        let mut vec = ZeroSpVec::from_unsorted(corpus.vocab_size(), pairs);
        vec.l2_normalize();
        vec
    }
}

/// smoothed IDF shared by the engines:
/// `ln((1 + N) / (1 + df)) + 1`
#[inline]
pub fn smoothed_idf(doc_num: u64, doc_freq: u64) -> f64 {
    ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// デフォルトのTF-IDFエンジン
/// raw term count × smoothed IDF
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    fn idf_vec(corpus: &Corpus) -> Vec<f64> {
        let doc_num = corpus.doc_num();
        corpus
            .iter()
            .map(|(_, doc_freq)| smoothed_idf(doc_num, doc_freq))
            .collect()
    }

    #[inline]
    fn tf(count: u32) -> f64 {
        count as f64
    }
}

/// `1 + ln(count)` に置き換えたエンジン
/// Repeated terms inside one question weigh less than with raw counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SublinearTFIDFEngine;

impl TFIDFEngine for SublinearTFIDFEngine {
    fn idf_vec(corpus: &Corpus) -> Vec<f64> {
        DefaultTFIDFEngine::idf_vec(corpus)
    }

    #[inline]
    fn tf(count: u32) -> f64 {
        if count == 0 {
            return 0.0;
        }
        1.0 + (count as f64).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus_of(docs: &[&[&str]]) -> Corpus {
        let mut corpus = Corpus::new();
        for doc in docs {
            let mut freq = TermFrequency::new();
            freq.add_terms(doc);
            corpus.add_doc(&freq);
        }
        corpus
    }

    #[test]
    fn smoothed_idf_matches_formula() {
        let corpus = corpus_of(&[&["what", "is"], &["how", "is"]]);
        let idf = DefaultTFIDFEngine::idf_vec(&corpus);
        // what: df=1, is: df=2, how: df=1, N=2
        assert!((idf[0] - ((3.0_f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
        assert!((idf[1] - 1.0).abs() < 1e-12);
        assert!((idf[2] - idf[0]).abs() < 1e-12);
    }

    #[test]
    fn tf_idf_vec_is_unit_and_ignores_unknown_terms() {
        let corpus = corpus_of(&[&["what", "is", "twitter"], &["reset", "password"]]);
        let idf = DefaultTFIDFEngine::idf_vec(&corpus);
        let mut query = TermFrequency::new();
        query.add_terms(&["password", "banana", "password"]);
        let vec = DefaultTFIDFEngine::tf_idf_vec(&query, &corpus, &idf);
        assert_eq!(vec.nnz(), 1);
        assert_eq!(vec.len(), corpus.vocab_size());
        assert!((vec.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_only_query_is_zero_vector() {
        let corpus = corpus_of(&[&["what", "is", "twitter"]]);
        let idf = DefaultTFIDFEngine::idf_vec(&corpus);
        let mut query = TermFrequency::new();
        query.add_terms(&["banana", "spaceship"]);
        let vec = DefaultTFIDFEngine::tf_idf_vec(&query, &corpus, &idf);
        assert_eq!(vec.nnz(), 0);
        assert_eq!(vec.norm(), 0.0);
    }

    #[test]
    fn sublinear_tf_damps_repeats() {
        assert_eq!(SublinearTFIDFEngine::tf(0), 0.0);
        assert_eq!(SublinearTFIDFEngine::tf(1), 1.0);
        assert!(SublinearTFIDFEngine::tf(4) < DefaultTFIDFEngine::tf(4));
    }
}
