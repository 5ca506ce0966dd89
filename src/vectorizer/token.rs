use indexmap::IndexMap;

/// TermFrequency 構造体
/// termの出現頻度を管理するための構造体です
/// termの出現回数をカウントし、TF-IDFの計算に使います
///
/// Terms keep their first-seen order, which is what fixes vocabulary
/// positions when the corpus is scanned.
///
/// # Examples
/// ```
/// use qa_matcher::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_terms(&["reset", "password", "reset"]);
/// assert_eq!(freq.term_count("reset"), 2);
/// assert_eq!(freq.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

/// Termの追加の実装
impl TermFrequency {
    /// 新しいTermFrequencyを作成するメソッド
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// termを追加する
    ///
    /// # Arguments
    /// * `term` - 追加するターム
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// 複数のtermを追加する
    ///
    /// # Arguments
    /// * `terms` - 追加するタームのスライス
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// 情報取得の実装
impl TermFrequency {
    /// 特定のtermの出現回数 (無ければ0)
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// 全termの出現回数の合計
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// ユニークなtermの数
    #[inline]
    pub fn len(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// `(term, count)` を初出順に返します
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let mut freq = TermFrequency::new();
        freq.add_terms(&["how", "do", "how"]).add_term("reset");
        assert_eq!(freq.term_count("how"), 2);
        assert_eq!(freq.term_count("do"), 1);
        assert_eq!(freq.term_count("missing"), 0);
        assert_eq!(freq.term_sum(), 4);
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn keeps_first_seen_order() {
        let mut freq = TermFrequency::new();
        freq.add_terms(&["b", "a", "b", "c"]);
        let terms: Vec<(&str, u32)> = freq.iter().collect();
        assert_eq!(terms, vec![("b", 2), ("a", 1), ("c", 1)]);
        assert!(TermFrequency::new().is_empty());
    }
}
