/// One stored question with its paired answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub question: String,
    pub answer: String,
}

impl CorpusEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl<Q, A> From<(Q, A)> for CorpusEntry
where
    Q: Into<String>,
    A: Into<String>,
{
    fn from((question, answer): (Q, A)) -> Self {
        Self::new(question, answer)
    }
}
