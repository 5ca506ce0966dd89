use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("corpus has no usable entries")]
    EmptyCorpus,

    #[error("corpus entry {index} has an empty question")]
    EmptyQuestion { index: usize },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("dataset header is missing required column `{0}`")]
    MissingColumn(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
