//! Dataset loading.
//!
//! Reads a delimited file with a header row naming the question and answer
//! columns and turns each data row into a [`CorpusEntry`]. Rows that lack
//! either field, or whose question is blank, are malformed; what happens to
//! them is decided by [`MalformedPolicy`].

pub mod record;

use std::{fs::File, io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    loader::record::{split_records, RawRecord},
    vectorizer::entry::CorpusEntry,
};

/// What to do with a row that breaks the dataset contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedPolicy {
    /// Fail the whole load at the first malformed row
    #[default]
    Reject,
    /// Drop the row, log a warning and keep going
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub question_column: String,
    pub answer_column: String,
    pub delimiter: char,
    pub malformed_policy: MalformedPolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            question_column: "Question".to_string(),
            answer_column: "Answer".to_string(),
            delimiter: ',',
            malformed_policy: MalformedPolicy::Reject,
        }
    }
}

/// Outcome of a load
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub entries: Vec<CorpusEntry>,
    /// lines of rows dropped under `MalformedPolicy::Skip`
    pub skipped_lines: Vec<usize>,
}

impl LoadReport {
    pub fn into_entries(self) -> Vec<CorpusEntry> {
        self.entries
    }
}

/// Column positions resolved from the header
struct ColumnMap {
    question: usize,
    answer: usize,
}

impl ColumnMap {
    fn from_header(header: &RawRecord, options: &LoadOptions) -> Result<Self> {
        let find = |name: &str| {
            header
                .fields
                .iter()
                .position(|col| col.trim_start_matches('\u{feff}').trim() == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };
        Ok(Self {
            question: find(&options.question_column)?,
            answer: find(&options.answer_column)?,
        })
    }

    fn entry(&self, record: &RawRecord) -> std::result::Result<CorpusEntry, String> {
        if record.unterminated {
            return Err("unterminated quoted field".to_string());
        }
        let needed = self.question.max(self.answer) + 1;
        if record.fields.len() < needed {
            return Err(format!(
                "expected at least {} fields, found {}",
                needed,
                record.fields.len()
            ));
        }
        let question = &record.fields[self.question];
        if question.trim().is_empty() {
            return Err("empty question".to_string());
        }
        Ok(CorpusEntry::new(
            question.as_str(),
            record.fields[self.answer].as_str(),
        ))
    }
}

/// Load a dataset file.
pub fn load_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let report = load_reader(file, options)?;
    tracing::info!(
        file = %path.display(),
        entries = report.entries.len(),
        skipped = report.skipped_lines.len(),
        "dataset loaded"
    );
    Ok(report)
}

/// Load a dataset from any reader (UTF-8 text).
pub fn load_reader(mut reader: impl Read, options: &LoadOptions) -> Result<LoadReport> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_str(&text, options)
}

/// Load a dataset already in memory.
pub fn load_str(text: &str, options: &LoadOptions) -> Result<LoadReport> {
    let mut records = split_records(text, options.delimiter)
        .into_iter()
        .filter(|r| !r.is_blank());

    let Some(header) = records.next() else {
        // no header at all: nothing to index
        return Ok(LoadReport::default());
    };
    let columns = ColumnMap::from_header(&header, options)?;

    let mut report = LoadReport::default();
    for record in records {
        match columns.entry(&record) {
            Ok(entry) => report.entries.push(entry),
            Err(reason) => match options.malformed_policy {
                MalformedPolicy::Reject => {
                    return Err(Error::MalformedRecord {
                        line: record.line,
                        reason,
                    })
                }
                MalformedPolicy::Skip => {
                    tracing::warn!(line = record.line, %reason, "skipping malformed record");
                    report.skipped_lines.push(record.line);
                }
            },
        }
    }
    Ok(report)
}
