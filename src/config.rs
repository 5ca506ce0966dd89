//! Configuration loader.
//!
//! Uses Figment to merge built-in defaults, a TOML file and `QA_MATCHER_*`
//! environment variables, in that order.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    loader::{LoadOptions, MalformedPolicy},
    vectorizer::{evaluate::scoring::ScanStrategy, tokenizer::Tokenizer},
};

pub const DEFAULT_CONFIG_FILE: &str = "qa-matcher.toml";
pub const ENV_PREFIX: &str = "QA_MATCHER_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub dataset_path: PathBuf,
    pub question_column: String,
    pub answer_column: String,
    pub delimiter: char,
    pub malformed_policy: MalformedPolicy,
    pub lowercase: bool,
    pub min_term_len: usize,
    /// use `1 + ln(tf)` instead of the raw count
    pub sublinear_tf: bool,
    pub scan_strategy: ScanStrategy,
    /// matches scoring below this are reported as low confidence
    pub min_score: Option<f64>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        let load = LoadOptions::default();
        let tokenizer = Tokenizer::default();
        Self {
            dataset_path: PathBuf::from("twitter_questions_and_answers.csv"),
            question_column: load.question_column,
            answer_column: load.answer_column,
            delimiter: load.delimiter,
            malformed_policy: load.malformed_policy,
            lowercase: tokenizer.lowercase(),
            min_term_len: tokenizer.min_term_len(),
            sublinear_tf: false,
            scan_strategy: ScanStrategy::default(),
            min_score: None,
        }
    }
}

impl MatcherConfig {
    /// Defaults, then `path` (or `qa-matcher.toml` when `None`), then env.
    /// A missing TOML file is not an error.
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(MatcherConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_figment(Self::figment(path))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot be used.
    /// Call again after overriding fields by hand.
    pub fn validate(&self) -> Result<()> {
        if self.question_column.trim().is_empty() || self.answer_column.trim().is_empty() {
            return Err(Error::Config("column names must not be empty".to_string()));
        }
        if self.delimiter == '"' || self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(Error::Config(format!(
                "unusable delimiter {:?}",
                self.delimiter
            )));
        }
        if let Some(min) = self.min_score {
            if !(0.0..=1.0).contains(&min) {
                return Err(Error::Config(format!("min_score {} is outside [0, 1]", min)));
            }
        }
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            question_column: self.question_column.clone(),
            answer_column: self.answer_column.clone(),
            delimiter: self.delimiter,
            malformed_policy: self.malformed_policy,
        }
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new()
            .with_lowercase(self.lowercase)
            .with_min_term_len(self.min_term_len)
    }
}
