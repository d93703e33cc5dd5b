// WHY: Language and reversal strategy are chosen once at startup
// Unsupported combinations are rejected here, before any corpus is read

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_DELIMITER: &str = "*";

/// Language variant; each one brings its own tables, normalizer and reverser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Language {
    /// German gender-fair spellings (star, gap, slash, Binnen-I, pair forms)
    #[serde(rename = "de")]
    #[value(name = "de")]
    German,
    /// English singular "they" and neutral nouns -> generic male/female
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
    /// English generic male/female -> singular "they"
    #[serde(rename = "en-fw")]
    #[value(name = "en-fw")]
    EnglishReverse,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
            Language::EnglishReverse => "en-fw",
        }
    }

    /// The only reversal strategy this language implements
    pub fn default_approach(self) -> ReverseApproach {
        match self {
            Language::German => ReverseApproach::RoundTrip,
            Language::English | Language::EnglishReverse => ReverseApproach::RuleBased,
        }
    }

    pub fn supports(self, approach: ReverseApproach) -> bool {
        self.default_approach() == approach
    }

    pub fn has_merger(self) -> bool {
        self == Language::German
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How generic male/female variants are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReverseApproach {
    /// Lexical tables plus parse-driven verb agreement
    RuleBased,
    /// External round-trip translation, repaired by the merger
    RoundTrip,
}

impl fmt::Display for ReverseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReverseApproach::RuleBased => f.write_str("rule-based"),
            ReverseApproach::RoundTrip => f.write_str("round-trip"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("reverse approach {approach} is not supported for language {language}")]
    UnsupportedApproach { language: Language, approach: ReverseApproach },
    #[error("no merger is available for language {0}")]
    MergeUnsupported(Language),
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
    #[error("the rule-based approach for language {0} needs sentence analyses (--analysis)")]
    AnalyzerRequired(Language),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub language: Language,
    /// Canonical delimiter every gender-fair spelling is rewritten to
    pub delimiter: String,
    pub approach: ReverseApproach,
}

impl EngineConfig {
    /// Config with the default delimiter and the language's own approach
    pub fn new(language: Language) -> Self {
        Self {
            language,
            delimiter: DEFAULT_DELIMITER.to_string(),
            approach: language.default_approach(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_approach(mut self, approach: ReverseApproach) -> Self {
        self.approach = approach;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        if !self.language.supports(self.approach) {
            return Err(ConfigError::UnsupportedApproach {
                language: self.language,
                approach: self.approach,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Language::German)
    }
}
