// WHY: Turns a monolingual corpus into labeled (source, target) pairs
// The dedup set lives here, owned by one build run rather than the process

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub mod builder;
pub mod readers;
pub mod stats;
pub mod writer;

pub use builder::{BuildStats, ParallelCorpusBuilder};
pub use readers::{load_seed_dictionary, CorpusReader, InputFormat, ReadStats, ReaderConfig};
pub use stats::RunStats;
pub use writer::CorpusWriter;

/// Why a row was emitted; decides which file pair it lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "copy-no-gf")]
    CopyNoGenderFair,
    #[serde(rename = "copy-gf")]
    CopyGenderFair,
    #[serde(rename = "gendered-male")]
    GenderedMale,
    #[serde(rename = "gendered-female")]
    GenderedFemale,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::CopyNoGenderFair => "copy-no-gf",
            Label::CopyGenderFair => "copy-gf",
            Label::GenderedMale => "gendered-male",
            Label::GenderedFemale => "gendered-female",
        }
    }

    /// Everything except plain copies of non-gender-fair text goes to the gender-fair pair
    pub fn is_gender_fair(self) -> bool {
        self != Label::CopyNoGenderFair
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRow {
    pub source: String,
    pub target: String,
    pub label: Label,
}

impl CorpusRow {
    pub fn new(source: impl Into<String>, target: impl Into<String>, label: Label) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label,
        }
    }
}

/// Exact-text membership of every sentence a run has already processed
#[derive(Debug, Default)]
pub struct SeenSentences {
    seen: HashSet<String>,
}

impl SeenSentences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `sentence` is offered
    pub fn insert(&mut self, sentence: &str) -> bool {
        if self.seen.contains(sentence) {
            return false;
        }
        self.seen.insert(sentence.to_string())
    }

    pub fn contains(&self, sentence: &str) -> bool {
        self.seen.contains(sentence)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
