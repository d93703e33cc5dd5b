// WHY: One closed variant per language, selected once from the configuration
// Each variant composes its own detector, normalizer and reverser or merger over shared tables

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::SyntaxAnalyzer;
use crate::config::{ConfigError, EngineConfig, Language, ReverseApproach};
use crate::english::{EnglishEngine, EnglishReverseEngine, GenderFairReverser, GenericFormReverser};
use crate::german::{self, GermanEngine, GermanMerger};

/// Result of normalizing one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalization {
    /// `None` when the sentence hit an ignore rule and must be skipped
    pub text: Option<String>,
    pub is_gender_fair: bool,
}

impl Normalization {
    pub fn plain(text: String) -> Self {
        Self { text: Some(text), is_gender_fair: false }
    }

    pub fn gender_fair(text: String) -> Self {
        Self { text: Some(text), is_gender_fair: true }
    }

    pub fn ignored() -> Self {
        Self { text: None, is_gender_fair: false }
    }

    pub fn is_ignored(&self) -> bool {
        self.text.is_none()
    }
}

/// The four sentences a rule-based reversal yields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReversalOutcome {
    /// Source side of the copy row
    pub source: String,
    /// Target side shared by every row of this sentence
    pub canonical: String,
    pub female: String,
    pub male: String,
}

impl ReversalOutcome {
    /// Nothing to reverse: the canonical sentence stands in for both generic forms
    pub fn unchanged(source: &str, canonical: &str) -> Self {
        Self {
            source: source.to_string(),
            canonical: canonical.to_string(),
            female: canonical.to_string(),
            male: canonical.to_string(),
        }
    }
}

/// Rule-based reverser of whichever direction the language runs in
#[derive(Debug, Clone, Copy)]
pub enum RuleBasedReverser<'a> {
    /// gender-fair -> generic
    GenericForm(&'a GenericFormReverser),
    /// generic -> gender-fair
    GenderFair(&'a GenderFairReverser),
}

impl RuleBasedReverser<'_> {
    pub fn reverse<R: Rng + ?Sized>(
        &self,
        original: &str,
        canonical: &str,
        analyzer: &dyn SyntaxAnalyzer,
        rng: &mut R,
    ) -> Result<ReversalOutcome> {
        match self {
            RuleBasedReverser::GenericForm(reverser) => reverser.reverse(original, canonical, analyzer),
            RuleBasedReverser::GenderFair(reverser) => reverser.reverse(original, analyzer, rng),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Engine {
    German(GermanEngine),
    English(EnglishEngine),
    EnglishReverse(EnglishReverseEngine),
}

impl Engine {
    /// Validate the configuration and compile the language's tables
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let engine = match config.language {
            Language::German => Engine::German(GermanEngine::new(&config.delimiter)?),
            Language::English => Engine::English(EnglishEngine::new()?),
            Language::EnglishReverse => Engine::EnglishReverse(EnglishReverseEngine::new()?),
        };
        info!(
            "Engine ready: language={} approach={} delimiter={:?}",
            config.language, config.approach, config.delimiter
        );
        Ok(engine)
    }

    pub fn language(&self) -> Language {
        match self {
            Engine::German(_) => Language::German,
            Engine::English(_) => Language::English,
            Engine::EnglishReverse(_) => Language::EnglishReverse,
        }
    }

    pub fn detect(&self, sentence: &str) -> bool {
        match self {
            Engine::German(engine) => engine.detector().contains_gendered_form(sentence),
            Engine::English(engine) => engine.detector().contains_gendered_form(sentence),
            Engine::EnglishReverse(engine) => engine.detector().contains_gendered_form(sentence),
        }
    }

    pub fn normalize(&self, sentence: &str) -> Normalization {
        match self {
            Engine::German(engine) => engine.normalizer().normalize(sentence),
            Engine::English(engine) => engine.normalizer().normalize(sentence),
            Engine::EnglishReverse(engine) => engine.normalizer().normalize(sentence),
        }
    }

    pub fn rule_based_reverser(&self) -> Option<RuleBasedReverser<'_>> {
        match self {
            Engine::German(_) => None,
            Engine::English(engine) => Some(RuleBasedReverser::GenericForm(engine.reverser())),
            Engine::EnglishReverse(engine) => Some(RuleBasedReverser::GenderFair(engine.reverser())),
        }
    }

    /// Rule-based reversal; German generic forms only come from round-trip translation
    pub fn reverse<R: Rng + ?Sized>(
        &self,
        original: &str,
        canonical: &str,
        analyzer: &dyn SyntaxAnalyzer,
        rng: &mut R,
    ) -> Result<ReversalOutcome> {
        let reverser = self.rule_based_reverser().ok_or(ConfigError::UnsupportedApproach {
            language: self.language(),
            approach: ReverseApproach::RuleBased,
        })?;
        reverser.reverse(original, canonical, analyzer, rng)
    }

    pub fn merger(&self) -> Option<&GermanMerger> {
        match self {
            Engine::German(engine) => Some(engine.merger()),
            Engine::English(_) | Engine::EnglishReverse(_) => None,
        }
    }

    /// Repair a canonical sentence from its round-trip translation
    pub fn merge(&self, sentence: &str, round_trip: &str) -> Result<String, ConfigError> {
        self.merger()
            .map(|merger| merger.merge(sentence, round_trip))
            .ok_or(ConfigError::MergeUnsupported(self.language()))
    }

    /// Words that keep a non-gender-fair sentence out of the copy set
    pub fn excluded_words(&self) -> Vec<String> {
        match self {
            Engine::German(_) => german::excluded_words(),
            Engine::English(engine) => engine.lexicon().excluded_words().to_vec(),
            Engine::EnglishReverse(engine) => engine.lexicon().excluded_words().to_vec(),
        }
    }
}
