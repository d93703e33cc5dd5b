// WHY: German gender-fair forms are recognized purely from surface patterns
// All patterns are compiled once per engine and shared by the detector, normalizer and merger

pub mod detector;
pub mod merger;
pub mod normalizer;
pub mod pair_forms;
pub mod tables;

use anyhow::{Context, Result};
use indexmap::IndexSet;
use regex::Regex;
use std::sync::Arc;
use tracing::info;

use crate::patterns::{self, CaseExpansion};
use pair_forms::PairForm;

pub use detector::GermanDetector;
pub use merger::GermanMerger;
pub use normalizer::GermanNormalizer;

/// A pronoun pair with the pattern that finds it under any delimiter spelling
#[derive(Debug)]
pub struct PronounPair {
    pub key: String,
    pub value: String,
    pub pattern: Regex,
}

/// Compiled German pattern tables, read-only after construction
#[derive(Debug)]
pub struct GermanPatterns {
    delimiter: String,
    delimiters: Vec<String>,
    pronoun_pairs: Vec<PronounPair>,
    pub(crate) binnen_i_plural: Regex,
    pub(crate) binnen_i_singular: Regex,
    pub(crate) gap_plural: Regex,
    pub(crate) gap_singular: Regex,
    pub(crate) slash_plural: Regex,
    pub(crate) slash_singular: Regex,
    pub(crate) star_plural: Regex,
    pub(crate) star_singular: Regex,
    pub(crate) noun_dash: Regex,
    pub(crate) adjective_nominative: Regex,
    pub(crate) adjective_accusative: Regex,
    /// `<delimiter>`, `<delimiter>in` or `<delimiter>innen`
    pub(crate) marker: Regex,
}

impl GermanPatterns {
    pub fn new(delimiter: &str) -> Result<Self> {
        let mut delimiters: Vec<String> = tables::DELIMITER_SPELLINGS.iter().map(|d| d.to_string()).collect();
        if !delimiters.iter().any(|d| d == delimiter) {
            delimiters.push(delimiter.to_string());
        }
        let alternation = patterns::delimiter_alternation(&delimiters);

        // WHY: masculine-first tables before feminine-first ones; duplicates keep their first position
        let mut pairs: IndexSet<(String, String)> = IndexSet::new();
        for table in tables::PRONOUN_TABLES_MF.iter().chain(tables::PRONOUN_TABLES_FF) {
            for (key, value) in table.iter() {
                pairs.extend(patterns::case_variants(key, value, CaseExpansion::WithCapitalizedKey));
            }
        }
        let pronoun_pairs = pairs
            .into_iter()
            .map(|(key, value)| {
                let pattern = patterns::delimited_pair_pattern(&key, &value, &alternation)?;
                Ok(PronounPair { key, value, pattern })
            })
            .collect::<Result<Vec<_>>>()?;

        let compile = |pattern: &str| Regex::new(pattern).with_context(|| format!("invalid noun pattern {pattern:?}"));

        let patterns = Self {
            binnen_i_plural: compile(r"(\w+)Innen")?,
            binnen_i_singular: compile(r"\b(\w+)In\b")?,
            gap_plural: compile(r"_innen")?,
            gap_singular: compile(r"_in\b")?,
            slash_plural: compile(r" ?/ ?innen")?,
            slash_singular: compile(r" ?/ ?in\b")?,
            star_plural: compile(r"\*innen")?,
            star_singular: compile(r"\*in")?,
            noun_dash: compile(r"-/innen")?,
            adjective_nominative: compile(&format!(r"e{alternation}r\b"))?,
            adjective_accusative: compile(&format!(r"e{alternation}n\b"))?,
            marker: compile(&format!("{}(?:in(?:nen)?)?", regex::escape(delimiter)))?,
            delimiter: delimiter.to_string(),
            delimiters,
            pronoun_pairs,
        };

        info!(
            "Compiled German patterns: {} pronoun pairs, {} delimiter spellings, delimiter {:?}",
            patterns.pronoun_pairs.len(),
            patterns.delimiters.len(),
            patterns.delimiter
        );
        Ok(patterns)
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    pub fn pronoun_pairs(&self) -> &[PronounPair] {
        &self.pronoun_pairs
    }

    /// Plural pair forms, in rewrite order
    pub(crate) fn plural_pair_forms(&self) -> [PairForm; 2] {
        [PairForm::PLURAL_FEMALE_FIRST, PairForm::PLURAL_MALE_FIRST]
    }

    /// Singular pair forms, in rewrite order
    pub(crate) fn singular_pair_forms(&self) -> [PairForm; 2] {
        [PairForm::SINGULAR_FEMALE_FIRST, PairForm::SINGULAR_MALE_FIRST]
    }

    /// Binnen-I singular matches whose stem is not a known exception ("LinkedIn")
    pub(crate) fn binnen_i_singular_stems<'r, 't>(&'r self, text: &'t str) -> impl Iterator<Item = regex::Captures<'t>> + use<'r, 't> {
        self.binnen_i_singular.captures_iter(text).filter(|caps| {
            let stem = caps.get(1).map_or("", |m| m.as_str());
            !tables::BINNEN_I_EXCEPTIONS.iter().any(|exception| stem.starts_with(exception))
        })
    }
}

/// German words whose presence disqualifies a sentence from the non-gender-fair copy set
pub fn excluded_words() -> Vec<String> {
    let mut words: IndexSet<String> = IndexSet::new();
    for (key, _) in tables::PERS_PRONOUNS_MF.iter().chain(tables::PERS_PRONOUNS_FF) {
        words.insert(key.to_string());
    }
    words.into_iter().collect()
}

/// Detector, normalizer and merger sharing one set of compiled patterns
#[derive(Debug, Clone)]
pub struct GermanEngine {
    detector: GermanDetector,
    normalizer: GermanNormalizer,
    merger: GermanMerger,
}

impl GermanEngine {
    pub fn new(delimiter: &str) -> Result<Self> {
        let patterns = Arc::new(GermanPatterns::new(delimiter)?);
        let detector = GermanDetector::new(Arc::clone(&patterns));
        Ok(Self {
            normalizer: GermanNormalizer::new(Arc::clone(&patterns), detector.clone()),
            merger: GermanMerger::new(Arc::clone(&patterns)),
            detector,
        })
    }

    pub fn detector(&self) -> &GermanDetector {
        &self.detector
    }

    pub fn normalizer(&self) -> &GermanNormalizer {
        &self.normalizer
    }

    pub fn merger(&self) -> &GermanMerger {
        &self.merger
    }
}
