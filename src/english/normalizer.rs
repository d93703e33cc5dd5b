// WHY: English needs no canonical delimiter; normalization only applies the ignore policy
// and reports detection. Ignored sentences come back without text

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use super::{tables, EnglishDetector};
use crate::engine::Normalization;

#[derive(Debug, Clone)]
pub struct EnglishNormalizer {
    detector: EnglishDetector,
    /// Matched against the lowercased sentence
    ignore: Regex,
}

impl EnglishNormalizer {
    /// A gendered pronoun next to singular "they" cannot be attributed reliably
    pub fn ignoring_gendered_pronouns(detector: EnglishDetector) -> Result<Self> {
        let pattern = format!(r"\b({})\b", tables::GENDERED_PRONOUNS.join("|"));
        Self::with_ignore_pattern(detector, &pattern)
    }

    /// "he's"/"she's" is ambiguous between "is" and "has"
    pub fn ignoring_contractions(detector: EnglishDetector) -> Result<Self> {
        Self::with_ignore_pattern(detector, r"(he|she)('|’)s\b")
    }

    fn with_ignore_pattern(detector: EnglishDetector, pattern: &str) -> Result<Self> {
        let ignore = Regex::new(pattern).with_context(|| format!("invalid ignore pattern {pattern:?}"))?;
        Ok(Self { detector, ignore })
    }

    pub fn normalize(&self, sentence: &str) -> Normalization {
        if self.ignore.is_match(&sentence.to_lowercase()) {
            debug!("Ignoring ambiguous sentence {:?}", sentence);
            return Normalization::ignored();
        }
        if self.detector.contains_gendered_form(sentence) {
            Normalization::gender_fair(sentence.to_string())
        } else {
            Normalization::plain(sentence.to_string())
        }
    }
}
