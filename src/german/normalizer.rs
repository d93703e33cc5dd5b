// WHY: Every gender-fair spelling is rewritten to the single configured delimiter
// Plural forms run before singular ones, otherwise "_in" would eat the start of "_innen"

use regex::{Captures, NoExpand, Regex};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

use super::{GermanDetector, GermanPatterns};
use crate::engine::Normalization;

#[derive(Debug, Clone)]
pub struct GermanNormalizer {
    patterns: Arc<GermanPatterns>,
    detector: GermanDetector,
}

impl GermanNormalizer {
    pub fn new(patterns: Arc<GermanPatterns>, detector: GermanDetector) -> Self {
        Self { patterns, detector }
    }

    pub fn normalize(&self, sentence: &str) -> Normalization {
        let sentence = self.patterns.noun_dash.replace_all(sentence, "/innen");

        if !self.detector.contains_gendered_form(&sentence) {
            return Normalization::plain(sentence.into_owned());
        }

        let normalized = self.map_pronouns(&sentence);
        let normalized = self.map_nouns(&normalized);
        let normalized = self.map_adjectives(&normalized);
        if normalized != sentence {
            debug!("Normalized {:?} -> {:?}", sentence, normalized);
        }
        Normalization::gender_fair(normalized)
    }

    /// "ein/e" -> "ein*e"
    fn map_pronouns(&self, sentence: &str) -> String {
        let delimiter = self.patterns.delimiter();
        let mut out = sentence.to_string();
        for pair in self.patterns.pronoun_pairs() {
            if !out.contains(pair.key.as_str()) {
                continue;
            }
            let canonical = format!("{}{}{}", pair.key, delimiter, pair.value);
            out = replace_literal(&pair.pattern, &out, &canonical);
        }
        out
    }

    /// "Student_in" -> "Student*in", "StudentInnen" -> "Student*innen"
    fn map_nouns(&self, sentence: &str) -> String {
        if !sentence.contains("in") && !sentence.contains("In") {
            return sentence.to_string();
        }
        let patterns = &*self.patterns;
        let delimiter = patterns.delimiter();
        let plural = format!("{delimiter}innen");
        let singular = format!("{delimiter}in");

        let mut out = sentence.to_string();
        for pattern in [&patterns.gap_plural, &patterns.slash_plural, &patterns.star_plural] {
            out = replace_literal(pattern, &out, &plural);
        }
        out = patterns
            .binnen_i_plural
            .replace_all(&out, |caps: &Captures| format!("{}{}", &caps[1], plural))
            .into_owned();
        for form in patterns.plural_pair_forms() {
            out = form.replace_all(&out, delimiter);
        }

        for pattern in [&patterns.gap_singular, &patterns.slash_singular, &patterns.star_singular] {
            out = replace_literal(pattern, &out, &singular);
        }
        out = self.map_binnen_i_singular(&out, &singular);
        for form in patterns.singular_pair_forms() {
            out = form.replace_all(&out, delimiter);
        }
        out
    }

    fn map_binnen_i_singular(&self, sentence: &str, singular: &str) -> String {
        let mut out = String::with_capacity(sentence.len());
        let mut last = 0;
        for caps in self.patterns.binnen_i_singular_stems(sentence) {
            let (Some(whole), Some(stem)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&sentence[last..whole.start()]);
            out.push_str(stem.as_str());
            out.push_str(singular);
            last = whole.end();
        }
        out.push_str(&sentence[last..]);
        out
    }

    /// "neue/r" -> "neue*r", "neue/n" -> "neue*n"
    fn map_adjectives(&self, sentence: &str) -> String {
        let delimiter = self.patterns.delimiter();
        let out = replace_literal(&self.patterns.adjective_nominative, sentence, &format!("e{delimiter}r"));
        replace_literal(&self.patterns.adjective_accusative, &out, &format!("e{delimiter}n"))
    }
}

fn replace_literal(pattern: &Regex, text: &str, replacement: &str) -> String {
    match pattern.replace_all(text, NoExpand(replacement)) {
        Cow::Borrowed(_) => text.to_string(),
        Cow::Owned(replaced) => replaced,
    }
}
