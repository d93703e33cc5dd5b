use std::sync::Arc;

use super::GermanPatterns;

/// Reports whether a German sentence contains any gender-fair pronoun, noun or adjective form
#[derive(Debug, Clone)]
pub struct GermanDetector {
    patterns: Arc<GermanPatterns>,
}

impl GermanDetector {
    pub fn new(patterns: Arc<GermanPatterns>) -> Self {
        Self { patterns }
    }

    /// Short-circuits on the first match; cheap checks run first
    pub fn contains_gendered_form(&self, sentence: &str) -> bool {
        self.contains_gendered_pronoun(sentence)
            || self.contains_gendered_noun(sentence)
            || self.contains_gendered_adjective(sentence)
    }

    pub fn contains_gendered_pronoun(&self, sentence: &str) -> bool {
        self.patterns
            .pronoun_pairs()
            .iter()
            .filter(|pair| sentence.contains(pair.key.as_str()))
            .any(|pair| pair.pattern.is_match(sentence))
    }

    pub fn contains_gendered_noun(&self, sentence: &str) -> bool {
        // "Student*innen", "Lehrer/in"; " oder in" is ordinary text
        let delimited = self
            .patterns
            .delimiters()
            .iter()
            .filter(|d| d.as_str() != " oder " && sentence.contains(d.as_str()))
            .any(|d| sentence.contains(&format!("{d}in")));
        if delimited {
            return true;
        }

        if self.patterns.binnen_i_plural.is_match(sentence)
            || self.patterns.binnen_i_singular_stems(sentence).next().is_some()
        {
            return true;
        }

        self.patterns
            .plural_pair_forms()
            .iter()
            .chain(self.patterns.singular_pair_forms().iter())
            .any(|form| form.is_match(sentence))
    }

    pub fn contains_gendered_adjective(&self, sentence: &str) -> bool {
        self.patterns.adjective_nominative.is_match(sentence)
            || self.patterns.adjective_accusative.is_match(sentence)
    }
}
