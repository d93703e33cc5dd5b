// WHY: Gender-fair -> generic. The verbs agreeing with singular "they" are singularized first,
// then the lexical tables resolve every pronoun and noun to one gender

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::sync::Arc;

use super::agreement::{agreement_replacements, GrammaticalNumber};
use super::{EnglishDetector, EnglishLexicon};
use crate::analysis::SyntaxAnalyzer;
use crate::engine::ReversalOutcome;

const GENDER_FAIR_SUBJECTS: &[&str] = &["they"];

#[derive(Debug, Clone)]
pub struct GenericFormReverser {
    lexicon: Arc<EnglishLexicon>,
    detector: EnglishDetector,
}

impl GenericFormReverser {
    pub fn new(lexicon: Arc<EnglishLexicon>, detector: EnglishDetector) -> Self {
        Self { lexicon, detector }
    }

    /// Returns (agreement-fixed sentence, canonical, generic female, generic male)
    pub fn reverse(&self, original: &str, canonical: &str, analyzer: &dyn SyntaxAnalyzer) -> Result<ReversalOutcome> {
        if !self.detector.contains_gendered_form(canonical) {
            return Ok(ReversalOutcome::unchanged(original, canonical));
        }

        let analysis = analyzer
            .analyze(canonical)
            .with_context(|| format!("failed to analyze {canonical:?}"))?;
        let replacements =
            agreement_replacements(&analysis, GENDER_FAIR_SUBJECTS, GrammaticalNumber::Singular, &self.lexicon);
        let agreement_fixed = analysis.render(|index, _| replacements.get(&index).cloned().map(Cow::Owned));

        Ok(ReversalOutcome {
            female: self.lexicon.rewrite_female(&agreement_fixed),
            male: self.lexicon.rewrite_male(&agreement_fixed),
            source: agreement_fixed,
            canonical: canonical.to_string(),
        })
    }
}
