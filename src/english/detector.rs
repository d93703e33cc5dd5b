use std::sync::Arc;

use super::EnglishLexicon;

/// Reports whether an English sentence contains a pronoun or noun from the lexicon's source side
#[derive(Debug, Clone)]
pub struct EnglishDetector {
    lexicon: Arc<EnglishLexicon>,
}

impl EnglishDetector {
    pub fn new(lexicon: Arc<EnglishLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn contains_gendered_form(&self, sentence: &str) -> bool {
        self.lexicon.contains_gendered_pronoun(sentence) || self.lexicon.contains_gendered_noun(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::english::Direction;

    #[test]
    fn test_forward_detection() {
        let detector = EnglishDetector::new(Arc::new(EnglishLexicon::new(Direction::GenderFairToGeneric).unwrap()));
        assert!(detector.contains_gendered_form("They are a teacher."));
        assert!(detector.contains_gendered_form("Ask the chairperson."));
        assert!(!detector.contains_gendered_form("The weather is nice."));
        assert!(!detector.contains_gendered_form("Theyre is not a word."));
    }

    #[test]
    fn test_reverse_detection() {
        let detector = EnglishDetector::new(Arc::new(EnglishLexicon::new(Direction::GenericToGenderFair).unwrap()));
        assert!(detector.contains_gendered_form("She is a teacher."));
        assert!(detector.contains_gendered_form("Ask the chairman."));
        assert!(!detector.contains_gendered_form("They are a teacher."));
    }
}
