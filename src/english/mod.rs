// WHY: English gender-fair language is lexical (singular "they", neutral job titles), so there is no
// delimiter to canonicalize. The same tables drive both directions; the reverse direction reads
// them from the generic side

pub mod agreement;
pub mod detector;
pub mod normalizer;
pub mod reverse_direction;
pub mod reverser;
pub mod tables;

use anyhow::Result;
use indexmap::IndexMap;
use regex::{NoExpand, Regex};
use std::sync::Arc;
use tracing::info;

use crate::patterns::{self, CaseExpansion};

pub use detector::EnglishDetector;
pub use normalizer::EnglishNormalizer;
pub use reverse_direction::GenderFairReverser;
pub use reverser::GenericFormReverser;

/// One case variant of a lexical substitution
#[derive(Debug, Clone)]
pub struct Substitution {
    pub key: String,
    pub pattern: Regex,
    pub replacement: String,
}

/// Whole-word substitutions, applied in table order
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    entries: Vec<Substitution>,
}

impl SubstitutionTable {
    /// Expand every pair into its case variants; a repeated key keeps its first position
    /// and takes the last replacement
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut expanded: IndexMap<String, String> = IndexMap::new();
        for (key, value) in pairs {
            for (key, value) in patterns::case_variants(key.as_ref(), value.as_ref(), CaseExpansion::Standard) {
                expanded.insert(key, value);
            }
        }
        let entries = expanded
            .into_iter()
            .map(|(key, replacement)| {
                let pattern = patterns::word_pattern(&key)?;
                Ok(Substitution { key, pattern, replacement })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Table read from the other side: every value maps back to its (last) key
    pub fn inverted(pairs: &[(&str, &str)]) -> Result<Self> {
        let mut inverted: IndexMap<&str, &str> = IndexMap::new();
        for &(key, value) in pairs {
            inverted.insert(value, key);
        }
        Self::new(inverted)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Substitution] {
        &self.entries
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.entries.iter().any(|entry| entry.pattern.is_match(text))
    }

    /// Apply every substitution in order
    pub fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();
        for entry in &self.entries {
            if out.contains(entry.key.as_str()) {
                out = entry.pattern.replace_all(&out, NoExpand(&entry.replacement)).into_owned();
            }
        }
        out
    }

    /// Rewrite a single token with the first substitution that matches it
    pub fn rewrite_token(&self, token: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|entry| entry.pattern.is_match(token))
            .map(|entry| entry.pattern.replace_all(token, NoExpand(&entry.replacement)).into_owned())
    }
}

/// Which side of the tables a lexicon reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// gender-fair -> generic male/female
    GenderFairToGeneric,
    /// generic male/female -> gender-fair
    GenericToGenderFair,
}

/// Pronoun and noun tables for one direction, compiled once
#[derive(Debug)]
pub struct EnglishLexicon {
    direction: Direction,
    pronouns_male: SubstitutionTable,
    pronouns_female: SubstitutionTable,
    nouns_male: SubstitutionTable,
    nouns_female: SubstitutionTable,
    irregular_verbs: &'static [(&'static str, &'static str)],
    excluded_words: Vec<String>,
}

impl EnglishLexicon {
    pub fn new(direction: Direction) -> Result<Self> {
        let lexicon = match direction {
            Direction::GenderFairToGeneric => {
                let excluded_words = tables::GENDERED_PRONOUNS
                    .iter()
                    .copied()
                    .chain(tables::NOUNS_MALE.iter().map(|(_, male)| *male))
                    .chain(tables::NOUNS_FEMALE.iter().map(|(_, female)| *female))
                    .map(str::to_string)
                    .collect();
                Self {
                    direction,
                    pronouns_male: SubstitutionTable::new(tables::PRONOUNS_MALE.iter().copied())?,
                    pronouns_female: SubstitutionTable::new(tables::PRONOUNS_FEMALE.iter().copied())?,
                    nouns_male: SubstitutionTable::new(tables::NOUNS_MALE.iter().copied())?,
                    nouns_female: SubstitutionTable::new(tables::NOUNS_FEMALE.iter().copied())?,
                    irregular_verbs: tables::IRREGULAR_VERBS,
                    excluded_words,
                }
            }
            Direction::GenericToGenderFair => Self {
                direction,
                pronouns_male: SubstitutionTable::inverted(tables::PRONOUNS_MALE)?,
                pronouns_female: SubstitutionTable::inverted(tables::PRONOUNS_FEMALE)?,
                nouns_male: SubstitutionTable::inverted(tables::NOUNS_MALE)?,
                nouns_female: SubstitutionTable::inverted(tables::NOUNS_FEMALE)?,
                irregular_verbs: tables::IRREGULAR_VERBS_PLURAL,
                excluded_words: Vec::new(),
            },
        };

        info!(
            "Compiled English lexicon ({:?}): {} pronoun and {} noun substitutions",
            direction,
            lexicon.pronouns_male.len() + lexicon.pronouns_female.len(),
            lexicon.nouns_male.len() + lexicon.nouns_female.len()
        );
        Ok(lexicon)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains_gendered_pronoun(&self, text: &str) -> bool {
        self.pronouns_male.is_match(text) || self.pronouns_female.is_match(text)
    }

    pub fn contains_gendered_noun(&self, text: &str) -> bool {
        self.nouns_male.is_match(text) || self.nouns_female.is_match(text)
    }

    /// Nouns first, so multi-word titles are resolved before their pronouns
    pub fn rewrite_male(&self, text: &str) -> String {
        self.pronouns_male.rewrite(&self.nouns_male.rewrite(text))
    }

    pub fn rewrite_female(&self, text: &str) -> String {
        self.pronouns_female.rewrite(&self.nouns_female.rewrite(text))
    }

    /// Irregular verb form for a lowercase verb
    pub fn irregular_verb(&self, lowercase_verb: &str) -> Option<&'static str> {
        self.irregular_verbs
            .iter()
            .find(|(verb, _)| *verb == lowercase_verb)
            .map(|(_, form)| *form)
    }

    pub fn excluded_words(&self) -> &[String] {
        &self.excluded_words
    }
}

/// Gender-fair -> generic English: detector, ignore-policy normalizer and forward reverser
#[derive(Debug, Clone)]
pub struct EnglishEngine {
    lexicon: Arc<EnglishLexicon>,
    detector: EnglishDetector,
    normalizer: EnglishNormalizer,
    reverser: GenericFormReverser,
}

impl EnglishEngine {
    pub fn new() -> Result<Self> {
        let lexicon = Arc::new(EnglishLexicon::new(Direction::GenderFairToGeneric)?);
        let detector = EnglishDetector::new(Arc::clone(&lexicon));
        Ok(Self {
            normalizer: EnglishNormalizer::ignoring_gendered_pronouns(detector.clone())?,
            reverser: GenericFormReverser::new(Arc::clone(&lexicon), detector.clone()),
            detector,
            lexicon,
        })
    }

    pub fn lexicon(&self) -> &EnglishLexicon {
        &self.lexicon
    }

    pub fn detector(&self) -> &EnglishDetector {
        &self.detector
    }

    pub fn normalizer(&self) -> &EnglishNormalizer {
        &self.normalizer
    }

    pub fn reverser(&self) -> &GenericFormReverser {
        &self.reverser
    }
}

/// Generic -> gender-fair English
#[derive(Debug, Clone)]
pub struct EnglishReverseEngine {
    lexicon: Arc<EnglishLexicon>,
    detector: EnglishDetector,
    normalizer: EnglishNormalizer,
    reverser: GenderFairReverser,
}

impl EnglishReverseEngine {
    pub fn new() -> Result<Self> {
        let lexicon = Arc::new(EnglishLexicon::new(Direction::GenericToGenderFair)?);
        let detector = EnglishDetector::new(Arc::clone(&lexicon));
        Ok(Self {
            normalizer: EnglishNormalizer::ignoring_contractions(detector.clone())?,
            reverser: GenderFairReverser::new(Arc::clone(&lexicon), detector.clone())?,
            detector,
            lexicon,
        })
    }

    pub fn lexicon(&self) -> &EnglishLexicon {
        &self.lexicon
    }

    pub fn detector(&self) -> &EnglishDetector {
        &self.detector
    }

    pub fn normalizer(&self) -> &EnglishNormalizer {
        &self.normalizer
    }

    pub fn reverser(&self) -> &GenderFairReverser {
        &self.reverser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_table_preserves_case() {
        let table = SubstitutionTable::new(tables::PRONOUNS_MALE.iter().copied()).unwrap();
        assert_eq!(table.rewrite("They said they would bring their own."), "He said he would bring his own.");
        assert_eq!(table.rewrite("THEY ARE HERE"), "HE ARE HERE");
        assert_eq!(table.rewrite("Is it theirs?"), "Is it his?");
    }

    #[test]
    fn test_inverted_table_keeps_last_key() {
        let table = SubstitutionTable::inverted(tables::PRONOUNS_MALE).unwrap();
        assert_eq!(table.rewrite_token("his").as_deref(), Some("theirs"));
        assert_eq!(table.rewrite_token("He").as_deref(), Some("They"));
        assert_eq!(table.rewrite_token("table"), None);
    }

    #[test]
    fn test_multi_word_nouns() {
        let lexicon = EnglishLexicon::new(Direction::GenderFairToGeneric).unwrap();
        assert_eq!(
            lexicon.rewrite_female("The police officers and their mail carrier."),
            "The policewomen and her postwoman."
        );
        assert_eq!(lexicon.rewrite_male("Mail carriers rest."), "Postmen rest.");
    }

    #[test]
    fn test_lexicon_directions() {
        let forward = EnglishLexicon::new(Direction::GenderFairToGeneric).unwrap();
        assert_eq!(forward.irregular_verb("are"), Some("is"));
        assert!(forward.excluded_words().iter().any(|w| w == "fireman"));

        let reverse = EnglishLexicon::new(Direction::GenericToGenderFair).unwrap();
        assert_eq!(reverse.irregular_verb("is"), Some("are"));
        assert!(reverse.excluded_words().is_empty());
        assert_eq!(reverse.rewrite_male("The fireman lost his helmet."), "The firefighter lost theirs helmet.");
    }
}
