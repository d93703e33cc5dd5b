// WHY: Generic -> gender-fair. "he"/"she" subjects become "they", so their verbs are pluralized.
// "her" and "his" are ambiguous on the surface and are resolved from the parse.
// The same parse also yields the opposite-gender sentence used as a contrastive source

use anyhow::{Context, Result};
use rand::Rng;
use regex::Regex;
use std::borrow::Cow;
use std::sync::Arc;

use super::agreement::{agreement_replacements, GrammaticalNumber};
use super::{tables, EnglishDetector, EnglishLexicon, SubstitutionTable};
use crate::analysis::{AnalyzedSentence, DependencyLabel, PartOfSpeech, SyntaxAnalyzer};
use crate::engine::ReversalOutcome;
use crate::patterns::match_case;

const GENERIC_SUBJECTS: &[&str] = &["he", "she"];

/// Draws are uniform over 1..=10; these two draws contract, everything else leaves the text alone
const ASCII_APOSTROPHE_DRAW: u32 = 1;
const TYPOGRAPHIC_APOSTROPHE_DRAW: u32 = 2;

/// "they have" <-> "he has" style pair that may be contracted together
#[derive(Debug, Clone)]
struct Contraction {
    gender_fair: Regex,
    generic: Regex,
    gender_fair_suffix: &'static str,
}

impl Contraction {
    fn new(gender_fair_verb: &str, generic_verb: &str, gender_fair_suffix: &'static str) -> Result<Self> {
        let gender_fair = format!(r"\b(They|they|THEY) {gender_fair_verb}\b");
        let generic = format!(r"\b(She|she|SHE|He|he|HE) {generic_verb}\b");
        Ok(Self {
            gender_fair: Regex::new(&gender_fair).with_context(|| format!("invalid pattern {gender_fair:?}"))?,
            generic: Regex::new(&generic).with_context(|| format!("invalid pattern {generic:?}"))?,
            gender_fair_suffix,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GenderFairReverser {
    lexicon: Arc<EnglishLexicon>,
    detector: EnglishDetector,
    forms_to_change: SubstitutionTable,
    contractions: Vec<Contraction>,
}

impl GenderFairReverser {
    pub fn new(lexicon: Arc<EnglishLexicon>, detector: EnglishDetector) -> Result<Self> {
        Ok(Self {
            lexicon,
            detector,
            forms_to_change: SubstitutionTable::new(tables::FORMS_TO_CHANGE.iter().copied())?,
            contractions: vec![Contraction::new("have", "has", "ve")?, Contraction::new("are", "is", "re")?],
        })
    }

    /// Returns (gender-fair, gender-fair, original, opposite-gender form)
    /// Contractions are drawn from `rng` and applied to every output that has the matching verb
    pub fn reverse<R: Rng + ?Sized>(
        &self,
        original: &str,
        analyzer: &dyn SyntaxAnalyzer,
        rng: &mut R,
    ) -> Result<ReversalOutcome> {
        if !self.detector.contains_gendered_form(original) {
            return Ok(ReversalOutcome::unchanged(original, original));
        }

        let analysis = analyzer
            .analyze(original)
            .with_context(|| format!("failed to analyze {original:?}"))?;

        let plural = self.pluralize(&analysis);
        let mut texts = ContractionTargets {
            gender_fair: self.lexicon.rewrite_female(&self.lexicon.rewrite_male(&plural)),
            opposite: self.swap_gender(&analysis),
            original: original.to_string(),
        };

        for contraction in &self.contractions {
            if !contraction.gender_fair.is_match(&texts.gender_fair) {
                continue;
            }
            let apostrophe = match rng.gen_range(1..=10u32) {
                ASCII_APOSTROPHE_DRAW => '\'',
                TYPOGRAPHIC_APOSTROPHE_DRAW => '’',
                _ => continue,
            };
            texts = texts.contract(contraction, apostrophe);
        }

        Ok(ReversalOutcome {
            source: texts.gender_fair.clone(),
            canonical: texts.gender_fair,
            female: texts.original,
            male: texts.opposite,
        })
    }

    /// Pluralize the agreeing verbs and resolve "her"/"his" to their "they" forms
    fn pluralize(&self, analysis: &AnalyzedSentence) -> String {
        let verbs = agreement_replacements(analysis, GENERIC_SUBJECTS, GrammaticalNumber::Plural, &self.lexicon);
        analysis.render(|index, token| {
            let form = match token.lowercase().as_str() {
                "her" if token.dep == DependencyLabel::Poss => "their",
                "her" => "them",
                "his" if analysis.head_of(index).pos != PartOfSpeech::Noun => "theirs",
                "his" => "their",
                _ => return verbs.get(&index).cloned().map(Cow::Owned),
            };
            Some(Cow::Owned(match_case(&token.text, form)))
        })
    }

    /// Swap every gendered pronoun for its opposite-gender counterpart
    fn swap_gender(&self, analysis: &AnalyzedSentence) -> String {
        analysis.render(|index, token| {
            let form = match token.lowercase().as_str() {
                "her" if token.dep == DependencyLabel::Poss => "his",
                "her" => "him",
                "his" if analysis.head_of(index).pos != PartOfSpeech::Noun => "hers",
                "his" => "her",
                _ => return self.forms_to_change.rewrite_token(&token.text).map(Cow::Owned),
            };
            Some(Cow::Owned(match_case(&token.text, form)))
        })
    }
}

/// The three outputs that must stay aligned when a contraction is introduced
#[derive(Debug, Clone, PartialEq, Eq)]
struct ContractionTargets {
    gender_fair: String,
    opposite: String,
    original: String,
}

impl ContractionTargets {
    fn contract(self, contraction: &Contraction, apostrophe: char) -> Self {
        let gender_fair = format!("${{1}}{apostrophe}{}", contraction.gender_fair_suffix);
        let generic = format!("${{1}}{apostrophe}s");
        Self {
            gender_fair: contraction.gender_fair.replace_all(&self.gender_fair, gender_fair.as_str()).into_owned(),
            opposite: contraction.generic.replace_all(&self.opposite, generic.as_str()).into_owned(),
            original: contraction.generic.replace_all(&self.original, generic.as_str()).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{DependencyLabel as Dep, PartOfSpeech as Pos, PreparsedAnalyzer, Token};
    use crate::english::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn reverser() -> GenderFairReverser {
        let lexicon = Arc::new(EnglishLexicon::new(Direction::GenericToGenderFair).unwrap());
        GenderFairReverser::new(Arc::clone(&lexicon), EnglishDetector::new(lexicon)).unwrap()
    }

    fn analyzer() -> PreparsedAnalyzer {
        let mut analyzer = PreparsedAnalyzer::new();
        analyzer
            .insert(
                "She lost her keys.",
                vec![
                    Token::new("She", Pos::Pron, Dep::Nsubj, 1).followed_by(" "),
                    Token::new("lost", Pos::Verb, Dep::Root, 1).followed_by(" ").with_feature("Tense", "Past"),
                    Token::new("her", Pos::Pron, Dep::Poss, 3).followed_by(" "),
                    Token::new("keys", Pos::Noun, Dep::Other, 1),
                    Token::new(".", Pos::Punct, Dep::Other, 1),
                ],
            )
            .unwrap();
        analyzer
            .insert(
                "The chairman watches him and the book is his.",
                vec![
                    Token::new("The", Pos::Det, Dep::Other, 1).followed_by(" "),
                    Token::new("chairman", Pos::Noun, Dep::Nsubj, 2).followed_by(" "),
                    Token::new("watches", Pos::Verb, Dep::Root, 2).followed_by(" ").with_feature("Tense", "Pres"),
                    Token::new("him", Pos::Pron, Dep::Other, 2).followed_by(" "),
                    Token::new("and", Pos::Cconj, Dep::Other, 2).followed_by(" "),
                    Token::new("the", Pos::Det, Dep::Other, 6).followed_by(" "),
                    Token::new("book", Pos::Noun, Dep::Nsubj, 7).followed_by(" "),
                    Token::new("is", Pos::Aux, Dep::Conj, 2).followed_by(" ").with_feature("Number", "Sing"),
                    Token::new("his", Pos::Pron, Dep::Other, 7),
                    Token::new(".", Pos::Punct, Dep::Other, 2),
                ],
            )
            .unwrap();
        analyzer
            .insert(
                "He is tired.",
                vec![
                    Token::new("He", Pos::Pron, Dep::Nsubj, 1).followed_by(" "),
                    Token::new("is", Pos::Aux, Dep::Root, 1)
                        .followed_by(" ")
                        .with_feature("Number", "Sing")
                        .with_feature("Tense", "Pres"),
                    Token::new("tired", Pos::Adj, Dep::Other, 1),
                    Token::new(".", Pos::Punct, Dep::Other, 1),
                ],
            )
            .unwrap();
        analyzer
    }

    #[test]
    fn test_possessive_and_contrastive_forms() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let outcome = reverser().reverse("She lost her keys.", &analyzer(), &mut rng).unwrap();
        assert_eq!(outcome.canonical, "They lost their keys.");
        assert_eq!(outcome.source, outcome.canonical);
        assert_eq!(outcome.female, "She lost her keys.");
        assert_eq!(outcome.male, "He lost his keys.");
    }

    #[test]
    fn test_nouns_and_standalone_possessive() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let sentence = "The chairman watches him and the book is his.";
        let outcome = reverser().reverse(sentence, &analyzer(), &mut rng).unwrap();
        assert_eq!(outcome.canonical, "The chairperson watches them and the book is theirs.");
        assert_eq!(outcome.male, "The chairman watches her and the book is hers.");
    }

    #[test]
    fn test_copula_is_pluralized_and_contractions_stay_aligned() {
        let reverser = reverser();
        let analyzer = analyzer();
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = reverser.reverse("He is tired.", &analyzer, &mut rng).unwrap();
            match outcome.canonical.as_str() {
                "They are tired." => {
                    assert_eq!(outcome.female, "He is tired.");
                    assert_eq!(outcome.male, "She is tired.");
                }
                "They're tired." => {
                    assert_eq!(outcome.female, "He's tired.");
                    assert_eq!(outcome.male, "She's tired.");
                }
                "They’re tired." => {
                    assert_eq!(outcome.female, "He’s tired.");
                    assert_eq!(outcome.male, "She’s tired.");
                }
                other => panic!("unexpected gender-fair form {other:?}"),
            }
        }
    }

    #[test]
    fn test_contraction_rewrites_all_targets() {
        let reverser = reverser();
        let targets = ContractionTargets {
            gender_fair: "They have left.".to_string(),
            opposite: "She has left.".to_string(),
            original: "He has left.".to_string(),
        };
        let contracted = targets.contract(&reverser.contractions[0], '\'');
        assert_eq!(contracted.gender_fair, "They've left.");
        assert_eq!(contracted.opposite, "She's left.");
        assert_eq!(contracted.original, "He's left.");
    }

    #[test]
    fn test_generic_free_sentence_is_unchanged() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = reverser().reverse("It rains.", &PreparsedAnalyzer::new(), &mut rng).unwrap();
        assert_eq!(outcome, ReversalOutcome::unchanged("It rains.", "It rains."));
    }
}
