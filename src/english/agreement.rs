// WHY: Replacing "they" by "he" must also change "are" to "is"; the dependency parse tells
// which verbs agree with the pronoun subject. Both reversal directions share this logic and
// differ only in the target number, the irregular table and the suffix rule

use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeMap;

use super::EnglishLexicon;
use crate::analysis::{AnalyzedSentence, DependencyLabel, PartOfSpeech};
use crate::patterns::match_case;

/// Grammatical number the agreeing verbs are moved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammaticalNumber {
    Singular,
    Plural,
}

impl GrammaticalNumber {
    fn morph_value(self) -> &'static str {
        match self {
            GrammaticalNumber::Singular => "Sing",
            GrammaticalNumber::Plural => "Plur",
        }
    }

    /// The only past-tense form that changes with number: (from, to)
    fn past_copula(self) -> (&'static str, &'static str) {
        match self {
            GrammaticalNumber::Singular => ("were", "was"),
            GrammaticalNumber::Plural => ("was", "were"),
        }
    }

    /// Regular present-tense inflection of `verb` into this number
    pub fn inflect_present(self, verb: &str) -> String {
        match self {
            GrammaticalNumber::Singular => singularize_present(verb),
            GrammaticalNumber::Plural => pluralize_present(verb),
        }
    }
}

/// "run" -> "runs", "try" -> "tries", "watch" -> "watches"
pub fn singularize_present(verb: &str) -> String {
    if let Some(stem) = verb.strip_suffix('y') {
        return format!("{stem}ies");
    }
    if ["sh", "ch", "x", "z", "s"].iter().any(|ending| verb.ends_with(ending)) {
        return format!("{verb}es");
    }
    format!("{verb}s")
}

/// "runs" -> "run", "tries" -> "try", "watches" -> "watch"
pub fn pluralize_present(verb: &str) -> String {
    if let Some(stem) = verb.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if ["shes", "ches", "xes", "zes", "ses"].iter().any(|ending| verb.ends_with(ending)) {
        return verb[..verb.len() - 2].to_string();
    }
    verb.trim_end_matches('s').to_string()
}

fn is_subject(sentence: &AnalyzedSentence, index: usize) -> bool {
    let token = &sentence.tokens()[index];
    matches!(token.dep, DependencyLabel::Nsubj | DependencyLabel::Nsubjpass)
        && matches!(sentence.head_of(index).pos, PartOfSpeech::Verb | PartOfSpeech::Aux)
}

/// Verbs whose subject is one of `subjects` (lowercase), their conjuncts, and the
/// auxiliaries attached to each of them, in discovery order
pub fn verb_candidates(sentence: &AnalyzedSentence, subjects: &[&str]) -> IndexMap<usize, Vec<usize>> {
    let tokens = sentence.tokens();
    let mut verbs: IndexSet<usize> = IndexSet::new();

    for (index, token) in tokens.iter().enumerate() {
        if subjects.contains(&token.lowercase().as_str()) && is_subject(sentence, index) {
            verbs.insert(token.head);
        }
    }

    // WHY: single pass; a conjunct found here can license a later conjunct of its own
    for (index, token) in tokens.iter().enumerate() {
        if token.dep == DependencyLabel::Conj && verbs.contains(&token.head) {
            verbs.insert(index);
        }
    }

    let mut auxiliaries: IndexMap<usize, Vec<usize>> = verbs.iter().map(|&verb| (verb, Vec::new())).collect();
    for (index, token) in tokens.iter().enumerate() {
        // the root points at itself and is never its own auxiliary
        if token.pos == PartOfSpeech::Aux && token.head != index {
            if let Some(attached) = auxiliaries.get_mut(&token.head) {
                attached.push(index);
            }
        }
    }
    auxiliaries
}

/// Surface replacements (token index -> new text) that move every agreeing verb to `target`
pub fn agreement_replacements(
    sentence: &AnalyzedSentence,
    subjects: &[&str],
    target: GrammaticalNumber,
    lexicon: &EnglishLexicon,
) -> BTreeMap<usize, String> {
    let tokens = sentence.tokens();
    let mut replacements: BTreeMap<usize, Option<String>> = BTreeMap::new();

    for (verb_index, auxiliaries) in verb_candidates(sentence, subjects) {
        let verb = &tokens[verb_index];
        if verb.has_feature("Number", target.morph_value()) {
            replacements.insert(verb_index, None);
            continue;
        }

        if auxiliaries.is_empty() {
            let lowercase = verb.lowercase();
            let replacement = if verb.has_feature("Tense", "Past") {
                let (from, to) = target.past_copula();
                (lowercase == from).then(|| match_case(&verb.text, to))
            } else if verb.has_feature("Tense", "Pres") || verb.text.ends_with('s') {
                // WHY: conjoined verbs are often mis-tagged; a trailing "s" still marks present tense
                let form = match lexicon.irregular_verb(&lowercase) {
                    Some(irregular) => irregular.to_string(),
                    None => target.inflect_present(&verb.text),
                };
                Some(match_case(&verb.text, &form))
            } else {
                continue;
            };
            replacements.insert(verb_index, replacement);
        } else {
            // the auxiliaries carry the agreement
            replacements.insert(verb_index, None);
            for auxiliary_index in auxiliaries {
                let auxiliary = &tokens[auxiliary_index];
                let replacement = lexicon
                    .irregular_verb(&auxiliary.lowercase())
                    .map(|irregular| match_case(&auxiliary.text, irregular));
                replacements.insert(auxiliary_index, replacement);
            }
        }
    }

    replacements
        .into_iter()
        .filter_map(|(index, replacement)| replacement.map(|text| (index, text)))
        .collect()
}
