// WHY: Shared pattern-table machinery for every language variant
// Case expansion, delimiter alternation and case-preserving replacement live here so the
// per-language tables only have to list their lowercase pairs

use anyhow::{Context, Result};
use regex::Regex;

/// Uppercase the first character and keep the rest as-is ("ein" -> "Ein")
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character and lowercase the rest ("ARE" -> "Are")
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// True when every cased character is uppercase and at least one cased character exists
pub fn is_upper(word: &str) -> bool {
    let mut cased = false;
    for ch in word.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Title-case check: uppercase letters only start a cased run, lowercase letters only continue one
pub fn is_title(word: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;
    for ch in word.chars() {
        if ch.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if ch.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }
    cased
}

/// Give `replacement` the casing style of `original` (title, all-caps, or untouched)
pub fn match_case(original: &str, replacement: &str) -> String {
    if is_title(original) {
        capitalize(replacement)
    } else if is_upper(original) {
        replacement.to_uppercase()
    } else {
        replacement.to_string()
    }
}

/// Which case variants a pair table is expanded into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseExpansion {
    /// as-given, all-upper, capitalized-both
    Standard,
    /// Standard plus capitalized key with lowercase value ("Ein/e")
    WithCapitalizedKey,
}

/// Expand a (key, value) pair into its case variants, in table order
pub fn case_variants(key: &str, value: &str, expansion: CaseExpansion) -> Vec<(String, String)> {
    let mut variants = vec![
        (key.to_string(), value.to_string()),
        (key.to_uppercase(), value.to_uppercase()),
        (capitalize_first(key), capitalize_first(value)),
    ];
    if expansion == CaseExpansion::WithCapitalizedKey {
        variants.push((capitalize_first(key), value.to_string()));
    }
    variants
}

/// Non-capturing alternation over every delimiter spelling, longest spellings first
/// WHY: " / " must be tried before "/" or the surrounding spaces would never be consumed
pub fn delimiter_alternation<S: AsRef<str>>(delimiters: &[S]) -> String {
    let mut spellings: Vec<&str> = delimiters.iter().map(AsRef::as_ref).collect();
    spellings.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    spellings.dedup();
    let escaped: Vec<String> = spellings.iter().map(|d| regex::escape(d)).collect();
    format!("(?:{})", escaped.join("|"))
}

/// Compile `\b<literal>\b`
pub fn word_pattern(literal: &str) -> Result<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(literal));
    Regex::new(&pattern).with_context(|| format!("invalid word pattern for {literal:?}"))
}

/// Compile `\b<key><any delimiter><value>\b`
pub fn delimited_pair_pattern(key: &str, value: &str, delimiters: &str) -> Result<Regex> {
    let pattern = format!(
        r"\b{}{}{}\b",
        regex::escape(key),
        delimiters,
        regex::escape(value)
    );
    Regex::new(&pattern).with_context(|| format!("invalid pair pattern for {key:?}/{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_checks_follow_word_shape() {
        assert!(is_title("They"));
        assert!(!is_title("THEY"));
        assert!(!is_title("they"));
        assert!(is_title("I"));
        assert!(is_upper("THEY"));
        assert!(is_upper("I"));
        assert!(!is_upper("'re"));
        assert!(!is_title("'re"));
    }

    #[test]
    fn test_match_case() {
        assert_eq!(match_case("Are", "is"), "Is");
        assert_eq!(match_case("ARE", "is"), "IS");
        assert_eq!(match_case("are", "is"), "is");
        assert_eq!(match_case("’re", "’s"), "’s");
    }

    #[test]
    fn test_case_variants() {
        let standard = case_variants("member of congress", "congressman", CaseExpansion::Standard);
        assert_eq!(standard.len(), 3);
        assert_eq!(standard[2], ("Member of congress".to_string(), "Congressman".to_string()));

        let german = case_variants("ein", "e", CaseExpansion::WithCapitalizedKey);
        assert_eq!(german[1], ("EIN".to_string(), "E".to_string()));
        assert_eq!(german[3], ("Ein".to_string(), "e".to_string()));
    }

    #[test]
    fn test_delimited_pair_pattern_matches_all_spellings() {
        let alternation = delimiter_alternation(&["*", "/", " / ", " oder "]);
        let pattern = delimited_pair_pattern("ein", "e", &alternation).unwrap();
        assert!(pattern.is_match("ein*e Lehrer*in"));
        assert!(pattern.is_match("ein / e Lehrer*in"));
        assert!(pattern.is_match("ein oder e"));
        assert!(!pattern.is_match("eine Lehrerin"));
        assert!(!pattern.is_match("kein*e"));
    }
}
