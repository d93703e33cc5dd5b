// WHY: Abbreviations end in a period but never end a sentence
// A boundary candidate whose last word is listed here is skipped

use std::collections::HashSet;

/// Titles that precede a name, e.g. "Dr. Weber", "Prof. Schmidt"
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr.", "Hr.", "Fr.", "Frl.", "Dipl.", "Ing.",
];

/// Running-text abbreviations common in German and English corpora
pub const TEXT_ABBREVIATIONS: &[&str] = &[
    "z.B.", "Z.B.", "bzw.", "ca.", "vgl.", "Vgl.", "usw.", "u.a.", "d.h.", "D.h.", "Nr.", "St.", "Str.",
    "etc.", "vs.", "e.g.", "i.e.", "a.m.", "p.m.", "No.", "Abs.", "Bd.", "Jh.", "evtl.", "ggf.", "inkl.",
];

/// Characters stripped from the last word before lookup
fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2018}' | '\u{2019}')
}

pub struct AbbreviationChecker {
    title_abbreviations: HashSet<&'static str>,
    text_abbreviations: HashSet<&'static str>,
}

impl AbbreviationChecker {
    pub fn new() -> Self {
        Self {
            title_abbreviations: TITLE_ABBREVIATIONS.iter().copied().collect(),
            text_abbreviations: TEXT_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    pub fn is_title_abbreviation(&self, word: &str) -> bool {
        self.title_abbreviations.contains(word)
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.is_title_abbreviation(word) || self.text_abbreviations.contains(word)
    }

    /// Check whether the last word of `text` is a known abbreviation
    pub fn ends_with_abbreviation(&self, text: &str) -> bool {
        text.split_whitespace()
            .last()
            .map(|word| word.trim_start_matches(is_quote))
            .is_some_and(|word| self.is_abbreviation(word))
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    static SHARED_CHECKER: OnceLock<AbbreviationChecker> = OnceLock::new();

    fn get_checker() -> &'static AbbreviationChecker {
        SHARED_CHECKER.get_or_init(AbbreviationChecker::new)
    }

    #[test]
    fn test_title_and_text_abbreviations() {
        let checker = get_checker();
        for abbr in ["Dr.", "Prof.", "Hr.", "Mrs."] {
            assert!(checker.is_title_abbreviation(abbr), "{abbr} should be a title");
        }
        for abbr in ["z.B.", "bzw.", "usw.", "etc."] {
            assert!(checker.is_abbreviation(abbr), "{abbr} should be an abbreviation");
            assert!(!checker.is_title_abbreviation(abbr));
        }
        assert!(!checker.is_abbreviation("Haus."));
    }

    #[test]
    fn test_ends_with_abbreviation() {
        let checker = get_checker();
        let cases = [
            ("Wir treffen Dr.", true),
            ("Obst, Gemüse usw.", true),
            ("Er sagte „z.B.", true),
            ("Das ist ein Satz.", false),
            ("", false),
        ];
        for (text, expected) in cases {
            assert_eq!(checker.ends_with_abbreviation(text), expected, "text: {text:?}");
        }
    }
}
