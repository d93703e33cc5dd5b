// WHY: Coordinated pair forms ("Lehrerinnen und Lehrer", "Student oder Studentin") repeat the
// same stem on both sides of the connector. The regex engine has no backreferences, so the
// stem comparison is done here by scanning candidate stems left to right

use std::ops::Range;

/// Which gendered form comes first in the coordination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOrder {
    /// "Studentinnen und Studenten"
    FemaleFirst,
    /// "Studenten und Studentinnen"
    MaleFirst,
}

/// A coordinated pair-form family
#[derive(Debug, Clone, Copy)]
pub struct PairForm {
    order: PairOrder,
    /// Feminine ending attached to the shared stem ("innen" or "in")
    suffix: &'static str,
    connectors: &'static [&'static str],
    /// Optional masculine endings after the stem, tried in order
    male_endings: &'static [&'static str],
}

/// Location of one pair form inside a sentence (byte offsets)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMatch {
    pub span: Range<usize>,
    pub stem: Range<usize>,
}

const PLURAL_CONNECTORS: &[&str] = &["und"];
const SINGULAR_CONNECTORS: &[&str] = &["oder", "bzw", "bzw."];

impl PairForm {
    pub const PLURAL_FEMALE_FIRST: PairForm = PairForm {
        order: PairOrder::FemaleFirst,
        suffix: "innen",
        connectors: PLURAL_CONNECTORS,
        male_endings: &["en", "e", "n"],
    };

    pub const PLURAL_MALE_FIRST: PairForm = PairForm {
        order: PairOrder::MaleFirst,
        suffix: "innen",
        connectors: PLURAL_CONNECTORS,
        male_endings: &[],
    };

    pub const SINGULAR_FEMALE_FIRST: PairForm = PairForm {
        order: PairOrder::FemaleFirst,
        suffix: "in",
        connectors: SINGULAR_CONNECTORS,
        male_endings: &["en", "s"],
    };

    pub const SINGULAR_MALE_FIRST: PairForm = PairForm {
        order: PairOrder::MaleFirst,
        suffix: "in",
        connectors: SINGULAR_CONNECTORS,
        male_endings: &[],
    };

    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find_from(text, 0).is_some()
    }

    /// Leftmost pair form starting at or after byte offset `from`
    pub fn find_from(&self, text: &str, from: usize) -> Option<PairMatch> {
        for word in word_spans(text) {
            if word.end <= from {
                continue;
            }
            let connector_ends: Vec<usize> = self
                .connectors
                .iter()
                .filter_map(|connector| connector_end(text, word.end, connector))
                .collect();
            if connector_ends.is_empty() {
                continue;
            }
            for (offset, _) in text[word.clone()].char_indices() {
                let start = word.start + offset;
                if start < from {
                    continue;
                }
                for &rest in &connector_ends {
                    let found = match self.order {
                        PairOrder::FemaleFirst => self.match_female_first(text, start, word.end, rest),
                        PairOrder::MaleFirst => self.match_male_first(text, start, word.end, rest),
                    };
                    if found.is_some() {
                        return found;
                    }
                }
            }
        }
        None
    }

    /// Rewrite every pair form to `stem<delimiter><suffix>`
    pub fn replace_all(&self, text: &str, delimiter: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        while let Some(found) = self.find_from(text, last) {
            out.push_str(&text[last..found.span.start]);
            out.push_str(&text[found.stem.clone()]);
            out.push_str(delimiter);
            out.push_str(self.suffix);
            last = found.span.end;
        }
        out.push_str(&text[last..]);
        out
    }

    fn match_female_first(&self, text: &str, start: usize, word_end: usize, rest: usize) -> Option<PairMatch> {
        let stem = text[start..word_end].strip_suffix(self.suffix)?;
        if stem.chars().count() < 2 {
            return None;
        }
        for second in dash_variants(text, rest) {
            if !text[second..].starts_with(stem) {
                continue;
            }
            let after_stem = second + stem.len();
            if text[after_stem..].starts_with(self.suffix) {
                continue;
            }
            let ending = self
                .male_endings
                .iter()
                .find(|ending| text[after_stem..].starts_with(*ending))
                .map_or(0, |ending| ending.len());
            return Some(PairMatch {
                span: start..after_stem + ending,
                stem: start..start + stem.len(),
            });
        }
        None
    }

    fn match_male_first(&self, text: &str, start: usize, word_end: usize, rest: usize) -> Option<PairMatch> {
        let first = &text[start..word_end];
        if first.chars().count() < 2 {
            return None;
        }
        // WHY: greedy stem, longest candidate first
        let stem_ends: Vec<usize> = first
            .char_indices()
            .map(|(i, _)| i)
            .skip(2)
            .chain(std::iter::once(first.len()))
            .collect();
        for &stem_len in stem_ends.iter().rev() {
            let stem = &first[..stem_len];
            if text[start + stem_len..].starts_with(self.suffix) {
                continue;
            }
            for second in dash_variants(text, rest) {
                let after_stem = second + stem.len();
                if text[second..].starts_with(stem) && text[after_stem..].starts_with(self.suffix) {
                    return Some(PairMatch {
                        span: start..after_stem + self.suffix.len(),
                        stem: start..start + stem_len,
                    });
                }
            }
        }
        None
    }
}

/// Byte ranges of maximal non-whitespace runs
fn word_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, ch) in text.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push(s..text.len());
    }
    spans
}

/// Offset right after `" <connector> "` if it follows `word_end`
fn connector_end(text: &str, word_end: usize, connector: &str) -> Option<usize> {
    let rest = text[word_end..].strip_prefix(' ')?;
    let rest = rest.strip_prefix(connector)?;
    rest.strip_prefix(' ')?;
    Some(word_end + 1 + connector.len() + 1)
}

/// The second conjunct may repeat the stem with a leading dash ("Lehrer und -innen")
fn dash_variants(text: &str, rest: usize) -> Vec<usize> {
    if text[rest..].starts_with('-') {
        vec![rest + 1, rest]
    } else {
        vec![rest]
    }
}
