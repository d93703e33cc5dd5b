// WHY: A round-trip translation loses the gender-fair markers but often keeps the word itself
// Each marked token is resolved against the round-trip tokens: left part, right part, closest match
// If any marked token cannot be resolved the whole round-trip sentence is returned instead

use std::sync::Arc;
use similar::TextDiff;
use tracing::debug;

use super::GermanPatterns;

/// Minimum similarity for a round-trip token to stand in for a marked token
pub const CLOSE_MATCH_CUTOFF: f64 = 0.6;

#[derive(Debug, Clone)]
pub struct GermanMerger {
    patterns: Arc<GermanPatterns>,
}

impl GermanMerger {
    pub fn new(patterns: Arc<GermanPatterns>) -> Self {
        Self { patterns }
    }

    pub fn merge(&self, sentence: &str, round_trip: &str) -> String {
        let delimiter = self.patterns.delimiter();
        let round_trip_tokens: Vec<&str> = round_trip.split_whitespace().collect();
        let mut merged = sentence.to_string();

        for token in sentence.split_whitespace() {
            if !token.contains(delimiter) {
                continue;
            }
            let mut parts = token.split(delimiter);
            let left = parts.next().unwrap_or_default();
            let right = parts.next().unwrap_or_default();

            let replacement = if round_trip_tokens.contains(&left) {
                left.to_string()
            } else if right.chars().count() > 1
                && right != "in"
                && right != "innen"
                && round_trip_tokens.contains(&right)
            {
                right.to_string()
            } else {
                let bare = self.patterns.marker.replace_all(token, "");
                match closest_match(&bare, &round_trip_tokens) {
                    Some(best) => best.to_string(),
                    None => {
                        debug!("No round-trip evidence for {:?}, keeping round-trip sentence", token);
                        return round_trip.to_string();
                    }
                }
            };

            let needle = strip_parens(token);
            if !needle.is_empty() {
                merged = merged.replace(needle, strip_parens(&replacement));
            }
        }
        merged
    }
}

fn strip_parens(text: &str) -> &str {
    text.trim_matches(|c| c == '(' || c == ')')
}

/// Share of matching characters, `2 * matches / (len(a) + len(b))`
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio())
}

/// Most similar candidate at or above the cutoff; ties go to the lexicographically larger token
pub fn closest_match<'a>(word: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|candidate| (similarity_ratio(word, candidate), *candidate))
        .filter(|(score, _)| *score >= CLOSE_MATCH_CUTOFF)
        .max_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate)
}
