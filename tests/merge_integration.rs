// Merging canonical sentences with their round-trip translations
// WHY: Every resolution tier and the whole-sentence fallback are exercised through the engine

#[path = "integration/mod.rs"]
mod integration;

use gfr_rewriter::config::{ConfigError, EngineConfig, Language};
use gfr_rewriter::engine::Engine;
use integration::engine;

#[test]
fn test_exact_and_close_matches() {
    let engine = engine(Language::German);
    assert_eq!(engine.merge("Student*innen", "Studenten").unwrap(), "Studenten");
    assert_eq!(
        engine.merge("Die Lehrer*innen kommen.", "Die Lehrer kommen morgen.").unwrap(),
        "Die Lehrer kommen."
    );
}

#[test]
fn test_inflected_round_trip_token_is_merged() {
    let engine = engine(Language::German);
    assert_eq!(
        engine.merge("Alle Lehrer*innen kommen heute.", "Alle Lehrerinnen erscheinen heute.").unwrap(),
        "Alle Lehrerinnen kommen heute."
    );
}

#[test]
fn test_fallback_returns_round_trip() {
    let engine = engine(Language::German);
    let round_trip = "Die Katze schläft.";
    assert_eq!(engine.merge("Student*innen", round_trip).unwrap(), round_trip);
}

#[test]
fn test_later_failure_discards_earlier_merges() {
    let engine = engine(Language::German);
    let round_trip = "Die Lehrer sprechen mit allen.";
    assert_eq!(
        engine.merge("Die Lehrer*innen sprechen mit Schüler*innen.", round_trip).unwrap(),
        round_trip
    );
}

#[test]
fn test_unmarked_sentence_is_kept() {
    let engine = engine(Language::German);
    assert_eq!(engine.merge("Der Hund bellt.", "The dog barks.").unwrap(), "Der Hund bellt.");
}

#[test]
fn test_merge_uses_configured_delimiter() {
    let engine = Engine::from_config(&EngineConfig::new(Language::German).with_delimiter("_")).unwrap();
    assert_eq!(engine.merge("Die Lehrer_innen kommen.", "Die Lehrer kommen.").unwrap(), "Die Lehrer kommen.");
}

#[test]
fn test_merge_is_german_only() {
    for language in [Language::English, Language::EnglishReverse] {
        assert_eq!(
            engine(language).merge("They run.", "They run."),
            Err(ConfigError::MergeUnsupported(language))
        );
    }
}
