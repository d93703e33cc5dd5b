// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

use gfr_rewriter::analysis::{DependencyLabel as Dep, PartOfSpeech as Pos, PreparsedAnalyzer, Token};
use gfr_rewriter::config::{EngineConfig, Language};
use gfr_rewriter::engine::Engine;

/// Temporary directory holding corpus inputs and outputs for one test
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();
        Self { temp_dir, root_path }
    }

    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: impl AsRef<[u8]>) -> PathBuf {
        let file_path = self.root_path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Output prefix inside the fixture directory
    pub fn prefix(&self, name: &str) -> String {
        self.root_path.join(name).display().to_string()
    }

    pub fn read_lines(&self, path: impl AsRef<Path>) -> Vec<String> {
        fs::read_to_string(path)
            .expect("Failed to read output file")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

static GERMAN: OnceLock<Engine> = OnceLock::new();
static ENGLISH: OnceLock<Engine> = OnceLock::new();
static ENGLISH_REVERSE: OnceLock<Engine> = OnceLock::new();

// WHY: Compiling the pattern tables once per test binary keeps the suite fast
pub fn engine(language: Language) -> &'static Engine {
    let cell = match language {
        Language::German => &GERMAN,
        Language::English => &ENGLISH,
        Language::EnglishReverse => &ENGLISH_REVERSE,
    };
    cell.get_or_init(|| Engine::from_config(&EngineConfig::new(language)).expect("default config is valid"))
}

/// Space-separated tokens hanging off the first one, with no subject relations
pub fn flat_tokens(sentence: &str) -> Vec<Token> {
    let words: Vec<&str> = sentence.split(' ').collect();
    let last = words.len() - 1;
    words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let dep = if index == 0 { Dep::Root } else { Dep::Other };
            let token = Token::new(*word, Pos::X, dep, 0);
            if index == last {
                token
            } else {
                token.followed_by(" ")
            }
        })
        .collect()
}

/// Analyses for the English sentences used across the integration tests
pub fn english_analyzer() -> PreparsedAnalyzer {
    let mut analyzer = PreparsedAnalyzer::new();
    analyzer
        .insert(
            "They are a teacher.",
            vec![
                Token::new("They", Pos::Pron, Dep::Nsubj, 1).followed_by(" "),
                Token::new("are", Pos::Aux, Dep::Root, 1).followed_by(" ").with_feature("Tense", "Pres"),
                Token::new("a", Pos::Det, Dep::Other, 3).followed_by(" "),
                Token::new("teacher", Pos::Noun, Dep::Other, 1),
                Token::new(".", Pos::Punct, Dep::Other, 1),
            ],
        )
        .expect("valid analysis");
    analyzer
        .insert(
            "They were a teacher.",
            vec![
                Token::new("They", Pos::Pron, Dep::Nsubj, 1).followed_by(" "),
                Token::new("were", Pos::Aux, Dep::Root, 1).followed_by(" ").with_feature("Tense", "Past"),
                Token::new("a", Pos::Det, Dep::Other, 3).followed_by(" "),
                Token::new("teacher", Pos::Noun, Dep::Other, 1),
                Token::new(".", Pos::Punct, Dep::Other, 1),
            ],
        )
        .expect("valid analysis");
    analyzer
        .insert(
            "He was a teacher.",
            vec![
                Token::new("He", Pos::Pron, Dep::Nsubj, 1).followed_by(" "),
                Token::new("was", Pos::Aux, Dep::Root, 1)
                    .followed_by(" ")
                    .with_feature("Number", "Sing")
                    .with_feature("Tense", "Past"),
                Token::new("a", Pos::Det, Dep::Other, 3).followed_by(" "),
                Token::new("teacher", Pos::Noun, Dep::Other, 1),
                Token::new(".", Pos::Punct, Dep::Other, 1),
            ],
        )
        .expect("valid analysis");
    analyzer
        .insert(
            "The chairperson says they watch their team.",
            vec![
                Token::new("The", Pos::Det, Dep::Other, 1).followed_by(" "),
                Token::new("chairperson", Pos::Noun, Dep::Nsubj, 2).followed_by(" "),
                Token::new("says", Pos::Verb, Dep::Root, 2)
                    .followed_by(" ")
                    .with_feature("Number", "Sing")
                    .with_feature("Tense", "Pres"),
                Token::new("they", Pos::Pron, Dep::Nsubj, 4).followed_by(" "),
                Token::new("watch", Pos::Verb, Dep::Other, 2).followed_by(" ").with_feature("Tense", "Pres"),
                Token::new("their", Pos::Pron, Dep::Poss, 6).followed_by(" "),
                Token::new("team", Pos::Noun, Dep::Other, 4),
                Token::new(".", Pos::Punct, Dep::Other, 2),
            ],
        )
        .expect("valid analysis");
    analyzer
        .insert(
            "She is a firewoman.",
            vec![
                Token::new("She", Pos::Pron, Dep::Nsubj, 1).followed_by(" "),
                Token::new("is", Pos::Aux, Dep::Root, 1)
                    .followed_by(" ")
                    .with_feature("Number", "Sing")
                    .with_feature("Tense", "Pres"),
                Token::new("a", Pos::Det, Dep::Other, 3).followed_by(" "),
                Token::new("firewoman", Pos::Noun, Dep::Other, 1),
                Token::new(".", Pos::Punct, Dep::Other, 1),
            ],
        )
        .expect("valid analysis");
    analyzer
}
