// WHY: Boundary to the external natural-language analysis service
// Tokens live in one arena per sentence and refer to their head by index, never by reference

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

pub mod preparsed;

pub use preparsed::{AnalysisRecord, PreparsedAnalyzer};

/// Universal part-of-speech tags as emitted by the tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "ADJ")]
    Adj,
    #[serde(rename = "ADP")]
    Adp,
    #[serde(rename = "ADV")]
    Adv,
    #[serde(rename = "AUX")]
    Aux,
    #[serde(rename = "CCONJ")]
    Cconj,
    #[serde(rename = "DET")]
    Det,
    #[serde(rename = "INTJ")]
    Intj,
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "NUM")]
    Num,
    #[serde(rename = "PART")]
    Part,
    #[serde(rename = "PRON")]
    Pron,
    #[serde(rename = "PROPN")]
    Propn,
    #[serde(rename = "PUNCT")]
    Punct,
    #[serde(rename = "SCONJ")]
    Sconj,
    #[serde(rename = "SYM")]
    Sym,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "SPACE")]
    Space,
    #[serde(rename = "X")]
    #[serde(other)]
    X,
}

/// Dependency labels the rewriting rules care about; everything else collapses to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyLabel {
    Nsubj,
    #[serde(alias = "nsubj:pass")]
    Nsubjpass,
    Conj,
    #[serde(alias = "nmod:poss")]
    Poss,
    Aux,
    #[serde(alias = "aux:pass")]
    Auxpass,
    #[serde(alias = "ROOT")]
    Root,
    #[serde(other)]
    Other,
}

/// One token of an analyzed sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Whitespace that followed the token in the source text
    #[serde(default)]
    pub whitespace: String,
    pub pos: PartOfSpeech,
    pub dep: DependencyLabel,
    /// Index of the syntactic head within the same sentence; the root points at itself
    pub head: usize,
    /// Morphological features, e.g. `Number -> Sing`, `Tense -> Pres`
    #[serde(default)]
    pub morph: BTreeMap<String, String>,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech, dep: DependencyLabel, head: usize) -> Self {
        Self {
            text: text.into(),
            whitespace: String::new(),
            pos,
            dep,
            head,
            morph: BTreeMap::new(),
        }
    }

    pub fn followed_by(mut self, whitespace: &str) -> Self {
        self.whitespace = whitespace.to_string();
        self
    }

    pub fn with_feature(mut self, feature: &str, value: &str) -> Self {
        self.morph.insert(feature.to_string(), value.to_string());
        self
    }

    pub fn has_feature(&self, feature: &str, value: &str) -> bool {
        self.morph.get(feature).is_some_and(|v| v == value)
    }

    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Token sequence for one sentence, valid only for the duration of one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedSentence {
    tokens: Vec<Token>,
}

impl AnalyzedSentence {
    /// Build a sentence, rejecting head indices that point outside the arena
    pub fn new(tokens: Vec<Token>) -> Result<Self> {
        for (index, token) in tokens.iter().enumerate() {
            if token.head >= tokens.len() {
                bail!(
                    "token {index} ({:?}) has head {} outside sentence of {} tokens",
                    token.text,
                    token.head,
                    tokens.len()
                );
            }
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn head_of(&self, index: usize) -> &Token {
        &self.tokens[self.tokens[index].head]
    }

    /// Surface text exactly as tokenized
    pub fn text(&self) -> String {
        self.render(|_, _| None)
    }

    /// Reassemble the sentence token by token, substituting whatever `replace` returns
    /// and keeping the original inter-token whitespace
    pub fn render<'a, F>(&'a self, mut replace: F) -> String
    where
        F: FnMut(usize, &'a Token) -> Option<Cow<'a, str>>,
    {
        let mut out = String::new();
        for (index, token) in self.tokens.iter().enumerate() {
            match replace(index, token) {
                Some(replacement) => out.push_str(&replacement),
                None => out.push_str(&token.text),
            }
            out.push_str(&token.whitespace);
        }
        out
    }
}

/// The analysis service the reversers consume as a black box
pub trait SyntaxAnalyzer {
    /// Tag and parse one sentence
    fn analyze(&self, sentence: &str) -> Result<AnalyzedSentence>;
}
