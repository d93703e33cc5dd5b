pub mod analysis;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod english;
pub mod german;
pub mod patterns;
pub mod segmenter;

// Re-export main types for convenient access
pub use analysis::{AnalyzedSentence, PreparsedAnalyzer, SyntaxAnalyzer, Token};
pub use config::{ConfigError, EngineConfig, Language, ReverseApproach, DEFAULT_DELIMITER};
pub use engine::{Engine, Normalization, ReversalOutcome, RuleBasedReverser};
pub use segmenter::{SentenceSegmenter, SentenceSpan};

// Re-export corpus building types for the CLI and benchmarks
pub use corpus::{
    CorpusReader, CorpusRow, CorpusWriter, InputFormat, Label,
    ParallelCorpusBuilder, ReaderConfig, RunStats
};
