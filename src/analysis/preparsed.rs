// WHY: The tagger/parser runs out of process; its per-sentence output is exchanged as JSON lines
// Each line holds one sentence and its token arena, keyed by the exact sentence text

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use tracing::{info, warn};

use super::{AnalyzedSentence, SyntaxAnalyzer, Token};

/// One analyzed sentence as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub sentence: String,
    pub tokens: Vec<Token>,
}

/// Analyzer backed by analyses produced ahead of time by the external service
#[derive(Debug, Default)]
pub struct PreparsedAnalyzer {
    analyses: HashMap<String, AnalyzedSentence>,
}

impl PreparsedAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every record from a JSON-lines reader
    /// Malformed lines are skipped with a warning unless `fail_fast` is set
    pub fn from_reader<R: BufRead>(reader: R, fail_fast: bool) -> Result<Self> {
        let mut analyzer = Self::new();
        let mut skipped = 0usize;

        for (line_number, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read analysis line {}", line_number + 1))?;
            if line.trim().is_empty() {
                continue;
            }
            let parsed = serde_json::from_str::<AnalysisRecord>(&line)
                .map_err(anyhow::Error::from)
                .and_then(|record| {
                    let sentence = AnalyzedSentence::new(record.tokens)?;
                    Ok((record.sentence, sentence))
                });
            match parsed {
                Ok((text, sentence)) => {
                    analyzer.analyses.insert(text, sentence);
                }
                Err(e) if fail_fast => {
                    return Err(e.context(format!("invalid analysis record on line {}", line_number + 1)));
                }
                Err(e) => {
                    warn!("Skipping analysis record on line {}: {}", line_number + 1, e);
                    skipped += 1;
                }
            }
        }

        info!("Loaded {} sentence analyses ({} skipped)", analyzer.len(), skipped);
        Ok(analyzer)
    }

    pub fn from_path<P: AsRef<Path>>(path: P, fail_fast: bool) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open analysis file {}", path.display()))?;
        Self::from_reader(std::io::BufReader::new(file), fail_fast)
    }

    pub fn insert(&mut self, sentence: impl Into<String>, tokens: Vec<Token>) -> Result<()> {
        let analyzed = AnalyzedSentence::new(tokens)?;
        self.analyses.insert(sentence.into(), analyzed);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }
}

impl SyntaxAnalyzer for PreparsedAnalyzer {
    fn analyze(&self, sentence: &str) -> Result<AnalyzedSentence> {
        self.analyses
            .get(sentence)
            .cloned()
            .ok_or_else(|| anyhow!("no analysis available for sentence {sentence:?}"))
    }
}
