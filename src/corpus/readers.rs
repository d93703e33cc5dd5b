// WHY: Corpora come in four shapes; all of them are flattened to raw lines here
// Record-level failures follow ReaderConfig.fail_fast: abort, or log and skip

use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::ValueEnum;
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader as StdBufReader};
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// One line per record, invalid UTF-8 replaced
    Txt,
    /// JSON array of prompts, each an array of `{"generated_text": ...}` generations
    Json,
    /// Gzip file with one base64-encoded UTF-8 record per line
    Gz,
    /// JSON lines with a `content` field per record
    Jsonl,
}

/// Configuration for corpus reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail on the first bad record or skip it
    pub fail_fast: bool,
    /// Buffer size for async reading
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadStats {
    pub source: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub records_skipped: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct ContentRecord {
    content: String,
}

pub struct CorpusReader {
    config: ReaderConfig,
}

impl CorpusReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub async fn read_path<P: AsRef<Path>>(&self, path: P, format: InputFormat) -> Result<(Vec<String>, ReadStats)> {
        let path = path.as_ref();
        debug!("Opening {} as {:?}", path.display(), format);
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open corpus {}", path.display()))?;
        self.read_from(file, format, path.display().to_string()).await
    }

    pub async fn read_stdin(&self, format: InputFormat) -> Result<(Vec<String>, ReadStats)> {
        self.read_from(tokio::io::stdin(), format, "<stdin>".to_string()).await
    }

    async fn read_from<R: AsyncRead + Unpin>(
        &self,
        input: R,
        format: InputFormat,
        source: String,
    ) -> Result<(Vec<String>, ReadStats)> {
        let start_time = Instant::now();
        let mut reader = BufReader::with_capacity(self.config.buffer_size, input);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .await
            .with_context(|| format!("Failed to read corpus {source}"))?;

        let mut stats = ReadStats {
            source,
            bytes_read: bytes.len() as u64,
            ..ReadStats::default()
        };
        let lines = self.decode(&bytes, format, &mut stats)?;
        stats.lines_read = lines.len() as u64;
        stats.duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            "Read {}: {} lines, {} bytes, {} records skipped in {}ms",
            stats.source, stats.lines_read, stats.bytes_read, stats.records_skipped, stats.duration_ms
        );
        Ok((lines, stats))
    }

    /// Flatten raw file content into lines according to `format`
    pub fn decode(&self, bytes: &[u8], format: InputFormat, stats: &mut ReadStats) -> Result<Vec<String>> {
        match format {
            InputFormat::Txt => Ok(String::from_utf8_lossy(bytes).lines().map(str::to_string).collect()),
            InputFormat::Json => self.decode_generations(bytes, stats),
            InputFormat::Gz => self.decode_gz(bytes, stats),
            InputFormat::Jsonl => self.decode_jsonl(bytes, stats),
        }
    }

    fn decode_generations(&self, bytes: &[u8], stats: &mut ReadStats) -> Result<Vec<String>> {
        let prompts: Vec<Vec<Generation>> = match serde_json::from_slice(bytes) {
            Ok(prompts) => prompts,
            Err(e) => {
                let message = format!("Malformed generation log {}: {}", stats.source, e);
                return self.give_up(message, stats).map(|()| Vec::new());
            }
        };
        Ok(prompts
            .iter()
            .flatten()
            .flat_map(|generation| generation.generated_text.trim_end().split('\n'))
            .map(str::to_string)
            .collect())
    }

    fn decode_gz(&self, bytes: &[u8], stats: &mut ReadStats) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        let decoder = StdBufReader::new(GzDecoder::new(bytes));
        for (number, encoded) in decoder.split(b'\n').enumerate() {
            let encoded = match encoded {
                Ok(encoded) => encoded,
                Err(e) => {
                    let message = format!("Gzip error in {} at line {}: {}", stats.source, number + 1, e);
                    self.give_up(message, stats)?;
                    break;
                }
            };
            let encoded = encoded.trim_ascii_end();
            if encoded.is_empty() {
                continue;
            }
            match STANDARD
                .decode(encoded)
                .map_err(|e| anyhow!(e))
                .and_then(|decoded| String::from_utf8(decoded).map_err(|e| anyhow!(e)))
            {
                Ok(line) => lines.push(line),
                Err(e) => self.skip(format!("Bad record in {} at line {}: {}", stats.source, number + 1, e), stats)?,
            }
        }
        Ok(lines)
    }

    fn decode_jsonl(&self, bytes: &[u8], stats: &mut ReadStats) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for (number, record) in String::from_utf8_lossy(bytes).lines().enumerate() {
            if record.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<ContentRecord>(record) {
                Ok(record) => lines.extend(record.content.trim_end().split('\n').map(str::to_string)),
                Err(e) => self.skip(format!("Bad record in {} at line {}: {}", stats.source, number + 1, e), stats)?,
            }
        }
        Ok(lines)
    }

    /// One record is unusable; the rest of the file still is
    fn skip(&self, message: String, stats: &mut ReadStats) -> Result<()> {
        warn!("{}", message);
        if self.config.fail_fast {
            return Err(anyhow!(message));
        }
        stats.records_skipped += 1;
        Ok(())
    }

    /// The remainder of the file is unusable
    fn give_up(&self, message: String, stats: &mut ReadStats) -> Result<()> {
        warn!("{}", message);
        if self.config.fail_fast {
            return Err(anyhow!(message));
        }
        stats.read_error = Some(message);
        Ok(())
    }
}

/// Load the animated-noun seed dictionary; only its keys matter
pub async fn load_seed_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed dictionary {}", path.display()))?;
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("Seed dictionary {} is not a JSON object", path.display()))?;
    let nouns: Vec<String> = entries.into_iter().map(|(noun, _)| noun).filter(|noun| !noun.is_empty()).collect();
    info!("Loaded {} animated nouns from {}", nouns.len(), path.display());
    Ok(nouns)
}
