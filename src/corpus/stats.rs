// WHY: One JSON document per run, for comparing corpus builds over time

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;

use super::{BuildStats, ReadStats};
use crate::config::{EngineConfig, Language, ReverseApproach};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    pub language: Language,
    pub approach: ReverseApproach,
    pub delimiter: String,
    pub seed: u64,
    pub read: ReadStats,
    pub build: BuildStats,
    pub gender_fair_rows: u64,
    pub not_gender_fair_rows: u64,
    pub duration_ms: u64,
    /// Seconds since the Unix epoch when the run finished
    pub finished_at: u64,
}

impl RunStats {
    pub fn new(config: &EngineConfig, seed: u64, read: ReadStats, build: BuildStats) -> Self {
        Self {
            language: config.language,
            approach: config.approach,
            delimiter: config.delimiter.clone(),
            seed,
            read,
            build,
            gender_fair_rows: 0,
            not_gender_fair_rows: 0,
            duration_ms: 0,
            finished_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs()),
        }
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write run stats {}", path.display()))?;
        Ok(())
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read run stats {}", path.display()))?;
        Ok(serde_json::from_str(&content)?)
    }
}
