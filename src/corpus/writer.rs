// WHY: Rows are routed by label into two aligned file pairs
// Line N of a .src file always belongs with line N of the matching .trg file

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

use super::CorpusRow;

/// One source/target file pair
struct ParallelPair {
    source: BufWriter<File>,
    target: BufWriter<File>,
    rows: u64,
}

impl ParallelPair {
    async fn create(prefix: &str, name: &str) -> Result<Self> {
        Ok(Self {
            source: create(Self::path(prefix, name, "src")).await?,
            target: create(Self::path(prefix, name, "trg")).await?,
            rows: 0,
        })
    }

    fn path(prefix: &str, name: &str, side: &str) -> PathBuf {
        PathBuf::from(format!("{prefix}.{name}.{side}"))
    }

    async fn write(&mut self, row: &CorpusRow) -> Result<()> {
        self.source.write_all(row.source.as_bytes()).await?;
        self.source.write_all(b"\n").await?;
        self.target.write_all(row.target.as_bytes()).await?;
        self.target.write_all(b"\n").await?;
        self.rows += 1;
        Ok(())
    }

    async fn flush(&mut self) -> Result<()> {
        self.source.flush().await?;
        self.target.flush().await?;
        Ok(())
    }
}

async fn create(path: PathBuf) -> Result<BufWriter<File>> {
    let file = File::create(&path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Writes `<prefix>.gf.{src,trg}` and `<prefix>.ngf.{src,trg}`
pub struct CorpusWriter {
    prefix: String,
    gender_fair: ParallelPair,
    not_gender_fair: ParallelPair,
}

impl CorpusWriter {
    pub async fn create(prefix: &str) -> Result<Self> {
        Ok(Self {
            prefix: prefix.to_string(),
            gender_fair: ParallelPair::create(prefix, "gf").await?,
            not_gender_fair: ParallelPair::create(prefix, "ngf").await?,
        })
    }

    pub async fn write_rows(&mut self, rows: &[CorpusRow]) -> Result<()> {
        for row in rows {
            if row.label.is_gender_fair() {
                self.gender_fair.write(row).await?;
            } else {
                self.not_gender_fair.write(row).await?;
            }
        }
        Ok(())
    }

    /// Flush both pairs; returns (gender-fair rows, non-gender-fair rows)
    pub async fn finish(mut self) -> Result<(u64, u64)> {
        self.gender_fair.flush().await?;
        self.not_gender_fair.flush().await?;
        info!(
            "Wrote corpus {}: {} gender-fair rows, {} non-gender-fair rows",
            self.prefix, self.gender_fair.rows, self.not_gender_fair.rows
        );
        Ok((self.gender_fair.rows, self.not_gender_fair.rows))
    }
}
