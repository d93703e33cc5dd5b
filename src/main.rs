use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gfr_rewriter::analysis::{PreparsedAnalyzer, SyntaxAnalyzer};
use gfr_rewriter::config::{ConfigError, EngineConfig, Language, ReverseApproach, DEFAULT_DELIMITER};
use gfr_rewriter::corpus::{
    load_seed_dictionary, CorpusReader, CorpusWriter, InputFormat, ParallelCorpusBuilder, ReadStats, ReaderConfig,
    RunStats,
};
use gfr_rewriter::engine::Engine;
use gfr_rewriter::segmenter::SentenceSegmenter;

#[derive(Parser, Debug)]
#[command(name = "gfr")]
#[command(about = "Normalize gender-fair forms and build parallel rewriting corpora")]
#[command(version)]
struct Cli {
    /// Log per-sentence decisions
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite every gender-fair form to the canonical delimiter, one sentence per line
    Normalize(NormalizeArgs),
    /// Build a non-gender-fair / gender-fair -> gender-fair parallel corpus
    Prepare(PrepareArgs),
    /// Repair canonical sentences line by line from their round-trip translations
    Merge(MergeArgs),
}

#[derive(Args, Debug)]
struct NormalizeArgs {
    /// Input corpus (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value = "txt")]
    input_format: InputFormat,

    #[arg(short, long, value_enum, default_value = "de")]
    lang: Language,

    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    /// Only output sentences that contain a gender-fair form
    #[arg(long, conflicts_with = "not_gender_fair_only")]
    gender_fair_only: bool,

    /// Only output sentences without gender-fair forms
    #[arg(long)]
    not_gender_fair_only: bool,

    /// Treat every input line as one sentence
    #[arg(long)]
    disable_sentence_splitting: bool,
}

#[derive(Args, Debug)]
struct PrepareArgs {
    /// The original monolingual data
    #[arg(short, long)]
    input: PathBuf,

    /// File prefix for the parallel output data
    #[arg(short, long, default_value = "train")]
    output: String,

    #[arg(short = 'f', long, value_enum, default_value = "txt")]
    input_format: InputFormat,

    #[arg(short, long, value_enum, default_value = "de")]
    lang: Language,

    /// How generic male/female forms are produced (defaults to the language's own approach)
    #[arg(short = 'a', long, value_enum)]
    reverse_approach: Option<ReverseApproach>,

    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    /// JSON object whose keys are animated nouns
    #[arg(long)]
    seed_dict: Option<PathBuf>,

    /// JSON-lines sentence analyses, required by the rule-based approach
    #[arg(long)]
    analysis: Option<PathBuf>,

    /// Seed for the contraction augmentation
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Abort on the first unreadable record or failed analysis
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,
}

#[derive(Args, Debug)]
struct MergeArgs {
    /// Canonical gender-fair sentences, one per line
    #[arg(short, long)]
    input: PathBuf,

    /// Round-trip translations, aligned line by line with the input
    #[arg(short, long)]
    round_trip: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "de")]
    lang: Language,

    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,
}

type Output = BufWriter<Box<dyn AsyncWrite + Unpin + Send>>;

async fn open_output(path: Option<&Path>) -> Result<Output> {
    let sink: Box<dyn AsyncWrite + Unpin + Send> = match path {
        Some(path) => Box::new(
            tokio::fs::File::create(path)
                .await
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(tokio::io::stdout()),
    };
    Ok(BufWriter::new(sink))
}

async fn read_input(reader: &CorpusReader, input: Option<&Path>, format: InputFormat) -> Result<(Vec<String>, ReadStats)> {
    match input {
        Some(path) => reader.read_path(path, format).await,
        None => reader.read_stdin(format).await,
    }
}

fn progress_bar(len: u64, hidden: bool) -> Result<ProgressBar> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({per_sec}, {eta})")?
            .progress_chars("#>-"),
    );
    Ok(bar)
}

async fn normalize(args: NormalizeArgs) -> Result<()> {
    let config = EngineConfig::new(args.lang).with_delimiter(args.delimiter);
    let engine = Engine::from_config(&config)?;
    let segmenter = SentenceSegmenter::new()?;
    let reader = CorpusReader::new(ReaderConfig::default());
    let (lines, _) = read_input(&reader, args.input.as_deref(), args.input_format).await?;

    let mut output = open_output(args.output.as_deref()).await?;
    let mut written = 0u64;
    let mut ignored = 0u64;
    for line in &lines {
        let line = line.trim_end();
        let sentences = if args.disable_sentence_splitting {
            vec![line.to_string()]
        } else {
            segmenter.sentences(line)
        };
        for sentence in sentences {
            let normalization = engine.normalize(&sentence);
            let Some(text) = normalization.text else {
                ignored += 1;
                continue;
            };
            let keep = if args.gender_fair_only {
                normalization.is_gender_fair
            } else if args.not_gender_fair_only {
                !normalization.is_gender_fair
            } else {
                true
            };
            if keep {
                output.write_all(text.as_bytes()).await?;
                output.write_all(b"\n").await?;
                written += 1;
            }
        }
    }
    output.flush().await?;

    info!("Normalized {} lines: {} sentences written, {} ignored", lines.len(), written, ignored);
    Ok(())
}

async fn prepare(args: PrepareArgs) -> Result<()> {
    let start_time = Instant::now();
    let approach = args.reverse_approach.unwrap_or(args.lang.default_approach());
    let config = EngineConfig::new(args.lang)
        .with_delimiter(args.delimiter.clone())
        .with_approach(approach);
    let engine = Engine::from_config(&config)?;
    let segmenter = SentenceSegmenter::new()?;

    let analyzer = args
        .analysis
        .as_deref()
        .map(|path| PreparsedAnalyzer::from_path(path, args.fail_fast))
        .transpose()?;
    let animated_nouns = match args.seed_dict.as_deref() {
        Some(path) => load_seed_dictionary(path).await?,
        None => Vec::new(),
    };

    let mut builder = ParallelCorpusBuilder::new(
        &engine,
        &segmenter,
        approach,
        analyzer.as_ref().map(|analyzer| analyzer as &dyn SyntaxAnalyzer),
    )?
    .with_animated_nouns(&animated_nouns)
    .with_seed(args.seed)
    .with_fail_fast(args.fail_fast);

    let reader = CorpusReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        ..ReaderConfig::default()
    });
    let (lines, read_stats) = reader.read_path(&args.input, args.input_format).await?;

    let mut writer = CorpusWriter::create(&args.output).await?;
    let progress = progress_bar(lines.len() as u64, args.no_progress)?;
    for line in &lines {
        let rows = builder.process_line(line)?;
        writer.write_rows(&rows).await?;
        progress.inc(1);
    }
    progress.finish_and_clear();
    let (gender_fair_rows, not_gender_fair_rows) = writer.finish().await?;

    let mut stats = RunStats::new(&config, args.seed, read_stats, builder.stats().clone());
    stats.gender_fair_rows = gender_fair_rows;
    stats.not_gender_fair_rows = not_gender_fair_rows;
    stats.duration_ms = start_time.elapsed().as_millis() as u64;
    stats.save(&args.stats_out).await?;

    info!(
        "Prepared {}: {} gender-fair rows, {} non-gender-fair rows in {}ms",
        args.output, gender_fair_rows, not_gender_fair_rows, stats.duration_ms
    );
    Ok(())
}

async fn merge(args: MergeArgs) -> Result<()> {
    if !args.lang.has_merger() {
        return Err(ConfigError::MergeUnsupported(args.lang).into());
    }
    let config = EngineConfig::new(args.lang).with_delimiter(args.delimiter);
    let engine = Engine::from_config(&config)?;

    let reader = CorpusReader::new(ReaderConfig::default());
    let (sentences, _) = reader.read_path(&args.input, InputFormat::Txt).await?;
    let (round_trips, _) = reader.read_path(&args.round_trip, InputFormat::Txt).await?;
    if sentences.len() != round_trips.len() {
        warn!(
            "Line counts differ ({} vs {}); merging the first {} lines",
            sentences.len(),
            round_trips.len(),
            sentences.len().min(round_trips.len())
        );
    }

    let mut output = open_output(args.output.as_deref()).await?;
    let mut merged_lines = 0u64;
    for (sentence, round_trip) in sentences.iter().zip(&round_trips) {
        let merged = engine.merge(sentence.trim_end(), round_trip.trim_end())?;
        output.write_all(merged.as_bytes()).await?;
        output.write_all(b"\n").await?;
        merged_lines += 1;
    }
    output.flush().await?;

    info!("Merged {} lines", merged_lines);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // WHY: stdout may carry corpus output, so structured logs go to stderr
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .json()
        .init();

    info!(?cli, "Parsed CLI arguments");

    match cli.command {
        Command::Normalize(args) => normalize(args).await,
        Command::Prepare(args) => prepare(args).await,
        Command::Merge(args) => merge(args).await,
    }
}
