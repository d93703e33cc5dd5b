// End-to-end corpus building: read, segment, normalize, reverse, write
// WHY: The output files must stay line-aligned and every sentence must be emitted at most once

#[path = "integration/mod.rs"]
mod integration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use flate2::{write::GzEncoder, Compression};
use std::io::Write;

use gfr_rewriter::analysis::SyntaxAnalyzer;
use gfr_rewriter::config::{EngineConfig, Language, ReverseApproach};
use gfr_rewriter::corpus::{
    CorpusReader, CorpusWriter, InputFormat, Label, ParallelCorpusBuilder, ReaderConfig, RunStats,
};
use gfr_rewriter::segmenter::SentenceSegmenter;
use integration::{engine, english_analyzer, TestFixture};

#[tokio::test]
async fn test_german_round_trip_corpus() {
    let fixture = TestFixture::new();
    let input = fixture.create_file(
        "corpus.txt",
        "Die Lehrer_innen kommen. Der Hund bellt.\nDer Hund bellt.\nDer Arzt kommt.\nEr kommt morgen.\n",
    );

    let engine = engine(Language::German);
    let segmenter = SentenceSegmenter::new().unwrap();
    let reader = CorpusReader::new(ReaderConfig::default());
    let (lines, read_stats) = reader.read_path(&input, InputFormat::Txt).await.unwrap();
    assert_eq!(read_stats.lines_read, 4);

    let mut builder = ParallelCorpusBuilder::new(engine, &segmenter, ReverseApproach::RoundTrip, None)
        .unwrap()
        .with_animated_nouns(["Arzt"]);
    let prefix = fixture.prefix("train");
    let mut writer = CorpusWriter::create(&prefix).await.unwrap();
    for line in &lines {
        let rows = builder.process_line(line).unwrap();
        writer.write_rows(&rows).await.unwrap();
    }
    assert_eq!(writer.finish().await.unwrap(), (1, 1));

    assert_eq!(fixture.read_lines(format!("{prefix}.gf.src")), vec!["Die Lehrer_innen kommen."]);
    assert_eq!(fixture.read_lines(format!("{prefix}.gf.trg")), vec!["Die Lehrer*innen kommen."]);
    assert_eq!(fixture.read_lines(format!("{prefix}.ngf.src")), vec!["Der Hund bellt."]);
    assert_eq!(fixture.read_lines(format!("{prefix}.ngf.trg")), vec!["Der Hund bellt."]);

    let stats = builder.stats();
    assert_eq!(stats.sentences_seen, 5);
    assert_eq!(stats.duplicates_skipped, 1);
    assert_eq!(stats.rows_written(), 2);

    let stats_path = fixture.root_path.join("run_stats.json");
    let run = RunStats::new(&EngineConfig::new(Language::German), 0, read_stats, stats.clone());
    run.save(&stats_path).await.unwrap();
    assert_eq!(RunStats::load(&stats_path).await.unwrap().build, *stats);
}

#[tokio::test]
async fn test_english_rule_based_rows_from_gz() {
    let fixture = TestFixture::new();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    for line in ["They are a teacher.", "They are a teacher.", "The shelf is empty."] {
        writeln!(encoder, "{}", STANDARD.encode(line)).unwrap();
    }
    let input = fixture.create_file("corpus.gz", encoder.finish().unwrap());

    let reader = CorpusReader::new(ReaderConfig::default());
    let (lines, _) = reader.read_path(&input, InputFormat::Gz).await.unwrap();

    let engine = engine(Language::English);
    let segmenter = SentenceSegmenter::new().unwrap();
    let analyzer = english_analyzer();
    let mut builder = ParallelCorpusBuilder::new(
        engine,
        &segmenter,
        ReverseApproach::RuleBased,
        Some(&analyzer as &dyn SyntaxAnalyzer),
    )
    .unwrap()
    .with_seed(11);

    let rows: Vec<_> = lines
        .iter()
        .flat_map(|line| builder.process_line(line).unwrap())
        .collect();
    let labels: Vec<Label> = rows.iter().map(|row| row.label).collect();
    assert_eq!(
        labels,
        vec![Label::GenderedMale, Label::GenderedFemale, Label::CopyGenderFair, Label::CopyNoGenderFair]
    );
    assert_eq!(rows[0].source, "He is a teacher.");
    assert_eq!(rows[1].source, "She is a teacher.");
    assert_eq!(rows[2].source, "They is a teacher.");
    assert!(rows[..3].iter().all(|row| row.target == "They are a teacher."));
    assert_eq!(builder.stats().duplicates_skipped, 1);
}

#[tokio::test]
async fn test_jsonl_corpus_with_ignored_sentences() {
    let fixture = TestFixture::new();
    let input = fixture.create_file(
        "corpus.jsonl",
        "{\"content\": \"She said they would come.\\nThe shelf is empty.\"}\n",
    );
    let reader = CorpusReader::new(ReaderConfig::default());
    let (lines, _) = reader.read_path(&input, InputFormat::Jsonl).await.unwrap();
    assert_eq!(lines.len(), 2);

    let engine = engine(Language::English);
    let segmenter = SentenceSegmenter::new().unwrap();
    let analyzer = english_analyzer();
    let mut builder =
        ParallelCorpusBuilder::new(engine, &segmenter, ReverseApproach::RuleBased, Some(&analyzer)).unwrap();
    let rows: Vec<_> = lines.iter().flat_map(|line| builder.process_line(line).unwrap()).collect();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, Label::CopyNoGenderFair);
    assert_eq!(builder.stats().ignored_sentences, 1);
}
