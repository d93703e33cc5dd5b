use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gfr_rewriter::config::{EngineConfig, Language};
use gfr_rewriter::engine::Engine;
use gfr_rewriter::segmenter::SentenceSegmenter;

const GENDER_FAIR_TEXT: &str = "Die Lehrer_innen und Schüler/innen treffen sich. Ein/e neue/r Kolleg/in kommt morgen. \
    Die StudentInnen lernen. Die Ärztinnen und Ärzte helfen.";
const PLAIN_TEXT: &str = "Der Hund bellt im Garten. Das Wetter ist heute schön. Wir treffen Dr. Weber um neun Uhr. \
    Danach fahren wir nach Hause.";

// WHY: Most corpus sentences are plain, so detection on plain text dominates a prepare run
fn bench_detection(c: &mut Criterion) {
    let engine = Engine::from_config(&EngineConfig::new(Language::German)).unwrap();
    let segmenter = SentenceSegmenter::new().unwrap();
    let plain = segmenter.sentences(PLAIN_TEXT);
    let gender_fair = segmenter.sentences(GENDER_FAIR_TEXT);

    let mut group = c.benchmark_group("detect");
    group.throughput(Throughput::Bytes(PLAIN_TEXT.len() as u64));
    group.bench_function("plain", |b| {
        b.iter(|| plain.iter().filter(|s| engine.detect(black_box(s))).count())
    });
    group.throughput(Throughput::Bytes(GENDER_FAIR_TEXT.len() as u64));
    group.bench_function("gender_fair", |b| {
        b.iter(|| gender_fair.iter().filter(|s| engine.detect(black_box(s))).count())
    });
    group.finish();
}

fn bench_normalization(c: &mut Criterion) {
    let engine = Engine::from_config(&EngineConfig::new(Language::German)).unwrap();
    let segmenter = SentenceSegmenter::new().unwrap();
    let sentences = segmenter.sentences(GENDER_FAIR_TEXT);

    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Bytes(GENDER_FAIR_TEXT.len() as u64));
    group.bench_function("german", |b| {
        b.iter(|| {
            for sentence in &sentences {
                black_box(engine.normalize(black_box(sentence)));
            }
        })
    });
    group.bench_function("segment_and_normalize", |b| {
        b.iter(|| {
            for sentence in segmenter.segment(black_box(GENDER_FAIR_TEXT)) {
                black_box(engine.normalize(&sentence.normalized()));
            }
        })
    });
    group.finish();
}

fn bench_engine_construction(c: &mut Criterion) {
    c.bench_function("engine_from_config", |b| {
        b.iter(|| Engine::from_config(black_box(&EngineConfig::new(Language::German))).unwrap())
    });
}

criterion_group!(benches, bench_detection, bench_normalization, bench_engine_construction);
criterion_main!(benches);
