//! Benchmarks for SubStation parsing and serialization
//!
//! Builds synthetic documents programmatically, renders them in both
//! dialects and measures reading and writing at several sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use substation::{
    utils::{ass_rgba_to_color, make_time, ms_to_timestamp, timestamp_to_ms},
    Color, Dialect, Document, Event, EventKind, Style,
};

/// Synthetic document generator for benchmarking
struct DocumentGenerator {
    /// Number of styles besides `Default`
    styles_count: usize,
    /// Number of events to generate
    events_count: usize,
    /// Whether event text carries override blocks
    formatted: bool,
}

impl DocumentGenerator {
    /// Plain dialogue, one extra style
    const fn simple(events_count: usize) -> Self {
        Self {
            styles_count: 1,
            events_count,
            formatted: false,
        }
    }

    /// Override-heavy dialogue, many styles
    const fn formatted(events_count: usize) -> Self {
        Self {
            styles_count: 20,
            events_count,
            formatted: true,
        }
    }

    /// Build the document
    fn generate(&self) -> Document {
        let mut doc = Document::new();
        doc.set_info("Title", "Benchmark Script");
        doc.set_info("PlayResX", "1920");
        doc.set_info("PlayResY", "1080");

        for i in 0..self.styles_count {
            let shade = u8::try_from(i * 12 % 256).unwrap_or(u8::MAX);
            doc.set_style(
                format!("Style{i}"),
                Style {
                    fontsize: 20.0 + 2.0 * f64::from(u8::try_from(i % 40).unwrap_or(0)),
                    primary_color: Color::rgb(shade, 255 - shade, 128),
                    bold: i % 2 == 0,
                    alignment: i32::try_from(i % 9 + 1).unwrap_or(2),
                    ..Style::default()
                },
            );
        }

        for i in 0..self.events_count {
            let start = make_time(0, 0, 0, i64::try_from(i).unwrap_or(i64::MAX) * 3_000);
            doc.push_event(Event {
                kind: if i % 10 == 9 {
                    EventKind::Comment
                } else {
                    EventKind::Dialogue
                },
                start,
                end: start + 2_500,
                style: format!("Style{}", i % self.styles_count.max(1)),
                name: "Speaker".to_string(),
                text: self.dialogue_text(i),
                ..Event::default()
            });
        }

        doc
    }

    /// Event text for line `index`
    fn dialogue_text(&self, index: usize) -> String {
        let base = format!("This is dialogue line number {}, with a comma", index + 1);
        if self.formatted {
            format!(r"{{\pos(100,200)\fad(500,500)\b1}}{base}{{\b0}}\Nsecond line")
        } else {
            base
        }
    }
}

/// Benchmark parsing both dialects
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for &size in &[10, 100, 1000, 5000] {
        for (label, generator) in [
            ("simple", DocumentGenerator::simple(size)),
            ("formatted", DocumentGenerator::formatted(size)),
        ] {
            let doc = generator.generate();
            for dialect in [Dialect::Extended, Dialect::Legacy] {
                let text = doc.to_dialect_string(dialect);
                group.throughput(Throughput::Bytes(text.len() as u64));
                group.bench_with_input(
                    BenchmarkId::new(format!("{label}/{dialect:?}"), size),
                    &text,
                    |b, text| b.iter(|| Document::parse(black_box(text))),
                );
            }
        }
    }

    group.finish();
}

/// Benchmark serialization to both dialects
fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    for &size in &[10, 100, 1000, 5000] {
        let doc = DocumentGenerator::formatted(size).generate();
        for dialect in [Dialect::Extended, Dialect::Legacy] {
            group.bench_with_input(
                BenchmarkId::new(format!("{dialect:?}"), size),
                &doc,
                |b, doc| b.iter(|| black_box(doc).to_dialect_string(dialect)),
            );
        }
    }

    group.finish();
}

/// Benchmark the field codecs on their own
fn bench_field_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_codecs");

    group.bench_function("timestamp_to_ms", |b| {
        b.iter(|| timestamp_to_ms(black_box("1:23:45.67")));
    });
    group.bench_function("ms_to_timestamp", |b| {
        b.iter(|| ms_to_timestamp(black_box(5_025_670)));
    });
    group.bench_function("ass_rgba_to_color", |b| {
        b.iter(|| ass_rgba_to_color(black_box("&H80FF8000")));
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_serialization, bench_field_codecs);
criterion_main!(benches);
