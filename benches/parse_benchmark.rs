//! Benchmarks for résumé parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use a synthetic extracted-text résumé.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic résumé text with the given number of projects.
fn create_test_resume(project_count: usize) -> String {
    let mut text = String::new();

    text.push_str("Jane Doe\r\n");
    text.push_str("+1 555 123 4567 | jane@example.com | linkedin.com/in/jane | Los Angeles, CA\r\n");
    text.push_str("SUMMARY\r\nBackend engineer focused on routing\r\nand data systems.\r\n");
    text.push_str("EDUCATION\r\n");
    text.push_str("University of Southern California\r\nM.S. Computer Science, 2024\r\n");
    text.push_str("State University\r\nB.S. Mathematics, 2021\r\n");

    text.push_str("PROJECTS\r\n");
    for i in 0..project_count {
        text.push_str(&format!("Project {} Jan 2023 – Mar 2023\r\n", i + 1));
        text.push_str("■ Built a service that handles many re-\r\nquests per second\r\n");
        text.push_str("– Cut latency by 40% using caching\r\n");
    }

    text.push_str("TECHNICAL SKILLS\r\n");
    text.push_str("Languages: Rust, Go, Python\r\n");
    text.push_str("Frameworks: Axum, React\r\n");
    text.push_str("Databases: PostgreSQL, Redis\r\n");
    text.push_str("Tools: Docker, Git\r\n");

    text
}

/// Benchmark format detection on text input.
fn bench_format_detection(c: &mut Criterion) {
    let text = create_test_resume(3);
    let pdf_header = b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n";

    c.bench_function("detect_text", |b| {
        b.iter(|| resume_extract::detect_format_from_bytes(black_box(text.as_bytes())).unwrap());
    });

    c.bench_function("detect_pdf", |b| {
        b.iter(|| resume_extract::detect_format_from_bytes(black_box(pdf_header)).unwrap());
    });
}

/// Benchmark normalization.
fn bench_normalize(c: &mut Criterion) {
    let text = create_test_resume(10);

    c.bench_function("normalize", |b| {
        b.iter(|| resume_extract::normalize(black_box(&text)));
    });
}

/// Benchmark the full text-to-record pipeline at various sizes.
fn bench_resume_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("resume_parsing");
    let parser = resume_extract::ResumeParser::new();

    for project_count in [1, 5, 20].iter() {
        let text = create_test_resume(*project_count);

        group.bench_function(format!("{}_projects", project_count), |b| {
            b.iter(|| parser.parse(black_box(&text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_normalize,
    bench_resume_parsing,
);
criterion_main!(benches);
