use criterion::{black_box, criterion_group, criterion_main, Criterion};
use merifib::{ClosedForm, Length, Precision, SequenceEngine};

fn criterion_benchmark(c: &mut Criterion) {
    let position = black_box(500);

    c.bench_function(format!("nth_closed_form {position}").as_str(), |b| {
        b.iter(|| SequenceEngine::nth(position))
    });

    let wide = ClosedForm::new(Precision::new(600).expect("nonzero precision"));
    c.bench_function(format!("nth_closed_form_600digits {position}").as_str(), |b| {
        b.iter(|| wide.nth(position))
    });

    let size = black_box(10000);

    let forward = SequenceEngine::new(size, 55).expect("valid engine");
    c.bench_function(format!("sequence_forward {size}").as_str(), |b| {
        b.iter(|| forward.sequence())
    });

    let backward = SequenceEngine::new(-size, 6765).expect("valid engine");
    c.bench_function(format!("sequence_backward {size}").as_str(), |b| {
        b.iter(|| backward.sequence())
    });

    let lazy = SequenceEngine::new(Length::Unbounded, 0).expect("valid engine");
    c.bench_function(format!("sequence_unbounded_take {size}").as_str(), |b| {
        b.iter(|| {
            lazy.sequence()
                .into_terms()
                .map(|terms| terms.take(size as usize).count())
        })
    });

    c.bench_function(format!("report {size}").as_str(), |b| {
        b.iter(|| forward.report())
    });

    let standard = ClosedForm::standard();
    c.bench_function("audit_closed_form 500", |b| b.iter(|| standard.audit(500)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
