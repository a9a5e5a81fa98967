use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nec_array::config::{DeckConfig, PhaseMode};
use nec_array::elements::{ElementKind, LogPeriodicParams, TtfdParams, YagiParams};
use nec_array::generator::generate;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let kinds = [
        ElementKind::Ttfd(TtfdParams::default()),
        ElementKind::LogPeriodic(LogPeriodicParams::default()),
        ElementKind::Yagi(YagiParams::default()),
    ];
    for kind in kinds {
        let name = kind.name();
        let config = DeckConfig::default().with_element(kind).with_phase_mode(PhaseMode::beam(4));
        group.bench_function(BenchmarkId::new("full_site", name), |b| {
            b.iter(|| generate(&config).map(|deck| deck.render().len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
