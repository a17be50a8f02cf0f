use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use garud::{
    Catalog, DossierConfig, DossierGenerator, EntityKind, QueryResolver, RngChoice, SessionConfig,
    SessionController,
};

/// Benchmark query resolution against the built-in catalog
fn bench_resolve(c: &mut Criterion) {
    let catalog = Catalog::builtin(&DossierGenerator::new(DossierConfig::default()), &mut RngChoice::from_seed(1));
    let resolver = QueryResolver::new();
    let mut group = c.benchmark_group("resolve");

    for query in ["", "mofa", "iran russia", "commander", "nonexistent-xyz"] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", query)), query, |b, q| {
            b.iter(|| resolver.resolve(black_box(q), &catalog));
        });
    }
    group.finish();
}

/// Benchmark dossier synthesis per entity kind
fn bench_dossier(c: &mut Criterion) {
    let dossiers = DossierGenerator::new(DossierConfig::default());
    let mut rng = RngChoice::from_seed(2);
    let mut group = c.benchmark_group("dossier");

    for kind in EntityKind::EXPANDABLE {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| dossiers.generate(kind, "Bench Subject", &mut rng));
        });
    }
    group.finish();
}

/// Benchmark repeated expansion of a growing snapshot
fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion");

    for rounds in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(rounds), &rounds, |b, &rounds| {
            b.iter(|| {
                let mut session = SessionController::new(&SessionConfig::default().with_seed(3)).unwrap();
                for _ in 0..rounds {
                    session.expand_selected("T-1001");
                }
                session.active().node_count()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_dossier, bench_expansion);
criterion_main!(benches);
