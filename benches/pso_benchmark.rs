use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bhramari::prelude::*;
use bhramari::test_functions::Rastrigin;

fn pso_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("PSO");
    for n in [2, 3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("Rastrigin", n), &n, |b, ndim| {
            let problem = Rastrigin { n: *ndim };
            b.iter(|| {
                let config = PSOConfig::new(-5.12, 5.12, 50, *ndim, 200)
                    .with_c1(0.5)
                    .with_c2(1.0)
                    .with_omega(0.8);
                let mut pso = PSO::new(config, fastrand::Rng::with_seed(0)).unwrap();
                pso.optimize(&problem, &mut ()).unwrap();
                black_box(pso.state());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, pso_benchmark);
criterion_main!(benches);
