use common::instances::random_graph;
use common::sample::Distribution;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use degeneracy_coloring::{color_graph, Algorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let graph = random_graph(&mut rng, 1000, 10_000, Distribution::Uniform).unwrap();

    for algorithm in Algorithm::ALL {
        c.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || graph.clone(),
                |mut graph| black_box(color_graph(&mut graph, algorithm, &mut rng).unwrap()),
                BatchSize::LargeInput,
            )
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
