// Generation, shortest path and codec throughput
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ergraph::codec::{decode_str, encode_to_string};
use ergraph::prelude::*;
use rand::prelude::*;

fn random_graph(nodes: usize, probability: f64) -> GraphStore {
    RandomGraphGenerator::new(GeneratorConfig::new(nodes, probability).with_seed(42))
        .generate(&mut IndexedLabels::default())
        .unwrap()
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("gnp_p0.05", size), size, |b, &size| {
            let generator = RandomGraphGenerator::new(GeneratorConfig::new(size, 0.05));
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let graph = generator
                    .generate_with_rng(&mut rng, &mut IndexedLabels::default())
                    .unwrap();
                black_box(graph);
            });
        });
    }

    group.finish();
}

fn benchmark_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    let graph = random_graph(5000, 0.001);
    let nodes: Vec<String> = graph.nodes().map(str::to_string).collect();
    let mut rng = StdRng::seed_from_u64(11);

    group.bench_function("bfs_random_pairs", |b| {
        b.iter(|| {
            let source = &nodes[rng.random_range(0..nodes.len())];
            let target = &nodes[rng.random_range(0..nodes.len())];
            black_box(shortest_path(&graph, black_box(source), black_box(target)).ok());
        });
    });

    group.finish();
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let graph = random_graph(2000, 0.01);
    let text = encode_to_string(&graph).unwrap();

    group.bench_function("encode", |b| {
        b.iter(|| black_box(encode_to_string(black_box(&graph)).unwrap()));
    });
    group.bench_function("decode", |b| {
        b.iter(|| black_box(decode_str(black_box(&text))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_generate, benchmark_shortest_path, benchmark_codec);
criterion_main!(benches);
