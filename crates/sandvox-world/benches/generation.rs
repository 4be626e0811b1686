//! Benchmarks for initial chunk generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sandvox_world::{HeightField, TerrainStore, WorldConfig};

fn chunk_generation(c: &mut Criterion) {
    let config = WorldConfig::default();

    c.bench_function("generate_initial_chunk", |b| {
        b.iter(|| TerrainStore::generate(black_box(&config)).unwrap());
    });

    let field = HeightField::new(&config);
    c.bench_function("height_field_column", |b| {
        b.iter(|| field.height_at(black_box(7), black_box(-3)));
    });
}

criterion_group!(benches, chunk_generation);
criterion_main!(benches);
