use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use torus_life::{Automaton, Config};

const SEED: u64 = 42;

fn advance(c: &mut Criterion) {
    let mut life = Automaton::new(Config::WORLD_SIZE).unwrap();
    life.seed(
        &mut rand_chacha::ChaCha8Rng::seed_from_u64(SEED),
        Config::FILL_FACTOR,
    );
    c.bench_function(&format!("advance_{}", Config::WORLD_SIZE), |b| {
        b.iter(|| life.advance())
    });
}

fn seed(c: &mut Criterion) {
    let mut life = Automaton::new(Config::WORLD_SIZE).unwrap();
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    c.bench_function(&format!("seed_{}", Config::WORLD_SIZE), |b| {
        b.iter(|| life.seed(&mut rng, Config::FILL_FACTOR))
    });
}

criterion_group!(benches, advance, seed);
criterion_main!(benches);
