// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use tumble_core::demo::{pendulum_chain, rain};
use tumble_core::PhysicsConfig;

const DT: f32 = 1.0 / 60.0;

fn bench_rain_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("rain_step");
    for &n in &[16usize, 128, 512] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || rain(PhysicsConfig::default(), n, 3).expect("scene"),
                |mut scene| {
                    for _ in 0..10 {
                        scene.world.step(DT, &scene.ground);
                    }
                    scene.world.state_hash()
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_spring_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("pendulum_step");
    for &links in &[8usize, 64, 512] {
        group.throughput(Throughput::Elements(links as u64));
        group.bench_with_input(BenchmarkId::from_parameter(links), &links, |b, &links| {
            let mut scene = pendulum_chain(PhysicsConfig::default(), links).expect("scene");
            b.iter(|| black_box(scene.world.step(DT, &[])));
        });
    }
    group.finish();
}

fn bench_state_hash(c: &mut Criterion) {
    let scene = rain(PhysicsConfig::default(), 1_024, 5).expect("scene");
    c.bench_function("state_hash_1024", |b| {
        b.iter(|| black_box(scene.world.state_hash()));
    });
}

criterion_group!(benches, bench_rain_step, bench_spring_chain, bench_state_hash);
criterion_main!(benches);
