// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use tumble_core::demo::rain;
use tumble_core::PhysicsConfig;

// All-pairs scan cost grows as n²; throughput is reported per pair tested.
fn bench_sphere_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_pair_scan");
    for &n in &[8usize, 64, 256, 1_024] {
        let pairs = n * (n - 1) / 2;
        group.throughput(Throughput::Elements(pairs as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || rain(PhysicsConfig::without_gravity(), n, 11).expect("scene"),
                |mut scene| scene.world.check_sphere_collisions().len(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_static_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("static_scan");
    for &n in &[8usize, 64, 256, 1_024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || rain(PhysicsConfig::without_gravity(), n, 11).expect("scene"),
                |mut scene| scene.world.check_static_collisions(&scene.ground).len(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere_scan, bench_static_scan);
criterion_main!(benches);
