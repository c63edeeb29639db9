// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Benchmarks for the simulation tick
//!
//! These benchmarks measure:
//! - Tick throughput for growing body counts (O(N²) pair resolution)
//! - The potential-energy diagnostic, parallel when the feature is enabled

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use gravity_sandbox::{BodyKind, Simulation, SimulationConfig};

/// Bodies on a square grid, spaced so that none touch
fn setup_grid(body_count: usize) -> Simulation {
    let _ = env_logger::try_init();
    let mut sim = Simulation::new(SimulationConfig::default().with_seed(0))
        .expect("default config is valid");
    let side = (body_count as f64).sqrt().ceil() as usize;

    for index in 0..body_count {
        let x = (index % side) as f64 * 100.0;
        let y = (index / side) as f64 * 100.0;
        let kind = if index % 7 == 0 { BodyKind::Star } else { BodyKind::Planet };
        sim.add_body(x, y, 5.0, kind).expect("grid bodies are valid");
    }

    sim
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for body_count in [10, 100, 500].iter() {
        let pairs = body_count * (body_count - 1) / 2;
        group.throughput(Throughput::Elements(pairs as u64));

        group.bench_with_input(
            BenchmarkId::new("update", body_count),
            body_count,
            |b, &body_count| {
                b.iter_batched(
                    || setup_grid(body_count),
                    |mut sim| black_box(sim.update(black_box(1.0 / 60.0))),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");

    for body_count in [100, 1000].iter() {
        let sim = setup_grid(*body_count);
        group.bench_with_input(BenchmarkId::new("potential", body_count), &sim, |b, sim| {
            b.iter(|| black_box(sim.energy()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_energy);
criterion_main!(benches);
