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
//! End-to-end scenarios run through the public API

use glam::DVec2;
use gravity_sandbox::{BodyKind, Scenario, Simulation, SimulationConfig};

fn simulation() -> Simulation {
    Simulation::new(SimulationConfig::default().with_seed(2025)).unwrap()
}

#[test]
fn test_two_bodies_attract_along_x_axis() {
    let mut sim = simulation();
    // far enough apart that the discs (radius 2·√10 each) do not touch
    let a = sim.add_body(-10.0, 0.0, 10.0, BodyKind::Planet).unwrap();
    let b = sim.add_body(10.0, 0.0, 10.0, BodyKind::Planet).unwrap();

    let report = sim.update(0.01);
    assert!(report.merges.is_empty());

    let va = sim.body(a).unwrap().velocity();
    let vb = sim.body(b).unwrap().velocity();
    assert!(va.x > 0.0);
    assert!(vb.x < 0.0);
    assert_eq!(va.y, 0.0);
    assert_eq!(vb.y, 0.0);
    assert!((va.x + vb.x).abs() < 1e-12);

    // G·m·m/r² / m · dt = 500·10/400 · 0.01
    assert!((va.x - 0.125).abs() < 1e-12);
}

#[test]
fn test_touching_bodies_merge_at_centroid() {
    let mut sim = simulation();
    let a = sim.add_body(0.0, 0.0, 10.0, BodyKind::Planet).unwrap();
    let b = sim.add_body(4.0, 0.0, 10.0, BodyKind::Planet).unwrap();

    let report = sim.update(0.01);

    assert_eq!(sim.len(), 1);
    assert!(sim.body(a).is_none());
    assert!(sim.body(b).is_none());

    let merged = &sim.bodies()[0];
    assert_eq!(merged.mass(), 20.0);
    assert_eq!(merged.position(), DVec2::new(2.0, 0.0));
    assert_eq!(report.merges[0].product, merged.handle());
    assert_eq!(report.merges[0].absorbed, [a, b]);
}

#[test]
fn test_star_with_planets_stays_bound() {
    let mut sim = simulation();
    let handles = Scenario::StarWithPlanets.populate(&mut sim).unwrap();

    for _ in 0..3000 {
        sim.update(1.0 / 120.0);
    }

    assert_eq!(sim.len(), 3);
    let star = sim.body(handles[0]).unwrap().position();
    let inner = sim.body(handles[1]).unwrap().position().distance(star);
    let outer = sim.body(handles[2]).unwrap().position().distance(star);
    assert!((inner - 300.0).abs() < 60.0, "inner orbit radius {}", inner);
    assert!((outer - 500.0).abs() < 100.0, "outer orbit radius {}", outer);
}

#[test]
fn test_wormhole_pair_teleports_traveler() {
    let mut sim = simulation();
    Scenario::WormholePair.populate(&mut sim).unwrap();

    let teleports: usize = (0..600).map(|_| sim.update(0.01).teleports).sum();
    assert!(teleports >= 1);
    assert_eq!(sim.len(), 3);
}

#[test]
fn test_seeded_runs_match() {
    let run = || {
        let mut sim = simulation();
        Scenario::WormholePair.populate(&mut sim).unwrap();
        Scenario::BinaryStars.populate(&mut sim).unwrap();
        for _ in 0..400 {
            sim.update(0.01);
        }
        sim.bodies()
            .iter()
            .map(|body| body.position())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_clear_then_repopulate() {
    let mut sim = simulation();
    let first = Scenario::BinaryStars.populate(&mut sim).unwrap();
    sim.clear();
    assert!(sim.is_empty());

    let second = Scenario::BinaryStars.populate(&mut sim).unwrap();
    assert!(first.iter().all(|h| !second.contains(h)));
    assert_eq!(sim.len(), 3);
}
