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
//! Headless run of a preset scenario
//!
//! ```text
//! RUST_LOG=debug cargo run --example orbits -- binary-stars 600
//! ```
//!
//! Arguments: scenario name (default `star-with-planets`) and number of
//! 60 Hz frames (default 1200).

use anyhow::{bail, Context, Result};
use gravity_sandbox::integration::clamp_timestep;
use gravity_sandbox::{Scenario, Simulation, SimulationConfig};

const FRAME_DELTA: f64 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let scenario = match args.next() {
        Some(name) => match Scenario::ALL.iter().find(|s| s.name() == name) {
            Some(scenario) => *scenario,
            None => bail!(
                "unknown scenario '{}', expected one of: {}",
                name,
                Scenario::ALL.map(|s| s.name()).join(", ")
            ),
        },
        None => Scenario::StarWithPlanets,
    };
    let frames: u64 = match args.next() {
        Some(raw) => raw.parse().with_context(|| format!("invalid frame count '{}'", raw))?,
        None => 1200,
    };

    let config = SimulationConfig::default().with_seed(42);
    let max_timestep = config.max_timestep;
    let mut sim = Simulation::new(config).context("building simulation")?;
    scenario.populate(&mut sim)?;

    let initial = sim.energy();
    log::info!(
        "Running {} for {} frames: {} bodies, energy {:.3}",
        scenario,
        frames,
        sim.len(),
        initial.total()
    );

    let (mut merges, mut teleports) = (0, 0);
    for _ in 0..frames {
        let report = sim.update(clamp_timestep(FRAME_DELTA, max_timestep));
        merges += report.merges.len();
        teleports += report.teleports;
    }

    let energy = sim.energy();
    println!("scenario:      {}", scenario);
    println!("elapsed:       {:.2}", sim.elapsed());
    println!("bodies:        {}", sim.len());
    println!("merges:        {}", merges);
    println!("teleports:     {}", teleports);
    println!("total mass:    {:.3}", sim.total_mass());
    println!("momentum:      {:.3?}", sim.total_momentum());
    println!(
        "energy drift:  {:.3e}",
        (energy.total() - initial.total()) / initial.total().abs().max(f64::EPSILON)
    );

    for body in sim.bodies() {
        println!(
            "  {} {:<10} mass {:>8.1} at ({:>9.2}, {:>9.2})",
            body.handle(),
            body.kind(),
            body.mass(),
            body.position().x,
            body.position().y
        );
    }

    Ok(())
}
