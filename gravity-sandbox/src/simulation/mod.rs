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
//! Simulation management
//!
//! The [`Simulation`] owns every body, the configuration, and the random
//! source used for teleports. A tick ([`Simulation::update`]) runs in two
//! phases:
//!
//! 1. **Interactions**: every pair `(i, j)` with `i < j` among the bodies
//!    present at the start of the tick is classified and resolved. Merged
//!    bodies are only marked; pairs that reference them afterwards are
//!    skipped, and merge products wait for the next tick before interacting.
//!    Teleports move bodies in place, so later pairs see the new position.
//! 2. **Integration**: marked bodies are compacted away (the relative order
//!    of survivors is preserved), merge products are appended, and every
//!    body integrates exactly once.
//!
//! The pair loop is O(N²) by construction; there is no spatial index.

mod config;
mod report;

pub use config::SimulationConfig;
pub use report::{MergeEvent, TickReport, TickStatus};

use crate::body::{Body, BodyHandle, BodyKind, HandleAllocator};
use crate::error::Result;
use crate::integration::{self, EnergyReport};
use crate::interaction::{
    classify, merge_bodies, plan_teleport, select_exit, GravityLaw, Interaction, PairGeometry,
    Side,
};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// The body collection and the rules that advance it
///
/// # Example
///
/// ```
/// use gravity_sandbox::{BodyKind, Simulation, SimulationConfig};
///
/// let mut sim = Simulation::new(SimulationConfig::default().with_seed(1)).unwrap();
/// let star = sim.add_body(0.0, 0.0, 1000.0, BodyKind::Star).unwrap();
/// sim.add_body(300.0, 0.0, 20.0, BodyKind::Planet).unwrap();
///
/// let report = sim.update(1.0 / 60.0);
/// assert!(report.advanced());
/// assert_eq!(sim.len(), 2);
/// assert!(sim.body(star).is_some());
/// ```
pub struct Simulation {
    bodies: Vec<Body>,
    config: SimulationConfig,
    law: GravityLaw,
    paused: bool,
    handles: HandleAllocator,
    rng: StdRng,
    elapsed: f64,
    ticks: u64,
}

impl Simulation {
    /// Create an empty simulation
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidConfig`](crate::SimulationError::InvalidConfig)
    /// if the configuration does not validate.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SimulationConfig) -> Self {
        let law = GravityLaw::new(config.gravitational_constant)
            .with_min_separation(config.min_separation);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Simulation {
            bodies: Vec::new(),
            config,
            law,
            paused: false,
            handles: HandleAllocator::default(),
            rng,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Force law built from the configuration
    pub fn gravity_law(&self) -> &GravityLaw {
        &self.law
    }

    /// Construct a body and append it
    ///
    /// # Errors
    ///
    /// Propagates the construction error from [`Body::new`]; the collection is
    /// left unchanged.
    pub fn add_body(&mut self, x: f64, y: f64, mass: f64, kind: BodyKind) -> Result<BodyHandle> {
        let body = Body::new(x, y, mass, kind).map_err(|err| {
            log::debug!("Rejected {} spawn at ({}, {}): {}", kind, x, y, err);
            err
        })?;
        Ok(self.insert_body(body))
    }

    /// Append a body of `kind` with its default spawn mass
    pub fn spawn(&mut self, x: f64, y: f64, kind: BodyKind) -> Result<BodyHandle> {
        self.add_body(x, y, kind.default_spawn_mass(), kind)
    }

    /// Append a pre-built body, assigning it a fresh handle
    ///
    /// Any handle the body carried before is replaced.
    pub fn insert_body(&mut self, mut body: Body) -> BodyHandle {
        let handle = self.handles.allocate();
        body.attach(handle, self.config.trail_length);
        log::debug!(
            "Adding {} {} at ({:.1}, {:.1}), mass {}",
            body.kind(),
            handle,
            body.position().x,
            body.position().y,
            body.mass()
        );
        self.bodies.push(body);
        handle
    }

    /// Remove a body
    ///
    /// Returns `false` if the handle no longer resolves.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        match self.index_of(handle) {
            Some(index) => {
                self.bodies.remove(index);
                log::debug!("Removed {}", handle);
                true
            }
            None => false,
        }
    }

    /// Remove every body
    ///
    /// Handles keep increasing afterwards, so stale handles never resolve to
    /// new bodies.
    pub fn clear(&mut self) {
        log::debug!("Clearing {} bodies", self.bodies.len());
        self.bodies.clear();
    }

    /// Look up a body
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.iter().find(|body| body.handle() == handle)
    }

    /// Mutable access for direct manipulation between ticks
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|body| body.handle() == handle)
    }

    /// Drag gesture: move the body to `(x, y)` and zero its velocity
    ///
    /// Returns `false` if the handle no longer resolves.
    pub fn drag_body(&mut self, handle: BodyHandle, x: f64, y: f64) -> bool {
        match self.body_mut(handle) {
            Some(body) => {
                body.drag_to(x, y);
                true
            }
            None => false,
        }
    }

    /// All bodies, back to front
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Top-most body containing the point, if any
    pub fn body_at(&self, x: f64, y: f64) -> Option<BodyHandle> {
        let point = DVec2::new(x, y);
        self.bodies
            .iter()
            .rev()
            .find(|body| body.contains_point(point))
            .map(Body::handle)
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether there are no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Stop advancing on `update`
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume advancing on `update`
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the paused flag and return the new state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Whether `update` is currently a no-op
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Simulated time accumulated by advanced ticks
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of advanced ticks
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Sum of body masses
    pub fn total_mass(&self) -> f64 {
        integration::total_mass(&self.bodies)
    }

    /// Sum of body momenta
    pub fn total_momentum(&self) -> DVec2 {
        integration::total_momentum(&self.bodies)
    }

    /// Kinetic and potential energy of the current state
    pub fn energy(&self) -> EnergyReport {
        EnergyReport {
            kinetic: integration::total_kinetic_energy(&self.bodies),
            potential: self
                .law
                .potential_energy(&self.bodies, self.config.repulsion_factor),
        }
    }

    /// Advance the simulation by `dt`
    ///
    /// Does nothing while paused or when `dt` is negative or not finite.
    /// Large values are accepted but lose accuracy; clamp them with
    /// [`integration::clamp_timestep`] first.
    pub fn update(&mut self, dt: f64) -> TickReport {
        if self.paused {
            return TickReport::with_status(TickStatus::Paused);
        }
        if !integration::is_usable_timestep(dt) {
            log::warn!("Skipping tick: invalid timestep {}", dt);
            return TickReport::with_status(TickStatus::InvalidTimestep);
        }
        if integration::is_large_timestep(dt) {
            log::debug!("Timestep {} is large and may cause instability", dt);
        }

        let mut report = TickReport::default();
        self.resolve_interactions(&mut report);

        for body in &mut self.bodies {
            body.integrate(dt);
        }

        self.elapsed += dt;
        self.ticks += 1;
        report
    }

    fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.bodies.iter().position(|body| body.handle() == handle)
    }

    /// Resolve every pair present at the start of the tick, then compact
    fn resolve_interactions(&mut self, report: &mut TickReport) {
        let count = self.bodies.len();
        let mut removed = vec![false; count];
        let mut products = Vec::new();

        for i in 0..count {
            for j in (i + 1)..count {
                if removed[i] {
                    break;
                }
                if removed[j] {
                    continue;
                }
                report.pairs_visited += 1;

                if let Some(merged) = self.resolve_pair(i, j, report) {
                    removed[i] = true;
                    removed[j] = true;
                    products.push((merged, [self.bodies[i].handle(), self.bodies[j].handle()]));
                }
            }
        }

        if products.is_empty() {
            return;
        }

        let mut index = 0;
        self.bodies.retain(|_| {
            let keep = !removed[index];
            index += 1;
            keep
        });

        for (merged, absorbed) in products {
            let product = self.insert_body(merged);
            log::trace!("Merged {} and {} into {}", absorbed[0], absorbed[1], product);
            report.merges.push(MergeEvent { absorbed, product });
        }
    }

    /// Apply the interaction for `(i, j)`
    ///
    /// Returns the merge product when the pair collided; the caller owns the
    /// structural change.
    fn resolve_pair(&mut self, i: usize, j: usize, report: &mut TickReport) -> Option<Body> {
        let (a, b) = (&self.bodies[i], &self.bodies[j]);
        let geometry = PairGeometry::between(a, b);

        match classify(a.kind(), b.kind(), geometry.in_contact(), self.config.repulsion_factor) {
            Interaction::Ignore => None,
            Interaction::Teleport { traveler } => {
                let (traveler, entry) = match traveler {
                    Side::First => (i, j),
                    Side::Second => (j, i),
                };
                self.teleport(traveler, entry, report);
                None
            }
            Interaction::Merge => match merge_bodies(a, b) {
                Ok(merged) => Some(merged),
                Err(err) => {
                    log::warn!("Could not merge {} and {}: {}", a.handle(), b.handle(), err);
                    None
                }
            },
            Interaction::Gravity { scale } => {
                match self.law.pair_force(a.mass(), b.mass(), geometry.offset, scale) {
                    Ok(force) => {
                        if self.bodies[i].kind().receives_forces() {
                            self.bodies[i].apply_force(force);
                        }
                        if self.bodies[j].kind().receives_forces() {
                            self.bodies[j].apply_force(-force);
                        }
                    }
                    Err(rejection) => {
                        log::warn!(
                            "No force between {} and {}: {:?}",
                            self.bodies[i].handle(),
                            self.bodies[j].handle(),
                            rejection
                        );
                        report.degenerate_pairs += 1;
                    }
                }
                None
            }
        }
    }

    /// Send `bodies[traveler]` from the wormhole at `entry` to an exit
    fn teleport(&mut self, traveler: usize, entry: usize, report: &mut TickReport) {
        let Some(exit) = select_exit(&self.bodies, entry, self.config.exit_policy) else {
            report.stranded += 1;
            return;
        };

        let angle = self.rng.random_range(0.0..TAU);
        let plan = plan_teleport(
            &self.bodies[exit],
            &self.bodies[traveler],
            angle,
            self.config.exit_margin,
            self.config.exit_impulse,
        );
        self.bodies[traveler].teleport(plan.position, plan.impulse);
        report.teleports += 1;

        log::trace!(
            "Teleported {} from {} to {}",
            self.bodies[traveler].handle(),
            self.bodies[entry].handle(),
            self.bodies[exit].handle()
        );
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::from_valid_config(SimulationConfig::default())
    }
}
