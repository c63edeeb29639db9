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
//! # Gravity Sandbox
//!
//! A 2D gravitational particle engine for interactive sandboxes: bodies of
//! several kinds attract, repel, merge on contact and travel through
//! wormholes.
//!
//! ## Features
//!
//! - **Newtonian Gravity**: configurable `G`, O(N²) pairwise forces
//! - **Body Kinds**: planets, stars, black holes, white holes, wormholes and
//!   antimatter, each with its own interaction rules
//! - **Collisions**: momentum-conserving mergers
//! - **Wormholes**: contact relocates bodies next to another wormhole
//! - **Trails**: bounded position history for rendering
//! - **Parallelization**: optional Rayon integration for energy diagnostics
//!
//! ## Example
//!
//! ```rust
//! use gravity_sandbox::{BodyKind, Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::new(SimulationConfig::default().with_seed(7)).unwrap();
//! sim.add_body(-20.0, 0.0, 10.0, BodyKind::Planet).unwrap();
//! sim.add_body(20.0, 0.0, 10.0, BodyKind::Planet).unwrap();
//!
//! sim.update(0.01);
//!
//! let bodies = sim.bodies();
//! assert!(bodies[0].velocity().x > 0.0);
//! assert!(bodies[1].velocity().x < 0.0);
//! ```

#![warn(missing_docs)]

/// Bodies and their attributes
pub mod body;

/// Error types
pub mod error;

/// Time integration and conserved quantities
pub mod integration;

/// Pairwise interaction rules
pub mod interaction;

/// Preset starting configurations
pub mod scenario;

/// Simulation state and the tick
pub mod simulation;

pub use body::{Body, BodyHandle, BodyKind};
pub use error::{Result, SimulationError};
pub use scenario::Scenario;
pub use simulation::{Simulation, SimulationConfig, TickReport, TickStatus};
