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
//! Simulation configuration
//!
//! All tunables of the engine live in one value owned by the
//! [`Simulation`](super::Simulation). Nothing is read from global state.

use crate::body::DEFAULT_TRAIL_LENGTH;
use crate::error::{Result, SimulationError};
use crate::integration::DEFAULT_MAX_TIMESTEP;
use crate::interaction::gravity::{
    DEFAULT_GRAVITATIONAL_CONSTANT, DEFAULT_MIN_SEPARATION, DEFAULT_REPULSION_FACTOR,
};
use crate::interaction::teleport::{DEFAULT_EXIT_IMPULSE, DEFAULT_EXIT_MARGIN};
use crate::interaction::ExitPolicy;

/// Engine configuration
///
/// # Example
///
/// ```
/// use gravity_sandbox::simulation::SimulationConfig;
/// use gravity_sandbox::interaction::ExitPolicy;
///
/// let config = SimulationConfig::default()
///     .with_gravitational_constant(250.0)
///     .with_exit_policy(ExitPolicy::FirstInOrder)
///     .with_seed(7);
///
/// assert_eq!(config.gravitational_constant, 250.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant `G` (default 500)
    pub gravitational_constant: f64,
    /// Multiplier on gravity for white-hole repulsion (default 2)
    pub repulsion_factor: f64,
    /// Lower bound on separations used in the force law
    pub min_separation: f64,
    /// Clearance added beyond contact range when a body exits a wormhole
    pub exit_margin: f64,
    /// Speed added to a body along its exit direction
    pub exit_impulse: f64,
    /// Exit wormhole selection when several are available
    pub exit_policy: ExitPolicy,
    /// Number of past positions kept per body
    pub trail_length: usize,
    /// Suggested upper bound for caller frame deltas
    pub max_timestep: f64,
    /// Seed for the teleport angle generator; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            repulsion_factor: DEFAULT_REPULSION_FACTOR,
            min_separation: DEFAULT_MIN_SEPARATION,
            exit_margin: DEFAULT_EXIT_MARGIN,
            exit_impulse: DEFAULT_EXIT_IMPULSE,
            exit_policy: ExitPolicy::default(),
            trail_length: DEFAULT_TRAIL_LENGTH,
            max_timestep: DEFAULT_MAX_TIMESTEP,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Set the gravitational constant
    ///
    /// # Panics
    ///
    /// Panics if `g` is negative or not finite.
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        assert!(g >= 0.0 && g.is_finite(), "Gravitational constant must be non-negative and finite");
        self.gravitational_constant = g;
        self
    }

    /// Set the white-hole repulsion multiplier
    ///
    /// # Panics
    ///
    /// Panics if `factor` is negative or not finite.
    pub fn with_repulsion_factor(mut self, factor: f64) -> Self {
        assert!(factor >= 0.0 && factor.is_finite(), "Repulsion factor must be non-negative and finite");
        self.repulsion_factor = factor;
        self
    }

    /// Set the minimum separation for the force law
    ///
    /// # Panics
    ///
    /// Panics if `min_separation` is not strictly positive and finite.
    pub fn with_min_separation(mut self, min_separation: f64) -> Self {
        assert!(
            min_separation > 0.0 && min_separation.is_finite(),
            "Minimum separation must be positive and finite"
        );
        self.min_separation = min_separation;
        self
    }

    /// Set the wormhole exit margin and impulse
    ///
    /// # Panics
    ///
    /// Panics if either value is negative or not finite.
    pub fn with_exit(mut self, margin: f64, impulse: f64) -> Self {
        assert!(margin >= 0.0 && margin.is_finite(), "Exit margin must be non-negative and finite");
        assert!(impulse >= 0.0 && impulse.is_finite(), "Exit impulse must be non-negative and finite");
        self.exit_margin = margin;
        self.exit_impulse = impulse;
        self
    }

    /// Set the exit wormhole policy
    pub fn with_exit_policy(mut self, policy: ExitPolicy) -> Self {
        self.exit_policy = policy;
        self
    }

    /// Set the trail length
    pub fn with_trail_length(mut self, length: usize) -> Self {
        self.trail_length = length;
        self
    }

    /// Set the suggested maximum frame delta
    ///
    /// # Panics
    ///
    /// Panics if `max_timestep` is not strictly positive and finite.
    pub fn with_max_timestep(mut self, max_timestep: f64) -> Self {
        assert!(
            max_timestep > 0.0 && max_timestep.is_finite(),
            "Maximum timestep must be positive and finite"
        );
        self.max_timestep = max_timestep;
        self
    }

    /// Seed the teleport angle generator for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every field without panicking
    ///
    /// Fields are public, so a config assembled by hand may bypass the
    /// assertions in the `with_*` methods.
    pub fn validate(&self) -> Result<()> {
        fn check(field: &'static str, ok: bool, reason: &str) -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(SimulationError::InvalidConfig {
                    field,
                    reason: reason.to_string(),
                })
            }
        }

        let non_negative = |v: f64| v >= 0.0 && v.is_finite();
        let positive = |v: f64| v > 0.0 && v.is_finite();

        check(
            "gravitational_constant",
            non_negative(self.gravitational_constant),
            "must be non-negative and finite",
        )?;
        check(
            "repulsion_factor",
            non_negative(self.repulsion_factor),
            "must be non-negative and finite",
        )?;
        check(
            "min_separation",
            positive(self.min_separation),
            "must be positive and finite",
        )?;
        check(
            "exit_margin",
            non_negative(self.exit_margin),
            "must be non-negative and finite",
        )?;
        check(
            "exit_impulse",
            non_negative(self.exit_impulse),
            "must be non-negative and finite",
        )?;
        check(
            "max_timestep",
            positive(self.max_timestep),
            "must be positive and finite",
        )?;
        Ok(())
    }
}
