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
//! Error types for body construction and simulation configuration
//!
//! Only recoverable failures are represented here. Degenerate geometry found
//! while resolving a tick (coincident bodies, non-finite forces) is handled
//! inside the tick and reported through [`TickReport`](crate::simulation::TickReport)
//! instead of being propagated.

use crate::body::BodyKind;
use std::error::Error;
use std::fmt;

/// Errors produced by the simulation core
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Mass is negative, NaN or infinite
    InvalidMass {
        /// Kind of the rejected body
        kind: BodyKind,
        /// Rejected mass value
        mass: f64,
    },
    /// Mass is zero for a kind that must respond to forces
    ///
    /// Only wormholes may be massless.
    MasslessBody {
        /// Kind of the rejected body
        kind: BodyKind,
    },
    /// A coordinate is NaN or infinite
    InvalidPosition {
        /// Rejected x coordinate
        x: f64,
        /// Rejected y coordinate
        y: f64,
    },
    /// A configuration value is out of range
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable constraint that was violated
        reason: String,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidMass { kind, mass } => {
                write!(f, "invalid mass {:?} for {}: must be finite and non-negative", mass, kind)
            }
            SimulationError::MasslessBody { kind } => {
                write!(f, "{} bodies cannot have zero mass", kind)
            }
            SimulationError::InvalidPosition { x, y } => {
                write!(f, "invalid position ({:?}, {:?}): coordinates must be finite", x, y)
            }
            SimulationError::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration for `{}`: {}", field, reason)
            }
        }
    }
}

impl Error for SimulationError {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SimulationError::InvalidMass {
            kind: BodyKind::Planet,
            mass: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid mass -1.0 for planet: must be finite and non-negative"
        );

        let err = SimulationError::MasslessBody { kind: BodyKind::Star };
        assert_eq!(err.to_string(), "star bodies cannot have zero mass");

        let err = SimulationError::InvalidConfig {
            field: "gravitational_constant",
            reason: "must be finite".to_string(),
        };
        assert!(err.to_string().contains("gravitational_constant"));
    }
}
