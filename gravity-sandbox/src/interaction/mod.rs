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
//! Pairwise interaction rules
//!
//! Every unordered pair of bodies resolves to exactly one [`Interaction`],
//! chosen by [`classify`] in this priority order:
//!
//! 1. **Wormhole pass-through**: two wormholes ignore each other; a wormhole
//!    touching anything else teleports the other body
//! 2. **Contact collision**: overlapping bodies merge
//! 3. **Repulsion**: separated pairs involving a white hole push apart with
//!    the gravity magnitude scaled by the repulsion factor
//! 4. **Attraction**: plain Newtonian gravity
//!
//! "Touching" means `distance < radius_a + radius_b`.
//!
//! The submodules implement the outcomes: [`gravity`] the force law,
//! [`merge`] collision resolution, [`teleport`] exit selection and placement.

pub mod gravity;
pub mod merge;
pub mod teleport;

pub use gravity::GravityLaw;
pub use merge::{merge_bodies, merged_kind};
pub use teleport::{plan_teleport, select_exit, ExitPolicy, Teleport};

use crate::body::{Body, BodyKind};
use glam::DVec2;

/// One of the two bodies in a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The body with the lower index in the pair
    First,
    /// The body with the higher index in the pair
    Second,
}

/// Outcome selected for a pair of bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// No effect at all (two wormholes)
    Ignore,
    /// The `traveler` touched a wormhole and is sent to an exit wormhole
    Teleport {
        /// Body that gets relocated; the other one is the entry wormhole
        traveler: Side,
    },
    /// The bodies overlap and combine into one
    Merge,
    /// Separated bodies exchange a force of `scale` times Newtonian gravity
    ///
    /// `scale` is `1.0` for attraction and negative for repulsion.
    Gravity {
        /// Multiplier applied to the attractive magnitude
        scale: f64,
    },
}

/// Select the interaction for a pair
///
/// `repulsion_factor` is the white-hole strength multiplier (2 by default);
/// the returned gravity scale is its negation.
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::BodyKind;
/// use gravity_sandbox::interaction::{classify, Interaction, Side};
///
/// assert_eq!(
///     classify(BodyKind::Planet, BodyKind::Wormhole, true, 2.0),
///     Interaction::Teleport { traveler: Side::First }
/// );
/// assert_eq!(
///     classify(BodyKind::Planet, BodyKind::WhiteHole, false, 2.0),
///     Interaction::Gravity { scale: -2.0 }
/// );
/// ```
pub fn classify(a: BodyKind, b: BodyKind, in_contact: bool, repulsion_factor: f64) -> Interaction {
    use BodyKind::{WhiteHole, Wormhole};

    match (a, b, in_contact) {
        (Wormhole, Wormhole, _) => Interaction::Ignore,
        (Wormhole, _, true) => Interaction::Teleport { traveler: Side::Second },
        (_, Wormhole, true) => Interaction::Teleport { traveler: Side::First },
        (_, _, true) => Interaction::Merge,
        (WhiteHole, _, false) | (_, WhiteHole, false) => Interaction::Gravity {
            scale: -repulsion_factor,
        },
        (_, _, false) => Interaction::Gravity { scale: 1.0 },
    }
}

/// Relative geometry of a pair, measured from the first body to the second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairGeometry {
    /// `position_b - position_a`
    pub offset: DVec2,
    /// Center-to-center distance
    pub distance: f64,
    /// Sum of radii
    pub contact_distance: f64,
}

impl PairGeometry {
    /// Measure the pair `(a, b)`
    pub fn between(a: &Body, b: &Body) -> Self {
        let offset = b.position() - a.position();
        PairGeometry {
            offset,
            distance: offset.length(),
            contact_distance: a.radius() + b.radius(),
        }
    }

    /// Whether the discs overlap
    pub fn in_contact(&self) -> bool {
        self.distance < self.contact_distance
    }
}
