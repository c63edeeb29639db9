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
//! Wormhole teleportation
//!
//! A body touching a wormhole reappears next to another wormhole (the
//! "exit"), at a random angle θ around it and just outside contact range:
//!
//! ```text
//! position = exit + (cos θ, sin θ) · (r_exit + r_body + margin)
//! velocity += (cos θ, sin θ) · impulse
//! ```
//!
//! With no exit available the contact has no effect.

use crate::body::{Body, BodyKind};
use glam::DVec2;

/// Default clearance between the exit wormhole and the arriving body
pub const DEFAULT_EXIT_MARGIN: f64 = 5.0;

/// Default speed added along the exit direction
pub const DEFAULT_EXIT_IMPULSE: f64 = 100.0;

/// How an exit wormhole is picked when several exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// The wormhole closest to the entry wormhole; ties go to the one that
    /// comes first in collection order
    #[default]
    Nearest,
    /// The first other wormhole in collection order
    FirstInOrder,
}

/// Index of the exit wormhole for a body entering `bodies[entry]`
///
/// Every wormhole other than the entry one is a candidate. Wormholes never
/// merge, so candidates are always live bodies.
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::{Body, BodyKind};
/// use gravity_sandbox::interaction::{select_exit, ExitPolicy};
///
/// let bodies = vec![
///     Body::new(0.0, 0.0, 0.0, BodyKind::Wormhole).unwrap(),
///     Body::new(900.0, 0.0, 0.0, BodyKind::Wormhole).unwrap(),
///     Body::new(50.0, 0.0, 10.0, BodyKind::Planet).unwrap(),
///     Body::new(100.0, 0.0, 0.0, BodyKind::Wormhole).unwrap(),
/// ];
///
/// assert_eq!(select_exit(&bodies, 0, ExitPolicy::Nearest), Some(3));
/// assert_eq!(select_exit(&bodies, 0, ExitPolicy::FirstInOrder), Some(1));
/// ```
pub fn select_exit(bodies: &[Body], entry: usize, policy: ExitPolicy) -> Option<usize> {
    let entry_position = bodies.get(entry)?.position();
    let mut candidates = bodies
        .iter()
        .enumerate()
        .filter(|(index, body)| *index != entry && body.kind() == BodyKind::Wormhole);

    match policy {
        ExitPolicy::FirstInOrder => candidates.next().map(|(index, _)| index),
        ExitPolicy::Nearest => candidates
            .fold(None, |best: Option<(usize, f64)>, (index, body)| {
                let distance = body.position().distance_squared(entry_position);
                match best {
                    Some((_, best_distance)) if best_distance <= distance => best,
                    _ => Some((index, distance)),
                }
            })
            .map(|(index, _)| index),
    }
}

/// Where a teleported body lands and the velocity it gains
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Teleport {
    /// New position of the traveler
    pub position: DVec2,
    /// Velocity added to the traveler
    pub impulse: DVec2,
}

/// Compute the arrival state of `traveler` at `exit` for the given angle
pub fn plan_teleport(exit: &Body, traveler: &Body, angle: f64, margin: f64, impulse: f64) -> Teleport {
    let direction = DVec2::new(angle.cos(), angle.sin());
    let offset = exit.radius() + traveler.radius() + margin;

    Teleport {
        position: exit.position() + direction * offset,
        impulse: direction * impulse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn wormhole(x: f64, y: f64) -> Body {
        Body::new(x, y, 0.0, BodyKind::Wormhole).unwrap()
    }

    #[test]
    fn test_no_exit_without_second_wormhole() {
        let bodies = vec![wormhole(0.0, 0.0), Body::new(1.0, 0.0, 1.0, BodyKind::Planet).unwrap()];
        assert_eq!(select_exit(&bodies, 0, ExitPolicy::Nearest), None);
        assert_eq!(select_exit(&bodies, 0, ExitPolicy::FirstInOrder), None);
    }

    #[test]
    fn test_entry_out_of_range() {
        let bodies = vec![wormhole(0.0, 0.0)];
        assert_eq!(select_exit(&bodies, 5, ExitPolicy::Nearest), None);
    }

    #[test]
    fn test_nearest_ties_go_to_collection_order() {
        let bodies = vec![
            wormhole(0.0, 0.0),
            wormhole(-10.0, 0.0),
            wormhole(10.0, 0.0),
        ];
        assert_eq!(select_exit(&bodies, 0, ExitPolicy::Nearest), Some(1));
    }

    #[test]
    fn test_nearest_is_measured_from_entry() {
        let bodies = vec![
            wormhole(500.0, 0.0),
            wormhole(0.0, 0.0),
            wormhole(450.0, 0.0),
        ];
        assert_eq!(select_exit(&bodies, 1, ExitPolicy::Nearest), Some(2));
        assert_eq!(select_exit(&bodies, 2, ExitPolicy::Nearest), Some(0));
    }

    #[test]
    fn test_plan_teleport_offsets_past_contact() {
        let exit = Body::new(100.0, 100.0, 25.0, BodyKind::Wormhole).unwrap(); // r = 10
        let traveler = Body::new(0.0, 0.0, 4.0, BodyKind::Planet).unwrap(); // r = 4

        let plan = plan_teleport(&exit, &traveler, FRAC_PI_2, DEFAULT_EXIT_MARGIN, DEFAULT_EXIT_IMPULSE);
        assert!((plan.position - DVec2::new(100.0, 119.0)).length() < 1e-9);
        assert!((plan.impulse - DVec2::new(0.0, 100.0)).length() < 1e-9);

        let gap = plan.position.distance(exit.position());
        assert!(gap > exit.radius() + traveler.radius());
    }
}
