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
//! Collision resolution through momentum-conserving mergers
//!
//! Two overlapping bodies become one body that conserves:
//! - Total mass: `m = m_a + m_b`
//! - Center of mass: `p = (p_a·m_a + p_b·m_b) / m`
//! - Momentum: `v = (v_a·m_a + v_b·m_b) / m`
//!
//! The radius follows from the new mass, and the trail starts empty.

use crate::body::{Body, BodyKind};
use crate::error::Result;

/// Kind of the body produced by merging `a` and `b`
///
/// Black holes absorb everything. Otherwise the heavier body's kind wins and
/// equal masses keep the kind of `a`.
pub fn merged_kind(a: &Body, b: &Body) -> BodyKind {
    if a.kind() == BodyKind::BlackHole || b.kind() == BodyKind::BlackHole {
        BodyKind::BlackHole
    } else if b.mass() > a.mass() {
        b.kind()
    } else {
        a.kind()
    }
}

/// Merge two bodies into a new, detached body
///
/// The result has no handle yet; the simulation assigns one on insertion.
///
/// # Errors
///
/// Fails only if the combined state is not representable, e.g. the summed
/// mass overflows to infinity.
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::{Body, BodyKind};
/// use gravity_sandbox::interaction::merge_bodies;
///
/// let a = Body::new(0.0, 0.0, 1.0, BodyKind::Planet).unwrap().with_velocity(0.0, 5.0);
/// let b = Body::new(3.0, 0.0, 2.0, BodyKind::Star).unwrap().with_velocity(0.0, -1.0);
///
/// let merged = merge_bodies(&a, &b).unwrap();
/// assert_eq!(merged.mass(), 3.0);
/// assert_eq!(merged.kind(), BodyKind::Star);
/// assert_eq!(merged.position().x, 2.0);
/// assert_eq!(merged.velocity().y, 1.0);
/// ```
pub fn merge_bodies(a: &Body, b: &Body) -> Result<Body> {
    let total_mass = a.mass() + b.mass();
    let position = (a.position() * a.mass() + b.position() * b.mass()) / total_mass;
    let velocity = (a.velocity() * a.mass() + b.velocity() * b.mass()) / total_mass;

    let merged = Body::new(position.x, position.y, total_mass, merged_kind(a, b))?;
    Ok(merged.with_velocity(velocity.x, velocity.y))
}
