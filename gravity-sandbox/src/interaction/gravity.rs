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
//! Pairwise inverse-square force law
//!
//! **F = G · m₁ · m₂ / r²**, directed along the line between the two
//! centers and applied equal-and-opposite. The sandbox uses a scaled
//! constant (`G = 500` by default) so that orbits are visible at screen
//! scale with masses in the tens to thousands.
//!
//! # Numerical Stability
//!
//! - The distance used for the magnitude is clamped below by a minimum
//!   separation, so near-coincident bodies produce a large but finite force
//! - Exactly coincident bodies have no direction; the pair is skipped
//! - Non-finite results are rejected and logged rather than accumulated
//!
//! # Complexity
//!
//! Forces are summed over all N·(N-1)/2 pairs with no spatial partitioning.

use crate::body::{Body, BodyKind};
use glam::DVec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Gravitational constant used by the sandbox
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 500.0;

/// Default lower bound on the separation used for force magnitudes
pub const DEFAULT_MIN_SEPARATION: f64 = 1e-3;

/// Default white-hole repulsion multiplier
pub const DEFAULT_REPULSION_FACTOR: f64 = 2.0;

/// Why a pair produced no force
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceRejection {
    /// The bodies occupy the same point
    ZeroSeparation,
    /// The computed force overflowed or became NaN
    NonFinite,
}

/// Inverse-square force law with a configurable constant
///
/// # Example
///
/// ```
/// use glam::DVec2;
/// use gravity_sandbox::interaction::GravityLaw;
///
/// let law = GravityLaw::new(500.0);
///
/// // 500 * 10 * 10 / 20² = 125, pointing from the first body toward the second
/// let force = law.pair_force(10.0, 10.0, DVec2::new(20.0, 0.0), 1.0).unwrap();
/// assert!((force.x - 125.0).abs() < 1e-9);
/// assert_eq!(force.y, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityLaw {
    g_constant: f64,
    min_separation: f64,
}

impl GravityLaw {
    /// Create a force law with the given gravitational constant
    ///
    /// # Panics
    ///
    /// Panics if `g_constant` is negative or not finite.
    pub fn new(g_constant: f64) -> Self {
        assert!(
            g_constant >= 0.0 && g_constant.is_finite(),
            "Gravitational constant must be non-negative and finite"
        );

        GravityLaw {
            g_constant,
            min_separation: DEFAULT_MIN_SEPARATION,
        }
    }

    /// Set the minimum separation used when computing magnitudes
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

    /// Gravitational constant
    pub fn g_constant(&self) -> f64 {
        self.g_constant
    }

    /// Minimum separation used for magnitudes
    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }

    /// Attractive magnitude `G·m₁·m₂ / r²` with `r` clamped
    pub fn magnitude(&self, mass_a: f64, mass_b: f64, distance: f64) -> f64 {
        let r = distance.max(self.min_separation);
        self.g_constant * mass_a * mass_b / (r * r)
    }

    /// Force exerted on the first body by the second
    ///
    /// `offset` points from the first body to the second. A positive
    /// `scale` attracts, a negative one repels. The second body feels the
    /// exact negation.
    pub fn pair_force(
        &self,
        mass_a: f64,
        mass_b: f64,
        offset: DVec2,
        scale: f64,
    ) -> Result<DVec2, ForceRejection> {
        let distance = offset.length();
        if distance == 0.0 {
            return Err(ForceRejection::ZeroSeparation);
        }

        let magnitude = scale * self.magnitude(mass_a, mass_b, distance);
        let force = offset / distance * magnitude;

        if !force.is_finite() {
            return Err(ForceRejection::NonFinite);
        }

        Ok(force)
    }

    /// Potential energy of a single pair
    ///
    /// Attraction contributes `-G·m₁·m₂/r`; pairs with a white hole use
    /// `repulsion_factor` with the opposite sign. Pairs involving a wormhole
    /// contribute nothing, since wormholes are never accelerated and are
    /// usually massless.
    fn pair_potential(&self, a: &Body, b: &Body, repulsion_factor: f64) -> f64 {
        if a.kind() == BodyKind::Wormhole || b.kind() == BodyKind::Wormhole {
            return 0.0;
        }
        let r = a.distance_to(b).max(self.min_separation);
        let attractive = -self.g_constant * a.mass() * b.mass() / r;
        if a.kind() == BodyKind::WhiteHole || b.kind() == BodyKind::WhiteHole {
            -repulsion_factor * attractive
        } else {
            attractive
        }
    }

    /// Total pairwise potential energy of a body collection
    ///
    /// O(N²). With the `parallel` feature the outer loop runs on Rayon's
    /// thread pool.
    pub fn potential_energy(&self, bodies: &[Body], repulsion_factor: f64) -> f64 {
        #[cfg(feature = "parallel")]
        {
            (0..bodies.len())
                .into_par_iter()
                .map(|i| self.potential_from(bodies, i, repulsion_factor))
                .sum()
        }

        #[cfg(not(feature = "parallel"))]
        {
            (0..bodies.len())
                .map(|i| self.potential_from(bodies, i, repulsion_factor))
                .sum()
        }
    }

    /// Potential between body `i` and every body after it
    fn potential_from(&self, bodies: &[Body], i: usize, repulsion_factor: f64) -> f64 {
        bodies[i + 1..]
            .iter()
            .map(|other| self.pair_potential(&bodies[i], other, repulsion_factor))
            .sum()
    }
}

impl Default for GravityLaw {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITATIONAL_CONSTANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(x: f64, y: f64, mass: f64) -> Body {
        Body::new(x, y, mass, BodyKind::Planet).unwrap()
    }

    #[test]
    fn test_law_creation() {
        let law = GravityLaw::default();
        assert_eq!(law.g_constant(), DEFAULT_GRAVITATIONAL_CONSTANT);
        assert_eq!(law.min_separation(), DEFAULT_MIN_SEPARATION);
    }

    #[test]
    #[should_panic(expected = "Gravitational constant must be non-negative and finite")]
    fn test_negative_g_panics() {
        GravityLaw::new(-1.0);
    }

    #[test]
    #[should_panic(expected = "Minimum separation must be positive and finite")]
    fn test_zero_min_separation_panics() {
        GravityLaw::default().with_min_separation(0.0);
    }

    #[test]
    fn test_pairwise_force_direction_and_magnitude() {
        let law = GravityLaw::new(500.0);
        let force = law
            .pair_force(10.0, 10.0, DVec2::new(2.0, 0.0), 1.0)
            .unwrap();
        // 500 * 100 / 4
        assert!((force.x - 12_500.0).abs() < 1e-9);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn test_forces_are_equal_and_opposite() {
        let law = GravityLaw::default();
        let a = planet(1.0, -3.0, 7.0);
        let b = planet(40.0, 22.0, 13.0);
        let on_a = law
            .pair_force(a.mass(), b.mass(), b.position() - a.position(), 1.0)
            .unwrap();
        let on_b = law
            .pair_force(b.mass(), a.mass(), a.position() - b.position(), 1.0)
            .unwrap();
        assert_eq!(on_a, -on_b);
    }

    #[test]
    fn test_negative_scale_reverses_and_scales() {
        let law = GravityLaw::default();
        let offset = DVec2::new(30.0, 40.0);
        let attract = law.pair_force(5.0, 8.0, offset, 1.0).unwrap();
        let repel = law.pair_force(5.0, 8.0, offset, -2.0).unwrap();
        assert!((repel + attract * 2.0).length() < 1e-9);
        assert!(repel.dot(offset) < 0.0);
    }

    #[test]
    fn test_zero_separation_rejected() {
        let law = GravityLaw::default();
        assert_eq!(
            law.pair_force(1.0, 1.0, DVec2::ZERO, 1.0),
            Err(ForceRejection::ZeroSeparation)
        );
    }

    #[test]
    fn test_min_separation_clamps_magnitude() {
        let law = GravityLaw::new(1.0).with_min_separation(1.0);
        let force = law.pair_force(1.0, 1.0, DVec2::new(1e-9, 0.0), 1.0).unwrap();
        assert!(force.is_finite());
        assert!((force.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_overflow_rejected() {
        let law = GravityLaw::new(1e300);
        assert_eq!(
            law.pair_force(1e300, 1e300, DVec2::new(1.0, 0.0), 1.0),
            Err(ForceRejection::NonFinite)
        );
    }

    #[test]
    fn test_potential_energy() {
        let law = GravityLaw::new(2.0);
        let bodies = vec![planet(0.0, 0.0, 1.0), planet(10.0, 0.0, 3.0)];
        // -2 * 1 * 3 / 10
        assert!((law.potential_energy(&bodies, 2.0) + 0.6).abs() < 1e-12);

        let repulsive = vec![
            planet(0.0, 0.0, 1.0),
            Body::new(10.0, 0.0, 3.0, BodyKind::WhiteHole).unwrap(),
        ];
        assert!((law.potential_energy(&repulsive, 2.0) - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_potential_energy_ignores_wormholes() {
        let law = GravityLaw::default();
        let bodies = vec![
            planet(0.0, 0.0, 1.0),
            Body::new(10.0, 0.0, 5.0, BodyKind::Wormhole).unwrap(),
        ];
        assert_eq!(law.potential_energy(&bodies, 2.0), 0.0);
        assert_eq!(law.potential_energy(&[], 2.0), 0.0);
    }
}
