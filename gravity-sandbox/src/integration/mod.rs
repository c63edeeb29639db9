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
//! Time integration and conserved-quantity diagnostics
//!
//! Bodies are advanced with semi-implicit (symplectic) Euler:
//!
//! ```text
//! v' = v + a·dt
//! p' = p + v'·dt
//! ```
//!
//! Using the updated velocity for the position update keeps orbits bounded
//! far longer than explicit Euler at the same cost.
//!
//! # Timestep Guidelines
//!
//! - `dt` comes from the caller's frame clock and varies from tick to tick
//! - Callers should clamp it (see [`clamp_timestep`]); a stalled frame that
//!   produces a multi-second `dt` degrades accuracy badly
//! - Negative or non-finite values are rejected by the simulation and the
//!   tick is skipped

use crate::body::Body;
use glam::DVec2;

/// Upper bound applied by [`clamp_timestep`] when callers use the default
pub const DEFAULT_MAX_TIMESTEP: f64 = 0.1;

/// One semi-implicit Euler step
pub fn semi_implicit_euler(position: &mut DVec2, velocity: &mut DVec2, acceleration: DVec2, dt: f64) {
    *velocity += acceleration * dt;
    *position += *velocity * dt;
}

/// Timesteps above this are accepted but reported as likely unstable
pub const LARGE_TIMESTEP: f64 = 1.0;

/// Whether `dt` can be used to advance the simulation at all
pub fn is_usable_timestep(dt: f64) -> bool {
    dt >= 0.0 && dt.is_finite()
}

/// Whether a usable `dt` is big enough to hurt accuracy
pub fn is_large_timestep(dt: f64) -> bool {
    dt > LARGE_TIMESTEP
}

/// Check a timestep for values likely to hurt accuracy
///
/// Returns a description of the problem. Unusable values (negative, NaN,
/// infinite) are errors; suspiciously large values are reported too, but the
/// simulation still accepts them.
pub fn validate_timestep(dt: f64) -> Result<(), String> {
    if !is_usable_timestep(dt) {
        return Err(format!("Invalid timestep: {}. Must be non-negative and finite.", dt));
    }

    if is_large_timestep(dt) {
        return Err(format!(
            "Warning: Timestep {} is large and may cause instability. \
            Clamp frame deltas before stepping.",
            dt
        ));
    }

    Ok(())
}

/// Clamp a frame delta into `[0, max]`
///
/// NaN and negative inputs map to zero.
///
/// ```
/// use gravity_sandbox::integration::clamp_timestep;
///
/// assert_eq!(clamp_timestep(0.016, 0.1), 0.016);
/// assert_eq!(clamp_timestep(2.5, 0.1), 0.1);
/// assert_eq!(clamp_timestep(-1.0, 0.1), 0.0);
/// assert_eq!(clamp_timestep(f64::NAN, 0.1), 0.0);
/// ```
pub fn clamp_timestep(dt: f64, max: f64) -> f64 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max)
    }
}

/// Kinetic energy `½·m·v²`
pub fn kinetic_energy(mass: f64, velocity: DVec2) -> f64 {
    0.5 * mass * velocity.length_squared()
}

/// Sum of kinetic energies
pub fn total_kinetic_energy<'a, I>(bodies: I) -> f64
where
    I: IntoIterator<Item = &'a Body>,
{
    bodies.into_iter().map(Body::kinetic_energy).sum()
}

/// Sum of linear momenta
pub fn total_momentum<'a, I>(bodies: I) -> DVec2
where
    I: IntoIterator<Item = &'a Body>,
{
    bodies.into_iter().map(Body::momentum).sum()
}

/// Sum of masses
pub fn total_mass<'a, I>(bodies: I) -> f64
where
    I: IntoIterator<Item = &'a Body>,
{
    bodies.into_iter().map(Body::mass).sum()
}

/// Energy breakdown of a body collection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyReport {
    /// Sum of `½·m·v²`
    pub kinetic: f64,
    /// Pairwise potential under the simulation's force law
    pub potential: f64,
}

impl EnergyReport {
    /// Kinetic plus potential
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyKind;

    #[test]
    fn test_semi_implicit_euler_uses_updated_velocity() {
        let mut p = DVec2::ZERO;
        let mut v = DVec2::new(10.0, 0.0);
        semi_implicit_euler(&mut p, &mut v, DVec2::new(2.0, 0.0), 0.1);
        assert!((v.x - 10.2).abs() < 1e-12);
        assert!((p.x - 1.02).abs() < 1e-12);
    }

    #[test]
    fn test_zero_timestep_keeps_state() {
        let mut p = DVec2::new(1.0, 1.0);
        let mut v = DVec2::new(5.0, -5.0);
        semi_implicit_euler(&mut p, &mut v, DVec2::new(100.0, 100.0), 0.0);
        assert_eq!(p, DVec2::new(1.0, 1.0));
        assert_eq!(v, DVec2::new(5.0, -5.0));
    }

    #[test]
    fn test_timestep_validation() {
        assert!(validate_timestep(0.016).is_ok());
        assert!(validate_timestep(0.0).is_ok());
        assert!(validate_timestep(-0.01).unwrap_err().contains("Invalid"));
        assert!(validate_timestep(f64::NAN).is_err());
        assert!(validate_timestep(5.0).unwrap_err().contains("large"));
    }

    #[test]
    fn test_large_timestep_is_still_usable() {
        assert!(is_usable_timestep(5.0));
        assert!(is_large_timestep(5.0));
        assert!(!is_large_timestep(LARGE_TIMESTEP));
        assert!(!is_usable_timestep(-0.01));
        assert!(!is_usable_timestep(f64::INFINITY));
    }

    #[test]
    fn test_clamp_timestep() {
        assert_eq!(clamp_timestep(0.05, DEFAULT_MAX_TIMESTEP), 0.05);
        assert_eq!(clamp_timestep(10.0, DEFAULT_MAX_TIMESTEP), DEFAULT_MAX_TIMESTEP);
        assert_eq!(clamp_timestep(f64::INFINITY, DEFAULT_MAX_TIMESTEP), DEFAULT_MAX_TIMESTEP);
        assert_eq!(clamp_timestep(f64::NEG_INFINITY, DEFAULT_MAX_TIMESTEP), 0.0);
    }

    #[test]
    fn test_totals() {
        let bodies = vec![
            Body::new(0.0, 0.0, 2.0, BodyKind::Planet).unwrap().with_velocity(1.0, 0.0),
            Body::new(5.0, 0.0, 3.0, BodyKind::Star).unwrap().with_velocity(0.0, -2.0),
        ];
        assert_eq!(total_mass(&bodies), 5.0);
        assert_eq!(total_momentum(&bodies), DVec2::new(2.0, -6.0));
        assert_eq!(total_kinetic_energy(&bodies), 1.0 + 6.0);
    }
}
