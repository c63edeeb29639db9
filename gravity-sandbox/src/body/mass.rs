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
//! Mass of a body and the radius derived from it

/// Mass of a body in simulation units
///
/// Zero is a legal value (massless wormhole portals). Any positive finite
/// value is a real mass, however small. Massless bodies report an inverse
/// mass of zero so that force accumulation on them is a no-op instead of a
/// division by zero.
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::Mass;
///
/// let mass = Mass::new(25.0);
/// assert_eq!(mass.radius(), 10.0);
/// assert!(!mass.is_massless());
///
/// assert!(Mass::try_new(-1.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Mass {
    value: f64,
}

impl Mass {
    /// Create a new mass
    ///
    /// # Panics
    ///
    /// Panics if the mass is negative or not finite. For fallible
    /// construction, use `try_new`.
    pub fn new(value: f64) -> Self {
        assert!(value >= 0.0 && value.is_finite(), "Mass must be non-negative and finite");
        Mass { value }
    }

    /// Try to create a new mass
    ///
    /// Returns `None` if the value is negative, NaN or infinite.
    pub fn try_new(value: f64) -> Option<Self> {
        if value >= 0.0 && value.is_finite() {
            Some(Mass { value })
        } else {
            None
        }
    }

    /// A zero mass
    pub fn zero() -> Self {
        Mass { value: 0.0 }
    }

    /// Get the mass value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether this mass is exactly zero
    pub fn is_massless(&self) -> bool {
        self.value == 0.0
    }

    /// Inverse mass (1/m)
    ///
    /// Zero for massless bodies, and for subnormal masses whose inverse
    /// overflows.
    pub fn inverse(&self) -> f64 {
        let inverse = 1.0 / self.value;
        if inverse.is_finite() {
            inverse
        } else {
            0.0
        }
    }

    /// Display and contact radius, `2·sqrt(m)`
    pub fn radius(&self) -> f64 {
        2.0 * self.value.sqrt()
    }
}

impl Default for Mass {
    fn default() -> Self {
        Mass::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_creation() {
        let mass = Mass::new(10.5);
        assert_eq!(mass.value(), 10.5);
        assert!(!mass.is_massless());
    }

    #[test]
    fn test_mass_try_new() {
        assert_eq!(Mass::try_new(10.5).map(|m| m.value()), Some(10.5));
        assert!(Mass::try_new(0.0).is_some());
        assert!(Mass::try_new(-1.0).is_none());
        assert!(Mass::try_new(f64::NAN).is_none());
        assert!(Mass::try_new(f64::INFINITY).is_none());
    }

    #[test]
    #[should_panic(expected = "Mass must be non-negative and finite")]
    fn test_mass_negative_panics() {
        Mass::new(-1.0);
    }

    #[test]
    fn test_massless_inverse_is_zero() {
        assert!(Mass::zero().is_massless());
        assert_eq!(Mass::zero().inverse(), 0.0);
        assert_eq!(Mass::new(4.0).inverse(), 0.25);
        assert_eq!(Mass::new(f64::MIN_POSITIVE / 8.0).inverse(), 0.0);
    }

    #[test]
    fn test_tiny_mass_is_not_massless() {
        let mass = Mass::new(1e-11);
        assert!(!mass.is_massless());
        assert!((mass.inverse() - 1e11).abs() < 1.0);
    }

    #[test]
    fn test_radius_from_mass() {
        assert_eq!(Mass::new(100.0).radius(), 20.0);
        assert_eq!(Mass::new(1.0).radius(), 2.0);
        assert_eq!(Mass::zero().radius(), 0.0);
    }
}
