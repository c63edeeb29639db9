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
//! Preset starting configurations
//!
//! Orbital velocities are derived from the gravitational constant of the
//! simulation being populated, so presets stay stable under a custom `G`.

use crate::body::{Body, BodyHandle, BodyKind};
use crate::error::{Result, SimulationError};
use crate::simulation::Simulation;
use std::fmt;

/// A named initial layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// A star at the origin with two planets on circular orbits
    StarWithPlanets,
    /// Two equal stars orbiting their common center, plus a distant planet
    BinaryStars,
    /// Two wormholes and a planet on course for one of them
    WormholePair,
}

impl Scenario {
    /// Every preset
    pub const ALL: [Scenario; 3] = [
        Scenario::StarWithPlanets,
        Scenario::BinaryStars,
        Scenario::WormholePair,
    ];

    /// Short identifier
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::StarWithPlanets => "star-with-planets",
            Scenario::BinaryStars => "binary-stars",
            Scenario::WormholePair => "wormhole-pair",
        }
    }

    /// Insert the preset's bodies into `sim`
    ///
    /// Existing bodies are kept. Returns the handles in insertion order.
    ///
    /// # Errors
    ///
    /// Only fails if the configured gravitational constant makes a
    /// velocity non-finite.
    pub fn populate(&self, sim: &mut Simulation) -> Result<Vec<BodyHandle>> {
        let g = sim.config().gravitational_constant;
        let bodies = match self {
            Scenario::StarWithPlanets => {
                let star_mass = 1000.0;
                vec![
                    Body::new(0.0, 0.0, star_mass, BodyKind::Star)?,
                    Body::new(300.0, 0.0, 20.0, BodyKind::Planet)?
                        .with_velocity(0.0, circular_speed(g, star_mass, 300.0)),
                    Body::new(-500.0, 0.0, 40.0, BodyKind::Planet)?
                        .with_velocity(0.0, -circular_speed(g, star_mass, 500.0)),
                ]
            }
            Scenario::BinaryStars => {
                let star_mass = 500.0;
                let separation = 300.0;
                // each star circles the barycenter at separation / 2
                let speed = (g * star_mass / (2.0 * separation)).sqrt();
                vec![
                    Body::new(-separation / 2.0, 0.0, star_mass, BodyKind::Star)?
                        .with_velocity(0.0, -speed),
                    Body::new(separation / 2.0, 0.0, star_mass, BodyKind::Star)?
                        .with_velocity(0.0, speed),
                    Body::new(0.0, 700.0, 10.0, BodyKind::Planet)?
                        .with_velocity(-circular_speed(g, 2.0 * star_mass, 700.0), 0.0),
                ]
            }
            Scenario::WormholePair => vec![
                Body::new(-400.0, 0.0, 0.0, BodyKind::Wormhole)?,
                Body::new(400.0, 0.0, 0.0, BodyKind::Wormhole)?,
                Body::new(-250.0, 0.0, 10.0, BodyKind::Planet)?.with_velocity(-60.0, 0.0),
            ],
        };

        for body in &bodies {
            if !body.velocity().is_finite() {
                return Err(SimulationError::InvalidConfig {
                    field: "gravitational_constant",
                    reason: format!("{} velocities are not finite", self),
                });
            }
        }

        log::debug!("Populating scenario {}", self);
        Ok(bodies.into_iter().map(|body| sim.insert_body(body)).collect())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Speed of a circular orbit of radius `r` around `central_mass`
fn circular_speed(g: f64, central_mass: f64, r: f64) -> f64 {
    (g * central_mass / r).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulationConfig;

    fn sim() -> Simulation {
        Simulation::new(SimulationConfig::default().with_seed(3)).unwrap()
    }

    #[test]
    fn test_star_with_planets_layout() {
        let mut sim = sim();
        let handles = Scenario::StarWithPlanets.populate(&mut sim).unwrap();
        assert_eq!(handles.len(), 3);

        let star = sim.body(handles[0]).unwrap();
        assert_eq!(star.kind(), BodyKind::Star);
        assert_eq!(star.mass(), 1000.0);

        let inner = sim.body(handles[1]).unwrap();
        assert_eq!(inner.position().x, 300.0);
        assert!((inner.velocity().y - (500.0_f64 * 1000.0 / 300.0).sqrt()).abs() < 1e-12);

        let outer = sim.body(handles[2]).unwrap();
        assert_eq!(outer.mass(), 40.0);
        assert!(outer.velocity().y < 0.0);
    }

    #[test]
    fn test_binary_stars_have_zero_net_star_momentum() {
        let mut sim = sim();
        let handles = Scenario::BinaryStars.populate(&mut sim).unwrap();
        let stars = handles[0..2]
            .iter()
            .map(|h| sim.body(*h).unwrap().momentum())
            .fold(glam::DVec2::ZERO, |acc, p| acc + p);
        assert!(stars.length() < 1e-9);
    }

    #[test]
    fn test_populate_keeps_existing_bodies() {
        let mut sim = sim();
        sim.add_body(5000.0, 5000.0, 1.0, BodyKind::Planet).unwrap();
        Scenario::WormholePair.populate(&mut sim).unwrap();
        assert_eq!(sim.len(), 4);
    }

    #[test]
    fn test_names() {
        assert_eq!(Scenario::BinaryStars.to_string(), "binary-stars");
        assert_eq!(Scenario::ALL.len(), 3);
    }
}
