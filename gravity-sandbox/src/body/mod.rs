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
//! Point-mass bodies
//!
//! A [`Body`] carries its own kinematic state (position, velocity,
//! accumulated acceleration), its mass and kind, and a bounded trail of past
//! positions. It knows how to accumulate a force and how to advance itself by
//! one time step; everything that involves more than one body lives in
//! [`interaction`](crate::interaction) and [`simulation`](crate::simulation).

mod handle;
mod kind;
mod mass;
mod trail;

pub use handle::BodyHandle;
pub(crate) use handle::HandleAllocator;
pub use kind::{BodyKind, Color, UnknownKind};
pub use mass::Mass;
pub use trail::{Trail, DEFAULT_TRAIL_LENGTH};

use crate::error::{Result, SimulationError};
use crate::integration;
use glam::DVec2;

/// A point mass in the simulation plane
///
/// # Examples
///
/// ```
/// use gravity_sandbox::body::{Body, BodyKind};
/// use glam::DVec2;
///
/// let mut body = Body::new(0.0, 0.0, 4.0, BodyKind::Planet).unwrap();
/// assert_eq!(body.radius(), 4.0);
///
/// body.apply_force(DVec2::new(8.0, 0.0)); // a = F/m = 2
/// body.integrate(0.5);
/// assert_eq!(body.velocity(), DVec2::new(1.0, 0.0));
/// assert_eq!(body.position(), DVec2::new(0.5, 0.0));
/// assert_eq!(body.acceleration(), DVec2::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    handle: BodyHandle,
    kind: BodyKind,
    mass: Mass,
    radius: f64,
    position: DVec2,
    velocity: DVec2,
    acceleration: DVec2,
    trail: Trail,
}

impl Body {
    /// Create a body at rest
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidMass`] if `mass` is negative or not finite
    /// - [`SimulationError::MasslessBody`] if `mass` is zero and `kind` is not a wormhole
    /// - [`SimulationError::InvalidPosition`] if a coordinate is not finite
    pub fn new(x: f64, y: f64, mass: f64, kind: BodyKind) -> Result<Self> {
        let mass = Mass::try_new(mass).ok_or(SimulationError::InvalidMass { kind, mass })?;
        if mass.is_massless() && !kind.allows_zero_mass() {
            return Err(SimulationError::MasslessBody { kind });
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(SimulationError::InvalidPosition { x, y });
        }

        Ok(Body {
            handle: BodyHandle::detached(),
            kind,
            radius: mass.radius(),
            mass,
            position: DVec2::new(x, y),
            velocity: DVec2::ZERO,
            acceleration: DVec2::ZERO,
            trail: Trail::new(),
        })
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = DVec2::new(vx, vy);
        self
    }

    /// Identity assigned by the owning simulation
    pub fn handle(&self) -> BodyHandle {
        self.handle
    }

    pub(crate) fn attach(&mut self, handle: BodyHandle, trail_length: usize) {
        self.handle = handle;
        self.trail.set_capacity(trail_length);
    }

    /// Kind of this body
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Render color, derived from the kind
    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Mass value
    pub fn mass(&self) -> f64 {
        self.mass.value()
    }

    /// Contact radius, always `2·sqrt(mass)`
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Current position
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Current velocity
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Acceleration accumulated since the last integration
    pub fn acceleration(&self) -> DVec2 {
        self.acceleration
    }

    /// Recent positions, oldest first
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Linear momentum `m·v`
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass.value()
    }

    /// Kinetic energy `½·m·v²`
    pub fn kinetic_energy(&self) -> f64 {
        integration::kinetic_energy(self.mass.value(), self.velocity)
    }

    /// Distance between centers
    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position.distance(other.position)
    }

    /// Whether `point` lies strictly inside this body's disc
    pub fn contains_point(&self, point: DVec2) -> bool {
        self.position.distance_squared(point) < self.radius * self.radius
    }

    /// Accumulate a force: `a += F / m`
    ///
    /// Massless bodies have an inverse mass of zero, so the call leaves them
    /// untouched. The simulation never calls this on force sinks.
    pub fn apply_force(&mut self, force: DVec2) {
        self.acceleration += force * self.mass.inverse();
    }

    /// Advance by `dt` with semi-implicit Euler, then clear the accumulated
    /// acceleration and record the new position in the trail
    pub fn integrate(&mut self, dt: f64) {
        integration::semi_implicit_euler(
            &mut self.position,
            &mut self.velocity,
            self.acceleration,
            dt,
        );
        self.acceleration = DVec2::ZERO;
        self.trail.push(self.position);
    }

    /// Move the body directly, bypassing integration
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = DVec2::new(x, y);
    }

    /// Overwrite the velocity
    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        self.velocity = DVec2::new(vx, vy);
    }

    /// Drag gesture: place the body at `(x, y)` and stop it
    pub fn drag_to(&mut self, x: f64, y: f64) {
        self.set_position(x, y);
        self.velocity = DVec2::ZERO;
    }

    pub(crate) fn teleport(&mut self, position: DVec2, impulse: DVec2) {
        self.position = position;
        self.velocity += impulse;
    }
}
