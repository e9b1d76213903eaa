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
//! Semi-implicit Euler integrator
//!
//! # Algorithm
//!
//! ```text
//! v(t + dt) = v(t) + a(t)*dt
//! x(t + dt) = x(t) + v(t + dt)*dt
//! ```
//!
//! The position update uses the *new* velocity. Swapping the two lines gives
//! explicit Euler, which spirals planets outwards within a few orbits.
//!
//! # Properties
//!
//! - First-order accurate: global error O(dt)
//! - One force evaluation per step
//! - Bounded but non-zero energy error for circular orbits

use super::Integrator;
use crate::model::{Acceleration, BodySet, Position, Velocity};

/// Semi-implicit (symplectic) Euler integrator
///
/// # Example
///
/// ```
/// use solar_sim::integration::{Integrator, SemiImplicitEulerIntegrator};
///
/// let integrator = SemiImplicitEulerIntegrator::new();
/// assert_eq!(integrator.name(), "Semi-implicit Euler");
/// ```
#[derive(Debug, Clone)]
pub struct SemiImplicitEulerIntegrator {
    warn_on_invalid: bool,
}

impl SemiImplicitEulerIntegrator {
    /// Create a new integrator
    pub fn new() -> Self {
        SemiImplicitEulerIntegrator {
            warn_on_invalid: true,
        }
    }

    /// Set whether to log a warning when a body's state becomes non-finite
    pub fn set_warn_on_invalid(&mut self, warn: bool) {
        self.warn_on_invalid = warn;
    }
}

impl Default for SemiImplicitEulerIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for SemiImplicitEulerIntegrator {
    fn name(&self) -> &str {
        "Semi-implicit Euler"
    }

    fn integrate(&mut self, bodies: &mut BodySet, accelerations: &[Acceleration], dt: f64) -> usize {
        debug_assert_eq!(bodies.len(), accelerations.len());
        let mut updated_count = 0;

        for (body, acc) in bodies.iter_mut().zip(accelerations) {
            // v' = v + a*dt
            let vel = body.velocity();
            let vel = Velocity::new(vel.dx() + acc.ax() * dt, vel.dy() + acc.ay() * dt);

            // p' = p + v'*dt
            let pos = body.position();
            let pos = Position::new(pos.x() + vel.dx() * dt, pos.y() + vel.dy() * dt);

            body.set_velocity(vel);
            body.set_position(pos);

            if !pos.is_valid() || !vel.is_valid() {
                if self.warn_on_invalid {
                    log::warn!("Integration produced invalid state for {}", body.name());
                }
                continue;
            }

            updated_count += 1;
        }

        updated_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Body, Color, Mass};
    use approx::assert_relative_eq;

    fn single(position: Position, velocity: Velocity) -> BodySet {
        let mut bodies = BodySet::new();
        bodies
            .push(Body::new("probe", position, velocity, Mass::new(1.0), 1, Color::WHITE))
            .unwrap();
        bodies
    }

    #[test]
    fn test_free_motion() {
        let mut integrator = SemiImplicitEulerIntegrator::new();
        let mut bodies = single(Position::zero(), Velocity::new(1.0, 2.0));

        let count = integrator.integrate(&mut bodies, &[Acceleration::zero()], 0.1);
        assert_eq!(count, 1);

        let b = bodies.get(0).unwrap();
        assert_relative_eq!(b.position().x(), 0.1);
        assert_relative_eq!(b.position().y(), 0.2);
        assert_eq!(b.velocity(), Velocity::new(1.0, 2.0));
    }

    #[test]
    fn test_velocity_updated_before_position() {
        let mut integrator = SemiImplicitEulerIntegrator::new();
        let mut bodies = single(Position::zero(), Velocity::zero());

        integrator.integrate(&mut bodies, &[Acceleration::new(10.0, 0.0)], 0.1);

        let b = bodies.get(0).unwrap();
        // v = 0 + 10*0.1 = 1.0
        assert_relative_eq!(b.velocity().dx(), 1.0);
        // x = 0 + 1.0*0.1 = 0.1 (explicit Euler would leave x at 0)
        assert_relative_eq!(b.position().x(), 0.1);
    }

    #[test]
    fn test_invalid_state_not_counted() {
        let mut integrator = SemiImplicitEulerIntegrator::new();
        integrator.set_warn_on_invalid(false);
        let mut bodies = single(Position::zero(), Velocity::zero());

        let count = integrator.integrate(&mut bodies, &[Acceleration::new(f64::INFINITY, 0.0)], 1.0);
        assert_eq!(count, 0);
        assert!(!bodies.get(0).unwrap().position().is_valid());
    }
}
