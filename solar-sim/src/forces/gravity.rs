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
//! Newtonian gravitation between all pairs of bodies
//!
//! # Physics Background
//!
//! Every point mass attracts every other point mass with a force proportional
//! to the product of their masses and inversely proportional to the square of
//! the distance between them:
//!
//! **F = G * (m₁ * m₂) / r²**
//!
//! The force on body A points along the unit vector from A to B, so its
//! components are `F * dx / r` and `F * dy / r`.
//!
//! # References
//!
//! - Newton, I. (1687). "Philosophiæ Naturalis Principia Mathematica"
//! - [CODATA 2018 value for G](https://physics.nist.gov/cgi-bin/cuu/Value?bg)
//!
//! # Snapshot Consistency
//!
//! Forces are evaluated against a [`PointMass`] snapshot taken before any body
//! moves. Every acceleration of a step therefore sees the same positions,
//! and the result does not depend on the order bodies are visited in.
//!
//! # Numerical Stability
//!
//! - No softening: the catalog never brings bodies close enough to need it
//! - Coincident positions (r = 0) contribute zero force instead of dividing by zero
//! - O(n²) direct summation, intended for tens of bodies at most

use super::Force;
use crate::model::{Acceleration, BodySet, Mass, Position};

/// Standard gravitational constant in SI units (m³/(kg⋅s²))
///
/// CODATA 2018 recommended value: 6.67430(15) × 10⁻¹¹ m³/(kg⋅s²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Frozen position and mass of one body at the start of a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    /// Position in meters
    pub position: Position,
    /// Mass in kilograms
    pub mass: Mass,
}

impl PointMass {
    /// Create a point mass
    pub fn new(position: Position, mass: Mass) -> Self {
        PointMass { position, mass }
    }
}

/// Direct-summation gravity with a configurable constant
///
/// # Example
///
/// ```
/// use solar_sim::forces::{GravitySystem, PointMass, GRAVITATIONAL_CONSTANT};
/// use solar_sim::model::{Mass, Position};
///
/// let gravity = GravitySystem::new(GRAVITATIONAL_CONSTANT);
/// let snapshot = [
///     PointMass::new(Position::zero(), Mass::new(1.989e30)),
///     PointMass::new(Position::new(1.496e11, 0.0), Mass::new(5.972e24)),
/// ];
///
/// let acc = gravity.compute_accelerations(&snapshot);
/// assert!(acc[1].ax() < 0.0); // Earth is pulled towards the Sun
/// assert!(acc[0].ax() > 0.0); // and the Sun towards Earth
/// ```
#[derive(Debug, Clone)]
pub struct GravitySystem {
    g_constant: f64,
    warn_on_invalid: bool,
}

impl GravitySystem {
    /// Create a gravity system with the given gravitational constant
    ///
    /// # Panics
    ///
    /// Panics if `g_constant` is negative or not finite.
    pub fn new(g_constant: f64) -> Self {
        assert!(
            g_constant >= 0.0 && g_constant.is_finite(),
            "Gravitational constant must be non-negative and finite"
        );
        GravitySystem {
            g_constant,
            warn_on_invalid: true,
        }
    }

    /// Gravitational constant in use
    pub fn g_constant(&self) -> f64 {
        self.g_constant
    }

    /// Set whether to log a warning when a body ends up with a non-finite
    /// acceleration
    pub fn set_warn_on_invalid(&mut self, warn: bool) {
        self.warn_on_invalid = warn;
    }

    /// Freeze the positions and masses of every body, in set order
    pub fn snapshot(bodies: &BodySet) -> Vec<PointMass> {
        bodies
            .iter()
            .map(|b| PointMass::new(b.position(), b.mass()))
            .collect()
    }

    /// Force exerted on `a` by `b`
    ///
    /// Coincident positions yield a zero force.
    pub fn compute_pairwise_force(&self, a: &PointMass, b: &PointMass) -> Force {
        let dx = b.position.x() - a.position.x();
        let dy = b.position.y() - a.position.y();
        let r_squared = dx * dx + dy * dy;

        if r_squared == 0.0 {
            log::trace!("coincident bodies at {:?}, skipping pair", a.position);
            return Force::zero();
        }

        let r = r_squared.sqrt();
        let force_magnitude = self.g_constant * a.mass.value() * b.mass.value() / r_squared;

        Force::new(force_magnitude * dx / r, force_magnitude * dy / r)
    }

    /// Net force on every body of the snapshot, in snapshot order
    pub fn compute_forces(&self, snapshot: &[PointMass]) -> Vec<Force> {
        snapshot
            .iter()
            .enumerate()
            .map(|(i, body)| {
                let mut total = Force::zero();
                for (j, other) in snapshot.iter().enumerate() {
                    // Skip self-interaction
                    if i == j {
                        continue;
                    }
                    total.add(&self.compute_pairwise_force(body, other));
                }
                total
            })
            .collect()
    }

    /// Net acceleration on every body of the snapshot (a = F/m)
    pub fn compute_accelerations(&self, snapshot: &[PointMass]) -> Vec<Acceleration> {
        self.compute_forces(snapshot)
            .iter()
            .zip(snapshot)
            .enumerate()
            .map(|(i, (force, body))| {
                let acc = force.to_acceleration(body.mass);
                if !acc.is_valid() && self.warn_on_invalid {
                    log::warn!("Non-finite acceleration for body #{}: {:?}", i, acc);
                }
                acc
            })
            .collect()
    }

    /// Snapshot `bodies` and compute their accelerations
    pub fn accelerations(&self, bodies: &BodySet) -> Vec<Acceleration> {
        self.compute_accelerations(&Self::snapshot(bodies))
    }
}

impl Default for GravitySystem {
    fn default() -> Self {
        GravitySystem::new(GRAVITATIONAL_CONSTANT)
    }
}
