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
//! Conserved-quantity diagnostics
//!
//! The semi-implicit Euler integrator drifts. These helpers measure by how
//! much, so demos and tests can report energy drift and check that momentum
//! and the center of mass behave.

use crate::model::{Body, BodySet, Position, Velocity};

/// Kinetic energy of one body
///
/// KE = 0.5 * m * v²
pub fn kinetic_energy(body: &Body) -> f64 {
    let v = body.velocity();
    0.5 * body.mass().value() * (v.dx() * v.dx() + v.dy() * v.dy())
}

/// Total kinetic energy of the set
pub fn total_kinetic_energy(bodies: &BodySet) -> f64 {
    bodies.iter().map(kinetic_energy).sum()
}

/// Total gravitational potential energy
///
/// Sum over unordered pairs of -G * m1 * m2 / r. Coincident pairs are
/// skipped, matching the zero-force convention of the gravity pass.
pub fn potential_energy(bodies: &BodySet, g_constant: f64) -> f64 {
    let all = bodies.as_slice();
    let mut pe = 0.0;

    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            let r = a.position().distance_to(&b.position());
            if r > 0.0 {
                pe -= g_constant * a.mass().value() * b.mass().value() / r;
            }
        }
    }

    pe
}

/// Kinetic plus potential energy
pub fn total_energy(bodies: &BodySet, g_constant: f64) -> f64 {
    total_kinetic_energy(bodies) + potential_energy(bodies, g_constant)
}

/// |(current - initial) / initial|, or 0 when `initial` is zero
pub fn relative_drift(initial: f64, current: f64) -> f64 {
    if initial != 0.0 {
        ((current - initial) / initial).abs()
    } else {
        0.0
    }
}

/// Total linear momentum (kg⋅m/s), returned as a velocity-shaped vector
pub fn total_momentum(bodies: &BodySet) -> Velocity {
    let (px, py) = bodies.iter().fold((0.0, 0.0), |(px, py), b| {
        let m = b.mass().value();
        (px + m * b.velocity().dx(), py + m * b.velocity().dy())
    });
    Velocity::new(px, py)
}

/// Mass-weighted mean position, or `None` for an empty set
pub fn center_of_mass(bodies: &BodySet) -> Option<Position> {
    if bodies.is_empty() {
        return None;
    }

    let (mut mx, mut my, mut total) = (0.0, 0.0, 0.0);
    for b in bodies.iter() {
        let m = b.mass().value();
        mx += m * b.position().x();
        my += m * b.position().y();
        total += m;
    }

    Some(Position::new(mx / total, my / total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Mass};
    use approx::assert_relative_eq;

    fn pair() -> BodySet {
        let mut bodies = BodySet::new();
        bodies
            .push(Body::new("a", Position::new(-1.0, 0.0), Velocity::new(0.0, 2.0), Mass::new(2.0), 1, Color::WHITE))
            .unwrap();
        bodies
            .push(Body::new("b", Position::new(1.0, 0.0), Velocity::new(0.0, -1.0), Mass::new(4.0), 1, Color::WHITE))
            .unwrap();
        bodies
    }

    #[test]
    fn test_kinetic_energy() {
        // 0.5*2*4 + 0.5*4*1 = 6
        assert_relative_eq!(total_kinetic_energy(&pair()), 6.0);
    }

    #[test]
    fn test_potential_energy() {
        // -1 * 2 * 4 / 2 = -4
        assert_relative_eq!(potential_energy(&pair(), 1.0), -4.0);
        assert_relative_eq!(total_energy(&pair(), 1.0), 2.0);
    }

    #[test]
    fn test_momentum_and_center_of_mass() {
        let bodies = pair();
        assert_eq!(total_momentum(&bodies), Velocity::new(0.0, 0.0));

        let com = center_of_mass(&bodies).unwrap();
        assert_relative_eq!(com.x(), 1.0 / 3.0);
        assert_eq!(com.y(), 0.0);
        assert!(center_of_mass(&BodySet::new()).is_none());
    }

    #[test]
    fn test_relative_drift() {
        assert_relative_eq!(relative_drift(-10.0, -9.0), 0.1);
        assert_eq!(relative_drift(0.0, 5.0), 0.0);
    }
}
