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
//! Force accumulation
//!
//! Forces are accumulated per body and converted to accelerations with
//! Newton's second law. The only force source in this kernel is mutual
//! gravitation, see [`gravity`].

use crate::model::{Acceleration, Mass};

pub mod gravity;

pub use gravity::{GravitySystem, PointMass, GRAVITATIONAL_CONSTANT};

/// Planar force vector in Newtons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    /// X component of the force in Newtons
    pub fx: f64,
    /// Y component of the force in Newtons
    pub fy: f64,
}

impl Force {
    /// Create a new force vector
    pub fn new(fx: f64, fy: f64) -> Self {
        Force { fx, fy }
    }

    /// Zero force
    pub fn zero() -> Self {
        Force::new(0.0, 0.0)
    }

    /// Check if the force is valid (all components finite)
    pub fn is_valid(&self) -> bool {
        self.fx.is_finite() && self.fy.is_finite()
    }

    /// Add another force to this one
    pub fn add(&mut self, other: &Force) {
        self.fx += other.fx;
        self.fy += other.fy;
    }

    /// Magnitude of the force
    pub fn magnitude(&self) -> f64 {
        (self.fx * self.fx + self.fy * self.fy).sqrt()
    }

    /// Acceleration this force produces on `mass` (a = F/m)
    pub fn to_acceleration(&self, mass: Mass) -> Acceleration {
        let inv_mass = mass.inverse();
        Acceleration::new(self.fx * inv_mass, self.fy * inv_mass)
    }
}

impl Default for Force {
    fn default() -> Self {
        Force::zero()
    }
}
