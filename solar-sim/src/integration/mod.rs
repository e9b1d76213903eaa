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
//! Numerical integration of body state
//!
//! An integrator takes the accelerations computed for a step and advances
//! every body's velocity and position by one timestep.
//!
//! # Integrators
//!
//! - **Semi-implicit Euler**: first order, velocity updated before position.
//!   It accumulates drift over long runs; that drift is part of the reference
//!   trajectories and is not corrected.
//!
//! # Timestep Guidelines
//!
//! The solar system runs at a day per step by default. Halving the step
//! improves accuracy roughly linearly; doubling it past a few weeks makes
//! Mercury's orbit visibly unstable.

use crate::model::{Acceleration, BodySet};

mod euler;

pub use euler::SemiImplicitEulerIntegrator;

/// Trait for numerical integration methods
pub trait Integrator {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Advance every body by `dt` seconds
    ///
    /// `accelerations` is indexed like `bodies` and must have been computed
    /// from the positions the bodies hold on entry. Returns the number of
    /// bodies whose new state is finite.
    fn integrate(&mut self, bodies: &mut BodySet, accelerations: &[Acceleration], dt: f64) -> usize;
}

/// Check a timestep before handing it to an integrator
///
/// Returns an error message for non-positive, NaN, or infinite values.
pub fn validate_timestep(dt: f64) -> Result<(), String> {
    if dt <= 0.0 || !dt.is_finite() {
        return Err(format!("Invalid timestep: {}. Must be positive and finite.", dt));
    }
    Ok(())
}
