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
//! Simulated time and speed controls
//!
//! The clock owns the elapsed simulated time, the step size applied per
//! tick, and the run/pause flag. Speed controls double or halve the step;
//! halving is clamped to a positive floor so time can never stall or run
//! backwards.

/// One Earth day in seconds
pub const DAY: f64 = 86400.0;

/// Calendar year used for status display (365 days)
pub const YEAR: f64 = 365.0 * DAY;

/// Smallest step size reachable by halving (seconds)
pub const MIN_STEP: f64 = 100.0;

/// Elapsed time, step size and run state
///
/// # Examples
///
/// ```
/// use solar_sim::clock::{SimulationClock, DAY};
///
/// let mut clock = SimulationClock::default();
/// assert_eq!(clock.step(), DAY);
///
/// clock.advance();
/// clock.double_step();
/// clock.advance();
/// assert_eq!(clock.elapsed(), 3.0 * DAY);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    elapsed: f64,
    step: f64,
    min_step: f64,
    running: bool,
}

impl SimulationClock {
    /// Create a running clock at t = 0
    ///
    /// # Panics
    ///
    /// Panics if either value is non-positive, NaN, or infinite.
    pub fn new(initial_step: f64, min_step: f64) -> Self {
        assert!(
            initial_step > 0.0 && initial_step.is_finite(),
            "Timestep must be positive and finite"
        );
        assert!(
            min_step > 0.0 && min_step.is_finite(),
            "Minimum timestep must be positive and finite"
        );
        SimulationClock {
            elapsed: 0.0,
            step: initial_step,
            min_step,
            running: true,
        }
    }

    /// Elapsed simulated seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Elapsed simulated time in 365-day years
    pub fn elapsed_years(&self) -> f64 {
        self.elapsed / YEAR
    }

    /// Seconds advanced per tick
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Floor applied by [`halve_step`](Self::halve_step)
    pub fn min_step(&self) -> f64 {
        self.min_step
    }

    /// Whether ticks currently advance the simulation
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Add one step to the elapsed time
    ///
    /// Does nothing while paused.
    pub fn advance(&mut self) {
        if self.running {
            self.elapsed += self.step;
        }
    }

    /// Double the step size
    ///
    /// Saturates at `f64::MAX` so a later halving can still bring it down.
    pub fn double_step(&mut self) -> f64 {
        let doubled = self.step * 2.0;
        if !doubled.is_finite() {
            log::warn!("Step size saturated at {:e} s", f64::MAX);
        }
        self.step = doubled.min(f64::MAX);
        self.step
    }

    /// Halve the step size to whole seconds, never going below the minimum
    ///
    /// 675 s halves to 337 s, not 337.5 s.
    pub fn halve_step(&mut self) -> f64 {
        let halved = (self.step / 2.0).floor();
        if halved < self.min_step {
            log::debug!("Step size clamped to {} s", self.min_step);
        }
        self.step = halved.max(self.min_step);
        self.step
    }

    /// Flip between running and paused, returning whether the clock now runs
    pub fn toggle_pause(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        SimulationClock::new(DAY, MIN_STEP)
    }
}
