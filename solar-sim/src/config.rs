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
//! Simulation configuration
//!
//! Every tunable of the kernel in one `serde`-deserializable struct. All
//! fields default to the reference viewer's values, so a YAML file only
//! needs the keys it changes:
//!
//! ```yaml
//! viewport_width: 1024
//! viewport_height: 768
//! initial_step: 3600.0
//! ```
//!
//! Unknown keys are rejected, so a misspelled setting fails to load.

use crate::clock::{DAY, MIN_STEP};
use crate::forces::GRAVITATIONAL_CONSTANT;
use crate::integration::validate_timestep;
use crate::projection::{Viewport, NORMAL_SCALE, ZOOM_SCALE};
use crate::trail::DEFAULT_TRAIL_CAPACITY;
use serde::Deserialize;

/// Kernel configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
    /// Pixels per meter in normal mode
    pub normal_scale: f64,
    /// Pixels per meter in zoomed mode
    pub zoomed_scale: f64,
    /// Step size at startup (seconds)
    pub initial_step: f64,
    /// Floor for step halving (seconds)
    pub min_step: f64,
    /// Points kept per trail
    pub trail_capacity: usize,
    /// Gravitational constant (m³/(kg⋅s²))
    pub gravitational_constant: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            viewport_width: 800,
            viewport_height: 600,
            normal_scale: NORMAL_SCALE,
            zoomed_scale: ZOOM_SCALE,
            initial_step: DAY,
            min_step: MIN_STEP,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
        }
    }
}

impl SimulationConfig {
    /// Set the viewport size
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set both scale factors
    pub fn with_scales(mut self, normal: f64, zoomed: f64) -> Self {
        self.normal_scale = normal;
        self.zoomed_scale = zoomed;
        self
    }

    /// Set the startup step size
    pub fn with_initial_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }

    /// Set the step floor
    pub fn with_min_step(mut self, min_step: f64) -> Self {
        self.min_step = min_step;
        self
    }

    /// Set the trail capacity
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail_capacity = capacity;
        self
    }

    /// Set the gravitational constant
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    /// Viewport described by this configuration
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), String> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(format!(
                "Invalid viewport {}x{}: both dimensions must be positive",
                self.viewport_width, self.viewport_height
            ));
        }
        for (name, scale) in [("normal_scale", self.normal_scale), ("zoomed_scale", self.zoomed_scale)] {
            if scale <= 0.0 || !scale.is_finite() {
                return Err(format!("Invalid {}: {}. Must be positive and finite.", name, scale));
            }
        }
        validate_timestep(self.initial_step)?;
        validate_timestep(self.min_step)?;
        if self.min_step > self.initial_step {
            return Err(format!(
                "Minimum step {} s exceeds initial step {} s",
                self.min_step, self.initial_step
            ));
        }
        if self.trail_capacity == 0 {
            return Err("Trail capacity must be positive".to_string());
        }
        if self.gravitational_constant < 0.0 || !self.gravitational_constant.is_finite() {
            return Err(format!(
                "Invalid gravitational constant: {}. Must be non-negative and finite.",
                self.gravitational_constant
            ));
        }
        Ok(())
    }
}
