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
//! # Solar Sim
//!
//! Physics kernel for an interactive solar system viewer: direct-summation
//! Newtonian gravity, semi-implicit Euler integration, a two-level zoom
//! projection and bounded orbit trails.
//!
//! ## Features
//!
//! - **Snapshot-consistent gravity**: all accelerations of a step are computed
//!   from the positions at its start
//! - **Explicit context**: a [`Simulation`] owns every piece of state; no globals
//! - **Speed controls**: doubling and floor-clamped halving of the step size
//! - **Renderer-agnostic**: hosts implement [`render::Renderer`] and receive
//!   plain draw calls
//!
//! ## Example
//!
//! ```rust
//! use solar_sim::{Command, Simulation};
//!
//! let mut sim = Simulation::solar_system();
//! for _ in 0..30 {
//!     sim.tick();
//! }
//!
//! sim.apply(Command::ToggleZoom);
//! assert!(sim.bodies().iter().all(|b| b.trail().is_empty()));
//!
//! sim.tick();
//! assert!(sim.bodies().iter().all(|b| b.trail().len() == 1));
//! ```

#![warn(missing_docs)]

/// Bodies, state types and the built-in catalog
pub mod model;

/// Gravitational force accumulation
pub mod forces;

/// Numerical integration methods
pub mod integration;

/// Physical-to-screen projection
pub mod projection;

/// Bounded orbit trails
pub mod trail;

/// Simulated time and speed controls
pub mod clock;

/// Kernel configuration
pub mod config;

/// Simulation context and tick loop
pub mod simulation;

/// Drawing collaborator interface
pub mod render;

/// Energy, momentum and center-of-mass helpers
pub mod diagnostics;

pub use config::SimulationConfig;
pub use simulation::{Command, RunState, Simulation};
