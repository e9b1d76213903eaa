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
//! Simulation context and orchestration loop
//!
//! [`Simulation`] owns every piece of mutable state for a run: the body set,
//! the clock, the zoom mode and the force/integration machinery. The host
//! calls [`Simulation::tick`] once per frame and feeds input through
//! [`Simulation::apply`]; renderers read the state between ticks.
//!
//! # Tick
//!
//! While running, a tick performs, in order:
//!
//! 1. Snapshot positions and compute every acceleration (gravity)
//! 2. Integrate velocities then positions
//! 3. Project the new positions with the active zoom mode
//! 4. Append the projections to the trails
//! 5. Advance the clock
//!
//! While paused a tick does nothing. Commands are accepted in either state
//! and only [`Command::TogglePause`] changes the run state.

use crate::clock::SimulationClock;
use crate::config::SimulationConfig;
use crate::forces::GravitySystem;
use crate::integration::{Integrator, SemiImplicitEulerIntegrator};
use crate::model::{catalog, BodySet, Color, Position};
use crate::projection::{ScaleTransform, ScreenPoint, ZoomMode};
use crate::trail::TrailBuffer;
use std::fmt;
use std::str::FromStr;

/// Run state of the orchestration loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Ticks advance the simulation
    Running,
    /// Ticks are ignored
    Paused,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Running => write!(f, "Running"),
            RunState::Paused => write!(f, "Paused"),
        }
    }
}

/// Input commands understood by the kernel
///
/// The reference viewer binds them to Z, Space, R, Up and Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Switch zoom mode and clear all trails
    ToggleZoom,
    /// Switch between running and paused
    TogglePause,
    /// Clear all trails
    ResetTrails,
    /// Double the step size
    SpeedUp,
    /// Halve the step size, down to the floor
    SlowDown,
}

impl FromStr for Command {
    type Err = String;

    /// Parse a command name or its reference key binding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zoom" | "z" => Ok(Command::ToggleZoom),
            "pause" | "space" => Ok(Command::TogglePause),
            "reset" | "r" => Ok(Command::ResetTrails),
            "faster" | "up" => Ok(Command::SpeedUp),
            "slower" | "down" => Ok(Command::SlowDown),
            other => Err(format!("Unknown command: {:?}", other)),
        }
    }
}

/// Read-only view of one body for drawing
#[derive(Debug, Clone, Copy)]
pub struct BodyView<'a> {
    /// Body name
    pub name: &'a str,
    /// Physical position in meters
    pub position: Position,
    /// Position projected with the current zoom mode
    pub screen: ScreenPoint,
    /// Display radius in pixels
    pub radius: u32,
    /// Display color
    pub color: Color,
    /// Projected history, oldest first
    pub trail: &'a TrailBuffer,
}

/// Explicit simulation context owned by the host loop
pub struct Simulation {
    bodies: BodySet,
    gravity: GravitySystem,
    integrator: Box<dyn Integrator>,
    transform: ScaleTransform,
    clock: SimulationClock,
    steps: u64,
}

impl Simulation {
    /// Create a simulation over `bodies` with the given configuration
    ///
    /// Every trail is rebuilt empty with the configured capacity. Returns an
    /// error if the configuration is invalid.
    pub fn new(mut bodies: BodySet, config: &SimulationConfig) -> Result<Self, String> {
        config.validate()?;
        bodies.set_trail_capacity(config.trail_capacity);

        log::debug!(
            "Creating simulation: {} bodies, step {} s, viewport {}x{}",
            bodies.len(),
            config.initial_step,
            config.viewport_width,
            config.viewport_height
        );

        Ok(Simulation {
            bodies,
            gravity: GravitySystem::new(config.gravitational_constant),
            integrator: Box::new(SemiImplicitEulerIntegrator::new()),
            transform: ScaleTransform::new(config.viewport(), config.normal_scale, config.zoomed_scale),
            clock: SimulationClock::new(config.initial_step, config.min_step),
            steps: 0,
        })
    }

    /// The built-in solar system with default settings
    pub fn solar_system() -> Self {
        Simulation {
            bodies: catalog::solar_system(),
            gravity: GravitySystem::default(),
            integrator: Box::new(SemiImplicitEulerIntegrator::new()),
            transform: ScaleTransform::default(),
            clock: SimulationClock::default(),
            steps: 0,
        }
    }

    /// Replace the integrator
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.integrator = integrator;
        self
    }

    /// Advance by one frame tick
    ///
    /// Returns `true` if a physics step was taken, `false` if paused.
    pub fn tick(&mut self) -> bool {
        if !self.clock.is_running() {
            return false;
        }
        self.step();
        true
    }

    fn step(&mut self) {
        let dt = self.clock.step();

        // Every acceleration sees the pre-step positions
        let accelerations = self.gravity.accelerations(&self.bodies);

        let updated = self.integrator.integrate(&mut self.bodies, &accelerations, dt);
        if updated != self.bodies.len() {
            log::warn!(
                "{} of {} bodies have non-finite state after step {}",
                self.bodies.len() - updated,
                self.bodies.len(),
                self.steps
            );
        }

        for body in self.bodies.iter_mut() {
            let point = self.transform.project(&body.position());
            body.trail_mut().append(point);
        }

        self.clock.advance();
        self.steps += 1;
        log::trace!("step {} done, t = {} s", self.steps, self.clock.elapsed());
    }

    /// Dispatch an input command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ToggleZoom => {
                self.toggle_zoom();
            }
            Command::TogglePause => {
                self.toggle_pause();
            }
            Command::ResetTrails => self.reset_trails(),
            Command::SpeedUp => {
                self.speed_up();
            }
            Command::SlowDown => {
                self.slow_down();
            }
        }
    }

    /// Switch zoom mode, clearing every trail
    pub fn toggle_zoom(&mut self) -> ZoomMode {
        let mode = self.transform.toggle();
        self.bodies.clear_trails();
        log::debug!("Zoom mode now {:?}, trails cleared", mode);
        mode
    }

    /// Switch between running and paused
    pub fn toggle_pause(&mut self) -> RunState {
        self.clock.toggle_pause();
        let state = self.run_state();
        log::debug!("Simulation {}", state);
        state
    }

    /// Clear every trail
    pub fn reset_trails(&mut self) {
        self.bodies.clear_trails();
        log::debug!("Trails reset");
    }

    /// Double the step size, returning the new value
    pub fn speed_up(&mut self) -> f64 {
        let step = self.clock.double_step();
        log::debug!("Step size now {} s", step);
        step
    }

    /// Halve the step size down to the floor, returning the new value
    pub fn slow_down(&mut self) -> f64 {
        let step = self.clock.halve_step();
        log::debug!("Step size now {} s", step);
        step
    }

    /// Current run state
    pub fn run_state(&self) -> RunState {
        if self.clock.is_running() {
            RunState::Running
        } else {
            RunState::Paused
        }
    }

    /// Current zoom mode
    pub fn zoom_mode(&self) -> ZoomMode {
        self.transform.mode()
    }

    /// Read-only body set
    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    /// Clock state
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Active projection
    pub fn transform(&self) -> &ScaleTransform {
        &self.transform
    }

    /// Gravity configuration
    pub fn gravity(&self) -> &GravitySystem {
        &self.gravity
    }

    /// Name of the integrator in use
    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }

    /// Elapsed simulated seconds
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Current step size in seconds
    pub fn step_size(&self) -> f64 {
        self.clock.step()
    }

    /// Physics steps taken so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Drawable view of every body in set order
    pub fn views(&self) -> impl Iterator<Item = BodyView<'_>> + '_ {
        self.bodies.iter().map(move |body| BodyView {
            name: body.name(),
            position: body.position(),
            screen: self.transform.project(&body.position()),
            radius: body.radius(),
            color: body.color(),
            trail: body.trail(),
        })
    }

    /// HUD text: elapsed years, step size and run state
    pub fn status_line(&self) -> String {
        format!(
            "Time: {:.2} years | DT={} sec | {}",
            self.clock.elapsed_years(),
            self.clock.step(),
            self.run_state()
        )
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("bodies", &self.bodies.len())
            .field("integrator", &self.integrator.name())
            .field("zoom", &self.transform.mode())
            .field("clock", &self.clock)
            .field("steps", &self.steps)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DAY;
    use crate::model::Acceleration;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state() {
        let sim = Simulation::solar_system();
        assert_eq!(sim.run_state(), RunState::Running);
        assert_eq!(sim.zoom_mode(), ZoomMode::Normal);
        assert_eq!(sim.bodies().len(), 10);
        assert_eq!(sim.elapsed(), 0.0);
        assert_eq!(sim.step_size(), DAY);
        assert_eq!(sim.integrator_name(), "Semi-implicit Euler");
    }

    #[test]
    fn test_tick_advances_everything() {
        let mut sim = Simulation::solar_system();
        let before = sim.bodies().find("Earth").unwrap().position();

        assert!(sim.tick());

        let earth = sim.bodies().find("Earth").unwrap();
        assert_ne!(earth.position(), before);
        assert_eq!(earth.trail().len(), 1);
        assert_eq!(earth.trail().latest(), Some(sim.transform().project(&earth.position())));
        assert_eq!(sim.elapsed(), DAY);
        assert_eq!(sim.steps(), 1);
    }

    #[test]
    fn test_commands_do_not_change_run_state() {
        let mut sim = Simulation::solar_system();
        for command in [Command::ToggleZoom, Command::ResetTrails, Command::SpeedUp, Command::SlowDown] {
            sim.apply(command);
            assert_eq!(sim.run_state(), RunState::Running);
        }

        sim.apply(Command::TogglePause);
        for command in [Command::ToggleZoom, Command::ResetTrails, Command::SpeedUp, Command::SlowDown] {
            sim.apply(command);
            assert_eq!(sim.run_state(), RunState::Paused);
        }
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!("zoom".parse::<Command>(), Ok(Command::ToggleZoom));
        assert_eq!("Space".parse::<Command>(), Ok(Command::TogglePause));
        assert_eq!(" r ".parse::<Command>(), Ok(Command::ResetTrails));
        assert_eq!("up".parse::<Command>(), Ok(Command::SpeedUp));
        assert_eq!("slower".parse::<Command>(), Ok(Command::SlowDown));
        assert!("warp".parse::<Command>().is_err());
    }

    #[test]
    fn test_status_line() {
        let mut sim = Simulation::solar_system();
        assert_eq!(sim.status_line(), "Time: 0.00 years | DT=86400 sec | Running");

        for _ in 0..365 {
            sim.tick();
        }
        sim.toggle_pause();
        sim.slow_down();
        assert_eq!(sim.status_line(), "Time: 1.00 years | DT=43200 sec | Paused");
    }

    #[test]
    fn test_status_line_shows_whole_seconds_after_halving() {
        let config = SimulationConfig::default().with_initial_step(675.0);
        let mut sim = Simulation::new(catalog::solar_system(), &config).unwrap();
        sim.slow_down();
        assert_eq!(sim.status_line(), "Time: 0.00 years | DT=337 sec | Running");
    }

    #[derive(Default)]
    struct CountingIntegrator {
        calls: Rc<Cell<usize>>,
    }

    impl Integrator for CountingIntegrator {
        fn name(&self) -> &str {
            "Counting"
        }

        fn integrate(&mut self, bodies: &mut BodySet, accelerations: &[Acceleration], dt: f64) -> usize {
            assert_eq!(bodies.len(), accelerations.len());
            assert_eq!(dt, DAY);
            self.calls.set(self.calls.get() + 1);
            bodies.len()
        }
    }

    #[test]
    fn test_with_integrator_is_driven_by_tick() {
        let integrator = CountingIntegrator::default();
        let calls = Rc::clone(&integrator.calls);
        let mut sim = Simulation::solar_system().with_integrator(Box::new(integrator));
        assert_eq!(sim.integrator_name(), "Counting");

        let start = sim.bodies().find("Earth").unwrap().position();
        sim.tick();
        sim.tick();
        sim.toggle_pause();
        sim.tick();

        assert_eq!(calls.get(), 2);
        // The stand-in never moves anything, but projection and the clock still run
        let earth = sim.bodies().find("Earth").unwrap();
        assert_eq!(earth.position(), start);
        assert_eq!(earth.trail().len(), 2);
        assert_eq!(sim.elapsed(), 2.0 * DAY);
    }

    #[test]
    fn test_new_applies_trail_capacity() {
        let config = SimulationConfig::default().with_trail_capacity(3);
        let mut sim = Simulation::new(catalog::solar_system(), &config).unwrap();
        for _ in 0..5 {
            sim.tick();
        }
        assert!(sim.bodies().iter().all(|b| b.trail().len() == 3));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SimulationConfig::default().with_trail_capacity(0);
        assert!(Simulation::new(catalog::solar_system(), &config).is_err());
    }

    #[test]
    fn test_views_follow_set_order() {
        let sim = Simulation::solar_system();
        let names: Vec<&str> = sim.views().map(|v| v.name).collect();
        assert_eq!(names.first(), Some(&"Sun"));
        assert_eq!(names.last(), Some(&"Pluto"));

        let sun = sim.views().next().unwrap();
        assert_eq!(sun.screen, ScreenPoint::new(400.0, 300.0));
        assert_eq!(sun.radius, 12);
    }
}
