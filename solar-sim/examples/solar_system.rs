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
//! Headless Solar System Run
//!
//! Drives the kernel the way an interactive viewer would, minus the window:
//! ticks the catalog, plays a script of input commands at chosen ticks and
//! routes each reported frame through a [`Renderer`] that writes to the log.
//! Energy drift is reported alongside every frame.
//!
//! # Running
//!
//! ```bash
//! # One year at the default one-day step
//! cargo run --example solar_system --release
//!
//! # Start zoomed on the inner planets, report every 30 ticks
//! cargo run --example solar_system --release -- --zoom --report-every 30
//!
//! # Play commands: speed up at tick 10, pause at 50, resume at 60
//! cargo run --example solar_system --release -- -c 10:faster -c 50:pause -c 60:pause
//!
//! # Load kernel settings from YAML
//! cargo run --example solar_system --release -- --config settings.yaml
//! ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use solar_sim::diagnostics::{relative_drift, total_energy};
use solar_sim::model::{catalog, Color};
use solar_sim::render::{render_frame, Renderer};
use solar_sim::{Command, Simulation, SimulationConfig};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Run the solar system kernel headless")]
struct Args {
    /// Number of frame ticks to run
    #[arg(short, long, default_value_t = 365)]
    ticks: u64,

    /// Override the initial step size in seconds
    #[arg(long)]
    step: Option<f64>,

    /// Start in zoomed mode
    #[arg(long)]
    zoom: bool,

    /// Report a frame every N ticks (0 disables frame output)
    #[arg(long, default_value_t = 73)]
    report_every: u64,

    /// Scripted commands as TICK:COMMAND, e.g. 120:zoom
    #[arg(short, long = "command", value_name = "TICK:COMMAND")]
    commands: Vec<String>,

    /// YAML file with kernel settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn setup_logging(level: log::LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .context("failed to install logger")
}

fn load_config(path: &PathBuf) -> Result<SimulationConfig> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let config: SimulationConfig = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}

fn parse_script(entries: &[String]) -> Result<Vec<(u64, Command)>> {
    let mut script = Vec::with_capacity(entries.len());
    for entry in entries {
        let (tick, name) = entry
            .split_once(':')
            .ok_or_else(|| anyhow!("expected TICK:COMMAND, got {:?}", entry))?;
        let tick: u64 = tick
            .trim()
            .parse()
            .with_context(|| format!("bad tick in {:?}", entry))?;
        let command: Command = name.parse().map_err(|e: String| anyhow!(e))?;
        script.push((tick, command));
    }
    script.sort_by_key(|(tick, _)| *tick);
    Ok(script)
}

/// Astronomical Unit in meters
const AU: f64 = 1.495978707e11;

fn earth_distance_au(sim: &Simulation) -> Option<f64> {
    let sun = sim.bodies().find("Sun")?.position();
    let earth = sim.bodies().find("Earth")?.position();
    Some(sun.distance_to(&earth) / AU)
}

/// Renderer that describes a frame in the log instead of drawing it
#[derive(Default)]
struct LogRenderer {
    trails: usize,
    trail_points: usize,
    bodies_on_screen: usize,
    bodies: usize,
    width: i32,
    height: i32,
}

impl LogRenderer {
    fn new(width: u32, height: u32) -> Self {
        LogRenderer {
            width: width as i32,
            height: height as i32,
            ..Default::default()
        }
    }
}

impl Renderer for LogRenderer {
    fn draw_trail(&mut self, points: &[(i32, i32)], _color: Color) {
        self.trails += 1;
        self.trail_points += points.len();
    }

    fn draw_body(&mut self, center: (i32, i32), _radius: u32, _color: Color) {
        self.bodies += 1;
        let (x, y) = center;
        if (0..self.width).contains(&x) && (0..self.height).contains(&y) {
            self.bodies_on_screen += 1;
        }
    }

    fn draw_label(&mut self, text: &str, at: (i32, i32), _color: Color) {
        log::debug!("  {:<8} label at ({}, {})", text, at.0, at.1);
    }

    fn draw_status(&mut self, text: &str) {
        log::info!(
            "{} | {}/{} bodies on screen, {} trails ({} points)",
            text,
            self.bodies_on_screen,
            self.bodies,
            self.trails,
            self.trail_points
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.log_level)?;

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(step) = args.step {
        config = config.with_initial_step(step);
    }
    config.validate().map_err(|e| anyhow!(e)).context("invalid configuration")?;

    let script = parse_script(&args.commands)?;
    let viewport = config.viewport();

    let mut sim = Simulation::new(catalog::solar_system(), &config)
        .map_err(|e| anyhow!(e))
        .context("failed to build simulation")?;
    if args.zoom {
        sim.apply(Command::ToggleZoom);
    }

    log::info!(
        "Starting {} bodies, {} integrator, step {} s, {} ticks",
        sim.bodies().len(),
        sim.integrator_name(),
        sim.step_size(),
        args.ticks
    );

    let g = sim.gravity().g_constant();
    let initial_energy = total_energy(sim.bodies(), g);
    let mut pending = script.into_iter().peekable();

    for tick in 0..args.ticks {
        while let Some((_, command)) = pending.next_if(|(at, _)| *at == tick) {
            log::info!("tick {}: {:?}", tick, command);
            sim.apply(command);
        }

        sim.tick();

        if args.report_every > 0 && (tick + 1) % args.report_every == 0 {
            let mut renderer = LogRenderer::new(viewport.width, viewport.height);
            render_frame(&sim, &mut renderer);
            let drift = relative_drift(initial_energy, total_energy(sim.bodies(), g));
            match earth_distance_au(&sim) {
                Some(au) => log::info!("  energy drift {:.3e}, Earth at {:.4} AU", drift, au),
                None => log::info!("  energy drift {:.3e}", drift),
            }
        }
    }

    for (tick, command) in pending {
        log::warn!("Command {:?} at tick {} was never reached", command, tick);
    }

    let final_energy = total_energy(sim.bodies(), g);
    log::info!("Finished: {}", sim.status_line());
    log::info!(
        "Energy {:.6e} J -> {:.6e} J (drift {:.3e})",
        initial_energy,
        final_energy,
        relative_drift(initial_energy, final_energy)
    );

    for body in sim.bodies().iter() {
        let p = body.position();
        log::info!(
            "  {:<8} x = {:>12.4e} m  y = {:>12.4e} m  |v| = {:>9.1} m/s",
            body.name(),
            p.x(),
            p.y(),
            body.velocity().magnitude()
        );
    }

    Ok(())
}
