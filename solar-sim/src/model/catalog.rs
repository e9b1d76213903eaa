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
//! Built-in solar system catalog
//!
//! Approximate starting conditions for the Sun and the nine classical
//! planets. Every body starts on the +x axis at its mean orbital distance,
//! moving in +y at its mean orbital speed, so all orbits are counter-clockwise
//! and roughly circular.
//!
//! Values follow the NASA Planetary Fact Sheet:
//! https://nssdc.gsfc.nasa.gov/planetary/factsheet/

use super::body::{Body, BodySet};
use super::components::{Color, Mass, Position, Velocity};

/// Catalog row
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Body name
    pub name: &'static str,
    /// Distance from the Sun along +x (m)
    pub distance: f64,
    /// Tangential speed along +y (m/s)
    pub orbital_velocity: f64,
    /// Mass (kg)
    pub mass: f64,
    /// Display radius (px)
    pub radius: u32,
    /// Display color
    pub color: Color,
}

/// Sun through Pluto
pub const SOLAR_BODIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Sun",
        distance: 0.0,
        orbital_velocity: 0.0,
        mass: 1.989e30,
        radius: 12,
        color: Color::rgb(255, 255, 0),
    },
    CatalogEntry {
        name: "Mercury",
        distance: 5.79e10,
        orbital_velocity: 47360.0,
        mass: 3.301e23,
        radius: 3,
        color: Color::rgb(169, 169, 169),
    },
    CatalogEntry {
        name: "Venus",
        distance: 1.082e11,
        orbital_velocity: 35020.0,
        mass: 4.867e24,
        radius: 4,
        color: Color::rgb(255, 165, 0),
    },
    CatalogEntry {
        name: "Earth",
        distance: 1.496e11,
        orbital_velocity: 29780.0,
        mass: 5.972e24,
        radius: 5,
        color: Color::rgb(0, 100, 255),
    },
    CatalogEntry {
        name: "Mars",
        distance: 2.279e11,
        orbital_velocity: 24077.0,
        mass: 6.39e23,
        radius: 4,
        color: Color::rgb(255, 100, 0),
    },
    CatalogEntry {
        name: "Jupiter",
        distance: 7.786e11,
        orbital_velocity: 13070.0,
        mass: 1.898e27,
        radius: 7,
        color: Color::rgb(200, 150, 100),
    },
    CatalogEntry {
        name: "Saturn",
        distance: 1.432e12,
        orbital_velocity: 9680.0,
        mass: 5.683e26,
        radius: 6,
        color: Color::rgb(250, 200, 100),
    },
    CatalogEntry {
        name: "Uranus",
        distance: 2.867e12,
        orbital_velocity: 6810.0,
        mass: 8.681e25,
        radius: 5,
        color: Color::rgb(100, 200, 255),
    },
    CatalogEntry {
        name: "Neptune",
        distance: 4.515e12,
        orbital_velocity: 5430.0,
        mass: 1.024e26,
        radius: 5,
        color: Color::rgb(0, 0, 255),
    },
    CatalogEntry {
        name: "Pluto",
        distance: 5.906e12,
        orbital_velocity: 4670.0,
        mass: 1.309e22,
        radius: 2,
        color: Color::rgb(150, 100, 50),
    },
];

impl CatalogEntry {
    /// Build the body described by this row
    pub fn to_body(&self) -> Body {
        Body::new(
            self.name,
            Position::new(self.distance, 0.0),
            Velocity::new(0.0, self.orbital_velocity),
            Mass::new(self.mass),
            self.radius,
            self.color,
        )
    }
}

/// Build a body set from catalog rows
///
/// Returns an error if two rows share a name.
pub fn build(entries: &[CatalogEntry]) -> Result<BodySet, String> {
    let mut bodies = BodySet::new();
    for entry in entries {
        bodies.push(entry.to_body())?;
    }
    Ok(bodies)
}

/// The ten-body solar system in catalog order
///
/// # Panics
///
/// Panics if [`SOLAR_BODIES`] ever contains a duplicate name.
pub fn solar_system() -> BodySet {
    match build(SOLAR_BODIES) {
        Ok(bodies) => bodies,
        Err(e) => panic!("Built-in catalog is invalid: {}", e),
    }
}
