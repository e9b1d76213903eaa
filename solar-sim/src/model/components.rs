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
//! Planar Newtonian state types
//!
//! Bodies live in the ecliptic plane, so every kinematic quantity here is a
//! two-component double-precision vector in SI units. Mass carries the only
//! hard invariant (strictly positive) and enforces it at construction.

/// 2D position in meters
///
/// # Examples
///
/// ```
/// use solar_sim::model::Position;
///
/// let pos = Position::new(1.496e11, 0.0);
/// assert_eq!(pos.x(), 1.496e11);
/// assert!(pos.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Create a new position with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Position at the origin
    pub fn zero() -> Self {
        Position::new(0.0, 0.0)
    }

    /// Get the x coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Check if both coordinates are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance from the origin
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Polar angle in radians, measured from +x towards +y
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::zero()
    }
}

/// 2D velocity in meters per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    /// Create a new velocity with the given components
    pub fn new(dx: f64, dy: f64) -> Self {
        Velocity { dx, dy }
    }

    /// Zero velocity (at rest)
    pub fn zero() -> Self {
        Velocity::new(0.0, 0.0)
    }

    /// Get the x component
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Get the y component
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Check if both components are finite
    pub fn is_valid(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }

    /// Speed
    pub fn magnitude(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Velocity::zero()
    }
}

/// 2D acceleration in meters per second squared
///
/// Produced by the gravity pass from accumulated forces (a = F/m) and
/// consumed by the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceleration {
    ax: f64,
    ay: f64,
}

impl Acceleration {
    /// Create a new acceleration with the given components
    pub fn new(ax: f64, ay: f64) -> Self {
        Acceleration { ax, ay }
    }

    /// Zero acceleration
    pub fn zero() -> Self {
        Acceleration::new(0.0, 0.0)
    }

    /// Get the x component
    pub fn ax(&self) -> f64 {
        self.ax
    }

    /// Get the y component
    pub fn ay(&self) -> f64 {
        self.ay
    }

    /// Check if both components are finite
    pub fn is_valid(&self) -> bool {
        self.ax.is_finite() && self.ay.is_finite()
    }

    /// Magnitude of the acceleration vector
    pub fn magnitude(&self) -> f64 {
        (self.ax * self.ax + self.ay * self.ay).sqrt()
    }
}

impl Default for Acceleration {
    fn default() -> Self {
        Acceleration::zero()
    }
}

/// Mass in kilograms, always strictly positive
///
/// Unlike a general rigid-body engine there are no immovable bodies here:
/// the Sun is an ordinary (very heavy) body and feels its planets' pull.
///
/// # Examples
///
/// ```
/// use solar_sim::model::Mass;
///
/// let sun = Mass::new(1.989e30);
/// assert!(sun.inverse() > 0.0);
/// assert!(Mass::try_new(0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    value: f64,
}

impl Mass {
    /// Create a new mass in kilograms
    ///
    /// # Panics
    ///
    /// Panics if the mass is not strictly positive and finite. Use `try_new`
    /// for fallible construction.
    pub fn new(value: f64) -> Self {
        assert!(value > 0.0 && value.is_finite(), "Mass must be positive and finite");
        Mass { value }
    }

    /// Try to create a new mass, returning `None` for zero, negative, NaN or
    /// infinite values
    pub fn try_new(value: f64) -> Option<Self> {
        if value > 0.0 && value.is_finite() {
            Some(Mass { value })
        } else {
            None
        }
    }

    /// Get the mass value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Inverse mass (1/m)
    pub fn inverse(&self) -> f64 {
        1.0 / self.value
    }
}

/// Display color as 8-bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Trail line color used by the reference viewer
    pub const TRAIL: Color = Color::rgb(80, 80, 80);

    /// Label and status text color
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(1.0, 2.0);
        assert_eq!(pos.x(), 1.0);
        assert_eq!(pos.y(), 2.0);
        assert_eq!(Position::default(), Position::zero());
    }

    #[test]
    fn test_position_validation() {
        assert!(Position::new(1.0, 2.0).is_valid());
        assert!(!Position::new(f64::NAN, 2.0).is_valid());
        assert!(!Position::new(1.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_position_distance_and_angle() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.magnitude(), 5.0);
        assert_eq!(Position::new(0.0, 1.0).angle(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_velocity_magnitude() {
        let vel = Velocity::new(3.0, 4.0);
        assert_eq!(vel.magnitude(), 5.0);
        assert!(vel.is_valid());
        assert!(!Velocity::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_acceleration_validation() {
        assert!(Acceleration::new(0.0, -9.81).is_valid());
        assert!(!Acceleration::new(f64::INFINITY, 0.0).is_valid());
        assert_eq!(Acceleration::default(), Acceleration::zero());
    }

    #[test]
    fn test_mass_try_new() {
        assert_eq!(Mass::try_new(10.5).map(|m| m.value()), Some(10.5));
        assert!(Mass::try_new(0.0).is_none());
        assert!(Mass::try_new(-1.0).is_none());
        assert!(Mass::try_new(f64::NAN).is_none());
        assert!(Mass::try_new(f64::INFINITY).is_none());
    }

    #[test]
    #[should_panic(expected = "Mass must be positive and finite")]
    fn test_mass_zero_panics() {
        Mass::new(0.0);
    }

    #[test]
    fn test_mass_inverse() {
        assert_eq!(Mass::new(2.0).inverse(), 0.5);
        assert_eq!(Mass::new(100.0).inverse(), 0.01);
    }
}
