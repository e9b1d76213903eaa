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
//! Bodies and the ordered body set
//!
//! A [`Body`] bundles the physical state of one point mass with the display
//! attributes a renderer needs. A [`BodySet`] keeps bodies in creation
//! order; that order has no physical meaning but fixes draw and HUD order.

use super::components::{Color, Mass, Position, Velocity};
use crate::trail::{TrailBuffer, DEFAULT_TRAIL_CAPACITY};

/// One celestial object
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    position: Position,
    velocity: Velocity,
    mass: Mass,
    radius: u32,
    color: Color,
    trail: TrailBuffer,
}

impl Body {
    /// Create a body with an empty trail of the default capacity
    ///
    /// # Panics
    ///
    /// Panics if `radius` is zero.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        velocity: Velocity,
        mass: Mass,
        radius: u32,
        color: Color,
    ) -> Self {
        assert!(radius > 0, "Display radius must be positive");
        Body {
            name: name.into(),
            position,
            velocity,
            mass,
            radius,
            color,
            trail: TrailBuffer::new(DEFAULT_TRAIL_CAPACITY),
        }
    }

    /// Replace the trail with an empty one holding at most `capacity` points
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = TrailBuffer::new(capacity);
        self
    }

    /// Body name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in meters
    pub fn position(&self) -> Position {
        self.position
    }

    /// Velocity in meters per second
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Mass in kilograms
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Display radius in pixels
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Display color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Projected position history
    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// Mutable access to the trail
    pub fn trail_mut(&mut self) -> &mut TrailBuffer {
        &mut self.trail
    }

    /// Set the position
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Set the velocity
    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }
}

/// Ordered collection of bodies for one run
///
/// # Examples
///
/// ```
/// use solar_sim::model::{Body, BodySet, Color, Mass, Position, Velocity};
///
/// let mut bodies = BodySet::new();
/// let sun = Body::new("Sun", Position::zero(), Velocity::zero(), Mass::new(1.989e30), 12, Color::rgb(255, 255, 0));
/// bodies.push(sun.clone()).unwrap();
///
/// assert!(bodies.push(sun).is_err());
/// assert_eq!(bodies.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodySet {
    bodies: Vec<Body>,
}

impl BodySet {
    /// Create an empty set
    pub fn new() -> Self {
        BodySet { bodies: Vec::new() }
    }

    /// Append a body, keeping creation order
    ///
    /// Returns an error if a body with the same name is already present.
    pub fn push(&mut self, body: Body) -> Result<(), String> {
        if self.find(body.name()).is_some() {
            return Err(format!("Duplicate body name: {:?}", body.name()));
        }
        self.bodies.push(body);
        Ok(())
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    /// Iterate mutably in creation order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> + '_ {
        self.bodies.iter_mut()
    }

    /// Body at `index`
    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Look a body up by name
    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    /// All bodies as a slice
    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    /// Empty every trail
    pub fn clear_trails(&mut self) {
        for body in &mut self.bodies {
            body.trail.clear();
        }
    }

    /// Rebuild every trail with a new capacity, dropping existing points
    pub fn set_trail_capacity(&mut self, capacity: usize) {
        for body in &mut self.bodies {
            body.trail = TrailBuffer::new(capacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ScreenPoint;

    fn body(name: &str) -> Body {
        Body::new(name, Position::zero(), Velocity::zero(), Mass::new(1.0), 3, Color::WHITE)
    }

    #[test]
    fn test_body_creation() {
        let b = Body::new(
            "Earth",
            Position::new(1.496e11, 0.0),
            Velocity::new(0.0, 29780.0),
            Mass::new(5.972e24),
            5,
            Color::rgb(0, 100, 255),
        );
        assert_eq!(b.name(), "Earth");
        assert_eq!(b.position().x(), 1.496e11);
        assert_eq!(b.velocity().dy(), 29780.0);
        assert_eq!(b.radius(), 5);
        assert!(b.trail().is_empty());
        assert_eq!(b.trail().capacity(), DEFAULT_TRAIL_CAPACITY);
    }

    #[test]
    #[should_panic(expected = "Display radius must be positive")]
    fn test_zero_radius_panics() {
        Body::new("Dot", Position::zero(), Velocity::zero(), Mass::new(1.0), 0, Color::WHITE);
    }

    #[test]
    fn test_order_is_preserved() {
        let mut set = BodySet::new();
        for name in ["Sun", "Mercury", "Venus"] {
            set.push(body(name)).unwrap();
        }
        let names: Vec<&str> = set.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["Sun", "Mercury", "Venus"]);
        assert_eq!(set.get(1).map(|b| b.name()), Some("Mercury"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut set = BodySet::new();
        set.push(body("Sun")).unwrap();
        let err = set.push(body("Sun")).unwrap_err();
        assert!(err.contains("Duplicate body name"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_clear_trails() {
        let mut set = BodySet::new();
        set.push(body("A")).unwrap();
        set.push(body("B")).unwrap();
        for b in set.iter_mut() {
            b.trail_mut().append(ScreenPoint::new(1.0, 2.0));
        }

        set.clear_trails();
        assert!(set.iter().all(|b| b.trail().is_empty()));
    }

    #[test]
    fn test_set_trail_capacity() {
        let mut set = BodySet::new();
        set.push(body("A").with_trail_capacity(3)).unwrap();
        assert_eq!(set.find("A").unwrap().trail().capacity(), 3);

        set.set_trail_capacity(10);
        assert_eq!(set.find("A").unwrap().trail().capacity(), 10);
    }
}
