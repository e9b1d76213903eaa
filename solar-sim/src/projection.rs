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
//! Physical-to-screen projection
//!
//! Positions in meters are mapped to display coordinates with a uniform
//! scale and a translation to the viewport center:
//!
//! ```text
//! screen = physical * scale_factor + viewport_center
//! ```
//!
//! Two fixed scale factors are available. The normal one fits the outer
//! planets on screen, the zoomed one magnifies the inner system. The
//! projection itself is pure; clipping to an integer-pixel viewport is left
//! to the renderer (see [`ScreenPoint::to_pixel`]).

use crate::model::Position;

/// Normal scale in pixels per meter
pub const NORMAL_SCALE: f64 = 6e-11;

/// Zoomed scale in pixels per meter
pub const ZOOM_SCALE: f64 = 1e-9;

/// Zoom setting selecting one of the two scale factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZoomMode {
    /// Whole system in view
    #[default]
    Normal,
    /// Inner planets magnified
    Zoomed,
}

impl ZoomMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ZoomMode::Normal => ZoomMode::Zoomed,
            ZoomMode::Zoomed => ZoomMode::Normal,
        }
    }
}

/// Projected display coordinate
///
/// Kept in floating point so trails can be compared exactly in tests and
/// renderers can choose their own rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal pixel coordinate
    pub x: f64,
    /// Vertical pixel coordinate
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point
    pub fn new(x: f64, y: f64) -> Self {
        ScreenPoint { x, y }
    }

    /// Integer pixel, truncating toward zero
    ///
    /// Values outside the `i32` range saturate.
    pub fn to_pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// Viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: u32, height: u32) -> Self {
        Viewport { width, height }
    }

    /// Center pixel, using integer halves of the dimensions
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new((self.width / 2) as f64, (self.height / 2) as f64)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(800, 600)
    }
}

/// Maps physical positions to screen points under the active zoom mode
///
/// # Examples
///
/// ```
/// use solar_sim::projection::{ScaleTransform, ScreenPoint, ZoomMode};
/// use solar_sim::model::Position;
///
/// let mut transform = ScaleTransform::default();
/// assert_eq!(transform.project(&Position::zero()), ScreenPoint::new(400.0, 300.0));
///
/// transform.set_mode(ZoomMode::Zoomed);
/// assert_eq!(transform.scale_factor(), 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTransform {
    viewport: Viewport,
    normal_scale: f64,
    zoomed_scale: f64,
    mode: ZoomMode,
}

impl ScaleTransform {
    /// Create a transform in normal mode
    ///
    /// # Panics
    ///
    /// Panics if either scale is non-positive or not finite.
    pub fn new(viewport: Viewport, normal_scale: f64, zoomed_scale: f64) -> Self {
        assert!(
            normal_scale > 0.0 && normal_scale.is_finite(),
            "Scale factor must be positive and finite"
        );
        assert!(
            zoomed_scale > 0.0 && zoomed_scale.is_finite(),
            "Scale factor must be positive and finite"
        );
        ScaleTransform {
            viewport,
            normal_scale,
            zoomed_scale,
            mode: ZoomMode::Normal,
        }
    }

    /// Active zoom mode
    pub fn mode(&self) -> ZoomMode {
        self.mode
    }

    /// Select a zoom mode
    pub fn set_mode(&mut self, mode: ZoomMode) {
        self.mode = mode;
    }

    /// Flip between normal and zoomed, returning the new mode
    pub fn toggle(&mut self) -> ZoomMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Viewport the projection is centered in
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Pixels per meter for the active mode
    pub fn scale_factor(&self) -> f64 {
        match self.mode {
            ZoomMode::Normal => self.normal_scale,
            ZoomMode::Zoomed => self.zoomed_scale,
        }
    }

    /// Project a physical position to the screen
    pub fn project(&self, position: &Position) -> ScreenPoint {
        let scale = self.scale_factor();
        let center = self.viewport.center();
        ScreenPoint::new(
            position.x() * scale + center.x,
            position.y() * scale + center.y,
        )
    }
}

impl Default for ScaleTransform {
    fn default() -> Self {
        ScaleTransform::new(Viewport::default(), NORMAL_SCALE, ZOOM_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_maps_to_center() {
        let transform = ScaleTransform::default();
        let p = transform.project(&Position::zero());
        assert_eq!(p, ScreenPoint::new(400.0, 300.0));
    }

    #[test]
    fn test_normal_scale_projection() {
        let transform = ScaleTransform::default();
        let p = transform.project(&Position::new(1.496e11, -1.0e11));
        assert_relative_eq!(p.x, 1.496e11 * NORMAL_SCALE + 400.0);
        assert_relative_eq!(p.y, -1.0e11 * NORMAL_SCALE + 300.0);
    }

    #[test]
    fn test_zoomed_scale_projection() {
        let mut transform = ScaleTransform::default();
        assert_eq!(transform.toggle(), ZoomMode::Zoomed);

        let p = transform.project(&Position::new(1.496e11, 0.0));
        assert_relative_eq!(p.x, 149.6 + 400.0, epsilon = 1e-9);
        assert_eq!(p.y, 300.0);

        assert_eq!(transform.toggle(), ZoomMode::Normal);
        assert_eq!(transform.scale_factor(), NORMAL_SCALE);
    }

    #[test]
    fn test_odd_viewport_center_uses_integer_halves() {
        let viewport = Viewport::new(801, 601);
        assert_eq!(viewport.center(), ScreenPoint::new(400.0, 300.0));
    }

    #[test]
    fn test_to_pixel_truncates() {
        assert_eq!(ScreenPoint::new(10.9, -3.7).to_pixel(), (10, -3));
        assert_eq!(ScreenPoint::new(1e20, -1e20).to_pixel(), (i32::MAX, i32::MIN));
    }

    #[test]
    #[should_panic(expected = "Scale factor must be positive and finite")]
    fn test_invalid_scale_panics() {
        ScaleTransform::new(Viewport::default(), 0.0, ZOOM_SCALE);
    }
}
