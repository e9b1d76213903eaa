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
//! Drawing collaborator interface
//!
//! The kernel does not open windows or rasterize anything. A host supplies a
//! [`Renderer`] and [`render_frame`] tells it which primitives to draw for
//! the current state, in integer pixel coordinates.

use crate::model::Color;
use crate::simulation::Simulation;

/// Horizontal gap between a body's edge and its label (px)
pub const LABEL_GAP: i32 = 3;

/// Primitive drawing operations a host must provide
pub trait Renderer {
    /// Draw an open polyline through `points`
    fn draw_trail(&mut self, points: &[(i32, i32)], color: Color);

    /// Draw a filled disc
    fn draw_body(&mut self, center: (i32, i32), radius: u32, color: Color);

    /// Draw a text label with its top-left corner at `at`
    fn draw_label(&mut self, text: &str, at: (i32, i32), color: Color);

    /// Draw the status line
    fn draw_status(&mut self, text: &str);
}

/// Issue the draw calls for one frame
///
/// Per body, in set order: its trail (when it has at least two points), its
/// disc, and its name to the right of the disc. The status line comes last.
pub fn render_frame<R: Renderer + ?Sized>(simulation: &Simulation, renderer: &mut R) {
    for view in simulation.views() {
        if view.trail.len() > 1 {
            let points: Vec<(i32, i32)> = view.trail.iter().map(|p| p.to_pixel()).collect();
            renderer.draw_trail(&points, Color::TRAIL);
        }

        let (x, y) = view.screen.to_pixel();
        renderer.draw_body((x, y), view.radius, view.color);

        let label_x = x.saturating_add(view.radius as i32).saturating_add(LABEL_GAP);
        renderer.draw_label(view.name, (label_x, y), Color::WHITE);
    }

    renderer.draw_status(&simulation.status_line());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Trail(usize),
        Body((i32, i32), u32),
        Label(String, (i32, i32)),
        Status(String),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Renderer for Recorder {
        fn draw_trail(&mut self, points: &[(i32, i32)], color: Color) {
            assert_eq!(color, Color::TRAIL);
            self.calls.push(Call::Trail(points.len()));
        }

        fn draw_body(&mut self, center: (i32, i32), radius: u32, _color: Color) {
            self.calls.push(Call::Body(center, radius));
        }

        fn draw_label(&mut self, text: &str, at: (i32, i32), _color: Color) {
            self.calls.push(Call::Label(text.to_string(), at));
        }

        fn draw_status(&mut self, text: &str) {
            self.calls.push(Call::Status(text.to_string()));
        }
    }

    #[test]
    fn test_first_frame_has_no_trails() {
        let sim = Simulation::solar_system();
        let mut recorder = Recorder::default();
        render_frame(&sim, &mut recorder);

        // body + label per body, one status line
        assert_eq!(recorder.calls.len(), 10 * 2 + 1);
        assert_eq!(recorder.calls[0], Call::Body((400, 300), 12));
        assert_eq!(recorder.calls[1], Call::Label("Sun".to_string(), (415, 300)));
        assert!(matches!(recorder.calls.last(), Some(Call::Status(s)) if s.ends_with("Running")));
    }

    #[test]
    fn test_trails_drawn_after_two_steps() {
        let mut sim = Simulation::solar_system();
        sim.tick();

        let mut recorder = Recorder::default();
        render_frame(&sim, &mut recorder);
        assert!(!recorder.calls.iter().any(|c| matches!(c, Call::Trail(_))));

        sim.tick();
        let mut recorder = Recorder::default();
        render_frame(&sim, &mut recorder);
        let trails = recorder.calls.iter().filter(|c| matches!(c, Call::Trail(2))).count();
        assert_eq!(trails, 10);
        assert_eq!(recorder.calls[0], Call::Trail(2));
    }
}
