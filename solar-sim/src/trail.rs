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
//! Bounded per-body history of projected screen positions
//!
//! Each body keeps the last N projected points so the renderer can trace its
//! orbit. The buffer is a fixed-capacity ring: appending to a full buffer
//! evicts the oldest point first, so the length never exceeds the capacity
//! and both operations are O(1).

use crate::projection::ScreenPoint;
use std::collections::VecDeque;

/// Default number of points retained per body
pub const DEFAULT_TRAIL_CAPACITY: usize = 200;

/// Fixed-capacity FIFO of screen points
///
/// # Examples
///
/// ```
/// use solar_sim::trail::TrailBuffer;
/// use solar_sim::projection::ScreenPoint;
///
/// let mut trail = TrailBuffer::new(2);
/// trail.append(ScreenPoint::new(1.0, 1.0));
/// trail.append(ScreenPoint::new(2.0, 2.0));
/// trail.append(ScreenPoint::new(3.0, 3.0));
///
/// assert_eq!(trail.len(), 2);
/// assert_eq!(trail.oldest(), Some(ScreenPoint::new(2.0, 2.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrailBuffer {
    points: VecDeque<ScreenPoint>,
    capacity: usize,
}

impl TrailBuffer {
    /// Create an empty trail holding at most `capacity` points
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Trail capacity must be positive");
        TrailBuffer {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest one if the trail is full
    pub fn append(&mut self, point: ScreenPoint) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Drop every point
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Points in chronological order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &ScreenPoint> + '_ {
        self.points.iter()
    }

    /// Copy the points out in chronological order
    pub fn to_vec(&self) -> Vec<ScreenPoint> {
        self.points.iter().copied().collect()
    }

    /// Oldest retained point
    pub fn oldest(&self) -> Option<ScreenPoint> {
        self.points.front().copied()
    }

    /// Most recently appended point
    pub fn latest(&self) -> Option<ScreenPoint> {
        self.points.back().copied()
    }

    /// Number of points currently held
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trail holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of points retained
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        TrailBuffer::new(DEFAULT_TRAIL_CAPACITY)
    }
}
