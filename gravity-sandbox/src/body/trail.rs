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
//! Bounded position history kept for rendering

use glam::DVec2;
use std::collections::VecDeque;

/// Default number of positions a trail retains
pub const DEFAULT_TRAIL_LENGTH: usize = 50;

/// FIFO of past positions, oldest first
///
/// The physics never reads the trail; it exists so a renderer can draw the
/// recent path of a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<DVec2>,
    capacity: usize,
}

impl Trail {
    /// Create an empty trail with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TRAIL_LENGTH)
    }

    /// Create an empty trail holding at most `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Trail {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest ones beyond capacity
    pub fn push(&mut self, point: DVec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Change the capacity, dropping the oldest points if it shrinks
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.points.len() > capacity {
            self.points.pop_front();
        }
    }

    /// Maximum number of retained points
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trail holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DVec2> + ExactSizeIterator {
        self.points.iter()
    }

    /// Most recent point
    pub fn latest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    /// Drop every point
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
