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
//! Body identity
//!
//! Handles are lightweight identifiers that let collaborators (input
//! handling, rendering) refer to a body across ticks. A handle is assigned
//! when a body enters a simulation and is never handed out again, so a stale
//! handle simply stops resolving once its body is merged or removed.

use std::fmt;

/// Stable identifier for a body inside a [`Simulation`](crate::Simulation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u64);

impl BodyHandle {
    /// Raw value carried by bodies that were never inserted into a simulation
    const DETACHED: u64 = u64::MAX;

    /// Create a handle from a raw u64 value
    pub fn new(id: u64) -> Self {
        BodyHandle(id)
    }

    /// Handle of a body that does not belong to any simulation yet
    pub fn detached() -> Self {
        BodyHandle(Self::DETACHED)
    }

    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Whether this handle was assigned by a simulation
    pub fn is_attached(&self) -> bool {
        self.0 != Self::DETACHED
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_attached() {
            write!(f, "Body({})", self.0)
        } else {
            write!(f, "Body(detached)")
        }
    }
}

/// Monotonic handle allocator
///
/// Never resets, not even when the owning simulation is cleared.
#[derive(Debug, Default)]
pub(crate) struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    pub(crate) fn allocate(&mut self) -> BodyHandle {
        let handle = BodyHandle::new(self.next);
        self.next += 1;
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_creation() {
        let handle = BodyHandle::new(42);
        assert_eq!(handle.raw(), 42);
        assert!(handle.is_attached());
        assert_eq!(handle.to_string(), "Body(42)");
    }

    #[test]
    fn test_detached_handle() {
        let handle = BodyHandle::detached();
        assert!(!handle.is_attached());
        assert_eq!(handle.to_string(), "Body(detached)");
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut allocator = HandleAllocator::default();
        let a = allocator.allocate();
        let b = allocator.allocate();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
