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
//! Per-tick statistics returned by [`Simulation::update`](super::Simulation::update)

use crate::body::BodyHandle;

/// What a call to `update` did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickStatus {
    /// Interactions were resolved and bodies integrated
    #[default]
    Advanced,
    /// The simulation is paused; nothing changed
    Paused,
    /// `dt` was negative or not finite; nothing changed
    InvalidTimestep,
}

/// Two bodies combined into one during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEvent {
    /// Handles of the two bodies that no longer exist
    pub absorbed: [BodyHandle; 2],
    /// Handle of the body that replaced them
    pub product: BodyHandle,
}

/// Statistics for one tick
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    /// Whether the tick ran
    pub status: TickStatus,
    /// Pairs whose interaction was evaluated
    pub pairs_visited: usize,
    /// Mergers, in the order they happened
    pub merges: Vec<MergeEvent>,
    /// Bodies relocated through a wormhole
    pub teleports: usize,
    /// Wormhole contacts with no exit wormhole available
    pub stranded: usize,
    /// Pairs skipped because no force could be computed
    pub degenerate_pairs: usize,
}

impl TickReport {
    pub(crate) fn with_status(status: TickStatus) -> Self {
        TickReport {
            status,
            ..TickReport::default()
        }
    }

    /// Whether bodies were advanced
    pub fn advanced(&self) -> bool {
        self.status == TickStatus::Advanced
    }
}
