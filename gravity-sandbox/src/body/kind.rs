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
//! Body kinds and the per-kind properties the rule table consults

use std::fmt;
use std::str::FromStr;

/// Closed set of body kinds
///
/// The kind selects which interaction rule applies to a pair of bodies
/// (see [`interaction::classify`](crate::interaction::classify)) and the
/// color a renderer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Ordinary massive body
    Planet,
    /// Heavy ordinary body
    Star,
    /// Always wins the kind of a merge it takes part in
    BlackHole,
    /// Repels everything at twice the strength of gravity, never pushed itself
    WhiteHole,
    /// Static portal, teleports whatever touches it to another wormhole
    Wormhole,
    /// Behaves as ordinary matter
    Antimatter,
}

/// RGB color used by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// CSS-style hex string, e.g. `#4f8aff`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl BodyKind {
    /// Every kind, in declaration order
    pub const ALL: [BodyKind; 6] = [
        BodyKind::Planet,
        BodyKind::Star,
        BodyKind::BlackHole,
        BodyKind::WhiteHole,
        BodyKind::Wormhole,
        BodyKind::Antimatter,
    ];

    /// Lowercase tag used by spawn menus and log output
    pub fn name(&self) -> &'static str {
        match self {
            BodyKind::Planet => "planet",
            BodyKind::Star => "star",
            BodyKind::BlackHole => "blackhole",
            BodyKind::WhiteHole => "whitehole",
            BodyKind::Wormhole => "wormhole",
            BodyKind::Antimatter => "antimatter",
        }
    }

    /// Render color
    pub fn color(&self) -> Color {
        match self {
            BodyKind::Planet => Color::rgb(0x4f, 0x8a, 0xff),
            BodyKind::Star => Color::rgb(0xff, 0xcc, 0x00),
            BodyKind::BlackHole => Color::rgb(0x00, 0x00, 0x00),
            BodyKind::WhiteHole => Color::rgb(0xff, 0xff, 0xff),
            BodyKind::Wormhole => Color::rgb(0x00, 0xff, 0xcc),
            BodyKind::Antimatter => Color::rgb(0xff, 0x00, 0xff),
        }
    }

    /// Mass given to bodies spawned without an explicit mass
    pub fn default_spawn_mass(&self) -> f64 {
        match self {
            BodyKind::Planet | BodyKind::Antimatter => 10.0,
            BodyKind::Star => 500.0,
            BodyKind::BlackHole | BodyKind::WhiteHole => 2000.0,
            BodyKind::Wormhole => 0.0,
        }
    }

    /// Whether applied forces move bodies of this kind
    ///
    /// Wormholes and white holes act on others but are never pushed.
    pub fn receives_forces(&self) -> bool {
        !matches!(self, BodyKind::Wormhole | BodyKind::WhiteHole)
    }

    /// Whether bodies of this kind may have zero mass
    pub fn allows_zero_mass(&self) -> bool {
        matches!(self, BodyKind::Wormhole)
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown kind tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown body kind `{}`", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for BodyKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        BodyKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == tag)
            .ok_or(UnknownKind(s.to_string()))
    }
}
