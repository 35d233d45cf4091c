// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

//! Colour palette configuration.
//!
//! A palette is an ordered list of main-colour groups, each an ordered list of
//! sub colours, plus one distinguished divider colour. The engines only ever
//! index into it cyclically; validation at construction time is what keeps the
//! modulo arithmetic total.

use std::fmt;

use smallvec::{smallvec, SmallVec};

/// Linear RGB colour, components in `[0, 1]` (the host panel colour model).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    r: f64,
    g: f64,
    b: f64,
}

impl Colour {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn red(&self) -> f64 {
        self.r
    }

    pub fn green(&self) -> f64 {
        self.g
    }

    pub fn blue(&self) -> f64 {
        self.b
    }

    /// 8-bit conversion for terminal rendering; components are clamped.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

/// One main-colour group: the sub colours cycled through while adjacent names
/// keep diverging inside the same section.
pub type ColourGroup = SmallVec<[Colour; 4]>;

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    groups: Vec<ColourGroup>,
    divider: Colour,
}

impl Palette {
    /// Builds a palette, enforcing "at least one group, every group
    /// non-empty" so cyclic indexing never divides by zero.
    pub fn new(groups: Vec<ColourGroup>, divider: Colour) -> Result<Self, PaletteError> {
        if groups.is_empty() {
            return Err(PaletteError::NoGroups);
        }
        if let Some(index) = groups.iter().position(SmallVec::is_empty) {
            return Err(PaletteError::EmptyGroup(index));
        }
        Ok(Self { groups, divider })
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Sub-colour count of the group at `main`; `main` must be in range.
    pub fn group_len(&self, main: usize) -> usize {
        self.groups[main].len()
    }

    /// Palette colour at a wrapped `(main, sub)` cursor position.
    pub fn colour(&self, main: usize, sub: usize) -> Colour {
        self.groups[main][sub]
    }

    pub fn divider_colour(&self) -> Colour {
        self.divider
    }
}

/// Built-in palette: muted hues grouped with lighter sub-shades, plus a dark
/// grey divider that reads as a section break against the panel background.
impl Default for Palette {
    fn default() -> Self {
        let groups: Vec<ColourGroup> = vec![
            smallvec![
                Colour::rgb(0.19, 0.33, 0.46),
                Colour::rgb(0.25, 0.43, 0.60),
                Colour::rgb(0.33, 0.53, 0.72),
            ],
            smallvec![
                Colour::rgb(0.23, 0.42, 0.26),
                Colour::rgb(0.30, 0.53, 0.33),
                Colour::rgb(0.39, 0.64, 0.42),
            ],
            smallvec![
                Colour::rgb(0.43, 0.29, 0.47),
                Colour::rgb(0.54, 0.38, 0.58),
                Colour::rgb(0.65, 0.49, 0.69),
            ],
            smallvec![
                Colour::rgb(0.55, 0.38, 0.21),
                Colour::rgb(0.67, 0.48, 0.27),
                Colour::rgb(0.78, 0.59, 0.36),
            ],
            smallvec![
                Colour::rgb(0.20, 0.43, 0.43),
                Colour::rgb(0.26, 0.54, 0.54),
                Colour::rgb(0.34, 0.65, 0.65),
            ],
        ];
        let divider = Colour::rgb(0.16, 0.16, 0.16);

        Self::new(groups, divider).expect("built-in palette is non-empty")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    NoGroups,
    EmptyGroup(usize),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGroups => f.write_str("palette must contain at least one colour group"),
            Self::EmptyGroup(index) => {
                write!(f, "palette group {index} must contain at least one colour")
            }
        }
    }
}

impl std::error::Error for PaletteError {}
