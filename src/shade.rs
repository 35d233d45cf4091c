// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

//! Colour Assignment Engine.
//!
//! Partitions a node's user-defined attributes into contiguous sections broken
//! by divider attributes, assigns each section a main colour, and advances a
//! sub colour inside the section whenever adjacent names stop looking alike.
//! The output is a pure function of (ordered attribute list, palette,
//! threshold); the caller applies it to the host panel afterwards.

use smol_str::SmolStr;

use crate::model::AttributeInfo;
use crate::palette::{Colour, Palette};

/// Similarity ratio between two names in `[0, 1]`.
///
/// Indel ratio, `2 * matches / (len(a) + len(b))`: identical strings score
/// 1.0, strings sharing no characters score 0.0.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    rapidfuzz::fuzz::ratio(a.chars(), b.chars())
}

/// Assigns a background colour to every attribute in `attrs`, in order.
///
/// Dividers receive the fixed divider colour, advance the main-colour cursor
/// (wrapping) and reset the sub-colour cursor. Any other attribute compares
/// against the literal previous entry in the list (divider or not) and
/// advances the sub colour (wrapping within the current group) when the
/// similarity ratio falls below `threshold`.
///
/// An empty `attrs` slice yields an empty assignment; there are no error
/// conditions.
pub fn assign_colours(
    attrs: &[AttributeInfo],
    palette: &Palette,
    threshold: f64,
) -> Vec<(SmolStr, Colour)> {
    let mut assigned = Vec::with_capacity(attrs.len());
    let mut main = 0usize;
    let mut sub = 0usize;

    for (index, attr) in attrs.iter().enumerate() {
        if attr.is_divider() {
            assigned.push((attr.name().clone(), palette.divider_colour()));
            main = (main + 1) % palette.group_count();
            sub = 0;
            continue;
        }

        if index != 0 {
            let ratio = name_similarity(attr.name(), attrs[index - 1].name());
            if ratio < threshold {
                sub = (sub + 1) % palette.group_len(main);
            }
        }

        assigned.push((attr.name().clone(), palette.colour(main, sub)));
    }

    assigned
}
