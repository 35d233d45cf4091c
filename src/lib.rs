// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

//! channelbox-plus — searchable, colour-coded attribute panel core.
//!
//! The two engines (`shade` for colour assignment, `search` for attribute
//! filtering) are pure functions over per-selection attribute snapshots. The
//! host panel itself sits behind [`host::ChannelBoxHost`]; a concrete
//! in-memory adapter backs the tests and the interactive demo shell in `tui`.

pub mod host;
pub mod model;
pub mod palette;
pub mod search;
pub mod shade;
pub mod tui;
pub mod widget;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
