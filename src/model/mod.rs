// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

//! Attribute snapshot types shared by the engines and the host interface.
//!
//! Everything here is a point-in-time snapshot read from the host when a
//! selection-changed notification fires; nothing is cached across events.

pub mod attribute;

pub use attribute::{AttributeInfo, NodeId, NodeIdError};
