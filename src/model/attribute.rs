// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// An opaque host-side node identifier.
///
/// The host application owns the naming scheme; the only local rule is that
/// the identifier is non-empty, because an empty name cannot address a node
/// through any host query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(SmolStr);

impl NodeId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, NodeIdError> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(NodeIdError::Empty);
        }
        Ok(Self(SmolStr::new(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeIdError {
    Empty,
}

impl fmt::Display for NodeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("node id must not be empty"),
        }
    }
}

impl std::error::Error for NodeIdError {}

/// Snapshot of one attribute's display-relevant state.
///
/// `keyable` means "interactive/displayable" in the host's terms; `locked`
/// attributes cannot be edited. Both flags are read fresh from the host on
/// every selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeInfo {
    name: SmolStr,
    keyable: bool,
    locked: bool,
}

impl AttributeInfo {
    pub fn new(name: impl AsRef<str>, keyable: bool, locked: bool) -> Self {
        Self {
            name: SmolStr::new(name.as_ref()),
            keyable,
            locked,
        }
    }

    /// An interactive, unlocked attribute.
    pub fn keyable(name: impl AsRef<str>) -> Self {
        Self::new(name, true, false)
    }

    /// A locked, non-interactive attribute; renders as a section break in a
    /// user-defined attribute list.
    pub fn divider(name: impl AsRef<str>) -> Self {
        Self::new(name, false, true)
    }

    pub fn name(&self) -> &SmolStr {
        &self.name
    }

    pub fn is_keyable(&self) -> bool {
        self.keyable
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Divider rule for user-defined attribute lists: locked or
    /// non-interactive attributes mark a colour-group boundary.
    pub fn is_divider(&self) -> bool {
        self.locked || !self.keyable
    }
}
