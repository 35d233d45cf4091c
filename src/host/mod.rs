// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

//! Host collaborator interface.
//!
//! The real attribute-editor panel is owned by the host application; the core
//! only needs the narrow capability surface below. Concrete adapters wrap the
//! application's panel handles, and [`MemoryHost`] is the in-memory stand-in
//! used by tests and the demo shell.
//!
//! Adapter construction is where "panel not found" failures surface; by the
//! time a `ChannelBoxHost` exists, the panel handle is live.

pub mod memory;

pub use memory::MemoryHost;

use crate::model::{AttributeInfo, NodeId};
use crate::palette::Colour;
use crate::search::AttrFilter;

/// Callback invoked by the host whenever the selection changes.
///
/// The host guarantees callbacks run synchronously on its event loop and are
/// never reentrant or concurrent.
pub type SelectionCallback = Box<dyn FnMut()>;

/// Opaque handle for one selection-changed subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// The attribute-editor panel as the core sees it.
pub trait ChannelBoxHost {
    /// Currently selected nodes, in selection order; may contain repeats.
    fn current_selection(&self) -> Vec<NodeId>;

    /// Keyable, displayable attributes of `node`, in host enumeration order.
    fn interactive_attributes(&self, node: &NodeId) -> Vec<AttributeInfo>;

    /// User-defined attributes of `node`, in host enumeration order. The
    /// order is significant and must not be re-sorted by callers.
    fn user_defined_attributes(&self, node: &NodeId) -> Vec<AttributeInfo>;

    /// Sets the background colour of every attribute with exactly this name.
    fn set_attribute_background(&self, name: &str, colour: Colour);

    /// Replaces the panel allow-list. [`AttrFilter::All`] maps to the host's
    /// "empty list means no restriction" codepath.
    fn restrict_visible_attributes(&self, filter: &AttrFilter);

    /// Registers a selection-changed callback. The caller owns the returned
    /// handle and must release it through [`ChannelBoxHost::unsubscribe`]
    /// exactly once.
    fn subscribe_selection_changed(&self, callback: SelectionCallback) -> SubscriptionId;

    /// Releases a subscription; unknown handles are ignored.
    fn unsubscribe(&self, subscription: SubscriptionId);
}
