// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

//! In-memory host adapter.
//!
//! Behaves like a miniature attribute-editor panel: it stores nodes with
//! ordered attribute lists, records every applied background colour and the
//! current allow-list, and dispatches selection notifications synchronously.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::model::{AttributeInfo, NodeId};
use crate::palette::Colour;
use crate::search::AttrFilter;

use super::{ChannelBoxHost, SelectionCallback, SubscriptionId};

#[derive(Debug, Clone)]
struct StoredAttribute {
    info: AttributeInfo,
    user_defined: bool,
}

#[derive(Default)]
pub struct MemoryHost {
    nodes: RefCell<BTreeMap<NodeId, Vec<StoredAttribute>>>,
    selection: RefCell<Vec<NodeId>>,
    backgrounds: RefCell<BTreeMap<SmolStr, Colour>>,
    filter: RefCell<Option<AttrFilter>>,
    callbacks: RefCell<BTreeMap<u64, Rc<RefCell<SelectionCallback>>>>,
    next_subscription: Cell<u64>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `node` with an empty attribute list; repeat registration
    /// clears any previous attributes.
    pub fn add_node(&self, node: NodeId) {
        self.nodes.borrow_mut().insert(node, Vec::new());
    }

    /// Appends an attribute to `node`'s ordered list. Unknown nodes are
    /// created on first use.
    pub fn add_attribute(&self, node: &NodeId, attr: AttributeInfo, user_defined: bool) {
        self.nodes
            .borrow_mut()
            .entry(node.clone())
            .or_default()
            .push(StoredAttribute {
                info: attr,
                user_defined,
            });
    }

    /// Replaces the selection and fires every registered callback, mirroring
    /// the host's "active list modified" notification.
    pub fn select(&self, nodes: Vec<NodeId>) {
        *self.selection.borrow_mut() = nodes;
        self.notify_selection_changed();
    }

    /// Fires the selection-changed callbacks without touching the selection.
    pub fn notify_selection_changed(&self) {
        // Callbacks run outside the registry borrow: a callback is allowed to
        // call back into this host (and the search widget's refresh does).
        let callbacks: Vec<Rc<RefCell<SelectionCallback>>> =
            self.callbacks.borrow().values().cloned().collect();
        for callback in callbacks {
            (callback.borrow_mut())();
        }
    }

    pub fn registered_nodes(&self) -> Vec<NodeId> {
        self.nodes.borrow().keys().cloned().collect()
    }

    /// Last background colour applied to `name`, if any.
    pub fn background(&self, name: &str) -> Option<Colour> {
        self.backgrounds.borrow().get(name).copied()
    }

    /// Allow-list most recently applied, or `None` when nothing has been
    /// applied yet.
    pub fn applied_filter(&self) -> Option<AttrFilter> {
        self.filter.borrow().clone()
    }

    pub fn subscription_count(&self) -> usize {
        self.callbacks.borrow().len()
    }
}

impl ChannelBoxHost for MemoryHost {
    fn current_selection(&self) -> Vec<NodeId> {
        self.selection.borrow().clone()
    }

    fn interactive_attributes(&self, node: &NodeId) -> Vec<AttributeInfo> {
        self.nodes
            .borrow()
            .get(node)
            .map(|attrs| {
                attrs
                    .iter()
                    .filter(|stored| stored.info.is_keyable())
                    .map(|stored| stored.info.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn user_defined_attributes(&self, node: &NodeId) -> Vec<AttributeInfo> {
        self.nodes
            .borrow()
            .get(node)
            .map(|attrs| {
                attrs
                    .iter()
                    .filter(|stored| stored.user_defined)
                    .map(|stored| stored.info.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn set_attribute_background(&self, name: &str, colour: Colour) {
        self.backgrounds
            .borrow_mut()
            .insert(SmolStr::new(name), colour);
    }

    fn restrict_visible_attributes(&self, filter: &AttrFilter) {
        *self.filter.borrow_mut() = Some(filter.clone());
    }

    fn subscribe_selection_changed(&self, callback: SelectionCallback) -> SubscriptionId {
        let raw = self.next_subscription.get();
        self.next_subscription.set(raw + 1);
        self.callbacks
            .borrow_mut()
            .insert(raw, Rc::new(RefCell::new(callback)));
        SubscriptionId::from_raw(raw)
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.callbacks.borrow_mut().remove(&subscription.raw());
    }
}
