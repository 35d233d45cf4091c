// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

//! Search widget state and lifecycle.
//!
//! [`SearchWidget`] owns the query text and threshold, holds exactly one
//! selection-changed subscription on the host, and re-runs the refresh
//! pipeline (colour pass + filter pass) on every selection change and every
//! query edit. [`install`]/[`uninstall`] manage the process-wide single
//! instance the way the original panel add-on replaces itself on reinstall.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::host::{ChannelBoxHost, SubscriptionId};
use crate::model::AttributeInfo;
use crate::palette::Palette;
use crate::search;
use crate::shade;

/// Default similarity threshold; the higher the threshold, the more two
/// adjacent names must match to keep the same sub colour.
pub const DEFAULT_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Minimum similarity ratio in `[0, 1]` for adjacent names to share a sub
    /// colour. Fixed at attach time.
    pub threshold: f64,
    pub palette: Palette,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            palette: Palette::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttachError {
    ThresholdOutOfRange(f64),
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThresholdOutOfRange(value) => {
                write!(f, "threshold must be within [0, 1], got {value}")
            }
        }
    }
}

impl std::error::Error for AttachError {}

struct WidgetCore {
    host: Rc<dyn ChannelBoxHost>,
    palette: Palette,
    threshold: f64,
    query: RefCell<String>,
}

impl WidgetCore {
    /// The per-event pipeline: snapshot the selection, recolour every
    /// selected node's user-defined attributes, then recompute and apply the
    /// visible-attribute allow-list. Both results are rebuilt from scratch;
    /// attributes of deselected nodes keep whatever colour they last had.
    fn refresh(&self) {
        let selection = self.host.current_selection();

        for node in &selection {
            let attrs = self.host.user_defined_attributes(node);
            for (name, colour) in shade::assign_colours(&attrs, &self.palette, self.threshold) {
                self.host.set_attribute_background(&name, colour);
            }
        }

        let snapshots: Vec<Vec<AttributeInfo>> = selection
            .iter()
            .map(|node| self.host.interactive_attributes(node))
            .collect();
        let filter = search::matching_attributes(
            &self.query.borrow(),
            snapshots.iter().map(Vec::as_slice),
        );
        self.host.restrict_visible_attributes(&filter);
    }
}

/// The search widget: query state plus the one host subscription.
///
/// Dropping the widget (or calling [`SearchWidget::detach`]) releases the
/// subscription exactly once; there is no teardown path that leaves a
/// callback dangling.
pub struct SearchWidget {
    core: Rc<WidgetCore>,
    subscription: Option<SubscriptionId>,
}

impl SearchWidget {
    /// Attaches to the host: validates the configuration, registers the
    /// selection-changed subscription and runs an initial refresh.
    pub fn attach(
        host: Rc<dyn ChannelBoxHost>,
        config: WidgetConfig,
    ) -> Result<Self, AttachError> {
        if !(0.0..=1.0).contains(&config.threshold) {
            return Err(AttachError::ThresholdOutOfRange(config.threshold));
        }

        let core = Rc::new(WidgetCore {
            host,
            palette: config.palette,
            threshold: config.threshold,
            query: RefCell::new(String::new()),
        });

        // The host outlives the widget on some teardown paths, so the
        // callback holds a weak handle and degrades to a no-op once the
        // widget is gone.
        let callback_core: Weak<WidgetCore> = Rc::downgrade(&core);
        let subscription = core
            .host
            .subscribe_selection_changed(Box::new(move || {
                if let Some(core) = callback_core.upgrade() {
                    core.refresh();
                }
            }));

        let widget = Self {
            core,
            subscription: Some(subscription),
        };
        widget.core.refresh();
        Ok(widget)
    }

    pub fn threshold(&self) -> f64 {
        self.core.threshold
    }

    pub fn query(&self) -> String {
        self.core.query.borrow().clone()
    }

    /// Replaces the query text and re-runs the refresh pipeline.
    pub fn set_query(&self, text: impl Into<String>) {
        *self.core.query.borrow_mut() = text.into();
        self.core.refresh();
    }

    /// Clears the query, restoring the unfiltered view.
    pub fn clear_query(&self) {
        self.set_query(String::new());
    }

    /// Re-runs the pipeline against the current selection and query.
    pub fn refresh(&self) {
        self.core.refresh();
    }

    /// Explicit teardown; equivalent to dropping the widget.
    pub fn detach(mut self) {
        self.release_subscription();
    }

    fn release_subscription(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.core.host.unsubscribe(subscription);
        }
    }
}

impl Drop for SearchWidget {
    fn drop(&mut self) {
        self.release_subscription();
    }
}

thread_local! {
    static INSTALLED: RefCell<Option<SearchWidget>> = const { RefCell::new(None) };
}

/// Installs the widget as the process-wide single instance, detaching any
/// previous instance first. Reinstalling is therefore always safe.
pub fn install(host: Rc<dyn ChannelBoxHost>, config: WidgetConfig) -> Result<(), AttachError> {
    uninstall();
    let widget = SearchWidget::attach(host, config)?;
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(widget));
    Ok(())
}

/// Removes the installed instance and releases its subscription; no-op when
/// nothing is installed.
pub fn uninstall() {
    INSTALLED.with(|slot| {
        if let Some(widget) = slot.borrow_mut().take() {
            widget.detach();
        }
    });
}

pub fn is_installed() -> bool {
    INSTALLED.with(|slot| slot.borrow().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::model::NodeId;
    use crate::search::{AttrFilter, NO_MATCH_SENTINEL};

    fn node(name: &str) -> NodeId {
        NodeId::new(name).expect("node id")
    }

    fn rig_host() -> Rc<MemoryHost> {
        let host = Rc::new(MemoryHost::new());
        let cube = node("cube1");
        host.add_attribute(&cube, AttributeInfo::keyable("translateX"), false);
        host.add_attribute(&cube, AttributeInfo::keyable("translateY"), false);
        host.add_attribute(&cube, AttributeInfo::keyable("rotateX"), false);
        host.add_attribute(&cube, AttributeInfo::divider("extras"), true);
        host.add_attribute(&cube, AttributeInfo::keyable("stretch"), true);
        host.add_attribute(&cube, AttributeInfo::keyable("volume"), true);
        host
    }

    #[test]
    fn attach_rejects_out_of_range_thresholds() {
        let host: Rc<dyn ChannelBoxHost> = Rc::new(MemoryHost::new());
        let config = WidgetConfig {
            threshold: 1.5,
            ..WidgetConfig::default()
        };
        let result = SearchWidget::attach(Rc::clone(&host), config);
        assert_eq!(
            result.err(),
            Some(AttachError::ThresholdOutOfRange(1.5))
        );

        let config = WidgetConfig {
            threshold: -0.1,
            ..WidgetConfig::default()
        };
        assert!(SearchWidget::attach(host, config).is_err());
    }

    #[test]
    fn attach_runs_an_initial_refresh() {
        let host = rig_host();
        host.select(vec![node("cube1")]);

        let widget = SearchWidget::attach(host.clone(), WidgetConfig::default())
            .expect("attach");

        assert_eq!(host.subscription_count(), 1);
        assert_eq!(host.applied_filter(), Some(AttrFilter::All));
        assert_eq!(
            host.background("extras"),
            Some(widget.core.palette.divider_colour())
        );
        assert!(host.background("stretch").is_some());
    }

    #[test]
    fn selection_change_recolours_user_attributes() {
        let host = rig_host();
        let _widget =
            SearchWidget::attach(host.clone(), WidgetConfig::default()).expect("attach");

        assert_eq!(host.background("stretch"), None);
        host.select(vec![node("cube1")]);

        let palette = Palette::default();
        assert_eq!(host.background("extras"), Some(palette.divider_colour()));
        // "stretch" follows the divider: main group 1, and the adjacency
        // comparison against the divider's own name bumps the sub colour
        assert_eq!(host.background("stretch"), Some(palette.colour(1, 1)));
        // built-in attributes are not user-defined, so they are never touched
        assert_eq!(host.background("translateX"), None);
    }

    #[test]
    fn query_edits_recompute_the_allow_list() {
        let host = rig_host();
        host.select(vec![node("cube1")]);
        let widget =
            SearchWidget::attach(host.clone(), WidgetConfig::default()).expect("attach");

        widget.set_query("translate");
        let Some(AttrFilter::Restrict(names)) = host.applied_filter() else {
            panic!("expected a restriction");
        };
        assert_eq!(names, vec!["translateX", "translateY"]);

        widget.set_query("tx ty");
        let Some(filter) = host.applied_filter() else {
            panic!("expected a filter");
        };
        assert_eq!(
            filter,
            AttrFilter::Restrict(vec![NO_MATCH_SENTINEL.into()])
        );

        widget.clear_query();
        assert_eq!(host.applied_filter(), Some(AttrFilter::All));
        assert_eq!(widget.query(), "");
    }

    #[test]
    fn deselected_nodes_keep_their_last_colour() {
        let host = rig_host();
        let pyramid = node("pyramid1");
        host.add_attribute(&pyramid, AttributeInfo::keyable("taper"), true);
        let _widget =
            SearchWidget::attach(host.clone(), WidgetConfig::default()).expect("attach");

        host.select(vec![node("cube1")]);
        let stretch = host.background("stretch").expect("coloured");

        host.select(vec![pyramid]);
        // stale by design: only the current selection is recoloured
        assert_eq!(host.background("stretch"), Some(stretch));
    }

    #[test]
    fn drop_releases_the_subscription_exactly_once() {
        let host = rig_host();
        let widget =
            SearchWidget::attach(host.clone(), WidgetConfig::default()).expect("attach");
        assert_eq!(host.subscription_count(), 1);

        drop(widget);
        assert_eq!(host.subscription_count(), 0);

        let widget =
            SearchWidget::attach(host.clone(), WidgetConfig::default()).expect("attach");
        widget.detach();
        assert_eq!(host.subscription_count(), 0);
    }

    #[test]
    fn install_replaces_the_previous_instance() {
        let host = rig_host();
        assert!(!is_installed());

        install(host.clone(), WidgetConfig::default()).expect("install");
        assert!(is_installed());
        assert_eq!(host.subscription_count(), 1);

        // reinstalling detaches the old widget before attaching the new one
        install(host.clone(), WidgetConfig::default()).expect("reinstall");
        assert_eq!(host.subscription_count(), 1);

        uninstall();
        assert!(!is_installed());
        assert_eq!(host.subscription_count(), 0);
        uninstall();
    }

    #[test]
    fn custom_threshold_changes_grouping() {
        let host = Rc::new(MemoryHost::new());
        let cube = node("cube1");
        host.add_attribute(&cube, AttributeInfo::keyable("foo"), true);
        host.add_attribute(&cube, AttributeInfo::keyable("foobar"), true);
        host.select(vec![cube]);

        // ratio(foo, foobar) = 0.667: same colour at threshold 0.5, split at
        // the 0.75 default
        let relaxed = WidgetConfig {
            threshold: 0.5,
            ..WidgetConfig::default()
        };
        let widget = SearchWidget::attach(host.clone(), relaxed).expect("attach");
        assert_eq!(widget.threshold(), 0.5);
        assert_eq!(host.background("foo"), host.background("foobar"));
        drop(widget);

        let widget =
            SearchWidget::attach(host.clone(), WidgetConfig::default()).expect("attach");
        assert_eq!(widget.threshold(), DEFAULT_THRESHOLD);
        assert_ne!(host.background("foo"), host.background("foobar"));
    }
}
