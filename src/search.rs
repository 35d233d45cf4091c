// SPDX-FileCopyrightText: 2026 channelbox-plus contributors
// SPDX-License-Identifier: MIT

//! Search Filter Engine.
//!
//! Tokenizes a free-text query into lowercase terms and computes the set of
//! interactive attribute names, across the whole selection, that contain every
//! term as a substring. The result feeds the host panel's allow-list.

use smol_str::SmolStr;

use crate::model::AttributeInfo;

/// Reserved placeholder for "filter active, zero matches".
///
/// The host treats an empty allow-list as "no restriction", so a zero-match
/// query must still produce a non-empty list. This name is reserved: no real
/// attribute may be called this.
pub const NO_MATCH_SENTINEL: &str = "__cbp_no_match__";

/// Outcome of a filter computation, applied to the host allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrFilter {
    /// Clear the filter and show everything (the host's "empty list" path).
    All,
    /// Restrict the panel to exactly these names; never empty.
    Restrict(Vec<SmolStr>),
}

impl AttrFilter {
    /// True when this is the zero-match sentinel restriction.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::Restrict(names) if names.len() == 1 && names[0] == NO_MATCH_SENTINEL)
    }
}

/// Lowercased whitespace-separated query terms; empty terms are discarded.
fn query_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|term| term.to_lowercase())
        .collect()
}

/// True when the lowercased `name` contains every term as a substring.
fn matches_all_terms(name: &str, terms: &[String]) -> bool {
    let name = name.to_lowercase();
    terms.iter().all(|term| name.contains(term.as_str()))
}

/// Computes the visible-attribute allow-list for `query` over the interactive
/// attribute lists of every selected node.
///
/// A trimmed-empty query clears the filter. Otherwise names are matched with
/// AND semantics over all terms, deduplicated in first-discovery order across
/// nodes, and a zero-match result is replaced by the [`NO_MATCH_SENTINEL`]
/// so it stays distinguishable from "no filter".
pub fn matching_attributes<'a, I>(query: &str, nodes: I) -> AttrFilter
where
    I: IntoIterator<Item = &'a [AttributeInfo]>,
{
    let terms = query_terms(query);
    if terms.is_empty() {
        return AttrFilter::All;
    }

    let mut matches: Vec<SmolStr> = Vec::new();
    for attrs in nodes {
        for attr in attrs {
            if !attr.is_keyable() {
                continue;
            }
            if matches.iter().any(|name| name == attr.name()) {
                continue;
            }
            if matches_all_terms(attr.name(), &terms) {
                matches.push(attr.name().clone());
            }
        }
    }

    if matches.is_empty() {
        matches.push(SmolStr::new_static(NO_MATCH_SENTINEL));
    }

    AttrFilter::Restrict(matches)
}
