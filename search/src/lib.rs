//! Lift view filtering.
//!
//! Derives the visible, favorite-annotated subset of the catalog for a
//! search query.
//!
//! # Design
//!
//! - Case-insensitive substring matching via a nucleo [`Matcher`], driven
//!   synchronously entry by entry so that catalog order is preserved among
//!   matches (no score ordering, no background worker).
//! - An empty query matches everything.
//! - Each visible entry carries the index into the full, unfiltered catalog;
//!   launch/delete/favorite-toggle address records by that index, not by
//!   filtered position.
//! - Re-run on every query change and after every mutation to keep the
//!   displayed list consistent with the backing stores.

use lift_core::types::{AppEntry, AppName, EntryId};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};

/// Prefix marking a favorite in display labels.
pub const FAVORITE_PREFIX: &str = "★ ";

/// One row of the visible list.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleEntry {
    /// Display label: the entry name, star-prefixed when it is a favorite.
    pub label: String,
    /// Index into the full, unfiltered catalog.
    pub source_index: usize,
    /// Stable in-memory id of the source entry.
    pub id: EntryId,
}

/// Reusable matcher state for view filtering.
pub struct FilterEngine {
    matcher: Matcher,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterEngine {
    pub fn new() -> Self {
        let mut config = NucleoConfig::DEFAULT;
        config.ignore_case = true;
        config.normalize = false;
        Self {
            matcher: Matcher::new(config),
        }
    }

    /// Returns the visible entries for `query`, in catalog order.
    ///
    /// `favorites` may contain dangling names; they simply never match an
    /// entry and are ignored here.
    pub fn visible_entries(
        &mut self,
        entries: &[AppEntry],
        favorites: &[AppName],
        query: &str,
    ) -> Vec<VisibleEntry> {
        // The matcher expects a pre-lowercased needle when ignoring case.
        let needle = query.to_lowercase();
        let mut needle_buf = Vec::new();
        let needle = Utf32Str::new(&needle, &mut needle_buf);

        let mut hay_buf = Vec::new();
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                query.is_empty()
                    || self
                        .matcher
                        .substring_match(Utf32Str::new(entry.name.as_str(), &mut hay_buf), needle)
                        .is_some()
            })
            .map(|(source_index, entry)| VisibleEntry {
                label: label_for(entry, favorites),
                source_index,
                id: entry.id,
            })
            .collect()
    }
}

fn label_for(entry: &AppEntry, favorites: &[AppName]) -> String {
    if favorites.contains(&entry.name) {
        format!("{FAVORITE_PREFIX}{}", entry.name)
    } else {
        entry.name.to_string()
    }
}

#[cfg(test)]
mod tests;
