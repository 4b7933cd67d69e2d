//! Suggestion list for the search affordance.
//!
//! Reuses the Search Matcher for inclusion, then bounds the list (5 rows on
//! an empty query, 7 otherwise) and tracks the keyboard-driven active row.
//! The query itself lives in `MatchState`; this module only owns the
//! ephemeral browse position, mirroring how the search box owns its
//! focus/highlight locally while the page owns the query.

use crate::catalog::{Catalog, CareerProfile};
use crate::config::MatchTuning;
use crate::matching::search::matching_profiles;

/// Keyboard navigation over the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Move the active row down, wrapping past the end.
    Next,
    /// Move the active row up, wrapping past the start.
    Previous,
    /// Confirm the active row.
    Select,
    /// Close the list without selecting.
    Dismiss,
}

/// A confirmed suggestion. The presentation layer writes `title` back into
/// the search input before applying the selection, matching the original
/// pick-to-fill behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub profile_id: String,
    pub title: String,
}

/// Active-row + open/closed state for the suggestion dropdown.
#[derive(Debug, Clone, Default)]
pub struct SuggestionCursor {
    active_index: usize,
    open: bool,
}

/// Computes the bounded suggestion rows for the current query: the first 5
/// catalog entries while the query is empty, up to 7 matches otherwise.
pub fn suggestions<'a>(
    catalog: &'a Catalog,
    query: &str,
    tuning: &MatchTuning,
) -> Vec<&'a CareerProfile> {
    let limit = if query.trim().is_empty() {
        tuning.idle_suggestion_limit
    } else {
        tuning.active_suggestion_limit
    };
    let mut rows = matching_profiles(catalog, query);
    rows.truncate(limit);
    rows
}

impl SuggestionCursor {
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opening (focus) keeps the previous active row; typing resets it.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Called on every keystroke in the search input.
    pub fn on_query_edit(&mut self) {
        self.active_index = 0;
        self.open = true;
    }

    /// Applies a navigation event against the currently visible rows.
    /// Returns the confirmed selection on `Select`; all events are inert
    /// while the list is empty.
    pub fn on_nav(&mut self, event: NavEvent, rows: &[&CareerProfile]) -> Option<Selection> {
        if rows.is_empty() {
            return None;
        }
        // A stale index can outlive a shrinking row set between renders.
        self.active_index = self.active_index.min(rows.len() - 1);

        match event {
            NavEvent::Next => {
                self.active_index = (self.active_index + 1) % rows.len();
                None
            }
            NavEvent::Previous => {
                self.active_index = (self.active_index + rows.len() - 1) % rows.len();
                None
            }
            NavEvent::Select => {
                let chosen = rows[self.active_index];
                self.open = false;
                Some(Selection {
                    profile_id: chosen.id.clone(),
                    title: chosen.title.clone(),
                })
            }
            NavEvent::Dismiss => {
                self.open = false;
                None
            }
        }
    }
}
