//! Result Coordinator — one owner for the derived match state.
//!
//! Two independent producers feed the catalog view: the Search Matcher
//! (live query) and the Recommendation Scorer (quiz shortlist). `MatchState`
//! arbitrates between them so the presentation layer always renders one
//! consistent prioritized sequence. Holding the three fields in a single
//! struct keeps the invariants — at most one highlight, a capped priority
//! list, replacement-never-merge — enforceable in one place.

use tracing::debug;

use crate::catalog::{Catalog, CareerProfile};
use crate::config::MatchTuning;

/// Session-scoped derived state. Created empty, mutated only by user
/// events, never persisted.
#[derive(Debug, Clone, Default)]
pub struct MatchState {
    tuning: MatchTuning,
    query: String,
    /// Profile ids to surface first; set by a search pick or a quiz result,
    /// always replaced wholesale.
    priority_ids: Vec<String>,
    highlighted_id: Option<String>,
    /// Pending scroll/focus signal, consumed by the presentation layer
    /// after it has applied the new state.
    focus_request: Option<String>,
}

impl MatchState {
    pub fn new(tuning: MatchTuning) -> Self {
        Self {
            tuning,
            query: String::new(),
            priority_ids: Vec::new(),
            highlighted_id: None,
            focus_request: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn priority_ids(&self) -> &[String] {
        &self.priority_ids
    }

    pub fn highlighted_id(&self) -> Option<&str> {
        self.highlighted_id.as_deref()
    }

    /// Every keystroke in the search input lands here. Clears the highlight;
    /// an emptied query shrinks the priority list to its first
    /// `priority_carryover` ids instead of wiping it, so a prior
    /// recommendation partially survives. The check is on the raw string —
    /// a whitespace-only query does not trim the list.
    pub fn on_query_change(&mut self, new_query: &str) {
        self.query = new_query.to_string();
        self.set_highlight(None);
        if new_query.is_empty() {
            self.priority_ids.truncate(self.tuning.priority_carryover);
        }
    }

    /// A suggestion was picked: that one profile becomes the whole priority
    /// set and the highlight target.
    pub fn on_search_select(&mut self, profile_id: &str) {
        debug!(%profile_id, "Search selection");
        self.priority_ids = vec![profile_id.to_string()];
        self.set_highlight(Some(profile_id.to_string()));
    }

    /// The quiz finished with a ranked shortlist (possibly empty). The
    /// shortlist replaces the priority set, the top result is highlighted,
    /// and the query resets so the full grid is visible underneath.
    pub fn on_quiz_complete(&mut self, profile_ids: Vec<String>) {
        debug!(count = profile_ids.len(), "Quiz recommendations applied");
        let top = profile_ids.first().cloned();
        self.priority_ids = profile_ids;
        self.set_highlight(top);
        self.query.clear();
    }

    /// The filtered catalog view: Search-Matcher matches for the current
    /// query, stably partitioned so priority members come first. Within each
    /// block the matcher's (catalog) order is kept — priority membership
    /// groups, it does not re-rank; the highlight alone conveys top rank.
    pub fn derive_view<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CareerProfile> {
        let matches = crate::matching::search::matching_profiles(catalog, &self.query);
        if self.priority_ids.is_empty() {
            return matches;
        }

        let (mut prioritized, others): (Vec<_>, Vec<_>) = matches
            .into_iter()
            .partition(|p| self.priority_ids.iter().any(|id| *id == p.id));
        prioritized.extend(others);
        prioritized
    }

    /// "Showing X of Y" counts for the grid summary line.
    pub fn view_summary(&self, catalog: &Catalog) -> (usize, usize) {
        (self.derive_view(catalog).len(), catalog.profiles.len())
    }

    /// Consumes the pending scroll/focus signal. The presentation layer
    /// calls this after rendering the new state and then brings the element
    /// into view and focuses it, so the effect always observes the
    /// post-update tree.
    pub fn take_focus_request(&mut self) -> Option<String> {
        self.focus_request.take()
    }

    fn set_highlight(&mut self, id: Option<String>) {
        self.focus_request = id.clone();
        self.highlighted_id = id;
    }
}
