// The matching core: free-text search, quiz scoring, suggestion navigation.
// Pure functions over the catalog — no state lives here (the Result
// Coordinator owns the derived state).

pub mod scoring;
pub mod search;
pub mod suggestions;
