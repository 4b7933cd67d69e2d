//! Compass Engine — the matching core behind the career explorer.
//!
//! Everything with real logic lives here: the free-text Search Matcher, the
//! tag-scoring Recommendation Scorer, and the Result Coordinator that
//! reconciles both into one prioritized view. The presentation layer (grid,
//! search bar, quiz form) is a collaborator that feeds user events in and
//! renders the sequences this crate hands back — it never computes.
//!
//! All operations are synchronous, deterministic, and re-derivable from
//! current inputs; nothing here blocks or performs I/O except catalog
//! loading.

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod errors;
pub mod matching;
pub mod quiz;
