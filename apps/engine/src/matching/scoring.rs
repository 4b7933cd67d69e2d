//! Recommendation Scorer — ranks careers against completed quiz answers.
//!
//! Pure tag arithmetic, fully deterministic: identical inputs always yield
//! identical output sequences, tie order included.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, CareerProfile};
use crate::config::MatchTuning;
use crate::quiz::AnswerMap;

/// A recommended career with the score that ranked it. Scores are surfaced
/// so callers can explain a shortlist, not just render it.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub profile: &'a CareerProfile,
    pub score: u32,
}

/// Scores the catalog against a completed answer set and returns the
/// shortlist, best first, at most `tuning.shortlist_limit` long.
///
/// Algorithm:
/// 1. Incomplete answers (answered ids ≠ the full question id set) → empty
///    shortlist. Callers distinguish this from a genuine no-overlap result
///    by checking completeness before concluding "no match".
/// 2. Each selected option adds `tuning.option_tag_weight` to every tag it
///    carries; weights accumulate across options sharing a tag.
/// 3. A profile's score is the sum of accumulated weights over its own tags.
/// 4. Zero-score profiles are discarded; the rest are sorted by descending
///    score with a stable sort, so equal scores keep catalog order.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    answers: &AnswerMap,
    tuning: &MatchTuning,
) -> Vec<Recommendation<'a>> {
    if !is_complete(catalog, answers) {
        return Vec::new();
    }

    let weights = tag_weights(catalog, answers, tuning);
    debug!(tags = weights.len(), "Tag weights accumulated");

    let mut ranked: Vec<Recommendation<'a>> = catalog
        .profiles
        .iter()
        .map(|profile| Recommendation {
            profile,
            score: profile_score(profile, &weights),
        })
        .filter(|r| r.score > 0)
        .collect();

    // Vec::sort_by is stable: equal scores retain catalog order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(tuning.shortlist_limit);
    ranked
}

/// True when every question in the catalog has exactly one selected option.
pub fn is_complete(catalog: &Catalog, answers: &AnswerMap) -> bool {
    answers.len() == catalog.questions.len()
        && catalog.questions.iter().all(|q| answers.contains_key(&q.id))
}

/// Accumulates tag weights from the selected options, walking questions in
/// catalog order. Answers pointing at unknown option ids contribute nothing
/// (a caller contract violation, not a runtime concern).
fn tag_weights(catalog: &Catalog, answers: &AnswerMap, tuning: &MatchTuning) -> HashMap<String, u32> {
    let mut weights = HashMap::new();
    for question in &catalog.questions {
        let Some(option_id) = answers.get(&question.id) else {
            continue;
        };
        let Some(option) = question.option(option_id) else {
            continue;
        };
        for tag in &option.tags {
            *weights.entry(tag.clone()).or_insert(0) += tuning.option_tag_weight;
        }
    }
    weights
}

fn profile_score(profile: &CareerProfile, weights: &HashMap<String, u32>) -> u32 {
    profile
        .tags
        .iter()
        .map(|tag| weights.get(tag).copied().unwrap_or(0))
        .sum()
}
