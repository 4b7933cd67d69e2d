use serde::{Deserialize, Serialize};

/// Numeric knobs of the matching engine.
///
/// Every limit the engine applies lives here so the presentation layer and
/// the tests agree on one source of truth. The defaults are the product
/// numbers; nothing reads them from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTuning {
    /// Weight added to a tag for each selected quiz option carrying it.
    pub option_tag_weight: u32,
    /// Maximum number of recommendations surfaced after the quiz.
    pub shortlist_limit: usize,
    /// How many priority ids survive the query being cleared.
    pub priority_carryover: usize,
    /// Suggestion rows shown while the query is empty.
    pub idle_suggestion_limit: usize,
    /// Suggestion rows shown while the query is non-empty.
    pub active_suggestion_limit: usize,
}

impl Default for MatchTuning {
    fn default() -> Self {
        Self {
            option_tag_weight: 2,
            shortlist_limit: 3,
            priority_carryover: 3,
            idle_suggestion_limit: 5,
            active_suggestion_limit: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_product_numbers() {
        let t = MatchTuning::default();
        assert_eq!(t.option_tag_weight, 2);
        assert_eq!(t.shortlist_limit, 3);
        assert_eq!(t.priority_carryover, 3);
        assert_eq!(t.idle_suggestion_limit, 5);
        assert_eq!(t.active_suggestion_limit, 7);
    }
}
