use serde::{Deserialize, Serialize};

/// One career in the catalog. Immutable once loaded.
///
/// `tags` is the only field the Recommendation Scorer looks at; everything
/// else is display text that also participates in free-text search. A
/// profile with no tags is unreachable by the quiz and only surfaces via
/// search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerProfile {
    /// Unique, stable join key used everywhere a profile is referenced.
    pub id: String,
    pub title: String,
    pub description: String,
    pub salary_range: String,
    pub education: String,
    /// Ordered for display; space-joined for search.
    pub skills: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One quiz step. Questions are answered in catalog order, one option each.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    #[serde(default)]
    pub helper: Option<String>,
    pub options: Vec<QuizOption>,
}

/// A selectable answer. Its tags feed the tag-weight accumulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    /// Unique within its question.
    pub id: String,
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QuizQuestion {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}
