use thiserror::Error;

/// Catalog loading and validation failures.
///
/// The matching core itself is infallible — every degenerate input (empty
/// catalog, empty query, incomplete answers, zero overlap) maps to a defined
/// empty result, not an error. Only getting a catalog into memory can fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate profile id in catalog: {0}")]
    DuplicateProfileId(String),

    #[error("Duplicate question id in catalog: {0}")]
    DuplicateQuestionId(String),

    #[error("Duplicate option id '{option_id}' in question '{question_id}'")]
    DuplicateOptionId {
        question_id: String,
        option_id: String,
    },
}
