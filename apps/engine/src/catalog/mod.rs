//! Static catalog of career profiles and quiz questions.
//!
//! Loaded once (from the bundled JSON or a caller-supplied file), validated,
//! then treated as immutable for the rest of the process. Load-time
//! validation is the only place the engine can fail; see `EngineError`.

pub mod models;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::EngineError;

pub use models::{CareerProfile, QuizOption, QuizQuestion};

/// Default catalog shipped with the crate, mirroring the product's static
/// data files.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub profiles: Vec<CareerProfile>,
    pub questions: Vec<QuizQuestion>,
}

impl Catalog {
    /// Parses and validates a catalog from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self, EngineError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        info!(
            profiles = catalog.profiles.len(),
            questions = catalog.questions.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The catalog bundled into the binary.
    pub fn bundled() -> Result<Self, EngineError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn profile(&self, id: &str) -> Option<&CareerProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn question(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Enforces the uniqueness invariants: profile ids unique across the
    /// catalog, question ids unique, option ids unique within a question.
    /// An empty catalog is valid.
    fn validate(&self) -> Result<(), EngineError> {
        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(EngineError::DuplicateProfileId(profile.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(EngineError::DuplicateQuestionId(question.id.clone()));
            }
            let mut options = HashSet::new();
            for option in &question.options {
                if !options.insert(option.id.as_str()) {
                    return Err(EngineError::DuplicateOptionId {
                        question_id: question.id.clone(),
                        option_id: option.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses_and_validates() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.profiles.is_empty());
        assert!(!catalog.questions.is_empty());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_json_str(r#"{"profiles": [], "questions": []}"#).unwrap();
        assert!(catalog.profiles.is_empty());
    }

    #[test]
    fn test_duplicate_profile_id_rejected() {
        let raw = r#"{
            "profiles": [
                {"id": "dup", "title": "A", "description": "", "salaryRange": "", "education": "", "skills": []},
                {"id": "dup", "title": "B", "description": "", "salaryRange": "", "education": "", "skills": []}
            ],
            "questions": []
        }"#;
        let err = Catalog::from_json_str(raw).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateProfileId(id) if id == "dup"));
    }

    #[test]
    fn test_duplicate_option_id_rejected_within_question() {
        let raw = r#"{
            "profiles": [],
            "questions": [{
                "id": "q1",
                "prompt": "?",
                "options": [
                    {"id": "a", "label": "A", "description": ""},
                    {"id": "a", "label": "B", "description": ""}
                ]
            }]
        }"#;
        let err = Catalog::from_json_str(raw).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateOptionId { .. }));
    }

    #[test]
    fn test_same_option_id_across_questions_is_fine() {
        let raw = r#"{
            "profiles": [],
            "questions": [
                {"id": "q1", "prompt": "?", "options": [{"id": "a", "label": "A", "description": ""}]},
                {"id": "q2", "prompt": "?", "options": [{"id": "a", "label": "A", "description": ""}]}
            ]
        }"#;
        assert!(Catalog::from_json_str(raw).is_ok());
    }

    #[test]
    fn test_profile_lookup_by_id() {
        let catalog = Catalog::bundled().unwrap();
        let first = &catalog.profiles[0];
        assert_eq!(catalog.profile(&first.id).unwrap().title, first.title);
        assert!(catalog.profile("no-such-id").is_none());
    }
}
