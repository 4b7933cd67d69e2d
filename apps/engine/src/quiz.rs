//! Quiz stepper — one question at a time, one selected option each.
//!
//! Owns answer collection and the completeness gate: scoring is only
//! invoked once every question has an answer, so an incomplete quiz can
//! never be mistaken for a zero-overlap result.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::{Catalog, QuizQuestion};
use crate::config::MatchTuning;
use crate::matching::scoring::{self, Recommendation};

/// Question id → selected option id. Selecting again overwrites, so there is
/// at most one entry per question.
pub type AnswerMap = BTreeMap<String, String>;

/// Mutable quiz session state. Created at step zero with no answers;
/// discarded with the session.
#[derive(Debug, Clone, Default)]
pub struct QuizProgress {
    current_step: usize,
    answers: AnswerMap,
    show_results: bool,
}

impl QuizProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn showing_results(&self) -> bool {
        self.show_results
    }

    pub fn current_question<'a>(&self, catalog: &'a Catalog) -> Option<&'a QuizQuestion> {
        catalog.questions.get(self.current_step)
    }

    /// The selected option id for the question at the current step, if any.
    pub fn current_selection(&self, catalog: &Catalog) -> Option<&str> {
        let question = self.current_question(catalog)?;
        self.answers.get(&question.id).map(String::as_str)
    }

    /// Records (or overwrites) the answer for a question.
    pub fn select_option(&mut self, question_id: &str, option_id: &str) {
        debug!(%question_id, %option_id, "Quiz option selected");
        self.answers
            .insert(question_id.to_string(), option_id.to_string());
    }

    /// True once every catalog question has exactly one answer.
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        scoring::is_complete(catalog, &self.answers)
    }

    /// Whether the "next" action is available: the current question must be
    /// answered first. This is the presentation gate of the results action.
    pub fn can_advance(&self, catalog: &Catalog) -> bool {
        self.current_selection(catalog).is_some()
    }

    /// Moves to the next question, or flips to the results view when already
    /// on the last one. Refuses to move while the current question is
    /// unanswered.
    pub fn advance(&mut self, catalog: &Catalog) {
        if !self.can_advance(catalog) {
            return;
        }
        if self.current_step + 1 >= catalog.questions.len() {
            self.show_results = true;
        } else {
            self.current_step += 1;
        }
    }

    /// Steps back one question, clamped at the first.
    pub fn back(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
    }

    /// Back to step zero with no answers. Deliberately leaves `MatchState`
    /// alone: the grid keeps its prior prioritization until the next search
    /// or quiz completion event.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Progress through the quiz as a whole percentage, counting the current
    /// step as not yet done.
    pub fn progress_percent(&self, catalog: &Catalog) -> u32 {
        let total = catalog.questions.len();
        if total == 0 {
            return 0;
        }
        ((self.current_step as f64 / total as f64) * 100.0).round() as u32
    }

    /// Scores the catalog against the collected answers. Empty until the
    /// quiz is complete, then at most `tuning.shortlist_limit` entries.
    pub fn recommendations<'a>(
        &self,
        catalog: &'a Catalog,
        tuning: &MatchTuning,
    ) -> Vec<Recommendation<'a>> {
        scoring::recommend(catalog, &self.answers, tuning)
    }
}
