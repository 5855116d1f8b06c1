//! Survey session state
//!
//! Sequential single-question navigation over a question set fetched once
//! per session. The response map grows monotonically as the user advances;
//! the submit round-trip is one-shot and the session survives a failed
//! submit intact so the user can retry.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::age::AgeBand;
use crate::protocol::{flexible_id, ResponseEntry, SubmitRequest};

/// One selectable answer, owned by exactly one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub text: String,
    pub score: u32,
}

/// One survey question as served by the backend. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub question: String,
    pub answers: Vec<AnswerOption>,
}

/// Question id -> chosen score, unique keys.
pub type ResponseMap = BTreeMap<String, u32>;

/// Session failures. All are local and recoverable; none reach the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyError {
    #[error("Questions are still loading.")]
    QuestionsNotLoaded,
    #[error("Please select an option before proceeding.")]
    AnswerRequired,
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),
    #[error("A submission is already in progress.")]
    SubmitInFlight,
}

/// In-progress assessment for one user.
#[derive(Debug, Clone)]
pub struct SurveySession {
    age_band: AgeBand,
    questions: Vec<Question>,
    current_index: usize,
    responses: ResponseMap,
    warning: Option<SurveyError>,
    submit_in_flight: bool,
}

impl SurveySession {
    /// Start a session over an already-fetched question set. An empty set
    /// leaves the session in the loading state: every navigation operation
    /// is held behind [`SurveyError::QuestionsNotLoaded`].
    pub fn new(age_band: AgeBand, questions: Vec<Question>) -> Self {
        debug!(band = %age_band, count = questions.len(), "survey session started");
        Self {
            age_band,
            questions,
            current_index: 0,
            responses: ResponseMap::new(),
            warning: None,
            submit_in_flight: false,
        }
    }

    pub fn age_band(&self) -> AgeBand {
        self.age_band
    }

    /// True until a non-empty question set is present.
    pub fn is_loading(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question at the cursor, None once the cursor is past the end.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Recorded score for the question at the cursor.
    pub fn current_response(&self) -> Option<u32> {
        self.current_question()
            .and_then(|q| self.responses.get(&q.id).copied())
    }

    pub fn responses(&self) -> &ResponseMap {
        &self.responses
    }

    /// Pending validation warning, set by a rejected advance and cleared by
    /// the next answer selection.
    pub fn warning(&self) -> Option<&SurveyError> {
        self.warning.as_ref()
    }

    /// All questions answered and the cursor walked past the last one.
    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty() && self.current_index == self.questions.len()
    }

    /// On the last question (where advance is replaced by submit).
    pub fn is_on_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index == self.questions.len() - 1
    }

    fn guard_mutation(&self) -> Result<(), SurveyError> {
        if self.questions.is_empty() {
            return Err(SurveyError::QuestionsNotLoaded);
        }
        if self.submit_in_flight {
            return Err(SurveyError::SubmitInFlight);
        }
        Ok(())
    }

    /// Record (or overwrite) the chosen score for a question. Idempotent;
    /// clears the pending warning.
    pub fn select_answer(&mut self, question_id: &str, score: u32) -> Result<(), SurveyError> {
        self.guard_mutation()?;
        if !self.questions.iter().any(|q| q.id == question_id) {
            return Err(SurveyError::UnknownQuestion(question_id.to_string()));
        }
        self.responses.insert(question_id.to_string(), score);
        self.warning = None;
        Ok(())
    }

    /// Move to the next question. Fails while the current question is
    /// unanswered; no-op once past the last question.
    pub fn advance(&mut self) -> Result<(), SurveyError> {
        self.guard_mutation()?;
        let Some(current) = self.questions.get(self.current_index) else {
            // Already past the end; completion is the caller's check.
            return Ok(());
        };
        if !self.responses.contains_key(&current.id) {
            self.warning = Some(SurveyError::AnswerRequired);
            return Err(SurveyError::AnswerRequired);
        }
        self.current_index += 1;
        debug!(index = self.current_index, "advanced");
        Ok(())
    }

    /// Move back one question, flooring at the first.
    pub fn retreat(&mut self) -> Result<(), SurveyError> {
        self.guard_mutation()?;
        self.current_index = self.current_index.saturating_sub(1);
        Ok(())
    }

    /// Sum of every recorded score across the full question set.
    pub fn total_score(&self) -> u32 {
        self.responses.values().sum()
    }

    /// Validate that the session is submittable and produce the submit
    /// payload, arming the one-shot in-flight guard. While the guard is
    /// armed every mutating operation fails with
    /// [`SurveyError::SubmitInFlight`].
    pub fn begin_submit(&mut self, user_id: Option<&str>) -> Result<SubmitRequest, SurveyError> {
        self.guard_mutation()?;
        let last = self
            .questions
            .last()
            .ok_or(SurveyError::QuestionsNotLoaded)?;
        if !self.responses.contains_key(&last.id) {
            self.warning = Some(SurveyError::AnswerRequired);
            return Err(SurveyError::AnswerRequired);
        }

        self.submit_in_flight = true;
        // Keep wire order aligned with question order, not map order.
        let responses = self
            .questions
            .iter()
            .filter_map(|q| {
                self.responses.get(&q.id).map(|score| ResponseEntry {
                    question_id: q.id.clone(),
                    score: *score,
                })
            })
            .collect();
        Ok(SubmitRequest {
            age_group: self.age_band,
            responses,
            total_score: self.total_score(),
            date: Utc::now().to_rfc3339(),
            user_id: user_id.map(str::to_string),
        })
    }

    /// Resolve a successful submit; the session is spent afterwards.
    pub fn complete_submit(&mut self) {
        self.submit_in_flight = false;
    }

    /// Resolve a failed submit. Responses and position survive so the user
    /// can retry.
    pub fn abort_submit(&mut self) {
        self.submit_in_flight = false;
    }

    pub fn submit_in_flight(&self) -> bool {
        self.submit_in_flight
    }
}
