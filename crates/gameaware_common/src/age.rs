//! Age banding for question selection
//!
//! The backend serves a different question set per age band, addressed by
//! the band string (`/gaming/questions/{band}`). Classification is pure and
//! stable: the same age always lands in the same band, so a session's
//! question set is fixed once fetched.

use serde::{Deserialize, Serialize};

/// Youngest age accepted by the assessment.
pub const MIN_AGE: i64 = 15;

/// Oldest age accepted by the assessment.
pub const MAX_AGE: i64 = 90;

/// Discrete age band used to pick a question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "15-20")]
    Teen,
    #[serde(rename = "21-30")]
    YoungAdult,
    #[serde(rename = "31-50")]
    Adult,
    #[serde(rename = "51+")]
    Senior,
}

/// Validation failures for raw age input.
///
/// Messages are user-facing and surfaced inline; none of these ever reach
/// the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    #[error("Please enter your age before proceeding.")]
    Missing,
    #[error("Age cannot be negative.")]
    Negative,
    #[error("Age must be 15 or older to proceed.")]
    TooYoung,
    #[error("Age cannot be greater than 90.")]
    TooOld,
}

impl AgeBand {
    /// Classify a validated age into its band.
    ///
    /// Negative ages report as negative rather than merely "too young",
    /// so the two cases stay distinguishable in the UI.
    pub fn classify(age: i64) -> Result<Self, AgeError> {
        if age < 0 {
            return Err(AgeError::Negative);
        }
        if age < MIN_AGE {
            return Err(AgeError::TooYoung);
        }
        if age > MAX_AGE {
            return Err(AgeError::TooOld);
        }
        Ok(match age {
            15..=20 => AgeBand::Teen,
            21..=30 => AgeBand::YoungAdult,
            31..=50 => AgeBand::Adult,
            _ => AgeBand::Senior,
        })
    }

    /// Classify raw text as typed at the prompt. Empty or non-numeric
    /// input is reported as missing.
    pub fn parse_input(text: &str) -> Result<Self, AgeError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AgeError::Missing);
        }
        let age: i64 = trimmed.parse().map_err(|_| AgeError::Missing)?;
        Self::classify(age)
    }

    /// The band string used on the wire and in stored results.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Teen => "15-20",
            AgeBand::YoungAdult => "21-30",
            AgeBand::Adult => "31-50",
            AgeBand::Senior => "51+",
        }
    }
}

impl std::fmt::Display for AgeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
