//! Addiction scoring and leveling
//!
//! Banding (fixed for the whole repository, shared by every consumer):
//! - < 30%: Low
//! - 30% - 49.99%: Moderate
//! - 50% - 69.99%: High
//! - >= 70%: Severe
//!
//! Out-of-range or non-finite percentages map to Unknown. Display always
//! shows two-decimal percentages, never raw floats.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Thresholds
// ============================================================================

/// Maximum achievable total score across one question set.
pub const MAX_SCORE: u32 = 60;

/// Floor of the Moderate band.
pub const MODERATE_THRESHOLD: f64 = 30.0;

/// Floor of the High band.
pub const HIGH_THRESHOLD: f64 = 50.0;

/// Floor of the Severe band.
pub const SEVERE_THRESHOLD: f64 = 70.0;

// ============================================================================
// Levels
// ============================================================================

/// Four-tier addiction level, derived from a percentage and never stored
/// independently of the score that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddictionLevel {
    #[serde(rename = "Low Addiction")]
    Low,
    #[serde(rename = "Moderate Addiction")]
    Moderate,
    #[serde(rename = "High Addiction")]
    High,
    #[serde(rename = "Severe Addiction")]
    Severe,
    #[serde(rename = "Unknown")]
    Unknown,
}

// The collaborator occasionally reports labels this client does not know;
// those must degrade to Unknown instead of failing the whole response.
impl<'de> Deserialize<'de> for AddictionLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(AddictionLevel::from_label(&label))
    }
}

/// Percentage of the maximum score, rounded to two decimals.
pub fn percentage_for(total_score: u32) -> f64 {
    let raw = total_score as f64 / MAX_SCORE as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

impl AddictionLevel {
    /// The single shared percentage banding. Every consumer (result view,
    /// history, recommendations) must derive levels through this function.
    pub fn for_percentage(percentage: f64) -> Self {
        if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
            return AddictionLevel::Unknown;
        }
        if percentage >= SEVERE_THRESHOLD {
            AddictionLevel::Severe
        } else if percentage >= HIGH_THRESHOLD {
            AddictionLevel::High
        } else if percentage >= MODERATE_THRESHOLD {
            AddictionLevel::Moderate
        } else {
            AddictionLevel::Low
        }
    }

    /// Derive a level straight from a total score.
    pub fn for_total_score(total_score: u32) -> Self {
        Self::for_percentage(percentage_for(total_score))
    }

    /// Wire/display label, e.g. `"Low Addiction"`.
    pub fn label(&self) -> &'static str {
        match self {
            AddictionLevel::Low => "Low Addiction",
            AddictionLevel::Moderate => "Moderate Addiction",
            AddictionLevel::High => "High Addiction",
            AddictionLevel::Severe => "Severe Addiction",
            AddictionLevel::Unknown => "Unknown",
        }
    }

    /// Parse a collaborator-reported label, treating anything unrecognized
    /// as Unknown rather than failing.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Low Addiction" => AddictionLevel::Low,
            "Moderate Addiction" => AddictionLevel::Moderate,
            "High Addiction" => AddictionLevel::High,
            "Severe Addiction" => AddictionLevel::Severe,
            _ => AddictionLevel::Unknown,
        }
    }

    /// Result-screen description for this level.
    pub fn description(&self) -> &'static str {
        match self {
            AddictionLevel::Low => "You have a balanced approach to gaming. Keep it up!",
            AddictionLevel::Moderate => {
                "You might be gaming a bit too much. Try to take regular breaks."
            }
            AddictionLevel::High => {
                "Gaming is affecting other areas of your life. It's time to cut down."
            }
            AddictionLevel::Severe => {
                "Gaming is heavily impacting your daily life. Seeking help is recommended."
            }
            AddictionLevel::Unknown => {
                "We couldn't determine a specific recommendation. Please consult an expert."
            }
        }
    }

    /// Label used in assistant replies; Unknown falls back to the generic
    /// topic name instead of the word "Unknown".
    pub fn conversational_label(&self) -> &'static str {
        match self {
            AddictionLevel::Unknown => "gaming addiction",
            other => other.label(),
        }
    }
}

impl std::fmt::Display for AddictionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        // 5 / 60 * 100 = 8.3333...
        assert_eq!(percentage_for(5), 8.33);
        assert_eq!(percentage_for(0), 0.0);
        assert_eq!(percentage_for(60), 100.0);
        assert_eq!(percentage_for(20), 33.33);
    }

    #[test]
    fn test_banding_boundaries() {
        assert_eq!(AddictionLevel::for_percentage(0.0), AddictionLevel::Low);
        assert_eq!(AddictionLevel::for_percentage(29.99), AddictionLevel::Low);
        assert_eq!(AddictionLevel::for_percentage(30.0), AddictionLevel::Moderate);
        assert_eq!(AddictionLevel::for_percentage(49.99), AddictionLevel::Moderate);
        assert_eq!(AddictionLevel::for_percentage(50.0), AddictionLevel::High);
        assert_eq!(AddictionLevel::for_percentage(69.99), AddictionLevel::High);
        assert_eq!(AddictionLevel::for_percentage(70.0), AddictionLevel::Severe);
        assert_eq!(AddictionLevel::for_percentage(100.0), AddictionLevel::Severe);
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(AddictionLevel::for_percentage(-0.01), AddictionLevel::Unknown);
        assert_eq!(AddictionLevel::for_percentage(100.01), AddictionLevel::Unknown);
        assert_eq!(AddictionLevel::for_percentage(f64::NAN), AddictionLevel::Unknown);
        assert_eq!(
            AddictionLevel::for_percentage(f64::INFINITY),
            AddictionLevel::Unknown
        );
    }

    #[test]
    fn test_banding_is_monotonic_and_idempotent() {
        let mut last = AddictionLevel::Low;
        let rank = |l: AddictionLevel| match l {
            AddictionLevel::Low => 0,
            AddictionLevel::Moderate => 1,
            AddictionLevel::High => 2,
            AddictionLevel::Severe => 3,
            AddictionLevel::Unknown => unreachable!("in-range input"),
        };
        for total in 0..=MAX_SCORE {
            let level = AddictionLevel::for_total_score(total);
            assert!(rank(level) >= rank(last), "total {}", total);
            assert_eq!(level, AddictionLevel::for_total_score(total));
            last = level;
        }
    }

    #[test]
    fn test_label_round_trip() {
        for level in [
            AddictionLevel::Low,
            AddictionLevel::Moderate,
            AddictionLevel::High,
            AddictionLevel::Severe,
        ] {
            assert_eq!(AddictionLevel::from_label(level.label()), level);
        }
        assert_eq!(
            AddictionLevel::from_label("Catastrophic Addiction"),
            AddictionLevel::Unknown
        );
    }

    #[test]
    fn test_serde_uses_backend_labels() {
        let json = serde_json::to_string(&AddictionLevel::High).unwrap();
        assert_eq!(json, "\"High Addiction\"");
        let parsed: AddictionLevel = serde_json::from_str("\"Severe Addiction\"").unwrap();
        assert_eq!(parsed, AddictionLevel::Severe);
        // Unrecognized labels degrade to Unknown instead of failing.
        let odd: AddictionLevel = serde_json::from_str("\"Mild Addiction\"").unwrap();
        assert_eq!(odd, AddictionLevel::Unknown);
    }

    #[test]
    fn test_conversational_label_default() {
        assert_eq!(AddictionLevel::Low.conversational_label(), "Low Addiction");
        assert_eq!(
            AddictionLevel::Unknown.conversational_label(),
            "gaming addiction"
        );
    }
}
