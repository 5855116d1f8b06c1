//! Recommendation lookup
//!
//! Static advice table keyed by addiction level. Unknown (or anything the
//! table does not carry) resolves to a generic fallback entry instead of
//! failing; lookups never mutate anything.

use serde::{Deserialize, Serialize};

use crate::level::AddictionLevel;

/// Specialist contact and profile details.
///
/// One shape for every specialist: the contact card fields are always
/// present, extended profile fields are optional and render as
/// "contact for details" when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialistProfile {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,
}

/// Placeholder for extended profile fields a specialist has not published.
pub const CONTACT_FOR_DETAILS: &str = "contact for details";

impl SpecialistProfile {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            specialty: None,
            experience: None,
            approach: None,
            availability: None,
            languages: None,
            location: None,
            insurance: None,
        }
    }

    /// An extended field, or the placeholder when unpublished.
    pub fn field_or_placeholder<'a>(&'a self, field: &'a Option<String>) -> &'a str {
        field.as_deref().unwrap_or(CONTACT_FOR_DETAILS)
    }
}

/// One row of the recommendation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub advice: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist: Option<SpecialistProfile>,
}

/// Look up the recommendation for a level. Pure read; Unknown yields the
/// generic fallback entry.
pub fn recommendation_for(level: AddictionLevel) -> RecommendationEntry {
    match level {
        AddictionLevel::Low => RecommendationEntry {
            advice: "Maintain a healthy balance.".to_string(),
            details: "You have a balanced approach to gaming. Keep enjoying, but balance it with work, social life, and physical activities.".to_string(),
            video_url: Some("https://youtu.be/gZOcLix4PGc?si=dmSW7hhv2PxfGQpk".to_string()),
            specialist: Some(SpecialistProfile::new(
                "Dr. John Doe",
                "(123) 456-7890",
                "john.doe@example.com",
            )),
        },
        AddictionLevel::Moderate => RecommendationEntry {
            advice: "Consider setting boundaries.".to_string(),
            details: "Gaming may be taking up more of your time than it should. Set clear time limits and prioritize other activities.".to_string(),
            video_url: Some("https://www.youtube.com/embed/example2".to_string()),
            specialist: Some(SpecialistProfile::new(
                "Dr. Jane Smith",
                "(987) 654-3210",
                "jane.smith@example.com",
            )),
        },
        AddictionLevel::High => RecommendationEntry {
            advice: "Reduce screen time and seek balance.".to_string(),
            details: "Your gaming is significantly impacting other parts of your life. Start reducing screen time and explore alternative hobbies.".to_string(),
            video_url: Some("https://youtu.be/VzL2A5l-eVU?si=aR2Z3Gs5sBLSGG63".to_string()),
            specialist: Some(SpecialistProfile::new(
                "Dr. Emily Johnson",
                "(555) 123-4567",
                "emily.johnson@example.com",
            )),
        },
        AddictionLevel::Severe => RecommendationEntry {
            advice: "Seek professional help immediately.".to_string(),
            details: "Your gaming habits are seriously impacting your daily life. Please seek professional help to regain balance.".to_string(),
            video_url: Some("https://www.youtube.com/embed/example4".to_string()),
            specialist: Some(SpecialistProfile::new(
                "Dr. Michael Brown",
                "(444) 987-6543",
                "michael.brown@example.com",
            )),
        },
        AddictionLevel::Unknown => fallback_entry(),
    }
}

/// Generic entry used when no level-specific recommendation exists.
pub fn fallback_entry() -> RecommendationEntry {
    RecommendationEntry {
        advice: "No specific recommendation available.".to_string(),
        details: "We couldn't determine a specific recommendation. Please consult a professional.".to_string(),
        video_url: None,
        specialist: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_level_has_a_specialist_and_video() {
        for level in [
            AddictionLevel::Low,
            AddictionLevel::Moderate,
            AddictionLevel::High,
            AddictionLevel::Severe,
        ] {
            let entry = recommendation_for(level);
            assert!(entry.specialist.is_some(), "{:?}", level);
            assert!(entry.video_url.is_some(), "{:?}", level);
            assert!(!entry.advice.is_empty());
        }
    }

    #[test]
    fn test_unknown_level_gets_fallback_not_error() {
        let entry = recommendation_for(AddictionLevel::Unknown);
        assert_eq!(entry, fallback_entry());
        assert!(entry.specialist.is_none());
        assert!(entry.video_url.is_none());
    }

    #[test]
    fn test_unrecognized_label_routes_through_unknown() {
        let level = AddictionLevel::from_label("Mystery Addiction");
        assert_eq!(recommendation_for(level), fallback_entry());
    }

    #[test]
    fn test_extended_fields_default_to_placeholder() {
        let profile = SpecialistProfile::new("Dr. A", "1", "a@example.com");
        assert_eq!(
            profile.field_or_placeholder(&profile.specialty),
            CONTACT_FOR_DETAILS
        );
        let with_specialty = SpecialistProfile {
            specialty: Some("behavioral addiction".to_string()),
            ..profile
        };
        assert_eq!(
            with_specialty.field_or_placeholder(&with_specialty.specialty),
            "behavioral addiction"
        );
    }
}
