//! Assistant matcher
//!
//! Maps free-text user input to a canned knowledge-base answer. Routing is
//! an ordered keyword table evaluated top to bottom, first match wins,
//! case-insensitive substring matching. The matcher is deterministic and
//! stateless; the transcript kept by the UI is display-only.

use tracing::debug;

use crate::knowledge::{knowledge_for, specialist_knowledge};
use crate::level::AddictionLevel;
use crate::recommend::SpecialistProfile;

/// Topic the user's message routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Specialist(SpecialistTopic),
    Level(LevelTopic),
}

/// Sub-topics inside the specialist branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialistTopic {
    Experience,
    Approach,
    Session,
    Insurance,
    Telehealth,
    Contact,
    Finding,
    Intro,
}

/// Sub-topics answered from the level's knowledge entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTopic {
    Info,
    Symptoms,
    Tips,
    Risks,
    Activities,
    Greeting,
    Fallback,
}

/// Keywords that open the specialist branch.
const SPECIALIST_TRIGGERS: &[&str] = &["doctor", "specialist", "therapist"];

/// Ordered sub-rules when a specialist is bound to the conversation.
const BOUND_RULES: &[(&[&str], SpecialistTopic)] = &[
    (&["experience", "background"], SpecialistTopic::Experience),
    (&["approach", "method", "treatment"], SpecialistTopic::Approach),
    (&["session", "appointment", "visit"], SpecialistTopic::Session),
    (&["insurance", "cover", "payment"], SpecialistTopic::Insurance),
    (&["online", "virtual", "telehealth"], SpecialistTopic::Telehealth),
    (&["contact"], SpecialistTopic::Contact),
];

/// Ordered sub-rules when no specialist is bound.
const UNBOUND_RULES: &[(&[&str], SpecialistTopic)] = &[
    (&["find", "where"], SpecialistTopic::Finding),
    (&["approach", "method", "treatment"], SpecialistTopic::Approach),
    (&["insurance", "cover", "payment"], SpecialistTopic::Insurance),
    (&["online", "virtual", "telehealth"], SpecialistTopic::Telehealth),
];

/// Ordered keyword groups answered from the level's knowledge entry.
const LEVEL_RULES: &[(&[&str], LevelTopic)] = &[
    (&["what is", "explain", "tell me about"], LevelTopic::Info),
    (&["symptom", "sign"], LevelTopic::Symptoms),
    (&["tip", "help", "advice", "manage"], LevelTopic::Tips),
    (&["risk", "danger", "problem"], LevelTopic::Risks),
    (
        &["alternative", "activity", "instead", "hobby", "hobbies"],
        LevelTopic::Activities,
    ),
    (&["hello", "hi", "hey"], LevelTopic::Greeting),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn first_match<T: Copy>(haystack: &str, rules: &[(&[&str], T)]) -> Option<T> {
    rules
        .iter()
        .find(|(needles, _)| contains_any(haystack, needles))
        .map(|(_, topic)| *topic)
}

/// Route user input to a topic.
pub fn route(user_text: &str, specialist_bound: bool) -> Topic {
    let lower = user_text.to_lowercase();

    if contains_any(&lower, SPECIALIST_TRIGGERS) {
        let rules = if specialist_bound {
            BOUND_RULES
        } else {
            UNBOUND_RULES
        };
        let topic = first_match(&lower, rules).unwrap_or(SpecialistTopic::Intro);
        return Topic::Specialist(topic);
    }

    let topic = first_match(&lower, LEVEL_RULES).unwrap_or(LevelTopic::Fallback);
    Topic::Level(topic)
}

/// Opening message when the assistant comes up.
pub fn opening_message(level: AddictionLevel) -> String {
    format!(
        "Hello! I'm your Gaming Addiction Assistant. How can I help you learn more about {}?",
        level.conversational_label()
    )
}

/// Answer a user message for the given level and optionally bound
/// specialist. First-match-wins over the rule tables above.
pub fn respond(
    user_text: &str,
    level: AddictionLevel,
    specialist: Option<&SpecialistProfile>,
) -> String {
    let topic = route(user_text, specialist.is_some());
    debug!(?topic, %level, "assistant routed message");

    match topic {
        Topic::Specialist(sub) => match specialist {
            Some(profile) => bound_reply(sub, profile),
            None => unbound_reply(sub),
        },
        Topic::Level(sub) => level_reply(sub, level),
    }
}

fn bound_reply(topic: SpecialistTopic, profile: &SpecialistProfile) -> String {
    match topic {
        SpecialistTopic::Experience => profile.experience.clone().unwrap_or_else(|| {
            format!(
                "{} has extensive experience treating gaming and technology addiction across various age groups.",
                profile.name
            )
        }),
        SpecialistTopic::Approach => profile.approach.clone().unwrap_or_else(|| {
            format!(
                "{} typically uses a combination of cognitive-behavioral therapy, motivational interviewing, and family therapy when appropriate.",
                profile.name
            )
        }),
        SpecialistTopic::Session => profile.availability.clone().unwrap_or_else(|| {
            format!(
                "Initial consultations with {} usually last 60-90 minutes, with follow-up sessions of 45-60 minutes. Treatment length varies based on addiction severity.",
                profile.name
            )
        }),
        SpecialistTopic::Insurance => profile.insurance.clone().unwrap_or_else(|| {
            format!(
                "Many insurance plans cover addiction treatment with specialists like {}. Contact your provider to verify coverage for behavioral addiction services.",
                profile.name
            )
        }),
        SpecialistTopic::Telehealth => format!(
            "Yes, {} offers virtual appointments for those who cannot attend in-person sessions.",
            profile.name
        ),
        SpecialistTopic::Contact => format!(
            "You can contact {} at {} or via email at {}.",
            profile.name, profile.phone, profile.email
        ),
        // Finding only exists on the unbound side; a bound conversation
        // answers it with the intro blurb.
        SpecialistTopic::Finding | SpecialistTopic::Intro => format!(
            "{} specializes in gaming addiction treatment and can provide personalized care for your situation. Would you like specific information about their approach, session format, or insurance coverage?",
            profile.name
        ),
    }
}

fn unbound_reply(topic: SpecialistTopic) -> String {
    let kb = specialist_knowledge();
    match topic {
        SpecialistTopic::Finding => kb.finding.to_string(),
        SpecialistTopic::Approach => kb.approach.to_string(),
        SpecialistTopic::Insurance => kb.insurance.to_string(),
        SpecialistTopic::Telehealth => kb.telehealth.to_string(),
        _ => kb.info.to_string(),
    }
}

fn level_reply(topic: LevelTopic, level: AddictionLevel) -> String {
    let entry = knowledge_for(level);
    let label = level.conversational_label();
    match topic {
        LevelTopic::Info => entry.info.to_string(),
        LevelTopic::Symptoms => entry.symptoms.to_string(),
        LevelTopic::Tips => entry.tips.to_string(),
        LevelTopic::Risks => entry.risks.to_string(),
        LevelTopic::Activities => entry.activities.to_string(),
        LevelTopic::Greeting => format!(
            "Hello! I'm here to help with information about {}. Feel free to ask about symptoms, management tips, risks, or alternative activities.",
            label
        ),
        LevelTopic::Fallback => format!(
            "I'm not sure I understand. You can ask about {}, symptoms, management tips, risks, alternative activities, or information about finding professional help.",
            label
        ),
    }
}
