//! Assistant knowledge base
//!
//! Read-only reference text keyed by addiction level, plus one
//! level-agnostic block about finding professional help. The assistant
//! matcher picks blocks out of these entries; nothing here has behavior.

use crate::level::AddictionLevel;

/// Per-level knowledge blocks.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeEntry {
    pub info: &'static str,
    pub symptoms: &'static str,
    pub tips: &'static str,
    pub risks: &'static str,
    pub activities: &'static str,
}

/// Level-agnostic knowledge about specialists, used when no specialist is
/// bound to the conversation.
#[derive(Debug, Clone, Copy)]
pub struct SpecialistKnowledge {
    pub info: &'static str,
    pub finding: &'static str,
    pub approach: &'static str,
    pub insurance: &'static str,
    pub telehealth: &'static str,
}

const LOW: KnowledgeEntry = KnowledgeEntry {
    info: "Low gaming addiction refers to a healthy relationship with gaming. At this level, gaming is a hobby that doesn't interfere with daily responsibilities, social interactions, or physical health.",
    symptoms: "No significant symptoms. You likely play games occasionally for enjoyment while maintaining a balanced lifestyle.",
    tips: "Continue maintaining balance. Set reasonable time limits, take breaks, and keep gaming as just one of many activities you enjoy.",
    risks: "Even at low levels, be mindful not to gradually increase gaming time, especially during stressful periods.",
    activities: "Exercise, reading, social gatherings, hobbies like cooking or gardening, and outdoor activities can help maintain your healthy balance.",
};

const MODERATE: KnowledgeEntry = KnowledgeEntry {
    info: "Moderate gaming addiction suggests gaming is becoming a significant part of your life. While not severely impacting responsibilities, you may be spending more time gaming than intended.",
    symptoms: "Occasionally losing track of time while gaming, mild irritability when unable to play, thinking about games when doing other activities.",
    tips: "Set strict time limits using timers. Schedule gaming sessions after completing important tasks. Have at least 2-3 game-free days per week.",
    risks: "Without boundaries, moderate addiction can progress to more severe levels, potentially affecting work/school performance and relationships.",
    activities: "Try new hobbies that provide similar satisfaction as gaming, like sports, puzzle-solving, creative arts, or joining clubs related to your interests.",
};

const HIGH: KnowledgeEntry = KnowledgeEntry {
    info: "High gaming addiction indicates gaming has become a dominant activity in your life, affecting your daily functioning, relationships, and possibly health.",
    symptoms: "Persistent thoughts about gaming, defensiveness about gaming habits, neglecting responsibilities, declining social invitations to play games, and disrupted sleep patterns.",
    tips: "Consider a gaming detox for 2-4 weeks. Delete games from easily accessible devices. Ask friends or family to help monitor your gaming time. Create a strict schedule.",
    risks: "High addiction levels can lead to academic or professional failure, relationship breakdown, physical health issues from sedentary behavior, and mental health challenges.",
    activities: "Physical exercise is crucial - try team sports, hiking, or cycling. Reconnect with friends in person. Consider mindfulness practices like meditation or yoga.",
};

const SEVERE: KnowledgeEntry = KnowledgeEntry {
    info: "Severe gaming addiction is a serious condition where gaming has taken control of your life, significantly harming your well-being, relationships, and daily functioning.",
    symptoms: "Extreme irritability or anxiety when unable to play, complete neglect of personal hygiene and basic needs, social isolation, failed attempts to cut back, gaming despite negative consequences.",
    tips: "Professional intervention is strongly recommended. This may include therapy, support groups, or in severe cases, rehabilitation programs.",
    risks: "Severe addiction can lead to complete social isolation, job loss, academic failure, depression, anxiety disorders, and physical health problems.",
    activities: "Focus on rebuilding basic routines first: regular sleep schedule, healthy meals, and physical activity. Small, achievable goals are important.",
};

const UNKNOWN: KnowledgeEntry = KnowledgeEntry {
    info: "Gaming addiction refers to excessive and compulsive use of video games that leads to significant impairment in personal, family, social, educational, or occupational functioning.",
    symptoms: "Common symptoms include preoccupation with gaming, withdrawal symptoms when unable to play, inability to reduce playing time, loss of interest in other activities, and continued gaming despite negative consequences.",
    tips: "Track your gaming time, set reasonable limits, create a schedule that includes other activities, and consider using apps that limit screen time.",
    risks: "Excessive gaming can lead to social isolation, depression, anxiety, sleep disruption, and physical health issues including eye strain, carpal tunnel syndrome, and poor posture.",
    activities: "Consider alternative activities like sports, reading, learning a new skill, volunteering, or spending time in nature.",
};

const SPECIALIST: SpecialistKnowledge = SpecialistKnowledge {
    info: "Seeking professional help for gaming addiction typically involves consulting with mental health professionals like psychologists, psychiatrists, or addiction counselors who specialize in behavioral addictions.",
    finding: "To find a specialist, check with your primary care physician for referrals, contact your insurance provider for in-network options, or search for addiction specialists through professional directories online.",
    approach: "Treatment typically involves cognitive-behavioral therapy (CBT), motivational interviewing, family therapy, and sometimes group therapy or support groups.",
    insurance: "Many insurance plans cover mental health services including addiction treatment. Contact your provider directly to verify coverage for behavioral addiction services.",
    telehealth: "Many mental health professionals offer virtual appointments, making it easier to access care regardless of your location.",
};

/// Knowledge blocks for a level. Unknown gets the generic entry.
pub fn knowledge_for(level: AddictionLevel) -> &'static KnowledgeEntry {
    match level {
        AddictionLevel::Low => &LOW,
        AddictionLevel::Moderate => &MODERATE,
        AddictionLevel::High => &HIGH,
        AddictionLevel::Severe => &SEVERE,
        AddictionLevel::Unknown => &UNKNOWN,
    }
}

/// The level-agnostic specialist block.
pub fn specialist_knowledge() -> &'static SpecialistKnowledge {
    &SPECIALIST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_an_entry() {
        for level in [
            AddictionLevel::Low,
            AddictionLevel::Moderate,
            AddictionLevel::High,
            AddictionLevel::Severe,
            AddictionLevel::Unknown,
        ] {
            let entry = knowledge_for(level);
            assert!(!entry.info.is_empty());
            assert!(!entry.symptoms.is_empty());
            assert!(!entry.tips.is_empty());
            assert!(!entry.risks.is_empty());
            assert!(!entry.activities.is_empty());
        }
    }

    #[test]
    fn test_unknown_entry_is_the_generic_one() {
        let entry = knowledge_for(AddictionLevel::Unknown);
        assert!(entry.info.starts_with("Gaming addiction refers to"));
    }
}
