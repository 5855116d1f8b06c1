//! Output formatting - clean, ASCII-only terminal output
//!
//! Severity colors follow the level banding: green for Low, yellow for
//! Moderate, bright red for High, red for Severe.

use gameaware_common::history::SurveyResult;
use gameaware_common::level::AddictionLevel;
use gameaware_common::recommend::{RecommendationEntry, SpecialistProfile};
use gameaware_common::survey::SurveySession;
use owo_colors::OwoColorize;

const THIN_SEPARATOR: &str = "----------------------------------------";

fn level_colored(level: AddictionLevel) -> String {
    match level {
        AddictionLevel::Low => level.label().bright_green().to_string(),
        AddictionLevel::Moderate => level.label().yellow().to_string(),
        AddictionLevel::High => level.label().bright_red().to_string(),
        AddictionLevel::Severe => level.label().red().to_string(),
        AddictionLevel::Unknown => level.label().dimmed().to_string(),
    }
}

/// Inline warning for recoverable validation conditions.
pub fn warning(message: &str) {
    println!("{}", message.yellow());
}

/// Dismissible notice for collaborator failures.
pub fn notice(message: &str) {
    println!("{} {}", "[NOTE]".yellow(), message);
}

pub fn error_line(message: &str) {
    eprintln!("{} {}", "[ERROR]".bright_red(), message);
}

/// One survey question with its numbered options and current selection.
pub fn question_card(session: &SurveySession) {
    let Some(question) = session.current_question() else {
        return;
    };
    let chosen = session.current_response();

    println!();
    println!(
        "{} {}",
        "[QUESTION]".cyan(),
        format!("{} of {}", session.current_index() + 1, session.question_count()).dimmed()
    );
    println!("{}", question.question.bold());
    for (i, answer) in question.answers.iter().enumerate() {
        let marker = if chosen == Some(answer.score) { "*" } else { " " };
        println!("  {} {}. {}", marker, i + 1, answer.text);
    }
    let footer = if session.is_on_last_question() {
        "[1-9] select  b back  s submit  q quit"
    } else {
        "[1-9] select  b back  n next  q quit"
    };
    println!("{}", footer.dimmed());
}

/// The assessment result card.
pub fn result_card(result: &SurveyResult) {
    println!();
    println!("{}", "Your Assessment Result".bold());
    println!("{}", THIN_SEPARATOR.dimmed());
    println!("Addiction: {:.2}%", result.percentage);
    println!("{}", level_colored(result.level));
    println!("{}", result.level.description());
    println!();
    println!(
        "{}",
        "Run 'gameawarectl recommend' for tailored recommendations.".dimmed()
    );
}

/// Past results, oldest first.
pub fn history_table(history: &[SurveyResult]) {
    if history.is_empty() {
        println!("No assessments recorded yet. Run 'gameawarectl assess' to take one.");
        return;
    }
    println!("{:<22} {:>6} {:>9}  LEVEL", "DATE", "SCORE", "PERCENT");
    println!("{}", THIN_SEPARATOR.dimmed());
    for result in history {
        let date = result
            .timestamp
            .map(|ts| ts.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<22} {:>6} {:>8.2}%  {}",
            date,
            result.total_score,
            result.percentage,
            level_colored(result.level)
        );
    }
}

/// Recommendation card for a level.
pub fn recommendation_card(level: AddictionLevel, entry: &RecommendationEntry) {
    println!();
    println!("{} {}", "Recommendation for".bold(), level_colored(level));
    println!("{}", THIN_SEPARATOR.dimmed());
    println!("{}", "[ADVICE]".cyan());
    println!("{}", entry.advice);
    println!();
    println!("{}", "[DETAILS]".cyan());
    println!("{}", entry.details);
    if let Some(video) = &entry.video_url {
        println!();
        println!("{}", "[HELPFUL VIDEO]".cyan());
        println!("{}", video.underline());
    }
    if let Some(specialist) = &entry.specialist {
        println!();
        println!("{}", "[CONTACT A SPECIALIST]".cyan());
        specialist_card(specialist);
    }
}

fn specialist_card(specialist: &SpecialistProfile) {
    println!("{}", specialist.name.bold());
    println!("  phone: {}", specialist.phone);
    println!("  email: {}", specialist.email);
    println!(
        "  specialty: {}",
        specialist.field_or_placeholder(&specialist.specialty)
    );
    println!(
        "  availability: {}",
        specialist.field_or_placeholder(&specialist.availability)
    );
    if let Some(languages) = &specialist.languages {
        println!("  languages: {}", languages);
    }
    if let Some(insurance) = &specialist.insurance {
        println!("  insurance: {}", insurance);
    }
}

/// One assistant reply in the chat transcript.
pub fn assistant_line(text: &str) {
    println!("{} {}", "assistant>".bright_green(), text);
}
