//! The assessment flow: age check, survey navigation, submit, result.

use std::time::Duration;

use anyhow::{Context, Result};
use console::Term;
use gameaware_common::age::AgeBand;
use gameaware_common::config::ClientConfig;
use gameaware_common::history::SurveyResult;
use gameaware_common::storage::StatePort;
use gameaware_common::{HistoryStore, SurveySession};
use indicatif::ProgressBar;
use tracing::info;

use crate::client::BackendClient;
use crate::output;

pub async fn run(config: &ClientConfig) -> Result<()> {
    let term = Term::stdout();
    let store = super::store();

    let band = prompt_age(&term)?;
    println!("Age Group: {}", band);

    let client = BackendClient::new(config)?;
    println!("Loading questions...");
    let questions = match client.fetch_questions(band).await {
        Ok(questions) => questions,
        Err(e) => {
            output::notice(&e.to_string());
            return Ok(());
        }
    };

    let mut session = SurveySession::new(band, questions);
    if session.is_loading() {
        output::notice("The backend returned no questions for your age group. Try again later.");
        return Ok(());
    }

    survey_loop(&term, &client, &mut session, &store).await
}

/// Keep asking until the age passes validation.
fn prompt_age(term: &Term) -> Result<AgeBand> {
    loop {
        term.write_str("Enter your age: ")
            .context("terminal write failed")?;
        let input = term.read_line().context("terminal read failed")?;
        match AgeBand::parse_input(&input) {
            Ok(band) => return Ok(band),
            Err(e) => output::warning(&e.to_string()),
        }
    }
}

async fn survey_loop<P: StatePort>(
    term: &Term,
    client: &BackendClient,
    session: &mut SurveySession,
    store: &HistoryStore<P>,
) -> Result<()> {
    loop {
        output::question_card(session);
        let input = term.read_line().context("terminal read failed")?;
        match input.trim().to_lowercase().as_str() {
            "q" | "quit" => {
                println!("Assessment abandoned; nothing was recorded.");
                return Ok(());
            }
            "b" | "back" => {
                // Floors at the first question.
                let _ = session.retreat();
            }
            "n" | "next" => {
                if session.is_on_last_question() {
                    output::warning("This is the last question. Type 's' to submit.");
                } else if let Err(e) = session.advance() {
                    output::warning(&e.to_string());
                }
            }
            "s" | "submit" => {
                if !session.is_on_last_question() {
                    output::warning("Answer the remaining questions before submitting.");
                    continue;
                }
                if submit_flow(term, client, session, store).await? {
                    return Ok(());
                }
            }
            other => select_option(session, other),
        }
    }
}

fn select_option(session: &mut SurveySession, input: &str) {
    let Ok(choice) = input.parse::<usize>() else {
        output::warning("Pick an option number, or use b / n / s / q.");
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };
    let Some(answer) = question.answers.get(choice.wrapping_sub(1)) else {
        output::warning(&format!(
            "Pick an option between 1 and {}.",
            question.answers.len()
        ));
        return;
    };
    let (question_id, score) = (question.id.clone(), answer.score);
    if let Err(e) = session.select_answer(&question_id, score) {
        output::warning(&e.to_string());
    }
}

/// One submit round trip. Returns true when the assessment is finished
/// (successfully recorded, or abandoned after a declined retry).
async fn submit_flow<P: StatePort>(
    term: &Term,
    client: &BackendClient,
    session: &mut SurveySession,
    store: &HistoryStore<P>,
) -> Result<bool> {
    let user = store.active_scope();
    loop {
        let payload = match session.begin_submit(Some(&user)) {
            Ok(payload) => payload,
            Err(e) => {
                output::warning(&e.to_string());
                return Ok(false);
            }
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Submitting your responses...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        let outcome = client.submit(&payload).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(outcome) => {
                session.complete_submit();
                info!(total = outcome.total_score, level = %outcome.level, "submission accepted");

                let result = SurveyResult::from_outcome(&outcome, session.age_band());
                store
                    .stash_pending(&user, &result)
                    .context("failed to stash result")?;
                store
                    .merge_pending(&user)
                    .context("failed to record result")?;

                let history = store.load_history(&user);
                let recorded = gameaware_common::history::latest(&history)
                    .cloned()
                    .unwrap_or(result);
                output::result_card(&recorded);
                return Ok(true);
            }
            Err(e) => {
                // Local state survives a failed round trip; offer a retry.
                session.abort_submit();
                output::notice(&e.to_string());
                term.write_str("Retry submission? [y/N] ")
                    .context("terminal write failed")?;
                let again = term.read_line().context("terminal read failed")?;
                if !matches!(again.trim().to_lowercase().as_str(), "y" | "yes") {
                    println!("Your responses were not submitted.");
                    return Ok(true);
                }
            }
        }
    }
}
