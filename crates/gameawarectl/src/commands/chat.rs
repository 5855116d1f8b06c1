//! Chat REPL over the assistant matcher.

use anyhow::{Context, Result};
use console::Term;
use gameaware_common::assistant::{opening_message, respond};
use gameaware_common::recommend::recommendation_for;

use crate::output;

pub fn run(level_arg: Option<String>) -> Result<()> {
    let level = super::recommend::resolve_level(level_arg);
    // Bind the level's specialist so doctor questions get the full card.
    let specialist = recommendation_for(level).specialist;

    println!("Gaming Addiction Assistant (type 'exit' to leave)");
    output::assistant_line(&opening_message(level));

    let term = Term::stdout();
    loop {
        term.write_str("you> ").context("terminal write failed")?;
        let line = term.read_line().context("terminal read failed")?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if matches!(text.to_lowercase().as_str(), "exit" | "quit" | "bye") {
            output::assistant_line("Take care! Small, steady changes make the difference.");
            return Ok(());
        }
        output::assistant_line(&respond(text, level, specialist.as_ref()));
    }
}
