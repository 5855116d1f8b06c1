//! Past results: listing and the deliberate clear operation.

use anyhow::{Context, Result};
use console::Term;
use tracing::warn;

use crate::cli::HistoryCommands;
use crate::output;

pub fn run(action: Option<HistoryCommands>) -> Result<()> {
    let store = super::store();
    let user = store.active_scope();

    match action {
        Some(HistoryCommands::Clear { yes }) => clear(&store, &user, yes),
        None => {
            if let Err(e) = store.merge_pending(&user) {
                warn!(error = %e, "pending result could not be merged");
            }
            let history = store.load_history(&user);
            println!("Assessment history for {}", user);
            output::history_table(&history);
            Ok(())
        }
    }
}

fn clear(
    store: &gameaware_common::HistoryStore<gameaware_common::FileStore>,
    user: &str,
    yes: bool,
) -> Result<()> {
    if !yes {
        let term = Term::stdout();
        term.write_str(&format!(
            "This permanently erases all recorded results for '{}'. Type 'yes' to confirm: ",
            user
        ))
        .context("terminal write failed")?;
        let confirmation = term.read_line().context("terminal read failed")?;
        if confirmation.trim() != "yes" {
            println!("Aborted; history untouched.");
            return Ok(());
        }
    }
    store.clear(user).context("failed to clear history")?;
    println!("History cleared for {}.", user);
    Ok(())
}
