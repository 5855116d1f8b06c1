//! Recommendation view for an addiction level.

use anyhow::Result;
use gameaware_common::history::latest;
use gameaware_common::level::AddictionLevel;
use gameaware_common::recommend::recommendation_for;
use tracing::warn;

use crate::output;

/// Resolve the level to show: an explicit label wins, otherwise the
/// latest recorded result; with neither, Unknown (the generic entry).
pub(crate) fn resolve_level(level_arg: Option<String>) -> AddictionLevel {
    if let Some(label) = level_arg {
        return AddictionLevel::from_label(&label);
    }
    let store = super::store();
    let user = store.active_scope();
    if let Err(e) = store.merge_pending(&user) {
        warn!(error = %e, "pending result could not be merged");
    }
    let history = store.load_history(&user);
    match latest(&history) {
        Some(result) => result.level,
        None => {
            output::notice(
                "No results yet. Run 'gameawarectl assess' first, or pass --level.",
            );
            AddictionLevel::Unknown
        }
    }
}

pub fn run(level_arg: Option<String>) -> Result<()> {
    let level = resolve_level(level_arg);
    let entry = recommendation_for(level);
    output::recommendation_card(level, &entry);
    Ok(())
}
