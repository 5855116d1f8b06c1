//! Command handlers, one module per subcommand.

pub mod account;
pub mod assess;
pub mod chat;
pub mod history;
pub mod recommend;

use gameaware_common::{FileStore, HistoryStore};

/// The process-wide history store over the on-disk state directory.
pub(crate) fn store() -> HistoryStore<FileStore> {
    HistoryStore::new(FileStore::default_location())
}
