//! GameAware Common - Shared domain logic for the GameAware client
//!
//! Age banding, survey session state, scoring, result history, the
//! recommendation table and the chat assistant. The HTTP backend stays an
//! opaque collaborator; everything here is pure or local-state only.

pub mod account;
pub mod age;
pub mod assistant;
pub mod config;
pub mod history;
pub mod knowledge;
pub mod level;
pub mod protocol;
pub mod recommend;
pub mod storage;
pub mod survey;

pub use age::{AgeBand, AgeError};
pub use history::{HistoryStore, SurveyResult};
pub use level::AddictionLevel;
pub use recommend::{RecommendationEntry, SpecialistProfile};
pub use storage::{FileStore, MemoryStore, StatePort};
pub use survey::{Question, SurveyError, SurveySession};
