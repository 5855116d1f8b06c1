//! Result history
//!
//! Append-only, deduplicating log of completed assessments, one document
//! per user behind the injected persistence port. Malformed stored data is
//! treated as absence; history reads never fail the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::age::AgeBand;
use crate::level::AddictionLevel;
use crate::protocol::SubmitResponse;
use crate::storage::{StatePort, StoreError};

/// History scope for assessments taken while logged out.
pub const GUEST_USER: &str = "guest";

const CURRENT_USER_KEY: &str = "current-user";

/// One completed assessment. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResult {
    /// Unique id, assigned at record time when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub total_score: u32,
    pub percentage: f64,
    pub level: AddictionLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<AgeBand>,
    /// Completion time, assigned at record time when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl SurveyResult {
    /// Build a result from the backend's authoritative submit outcome.
    pub fn from_outcome(outcome: &SubmitResponse, age_group: AgeBand) -> Self {
        Self {
            id: None,
            total_score: outcome.total_score,
            percentage: crate::level::percentage_for(outcome.total_score),
            level: outcome.level,
            age_group: Some(age_group),
            timestamp: None,
        }
    }

    fn sort_key(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or_else(|| DateTime::<Utc>::MIN_UTC)
    }

    fn duplicates(&self, other: &SurveyResult) -> bool {
        if let (Some(a), Some(b)) = (&self.id, &other.id) {
            if a == b {
                return true;
            }
        }
        self.timestamp == other.timestamp && self.percentage == other.percentage
    }
}

/// Last entry by timestamp ordering, None when empty.
pub fn latest(history: &[SurveyResult]) -> Option<&SurveyResult> {
    history.iter().max_by_key(|r| r.sort_key())
}

/// Per-user history over a persistence port.
pub struct HistoryStore<P: StatePort> {
    port: P,
}

impl<P: StatePort> HistoryStore<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    fn history_key(user: &str) -> String {
        format!("history.{user}")
    }

    fn pending_key(user: &str) -> String {
        format!("pending-result.{user}")
    }

    /// Load a user's history, sorted ascending by timestamp. Absent or
    /// malformed data degrades to empty.
    pub fn load_history(&self, user: &str) -> Vec<SurveyResult> {
        let raw = match self.port.get(&Self::history_key(user)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(user, error = %e, "history read failed; treating as empty");
                return Vec::new();
            }
        };
        let mut history: Vec<SurveyResult> = match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(e) => {
                warn!(user, error = %e, "stored history is malformed; treating as empty");
                return Vec::new();
            }
        };
        history.sort_by_key(SurveyResult::sort_key);
        history
    }

    /// Record a result into a user's history. Missing timestamp and id are
    /// assigned here; an entry already present (same id, or same
    /// timestamp and percentage) leaves the history untouched.
    pub fn record_result(
        &self,
        user: &str,
        mut result: SurveyResult,
    ) -> Result<SurveyResult, StoreError> {
        if result.timestamp.is_none() {
            result.timestamp = Some(Utc::now());
        }

        let mut history = self.load_history(user);
        if let Some(existing) = history.iter().find(|r| r.duplicates(&result)) {
            debug!(user, "duplicate result ignored");
            return Ok(existing.clone());
        }

        if result.id.is_none() {
            result.id = Some(uuid::Uuid::new_v4().to_string());
        }
        history.push(result.clone());
        history.sort_by_key(SurveyResult::sort_key);
        let raw = serde_json::to_string(&history)?;
        self.port.set(&Self::history_key(user), &raw)?;
        debug!(user, entries = history.len(), "result recorded");
        Ok(result)
    }

    /// Erase a user's history. Deliberate, irreversible, scoped to that
    /// user's key only.
    pub fn clear(&self, user: &str) -> Result<(), StoreError> {
        self.port.remove(&Self::history_key(user))
    }

    /// Stash the most recent result before it is filed into history.
    pub fn stash_pending(&self, user: &str, result: &SurveyResult) -> Result<(), StoreError> {
        let raw = serde_json::to_string(result)?;
        self.port.set(&Self::pending_key(user), &raw)
    }

    /// Merge a stashed pending result into history, if one exists. Called
    /// on every history read path so an interrupted run loses nothing.
    pub fn merge_pending(&self, user: &str) -> Result<(), StoreError> {
        let key = Self::pending_key(user);
        let Some(raw) = self.port.get(&key)? else {
            return Ok(());
        };
        match serde_json::from_str::<SurveyResult>(&raw) {
            Ok(result) => {
                self.record_result(user, result)?;
            }
            Err(e) => {
                warn!(user, error = %e, "pending result is malformed; dropping");
            }
        }
        self.port.remove(&key)
    }

    /// Active user identity, if logged in.
    pub fn current_user(&self) -> Option<String> {
        match self.port.get(CURRENT_USER_KEY) {
            Ok(user) => user.filter(|u| !u.is_empty()),
            Err(e) => {
                warn!(error = %e, "identity read failed; treating as logged out");
                None
            }
        }
    }

    /// Switch the active identity. History scopes swap with it; nothing
    /// leaks across users.
    pub fn set_current_user(&self, user: &str) -> Result<(), StoreError> {
        self.port.set(CURRENT_USER_KEY, user)
    }

    pub fn clear_current_user(&self) -> Result<(), StoreError> {
        self.port.remove(CURRENT_USER_KEY)
    }

    /// The identity new results are filed under.
    pub fn active_scope(&self) -> String {
        self.current_user().unwrap_or_else(|| GUEST_USER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> HistoryStore<MemoryStore> {
        HistoryStore::new(MemoryStore::new())
    }

    fn result_at(ts: &str, total: u32) -> SurveyResult {
        SurveyResult {
            id: None,
            total_score: total,
            percentage: crate::level::percentage_for(total),
            level: AddictionLevel::for_total_score(total),
            age_group: Some(AgeBand::YoungAdult),
            timestamp: Some(ts.parse().unwrap()),
        }
    }

    #[test]
    fn test_empty_store_loads_empty_history() {
        let store = store();
        assert!(store.load_history("vichu").is_empty());
    }

    #[test]
    fn test_record_assigns_id_and_timestamp() {
        let store = store();
        let recorded = store
            .record_result(
                "vichu",
                SurveyResult {
                    id: None,
                    total_score: 12,
                    percentage: 20.0,
                    level: AddictionLevel::Low,
                    age_group: None,
                    timestamp: None,
                },
            )
            .unwrap();
        assert!(recorded.id.is_some());
        assert!(recorded.timestamp.is_some());
        assert_eq!(store.load_history("vichu").len(), 1);
    }

    #[test]
    fn test_duplicate_record_is_a_no_op() {
        let store = store();
        let first = store
            .record_result("vichu", result_at("2024-05-01T10:00:00Z", 30))
            .unwrap();

        // Same id: ignored.
        store.record_result("vichu", first.clone()).unwrap();
        assert_eq!(store.load_history("vichu").len(), 1);

        // No id but same timestamp and percentage: ignored too.
        store
            .record_result("vichu", result_at("2024-05-01T10:00:00Z", 30))
            .unwrap();
        assert_eq!(store.load_history("vichu").len(), 1);

        // A genuinely different result appends.
        store
            .record_result("vichu", result_at("2024-05-02T10:00:00Z", 30))
            .unwrap();
        assert_eq!(store.load_history("vichu").len(), 2);
    }

    #[test]
    fn test_history_sorts_ascending_by_timestamp() {
        let store = store();
        store
            .record_result("vichu", result_at("2024-05-03T10:00:00Z", 10))
            .unwrap();
        store
            .record_result("vichu", result_at("2024-05-01T10:00:00Z", 20))
            .unwrap();
        store
            .record_result("vichu", result_at("2024-05-02T10:00:00Z", 30))
            .unwrap();

        let history = store.load_history("vichu");
        let days: Vec<u32> = history
            .iter()
            .map(|r| {
                use chrono::Datelike;
                r.timestamp.unwrap().day()
            })
            .collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[test]
    fn test_latest_picks_newest_or_none() {
        assert!(latest(&[]).is_none());
        let newest = result_at("2024-06-01T00:00:00Z", 5);
        let history = vec![result_at("2024-05-01T00:00:00Z", 1), newest.clone()];
        assert_eq!(latest(&history).unwrap().timestamp, newest.timestamp);
    }

    #[test]
    fn test_malformed_history_degrades_to_empty() {
        let store = store();
        store.port().set("history.vichu", "{not json").unwrap();
        assert!(store.load_history("vichu").is_empty());
    }

    #[test]
    fn test_histories_are_scoped_per_user() {
        let store = store();
        store
            .record_result("alice", result_at("2024-05-01T10:00:00Z", 10))
            .unwrap();
        store
            .record_result("bob", result_at("2024-05-01T11:00:00Z", 50))
            .unwrap();

        assert_eq!(store.load_history("alice").len(), 1);
        assert_eq!(store.load_history("bob").len(), 1);
        store.clear("alice").unwrap();
        assert!(store.load_history("alice").is_empty());
        assert_eq!(store.load_history("bob").len(), 1);
    }

    #[test]
    fn test_identity_switching_swaps_scope() {
        let store = store();
        assert_eq!(store.active_scope(), GUEST_USER);
        store.set_current_user("alice").unwrap();
        assert_eq!(store.active_scope(), "alice");
        store.clear_current_user().unwrap();
        assert_eq!(store.active_scope(), GUEST_USER);
    }

    #[test]
    fn test_pending_result_merges_once() {
        let store = store();
        let pending = result_at("2024-05-04T10:00:00Z", 18);
        store.stash_pending("vichu", &pending).unwrap();

        store.merge_pending("vichu").unwrap();
        assert_eq!(store.load_history("vichu").len(), 1);

        // Second merge finds nothing stashed.
        store.merge_pending("vichu").unwrap();
        assert_eq!(store.load_history("vichu").len(), 1);
    }

    #[test]
    fn test_from_outcome_derives_percentage() {
        let outcome = SubmitResponse {
            total_score: 5,
            level: AddictionLevel::Low,
        };
        let result = SurveyResult::from_outcome(&outcome, AgeBand::Teen);
        assert_eq!(result.percentage, 8.33);
        assert_eq!(result.age_group, Some(AgeBand::Teen));
        assert_eq!(result.level, AddictionLevel::Low);
    }
}
