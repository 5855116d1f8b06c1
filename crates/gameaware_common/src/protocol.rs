//! Wire types for the assessment backend
//!
//! Field names are pinned to the collaborator's JSON contract and must not
//! drift: the submit body mixes camelCase (`ageGroup`, `totalScore`) with
//! snake_case (`question_id`, `user_id`), exactly as the backend expects.
//!
//! Endpoints:
//! - `GET /gaming/questions/{band}` -> `Vec<Question>`
//! - `POST /submit` -> `SubmitResponse` | `ErrorBody`
//! - `POST /login` -> `LoginResponse` | `ErrorBody`
//! - `POST /register` -> `RegisterResponse` | `FieldErrorBody`

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::age::AgeBand;
use crate::level::AddictionLevel;

/// Question identifiers arrive as numbers from some backend versions and
/// as strings from others; normalize both to strings.
pub(crate) fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(i64),
        Text(String),
    }
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Num(n) => n.to_string(),
        IdRepr::Text(s) => s,
    })
}

/// One answered question inside the submit body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub question_id: String,
    pub score: u32,
}

/// Body of `POST /submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    #[serde(rename = "ageGroup")]
    pub age_group: AgeBand,
    pub responses: Vec<ResponseEntry>,
    /// Locally summed score; an optimistic placeholder only, the backend's
    /// reported total is authoritative.
    #[serde(rename = "totalScore")]
    pub total_score: u32,
    /// RFC 3339 submission time.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Success body of `POST /submit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub total_score: u32,
    pub level: AddictionLevel,
}

/// Generic failure envelope (`{ "error": ... }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Per-field failure envelope returned by `POST /register` (HTTP 400).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldErrorBody {
    pub errors: BTreeMap<String, String>,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "usernameOrEmail")]
    pub username_or_email: String,
    pub password: String,
}

/// Success body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub username: String,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Success body of `POST /register` (HTTP 201).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_field_names() {
        let req = SubmitRequest {
            age_group: AgeBand::YoungAdult,
            responses: vec![ResponseEntry {
                question_id: "3".to_string(),
                score: 2,
            }],
            total_score: 2,
            date: "2024-05-01T10:00:00Z".to_string(),
            user_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["ageGroup"], "21-30");
        assert_eq!(value["totalScore"], 2);
        assert_eq!(value["responses"][0]["question_id"], "3");
        assert_eq!(value["responses"][0]["score"], 2);
        assert_eq!(value["date"], "2024-05-01T10:00:00Z");
        // Absent user id must not appear at all.
        assert!(value.get("user_id").is_none());
    }

    #[test]
    fn test_submit_response_parses_backend_body() {
        let resp: SubmitResponse =
            serde_json::from_str(r#"{"total_score": 41, "level": "High Addiction"}"#).unwrap();
        assert_eq!(resp.total_score, 41);
        assert_eq!(resp.level, AddictionLevel::High);
    }

    #[test]
    fn test_login_request_uses_backend_field_names() {
        let req = LoginRequest {
            username_or_email: "vichu".to_string(),
            password: "Secret!1".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["usernameOrEmail"], "vichu");
        assert_eq!(value["password"], "Secret!1");
    }

    #[test]
    fn test_register_request_uses_backend_field_names() {
        let req = RegisterRequest {
            full_name: "Vichu S".to_string(),
            email: "v@example.com".to_string(),
            username: "vichu".to_string(),
            password: "Secret!1".to_string(),
            confirm_password: "Secret!1".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["fullName"], "Vichu S");
        assert_eq!(value["confirmPassword"], "Secret!1");
    }

    #[test]
    fn test_field_error_body_round_trip() {
        let body: FieldErrorBody =
            serde_json::from_str(r#"{"errors": {"email": "Invalid email format"}}"#).unwrap();
        assert_eq!(body.errors["email"], "Invalid email format");
    }
}
