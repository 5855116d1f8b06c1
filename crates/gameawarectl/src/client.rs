//! HTTP client for the assessment backend
//!
//! Thin wrapper over reqwest with the configured endpoint and a bounded
//! timeout. Every call either returns the parsed success body or a typed
//! error; a failed call never corrupts local session state, so the caller
//! is free to retry.

use gameaware_common::account::FieldErrors;
use gameaware_common::age::AgeBand;
use gameaware_common::config::ClientConfig;
use gameaware_common::protocol::{
    ErrorBody, FieldErrorBody, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    SubmitRequest, SubmitResponse,
};
use gameaware_common::survey::Question;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Collaborator failures, split by how they surface to the user.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network failure or timeout; retryable.
    #[error("Cannot reach the assessment backend: {0}")]
    Transport(String),
    /// The backend answered with an error envelope.
    #[error("{0}")]
    Backend(String),
    /// The backend rejected a registration with per-field messages.
    #[error("registration rejected by the backend")]
    Rejected(FieldErrors),
}

pub struct BackendClient {
    http: reqwest::Client,
    base: String,
}

impl BackendClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base: config.endpoint.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// `GET /gaming/questions/{band}`: the ordered question set for a band.
    pub async fn fetch_questions(&self, band: AgeBand) -> Result<Vec<Question>, ApiError> {
        let url = self.url(&format!("/gaming/questions/{}", band.as_str()));
        debug!(%url, "fetching questions");
        let response = self.http.get(&url).send().await.map_err(transport)?;
        parse_body(response).await
    }

    /// `POST /submit`: the backend's reported score and level are
    /// authoritative for the result.
    pub async fn submit(&self, payload: &SubmitRequest) -> Result<SubmitResponse, ApiError> {
        let url = self.url("/submit");
        debug!(%url, total = payload.total_score, "submitting responses");
        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;
        parse_body(response).await
    }

    /// `POST /login`.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        parse_body(response).await
    }

    /// `POST /register`. A 400 carries per-field messages, surfaced as
    /// [`ApiError::Rejected`] so they render like local validation.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        if response.status() == reqwest::StatusCode::BAD_REQUEST {
            let body: FieldErrorBody = response
                .json()
                .await
                .map_err(|e| ApiError::Backend(format!("unreadable rejection body: {e}")))?;
            return Err(ApiError::Rejected(body.into()));
        }
        parse_body(response).await
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        return ApiError::Transport("request timed out".to_string());
    }
    ApiError::Transport(e.to_string())
}

/// Parse a success body, or map a non-2xx response to its error envelope.
async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ApiError::Backend(format!("unreadable response body: {e}")));
    }

    let fallback = format!("backend returned HTTP {}", status.as_u16());
    match response.json::<ErrorBody>().await {
        Ok(body) => Err(ApiError::Backend(body.error)),
        Err(e) => {
            warn!(%status, error = %e, "backend error body was not the expected envelope");
            Err(ApiError::Backend(fallback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BackendClient {
        let config = ClientConfig {
            endpoint: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 10,
        };
        BackendClient::new(&config).unwrap()
    }

    #[test]
    fn test_urls_match_backend_routes() {
        let c = client();
        assert_eq!(
            c.url(&format!("/gaming/questions/{}", AgeBand::Teen.as_str())),
            "http://127.0.0.1:5000/gaming/questions/15-20"
        );
        assert_eq!(c.url("/submit"), "http://127.0.0.1:5000/submit");
        assert_eq!(c.url("/login"), "http://127.0.0.1:5000/login");
    }

    #[test]
    fn test_error_display_is_user_facing() {
        let e = ApiError::Backend("Invalid username/email or password".to_string());
        assert_eq!(e.to_string(), "Invalid username/email or password");
        let t = ApiError::Transport("request timed out".to_string());
        assert!(t.to_string().starts_with("Cannot reach the assessment backend"));
    }
}
