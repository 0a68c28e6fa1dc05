use crate::core::{ConfigProvider, PollApi, VoteRequest};
use crate::utils::error::{PollyError, Result};
use crate::utils::validation::{validate_positive_id, validate_token};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const JSON_MIME: &str = "application/json";

/// HTTP client for the Polly API.
///
/// Each operation validates its arguments, issues exactly one request and
/// translates the response into parsed JSON or a [`PollyError`].
#[derive(Debug, Clone)]
pub struct PollyClient {
    client: Client,
    base_url: String,
}

impl PollyClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_timeout(config.base_url(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/polls/{poll_id}/{action}`, ignoring trailing slashes on the base.
    pub fn endpoint_url(&self, poll_id: u64, action: &str) -> String {
        format!(
            "{}/polls/{}/{}",
            self.base_url.trim_end_matches('/'),
            poll_id,
            action
        )
    }

    /// Vote for `option_id` in poll `poll_id`; returns the recorded vote.
    pub async fn cast_vote(&self, poll_id: u64, option_id: u64, token: &str) -> Result<Value> {
        validate_positive_id("poll_id", poll_id)?;
        validate_positive_id("option_id", option_id)?;
        validate_token(token)?;

        let url = self.endpoint_url(poll_id, "vote");
        tracing::debug!("Casting vote: POST {} (option_id={})", url, option_id);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, JSON_MIME)
            .header(ACCEPT, JSON_MIME)
            .json(&VoteRequest::new(option_id))
            .send()
            .await?;
        tracing::debug!("Vote response status: {}", response.status());

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(PollyError::Unauthorized),
            StatusCode::NOT_FOUND => Err(PollyError::NotFound {
                message: "Poll or option not found".to_string(),
            }),
            _ => handle_response(response).await,
        }
    }

    /// Fetch aggregated vote counts for poll `poll_id`.
    pub async fn get_poll_results(&self, poll_id: u64, token: &str) -> Result<Value> {
        validate_positive_id("poll_id", poll_id)?;
        validate_token(token)?;

        let url = self.endpoint_url(poll_id, "results");
        tracing::debug!("Fetching poll results: GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header(ACCEPT, JSON_MIME)
            .send()
            .await?;
        tracing::debug!("Results response status: {}", response.status());

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                tracing::error!(
                    "Unauthorized while fetching poll results for poll_id={}",
                    poll_id
                );
                Err(PollyError::Unauthorized)
            }
            StatusCode::NOT_FOUND => {
                tracing::error!(
                    "Poll not found when fetching results for poll_id={}",
                    poll_id
                );
                Err(PollyError::NotFound {
                    message: "Poll not found".to_string(),
                })
            }
            _ => handle_response(response).await,
        }
    }
}

#[async_trait::async_trait]
impl PollApi for PollyClient {
    async fn cast_vote(&self, poll_id: u64, option_id: u64, token: &str) -> Result<Value> {
        PollyClient::cast_vote(self, poll_id, option_id, token).await
    }

    async fn get_poll_results(&self, poll_id: u64, token: &str) -> Result<Value> {
        PollyClient::get_poll_results(self, poll_id, token).await
    }
}

/// Validate the status of `response` and return its JSON body.
///
/// Non-2xx responses become [`PollyError::Api`], carrying the server's
/// `detail` message when the error body has one. A 2xx body that is not JSON
/// becomes [`PollyError::InvalidJson`].
pub async fn handle_response(response: Response) -> Result<Value> {
    let status = response.status();
    let url = response.url().clone();

    if !status.is_success() {
        // An unreadable error body still reports the status.
        let body = response.bytes().await.unwrap_or_default();
        let message = error_detail(&body).unwrap_or_else(|| describe_status(status, &url));
        tracing::debug!("Request to {} failed with {}: {}", url, status, message);
        return Err(PollyError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|_| PollyError::InvalidJson)
}

// FastAPI puts its error message under "detail". Empty or zero-like values
// carry no message.
fn error_detail(body: &[u8]) -> Option<String> {
    let payload: Value = serde_json::from_slice(body).ok()?;
    match payload.get("detail")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn describe_status(status: StatusCode, url: &Url) -> String {
    let kind = if status.is_client_error() {
        "Client Error"
    } else if status.is_server_error() {
        "Server Error"
    } else {
        "HTTP Error"
    };
    format!(
        "{} {}: {} for url: {}",
        status.as_u16(),
        kind,
        status.canonical_reason().unwrap_or("Unknown"),
        url
    )
}

/// One-shot [`PollyClient::cast_vote`] against `base_url`.
pub async fn cast_vote(base_url: &str, poll_id: u64, option_id: u64, token: &str) -> Result<Value> {
    PollyClient::new(base_url)?
        .cast_vote(poll_id, option_id, token)
        .await
}

/// One-shot [`PollyClient::get_poll_results`] against `base_url`.
pub async fn get_poll_results(base_url: &str, poll_id: u64, token: &str) -> Result<Value> {
    PollyClient::new(base_url)?
        .get_poll_results(poll_id, token)
        .await
}
