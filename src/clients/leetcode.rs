//! Problem catalog and problem detail API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{COOKIE, REFERER};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::ProblemDetail;
use crate::state::AppState;

/// GraphQL document selecting the fields a page needs
const QUESTION_QUERY: &str = r#"
    query questionData($titleSlug: String!) {
      question(titleSlug: $titleSlug) {
        title
        difficulty
        likes
        dislikes
        topicTags {
          name
        }
      }
    }
"#;

/// Per-problem detail lookup, shared by every page worker
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProblemDetailSource: Send + Sync {
    /// Fetch title, difficulty, votes and tags for one slug
    async fn fetch_detail(&self, slug: &str) -> AppResult<ProblemDetail>;
}

/// HTTP client for the catalog and GraphQL endpoints
#[derive(Clone)]
pub struct LeetCodeClient {
    state: AppState,
}

impl LeetCodeClient {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Download the raw catalog body
    pub async fn fetch_catalog_body(&self) -> AppResult<Vec<u8>> {
        let leetcode = &self.state.config().leetcode;
        tracing::debug!("Fetching catalog from {}", leetcode.catalog_url);

        let mut request = self.state.http().get(&leetcode.catalog_url);
        if let Some(session) = &leetcode.session {
            request = request.header(COOKIE, format!("LEETCODE_SESSION={}", session));
        }

        let body = request.send().await?.error_for_status()?.bytes().await?;
        Ok(body.to_vec())
    }

    /// One detail request; network and decoding failures surface as `Network`
    async fn request_detail(&self, slug: &str) -> AppResult<Option<ProblemDetail>> {
        let leetcode = &self.state.config().leetcode;
        let payload = json!({
            "operationName": "questionData",
            "variables": { "titleSlug": slug },
            "query": QUESTION_QUERY,
        });

        let body = self
            .state
            .http()
            .post(&leetcode.graphql_url)
            .header(REFERER, format!("{}/{}", leetcode.problem_url, slug))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        parse_detail_response(&body)
    }
}

#[async_trait]
impl ProblemDetailSource for LeetCodeClient {
    async fn fetch_detail(&self, slug: &str) -> AppResult<ProblemDetail> {
        let pipeline = &self.state.config().pipeline;
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.request_detail(slug).await {
                Ok(Some(detail)) => return Ok(detail),
                Ok(None) => return Err(AppError::DetailNotFound(slug.to_string())),
                Err(e) if is_transient(&e) && attempt < pipeline.detail_max_attempts => {
                    let delay = retry_delay(pipeline.detail_retry_base, attempt);
                    tracing::warn!(
                        "Detail lookup for '{}' failed (attempt {}/{}): {}; retrying in {:?}",
                        slug,
                        attempt,
                        pipeline.detail_max_attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(AppError::Network(reason)) => {
                    return Err(AppError::Network(format!(
                        "detail for '{}' unavailable after {} attempts: {}",
                        slug, attempt, reason
                    )));
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Failures worth another request: transport errors and malformed answers
fn is_transient(err: &AppError) -> bool {
    matches!(err, AppError::Network(_) | AppError::Schema(_))
}

/// Exponential backoff: `base * 2^(attempt - 1)`
pub fn retry_delay(base: Duration, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    base.saturating_mul(1 << exponent)
}

/// Decode a GraphQL answer.
///
/// Empty bodies, non-JSON bodies and answers without `data` are `Network`
/// errors; a question missing required fields is a `Schema` error. Both are
/// retried by `fetch_detail`. `data.question == null` means the slug does not exist.
pub fn parse_detail_response(body: &[u8]) -> AppResult<Option<ProblemDetail>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Network("empty detail response".to_string()));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::Network(format!("undecodable detail response: {}", e)))?;

    let question = match value.get("data") {
        Some(data) if !data.is_null() => data.get("question").cloned().unwrap_or(Value::Null),
        _ => {
            return Err(AppError::Network(format!(
                "detail response without data: {}",
                value.get("errors").unwrap_or(&Value::Null)
            )));
        }
    };

    if question.is_null() {
        return Ok(None);
    }

    serde_json::from_value(question)
        .map(Some)
        .map_err(|e| AppError::Schema(format!("problem detail: {}", e)))
}
