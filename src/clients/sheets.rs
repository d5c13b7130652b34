//! Annotation spreadsheet sources
//!
//! Annotations come either from a Google spreadsheet read with a service
//! account, or from a local JSON export of the same table.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AnnotationConfig;
use crate::constants::{JWT_BEARER_GRANT, SHEETS_API_URL, SHEETS_SCOPES};
use crate::error::{AppError, AppResult};
use crate::models::Record;
use crate::state::AppState;

/// Lifetime requested for the service-account assertion, in seconds
const ASSERTION_TTL_SECS: i64 = 3600;

/// Row-ordered table of records keyed by column header
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnnotationSource: Send + Sync {
    async fn fetch_records(&self) -> AppResult<Vec<Record>>;
}

/// Build the source selected by configuration
pub fn annotation_source(state: &AppState) -> AppResult<Box<dyn AnnotationSource>> {
    match &state.config().annotations {
        Some(AnnotationConfig::JsonFile(path)) => Ok(Box::new(JsonFileSource::new(path.clone()))),
        Some(AnnotationConfig::GoogleSheet {
            sheet_id,
            range,
            credentials_path,
        }) => Ok(Box::new(GoogleSheetSource::new(
            state.http().clone(),
            sheet_id.clone(),
            range.clone(),
            credentials_path.clone(),
        ))),
        None => Err(AppError::Configuration(
            "set ANNOTATIONS_PATH or GOOGLE_SHEET_ID".to_string(),
        )),
    }
}

// =============================================================================
// LOCAL JSON
// =============================================================================

/// JSON array of objects, one per row
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl AnnotationSource for JsonFileSource {
    async fn fetch_records(&self) -> AppResult<Vec<Record>> {
        tracing::debug!("Reading annotations from {:?}", self.path);
        let raw = tokio::fs::read(&self.path).await?;

        let rows: Vec<HashMap<String, Value>> = serde_json::from_slice(&raw)
            .map_err(|e| AppError::Schema(format!("annotation file {:?}: {}", self.path, e)))?;

        Ok(rows
            .into_iter()
            .map(|row| row.into_iter().map(|(k, v)| (k, cell_text(&v))).collect())
            .collect())
    }
}

// =============================================================================
// GOOGLE SHEETS
// =============================================================================

/// Fields of a service-account key file the token exchange needs
#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    token_uri: String,
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Spreadsheet read through the Sheets values API
pub struct GoogleSheetSource {
    http: Client,
    sheet_id: String,
    range: String,
    credentials_path: PathBuf,
}

impl GoogleSheetSource {
    pub fn new(http: Client, sheet_id: String, range: String, credentials_path: PathBuf) -> Self {
        Self {
            http,
            sheet_id,
            range,
            credentials_path,
        }
    }

    async fn load_key(path: &Path) -> AppResult<ServiceAccountKey> {
        let raw = tokio::fs::read(path).await.map_err(|e| {
            AppError::Configuration(format!("cannot read credentials {:?}: {}", path, e))
        })?;
        serde_json::from_slice(&raw)
            .map_err(|e| AppError::Configuration(format!("invalid credentials {:?}: {}", path, e)))
    }

    /// Exchange a signed assertion for a bearer token
    async fn access_token(&self) -> AppResult<String> {
        let key = Self::load_key(&self.credentials_path).await?;
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &key.client_email,
            scope: SHEETS_SCOPES,
            aud: &key.token_uri,
            iat: now,
            exp: now + ASSERTION_TTL_SECS,
        };

        let assertion = jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &EncodingKey::from_rsa_pem(key.private_key.as_bytes())?,
        )?;

        let token: TokenResponse = self
            .http
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(token.access_token)
    }

    fn values_url(&self) -> AppResult<Url> {
        let mut url = Url::parse(SHEETS_API_URL)
            .map_err(|e| AppError::Configuration(format!("sheets url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration("sheets url cannot be a base".to_string()))?
            .extend([self.sheet_id.as_str(), "values", self.range.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl AnnotationSource for GoogleSheetSource {
    async fn fetch_records(&self) -> AppResult<Vec<Record>> {
        let token = self.access_token().await?;
        let url = self.values_url()?;
        tracing::debug!("Reading annotations from spreadsheet {}", self.sheet_id);

        let range: ValueRange = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(records_from_values(range.values))
    }
}

/// Turn a header row plus data rows into records; short rows are padded with ""
pub fn records_from_values(values: Vec<Vec<Value>>) -> Vec<Record> {
    let mut rows = values.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header.iter().map(cell_text).collect();

    rows.map(|row| {
        header
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let cell = row.get(i).map(cell_text).unwrap_or_default();
                (column.clone(), cell)
            })
            .collect()
    })
    .collect()
}

/// Cell value as display text
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
