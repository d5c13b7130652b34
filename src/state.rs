//! Run session state
//!
//! [`AppState`] is built once at startup and shared by every worker of the
//! run. It owns the HTTP connection pool used for all remote calls.

use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::error::AppResult;

/// Shared session state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// HTTP client shared by the catalog, detail and spreadsheet calls
    pub http: Client,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new session with a pooled HTTP client
    pub fn new(config: Config) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(config.leetcode.request_timeout)
            .user_agent(concat!("leetdocs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(http, config))
    }

    /// Create a session around an existing client
    pub fn with_client(http: Client, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { http, config }),
        }
    }

    /// Get a reference to the HTTP client
    pub fn http(&self) -> &Client {
        &self.inner.http
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
