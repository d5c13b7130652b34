//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! The configuration is loaded once in `main` and handed to every stage explicitly.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CATALOG_URL, DEFAULT_CREDENTIALS_PATH, DEFAULT_DETAIL_MAX_ATTEMPTS,
    DEFAULT_DETAIL_RETRY_BASE_MS, DEFAULT_GRAPHQL_URL, DEFAULT_LOG_FILTER, DEFAULT_MKDOCS_PATH,
    DEFAULT_PAGE_WORKERS, DEFAULT_PROBLEM_URL, DEFAULT_PROBLEMS_PATH, DEFAULT_README_PATH,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SHEET_RANGE, DEFAULT_SOLUTIONS_PATH,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub leetcode: LeetCodeConfig,
    pub paths: PathsConfig,
    /// Required by the docs run only
    pub annotations: Option<AnnotationConfig>,
    pub pipeline: PipelineConfig,
    pub rust_log: String,
}

/// Remote problem catalog configuration
#[derive(Debug, Clone)]
pub struct LeetCodeConfig {
    pub catalog_url: String,
    pub graphql_url: String,
    /// Base URL joined with a slug to link a problem
    pub problem_url: String,
    /// Session cookie for the authenticated catalog view
    pub session: Option<String>,
    pub request_timeout: Duration,
}

/// Filesystem locations read and written by the pipeline
#[derive(Debug, Clone)]
pub struct PathsConfig {
    pub solutions: PathBuf,
    pub problems: PathBuf,
    pub mkdocs: PathBuf,
    pub readme: PathBuf,
}

/// Where annotation rows come from
#[derive(Debug, Clone)]
pub enum AnnotationConfig {
    /// Local JSON array of records
    JsonFile(PathBuf),
    /// Google spreadsheet read through a service account
    GoogleSheet {
        sheet_id: String,
        range: String,
        credentials_path: PathBuf,
    },
}

/// Page generation tuning
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Size of the worker pool
    pub workers: usize,
    /// Attempts per detail lookup before giving up
    pub detail_max_attempts: u32,
    /// Base delay of the exponential retry backoff
    pub detail_retry_base: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            leetcode: LeetCodeConfig::from_env()?,
            paths: PathsConfig::from_env(),
            annotations: AnnotationConfig::from_env(),
            pipeline: PipelineConfig::from_env()?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

impl LeetCodeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            catalog_url: env::var("LEETCODE_CATALOG_URL")
                .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string()),
            graphql_url: env::var("LEETCODE_GRAPHQL_URL")
                .unwrap_or_else(|_| DEFAULT_GRAPHQL_URL.to_string()),
            problem_url: env::var("LEETCODE_PROBLEM_URL")
                .unwrap_or_else(|_| DEFAULT_PROBLEM_URL.to_string()),
            session: env::var("LEETCODE_SESSION").ok().filter(|s| !s.is_empty()),
            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
        })
    }
}

impl PathsConfig {
    fn from_env() -> Self {
        let path = |var: &str, default: &str| {
            PathBuf::from(env::var(var).unwrap_or_else(|_| default.to_string()))
        };

        Self {
            solutions: path("SOLUTIONS_PATH", DEFAULT_SOLUTIONS_PATH),
            problems: path("PROBLEMS_PATH", DEFAULT_PROBLEMS_PATH),
            mkdocs: path("MKDOCS_PATH", DEFAULT_MKDOCS_PATH),
            readme: path("README_PATH", DEFAULT_README_PATH),
        }
    }
}

impl AnnotationConfig {
    fn from_env() -> Option<Self> {
        if let Ok(path) = env::var("ANNOTATIONS_PATH") {
            return Some(Self::JsonFile(PathBuf::from(path)));
        }

        let sheet_id = env::var("GOOGLE_SHEET_ID").ok()?;
        Some(Self::GoogleSheet {
            sheet_id,
            range: env::var("GOOGLE_SHEET_RANGE")
                .unwrap_or_else(|_| DEFAULT_SHEET_RANGE.to_string()),
            credentials_path: PathBuf::from(
                env::var("GOOGLE_CREDENTIALS_PATH")
                    .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.to_string()),
            ),
        })
    }
}

impl PipelineConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let workers: usize = parse_var("PAGE_WORKERS", DEFAULT_PAGE_WORKERS)?;
        if workers == 0 {
            return Err(ConfigError::InvalidValue("PAGE_WORKERS".to_string()));
        }

        let detail_max_attempts: u32 = parse_var("DETAIL_MAX_ATTEMPTS", DEFAULT_DETAIL_MAX_ATTEMPTS)?;
        if detail_max_attempts == 0 {
            return Err(ConfigError::InvalidValue("DETAIL_MAX_ATTEMPTS".to_string()));
        }

        Ok(Self {
            workers,
            detail_max_attempts,
            detail_retry_base: Duration::from_millis(parse_var(
                "DETAIL_RETRY_BASE_MS",
                DEFAULT_DETAIL_RETRY_BASE_MS,
            )?),
        })
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_PAGE_WORKERS,
            detail_max_attempts: DEFAULT_DETAIL_MAX_ATTEMPTS,
            detail_retry_base: Duration::from_millis(DEFAULT_DETAIL_RETRY_BASE_MS),
        }
    }
}

/// Read a numeric variable, falling back to `default` when unset
fn parse_var<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(var.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let pipeline = PipelineConfig::default();
        assert_eq!(pipeline.workers, 8);
        assert_eq!(pipeline.detail_max_attempts, 5);
        assert_eq!(pipeline.detail_retry_base, Duration::from_millis(500));
    }

    #[test]
    fn test_parse_var_falls_back_when_unset() {
        let value: u64 = parse_var("LEETDOCS_TEST_SURELY_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
