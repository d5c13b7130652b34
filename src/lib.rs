//! leetdocs - Documentation generator for a catalog of solved coding problems
//!
//! This library merges three sources into a documentation site:
//!
//! - the remote problem catalog and per-problem detail API
//! - a spreadsheet of complexity notes and approach names
//! - local solution source files
//!
//! # Architecture
//!
//! - **Clients**: remote APIs and the annotation spreadsheet
//! - **Services**: catalog fetch, solution lookup, page, navigation and readme writers
//! - **Models**: schema structs for every source
//! - **Commands**: the two runs exposed by the CLI

pub mod clients;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
