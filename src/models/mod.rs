//! Domain models
//!
//! Schema structs for the three data sources the pipeline merges: the remote
//! catalog, per-problem details, spreadsheet annotations, plus local solution files.

pub mod annotation;
pub mod catalog;
pub mod problem;
pub mod solution;

pub use annotation::*;
pub use catalog::*;
pub use problem::*;
pub use solution::*;
