//! Remote collaborators: the problem catalog API and the annotation spreadsheet

pub mod leetcode;
pub mod sheets;

pub use leetcode::{LeetCodeClient, ProblemDetailSource};
pub use sheets::{annotation_source, AnnotationSource, GoogleSheetSource, JsonFileSource};
