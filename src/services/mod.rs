//! Pipeline stages

pub mod catalog_service;
pub mod navigation_service;
pub mod page_service;
pub mod readme_service;
pub mod solution_service;

pub use catalog_service::CatalogService;
pub use navigation_service::NavigationService;
pub use page_service::{PageGenerator, PageReport};
pub use readme_service::{ProgressSummary, ReadmeService};
pub use solution_service::SolutionIndex;
