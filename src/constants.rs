//! Application-wide constants
//!
//! Default values, remote endpoints and the fixed fragments used to render
//! badges. Grouped by the stage of the pipeline that consumes them.

// =============================================================================
// REMOTE ENDPOINTS
// =============================================================================

/// Catalog of every problem with the user's solve status
pub const DEFAULT_CATALOG_URL: &str = "https://leetcode.com/api/problems/all";

/// GraphQL endpoint serving per-problem details
pub const DEFAULT_GRAPHQL_URL: &str = "https://leetcode.com/graphql";

/// Base URL for problem pages, joined with a slug
pub const DEFAULT_PROBLEM_URL: &str = "https://leetcode.com/problems";

/// Google Sheets values API
pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// OAuth scopes requested for the service account
pub const SHEETS_SCOPES: &str = "https://www.googleapis.com/auth/spreadsheets.readonly https://www.googleapis.com/auth/drive.readonly";

/// Grant type for the service-account JWT exchange
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

// =============================================================================
// NETWORK DEFAULTS
// =============================================================================

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default number of attempts for a detail lookup
pub const DEFAULT_DETAIL_MAX_ATTEMPTS: u32 = 5;

/// Default base delay for detail retry backoff, in milliseconds
pub const DEFAULT_DETAIL_RETRY_BASE_MS: u64 = 500;

/// Default size of the page generation worker pool
pub const DEFAULT_PAGE_WORKERS: usize = 8;

/// Number of entries kept by `--mock`
pub const MOCK_ENTRY_LIMIT: usize = 2;

// =============================================================================
// FILESYSTEM DEFAULTS
// =============================================================================

pub const DEFAULT_SOLUTIONS_PATH: &str = "main/solutions";
pub const DEFAULT_PROBLEMS_PATH: &str = "mkdocs/docs/problems";
pub const DEFAULT_MKDOCS_PATH: &str = "mkdocs/mkdocs.yml";
pub const DEFAULT_README_PATH: &str = "main/README.md";
pub const DEFAULT_CREDENTIALS_PATH: &str = "config/creds.json";
pub const DEFAULT_SHEET_RANGE: &str = "Sheet1";

/// Default log filter
pub const DEFAULT_LOG_FILTER: &str = "leetdocs=info";

// =============================================================================
// ANNOTATION COLUMNS
// =============================================================================

/// Spreadsheet column names
pub mod columns {
    pub const TIME: &str = "Time";
    pub const SPACE: &str = "Space";
    pub const WAYS: &str = "Ways";
}

/// Separator between alternative approaches inside one cell
pub const APPROACH_SEPARATOR: &str = "; ";

// =============================================================================
// BADGES
// =============================================================================

/// shields.io badge base
pub const SHIELDS_URL: &str = "https://img.shields.io/badge";

/// Difficulty badge colours on generated pages
pub mod difficulty_colors {
    pub const EASY: &str = "00a690";
    pub const MEDIUM: &str = "ffaf00";
    pub const HARD: &str = "ff284b";
}

/// Sentiment markers appended to page titles
pub mod emojis {
    pub const THUMBS_UP: &str = ":thumbsup:";
    pub const THUMBS_DOWN: &str = ":thumbsdown:";
}

/// Like ratio at or above which a problem earns a thumbs-up
pub const LIKE_RATIO_UP: f64 = 0.8;

/// Like ratio below which a problem earns a thumbs-down
pub const LIKE_RATIO_DOWN: f64 = 0.5;

/// Readme progress badges
pub mod readme {
    pub const BADGE_PREFIX: &str = "<img src=\"https://img.shields.io/badge/";
    pub const BADGE_SUFFIX: &str = ".svg?style=flat-square\" />\n";

    /// Start of the line the summary block is anchored on
    pub const ANCHOR: &str = "<img src=\"https://img.shields.io/badge/Solved";

    pub const SOLVED_COLOR: &str = "blue";
    pub const EASY_COLOR: &str = "5CB85D";
    pub const MEDIUM_COLOR: &str = "F0AE4E";
    pub const HARD_COLOR: &str = "D95450";
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Section header written before the problem entries
pub const NAV_SECTION_HEADER: &str = "  - Problems:\n";

/// Directory, relative to the docs root, that holds generated pages
pub const NAV_PAGES_DIR: &str = "problems";
