//! Local solution file model

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::catalog::padded_id;

/// A recognized solution language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// File extension on disk
    pub extension: &'static str,
    /// Info string of the fenced code block
    pub fence: &'static str,
    /// Tab label on the generated page
    pub tab: &'static str,
}

/// Language identifiers, in display priority order
pub mod languages {
    use super::Language;

    pub const CPP: Language = Language { extension: "cpp", fence: "cpp", tab: "C++" };
    pub const JAVA: Language = Language { extension: "java", fence: "java", tab: "Java" };
    pub const PYTHON: Language = Language { extension: "py", fence: "python", tab: "Python" };

    /// All recognized languages
    pub const ALL: &[Language] = &[CPP, JAVA, PYTHON];
}

impl Language {
    /// Look up a language by file extension
    pub fn for_extension(extension: &str) -> Option<&'static Language> {
        languages::ALL.iter().find(|l| l.extension == extension)
    }
}

static SOLUTION_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4,})(?:-(\d+))?\.([A-Za-z0-9]+)$").expect("solution file pattern is valid")
});

/// One (language, approach) source file for a problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionFile {
    pub path: PathBuf,
    pub frontend_id: u32,
    /// 1 for the unsuffixed file, N for a `-N` suffix
    pub approach: u32,
    pub language: &'static Language,
}

impl SolutionFile {
    /// Parse `NNNN[-N].ext`; `None` for names that are not a recognized solution.
    ///
    /// The id must be written exactly as `padded_id` renders it.
    pub fn parse(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let caps = SOLUTION_FILE_NAME.captures(name)?;

        let frontend_id = caps[1].parse().ok()?;
        if caps[1] != padded_id(frontend_id) {
            return None;
        }
        let approach = match caps.get(2) {
            Some(n) => n.as_str().parse().ok().filter(|n| *n > 1)?,
            None => 1,
        };
        let language = Language::for_extension(&caps[3])?;

        Some(Self {
            path: path.to_path_buf(),
            frontend_id,
            approach,
            language,
        })
    }
}
