//! Solution locator
//!
//! Indexes the local solution tree once per run. A problem is solved when a
//! top-level entry of the solutions directory starts with its padded id: either
//! a source file such as `0001.cpp`, or a per-problem directory such as
//! `0001. Two Sum/` holding the source files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{
    error::AppResult,
    models::{padded_id, SolutionFile},
};

/// A top-level entry of the solutions directory
#[derive(Debug, Clone)]
struct SolutionEntry {
    path: PathBuf,
    /// The entry itself for a file, its direct children for a directory
    files: Vec<PathBuf>,
}

/// Top-level solution entries keyed by name
#[derive(Debug, Clone, Default)]
pub struct SolutionIndex {
    entries: BTreeMap<String, SolutionEntry>,
}

impl SolutionIndex {
    /// Walk the solutions tree, sorted by file name for a stable order
    pub fn build(root: &Path) -> AppResult<Self> {
        let mut index = Self::default();

        if !root.exists() {
            tracing::warn!("Solutions directory {:?} does not exist", root);
            return Ok(index);
        }

        for entry in WalkDir::new(root).min_depth(1).max_depth(2).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                std::io::Error::other(format!("error reading solutions tree: {}", e))
            })?;

            if entry.depth() == 1 {
                let Some(name) = entry.file_name().to_str() else {
                    continue;
                };
                let files = if entry.file_type().is_file() {
                    vec![entry.path().to_path_buf()]
                } else {
                    Vec::new()
                };
                index.entries.insert(
                    name.to_string(),
                    SolutionEntry {
                        path: entry.path().to_path_buf(),
                        files,
                    },
                );
                continue;
            }

            if !entry.file_type().is_file() {
                continue;
            }

            let parent = entry
                .path()
                .parent()
                .and_then(Path::file_name)
                .and_then(|name| name.to_str());
            if let Some(top) = parent.and_then(|name| index.entries.get_mut(name)) {
                top.files.push(entry.into_path());
            }
        }

        tracing::debug!(
            "Indexed {} solution entries under {:?}",
            index.entries.len(),
            root
        );

        Ok(index)
    }

    fn matches(&self, frontend_id: u32) -> impl Iterator<Item = &SolutionEntry> {
        let prefix = padded_id(frontend_id);
        self.entries
            .range(prefix.clone()..)
            .take_while(move |(name, _)| name.starts_with(&prefix))
            .map(|(_, entry)| entry)
    }

    /// Top-level entries whose name begins with the padded frontend id; empty when none
    pub fn find_solutions(&self, frontend_id: u32) -> Vec<&Path> {
        self.matches(frontend_id)
            .map(|entry| entry.path.as_path())
            .collect()
    }

    /// Whether at least one entry exists for the problem
    pub fn has_solution(&self, frontend_id: u32) -> bool {
        self.matches(frontend_id).next().is_some()
    }

    /// Recognized (language, approach) files for the problem, in name order
    pub fn solution_files(&self, frontend_id: u32) -> Vec<SolutionFile> {
        self.matches(frontend_id)
            .flat_map(|entry| entry.files.iter())
            .filter_map(|path| SolutionFile::parse(path))
            .filter(|file| file.frontend_id == frontend_id)
            .collect()
    }
}
