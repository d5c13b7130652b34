//! Spreadsheet annotation model

use std::collections::HashMap;

use crate::constants::{columns, APPROACH_SEPARATOR};
use crate::error::{AppError, AppResult};

/// One raw spreadsheet record: column header to cell text
pub type Record = HashMap<String, String>;

/// Complexity notes and approach names for one problem.
///
/// Row `n` (0-indexed) belongs to frontend id `n + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationRow {
    pub time: String,
    pub space: String,
    pub ways: String,
}

/// One named approach with its complexities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approach<'a> {
    /// 1-based approach index
    pub index: u32,
    pub name: &'a str,
    pub time: &'a str,
    pub space: &'a str,
}

impl AnnotationRow {
    /// Decode a raw record, failing when a required column is absent
    pub fn from_record(position: usize, record: &Record) -> AppResult<Self> {
        let column = |name: &str| {
            record.get(name).cloned().ok_or_else(|| {
                AppError::Schema(format!(
                    "annotation row {} is missing column '{}'",
                    position + 1,
                    name
                ))
            })
        };

        Ok(Self {
            time: column(columns::TIME)?,
            space: column(columns::SPACE)?,
            ways: column(columns::WAYS)?,
        })
    }

    pub fn time_complexities(&self) -> Vec<&str> {
        self.time.split(APPROACH_SEPARATOR).collect()
    }

    pub fn space_complexities(&self) -> Vec<&str> {
        self.space.split(APPROACH_SEPARATOR).collect()
    }

    pub fn ways(&self) -> Vec<&str> {
        self.ways.split(APPROACH_SEPARATOR).collect()
    }

    /// Whether the row names more than one approach
    pub fn has_multiple_approaches(&self) -> bool {
        self.ways().len() > 1
    }

    /// Approaches zipped across the three columns, stopping at the shortest
    pub fn approaches(&self) -> Vec<Approach<'_>> {
        self.ways()
            .into_iter()
            .zip(self.time_complexities())
            .zip(self.space_complexities())
            .enumerate()
            .map(|(i, ((name, time), space))| Approach {
                index: i as u32 + 1,
                name,
                time,
                space,
            })
            .collect()
    }
}

/// Row belonging to `frontend_id`, by position
pub fn row_for(rows: &[AnnotationRow], frontend_id: u32) -> Option<&AnnotationRow> {
    let position = (frontend_id as usize).checked_sub(1)?;
    rows.get(position)
}
