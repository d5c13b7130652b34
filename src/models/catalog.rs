//! Problem catalog model
//!
//! Mirrors the body of the catalog endpoint. Required fields carry no serde
//! defaults, so a record missing one fails to decode.

use serde::{Deserialize, Serialize};

/// Full catalog response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub user_name: String,
    pub num_solved: u32,
    pub num_total: u32,
    pub ac_easy: u32,
    pub ac_medium: u32,
    pub ac_hard: u32,
    pub stat_status_pairs: Vec<StatStatusEntry>,
    pub frequency_high: f64,
    pub frequency_mid: f64,
    pub category_slug: String,
}

/// One catalog record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemStat {
    pub question_id: u32,
    #[serde(rename = "question__title")]
    pub title: String,
    #[serde(rename = "question__title_slug")]
    pub title_slug: String,
    #[serde(rename = "question__hide")]
    pub hidden: bool,
    pub total_acs: u64,
    pub total_submitted: u64,
    pub frontend_question_id: u32,
    pub is_new_question: bool,
    #[serde(rename = "question__article__live", default)]
    pub article_live: Option<bool>,
    #[serde(rename = "question__article__slug", default)]
    pub article_slug: Option<String>,
    #[serde(rename = "question__article__has_video_solution", default)]
    pub article_has_video_solution: Option<bool>,
}

/// Difficulty classification as reported by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DifficultyTier {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl DifficultyTier {
    /// All tiers in display order
    pub const ALL: [DifficultyTier; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl TryFrom<u8> for DifficultyTier {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            other => Err(format!("unknown difficulty level {}", other)),
        }
    }
}

impl From<DifficultyTier> for u8 {
    fn from(tier: DifficultyTier) -> Self {
        tier as u8
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Wrapper matching the `{"level": n}` shape of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub level: DifficultyTier,
}

/// A catalog record joined with its difficulty and access flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatStatusEntry {
    pub stat: ProblemStat,
    pub status: Option<String>,
    pub difficulty: Difficulty,
    pub paid_only: bool,
    pub is_favor: bool,
    pub frequency: f64,
    pub progress: f64,
}

impl StatStatusEntry {
    /// Stable display identifier, the join key across all sources
    pub fn frontend_id(&self) -> u32 {
        self.stat.frontend_question_id
    }

    pub fn title(&self) -> &str {
        &self.stat.title
    }

    pub fn slug(&self) -> &str {
        &self.stat.title_slug
    }

    pub fn tier(&self) -> DifficultyTier {
        self.difficulty.level
    }
}

/// Sorted catalog handed to the rest of the pipeline
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Entries in strictly ascending frontend id order
    pub entries: Vec<StatStatusEntry>,
    /// Total problem count reported by the catalog
    pub num_total: u32,
}

/// Zero-pad a frontend id to the four digits used in file names
pub fn padded_id(frontend_id: u32) -> String {
    format!("{:04}", frontend_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_id() {
        assert_eq!(padded_id(1), "0001");
        assert_eq!(padded_id(300), "0300");
        assert_eq!(padded_id(2586), "2586");
        assert_eq!(padded_id(12345), "12345");
    }

    #[test]
    fn test_difficulty_tier_from_level() {
        let difficulty: Difficulty = serde_json::from_str(r#"{"level": 2}"#).unwrap();
        assert_eq!(difficulty.level, DifficultyTier::Medium);

        assert!(serde_json::from_str::<Difficulty>(r#"{"level": 4}"#).is_err());
        assert_eq!(u8::from(DifficultyTier::Hard), 3);
    }
}
