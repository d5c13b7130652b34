//! Progress summary service
//!
//! Counts solved problems per difficulty tier and rewrites the badge block
//! of the project readme in place.

use std::collections::BTreeMap;
use std::path::Path;

use crate::{
    constants::readme::{
        ANCHOR, BADGE_PREFIX, BADGE_SUFFIX, EASY_COLOR, HARD_COLOR, MEDIUM_COLOR, SOLVED_COLOR,
    },
    error::{AppError, AppResult},
    models::{Catalog, DifficultyTier},
    services::solution_service::SolutionIndex,
    utils::badges::format_percentage,
};

/// Solved and total counts for one tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierProgress {
    pub solved: u32,
    pub total: u32,
}

/// Solve progress across the whole catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    tiers: BTreeMap<DifficultyTier, TierProgress>,
    /// Total problem count reported by the catalog
    pub num_total: u32,
}

impl ProgressSummary {
    /// Count catalog entries and solved entries per tier
    pub fn compute(catalog: &Catalog, solutions: &SolutionIndex) -> Self {
        let mut tiers: BTreeMap<DifficultyTier, TierProgress> = DifficultyTier::ALL
            .into_iter()
            .map(|tier| (tier, TierProgress::default()))
            .collect();

        for entry in &catalog.entries {
            let progress = tiers.entry(entry.tier()).or_default();
            progress.total += 1;
            if solutions.has_solution(entry.frontend_id()) {
                progress.solved += 1;
            }
        }

        Self {
            tiers,
            num_total: catalog.num_total,
        }
    }

    pub fn tier(&self, tier: DifficultyTier) -> TierProgress {
        self.tiers.get(&tier).copied().unwrap_or_default()
    }

    pub fn solved(&self) -> u32 {
        self.tiers.values().map(|p| p.solved).sum()
    }

    /// Solved share of `num_total`, in percent
    pub fn percentage(&self) -> f64 {
        if self.num_total == 0 {
            return 0.0;
        }
        self.solved() as f64 / self.num_total as f64 * 100.0
    }

    /// Solved badge followed by the easy, medium and hard badges
    pub fn badge_lines(&self) -> [String; 4] {
        let tier_badge = |tier: DifficultyTier, color: &str| {
            let progress = self.tier(tier);
            format!(
                "{}{}-{}/{}-{}{}",
                BADGE_PREFIX,
                tier.label(),
                progress.solved,
                progress.total,
                color,
                BADGE_SUFFIX
            )
        };

        [
            format!(
                "{}Solved-{}/{}%20=%20{}%25-{}{}",
                BADGE_PREFIX,
                self.solved(),
                self.num_total,
                format_percentage(self.percentage()),
                SOLVED_COLOR,
                BADGE_SUFFIX
            ),
            tier_badge(DifficultyTier::Easy, EASY_COLOR),
            tier_badge(DifficultyTier::Medium, MEDIUM_COLOR),
            tier_badge(DifficultyTier::Hard, HARD_COLOR),
        ]
    }
}

/// Readme service for the progress badge block
pub struct ReadmeService;

impl ReadmeService {
    /// Replace the anchor line and the three tier lines after the blank line below it
    pub fn patch(readme: &str, summary: &ProgressSummary) -> AppResult<String> {
        let mut lines: Vec<String> = readme.split_inclusive('\n').map(String::from).collect();

        let anchor = lines
            .iter()
            .position(|line| line.starts_with(ANCHOR))
            .ok_or_else(|| AppError::AnchorNotFound(format!("no line starts with {}", ANCHOR)))?;

        if anchor + 4 >= lines.len() {
            return Err(AppError::AnchorNotFound(format!(
                "readme ends before the badge block below line {}",
                anchor + 1
            )));
        }

        let [solved, easy, medium, hard] = summary.badge_lines();
        lines[anchor] = solved;
        lines[anchor + 2] = easy;
        lines[anchor + 3] = medium;
        lines[anchor + 4] = hard;

        Ok(lines.concat())
    }

    /// Rewrite the readme at `path` with fresh badges
    pub async fn write_summary(path: &Path, summary: &ProgressSummary) -> AppResult<()> {
        let readme = tokio::fs::read_to_string(path).await?;
        let patched = Self::patch(&readme, summary)?;
        tokio::fs::write(path, patched).await?;

        tracing::info!(
            "Updated {:?}: {}/{} solved ({}%)",
            path,
            summary.solved(),
            summary.num_total,
            format_percentage(summary.percentage())
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::services::catalog_service::{fixtures, CatalogService};

    /// 4 easy, 3 medium, 3 hard; solutions for 2 easy and 1 medium
    fn summary() -> ProgressSummary {
        let levels = [1, 1, 1, 1, 2, 2, 2, 3, 3, 3];
        let pairs = levels
            .iter()
            .enumerate()
            .map(|(i, level)| fixtures::pair(i as u32 + 1, "slug", *level))
            .collect();
        let catalog = CatalogService::parse_catalog(&fixtures::catalog_body(pairs, 10)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        for name in ["0001.cpp", "0002.py", "0005-2.java"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let solutions = SolutionIndex::build(dir.path()).unwrap();

        ProgressSummary::compute(&catalog, &solutions)
    }

    #[test]
    fn test_compute_counts_per_tier() {
        let summary = summary();

        assert_eq!(summary.tier(DifficultyTier::Easy), TierProgress { solved: 2, total: 4 });
        assert_eq!(summary.tier(DifficultyTier::Medium), TierProgress { solved: 1, total: 3 });
        assert_eq!(summary.tier(DifficultyTier::Hard), TierProgress { solved: 0, total: 3 });
        assert_eq!(summary.solved(), 3);
        assert_eq!(format_percentage(summary.percentage()), "30.0");
    }

    #[test]
    fn test_problem_directory_counts_as_solved() {
        let pairs = vec![fixtures::pair(1, "two-sum", 1), fixtures::pair(7, "reverse-integer", 2)];
        let catalog = CatalogService::parse_catalog(&fixtures::catalog_body(pairs, 2)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("0001. Two Sum")).unwrap();
        fs::write(dir.path().join("0001. Two Sum/solution.cpp"), "").unwrap();
        fs::write(dir.path().join("7.cpp"), "").unwrap();
        let solutions = SolutionIndex::build(dir.path()).unwrap();

        let summary = ProgressSummary::compute(&catalog, &solutions);
        assert_eq!(summary.solved(), 1);
        assert_eq!(summary.tier(DifficultyTier::Easy), TierProgress { solved: 1, total: 1 });
        assert_eq!(summary.tier(DifficultyTier::Medium), TierProgress { solved: 0, total: 1 });
    }

    #[test]
    fn test_badge_lines() {
        let [solved, easy, medium, hard] = summary().badge_lines();

        assert_eq!(
            solved,
            "<img src=\"https://img.shields.io/badge/Solved-3/10%20=%2030.0%25-blue.svg?style=flat-square\" />\n"
        );
        assert_eq!(
            easy,
            "<img src=\"https://img.shields.io/badge/Easy-2/4-5CB85D.svg?style=flat-square\" />\n"
        );
        assert!(medium.contains("Medium-1/3-F0AE4E"));
        assert!(hard.contains("Hard-0/3-D95450"));
    }

    #[test]
    fn test_patch_replaces_badge_block() {
        let readme = "# Solutions\n\
                      <img src=\"https://img.shields.io/badge/Solved-0/0%20=%200.0%25-blue.svg?style=flat-square\" />\n\
                      \n\
                      old easy\n\
                      old medium\n\
                      old hard\n\
                      ## Footer\n";

        let patched = ReadmeService::patch(readme, &summary()).unwrap();
        let lines: Vec<&str> = patched.lines().collect();

        assert_eq!(lines[0], "# Solutions");
        assert!(lines[1].contains("Solved-3/10%20=%2030.0%25"));
        assert_eq!(lines[2], "");
        assert!(lines[3].contains("Easy-2/4"));
        assert!(lines[4].contains("Medium-1/3"));
        assert!(lines[5].contains("Hard-0/3"));
        assert_eq!(lines[6], "## Footer");
    }

    #[test]
    fn test_patch_without_anchor_fails() {
        let err = ReadmeService::patch("# Solutions\n\nnothing here\n", &summary()).unwrap_err();
        assert!(matches!(err, AppError::AnchorNotFound(_)));
    }

    #[test]
    fn test_patch_with_truncated_block_fails() {
        let readme = "<img src=\"https://img.shields.io/badge/Solved-1/1\" />\n\nonly easy\n";
        let err = ReadmeService::patch(readme, &summary()).unwrap_err();
        assert!(matches!(err, AppError::AnchorNotFound(_)));
    }

    #[tokio::test]
    async fn test_write_summary_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        tokio::fs::write(
            &path,
            "<img src=\"https://img.shields.io/badge/Solved\" />\n\na\nb\nc\n",
        )
        .await
        .unwrap();

        ReadmeService::write_summary(&path, &summary()).await.unwrap();

        let readme = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(readme.starts_with("<img src=\"https://img.shields.io/badge/Solved-3/10"));
        assert!(readme.ends_with("Hard-0/3-D95450.svg?style=flat-square\" />\n"));
    }
}
