//! Page generation service
//!
//! Merges catalog entries, problem details, annotations and local solution
//! files into one Markdown page per problem. Pages are written by a bounded
//! pool of workers; each worker owns a distinct output file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::{
    clients::ProblemDetailSource,
    error::{AppError, AppResult},
    models::{languages, padded_id, row_for, AnnotationRow, Language, ProblemDetail, StatStatusEntry},
    services::solution_service::SolutionIndex,
    utils::badges::{difficulty_badge, sentiment_emoji, tag_chips},
};

/// Source code of one (approach, language) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub approach: u32,
    pub language: &'static Language,
    pub code: String,
}

/// Everything needed to render one page
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub frontend_id: u32,
    pub link: String,
    pub detail: &'a ProblemDetail,
    pub annotation: Option<&'a AnnotationRow>,
    /// `None` when the problem has no solution files at all
    pub code: Option<&'a [CodeBlock]>,
}

/// What a single worker wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Header plus complexity and code sections
    Full,
    /// Title, difficulty and tags only
    HeaderOnly,
}

/// Counts from a page generation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageReport {
    pub written: usize,
    pub header_only: usize,
    pub not_found: usize,
}

/// Page generator shared by all workers
#[derive(Clone)]
pub struct PageGenerator {
    details: Arc<dyn ProblemDetailSource>,
    solutions: Arc<SolutionIndex>,
    annotations: Arc<Vec<AnnotationRow>>,
    problems_dir: PathBuf,
    problem_url: String,
}

impl PageGenerator {
    pub fn new(
        details: Arc<dyn ProblemDetailSource>,
        solutions: Arc<SolutionIndex>,
        annotations: Arc<Vec<AnnotationRow>>,
        problems_dir: PathBuf,
        problem_url: String,
    ) -> Self {
        Self {
            details,
            solutions,
            annotations,
            problems_dir,
            problem_url,
        }
    }

    /// Output path of a problem's page
    pub fn page_path(&self, frontend_id: u32) -> PathBuf {
        self.problems_dir.join(format!("{}.md", padded_id(frontend_id)))
    }

    /// Write every page with at most `workers` in flight.
    ///
    /// A missing problem only skips its own page. Any other failure stops the
    /// outstanding workers and is returned; pages already written stay on disk.
    pub async fn write_pages(
        &self,
        entries: &[StatStatusEntry],
        workers: usize,
    ) -> AppResult<PageReport> {
        let permits = Arc::new(Semaphore::new(workers.max(1)));
        let mut join_set = JoinSet::new();

        for entry in entries {
            let generator = self.clone();
            let entry = entry.clone();
            let permits = Arc::clone(&permits);

            join_set.spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|e| AppError::Internal(anyhow!("worker pool closed: {}", e)))?;
                let result = generator.write_page(&entry).await;
                match &result {
                    Err(e) if e.is_fatal() => {
                        tracing::error!("Page {} failed: {}", entry.frontend_id(), e)
                    }
                    Err(e) => tracing::warn!("Skipping page {}: {}", entry.frontend_id(), e),
                    Ok(_) => {}
                }
                result
            });
        }

        let mut report = PageReport::default();
        while let Some(joined) = join_set.join_next().await {
            let result = joined
                .map_err(|e| AppError::Internal(anyhow!("page worker failed to join: {}", e)))?;

            match result {
                Ok(PageOutcome::Full) => report.written += 1,
                Ok(PageOutcome::HeaderOnly) => {
                    report.written += 1;
                    report.header_only += 1;
                }
                Err(e) if !e.is_fatal() => report.not_found += 1,
                Err(e) => {
                    join_set.abort_all();
                    return Err(e);
                }
            }
        }

        tracing::info!(
            "Wrote {} pages ({} without solutions), {} problems not found",
            report.written,
            report.header_only,
            report.not_found
        );

        Ok(report)
    }

    /// Fetch, merge and write one page
    pub async fn write_page(&self, entry: &StatStatusEntry) -> AppResult<PageOutcome> {
        let frontend_id = entry.frontend_id();
        let detail = self.details.fetch_detail(entry.slug()).await?;
        tracing::info!("Write {}. {}...", frontend_id, detail.title);

        let code = if self.solutions.has_solution(frontend_id) {
            Some(self.load_code(frontend_id).await?)
        } else {
            None
        };

        let annotation = row_for(&self.annotations, frontend_id);
        if code.is_some() && annotation.is_none() {
            tracing::warn!("No annotation row for problem {}", frontend_id);
        }

        let view = PageView {
            frontend_id,
            link: format!("{}/{}", self.problem_url, entry.slug()),
            detail: &detail,
            annotation,
            code: code.as_deref(),
        };

        let page = render_page(&view);
        tokio::fs::write(self.page_path(frontend_id), page).await?;

        Ok(if code.is_some() {
            PageOutcome::Full
        } else {
            PageOutcome::HeaderOnly
        })
    }

    /// Read every recognized solution file; the first file per (approach, language) wins
    async fn load_code(&self, frontend_id: u32) -> AppResult<Vec<CodeBlock>> {
        let mut blocks: Vec<CodeBlock> = Vec::new();

        for file in self.solutions.solution_files(frontend_id) {
            if blocks
                .iter()
                .any(|b| b.approach == file.approach && b.language == file.language)
            {
                continue;
            }

            blocks.push(CodeBlock {
                approach: file.approach,
                language: file.language,
                code: read_source(&file.path).await?,
            });
        }

        Ok(blocks)
    }
}

/// Read a source file with line endings normalized to `\n`
async fn read_source(path: &Path) -> AppResult<String> {
    let code = tokio::fs::read_to_string(path).await?;
    Ok(code.replace("\r\n", "\n"))
}

/// Render a complete page
pub fn render_page(view: &PageView<'_>) -> String {
    let mut page = String::new();

    let mut title = format!(
        "# [{}. {}]({})",
        view.frontend_id, view.detail.title, view.link
    );
    let emoji = sentiment_emoji(view.detail.likes, view.detail.dislikes);
    if !emoji.is_empty() {
        title.push(' ');
        title.push_str(emoji);
    }
    push_block(&mut page, &title);
    push_block(&mut page, &difficulty_badge(&view.detail.difficulty));
    push_block(&mut page, &tag_chips(view.detail.tag_names()));

    let Some(code) = view.code else {
        return page;
    };

    match view.annotation {
        Some(row) if row.has_multiple_approaches() => {
            for approach in row.approaches() {
                page.push_str(&format!("## Approach {}: {}\n\n", approach.index, approach.name));
                push_complexities(&mut page, approach.time, approach.space);
                push_code(&mut page, code, approach.index);
            }
        }
        Some(row) => {
            let times = row.time_complexities();
            let spaces = row.space_complexities();
            push_complexities(&mut page, times[0], spaces[0]);
            push_code(&mut page, code, 1);
        }
        None => push_code(&mut page, code, 1),
    }

    page
}

fn push_block(page: &mut String, block: &str) {
    page.push_str(block);
    page.push_str("\n\n");
}

fn push_complexities(page: &mut String, time: &str, space: &str) {
    page.push_str(&format!("- [x] **Time:** {}\n", time));
    page.push_str(&format!("- [x] **Space:** {}\n", space));
    page.push('\n');
}

/// One tabbed, indented code block per language that has a file for `approach`
fn push_code(page: &mut String, code: &[CodeBlock], approach: u32) {
    for language in languages::ALL {
        let Some(block) = code
            .iter()
            .find(|b| b.approach == approach && b.language == language)
        else {
            continue;
        };

        page.push_str(&format!("=== \"{}\"\n\n", language.tab));
        page.push_str(&format!("    ```{}\n", language.fence));
        for line in block.code.split_inclusive('\n') {
            page.push_str("    ");
            page.push_str(line);
        }
        page.push('\n');
        page.push_str("    ```\n\n");
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::clients::leetcode::MockProblemDetailSource;
    use crate::models::{Catalog, TopicTag};
    use crate::services::catalog_service::{fixtures, CatalogService};

    fn detail(title: &str, likes: u64, dislikes: u64) -> ProblemDetail {
        ProblemDetail {
            title: title.to_string(),
            difficulty: "Easy".to_string(),
            likes,
            dislikes,
            topic_tags: vec![
                TopicTag { name: "Array".to_string() },
                TopicTag { name: "Interactive".to_string() },
            ],
        }
    }

    fn annotation(time: &str, space: &str, ways: &str) -> AnnotationRow {
        AnnotationRow {
            time: time.to_string(),
            space: space.to_string(),
            ways: ways.to_string(),
        }
    }

    fn block(approach: u32, language: &'static Language, code: &str) -> CodeBlock {
        CodeBlock {
            approach,
            language,
            code: code.to_string(),
        }
    }

    fn catalog(ids: &[u32]) -> Catalog {
        let pairs = ids
            .iter()
            .map(|id| fixtures::pair(*id, &format!("slug-{}", id), 1))
            .collect();
        CatalogService::parse_catalog(&fixtures::catalog_body(pairs, ids.len() as u32)).unwrap()
    }

    fn mock_details() -> MockProblemDetailSource {
        let mut details = MockProblemDetailSource::new();
        details.expect_fetch_detail().returning(|slug| {
            if slug == "slug-404" {
                Err(AppError::DetailNotFound(slug.to_string()))
            } else {
                Ok(detail(&format!("Title {}", slug), 8, 2))
            }
        });
        details
    }

    #[test]
    fn test_render_header_only() {
        let detail = detail("Two Sum", 8, 2);
        let view = PageView {
            frontend_id: 1,
            link: "https://leetcode.com/problems/two-sum".to_string(),
            detail: &detail,
            annotation: None,
            code: None,
        };

        assert_eq!(
            render_page(&view),
            "# [1. Two Sum](https://leetcode.com/problems/two-sum) :thumbsup:\n\n\
             ![](https://img.shields.io/badge/-Easy-00a690.svg?style=for-the-badge)\n\n\
             ![](https://img.shields.io/badge/-Array-0093dd.svg?style=flat-square)\n\n"
        );
    }

    #[test]
    fn test_render_single_approach() {
        let detail = detail("Two Sum", 5, 5);
        let row = annotation("O(n)", "O(1)", "Brute Force");
        let code = vec![
            block(1, &languages::PYTHON, "class Solution:\n  pass\n"),
            block(1, &languages::CPP, "class Solution {};\n"),
        ];
        let view = PageView {
            frontend_id: 1,
            link: "https://leetcode.com/problems/two-sum".to_string(),
            detail: &detail,
            annotation: Some(&row),
            code: Some(&code),
        };

        let page = render_page(&view);
        let body = page.split_once("flat-square)\n\n").unwrap().1;

        assert!(page.starts_with("# [1. Two Sum](https://leetcode.com/problems/two-sum)\n\n"));
        assert_eq!(
            body,
            "- [x] **Time:** O(n)\n\
             - [x] **Space:** O(1)\n\
             \n\
             === \"C++\"\n\n    ```cpp\n    class Solution {};\n\n    ```\n\n\
             === \"Python\"\n\n    ```python\n    class Solution:\n      pass\n\n    ```\n\n"
        );
        assert_eq!(page.matches("**Time:**").count(), 1);
        assert!(!page.contains("## Approach"));
    }

    #[test]
    fn test_render_multiple_approaches() {
        let detail = detail("Longest Increasing Subsequence", 1, 0);
        let row = annotation("O(n^2); O(n log n)", "O(n); O(n)", "Brute Force; Optimal");
        let code = vec![
            block(1, &languages::CPP, "dp();"),
            block(2, &languages::CPP, "tails();"),
            block(2, &languages::JAVA, "tails();"),
        ];
        let view = PageView {
            frontend_id: 300,
            link: "https://leetcode.com/problems/longest-increasing-subsequence".to_string(),
            detail: &detail,
            annotation: Some(&row),
            code: Some(&code),
        };

        let page = render_page(&view);
        let (first, second) = page.split_once("## Approach 2: Optimal\n\n").unwrap();

        assert!(first.contains("## Approach 1: Brute Force\n\n- [x] **Time:** O(n^2)\n- [x] **Space:** O(n)\n\n"));
        assert!(first.contains("    dp();\n"));
        assert!(!first.contains("tails();"));
        assert!(second.starts_with("- [x] **Time:** O(n log n)\n- [x] **Space:** O(n)\n\n=== \"C++\""));
        assert!(second.contains("=== \"Java\""));
        assert!(!second.contains("dp();"));
    }

    #[test]
    fn test_render_without_annotation_renders_first_approach() {
        let detail = detail("Two Sum", 0, 0);
        let code = vec![block(1, &languages::JAVA, "class A {}\n"), block(2, &languages::JAVA, "class B {}\n")];
        let view = PageView {
            frontend_id: 1,
            link: "x".to_string(),
            detail: &detail,
            annotation: None,
            code: Some(&code),
        };

        let page = render_page(&view);
        assert!(!page.contains("**Time:**"));
        assert!(page.contains("class A {}"));
        assert!(!page.contains("class B {}"));
    }

    #[tokio::test]
    async fn test_write_pages_merges_sources() {
        let dir = tempfile::tempdir().unwrap();
        let solutions = dir.path().join("solutions");
        let problems = dir.path().join("problems");
        fs::create_dir_all(solutions.join("0001. Two Sum")).unwrap();
        fs::create_dir_all(&problems).unwrap();
        fs::write(solutions.join("0001. Two Sum/0001.py"), "print(1)\n").unwrap();
        fs::write(solutions.join("0001. Two Sum/0001.cpp"), "int main() {}\n").unwrap();
        fs::write(solutions.join("0001. Two Sum/0001-2.cpp"), "int other() {}\n").unwrap();

        let annotations = vec![
            annotation("O(n)", "O(1)", "Brute Force"),
            annotation("O(1)", "O(1)", "Math"),
        ];
        let generator = PageGenerator::new(
            Arc::new(mock_details()),
            Arc::new(SolutionIndex::build(&solutions).unwrap()),
            Arc::new(annotations),
            problems.clone(),
            "https://leetcode.com/problems".to_string(),
        );

        let report = generator
            .write_pages(&catalog(&[1, 2]).entries, 8)
            .await
            .unwrap();
        assert_eq!(
            report,
            PageReport {
                written: 2,
                header_only: 1,
                not_found: 0
            }
        );

        let first = fs::read_to_string(problems.join("0001.md")).unwrap();
        assert!(first.starts_with("# [1. Title slug-1](https://leetcode.com/problems/slug-1) :thumbsup:\n\n"));
        let cpp = first.find("=== \"C++\"").unwrap();
        let python = first.find("=== \"Python\"").unwrap();
        assert!(cpp < python);
        assert!(!first.contains("int other()"));
        assert_eq!(first.matches("**Time:** O(n)").count(), 1);

        let second = fs::read_to_string(problems.join("0002.md")).unwrap();
        assert!(second.ends_with("flat-square)\n\n"));
        assert!(!second.contains("**Time:**"));
    }

    #[tokio::test]
    async fn test_write_pages_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let solutions = dir.path().join("solutions");
        let problems = dir.path().join("problems");
        fs::create_dir_all(&solutions).unwrap();
        fs::create_dir_all(&problems).unwrap();
        fs::write(solutions.join("0001.cpp"), "int main() {}").unwrap();

        let generator = PageGenerator::new(
            Arc::new(mock_details()),
            Arc::new(SolutionIndex::build(&solutions).unwrap()),
            Arc::new(vec![annotation("O(n)", "O(1)", "Brute Force")]),
            problems.clone(),
            "https://leetcode.com/problems".to_string(),
        );
        let entries = catalog(&[1]).entries;

        generator.write_pages(&entries, 2).await.unwrap();
        let first = fs::read(problems.join("0001.md")).unwrap();
        generator.write_pages(&entries, 2).await.unwrap();
        let second = fs::read(problems.join("0001.md")).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_problem_does_not_abort_run() {
        let dir = tempfile::tempdir().unwrap();
        let problems = dir.path().join("problems");
        fs::create_dir_all(&problems).unwrap();

        let generator = PageGenerator::new(
            Arc::new(mock_details()),
            Arc::new(SolutionIndex::default()),
            Arc::new(Vec::new()),
            problems.clone(),
            "https://leetcode.com/problems".to_string(),
        );

        let report = generator
            .write_pages(&catalog(&[1, 404]).entries, 1)
            .await
            .unwrap();

        assert_eq!(report.written, 1);
        assert_eq!(report.not_found, 1);
        assert!(problems.join("0001.md").exists());
        assert!(!problems.join("0404.md").exists());
    }

    #[tokio::test]
    async fn test_fatal_error_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut details = MockProblemDetailSource::new();
        details
            .expect_fetch_detail()
            .returning(|_| Err(AppError::Network("connection refused".to_string())));

        let generator = PageGenerator::new(
            Arc::new(details),
            Arc::new(SolutionIndex::default()),
            Arc::new(Vec::new()),
            dir.path().to_path_buf(),
            "https://leetcode.com/problems".to_string(),
        );

        let err = generator
            .write_pages(&catalog(&[1, 2, 3]).entries, 8)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }

    #[test]
    fn test_page_path() {
        let generator = PageGenerator::new(
            Arc::new(MockProblemDetailSource::new()),
            Arc::new(SolutionIndex::default()),
            Arc::new(Vec::new()),
            PathBuf::from("mkdocs/docs/problems"),
            String::new(),
        );

        assert_eq!(generator.page_path(42), PathBuf::from("mkdocs/docs/problems/0042.md"));
    }
}
