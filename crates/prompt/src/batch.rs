//! Validation over many prompt files at once.
//!
//! Each file is loaded and validated on its own: a load or parse failure is
//! recorded in that file's report and the loop moves on.

use crate::catalog::{self, PROMPT_FILE_EXTENSION};
use crate::loader;
use crate::validator::{validate, ValidationResult};
use promptguard_core::{AppError, AppResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of validating one file.
#[derive(Debug)]
pub struct FileReport {
    /// `name@version` when known from the catalog, else the file path
    pub label: String,
    pub path: PathBuf,
    pub outcome: Result<ValidationResult, AppError>,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Ok(ref result) if result.is_valid())
    }
}

/// Tally of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub passed: usize,
    /// Loaded fine but has validation errors
    pub failed: usize,
    /// Could not be loaded at all
    pub errored: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match report.outcome {
                Ok(ref result) if result.is_valid() => summary.passed += 1,
                Ok(_) => summary.failed += 1,
                Err(_) => summary.errored += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.errored > 0
    }
}

/// The file itself, or every `.yaml` file below a directory (sorted).
/// A path that does not exist yields nothing.
pub fn collect_prompt_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    if !path.is_dir() {
        tracing::warn!("Path not found: {:?}", path);
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(PROMPT_FILE_EXTENSION))
        .collect();

    files.sort();
    files
}

/// Load and validate each file independently.
pub fn validate_files(paths: &[PathBuf]) -> Vec<FileReport> {
    paths
        .iter()
        .map(|path| validate_one(path.display().to_string(), path.clone()))
        .collect()
}

/// Validate every version of every prompt in the catalog.
pub fn validate_catalog(root: &Path) -> AppResult<Vec<FileReport>> {
    let mut reports = Vec::new();

    for name in catalog::list_names(root)? {
        for version in catalog::list_versions(root, &name)? {
            let path = catalog::file_path(root, &name, &version);
            reports.push(validate_one(format!("{}@{}", name, version), path));
        }
    }

    Ok(reports)
}

fn validate_one(label: String, path: PathBuf) -> FileReport {
    let outcome = loader::load_file(&path).map(|definition| validate(&definition));

    if let Err(ref e) = outcome {
        tracing::warn!("Failed to load {}: {}", label, e);
    }

    FileReport {
        label,
        path,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    const VALID: &str = "name: a\nversion: 1.0.0\ntemplate: hello\n";
    const INVALID: &str = "name: a\nversion: 1.0.1\ntemplate: ''\n";
    const BROKEN: &str = "name: [a\n";

    #[test]
    fn test_collect_single_file() {
        let temp = TempDir::new().unwrap();
        let file = write(temp.path(), "x.yaml", VALID);
        assert_eq!(collect_prompt_files(&file), vec![file]);
    }

    #[test]
    fn test_collect_recurses_and_filters() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b/1.0.0.yaml", VALID);
        write(temp.path(), "a/deep/er/2.0.0.yaml", VALID);
        write(temp.path(), "a/readme.md", "x");
        write(temp.path(), "a/1.0.0.yml", VALID);

        let files = collect_prompt_files(temp.path());
        assert_eq!(
            files,
            vec![
                temp.path().join("a/deep/er/2.0.0.yaml"),
                temp.path().join("b/1.0.0.yaml"),
            ]
        );
    }

    #[test]
    fn test_collect_missing_path() {
        let temp = TempDir::new().unwrap();
        assert!(collect_prompt_files(&temp.path().join("nope")).is_empty());
    }

    #[test]
    fn test_failures_are_isolated() {
        let temp = TempDir::new().unwrap();
        let files = vec![
            write(temp.path(), "a/1.0.0.yaml", VALID),
            write(temp.path(), "a/1.0.1.yaml", INVALID),
            write(temp.path(), "a/1.0.2.yaml", BROKEN),
            write(temp.path(), "a/1.0.3.yaml", VALID),
        ];

        let reports = validate_files(&files);
        assert_eq!(reports.len(), 4);
        assert!(reports[0].passed());
        assert!(!reports[1].passed());
        assert!(matches!(reports[2].outcome, Err(AppError::Format { .. })));
        assert!(reports[3].passed());

        let summary = BatchSummary::from_reports(&reports);
        assert_eq!(
            summary,
            BatchSummary {
                passed: 2,
                failed: 1,
                errored: 1
            }
        );
        assert_eq!(summary.total(), 4);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_validate_catalog_labels() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "zeta/1.0.0.yaml", VALID);
        write(temp.path(), "alpha/2.0.0.yaml", VALID);
        write(temp.path(), "alpha/10.0.0.yaml", VALID);

        let reports = validate_catalog(temp.path()).unwrap();
        let labels: Vec<&str> = reports.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["alpha@10.0.0", "alpha@2.0.0", "zeta@1.0.0"]);
        assert!(!BatchSummary::from_reports(&reports).has_failures());
    }

    #[test]
    fn test_validate_catalog_missing_root() {
        let temp = TempDir::new().unwrap();
        let reports = validate_catalog(&temp.path().join("missing")).unwrap();
        assert!(reports.is_empty());
    }
}
