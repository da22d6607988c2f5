//! Prompt catalog: names and versions discovered from the directory layout.
//!
//! Layout: `<root>/<name>/<version>.yaml`. A missing root or prompt directory
//! is not an error; it simply has no entries.

use promptguard_core::AppResult;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of prompt version files.
pub const PROMPT_FILE_EXTENSION: &str = "yaml";

/// List prompt names: immediate subdirectories of `root`, hidden ones
/// excluded, sorted by ordinal string comparison.
/// Names that are not valid UTF-8 are skipped.
pub fn list_names(root: &Path) -> AppResult<Vec<String>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.path().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!("Skipping non UTF-8 directory {:?}", entry.path());
            continue;
        };
        if name.trim().is_empty() || name.starts_with('.') {
            continue;
        }
        names.push(name.to_string());
    }

    names.sort();
    tracing::debug!("Found {} prompt(s) under {:?}", names.len(), root);

    Ok(names)
}

/// List the versions of one prompt: stems of the `.yaml` files directly
/// inside `<root>/<name>/`.
///
/// Sorting is case-insensitive and lexical, not semver-aware: `10.0.0` comes
/// before `2.0.0`.
pub fn list_versions(root: &Path, name: &str) -> AppResult<Vec<String>> {
    let dir = root.join(name);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut versions = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(PROMPT_FILE_EXTENSION) {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if !stem.trim().is_empty() {
                versions.push(stem.to_string());
            }
        }
    }

    versions.sort_by_cached_key(|v| v.to_uppercase());

    Ok(versions)
}

/// Path of a version file. No existence check.
pub fn file_path(root: &Path, name: &str, version: &str) -> PathBuf {
    root.join(name)
        .join(format!("{}.{}", version, PROMPT_FILE_EXTENSION))
}

/// Create `<root>/<name>/` if it does not exist yet.
pub fn ensure_directory(root: &Path, name: &str) -> AppResult<PathBuf> {
    let dir = root.join(name);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
