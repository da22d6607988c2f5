//! Creating prompts and new prompt versions.
//!
//! Version files are never overwritten: a target that already exists is
//! refused with `AlreadyExists`.

use crate::types::{PromptDefinition, INITIAL_VERSION};
use crate::validator::validate;
use crate::{catalog, loader};
use promptguard_core::{AppError, AppResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which component of an `X.Y.Z` version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl FromStr for BumpKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(AppError::Prompt(format!(
                "Unknown bump kind: {}. Supported: major, minor, patch",
                other
            ))),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        })
    }
}

/// Next version after `version`.
///
/// Only a plain `X.Y.Z` triple of integers is bumped; anything else, including
/// a component that would overflow, gets a `-copy` suffix instead.
pub fn bump_version(version: &str, kind: BumpKind) -> String {
    semver_bump(version, kind).unwrap_or_else(|| format!("{}-copy", version))
}

fn semver_bump(version: &str, kind: BumpKind) -> Option<String> {
    let parts: Vec<&str> = version.split('.').filter(|p| !p.is_empty()).collect();
    if parts.len() != 3 {
        return None;
    }

    let nums = parts
        .iter()
        .map(|p| p.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;
    let (major, minor, patch) = (nums[0], nums[1], nums[2]);

    Some(match kind {
        BumpKind::Major => format!("{}.0.0", major.checked_add(1)?),
        BumpKind::Minor => format!("{}.{}.0", major, minor.checked_add(1)?),
        BumpKind::Patch => format!("{}.{}.{}", major, minor, patch.checked_add(1)?),
    })
}

/// Scaffold a new prompt at version 1.0.0 and write it.
pub fn create_prompt(root: &Path, name: &str) -> AppResult<PathBuf> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Prompt("Invalid prompt name".to_string()));
    }

    let definition = PromptDefinition::scaffold(name);
    ensure_valid(&definition)?;

    let path = catalog::file_path(root, name, INITIAL_VERSION);
    if path.exists() {
        return Err(AppError::AlreadyExists(path));
    }

    catalog::ensure_directory(root, name)?;
    loader::write_file(&definition, &path)?;

    Ok(path)
}

/// Clone `name@from_version` into the next version and write it.
///
/// Returns the new version and its path.
pub fn create_version(
    root: &Path,
    name: &str,
    from_version: &str,
    kind: BumpKind,
) -> AppResult<(String, PathBuf)> {
    let to_version = bump_version(from_version, kind);

    let from_path = catalog::file_path(root, name, from_version);
    let to_path = catalog::file_path(root, name, &to_version);

    if to_path.exists() {
        return Err(AppError::AlreadyExists(to_path));
    }

    let mut definition = loader::load_file(&from_path)?;
    definition.name = name.to_string();
    definition.version = to_version.clone();

    ensure_valid(&definition)?;
    loader::write_file(&definition, &to_path)?;

    tracing::info!(
        "Created {}@{} from {} ({} bump)",
        name,
        to_version,
        from_version,
        kind
    );

    Ok((to_version, to_path))
}

fn ensure_valid(definition: &PromptDefinition) -> AppResult<()> {
    let result = validate(definition);
    if !result.is_valid() {
        return Err(AppError::Prompt(format!(
            "Cannot create {} due to validation errors: {}",
            definition.label(),
            result.errors.join("; ")
        )));
    }
    Ok(())
}
