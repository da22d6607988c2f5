//! `name@version` references and their resolution against a prompts root.

use crate::{catalog, loader, types::PromptDefinition};
use promptguard_core::{AppError, AppResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A reference to one prompt version, written `name@version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptRef {
    pub name: String,
    pub version: String,
}

impl PromptRef {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parse a reference token.
    ///
    /// The token must contain exactly one `@`, with a non-empty segment on
    /// each side.
    pub fn parse(text: &str) -> AppResult<Self> {
        let malformed = || AppError::MalformedReference(text.to_string());

        let (name, version) = text.split_once('@').ok_or_else(malformed)?;
        if name.is_empty() || version.is_empty() || version.contains('@') {
            return Err(malformed());
        }

        Ok(Self::new(name, version))
    }

    /// File this reference points at under `root`.
    pub fn file_path(&self, root: &Path) -> PathBuf {
        catalog::file_path(root, &self.name, &self.version)
    }
}

impl FromStr for PromptRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PromptRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Load the definition a reference points at.
///
/// Fails with `NotFound` (carrying the attempted path) when the version file
/// is absent; parse failures propagate unchanged.
pub fn resolve(reference: &PromptRef, root: &Path) -> AppResult<PromptDefinition> {
    let path = reference.file_path(root);

    if !path.is_file() {
        return Err(AppError::NotFound {
            reference: reference.to_string(),
            path,
        });
    }

    loader::load_file(&path)
}
