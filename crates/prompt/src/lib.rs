//! Prompt catalog, validation and diffing for PromptGuard.
//!
//! This crate provides:
//! - YAML-based, versioned prompt definitions (`<root>/<name>/<version>.yaml`)
//! - Catalog listing and `name@version` resolution
//! - A rule-based validator reporting errors and warnings
//! - A structural diff between two versions of a prompt
//! - Helpers to scaffold prompts and clone-and-bump versions
//!
//! Every operation takes the prompts root explicitly; nothing here discovers it.

pub mod batch;
pub mod catalog;
pub mod diff;
pub mod loader;
pub mod reference;
pub mod types;
pub mod validator;
pub mod versioning;

// Re-export main types
pub use batch::{collect_prompt_files, validate_catalog, validate_files, BatchSummary, FileReport};
pub use diff::{diff, DiffRecord, DiffSection, PromptDiff};
pub use loader::{load_file, parse, render, write_file};
pub use reference::{resolve, PromptRef};
pub use types::{GenerationParameters, Policy, PromptDefinition};
pub use validator::{validate, ValidationResult};
pub use versioning::{bump_version, create_prompt, create_version, BumpKind};
