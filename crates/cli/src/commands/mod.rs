//! Command handlers for the `pg` CLI.
//!
//! Each command resolves the prompts root from the loaded config and hands it
//! to the prompt crate; rendering happens here.

pub mod catalog;
pub mod diff;
pub mod validate;

// Re-export command types for convenience
pub use catalog::{BumpCommand, ListCommand, NewCommand, ShowCommand};
pub use diff::DiffCommand;
pub use validate::ValidateCommand;
