//! PromptGuard Core Library
//!
//! This crate provides the foundational utilities shared by the prompt catalog
//! and the `pg` CLI:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration and workspace discovery

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};
