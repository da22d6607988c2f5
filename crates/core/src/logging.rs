//! Logging infrastructure for PromptGuard.
//!
//! Initializes the tracing subscriber. All logs go to stderr so stdout stays
//! clean for validation and diff reports.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Filter used when neither `log_level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialize the tracing subscriber with stderr output.
///
/// The filter comes from `log_level` when given, otherwise `RUST_LOG`,
/// otherwise `warn`. Color is disabled by `no_color` or `NO_COLOR`.
///
/// # Example
/// ```no_run
/// use promptguard_core::logging::init_logging;
///
/// init_logging(Some("debug"), false).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> AppResult<()> {
    let default_level =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let filter_str = log_level.unwrap_or(&default_level);

    let env_filter = EnvFilter::try_new(filter_str)
        .map_err(|e| AppError::Config(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(!no_color && supports_color());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))?;

    Ok(())
}

fn supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_hides_info() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_LEVEL).unwrap();
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing::level_filters::LevelFilter::WARN)
        );
    }

    #[test]
    fn test_invalid_filter_is_config_error() {
        let result = init_logging(Some("promptguard=bogus"), true);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
