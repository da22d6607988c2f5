//! Prompt loader and writer for YAML prompt definitions.

use crate::types::PromptDefinition;
use promptguard_core::{AppError, AppResult};
use std::path::Path;

/// Parse a prompt definition from YAML text.
///
/// Unknown keys are ignored. Missing required fields come back empty for the
/// validator to report. Parse failures are never partially recovered.
pub fn parse(text: &str) -> AppResult<PromptDefinition> {
    serde_yaml::from_str(text).map_err(|e| AppError::Format {
        path: None,
        message: e.to_string(),
    })
}

/// Render a prompt definition to YAML. Unset optional fields are omitted.
pub fn render(definition: &PromptDefinition) -> AppResult<String> {
    Ok(serde_yaml::to_string(definition)?)
}

/// Load a prompt definition from a version file.
///
/// # Example
/// ```no_run
/// use promptguard_prompt::load_file;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let prompt = load_file(Path::new("prompts/invoice.extractor/1.0.0.yaml"))?;
/// println!("Loaded prompt: {}", prompt.label());
/// # Ok(())
/// # }
/// ```
pub fn load_file(path: &Path) -> AppResult<PromptDefinition> {
    tracing::debug!("Loading prompt from: {:?}", path);

    if !path.is_file() {
        return Err(AppError::NotFound {
            reference: path.display().to_string(),
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;

    parse(&contents).map_err(|e| match e {
        AppError::Format { message, .. } => AppError::Format {
            path: Some(path.to_path_buf()),
            message,
        },
        other => other,
    })
}

/// Write a prompt definition as a whole-file write, creating parent
/// directories as needed.
pub fn write_file(definition: &PromptDefinition, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let yaml = render(definition)?;
    std::fs::write(path, yaml)?;

    tracing::info!("Wrote prompt {} to {:?}", definition.label(), path);

    Ok(())
}
