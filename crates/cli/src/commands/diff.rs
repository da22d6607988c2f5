//! Diff command handler.
//!
//! Compares two versions of the same prompt, given as `name@version`.

use clap::Args;
use promptguard_core::{config::AppConfig, AppError, AppResult};
use promptguard_prompt::{diff, resolve, PromptRef};

/// Diff two versions of the same prompt
#[derive(Args, Debug)]
pub struct DiffCommand {
    /// Source prompt (name@version)
    pub from: String,

    /// Target prompt (name@version)
    pub to: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl DiffCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing diff command: {} -> {}", self.from, self.to);

        let from_ref = PromptRef::parse(&self.from)?;
        let to_ref = PromptRef::parse(&self.to)?;

        if from_ref.name != to_ref.name {
            return Err(AppError::Prompt(format!(
                "Cannot diff prompts with different names ('{}' vs '{}')",
                from_ref.name, to_ref.name
            )));
        }

        let root = config.prompts_root_path();
        let from = resolve(&from_ref, &root)?;
        let to = resolve(&to_ref, &root)?;

        let result = diff(&from, &to);

        if self.json {
            let output = serde_json::json!({
                "prompt": from_ref.name,
                "from": from_ref.version,
                "to": to_ref.version,
                "differences": result.has_differences(),
                "records": result.records(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!(
                "Prompt: {}  ({} -> {})",
                from_ref.name, from_ref.version, to_ref.version
            );
            println!();
            print!("{}", result);
        }

        Ok(())
    }
}
