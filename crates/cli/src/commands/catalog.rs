//! Catalog command handlers: list, show, new and bump.

use clap::Args;
use promptguard_core::{config::AppConfig, AppError, AppResult};
use promptguard_prompt::{catalog, create_prompt, create_version, BumpKind, PromptRef};

/// List prompts, or the versions of one prompt
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Prompt name; lists its versions instead of all prompt names
    pub name: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing list command");

        let root = config.prompts_root_path();

        let (entries, empty_message) = match self.name {
            Some(ref name) => (
                catalog::list_versions(&root, name)?,
                format!("No versions found for '{}'.", name),
            ),
            None => (
                catalog::list_names(&root)?,
                format!("No prompts found under {}.", root.display()),
            ),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else if entries.is_empty() {
            println!("{}", empty_message);
        } else {
            for entry in &entries {
                println!("{}", entry);
            }
        }

        Ok(())
    }
}

/// Print the YAML of one prompt version
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Prompt reference (name@version)
    pub reference: String,
}

impl ShowCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing show command for {}", self.reference);

        let reference = PromptRef::parse(&self.reference)?;
        let path = reference.file_path(&config.prompts_root_path());

        if !path.is_file() {
            return Err(AppError::NotFound {
                reference: reference.to_string(),
                path,
            });
        }

        let content = std::fs::read_to_string(&path)?;
        println!("# {} ({})", reference, path.display());
        print!("{}", content);
        if !content.ends_with('\n') {
            println!();
        }

        Ok(())
    }
}

/// Create a new prompt at version 1.0.0
#[derive(Args, Debug)]
pub struct NewCommand {
    /// Prompt name (folder name, e.g. `my_prompt`)
    pub name: String,
}

impl NewCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing new command for '{}'", self.name);

        let path = create_prompt(&config.prompts_root_path(), &self.name)?;

        println!("✓ Created {}@1.0.0", self.name.trim());
        println!("  {}", path.display());

        Ok(())
    }
}

/// Clone a prompt version into the next version
#[derive(Args, Debug)]
pub struct BumpCommand {
    /// Version to clone from (name@version)
    pub reference: String,

    /// Which version component to bump (major, minor, patch)
    #[arg(short, long, default_value = "patch")]
    pub kind: BumpKind,
}

impl BumpCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing bump command for {}", self.reference);

        let from = PromptRef::parse(&self.reference)?;
        let (version, path) = create_version(
            &config.prompts_root_path(),
            &from.name,
            &from.version,
            self.kind,
        )?;

        println!("✓ Created {}@{} (from {})", from.name, version, from.version);
        println!("  {}", path.display());

        Ok(())
    }
}
