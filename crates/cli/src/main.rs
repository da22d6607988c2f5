//! PromptGuard CLI
//!
//! Main entry point for the `pg` command-line tool.
//! Validates, lists and diffs versioned prompt definitions.

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    BumpCommand, DiffCommand, ListCommand, NewCommand, ShowCommand, ValidateCommand,
};
use promptguard_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;

/// PromptGuard - versioned prompt validation and diffing
#[derive(Parser, Debug)]
#[command(name = "pg")]
#[command(about = "Validate and diff versioned prompt definitions", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: discovered from the current directory)
    #[arg(short, long, global = true, env = "PROMPTGUARD_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "PROMPTGUARD_CONFIG")]
    config: Option<PathBuf>,

    /// Override prompts root directory (absolute or relative to the workspace)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a prompt YAML file, a directory, or the whole catalog
    Validate(ValidateCommand),

    /// Diff two versions of the same prompt
    Diff(DiffCommand),

    /// List prompts, or the versions of one prompt
    List(ListCommand),

    /// Print the YAML of one prompt version
    Show(ShowCommand),

    /// Create a new prompt at version 1.0.0
    New(NewCommand),

    /// Clone a prompt version into the next version
    Bump(BumpCommand),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    // Load base configuration; an explicit workspace or config file decides
    // which config file gets merged
    let config = AppConfig::load_with(cli.workspace.clone(), cli.config.clone())?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.workspace,
        cli.config,
        cli.root,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Prompts root: {:?}", config.prompts_root_path());

    let command_name = match &cli.command {
        Commands::Validate(_) => "validate",
        Commands::Diff(_) => "diff",
        Commands::List(_) => "list",
        Commands::Show(_) => "show",
        Commands::New(_) => "new",
        Commands::Bump(_) => "bump",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Validate(cmd) => cmd.execute(&config),
        Commands::Diff(cmd) => cmd.execute(&config),
        Commands::List(cmd) => cmd.execute(&config),
        Commands::Show(cmd) => cmd.execute(&config),
        Commands::New(cmd) => cmd.execute(&config),
        Commands::Bump(cmd) => cmd.execute(&config),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
