//! CLI module for modelreg
//!
//! Provides the command-line interface for the model version registry.

pub mod get_model;
pub mod list_models;
pub mod register;
pub mod set_active;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::registry::ModelRegistry;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Model version registry - track which model IDs exist under which name
#[derive(Parser, Debug)]
#[command(name = "modelreg")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    MODELREG_REGISTRY_FILE  Registry file path (default: model-registry.json)
    MODELREG_LOG_LEVEL      Log filter (default: warn)
"#)]
pub struct Cli {
    /// Registry file path (overrides MODELREG_REGISTRY_FILE)
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a model ID under a name (appends a new version if the name exists)
    Register(register::RegisterArgs),
    /// Print the model ID for a name (active version unless one is given)
    GetModel(get_model::GetModelArgs),
    /// Make an existing version the active one
    SetActive(set_active::SetActiveArgs),
    /// List all registered models and their versions
    ListModels(list_models::ListModelsArgs),
}

/// Run a parsed command line, writing command output to `out`
///
/// `--registry` が指定されていれば `config` のパスより優先する。
pub fn run(cli: Cli, config: RegistryConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let config = config.with_registry_path(cli.registry);
    tracing::debug!(path = %config.registry_path.display(), "Opening model registry");
    let mut registry = ModelRegistry::open(&config.registry_path)?;

    match cli.command {
        Commands::Register(args) => register::execute(&args, &mut registry, out),
        Commands::GetModel(args) => get_model::execute(&args, &registry, out),
        Commands::SetActive(args) => set_active::execute(&args, &mut registry, out),
        Commands::ListModels(args) => list_models::execute(&args, &registry, out),
    }
}

/// Process exit status for a failed command
///
/// 参照失敗（未登録のモデル/バージョン）は 2、それ以外は 1。
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<RegistryError>() {
        Some(e) if e.is_not_found() => 2,
        _ => 1,
    }
}
