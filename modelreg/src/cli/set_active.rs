//! set-active サブコマンド

use crate::registry::ModelRegistry;
use clap::Args;
use std::io::Write;

/// set-active サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct SetActiveArgs {
    /// Model name
    pub model_name: String,

    /// Version label to activate (e.g. 1.0)
    pub version: String,
}

/// Execute the set-active command
pub fn execute(
    args: &SetActiveArgs,
    registry: &mut ModelRegistry,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let activation = registry.set_active_version(&args.model_name, &args.version)?;
    writeln!(out, "{activation}")?;
    Ok(())
}
