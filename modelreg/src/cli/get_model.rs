//! get-model サブコマンド
//!
//! モデル名（と任意のバージョン）からモデルIDを表示します。

use crate::registry::ModelRegistry;
use clap::Args;
use std::io::Write;

/// get-model サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct GetModelArgs {
    /// Model name
    pub model_name: String,

    /// Version label (defaults to the active version)
    pub version: Option<String>,
}

/// Execute the get-model command
pub fn execute(
    args: &GetModelArgs,
    registry: &ModelRegistry,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let model_id = registry.get_model_id(&args.model_name, args.version.as_deref())?;
    writeln!(out, "Model ID: {model_id}")?;
    Ok(())
}
