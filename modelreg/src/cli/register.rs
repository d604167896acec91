//! register サブコマンド
//!
//! モデルIDをモデル名の新しいバージョンとして登録します。

use crate::registry::ModelRegistry;
use crate::types::RegisterRequest;
use clap::Args;
use std::io::Write;

/// register サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct RegisterArgs {
    /// Model name
    pub model_name: String,

    /// Model ID issued by the document-processing service
    pub model_id: String,

    /// Free-text description of this version
    #[arg(short, long, default_value = "")]
    pub description: String,
}

/// Execute the register command
pub fn execute(
    args: &RegisterArgs,
    registry: &mut ModelRegistry,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let request = RegisterRequest::new(&args.model_name, &args.model_id)
        .with_description(&args.description);
    let registration = registry.register(request)?;
    writeln!(out, "{registration}")?;
    Ok(())
}
