//! list-models サブコマンド
//!
//! 登録済みモデルとバージョン履歴を表示します。

use crate::registry::ModelRegistry;
use clap::Args;
use std::io::Write;

/// list-models サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ListModelsArgs {
    /// Print the records as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Execute the list-models command
pub fn execute(
    args: &ListModelsArgs,
    registry: &ModelRegistry,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &registry.records())?;
        writeln!(out)?;
    } else {
        write!(out, "{}", registry.list_models())?;
    }
    Ok(())
}
