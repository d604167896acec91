//! ロギング初期化
//!
//! ログは stderr に出力し、stdout はコマンドの出力専用にする。

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// ログフィルタを組み立てる
pub fn build_filter(level: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid log filter: {level}"))
}

/// グローバルサブスクライバーを初期化する
///
/// `level` は [`RegistryConfig::log_level`](crate::config::RegistryConfig::log_level)。
pub fn init(level: &str) -> anyhow::Result<()> {
    let filter = build_filter(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
