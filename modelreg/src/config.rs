//! Configuration management via environment variables
//!
//! レジストリ本体は環境変数を読まない。パスやログレベルはここで解決して
//! 呼び出し側（CLI）から渡す。

use std::path::PathBuf;

/// レジストリファイルの既定パス（カレントディレクトリからの相対）
pub const DEFAULT_REGISTRY_FILE: &str = "model-registry.json";

/// レジストリファイルのパスを上書きする環境変数
pub const REGISTRY_FILE_ENV: &str = "MODELREG_REGISTRY_FILE";

/// ログレベルを指定する環境変数
pub const LOG_LEVEL_ENV: &str = "MODELREG_LOG_LEVEL";

/// ログレベル未指定時に参照する標準の環境変数
pub const RUST_LOG_ENV: &str = "RUST_LOG";

/// 既定のログレベル
///
/// コマンド出力（stdout）を邪魔しないよう warn 以上のみ表示する。
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Get an environment variable, ignoring unset or blank values
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// レジストリ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// レジストリファイルのパス
    pub registry_path: PathBuf,
    /// ログフィルタ（tracing-subscriber の EnvFilter 構文）
    ///
    /// `MODELREG_LOG_LEVEL` > `RUST_LOG` > [`DEFAULT_LOG_LEVEL`]
    pub log_level: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from(DEFAULT_REGISTRY_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            registry_path: PathBuf::from(get_env_or(REGISTRY_FILE_ENV, DEFAULT_REGISTRY_FILE)),
            log_level: get_env(LOG_LEVEL_ENV)
                .or_else(|| get_env(RUST_LOG_ENV))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// コマンドライン引数でパスが指定されていれば上書きする
    pub fn with_registry_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.registry_path = path;
        }
        self
    }
}
