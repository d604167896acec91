//! Model version registry
//!
//! 文書処理サービスが発行するモデルIDを、人が付けたモデル名とバージョン履歴に
//! 対応付けて保存する。

#![warn(missing_docs)]

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// エラー型
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// モデルバージョンレジストリ本体
pub mod registry;

/// 型定義
pub mod types;

pub use error::{NotFoundError, PersistenceError, RegistryError, RegistryResult};
pub use registry::ModelRegistry;
pub use types::{Activation, ModelRecord, RegisterRequest, Registration, VersionRecord};
