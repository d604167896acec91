//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! 呼び出し側が「未登録なので登録を促す」か「致命的エラーとして扱う」かを
//! 判断できるよう、参照失敗（[`NotFoundError`]）と永続化失敗
//! （[`PersistenceError`]）を別の型として区別する。

use std::path::PathBuf;
use thiserror::Error;

/// Lookup failure: the model name or version label is not registered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotFoundError {
    /// モデル名が未登録
    #[error("Model '{0}' not found in registry")]
    Model(String),

    /// モデルは存在するが指定バージョンが無い
    #[error("Version {version} not found for model '{model}'")]
    Version {
        /// モデル名
        model: String,
        /// 要求されたバージョンラベル
        version: String,
    },
}

/// Snapshot file could not be read, parsed, or written.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Read error
    #[error("Failed to read registry file {}: {source}", .path.display())]
    Read {
        /// 対象ファイル
        path: PathBuf,
        /// 原因
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or unexpected shape
    #[error("Failed to parse registry file {}: {source}", .path.display())]
    Parse {
        /// 対象ファイル
        path: PathBuf,
        /// 原因
        #[source]
        source: serde_json::Error,
    },

    /// JSONとしては正しいがレコードの不変条件を満たさない
    #[error("Invalid entry '{model}' in registry file {}: {reason}", .path.display())]
    Invalid {
        /// 対象ファイル
        path: PathBuf,
        /// 問題のあるモデル名（マップのキー）
        model: String,
        /// 違反内容
        reason: String,
    },

    /// Serialization error
    #[error("Failed to serialize registry: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Write error
    #[error("Failed to write registry file {}: {source}", .path.display())]
    Write {
        /// 対象ファイル
        path: PathBuf,
        /// 原因
        #[source]
        source: std::io::Error,
    },
}

/// Model registry error type
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Lookup failure (recoverable)
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Persistence failure (fatal for the triggering operation)
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl RegistryError {
    /// 参照失敗かどうか
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// 永続化失敗かどうか
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    pub(crate) fn model_not_found(model: &str) -> Self {
        NotFoundError::Model(model.to_string()).into()
    }

    pub(crate) fn version_not_found(model: &str, version: &str) -> Self {
        NotFoundError::Version {
            model: model.to_string(),
            version: version.to_string(),
        }
        .into()
    }
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
