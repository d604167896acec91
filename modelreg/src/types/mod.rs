//! 型定義モジュール
//!
//! レジストリが扱うドメイン型を提供

/// モデル/バージョンレコード関連の型定義
pub mod model;

pub use model::{
    Activation, ModelRecord, RegisterRequest, RegisterStatus, Registration, VersionRecord,
};
