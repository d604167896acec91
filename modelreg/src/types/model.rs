//! モデルレコード型
//!
//! レジストリファイルに保存されるモデル/バージョン情報と、登録・切替操作の
//! リクエスト/結果型。
//!
//! 永続化フィールド名は既存の `model-registry.json` と互換性を保つため
//! PascalCase（`ModelName`, `CurrentModelId`, ...）で出力する。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 1つのモデル名に対応するレコード
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ModelRecord {
    /// モデル名（レジストリのキー、作成後は不変）
    pub model_name: String,
    /// 現在アクティブなモデルID
    pub current_model_id: String,
    /// 作成日時
    pub created_at: DateTime<Utc>,
    /// 最終更新日時
    pub updated_at: DateTime<Utc>,
    /// 登録順のバージョン履歴
    #[serde(default)]
    pub versions: Vec<VersionRecord>,
}

impl ModelRecord {
    /// 最初のバージョンを持つレコードを作成
    ///
    /// 作成とバージョン追加を同時に行うため、`versions` が空のレコードは作れない。
    pub fn new(model_name: impl Into<String>, first: VersionRecord) -> Self {
        Self {
            model_name: model_name.into(),
            current_model_id: first.model_id.clone(),
            created_at: first.created_at,
            updated_at: first.created_at,
            versions: vec![first],
        }
    }

    /// 新しいバージョンを追加してアクティブにする
    pub fn push_version(&mut self, version: VersionRecord) {
        self.current_model_id = version.model_id.clone();
        self.updated_at = version.created_at;
        self.versions.push(version);
    }

    /// ラベルに一致する最初のバージョンを取得
    pub fn find_version(&self, label: &str) -> Option<&VersionRecord> {
        self.versions.iter().find(|v| v.version == label)
    }

    /// 指定バージョンがアクティブかどうか
    pub fn is_active(&self, version: &VersionRecord) -> bool {
        version.model_id == self.current_model_id
    }

    /// 次に払い出すバージョンラベル
    pub fn next_version_label(&self) -> String {
        version_label(self.versions.len() + 1)
    }

    /// 不変条件を検証する（読み込み時に使用）
    ///
    /// 失敗時は違反内容を返す。
    pub fn validate(&self, key: &str) -> Result<(), String> {
        if self.model_name != key {
            return Err(format!("ModelName '{}' does not match its key", self.model_name));
        }
        if self.versions.is_empty() {
            return Err("no versions recorded".to_string());
        }
        if !self.versions.iter().any(|v| self.is_active(v)) {
            return Err(format!(
                "CurrentModelId '{}' does not match any version",
                self.current_model_id
            ));
        }
        Ok(())
    }
}

/// 1回の登録イベントに対応するバージョン情報
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct VersionRecord {
    /// バージョンラベル（"1.0", "2.0", ...）
    pub version: String,
    /// 外部サービスが発行したモデルID
    pub model_id: String,
    /// 説明（空文字可）
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// 登録日時
    pub created_at: DateTime<Utc>,
}

impl VersionRecord {
    /// 新しいバージョン情報を作成
    pub fn new(
        version: impl Into<String>,
        model_id: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version: version.into(),
            model_id: model_id.into(),
            description: description.into(),
            created_at,
        }
    }
}

/// N番目の登録に対応するラベル（1始まり）
pub fn version_label(ordinal: usize) -> String {
    format!("{ordinal}.0")
}

// 既存ファイルでは Description が null の場合がある
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// モデル登録リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    /// モデル名
    pub model_name: String,
    /// 外部サービスのモデルID
    pub model_id: String,
    /// 説明
    pub description: String,
    /// 呼び出し側が希望するバージョンラベル
    ///
    /// ラベルは常にレジストリが払い出すため、この値は採用されない。
    pub version: Option<String>,
}

impl RegisterRequest {
    /// 説明なしのリクエストを作成
    pub fn new(model_name: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            model_id: model_id.into(),
            description: String::new(),
            version: None,
        }
    }

    /// 説明を設定
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// 希望バージョンラベルを設定
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// 登録結果の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStatus {
    /// 新しいモデル名として作成
    Created,
    /// 既存モデルにバージョンを追加
    Appended,
}

/// 登録結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// モデル名
    pub model_name: String,
    /// 払い出されたバージョンラベル
    pub version: String,
    /// 登録したモデルID
    pub model_id: String,
    /// 作成/追加
    pub status: RegisterStatus,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✓ Model '{}' version {} registered with ID: {}",
            self.model_name, self.version, self.model_id
        )
    }
}

/// アクティブバージョン切替結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// モデル名
    pub model_name: String,
    /// アクティブになったバージョンラベル
    pub version: String,
    /// アクティブになったモデルID
    pub model_id: String,
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "✓ Set active version of '{}' to {} (Model ID: {})",
            self.model_name, self.version, self.model_id
        )
    }
}
