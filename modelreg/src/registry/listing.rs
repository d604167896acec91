//! 登録済みモデル一覧の表示
//!
//! `list-models` の出力。端末表示専用で、構造化データが必要な場合は
//! [`ModelRegistry::records`](super::ModelRegistry::records) を使う。

use super::snapshot::ModelMap;
use chrono::{DateTime, Utc};
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 登録済みモデルのレポート
#[derive(Debug, Clone, Copy)]
pub struct ModelListing<'a> {
    models: &'a ModelMap,
}

impl<'a> ModelListing<'a> {
    pub(crate) fn new(models: &'a ModelMap) -> Self {
        Self { models }
    }

    /// 表示対象のモデル数
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// モデルが1件も無いか
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

fn utc(ts: &DateTime<Utc>) -> impl fmt::Display + '_ {
    ts.format(TIMESTAMP_FORMAT)
}

impl fmt::Display for ModelListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.models.is_empty() {
            return writeln!(f, "No models registered.");
        }

        writeln!(f, "=== Registered Models ===")?;
        writeln!(f)?;
        for model in self.models.values() {
            writeln!(f, "Model: {}", model.model_name)?;
            writeln!(f, "  Current Model ID: {}", model.current_model_id)?;
            writeln!(f, "  Created: {} UTC", utc(&model.created_at))?;
            writeln!(f, "  Updated: {} UTC", utc(&model.updated_at))?;
            writeln!(f, "  Versions:")?;
            for version in &model.versions {
                let marker = if model.is_active(version) {
                    " (ACTIVE)"
                } else {
                    ""
                };
                writeln!(f, "    - v{}{}", version.version, marker)?;
                writeln!(f, "      Model ID: {}", version.model_id)?;
                if !version.description.is_empty() {
                    writeln!(f, "      Description: {}", version.description)?;
                }
                writeln!(f, "      Created: {} UTC", utc(&version.created_at))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
