//! モデルバージョンレジストリ
//!
//! モデル名 → [`ModelRecord`] の対応をメモリ上に保持し、変更のたびに
//! スナップショットファイル全体を書き直す。
//!
//! 1プロセスにつき1インスタンスを生成する前提。構築時にファイルを読み込み、
//! 変更操作は戻る前に必ず永続化する。永続化に失敗した場合はメモリ上の状態を
//! 操作前に戻してエラーを返す。
//!
//! 複数プロセスからの同時実行は保護しない（後勝ち）。詳細は [`snapshot`] を参照。

/// 一覧表示
pub mod listing;

/// スナップショットファイルの読み書き
pub mod snapshot;

use crate::error::{RegistryError, RegistryResult};
use crate::types::model::version_label;
use crate::types::{
    Activation, ModelRecord, RegisterRequest, RegisterStatus, Registration, VersionRecord,
};
use chrono::Utc;
use std::collections::btree_map::Entry;
use std::path::Path;
use tracing::{debug, info, warn};

pub use listing::ModelListing;
pub use snapshot::{ModelMap, SnapshotFile};

/// モデルレジストリ
#[derive(Debug)]
pub struct ModelRegistry {
    file: SnapshotFile,
    models: ModelMap,
}

impl ModelRegistry {
    /// レジストリファイルを読み込んでレジストリを作成
    ///
    /// ファイルが無ければ空のレジストリになる。内容が壊れている場合は
    /// [`RegistryError::Persistence`] を返す。
    pub fn open(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let file = SnapshotFile::new(path.as_ref());
        let models = file.load()?;
        debug!(
            path = %file.path().display(),
            models = models.len(),
            "Loaded model registry"
        );
        Ok(Self { file, models })
    }

    /// レジストリファイルのパス
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// 登録済みモデル数
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// モデルが1件も登録されていないか
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// モデルを登録
    ///
    /// 未登録の名前なら "1.0" で新規作成し、既存の名前なら
    /// `"{既存バージョン数 + 1}.0"` のバージョンを追加する。
    /// 新しく登録したバージョンは常にアクティブになる。
    pub fn register(&mut self, req: RegisterRequest) -> RegistryResult<Registration> {
        let now = Utc::now();
        let previous = self.models.get(&req.model_name).cloned();

        let (version, status) = match self.models.entry(req.model_name.clone()) {
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                let version = record.next_version_label();
                record.push_version(VersionRecord::new(
                    version.clone(),
                    req.model_id.clone(),
                    req.description.clone(),
                    now,
                ));
                (version, RegisterStatus::Appended)
            }
            Entry::Vacant(entry) => {
                let version = version_label(1);
                entry.insert(ModelRecord::new(
                    req.model_name.clone(),
                    VersionRecord::new(
                        version.clone(),
                        req.model_id.clone(),
                        req.description.clone(),
                        now,
                    ),
                ));
                (version, RegisterStatus::Created)
            }
        };

        if let Some(requested) = req.version.as_deref().filter(|v| *v != version) {
            warn!(
                model = %req.model_name,
                requested,
                assigned = %version,
                "Requested version label ignored; labels are assigned by the registry"
            );
        }

        self.persist_or_restore(&req.model_name, previous)?;

        info!(
            model = %req.model_name,
            version = %version,
            model_id = %req.model_id,
            "Registered model version"
        );
        Ok(Registration {
            model_name: req.model_name,
            version,
            model_id: req.model_id,
            status,
        })
    }

    /// モデルIDを取得
    ///
    /// `version` が `None` または空文字ならアクティブなモデルIDを返す。
    pub fn get_model_id(&self, model_name: &str, version: Option<&str>) -> RegistryResult<String> {
        let record = self.record(model_name)?;

        match version.filter(|v| !v.is_empty()) {
            None => Ok(record.current_model_id.clone()),
            Some(label) => record
                .find_version(label)
                .map(|v| v.model_id.clone())
                .ok_or_else(|| RegistryError::version_not_found(model_name, label)),
        }
    }

    /// アクティブバージョンを切り替える
    pub fn set_active_version(
        &mut self,
        model_name: &str,
        version: &str,
    ) -> RegistryResult<Activation> {
        let record = self.record(model_name)?;
        let model_id = record
            .find_version(version)
            .map(|v| v.model_id.clone())
            .ok_or_else(|| RegistryError::version_not_found(model_name, version))?;
        let previous = Some(record.clone());

        if let Some(record) = self.models.get_mut(model_name) {
            record.current_model_id = model_id.clone();
            record.updated_at = Utc::now();
        }
        self.persist_or_restore(model_name, previous)?;

        info!(
            model = %model_name,
            version = %version,
            model_id = %model_id,
            "Set active model version"
        );
        Ok(Activation {
            model_name: model_name.to_string(),
            version: version.to_string(),
            model_id,
        })
    }

    /// 登録済みモデルの一覧レポート
    pub fn list_models(&self) -> ModelListing<'_> {
        ModelListing::new(&self.models)
    }

    /// モデルレコードのコピーを取得
    pub fn get(&self, model_name: &str) -> Option<ModelRecord> {
        self.models.get(model_name).cloned()
    }

    /// 全モデルレコードのコピー（名前順）
    pub fn records(&self) -> Vec<ModelRecord> {
        self.models.values().cloned().collect()
    }

    fn record(&self, model_name: &str) -> RegistryResult<&ModelRecord> {
        self.models
            .get(model_name)
            .ok_or_else(|| RegistryError::model_not_found(model_name))
    }

    /// 全体を書き出す。失敗したら `model_name` のレコードを `previous` に戻す。
    fn persist_or_restore(
        &mut self,
        model_name: &str,
        previous: Option<ModelRecord>,
    ) -> RegistryResult<()> {
        if let Err(err) = self.file.save(&self.models) {
            match previous {
                Some(record) => {
                    self.models.insert(model_name.to_string(), record);
                }
                None => {
                    self.models.remove(model_name);
                }
            }
            return Err(err.into());
        }
        Ok(())
    }
}
