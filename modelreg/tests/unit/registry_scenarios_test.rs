//! invoice-extractor のウォークスルーをレジストリAPIで再現する

use modelreg::{ModelRegistry, NotFoundError, RegisterRequest, RegistryError};
use std::path::PathBuf;

fn registry_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("model-registry.json")
}

#[test]
fn invoice_extractor_walkthrough() {
    let dir = tempfile::tempdir().unwrap();
    let mut registry = ModelRegistry::open(registry_path(&dir)).unwrap();

    // 1. 空のレジストリに登録
    let first = registry
        .register(RegisterRequest::new("invoice-extractor", "model-abc123"))
        .unwrap();
    assert_eq!(first.version, "1.0");
    assert_eq!(
        registry.get_model_id("invoice-extractor", None).unwrap(),
        "model-abc123"
    );

    // 2. 同じ名前で再登録
    let second = registry
        .register(
            RegisterRequest::new("invoice-extractor", "model-def456")
                .with_description("retrained on more data"),
        )
        .unwrap();
    assert_eq!(second.version, "2.0");

    // 3. 参照
    assert_eq!(
        registry.get_model_id("invoice-extractor", None).unwrap(),
        "model-def456"
    );
    assert_eq!(
        registry
            .get_model_id("invoice-extractor", Some("1.0"))
            .unwrap(),
        "model-abc123"
    );

    // 4. アクティブバージョンを戻す
    registry
        .set_active_version("invoice-extractor", "1.0")
        .unwrap();
    assert_eq!(
        registry.get_model_id("invoice-extractor", None).unwrap(),
        "model-abc123"
    );

    // 5. 未登録モデル
    let err = registry
        .get_model_id("nonexistent-model", None)
        .unwrap_err();
    match err {
        RegistryError::NotFound(NotFoundError::Model(name)) => {
            assert_eq!(name, "nonexistent-model")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn reload_lists_both_versions_with_latest_active() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut registry = ModelRegistry::open(registry_path(&dir)).unwrap();
        registry
            .register(RegisterRequest::new("invoice-extractor", "model-abc123"))
            .unwrap();
        registry
            .register(
                RegisterRequest::new("invoice-extractor", "model-def456")
                    .with_description("retrained on more data"),
            )
            .unwrap();
    }

    // 6. 別インスタンスで読み直す
    let reloaded = ModelRegistry::open(registry_path(&dir)).unwrap();
    let report = reloaded.list_models().to_string();

    assert!(report.contains("Model: invoice-extractor"));
    assert!(report.contains("  Current Model ID: model-def456"));
    assert!(report.contains("    - v1.0\n      Model ID: model-abc123"));
    assert!(report.contains("    - v2.0 (ACTIVE)\n      Model ID: model-def456"));
    assert!(report.contains("      Description: retrained on more data"));
    assert!(!report.contains("v1.0 (ACTIVE)"));
}

#[test]
fn reads_file_written_by_previous_tool_version() {
    let dir = tempfile::tempdir().unwrap();
    let existing = r#"{
  "invoice-extractor": {
    "ModelName": "invoice-extractor",
    "CurrentModelId": "model-abc123",
    "CreatedAt": "2024-02-10T11:04:05.5512345Z",
    "UpdatedAt": "2024-02-12T16:30:00.0000001Z",
    "Versions": [
      {
        "Version": "1.0",
        "ModelId": "model-abc123",
        "Description": "",
        "CreatedAt": "2024-02-10T11:04:05.5512345Z"
      },
      {
        "Version": "2.0",
        "ModelId": "model-def456",
        "Description": null,
        "CreatedAt": "2024-02-11T09:00:00.25Z"
      }
    ]
  }
}"#;
    std::fs::write(registry_path(&dir), existing).unwrap();

    let mut registry = ModelRegistry::open(registry_path(&dir)).unwrap();
    assert_eq!(
        registry.get_model_id("invoice-extractor", None).unwrap(),
        "model-abc123"
    );

    let third = registry
        .register(RegisterRequest::new("invoice-extractor", "model-ghi789"))
        .unwrap();
    assert_eq!(third.version, "3.0");

    let record = ModelRegistry::open(registry_path(&dir))
        .unwrap()
        .get("invoice-extractor")
        .unwrap();
    assert_eq!(record.versions.len(), 3);
    assert_eq!(record.current_model_id, "model-ghi789");
}

#[test]
fn corrupt_file_is_fatal_at_open() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(registry_path(&dir), "{\"invoice-extractor\": ").unwrap();

    let err = ModelRegistry::open(registry_path(&dir)).unwrap_err();
    assert!(err.is_persistence());
    // 壊れたファイルは上書きされない
    assert_eq!(
        std::fs::read_to_string(registry_path(&dir)).unwrap(),
        "{\"invoice-extractor\": "
    );
}
