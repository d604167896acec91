//! Property-based tests using proptest

use modelreg::{ModelRegistry, RegisterRequest};
use proptest::prelude::*;
use std::collections::HashMap;

fn model_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["invoices", "receipts", "contracts", "ids"]).prop_map(String::from)
}

fn model_id() -> impl Strategy<Value = String> {
    "model-[a-z0-9]{6}"
}

fn registrations() -> impl Strategy<Value = Vec<(String, String, Option<String>)>> {
    prop::collection::vec(
        (
            model_name(),
            model_id(),
            prop::option::of("[0-9]{1,2}\\.[0-9]"),
        ),
        1..24,
    )
}

fn open_temp() -> (tempfile::TempDir, ModelRegistry) {
    let dir = tempfile::tempdir().unwrap();
    let registry = ModelRegistry::open(dir.path().join("model-registry.json")).unwrap();
    (dir, registry)
}

fn apply(registry: &mut ModelRegistry, regs: &[(String, String, Option<String>)]) {
    for (name, id, requested) in regs {
        let mut req = RegisterRequest::new(name, id);
        if let Some(v) = requested {
            req = req.with_version(v);
        }
        registry.register(req).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// 名前ごとにレコードは1つだけ
    #[test]
    fn one_record_per_name(regs in registrations()) {
        let (_dir, mut registry) = open_temp();
        apply(&mut registry, &regs);

        let mut distinct: Vec<&String> = regs.iter().map(|(n, _, _)| n).collect();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(registry.len(), distinct.len());
    }

    /// N番目の登録は "N.0"（希望ラベルは無視される）
    #[test]
    fn nth_registration_gets_n_dot_zero(regs in registrations()) {
        let (_dir, mut registry) = open_temp();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for (name, id, requested) in &regs {
            let mut req = RegisterRequest::new(name, id);
            if let Some(v) = requested {
                req = req.with_version(v);
            }
            let registration = registry.register(req).unwrap();
            let n = counts.entry(name.clone()).or_default();
            *n += 1;
            prop_assert_eq!(registration.version, format!("{}.0", n));
        }
    }

    /// 登録直後は登録したIDがアクティブ
    #[test]
    fn active_tracks_latest_registration(regs in registrations()) {
        let (_dir, mut registry) = open_temp();
        for (name, id, _) in &regs {
            registry.register(RegisterRequest::new(name, id)).unwrap();
            prop_assert_eq!(registry.get_model_id(name, None).unwrap(), id.clone());
            prop_assert_eq!(&registry.get(name).unwrap().current_model_id, id);
        }
    }

    /// バージョン指定の参照は該当バージョンのIDを返す
    #[test]
    fn lookup_by_version_matches_history(regs in registrations()) {
        let (_dir, mut registry) = open_temp();
        apply(&mut registry, &regs);

        for record in registry.records() {
            for version in &record.versions {
                prop_assert_eq!(
                    registry.get_model_id(&record.model_name, Some(&version.version)).unwrap(),
                    version.model_id.clone()
                );
            }
            let missing = format!("{}.0", record.versions.len() + 1);
            let err = registry.get_model_id(&record.model_name, Some(&missing)).unwrap_err();
            prop_assert!(err.is_not_found());
        }
    }

    /// set-active 後は既定の参照が指定バージョンと一致する
    #[test]
    fn activation_redirects_default_lookup(
        regs in registrations(),
        pick in any::<prop::sample::Index>(),
    ) {
        let (_dir, mut registry) = open_temp();
        apply(&mut registry, &regs);

        let records = registry.records();
        let record = &records[pick.index(records.len())];
        let version = &record.versions[pick.index(record.versions.len())].version;

        registry.set_active_version(&record.model_name, version).unwrap();
        prop_assert_eq!(
            registry.get_model_id(&record.model_name, None).unwrap(),
            registry.get_model_id(&record.model_name, Some(version)).unwrap()
        );
    }

    /// 永続化して読み直すと同じ内容になる
    #[test]
    fn reopen_yields_identical_records(regs in registrations()) {
        let (dir, mut registry) = open_temp();
        apply(&mut registry, &regs);

        let reopened = ModelRegistry::open(dir.path().join("model-registry.json")).unwrap();
        prop_assert_eq!(reopened.records(), registry.records());
    }

    /// 未登録の名前/バージョンへの操作は失敗し、状態を変えない
    #[test]
    fn unknown_lookups_fail_without_mutation(regs in registrations()) {
        let (_dir, mut registry) = open_temp();
        apply(&mut registry, &regs);
        let before = registry.records();

        let missing = "unregistered";
        prop_assert!(registry.get_model_id(missing, None).unwrap_err().is_not_found());
        prop_assert!(registry.set_active_version(missing, "1.0").unwrap_err().is_not_found());
        prop_assert!(registry.set_active_version(&regs[0].0, "99.0").unwrap_err().is_not_found());
        prop_assert!(registry.get_model_id(&regs[0].0, Some("99.0")).unwrap_err().is_not_found());
        prop_assert_eq!(registry.records(), before);
    }
}
