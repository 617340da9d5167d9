use balancete_core::{
    config::{ConfigError, ConfigManager, EngineConfig, ExpenseRollup},
    domain::Account,
};
use tempfile::TempDir;

fn manager() -> (TempDir, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let manager =
        ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("create config manager");
    (temp, manager)
}

#[test]
fn missing_file_loads_defaults() {
    let (_guard, manager) = manager();
    let config = manager.load().unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.fallback_category_label, "Sem categoria");
}

#[test]
fn save_then_load_preserves_settings() {
    let (_guard, manager) = manager();
    let mut config = EngineConfig {
        trend_window_months: 6,
        expense_rollup: ExpenseRollup::IncludeTertiary,
        ..EngineConfig::default()
    };
    config
        .account_labels
        .insert(Account::Cora, "2.1 Cora PJ".into());
    manager.save(&config).unwrap();

    assert!(manager.config_path().exists());
    let loaded = manager.load().unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.account_label(Account::Cora), "2.1 Cora PJ");
}

#[test]
fn invalid_settings_are_not_persisted() {
    let (_guard, manager) = manager();
    let config = EngineConfig {
        trend_window_months: 0,
        ..EngineConfig::default()
    };
    let err = manager.save(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(!manager.config_path().exists());
}

#[test]
fn corrupt_file_reports_serialization_error() {
    let (_guard, manager) = manager();
    std::fs::write(manager.config_path(), "{ not json").unwrap();
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn backups_can_be_listed_and_restored() {
    let (_guard, manager) = manager();
    assert!(manager.list_backups().unwrap().is_empty());

    let config = EngineConfig {
        locale: "en-US".into(),
        ..EngineConfig::default()
    };
    let name = manager.backup(&config, Some("Fechamento Janeiro")).unwrap();
    assert!(name.starts_with("config_"));
    assert!(name.ends_with("_fechamento-janeiro.json"));

    assert_eq!(manager.list_backups().unwrap(), vec![name.clone()]);
    assert_eq!(manager.restore(&name).unwrap(), config);
    assert!(matches!(
        manager.restore("config_missing.json"),
        Err(ConfigError::BackupNotFound(_))
    ));
}
