//! Integration tests for ConfigManager and the settings file
//!
//! These tests verify:
//! - Defaults when the settings file is missing
//! - Round-tripping settings through YAML
//! - The settings file is never mistaken for a mod folder
//! - A configured order file name reaches the pipeline

use camino::Utf8PathBuf;
use mod_order_tool::models::ToolConfig;
use mod_order_tool::{ConfigManager, ModPipeline};
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

fn write_settings(manager: &ConfigManager, config: &ToolConfig) {
    let yaml = serde_yaml_ng::to_string(config).unwrap();
    fs::write(manager.settings_path(), yaml).unwrap();
}

#[test]
fn test_create_config_manager() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path);

    assert_eq!(manager.config_dir(), &config_path);
    assert_eq!(
        manager.settings_path(),
        &config_path.join("mod_order_tool.yaml")
    );
}

#[test]
fn test_load_default_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path);

    let config = manager.load_config().unwrap();

    assert_eq!(config.settings.order_file, "mod_order.txt");
    assert!(!config.settings.debug_mode);
    assert!(config.settings.console_log);
    assert!(config.settings.log_directory.is_none());
}

#[test]
fn test_load_handwritten_yaml() {
    let (_temp_dir, config_path) = create_test_config_dir();
    fs::write(
        config_path.join("mod_order_tool.yaml"),
        "MOT_Settings:\n  Order File: load_order.txt\n  Console Log: false\n  Log Directory: D:/logs\n",
    )
    .unwrap();

    let config = ConfigManager::new(&config_path).load_config().unwrap();

    assert_eq!(config.settings.order_file_name(), "load_order.txt");
    assert!(!config.settings.console_log);
    assert_eq!(config.settings.log_directory.as_deref(), Some("D:/logs"));
}

#[test]
fn test_serialized_settings_load_back() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path);

    let mut config = ToolConfig::default();
    config.settings.debug_mode = true;
    config.settings.log_directory = Some("/tmp/mot-logs".to_string());
    write_settings(&manager, &config);

    let loaded = manager.load_config().unwrap();
    assert!(loaded.settings.debug_mode);
    assert_eq!(loaded.settings.log_directory.as_deref(), Some("/tmp/mot-logs"));
}

#[test]
fn test_settings_file_not_scanned() {
    let (_temp_dir, config_path) = create_test_config_dir();
    fs::create_dir(config_path.join("ModA")).unwrap();

    let manager = ConfigManager::new(&config_path);
    write_settings(&manager, &ToolConfig::default());

    let list = ModPipeline::new(&config_path).scan().unwrap();
    assert_eq!(list.names(), vec!["ModA"]);
}

#[test]
fn test_configured_order_file_used_by_pipeline() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path);

    let mut config = ToolConfig::default();
    config.settings.order_file = "custom_order.txt".to_string();
    write_settings(&manager, &config);

    let settings = manager.load_config().unwrap().settings;
    let pipeline = ModPipeline::with_order_file(&config_path, settings.order_file_name());

    assert_eq!(pipeline.order_file_path(), config_path.join("custom_order.txt"));
}

#[test]
fn test_path_like_order_file_falls_back() {
    let (_temp_dir, config_path) = create_test_config_dir();
    fs::write(
        config_path.join("mod_order_tool.yaml"),
        "MOT_Settings:\n  Order File: ../outside.txt\n",
    )
    .unwrap();

    let settings = ConfigManager::new(&config_path)
        .load_config()
        .unwrap()
        .settings;

    assert_eq!(settings.order_file_name(), "mod_order.txt");
}
