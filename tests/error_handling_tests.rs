mod common;

use common::fixture_path;
use osint_map::config::{load_config, CliArgs};
use osint_map::theme::Theme;
use osint_map::{navigation, AppConfig, AppState, Catalog, CatalogError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_catalog_shows_not_found() {
    let result = Catalog::load_file(&fixture_path("does_not_exist.json"));
    assert!(matches!(result, Err(CatalogError::Io(_))));

    let mut app = AppState::with_catalog(AppConfig::default(), result);
    assert_eq!(app.notice.as_deref(), Some("OSINT data structure not found."));
    assert!(app.sidebar.categories.is_empty());
    assert!(!navigation::show_default(&mut app));
}

#[test]
fn test_malformed_catalog_shows_load_error() {
    let result = Catalog::load_file(&fixture_path("malformed.json"));
    assert!(matches!(result, Err(CatalogError::Json(_))));

    let app = AppState::with_catalog(AppConfig::default(), result);
    assert_eq!(
        app.notice.as_deref(),
        Some("Error loading OSINT data structure.")
    );
}

#[test]
fn test_catalog_without_categories() {
    let result = Catalog::load_file(&fixture_path("no_categories.json"));
    assert!(matches!(result, Err(CatalogError::NoCategories)));
}

#[test]
fn test_unknown_category_keeps_app_usable() {
    let catalog = Catalog::load_file(&fixture_path("catalog.json"));
    let mut app = AppState::with_catalog(AppConfig::default(), catalog);

    assert!(!navigation::select_category(&mut app, "Phone Numbers"));
    assert_eq!(
        app.notice.as_deref(),
        Some("Category \"Phone Numbers\" not found.")
    );
    assert!(app.session.root_id.is_none());

    assert!(navigation::select_category(&mut app, "Username"));
    assert!(app.notice.is_none());
}

#[test]
fn test_config_file_is_layered_under_arguments() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
theme = "dark"
default_category = "Username"
horizontal_gap = 12.0
message_timeout_ms = 2000
"#,
    )
    .unwrap();

    let args = CliArgs {
        config: Some(config_path),
        horizontal_gap: Some(6.0),
        ..CliArgs::default()
    };
    let config = load_config(&args).unwrap();

    assert_eq!(config.theme, Theme::Dark);
    assert_eq!(config.default_category.as_deref(), Some("Username"));
    assert_eq!(config.layout.horizontal_gap, 6.0);
    assert_eq!(config.message_timeout_ms, 2000);
    assert_eq!(config.recenter_delay_ms, 310);
}

#[test]
fn test_invalid_theme_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    let args = CliArgs {
        theme: Some("sepia".to_string()),
        config: Some(config_path),
        ..CliArgs::default()
    };
    assert!(load_config(&args).is_err());
}
