#![allow(dead_code)]

use osint_map::{navigation, AppConfig, AppState, Catalog, MapSession, VisualId};
use std::path::{Path, PathBuf};

/// Helper function to get fixture path
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

pub fn load_fixture_catalog() -> Catalog {
    Catalog::load_file(&fixture_path("catalog.json")).unwrap()
}

/// App over the fixture catalog with a fixed viewport and a harmless opener.
pub fn create_fixture_app() -> AppState {
    let config = AppConfig {
        catalog_file: fixture_path("catalog.json"),
        open_command: "true".to_string(),
        ..AppConfig::default()
    };
    let catalog = Catalog::load_file(&config.catalog_file);
    let mut app = AppState::with_catalog(config, catalog);
    osint_map::actions::resize(&mut app, 120, 40);
    navigation::show_default(&mut app);
    app.recenter();
    app
}

/// Visible node with the given name.
pub fn find_by_name(session: &MapSession, name: &str) -> Option<VisualId> {
    session
        .visible_nodes()
        .into_iter()
        .find(|id| session.node(*id).map(|n| n.name()) == Some(name))
}

/// Indented outline of the visible tree, for debugging failed assertions.
#[allow(dead_code)]
pub fn outline(session: &MapSession) -> String {
    let mut result = String::new();
    for id in session.visible_nodes() {
        if let Some(node) = session.node(id) {
            result.push_str(&format!("{}{}\n", "\t".repeat(node.level), node.name()));
        }
    }
    result
}
