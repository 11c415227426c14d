use crate::app::AppState;
use crate::export;
use anyhow::Result;

pub fn export_svg(app: &mut AppState) -> Result<()> {
    if app.session.root_id.is_none() {
        app.set_message("No map to export");
        return Ok(());
    }

    let path = app.config.export_file.clone();
    match export::write_svg(&app.session, &path) {
        Ok(()) => app.set_message(format!("Exported to {}", path.display())),
        Err(e) => {
            app.set_message(format!("Failed to export: {}", e));
            return Err(e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, TreeNode};
    use crate::config::AppConfig;
    use crate::navigation;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig {
            export_file: temp_dir.path().join("map.svg"),
            ..AppConfig::default()
        };
        let catalog = Catalog::new(TreeNode::folder(
            "OSINT",
            vec![TreeNode::folder("Username", vec![TreeNode::item("a")])],
        ));
        let mut app = AppState::with_catalog(config, Ok(catalog));
        navigation::select_category(&mut app, "Username");

        export_svg(&mut app).unwrap();
        let svg = fs::read_to_string(temp_dir.path().join("map.svg")).unwrap();
        assert!(svg.contains("Username"));
        assert!(app.message.unwrap().text.starts_with("Exported to"));
    }

    #[test]
    fn test_export_without_map() {
        let mut app = AppState::new(AppConfig::default());
        export_svg(&mut app).unwrap();
        assert_eq!(app.message.unwrap().text, "No map to export");
    }
}
