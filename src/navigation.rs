use crate::app::{AppError, AppMode, AppState, RENDER_RECENTER_DELAY};
use crate::catalog::NodeKind;
use crate::model::{Activation, VisualId};
use crate::search::SearchResult;
use crate::session::RenderError;
use anyhow::Result;
use std::process::{Command, Stdio};
use std::time::Instant;

fn finish_render(app: &mut AppState, rendered: Result<VisualId, RenderError>) -> bool {
    match rendered {
        Ok(id) => {
            app.notice = None;
            app.selected = Some(id);
            app.schedule_recenter(RENDER_RECENTER_DELAY, Instant::now());
            true
        }
        Err(err) => {
            app.notice = Some(err.to_string());
            app.selected = None;
            false
        }
    }
}

/// Sidebar click: show a category as root with its first level open.
pub fn select_category(app: &mut AppState, name: &str) -> bool {
    let Some(ref catalog) = app.catalog else {
        return false;
    };

    let rendered = app.session.render_category(catalog, name, &app.viewport);
    app.sidebar.activate(name);
    finish_render(app, rendered)
}

/// Shows the configured start category, or the catalog's default.
pub fn show_default(app: &mut AppState) -> bool {
    let name = match (&app.config.default_category, &app.catalog) {
        (Some(name), _) => name.clone(),
        (None, Some(catalog)) => match catalog.default_category() {
            Some(name) => name.to_string(),
            None => return false,
        },
        (None, None) => return false,
    };
    select_category(app, &name)
}

/// Renders the path's category and expands along the path.
pub fn reveal_path(app: &mut AppState, path: &str) -> bool {
    let Some(ref catalog) = app.catalog else {
        return false;
    };

    let rendered = app.session.render_from_path(catalog, path, &app.viewport);
    if let Some(category) = path.split(crate::search::PATH_SEPARATOR).next() {
        app.sidebar.activate(category);
    }
    finish_render(app, rendered)
}

/// Search result click. Links open, everything else is revealed in the map.
pub fn activate_result(app: &mut AppState, result: &SearchResult) -> Result<()> {
    match (result.kind, result.url.as_deref()) {
        (NodeKind::Url, Some(url)) => open_url(app, url)?,
        _ => {
            reveal_path(app, &result.path);
        }
    }
    app.mode = AppMode::Normal;
    Ok(())
}

/// Map node click.
pub fn activate_node(app: &mut AppState, id: VisualId) -> Result<()> {
    let Some(node) = app.session.node(id) else {
        return Ok(());
    };

    app.selected = Some(id);
    match node.activation() {
        Activation::Toggle => {
            app.session.toggle(id, &app.viewport);
        }
        Activation::Open(url) => open_url(app, &url)?,
        Activation::None => {}
    }
    Ok(())
}

/// Opens a link with the configured opener without waiting for it.
pub fn open_url(app: &mut AppState, url: &str) -> Result<()> {
    let mut parts = app.config.open_command.split_whitespace();
    let program = parts.next().ok_or(AppError::NoOpener)?;

    let spawned = Command::new(program)
        .args(parts)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(_) => {
            tracing::info!(url, "opened link");
            app.last_opened = Some(url.to_string());
            app.set_message(format!("Opened {}", url));
        }
        Err(e) => {
            tracing::error!(url, error = %e, "failed to open link");
            app.set_message(format!("Failed to open {}: {}", url, e));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, TreeNode};
    use crate::config::AppConfig;
    use crate::search::search;

    fn test_app() -> AppState {
        let catalog = Catalog::new(TreeNode::folder(
            "OSINT",
            vec![
                TreeNode::folder(
                    "Email Address",
                    vec![
                        TreeNode::link("Hunter.io", "https://hunter.io"),
                        TreeNode::folder(
                            "Breach Data",
                            vec![TreeNode::link("HIBP", "https://haveibeenpwned.com")],
                        ),
                    ],
                ),
                TreeNode::folder("Domain Name", vec![TreeNode::item("Whois")]),
            ],
        ));
        let config = AppConfig {
            open_command: "true".to_string(),
            ..AppConfig::default()
        };
        AppState::with_catalog(config, Ok(catalog))
    }

    #[test]
    fn test_show_default_category() {
        let mut app = test_app();
        assert!(show_default(&mut app));
        assert_eq!(app.sidebar.active_name(), Some("Domain Name"));
        assert_eq!(app.session.visible_count(), 2);
        assert!(app.pending_recenter.is_some());
    }

    #[test]
    fn test_show_unknown_category() {
        let mut app = test_app();
        assert!(!select_category(&mut app, "Nope"));
        assert_eq!(app.notice.as_deref(), Some("Category \"Nope\" not found."));
        assert_eq!(app.session.visible_count(), 0);

        assert!(select_category(&mut app, "Email Address"));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_activate_folder_result() {
        let mut app = test_app();
        select_category(&mut app, "Domain Name");

        let results = search(app.catalog.as_ref().unwrap(), "breach");
        activate_result(&mut app, &results[0]).unwrap();

        assert_eq!(app.sidebar.active_name(), Some("Email Address"));
        let selected = app.session.node(app.selected.unwrap()).unwrap();
        assert_eq!(selected.name(), "Breach Data");
    }

    #[test]
    fn test_activate_url_result_opens_link() {
        let mut app = test_app();
        let results = search(app.catalog.as_ref().unwrap(), "hunter");
        activate_result(&mut app, &results[0]).unwrap();

        assert_eq!(app.last_opened.as_deref(), Some("https://hunter.io"));
        assert_eq!(app.session.visible_count(), 0);
    }

    #[test]
    fn test_activate_node_toggles_folder() {
        let mut app = test_app();
        select_category(&mut app, "Email Address");
        let root = app.session.root_id.unwrap();

        activate_node(&mut app, root).unwrap();
        assert_eq!(app.session.visible_count(), 1);
        activate_node(&mut app, root).unwrap();
        assert_eq!(app.session.visible_count(), 3);
    }

    #[test]
    fn test_activate_node_opens_link() {
        let mut app = test_app();
        select_category(&mut app, "Email Address");
        let root = app.session.root_id.unwrap();
        let link = app.session.children_of(root)[0];

        activate_node(&mut app, link).unwrap();
        assert_eq!(app.last_opened.as_deref(), Some("https://hunter.io"));
    }

    #[test]
    fn test_empty_open_command_is_an_error() {
        let mut app = test_app();
        app.config.open_command = "  ".to_string();

        let err = open_url(&mut app, "https://hunter.io").unwrap_err();
        assert_eq!(err.downcast_ref::<AppError>(), Some(&AppError::NoOpener));
        assert!(app.last_opened.is_none());
    }
}
