use crate::app::{AppMode, AppState, Focus};
use crate::navigation;
use crate::prefs;
use crate::ui;
use anyhow::Result;
use ratatui::layout::Rect;

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Matches the viewport to the map panel for the current terminal size.
pub fn sync_viewport(app: &mut AppState) {
    let screen = Rect::new(0, 0, app.terminal_width, app.terminal_height);
    let areas = ui::layout_areas(screen, app.sidebar.collapsed);
    let inner = ui::map_inner(areas.map);
    app.viewport.width = f64::from(inner.width);
    app.viewport.height = f64::from(inner.height);
}

pub fn resize(app: &mut AppState, width: u16, height: u16) {
    app.terminal_width = width;
    app.terminal_height = height;
    sync_viewport(app);
    app.recenter();
}

/// Scrolls the map panel. Any scroll puts the root back on the vertical
/// center of what is visible.
pub fn scroll(app: &mut AppState, dx: f64, dy: f64) {
    app.viewport.scroll_by(dx, dy);
    app.recenter();
}

pub fn recenter(app: &mut AppState) {
    if app.recenter() {
        app.set_message("Recentered");
    }
}

pub fn toggle_theme(app: &mut AppState) {
    app.theme = app.theme.toggled();

    let saved = match app.config.state_file {
        Some(ref path) => prefs::save_theme(path, app.theme),
        None => Ok(()),
    };
    match saved {
        Ok(()) => app.set_message(format!("Theme: {}", app.theme.label())),
        Err(e) => {
            tracing::warn!(error = %e, "theme not saved");
            app.set_message(format!("Theme: {} (not saved: {})", app.theme.label(), e));
        }
    }
}

pub fn show_help(app: &mut AppState) {
    app.mode = AppMode::Help;
}

pub fn close_help(app: &mut AppState) {
    app.mode = AppMode::Normal;
}

pub fn activate_selected(app: &mut AppState) -> Result<()> {
    if let Some(id) = app.selected {
        navigation::activate_node(app, id)?;
    }
    Ok(())
}

pub fn click_at(app: &mut AppState, column: u16, row: u16) -> Result<()> {
    let screen = Rect::new(0, 0, app.terminal_width, app.terminal_height);
    let areas = ui::layout_areas(screen, app.sidebar.collapsed);

    let result_count = match &app.mode {
        AppMode::Search { results, .. } => Some(results.len()),
        _ => None,
    };
    if let Some(count) = result_count {
        let dropdown = ui::dropdown_area(&areas, count);
        if hit(dropdown, column, row) {
            let index = usize::from(row.saturating_sub(dropdown.y + 1));
            return super::search::pick_search_result(app, index);
        }
        app.mode = AppMode::Normal;
    }

    if let Some(sidebar) = areas.sidebar.filter(|s| hit(*s, column, row)) {
        let index = usize::from(row.saturating_sub(sidebar.y + 1));
        if index < app.sidebar.categories.len() && row > sidebar.y {
            app.focus = Focus::Sidebar;
            app.sidebar.cursor = index;
            super::sidebar::open_cursor(app);
        }
        return Ok(());
    }

    let inner = ui::map_inner(areas.map);
    if hit(inner, column, row) {
        app.focus = Focus::Map;
        let x = f64::from(column - inner.x) + app.viewport.scroll_left;
        let y = f64::from(row - inner.y) + app.viewport.scroll_top;
        if let Some(id) = app.session.node_at(x, y) {
            navigation::activate_node(app, id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, TreeNode};
    use crate::config::AppConfig;
    use crate::theme::Theme;

    fn create_test_app() -> AppState {
        let catalog = Catalog::new(TreeNode::folder(
            "OSINT",
            vec![
                TreeNode::folder(
                    "Username",
                    vec![
                        TreeNode::folder("Engines", vec![TreeNode::item("Manual")]),
                        TreeNode::item("Notes"),
                    ],
                ),
                TreeNode::folder("Domain Name", vec![TreeNode::item("Whois")]),
            ],
        ));
        let mut app = AppState::with_catalog(AppConfig::default(), Ok(catalog));
        resize(&mut app, 120, 40);
        navigation::select_category(&mut app, "Username");
        app.recenter();
        app
    }

    #[test]
    fn test_resize_tracks_map_panel() {
        let mut app = create_test_app();
        let with_sidebar = app.viewport.width;

        app.sidebar.collapsed = true;
        sync_viewport(&mut app);
        assert!(app.viewport.width > with_sidebar);
        assert!(app.viewport.height < 40.0);
    }

    #[test]
    fn test_scroll_recenters_root() {
        let mut app = create_test_app();
        let root = app.session.root_id.unwrap();
        let child = app.session.children_of(root)[0];
        let child_y = app.session.position(child).unwrap().y;

        scroll(&mut app, 0.0, 5.0);
        assert_eq!(app.viewport.scroll_top, 5.0);

        let root_pos = app.session.position(root).unwrap();
        let expected = app.viewport.scroll_top + app.viewport.height / 2.0;
        assert!((root_pos.center_y() - expected).abs() < 1e-9);
        assert_eq!(app.session.position(child).unwrap().y, child_y);
    }

    #[test]
    fn test_toggle_theme_sets_message() {
        let mut app = create_test_app();
        app.theme = Theme::Light;
        toggle_theme(&mut app);
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.message.as_ref().unwrap().text, "Theme: DARK");
    }

    #[test]
    fn test_toggled_theme_is_remembered() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = AppConfig {
            theme: Theme::Light,
            state_file: Some(temp_dir.path().join("state.json")),
            ..AppConfig::default()
        };

        let mut app = AppState::new(config.clone());
        assert_eq!(app.theme, Theme::Light);
        toggle_theme(&mut app);
        assert_eq!(app.theme, Theme::Dark);

        let restarted = AppState::new(config);
        assert_eq!(restarted.theme, Theme::Dark);
    }

    #[test]
    fn test_help_mode() {
        let mut app = create_test_app();
        show_help(&mut app);
        assert!(matches!(app.mode, AppMode::Help));
        close_help(&mut app);
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_click_node_toggles_it() {
        let mut app = create_test_app();
        let root = app.session.root_id.unwrap();
        let engines = app.session.children_of(root)[0];
        let pos = app.session.position(engines).unwrap().clone();

        let screen = Rect::new(0, 0, app.terminal_width, app.terminal_height);
        let inner = ui::map_inner(ui::layout_areas(screen, false).map);
        let column = inner.x + (pos.x - app.viewport.scroll_left) as u16 + 1;
        let row = inner.y + (pos.y - app.viewport.scroll_top) as u16 + 1;

        click_at(&mut app, column, row).unwrap();
        assert_eq!(app.selected, Some(engines));
        assert_eq!(app.session.children_of(engines).len(), 1);
    }

    #[test]
    fn test_click_sidebar_opens_category() {
        let mut app = create_test_app();
        let screen = Rect::new(0, 0, app.terminal_width, app.terminal_height);
        let sidebar = ui::layout_areas(screen, false).sidebar.unwrap();

        click_at(&mut app, sidebar.x + 2, sidebar.y + 2).unwrap();
        assert_eq!(app.focus, Focus::Sidebar);
        assert_eq!(app.sidebar.active_name(), Some("Domain Name"));
    }
}
