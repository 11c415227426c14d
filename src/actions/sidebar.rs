use crate::app::{AppState, Focus};
use crate::navigation;
use std::time::{Duration, Instant};

pub fn focus_next(app: &mut AppState) {
    app.focus = match app.focus {
        Focus::Map if !app.sidebar.collapsed && !app.sidebar.categories.is_empty() => {
            Focus::Sidebar
        }
        _ => Focus::Map,
    };
}

pub fn cursor_up(app: &mut AppState) {
    app.sidebar.cursor = app.sidebar.cursor.saturating_sub(1);
}

pub fn cursor_down(app: &mut AppState) {
    let last = app.sidebar.categories.len().saturating_sub(1);
    app.sidebar.cursor = (app.sidebar.cursor + 1).min(last);
}

pub fn open_cursor(app: &mut AppState) {
    if let Some(name) = app.sidebar.cursor_name().map(str::to_string) {
        navigation::select_category(app, &name);
    }
}

/// Collapses or restores the sidebar. The map recenters once the panel has
/// settled, after `recenter_delay_ms`.
pub fn toggle_sidebar(app: &mut AppState) {
    app.sidebar.collapsed = !app.sidebar.collapsed;
    if app.sidebar.collapsed {
        app.focus = Focus::Map;
    }

    super::view::sync_viewport(app);
    let delay = Duration::from_millis(app.config.recenter_delay_ms);
    app.schedule_recenter(delay, Instant::now());
    tracing::debug!(collapsed = app.sidebar.collapsed, "sidebar toggled");
}
