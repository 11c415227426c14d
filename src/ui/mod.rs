pub mod canvas;
pub mod connections;
pub mod constants;
pub mod help;
pub mod mindmap;
pub mod search;
pub mod sidebar;
pub mod status_line;
pub mod text;

use crate::app::{AppMode, AppState};
use constants::{DROPDOWN_WIDTH, HEADER_HEIGHT, PANEL_MARGIN, SIDEBAR_WIDTH, STATUS_HEIGHT};
use help::HelpRenderer;
use mindmap::MindMapRenderer;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};
use search::SearchRenderer;
use sidebar::SidebarRenderer;
use status_line::StatusLineRenderer;

/// Screen regions. Shared by drawing and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub sidebar: Option<Rect>,
    pub map: Rect,
    pub status: Rect,
}

pub fn layout_areas(area: Rect, sidebar_collapsed: bool) -> Areas {
    let rows = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    let (sidebar, map) = if sidebar_collapsed {
        (None, rows[1])
    } else {
        let cols = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[1]);
        (Some(cols[0]), cols[1])
    };

    Areas {
        header: rows[0],
        sidebar,
        map,
        status: rows[2],
    }
}

/// Drawable part of the map panel, inside its border.
pub fn map_inner(map: Rect) -> Rect {
    map.inner(PANEL_MARGIN)
}

/// Where the search dropdown floats: under the search input, one row per
/// result plus borders. Empty when there are no results.
pub fn dropdown_area(areas: &Areas, result_count: usize) -> Rect {
    if result_count == 0 {
        return Rect::default();
    }
    let x = areas.header.x + 1;
    let y = areas.header.bottom();
    let width = DROPDOWN_WIDTH.min(areas.header.width.saturating_sub(2));
    let wanted = u16::try_from(result_count).unwrap_or(u16::MAX).saturating_add(2);
    let height = wanted.min(areas.status.y.saturating_sub(y));
    Rect::new(x, y, width, height)
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}

pub fn render(frame: &mut Frame, app: &AppState) {
    let palette = app.theme.palette();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(
            Style::default()
                .fg(palette.foreground)
                .bg(palette.background),
        ),
        area,
    );

    let areas = layout_areas(area, app.sidebar.collapsed);

    SearchRenderer::render_header(frame, app, palette, areas.header);
    if let Some(sidebar) = areas.sidebar {
        SidebarRenderer::render(frame, app, palette, sidebar);
    }
    MindMapRenderer::new(app, palette).render(frame, areas.map);
    StatusLineRenderer::render(frame, app, palette, areas.status);

    match &app.mode {
        AppMode::Search { results, .. } => {
            let dropdown = dropdown_area(&areas, results.len());
            SearchRenderer::render_dropdown(frame, app, palette, dropdown);
        }
        AppMode::Help => HelpRenderer::render(frame, palette, centered_rect(60, 80, area)),
        AppMode::Normal => {}
    }
}
