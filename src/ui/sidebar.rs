use crate::app::{AppState, Focus};
use crate::icons;
use crate::theme::Palette;
use crate::ui::constants::CURSOR_INDICATOR;
use crate::ui::text;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct SidebarRenderer;

impl SidebarRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, palette: Palette, area: Rect) {
        let focused = app.focus == Focus::Sidebar;
        let border_style = if focused {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.muted)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Categories ");

        let label_width = area.width.saturating_sub(6) as usize;
        let lines: Vec<Line> = app
            .sidebar
            .categories
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let active = app.sidebar.active == Some(index);
                let under_cursor = focused && app.sidebar.cursor == index;

                let style = if active {
                    Style::default()
                        .fg(palette.selected_fg)
                        .bg(palette.selected_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.foreground)
                };

                let cursor = if under_cursor { CURSOR_INDICATOR } else { ' ' };
                Line::from(vec![
                    Span::styled(cursor.to_string(), Style::default().fg(palette.accent)),
                    Span::styled(
                        format!(
                            "{} {}",
                            icons::glyph(icons::sidebar_icon(name)),
                            text::fit(name, label_width)
                        ),
                        style,
                    ),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }
}
