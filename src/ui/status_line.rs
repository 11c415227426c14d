use crate::app::{AppMode, AppState, Focus};
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, palette: Palette, area: Rect) {
        let (content, style) = Self::get_content_and_style(app, palette);
        frame.render_widget(Paragraph::new(content).style(style), area);
    }

    fn get_content_and_style(app: &AppState, palette: Palette) -> (String, Style) {
        if let Some(ref msg) = app.message {
            let style = Style::default()
                .fg(palette.message_fg)
                .bg(palette.message_bg)
                .add_modifier(Modifier::BOLD);
            return (msg.text.clone(), style);
        }

        let content = match &app.mode {
            AppMode::Normal => Self::normal_mode_text(app),
            AppMode::Search { query, results, .. } => {
                format!("{} results for \"{}\" | Enter open | Esc cancel", results.len(), query)
            }
            AppMode::Help => String::from("Press ESC or q to close help"),
        };

        (content, Style::default().fg(palette.muted).bg(palette.background))
    }

    fn normal_mode_text(app: &AppState) -> String {
        let focus = match app.focus {
            Focus::Map => "map",
            Focus::Sidebar => "sidebar",
        };
        let selected = app
            .selected
            .and_then(|id| app.session.node(id))
            .map(|node| format!(" | {}", node.name()))
            .unwrap_or_default();

        format!(
            "osint-map | {} nodes | focus: {}{} | ? help",
            app.session.visible_count(),
            focus,
            selected
        )
    }
}
