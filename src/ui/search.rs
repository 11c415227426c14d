use crate::app::{AppMode, AppState};
use crate::catalog::NodeKind;
use crate::icons;
use crate::search::SearchResult;
use crate::theme::Palette;
use crate::ui::constants::{APP_TITLE, CURSOR_INDICATOR, SEARCH_HINT, SEARCH_PROMPT};
use crate::ui::text;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

fn result_icon(result: &SearchResult) -> &'static str {
    match result.kind {
        NodeKind::Folder => icons::category_icon(&result.name).unwrap_or(icons::FOLDER_ICON),
        NodeKind::Url => icons::LINK_ICON,
        NodeKind::Item | NodeKind::Unknown => icons::UNKNOWN_ICON,
    }
}

pub struct SearchRenderer;

impl SearchRenderer {
    /// Title bar with the search input and the theme switch label.
    pub fn render_header(frame: &mut Frame, app: &AppState, palette: Palette, area: Rect) {
        let theme_label = format!(" [t] {} ", app.theme.label());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.muted))
            .title(Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .title(Line::from(theme_label).right_aligned());

        let line = match &app.mode {
            AppMode::Search { query, .. } => Line::from(vec![
                Span::styled(SEARCH_PROMPT, Style::default().fg(palette.accent)),
                Span::styled(query.clone(), Style::default().fg(palette.foreground)),
                Span::styled(
                    CURSOR_INDICATOR.to_string(),
                    Style::default().fg(palette.accent),
                ),
            ]),
            _ => Line::from(Span::styled(SEARCH_HINT, Style::default().fg(palette.muted))),
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    /// Floating result list. Hidden while there is nothing to show.
    pub fn render_dropdown(frame: &mut Frame, app: &AppState, palette: Palette, area: Rect) {
        let AppMode::Search {
            results, selected, ..
        } = &app.mode
        else {
            return;
        };
        if results.is_empty() || area.height < 3 {
            return;
        }

        let width = area.width.saturating_sub(4) as usize;
        let lines: Vec<Line> = results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                let style = if index == *selected {
                    Style::default()
                        .fg(palette.selected_fg)
                        .bg(palette.selected_bg)
                } else {
                    Style::default().fg(palette.foreground)
                };
                let head = format!("{} {}", icons::glyph(result_icon(result)), result.name);
                let head = text::truncate(&head, width);
                let room = width.saturating_sub(head.width() + 2);
                Line::from(vec![
                    Span::styled(head, style.add_modifier(Modifier::BOLD)),
                    Span::styled("  ", style),
                    Span::styled(
                        text::fit(&result.parent_path(), room),
                        style.fg(palette.muted),
                    ),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.background));

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
