use crate::app::{AppState, Focus};
use crate::catalog::NodeKind;
use crate::icons;
use crate::model::{Position, VisualNode};
use crate::theme::Palette;
use crate::ui::canvas::BufferCanvas;
use crate::ui::connections::ConnectionRenderer;
use crate::ui::constants::{node_box, PANEL_MARGIN};
use crate::ui::text;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

// Mind map renderer
pub struct MindMapRenderer<'a> {
    app: &'a AppState,
    palette: Palette,
}

impl<'a> MindMapRenderer<'a> {
    pub fn new(app: &'a AppState, palette: Palette) -> Self {
        Self { app, palette }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = self
            .app
            .session
            .root_id
            .and_then(|id| self.app.session.node(id))
            .map(|node| format!(" {} ", node.name()))
            .unwrap_or_default();

        let border_style = if self.app.focus == Focus::Map {
            Style::default().fg(self.palette.accent)
        } else {
            Style::default().fg(self.palette.muted)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title);
        frame.render_widget(block, area);

        let inner = area.inner(PANEL_MARGIN);
        if let Some(ref notice) = self.app.notice {
            let paragraph = Paragraph::new(notice.as_str())
                .style(Style::default().fg(self.palette.muted))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, inner);
            return;
        }

        let canvas = self.paint(inner.width as usize, inner.height as usize);
        frame.render_widget(Paragraph::new(canvas.to_lines()), inner);
    }

    /// Paints edges first, then node boxes on top.
    pub fn paint(&self, width: usize, height: usize) -> BufferCanvas {
        let base = Style::default()
            .fg(self.palette.foreground)
            .bg(self.palette.background);
        let mut canvas = BufferCanvas::new(width, height, base);
        let session = &self.app.session;

        let mut connections = ConnectionRenderer::new(&self.app.viewport);
        for edge in &session.edges.edges {
            connections.add_edge(edge);
        }
        connections.draw(&mut canvas, Style::default().fg(self.palette.edge));

        for id in session.visible_nodes() {
            let (Some(node), Some(position)) = (session.node(id), session.position(id)) else {
                continue;
            };
            let selected = self.app.selected == Some(id);
            self.draw_node(&mut canvas, node, position, selected);
        }

        canvas
    }

    fn kind_color(&self, kind: NodeKind) -> ratatui::style::Color {
        match kind {
            NodeKind::Folder => self.palette.folder,
            NodeKind::Url => self.palette.link,
            NodeKind::Item | NodeKind::Unknown => self.palette.item,
        }
    }

    fn draw_node(
        &self,
        canvas: &mut BufferCanvas,
        node: &VisualNode,
        position: &Position,
        selected: bool,
    ) {
        let vp = &self.app.viewport;
        let x = (position.x - vp.scroll_left).round() as i32;
        let y = (position.y - vp.scroll_top).round() as i32;
        let w = position.width.round() as i32;
        let h = position.height.round() as i32;
        if w < 2 || h < 2 {
            return;
        }

        let accent = self.kind_color(node.kind());
        let (border, label, detail) = if selected {
            let s = Style::default()
                .fg(self.palette.selected_fg)
                .bg(self.palette.selected_bg);
            (s, s.add_modifier(Modifier::BOLD), s)
        } else {
            (
                Style::default().fg(accent),
                Style::default()
                    .fg(self.palette.foreground)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(self.palette.muted),
            )
        };

        canvas.fill(x, y, w, h, border);

        // Frame
        for col in x + 1..x + w - 1 {
            canvas.put(col, y, node_box::HORIZONTAL, border);
            canvas.put(col, y + h - 1, node_box::HORIZONTAL, border);
        }
        for row in y + 1..y + h - 1 {
            canvas.put(x, row, node_box::VERTICAL, border);
            canvas.put(x + w - 1, row, node_box::VERTICAL, border);
        }
        canvas.put(x, y, node_box::TOP_LEFT, border);
        canvas.put(x + w - 1, y, node_box::TOP_RIGHT, border);
        canvas.put(x, y + h - 1, node_box::BOTTOM_LEFT, border);
        canvas.put(x + w - 1, y + h - 1, node_box::BOTTOM_RIGHT, border);

        if node.is_folder() && node.child_count() > 0 {
            let marker = if node.expanded {
                node_box::EXPANDED
            } else {
                node_box::COLLAPSED
            };
            canvas.put(x + w - 2, y, marker, border);
        }

        let content_width = (w - 4).max(0) as usize;
        let glyph = icons::glyph(&node.icon);
        let name = text::truncate(node.name(), content_width.saturating_sub(2));
        let next = canvas.draw_text(x + 2, y + 1, &glyph.to_string(), border);
        canvas.draw_text(next + 1, y + 1, &name, label);

        let info = text::truncate(&node.detail(), content_width);
        canvas.draw_text(x + 2, y + 2, &info, detail);
    }
}
