use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

// Help section structure
pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Navigation:",
        items: &[
            ("h/←", "Parent node"),
            ("j/↓", "Next sibling / node below"),
            ("k/↑", "Previous sibling / node above"),
            ("l/→", "First child (expands folders)"),
            ("m/~", "Go to root"),
            ("⇥  ", "Switch sidebar / map focus"),
        ],
    },
    HelpSection {
        title: "Map:",
        items: &[
            ("⏎/␣", "Toggle folder / open link"),
            ("HJKL", "Scroll the map"),
            ("c  ", "Recenter root"),
            ("b  ", "Collapse sidebar"),
            ("t  ", "Toggle theme"),
        ],
    },
    HelpSection {
        title: "Search:",
        items: &[
            ("/  ", "Search the catalog"),
            ("↑/↓", "Pick a result"),
            ("⏎  ", "Open result"),
            ("Esc", "Cancel"),
        ],
    },
    HelpSection {
        title: "Output:",
        items: &[
            ("x  ", "Export map as SVG"),
            ("y  ", "Yank link URL"),
            ("q  ", "Quit"),
        ],
    },
];

// Help renderer
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn render(frame: &mut Frame, palette: Palette, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().fg(palette.foreground).bg(palette.background))
            .title(" Help ");
        let paragraph = Paragraph::new(Self::build_help_text())
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled("osint-map Help", bold)),
            Line::from(""),
        ];

        for section in SECTIONS {
            lines.push(Line::from(Span::styled(section.title, bold)));
            for (key, desc) in section.items {
                lines.push(Line::from(format!("  {}  {}", key, desc)));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from("Press ESC or q to close help"));
        lines
    }
}
