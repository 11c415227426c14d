use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

// Cell covered by the right half of a wide glyph
const CONTINUATION: char = '\0';

/// Character grid the map is painted into before it becomes a paragraph.
/// Coordinates are signed so shapes may hang off any edge.
pub struct BufferCanvas {
    pub chars: Vec<Vec<char>>,
    pub styles: Vec<Vec<Style>>,
    pub width: usize,
    pub height: usize,
    base: Style,
}

impl BufferCanvas {
    pub fn new(width: usize, height: usize, base: Style) -> Self {
        Self {
            chars: vec![vec![' '; width]; height],
            styles: vec![vec![base; width]; height],
            width,
            height,
            base,
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn put(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if self.in_bounds(x, y) {
            self.chars[y as usize][x as usize] = ch;
            self.styles[y as usize][x as usize] = self.base.patch(style);
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if self.in_bounds(x, y) {
            Some(self.chars[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Writes `text` left to right and returns the column after it.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, style: Style) -> i32 {
        let mut cx = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            self.put(cx, y, ch, style);
            if w == 2 {
                self.put(cx + 1, y, CONTINUATION, style);
            }
            cx += w;
        }
        cx
    }

    pub fn fill(&mut self, x: i32, y: i32, width: i32, height: i32, style: Style) {
        for row in y..y + height {
            for col in x..x + width {
                self.put(col, row, ' ', style);
            }
        }
    }

    pub fn to_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();

        for (y, row) in self.chars.iter().enumerate() {
            let mut spans = Vec::new();
            let mut current_style = self.base;
            let mut current_text = String::new();

            for (x, &ch) in row.iter().enumerate() {
                if ch == CONTINUATION {
                    continue;
                }
                let style = self.styles[y][x];
                if style != current_style {
                    if !current_text.is_empty() {
                        spans.push(Span::styled(current_text.clone(), current_style));
                        current_text.clear();
                    }
                    current_style = style;
                }
                current_text.push(ch);
            }

            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }

            lines.push(Line::from(spans));
        }

        lines
    }
}
