use crate::edges::Edge;
use crate::layout::Viewport;
use crate::ui::canvas::BufferCanvas;
use crate::ui::constants::junction::{self, ARROW_HEAD, DOWN, LEFT, RIGHT, UP};
use ratatui::style::Style;
use std::collections::HashMap;

/// Rasterises edges as elbow connectors. Each cell collects the directions
/// passing through it so shared trunks merge into tees and crosses.
pub struct ConnectionRenderer {
    mask: HashMap<(i32, i32), u8>,
    arrows: Vec<(i32, i32)>,
    scroll_left: f64,
    scroll_top: f64,
}

impl ConnectionRenderer {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            mask: HashMap::new(),
            arrows: Vec::new(),
            scroll_left: viewport.scroll_left,
            scroll_top: viewport.scroll_top,
        }
    }

    fn cell(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x - self.scroll_left).round() as i32,
            (y - self.scroll_top).round() as i32,
        )
    }

    fn mark(&mut self, x: i32, y: i32, bits: u8) {
        *self.mask.entry((x, y)).or_insert(0) |= bits;
    }

    fn horizontal(&mut self, from: i32, to: i32, y: i32) {
        for x in from..=to {
            let mut bits = 0;
            if x > from {
                bits |= LEFT;
            }
            if x < to {
                bits |= RIGHT;
            }
            self.mark(x, y, bits);
        }
    }

    pub fn add_edge(&mut self, edge: &Edge) {
        let (x1, y1) = self.cell(edge.x1, edge.y1);
        let (x2, y2) = self.cell(edge.x2, edge.y2);
        // Arrowhead sits in the cell just left of the child box
        let end = x2 - 1;
        if end <= x1 {
            return;
        }

        let mid = x1 + (end - x1) / 2;

        self.horizontal(x1, mid, y1);
        if y1 != y2 {
            let (toward, back) = if y2 > y1 { (DOWN, UP) } else { (UP, DOWN) };
            self.mark(mid, y1, toward);
            for y in y1.min(y2) + 1..y1.max(y2) {
                self.mark(mid, y, UP | DOWN);
            }
            self.mark(mid, y2, back);
        }
        self.horizontal(mid, end, y2);
        self.arrows.push((end, y2));
    }

    pub fn draw(&self, canvas: &mut BufferCanvas, style: Style) {
        for (&(x, y), &bits) in &self.mask {
            if bits != 0 {
                canvas.put(x, y, junction::glyph(bits), style);
            }
        }
        for &(x, y) in &self.arrows {
            canvas.put(x, y, ARROW_HEAD, style);
        }
    }
}
