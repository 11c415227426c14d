use crate::model::{Position, VisualNode};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Rows taken by a node box: top border, label, detail, bottom border.
pub const NODE_BOX_HEIGHT: f64 = 4.0;

/// Columns taken by the box chrome: two borders and one space of padding on each side.
const NODE_BOX_CHROME: f64 = 4.0;

/// Icon glyph plus the space after it.
const ICON_WIDTH: f64 = 2.0;

/// Layout constants, in terminal cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub root_margin: f64,
    pub min_margin: f64,
    pub horizontal_gap: f64,
    pub vertical_gap: f64,
    pub base_node_width: f64,
    pub base_node_height: f64,
    pub max_node_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root_margin: 3.0,
            min_margin: 1.0,
            horizontal_gap: 8.0,
            vertical_gap: 1.0,
            base_node_width: 18.0,
            base_node_height: NODE_BOX_HEIGHT,
            max_node_width: 32.0,
        }
    }
}

/// Visible part of the map pane and how far it is scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_left: 0.0,
            scroll_top: 0.0,
        }
    }

    pub fn center_y(&self) -> f64 {
        self.scroll_top + self.height / 2.0
    }

    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.scroll_left = (self.scroll_left + dx).max(0.0);
        self.scroll_top = (self.scroll_top + dy).max(0.0);
    }
}

pub struct LayoutEngine {
    pub config: LayoutConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Box size of a node as it will be drawn.
    pub fn measure(&self, node: &VisualNode) -> (f64, f64) {
        let label = node.name().width() as f64 + ICON_WIDTH;
        let detail = node.detail().width() as f64;
        let content = label.max(detail);

        let width = if content <= ICON_WIDTH {
            self.config.base_node_width
        } else {
            (content + NODE_BOX_CHROME).min(self.config.max_node_width)
        };

        (width, NODE_BOX_HEIGHT)
    }

    /// Computes the position of `node`. Children are placed purely from the
    /// parent's recorded position.
    #[allow(clippy::too_many_arguments)]
    pub fn position_node(
        &self,
        node: &VisualNode,
        level: usize,
        sibling_index: usize,
        total_siblings: usize,
        parent: Option<&Position>,
        viewport: &Viewport,
    ) -> Position {
        let (width, height) = self.measure(node);

        let (x, y) = match parent {
            Some(parent) if level > 0 => {
                let x = parent.right() + self.config.horizontal_gap;
                let block_top = parent.center_y() - self.sibling_block_height(total_siblings) / 2.0;
                let y = block_top
                    + sibling_index as f64
                        * (self.config.base_node_height + self.config.vertical_gap);
                (x, y)
            }
            _ => self.root_origin(height, viewport),
        };

        Position {
            x: x.max(self.config.min_margin + viewport.scroll_left),
            y: y.max(self.config.min_margin + viewport.scroll_top),
            width,
            height,
            level,
            name: node.name().to_string(),
        }
    }

    /// Root spot: fixed left margin, vertically centred in the visible area.
    pub fn root_origin(&self, height: f64, viewport: &Viewport) -> (f64, f64) {
        let x = self.config.root_margin + viewport.scroll_left;
        let y = viewport.height / 2.0 - height / 2.0 + viewport.scroll_top;
        (x, y)
    }

    pub fn sibling_block_height(&self, total_siblings: usize) -> f64 {
        if total_siblings == 0 {
            return 0.0;
        }
        let n = total_siblings as f64;
        n * self.config.base_node_height + (n - 1.0) * self.config.vertical_gap
    }
}
