use crate::model::{Position, VisualId};
use std::collections::{HashMap, HashSet};

/// Connection from a parent's right-centre to a child's left-centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: VisualId,
    pub to: VisualId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Edge {
    pub fn between(from: VisualId, to: VisualId, parent: &Position, child: &Position) -> Self {
        Self {
            from,
            to,
            x1: parent.right(),
            y1: parent.center_y(),
            x2: child.x,
            y2: child.center_y(),
        }
    }
}

/// Arrowhead shared by every edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowMarker {
    pub id: &'static str,
    pub view_box: &'static str,
    pub ref_x: f64,
    pub ref_y: f64,
    pub width: f64,
    pub height: f64,
    pub orient: &'static str,
    pub path: &'static str,
}

impl Default for ArrowMarker {
    fn default() -> Self {
        Self {
            id: "arrow",
            view_box: "0 0 10 10",
            ref_x: 9.0,
            ref_y: 5.0,
            width: 6.0,
            height: 6.0,
            orient: "auto-start-reverse",
            path: "M 0 0 L 10 5 L 0 10 z",
        }
    }
}

/// Drawn edges. Endpoints are coordinates, so any layout change needs a redraw.
#[derive(Debug, Default, Clone)]
pub struct EdgeLayer {
    pub marker: Option<ArrowMarker>,
    pub edges: Vec<Edge>,
}

impl EdgeLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_arrow_marker(&mut self) {
        if self.marker.is_none() {
            self.marker = Some(ArrowMarker::default());
        }
    }

    pub fn clear(&mut self) {
        self.marker = None;
        self.edges.clear();
    }

    /// Adds one edge; skipped when either end has no recorded position.
    pub fn draw_line(
        &mut self,
        from: VisualId,
        to: VisualId,
        positions: &HashMap<VisualId, Position>,
    ) -> bool {
        match (positions.get(&from), positions.get(&to)) {
            (Some(parent), Some(child)) => {
                self.edges.push(Edge::between(from, to, parent, child));
                true
            }
            _ => false,
        }
    }

    /// Clears and regenerates one edge per `(parent, child)` pair.
    pub fn redraw_all<I>(&mut self, links: I, positions: &HashMap<VisualId, Position>)
    where
        I: IntoIterator<Item = (VisualId, VisualId)>,
    {
        self.clear();
        self.define_arrow_marker();
        for (parent, child) in links {
            self.draw_line(parent, child, positions);
        }
    }

    pub fn remove_inbound(&mut self, removed: &HashSet<VisualId>) {
        self.edges.retain(|edge| !removed.contains(&edge.to));
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
