use crate::catalog::{Catalog, TreeNode};
use crate::edges::EdgeLayer;
use crate::icons;
use crate::layout::{LayoutConfig, LayoutEngine, Viewport};
use crate::model::{Position, VisualId, VisualNode};
use crate::search::PATH_SEPARATOR;
use indextree::Arena;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Category \"{0}\" not found.")]
    CategoryNotFound(String),
}

/// State of one rendered mind map: the visible nodes, their layout and edges.
///
/// Every render starts from a full clear, so a failed render never leaves
/// stale nodes behind.
pub struct MapSession {
    pub tree: Arena<VisualNode>,
    pub root_id: Option<VisualId>,
    pub positions: HashMap<VisualId, Position>,
    pub edges: EdgeLayer,
    pub layout: LayoutEngine,
    counter: usize,
}

impl Default for MapSession {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl MapSession {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            tree: Arena::new(),
            root_id: None,
            positions: HashMap::new(),
            edges: EdgeLayer::new(),
            layout: LayoutEngine::new(layout),
            counter: 0,
        }
    }

    pub fn clear(&mut self) {
        self.tree = Arena::new();
        self.root_id = None;
        self.positions.clear();
        self.edges.clear();
        self.edges.define_arrow_marker();
        self.counter = 0;
    }

    pub fn node(&self, id: VisualId) -> Option<&VisualNode> {
        self.tree
            .get(id)
            .filter(|n| !n.is_removed())
            .map(|n| n.get())
    }

    pub fn position(&self, id: VisualId) -> Option<&Position> {
        self.positions.get(&id)
    }

    pub fn parent_of(&self, id: VisualId) -> Option<VisualId> {
        self.tree.get(id).and_then(|n| n.parent())
    }

    pub fn children_of(&self, id: VisualId) -> Vec<VisualId> {
        if self.node(id).is_none() {
            return Vec::new();
        }
        id.children(&self.tree).collect()
    }

    /// Visible nodes in pre-order, root first.
    pub fn visible_nodes(&self) -> Vec<VisualId> {
        match self.root_id {
            Some(root) => root.descendants(&self.tree).collect(),
            None => Vec::new(),
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible_nodes().len()
    }

    /// Topmost node whose box covers the point.
    pub fn node_at(&self, x: f64, y: f64) -> Option<VisualId> {
        self.visible_nodes()
            .into_iter()
            .rev()
            .find(|id| self.positions.get(id).is_some_and(|p| p.contains(x, y)))
    }

    fn next_key(&mut self, name: &str, level: usize) -> String {
        self.counter += 1;
        let sanitized = sanitize_name(name);
        let base = if sanitized.is_empty() {
            "item"
        } else {
            sanitized.as_str()
        };
        format!("node-{}-{}-{}", base, level, self.counter)
    }

    pub fn create_node(
        &mut self,
        source: Rc<TreeNode>,
        level: usize,
        parent: Option<VisualId>,
    ) -> VisualId {
        let key = self.next_key(&source.name, level);
        let id = self.tree.new_node(VisualNode::new(key, source, level));
        if let Some(parent) = parent {
            parent.append(id, &mut self.tree);
        }
        id
    }

    /// Clears the map and shows `category` as the only node.
    pub fn render_root(
        &mut self,
        catalog: &Catalog,
        category: &str,
        viewport: &Viewport,
    ) -> Result<VisualId, RenderError> {
        self.clear();

        let Some(source) = catalog.category(category).cloned() else {
            tracing::warn!(category, "category not found");
            return Err(RenderError::CategoryNotFound(category.to_string()));
        };

        let root = self.create_node(source, 0, None);
        if let Some(icon) = icons::category_icon(category) {
            if let Some(node) = self.tree.get_mut(root) {
                node.get_mut().icon = icon.to_string();
            }
        }

        if let Some(node) = self.node(root) {
            let position = self.layout.position_node(node, 0, 0, 1, None, viewport);
            self.positions.insert(root, position);
        }
        self.root_id = Some(root);

        tracing::debug!(category, "rendered root");
        Ok(root)
    }

    /// Renders a category as root with its first level expanded.
    pub fn render_category(
        &mut self,
        catalog: &Catalog,
        category: &str,
        viewport: &Viewport,
    ) -> Result<VisualId, RenderError> {
        let root = self.render_root(catalog, category, viewport)?;
        self.expand(root, viewport);
        Ok(root)
    }

    /// Renders the first path segment as root and expands along the rest of
    /// the path. Stops at the first segment that cannot be found and returns
    /// the deepest node reached.
    pub fn render_from_path(
        &mut self,
        catalog: &Catalog,
        path: &str,
        viewport: &Viewport,
    ) -> Result<VisualId, RenderError> {
        let mut segments = path.split(PATH_SEPARATOR);
        let category = segments.next().unwrap_or_default();
        let rest: Vec<&str> = segments.collect();

        let root = self.render_root(catalog, category, viewport)?;
        if rest.is_empty() {
            self.expand(root, viewport);
            return Ok(root);
        }

        let mut current = root;
        for segment in rest {
            let Some(source) = self.node(current).map(|n| n.source.clone()) else {
                break;
            };
            let Some(target) = source.child(segment) else {
                tracing::debug!(segment, "path segment not found, stopping");
                break;
            };
            let has_children = !target.children.is_empty();

            self.expand(current, viewport);
            let next = current
                .children(&self.tree)
                .filter(|id| self.node(*id).is_some_and(|n| n.name() == segment))
                .last();

            match next {
                Some(next) => current = next,
                None => break,
            }
            if !has_children {
                break;
            }
        }

        Ok(current)
    }

    /// Shows the children of a folder. Returns `false` when nothing changed.
    pub fn expand(&mut self, id: VisualId, viewport: &Viewport) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        if node.expanded || !node.is_folder() || node.source.children.is_empty() {
            return false;
        }
        let Some(parent_position) = self.positions.get(&id).cloned() else {
            return false;
        };

        let source = node.source.clone();
        let level = node.level + 1;
        if let Some(node) = self.tree.get_mut(id) {
            node.get_mut().expanded = true;
        }

        let total = source.children.len();
        for (index, child_source) in source.children.iter().enumerate() {
            let child = self.create_node(child_source.clone(), level, Some(id));
            if let Some(child_node) = self.node(child) {
                let position = self.layout.position_node(
                    child_node,
                    level,
                    index,
                    total,
                    Some(&parent_position),
                    viewport,
                );
                self.positions.insert(child, position);
            }
            self.edges.draw_line(id, child, &self.positions);
        }

        tracing::debug!(name = %source.name, children = total, "expanded");
        true
    }

    /// Removes every descendant of an expanded folder. Returns `false` when
    /// the node was not expanded.
    pub fn collapse(&mut self, id: VisualId) -> bool {
        match self.node(id) {
            Some(node) if node.expanded => {}
            _ => return false,
        }

        let mut removed = HashSet::new();
        self.remove_children_recursive(id, &mut removed);
        self.edges.remove_inbound(&removed);

        if let Some(node) = self.tree.get_mut(id) {
            node.get_mut().expanded = false;
        }

        tracing::debug!(removed = removed.len(), "collapsed");
        true
    }

    fn remove_children_recursive(&mut self, parent: VisualId, removed: &mut HashSet<VisualId>) {
        let children: Vec<VisualId> = parent.children(&self.tree).collect();
        for child in children {
            if self.node(child).is_some_and(|n| n.expanded) {
                self.remove_children_recursive(child, removed);
            }
            self.positions.remove(&child);
            removed.insert(child);
            child.remove_subtree(&mut self.tree);
        }
    }

    pub fn toggle(&mut self, id: VisualId, viewport: &Viewport) -> bool {
        if self.node(id).is_some_and(|n| n.expanded) {
            self.collapse(id)
        } else {
            self.expand(id, viewport)
        }
    }

    /// Moves the root back to the vertical centre of the visible area and
    /// redraws every edge. Descendants keep their positions.
    pub fn recenter_root(&mut self, viewport: &Viewport) -> bool {
        let Some(root) = self.root_id else {
            return false;
        };
        let Some(position) = self.positions.get_mut(&root) else {
            return false;
        };

        let (x, y) = self.layout.root_origin(position.height, viewport);
        position.x = x;
        position.y = y;

        self.redraw_edges();
        true
    }

    pub fn redraw_edges(&mut self) {
        let links: Vec<(VisualId, VisualId)> = self
            .visible_nodes()
            .into_iter()
            .filter_map(|id| self.parent_of(id).map(|parent| (parent, id)))
            .collect();
        self.edges.redraw_all(links, &self.positions);
    }

    /// Far edges of the laid out map.
    pub fn extent(&self) -> (f64, f64) {
        self.positions.values().fold((0.0, 0.0), |(w, h), p| {
            (f64::max(w, p.right()), f64::max(h, p.bottom()))
        })
    }
}

static KEY_UNSAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_]").expect("key pattern is valid"));

fn sanitize_name(name: &str) -> String {
    KEY_UNSAFE
        .replace_all(name, "-")
        .trim_matches('-')
        .to_string()
}
