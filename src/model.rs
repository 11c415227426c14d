use crate::catalog::{NodeKind, TreeNode};
use crate::icons;
use indextree::NodeId as TreeNodeId;
use std::rc::Rc;

pub type VisualId = TreeNodeId;

/// What happens when a node is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Toggle,
    Open(String),
    None,
}

/// A rendered box for one catalog entry at one expansion.
#[derive(Debug, Clone)]
pub struct VisualNode {
    pub key: String,
    pub source: Rc<TreeNode>,
    pub level: usize,
    pub expanded: bool,
    pub icon: String,
}

impl VisualNode {
    pub fn new(key: String, source: Rc<TreeNode>, level: usize) -> Self {
        let icon = icons::resolve_icon(&source);
        Self {
            key,
            source,
            level,
            expanded: false,
            icon,
        }
    }

    pub fn name(&self) -> &str {
        &self.source.name
    }

    pub fn kind(&self) -> NodeKind {
        self.source.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.source.url.as_deref()
    }

    pub fn is_folder(&self) -> bool {
        self.source.is_folder()
    }

    pub fn child_count(&self) -> usize {
        self.source.children.len()
    }

    /// Second line of the box.
    pub fn detail(&self) -> String {
        match self.kind() {
            NodeKind::Folder => match self.child_count() {
                0 => "Empty".to_string(),
                n => format!("{} items", n),
            },
            NodeKind::Url => self.url().map(url_host).unwrap_or_default(),
            NodeKind::Item | NodeKind::Unknown => "Item".to_string(),
        }
    }

    pub fn activation(&self) -> Activation {
        match self.kind() {
            NodeKind::Folder => Activation::Toggle,
            NodeKind::Url => match self.url() {
                Some(url) => Activation::Open(url.to_string()),
                None => Activation::None,
            },
            NodeKind::Item | NodeKind::Unknown => Activation::None,
        }
    }
}

/// Host part of a URL, or the URL itself when it has no scheme.
pub fn url_host(url: &str) -> String {
    match url.split_once("://") {
        Some((_, rest)) => rest
            .split(['/', '?', '#'])
            .next()
            .filter(|host| !host.is_empty())
            .unwrap_or(url)
            .to_string(),
        None => url.to_string(),
    }
}

/// Layout record of one visual node.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub level: usize,
    pub name: String,
}

impl Position {
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}
