use serde::{Deserialize, Deserializer};
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

/// Category shown first when nothing else was requested.
pub const PREFERRED_DEFAULT_CATEGORY: &str = "Domain Name";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("OSINT data structure not found: {0}")]
    Io(#[from] io::Error),
    #[error("Error parsing OSINT data JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("OSINT data structure is empty")]
    Empty,
    #[error("OSINT data root has no categories")]
    NoCategories,
}

impl CatalogError {
    /// Short text shown in place of the map when the catalog cannot be used.
    pub fn placeholder(&self) -> &'static str {
        match self {
            CatalogError::Json(_) => "Error loading OSINT data structure.",
            CatalogError::Io(_) | CatalogError::Empty | CatalogError::NoCategories => {
                "OSINT data structure not found."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Folder,
    Url,
    Item,
    Unknown,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Folder => "folder",
            NodeKind::Url => "url",
            NodeKind::Item => "item",
            NodeKind::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "folder" => NodeKind::Folder,
            "url" => NodeKind::Url,
            "item" => NodeKind::Item,
            _ => NodeKind::Unknown,
        })
    }
}

fn default_kind() -> NodeKind {
    NodeKind::Unknown
}

/// One entry of the catalog. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeNode {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: NodeKind,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub children: Vec<Rc<TreeNode>>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            icon: None,
            url: None,
            children: Vec::new(),
        }
    }

    pub fn folder(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            children: children.into_iter().map(Rc::new).collect(),
            ..Self::new(name, NodeKind::Folder)
        }
    }

    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(name, NodeKind::Url)
        }
    }

    pub fn item(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Item)
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Finds a direct child by exact name.
    pub fn child(&self, name: &str) -> Option<&Rc<TreeNode>> {
        self.children.iter().find(|child| child.name == name)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub root: Rc<TreeNode>,
}

impl Catalog {
    pub fn new(root: TreeNode) -> Self {
        Self {
            root: Rc::new(root),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        if content.trim().is_empty() {
            return Err(CatalogError::Empty);
        }

        let root: TreeNode = serde_json::from_str(content)?;
        if root.children.is_empty() {
            return Err(CatalogError::NoCategories);
        }

        tracing::info!(categories = root.children.len(), "catalog parsed");
        Ok(Self::new(root))
    }

    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn categories(&self) -> &[Rc<TreeNode>] {
        &self.root.children
    }

    pub fn category(&self, name: &str) -> Option<&Rc<TreeNode>> {
        self.root.child(name)
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories().iter().map(|c| c.name.clone()).collect()
    }

    pub fn default_category(&self) -> Option<&str> {
        self.category(PREFERRED_DEFAULT_CATEGORY)
            .or_else(|| self.categories().first())
            .map(|c| c.name.as_str())
    }

    /// Total number of entries below the root.
    pub fn len(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            node.children.iter().map(|c| 1 + count(c)).sum()
        }
        count(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}
