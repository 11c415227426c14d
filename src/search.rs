use crate::catalog::{Catalog, NodeKind, TreeNode};
use std::rc::Rc;

/// Breadcrumb separator used in result paths.
pub const PATH_SEPARATOR: &str = " > ";

/// Queries shorter than this (in chars) return nothing.
pub const MIN_QUERY_LEN: usize = 2;

pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub name: String,
    pub kind: NodeKind,
    pub url: Option<String>,
    pub path: String,
    pub source: Rc<TreeNode>,
}

impl SearchResult {
    /// Breadcrumb without the result's own name.
    pub fn parent_path(&self) -> String {
        match self.path.rsplit_once(PATH_SEPARATOR) {
            Some((parent, _)) => parent.to_string(),
            None => String::new(),
        }
    }
}

/// Case-insensitive substring search over every entry below the catalog
/// root, in pre-order. Not ranked; the first `MAX_RESULTS` matches win.
pub fn search(catalog: &Catalog, query: &str) -> Vec<SearchResult> {
    let mut results = Vec::new();
    if query.chars().count() < MIN_QUERY_LEN {
        return results;
    }

    let needle = query.to_lowercase();
    find_recursive(&catalog.root.children, "", &needle, &mut results);
    results.truncate(MAX_RESULTS);

    tracing::debug!(query, matches = results.len(), "search");
    results
}

fn find_recursive(
    items: &[Rc<TreeNode>],
    path: &str,
    needle: &str,
    results: &mut Vec<SearchResult>,
) {
    for item in items {
        if results.len() >= MAX_RESULTS {
            return;
        }

        let current_path = if path.is_empty() {
            item.name.clone()
        } else {
            format!("{}{}{}", path, PATH_SEPARATOR, item.name)
        };

        if item.name.to_lowercase().contains(needle) {
            results.push(SearchResult {
                name: item.name.clone(),
                kind: item.kind,
                url: item.url.clone(),
                path: current_path.clone(),
                source: item.clone(),
            });
        }

        find_recursive(&item.children, &current_path, needle, results);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_catalog() -> Catalog {
        Catalog::new(TreeNode::folder(
            "OSINT",
            vec![TreeNode::folder(
                "Email Address",
                vec![TreeNode::link("Hunter.io", "https://hunter.io")],
            )],
        ))
    }

    #[test]
    fn test_spec_example() {
        let results = search(&email_catalog(), "hunt");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Hunter.io");
        assert_eq!(results[0].kind, NodeKind::Url);
        assert_eq!(results[0].url.as_deref(), Some("https://hunter.io"));
        assert_eq!(results[0].path, "Email Address > Hunter.io");
        assert_eq!(results[0].parent_path(), "Email Address");
    }

    #[test]
    fn test_short_query_is_empty() {
        let catalog = email_catalog();
        assert!(search(&catalog, "").is_empty());
        assert!(search(&catalog, "h").is_empty());
        assert!(search(&catalog, "é").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let results = search(&email_catalog(), "EMAIL");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, "Email Address");
        assert_eq!(results[0].parent_path(), "");
    }

    #[test]
    fn test_limit_and_preorder() {
        let children = (0..15)
            .map(|i| {
                TreeNode::folder(
                    format!("Tool {:02}", i),
                    vec![TreeNode::item(format!("tool note {}", i))],
                )
            })
            .collect();
        let catalog = Catalog::new(TreeNode::folder(
            "OSINT",
            vec![TreeNode::folder("Tools", children)],
        ));

        let results = search(&catalog, "tool");
        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(results[0].path, "Tools");
        assert_eq!(results[1].path, "Tools > Tool 00");
        assert_eq!(results[2].path, "Tools > Tool 00 > tool note 0");
        assert_eq!(results[3].path, "Tools > Tool 01");
    }

    #[test]
    fn test_root_itself_is_not_searched() {
        let results = search(&email_catalog(), "osint");
        assert!(results.is_empty());
    }
}
