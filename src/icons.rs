use crate::catalog::{NodeKind, TreeNode};

pub const FOLDER_ICON: &str = "fa-folder";
pub const LINK_ICON: &str = "fa-link";
pub const FILE_ICON: &str = "fa-file-alt";
pub const UNKNOWN_ICON: &str = "fa-question-circle";
pub const SIDEBAR_DEFAULT_ICON: &str = "fa-folder-open";

/// Icons for the well-known top-level categories.
const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("Username", "fa-user-secret"),
    ("Email Address", "fa-envelope-open-text"),
    ("Domain Name", "fa-network-wired"),
    ("IP & MAC Address", "fa-laptop-code"),
    ("Images / Videos / Docs", "fa-photo-video"),
    ("Social Networks", "fa-users-cog"),
    ("Instant Messaging", "fa-comments"),
    ("People Search Engines", "fa-address-book"),
    ("Dating", "fa-heart"),
    ("Telephone Numbers", "fa-phone-square-alt"),
    ("Public Records", "fa-landmark"),
    ("Business Records", "fa-building"),
    ("Transportation", "fa-car-side"),
    ("Geolocation Tools / Maps", "fa-map-marked-alt"),
    ("Search Engines", "fa-search-plus"),
    ("Forums / Blogs / IRC", "fa-rss-square"),
    ("Archives", "fa-archive"),
    ("Language Translation", "fa-language"),
    ("Metadata", "fa-cogs"),
    ("Mobile Emulation", "fa-mobile-alt"),
    ("Terrorism", "fa-biohazard"),
    ("Dark Web", "fa-user-ninja"),
    ("Digital Currency", "fa-coins"),
    ("Classifieds", "fa-bullhorn"),
    ("Encoding / Decoding", "fa-terminal"),
    ("Tools", "fa-tools"),
    ("AI Tools", "fa-brain"),
    ("Malicious File Analysis", "fa-file-medical-alt"),
    ("Exploits & Advisories", "fa-shield-virus"),
    ("Threat Intelligence", "fa-chart-line"),
    ("OpSec", "fa-user-shield"),
    ("Documentation / Evidence Capture", "fa-camera-retro"),
    ("Training", "fa-graduation-cap"),
];

pub fn category_icon(name: &str) -> Option<&'static str> {
    CATEGORY_ICONS
        .iter()
        .find(|(category, _)| *category == name)
        .map(|(_, icon)| *icon)
}

/// Resolves the icon for a node: explicit icon, then the category table
/// (folders only), then the default for its kind.
pub fn resolve_icon(node: &TreeNode) -> String {
    if let Some(ref icon) = node.icon {
        return icon.clone();
    }

    let fallback = match node.kind {
        NodeKind::Folder => category_icon(&node.name).unwrap_or(FOLDER_ICON),
        NodeKind::Url => LINK_ICON,
        NodeKind::Item => FILE_ICON,
        NodeKind::Unknown => UNKNOWN_ICON,
    };
    fallback.to_string()
}

/// Icon used by the sidebar for a top-level category.
pub fn sidebar_icon(name: &str) -> &'static str {
    category_icon(name).unwrap_or(SIDEBAR_DEFAULT_ICON)
}

/// Single-cell glyph drawn in the terminal for an icon name.
pub fn glyph(icon: &str) -> char {
    match icon {
        LINK_ICON => '↗',
        FILE_ICON => '•',
        UNKNOWN_ICON => '?',
        "fa-user-secret" | "fa-user-ninja" | "fa-user-shield" => '☻',
        "fa-envelope-open-text" => '✉',
        "fa-network-wired" | "fa-laptop-code" => '⌘',
        "fa-phone-square-alt" => '☎',
        "fa-heart" => '♥',
        "fa-search-plus" => '⌕',
        "fa-map-marked-alt" => '⌖',
        "fa-coins" => '¤',
        "fa-biohazard" => '☣',
        "fa-terminal" => '›',
        "fa-tools" | "fa-cogs" => '⚙',
        "fa-brain" => '✱',
        "fa-chart-line" => '↯',
        "fa-graduation-cap" => '✎',
        _ => '▣',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_icon_wins() {
        let mut node = TreeNode::folder("Email Address", vec![]);
        node.icon = Some("fa-custom".to_string());
        assert_eq!(resolve_icon(&node), "fa-custom");
    }

    #[test]
    fn test_category_table_for_folders() {
        let node = TreeNode::folder("Email Address", vec![]);
        assert_eq!(resolve_icon(&node), "fa-envelope-open-text");

        let node = TreeNode::folder("Something Else", vec![]);
        assert_eq!(resolve_icon(&node), FOLDER_ICON);
    }

    #[test]
    fn test_kind_defaults() {
        assert_eq!(resolve_icon(&TreeNode::link("Tools", "https://x")), LINK_ICON);
        assert_eq!(resolve_icon(&TreeNode::item("Tools")), FILE_ICON);
        assert_eq!(
            resolve_icon(&TreeNode::new("x", NodeKind::Unknown)),
            UNKNOWN_ICON
        );
    }

    #[test]
    fn test_sidebar_icon_default() {
        assert_eq!(sidebar_icon("Dating"), "fa-heart");
        assert_eq!(sidebar_icon("Nope"), SIDEBAR_DEFAULT_ICON);
    }
}
