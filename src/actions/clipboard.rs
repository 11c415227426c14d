use crate::app::AppState;
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};

/// Copies the selected link's URL. The internal register is always filled;
/// the system clipboard is best effort.
pub fn yank_url(app: &mut AppState) -> Result<()> {
    let Some(node) = app.selected.and_then(|id| app.session.node(id)) else {
        app.set_message("Nothing selected");
        return Ok(());
    };

    let Some(url) = node.url().map(str::to_string) else {
        let msg = format!("{} has no link", node.name());
        app.set_message(msg);
        return Ok(());
    };

    app.clipboard = Some(url.clone());

    // Try to copy to system clipboard
    if let Ok(mut ctx) = ClipboardContext::new() {
        if let Err(e) = ctx.set_contents(url.clone()) {
            tracing::warn!(error = %e, "system clipboard unavailable");
        }
    }

    app.set_message(format!("Yanked {}", url));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, TreeNode};
    use crate::config::AppConfig;
    use crate::navigation;

    fn create_test_app() -> AppState {
        let catalog = Catalog::new(TreeNode::folder(
            "OSINT",
            vec![TreeNode::folder(
                "Username",
                vec![TreeNode::link("Namechk", "https://namechk.com")],
            )],
        ));
        let mut app = AppState::with_catalog(AppConfig::default(), Ok(catalog));
        navigation::select_category(&mut app, "Username");
        app
    }

    #[test]
    fn test_yank_link() {
        let mut app = create_test_app();
        let root = app.session.root_id.unwrap();
        app.selected = Some(app.session.children_of(root)[0]);

        yank_url(&mut app).unwrap();
        assert_eq!(app.clipboard.as_deref(), Some("https://namechk.com"));
    }

    #[test]
    fn test_yank_folder_has_no_link() {
        let mut app = create_test_app();
        yank_url(&mut app).unwrap();
        assert!(app.clipboard.is_none());
        assert_eq!(app.message.unwrap().text, "Username has no link");
    }
}
