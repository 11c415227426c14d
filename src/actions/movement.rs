use crate::app::AppState;
use crate::model::{Position, VisualId};

// Weight factor for prioritizing vertical movement over horizontal
const VERTICAL_WEIGHT: f64 = 15.0;

/// Scrolls the map so the selected node is inside the viewport.
pub fn ensure_node_visible(app: &mut AppState) {
    let Some(position) = app.selected.and_then(|id| app.session.position(id)).cloned() else {
        return;
    };

    let margin = 1.0;
    let vp = app.viewport;
    let mut dx = 0.0;
    let mut dy = 0.0;

    if position.x < vp.scroll_left + margin {
        dx = position.x - margin - vp.scroll_left;
    } else if position.right() > vp.scroll_left + vp.width - margin {
        dx = position.right() - vp.width + margin - vp.scroll_left;
    }

    if position.y < vp.scroll_top + margin {
        dy = position.y - margin - vp.scroll_top;
    } else if position.bottom() > vp.scroll_top + vp.height - margin {
        dy = position.bottom() - vp.height + margin - vp.scroll_top;
    }

    if dx != 0.0 || dy != 0.0 {
        super::view::scroll(app, dx, dy);
    }
}

fn center(position: &Position) -> (f64, f64) {
    (position.x + position.width / 2.0, position.center_y())
}

// Find the nearest node in a specific direction using spatial distance
fn find_nearest_node_in_direction(
    app: &AppState,
    active_id: VisualId,
    direction_x: f64,
    direction_y: f64,
) -> Option<VisualId> {
    let (current_x, current_y) = center(app.session.position(active_id)?);

    let mut best_distance = f64::MAX;
    let mut best_node = None;

    for node_id in app.session.visible_nodes() {
        if node_id == active_id {
            continue;
        }
        let Some(position) = app.session.position(node_id) else {
            continue;
        };

        let (node_x, node_y) = center(position);
        let dx = node_x - current_x;
        let dy = node_y - current_y;

        let in_direction = (direction_x == 0.0 || dx * direction_x > 0.0)
            && (direction_y == 0.0 || dy * direction_y > 0.0);
        if !in_direction {
            continue;
        }

        let distance = if direction_y != 0.0 {
            (dy * VERTICAL_WEIGHT).powi(2) + dx.powi(2)
        } else {
            dy.powi(2) + dx.powi(2)
        };

        if distance < best_distance {
            best_distance = distance;
            best_node = Some(node_id);
        }
    }

    best_node
}

// Sibling directly above (`step < 0`) or below (`step > 0`) the active node.
fn adjacent_sibling(app: &AppState, active_id: VisualId, step: isize) -> Option<VisualId> {
    let parent = app.session.parent_of(active_id)?;
    let siblings = app.session.children_of(parent);
    let index = siblings.iter().position(|id| *id == active_id)?;
    let target = index.checked_add_signed(step)?;
    siblings.get(target).copied()
}

fn select(app: &mut AppState, id: VisualId) {
    app.selected = Some(id);
    ensure_node_visible(app);
}

pub fn go_up(app: &mut AppState) {
    let Some(active_id) = app.selected else {
        return;
    };
    let next = adjacent_sibling(app, active_id, -1)
        .or_else(|| find_nearest_node_in_direction(app, active_id, 0.0, -1.0));
    if let Some(next) = next {
        select(app, next);
    }
}

pub fn go_down(app: &mut AppState) {
    let Some(active_id) = app.selected else {
        return;
    };
    let next = adjacent_sibling(app, active_id, 1)
        .or_else(|| find_nearest_node_in_direction(app, active_id, 0.0, 1.0));
    if let Some(next) = next {
        select(app, next);
    }
}

pub fn go_left(app: &mut AppState) {
    if let Some(parent) = app.selected.and_then(|id| app.session.parent_of(id)) {
        select(app, parent);
    }
}

/// Moves to the first child, expanding a closed folder on the way.
pub fn go_right(app: &mut AppState) {
    let Some(active_id) = app.selected else {
        return;
    };

    if app.session.children_of(active_id).is_empty() {
        app.session.expand(active_id, &app.viewport);
    }

    let children = app.session.children_of(active_id);
    let Some(parent_y) = app.session.position(active_id).map(|p| p.center_y()) else {
        return;
    };

    // Prefer the child closest to the parent's row so the cursor stays put.
    let closest = children.into_iter().min_by(|a, b| {
        let da = app.session.position(*a).map_or(f64::MAX, |p| (p.center_y() - parent_y).abs());
        let db = app.session.position(*b).map_or(f64::MAX, |p| (p.center_y() - parent_y).abs());
        da.total_cmp(&db)
    });

    if let Some(child) = closest {
        select(app, child);
    }
}

pub fn go_to_root(app: &mut AppState) {
    if let Some(root) = app.session.root_id {
        select(app, root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, TreeNode};
    use crate::config::AppConfig;
    use crate::layout::Viewport;
    use crate::navigation;

    fn create_test_app() -> AppState {
        let catalog = Catalog::new(TreeNode::folder(
            "OSINT",
            vec![TreeNode::folder(
                "Username",
                vec![
                    TreeNode::link("Namechk", "https://namechk.com"),
                    TreeNode::folder("Engines", vec![TreeNode::item("Manual")]),
                    TreeNode::link("WhatsMyName", "https://whatsmyname.app"),
                ],
            )],
        ));
        let mut app = AppState::with_catalog(AppConfig::default(), Ok(catalog));
        app.viewport = Viewport::new(120.0, 40.0);
        navigation::select_category(&mut app, "Username");
        app
    }

    fn name_of(app: &AppState) -> String {
        app.session
            .node(app.selected.unwrap())
            .unwrap()
            .name()
            .to_string()
    }

    #[test]
    fn test_right_then_siblings() {
        let mut app = create_test_app();
        assert_eq!(name_of(&app), "Username");

        go_right(&mut app);
        assert_eq!(name_of(&app), "Engines");

        go_up(&mut app);
        assert_eq!(name_of(&app), "Namechk");

        go_down(&mut app);
        go_down(&mut app);
        assert_eq!(name_of(&app), "WhatsMyName");

        go_left(&mut app);
        assert_eq!(name_of(&app), "Username");
    }

    #[test]
    fn test_right_expands_folder() {
        let mut app = create_test_app();
        go_right(&mut app);
        assert_eq!(name_of(&app), "Engines");

        go_right(&mut app);
        assert_eq!(name_of(&app), "Manual");
        assert_eq!(app.session.visible_count(), 5);
    }

    #[test]
    fn test_go_to_root() {
        let mut app = create_test_app();
        go_right(&mut app);
        go_to_root(&mut app);
        assert_eq!(name_of(&app), "Username");
    }

    #[test]
    fn test_ensure_visible_scrolls() {
        let mut app = create_test_app();
        app.viewport = Viewport::new(20.0, 40.0);
        go_right(&mut app);
        assert!(app.viewport.scroll_left > 0.0);
    }
}
