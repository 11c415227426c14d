mod common;

use common::{create_fixture_app, find_by_name, load_fixture_catalog};
use osint_map::layout::Viewport;
use osint_map::{MapSession, RenderError};

#[test]
fn test_default_category_is_domain_name() {
    let app = create_fixture_app();
    let root = app.session.root_id.unwrap();

    assert_eq!(app.session.node(root).unwrap().name(), "Domain Name");
    assert_eq!(app.sidebar.active_name(), Some("Domain Name"));
    // root plus its three children
    assert_eq!(app.session.visible_count(), 4);
    assert_eq!(app.session.edges.len(), 3);
}

#[test]
fn test_keys_follow_creation_order() {
    let catalog = load_fixture_catalog();
    let mut session = MapSession::default();
    let viewport = Viewport::new(100.0, 30.0);
    session
        .render_category(&catalog, "Email Address", &viewport)
        .unwrap();

    let keys: Vec<String> = session
        .visible_nodes()
        .into_iter()
        .map(|id| session.node(id).unwrap().key.clone())
        .collect();
    assert_eq!(
        keys,
        vec![
            "node-Email-Address-0-1",
            "node-Hunter-1-2",
            "node-Breach-Data-1-3",
            "node-Mailbox-Verification-1-4",
        ]
    );

    // A new render starts counting again.
    session.render_category(&catalog, "Dark Web", &viewport).unwrap();
    let root = session.root_id.unwrap();
    assert_eq!(session.node(root).unwrap().key, "node-Dark-Web-0-1");
}

#[test]
fn test_children_stack_around_parent_center() {
    let catalog = load_fixture_catalog();
    let mut session = MapSession::default();
    let viewport = Viewport::new(100.0, 30.0);
    let root = session
        .render_category(&catalog, "Domain Name", &viewport)
        .unwrap();

    let parent = session.position(root).unwrap().clone();
    let children = session.children_of(root);
    let ys: Vec<f64> = children
        .iter()
        .map(|id| session.position(*id).unwrap().y)
        .collect();

    // base height 4 + vertical gap 1
    assert_eq!(ys[1] - ys[0], 5.0);
    assert_eq!(ys[2] - ys[1], 5.0);
    let block_mid = (ys[0] + ys[2] + 4.0) / 2.0;
    assert!((block_mid - parent.center_y()).abs() < 1e-9);

    for id in children {
        let pos = session.position(id).unwrap();
        assert_eq!(pos.x, parent.right() + 8.0);
        assert_eq!(pos.level, 1);
    }
}

#[test]
fn test_expand_collapse_round_trip() {
    let mut app = create_fixture_app();
    let whois = find_by_name(&app.session, "Whois Records").unwrap();

    assert!(app.session.toggle(whois, &app.viewport));
    assert_eq!(app.session.visible_count(), 6);
    assert_eq!(app.session.edges.len(), 5);

    assert!(app.session.toggle(whois, &app.viewport));
    assert_eq!(app.session.visible_count(), 4);
    assert_eq!(app.session.edges.len(), 3);
    assert!(find_by_name(&app.session, "Whoisology").is_none());
}

#[test]
fn test_collapsing_root_removes_nested_descendants() {
    let mut app = create_fixture_app();
    let root = app.session.root_id.unwrap();
    let whois = find_by_name(&app.session, "Whois Records").unwrap();
    app.session.expand(whois, &app.viewport);

    assert!(app.session.collapse(root));
    assert_eq!(app.session.visible_count(), 1);
    assert!(app.session.edges.is_empty());
    assert_eq!(app.session.positions.len(), 1);
}

#[test]
fn test_empty_folder_does_not_expand() {
    let mut app = create_fixture_app();
    let subdomains = find_by_name(&app.session, "Subdomains").unwrap();

    assert!(!app.session.expand(subdomains, &app.viewport));
    assert_eq!(app.session.node(subdomains).unwrap().detail(), "Empty");
}

#[test]
fn test_recenter_moves_only_the_root() {
    let mut app = create_fixture_app();
    let root = app.session.root_id.unwrap();
    let child = app.session.children_of(root)[0];
    let child_before = app.session.position(child).unwrap().clone();

    app.viewport.scroll_by(0.0, 7.0);
    assert!(app.recenter());

    let root_pos = app.session.position(root).unwrap();
    assert!((root_pos.center_y() - app.viewport.center_y()).abs() < 1e-9);
    assert_eq!(app.session.position(child).unwrap(), &child_before);

    let edge = app
        .session
        .edges
        .edges
        .iter()
        .find(|e| e.to == child)
        .unwrap();
    assert_eq!(edge.y1, root_pos.center_y());
}

#[test]
fn test_render_from_path_expands_along_path() {
    let catalog = load_fixture_catalog();
    let mut session = MapSession::default();
    let viewport = Viewport::new(100.0, 30.0);

    let target = session
        .render_from_path(&catalog, "Username > Username Search Engines", &viewport)
        .unwrap();
    assert_eq!(session.node(target).unwrap().name(), "Username Search Engines");
    // root, two children; the target itself stays closed
    assert_eq!(session.visible_count(), 3);
}

#[test]
fn test_render_from_path_stops_at_missing_segment() {
    let catalog = load_fixture_catalog();
    let mut session = MapSession::default();
    let viewport = Viewport::new(100.0, 30.0);

    let reached = session
        .render_from_path(&catalog, "Email Address > Nope > Deeper", &viewport)
        .unwrap();
    assert_eq!(session.node(reached).unwrap().name(), "Email Address");

    let err = session
        .render_from_path(&catalog, "Missing", &viewport)
        .unwrap_err();
    assert_eq!(err, RenderError::CategoryNotFound("Missing".to_string()));
    assert_eq!(session.visible_count(), 0);
}
