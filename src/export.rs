use crate::catalog::NodeKind;
use crate::edges::ArrowMarker;
use crate::session::MapSession;
use anyhow::{Context, Result};
use std::fmt::{self, Write};
use std::fs;
use std::path::Path;

/// Pixels per terminal column / row.
const CELL_WIDTH: f64 = 8.0;
const CELL_HEIGHT: f64 = 16.0;
const MARGIN: f64 = 20.0;
const FONT_SIZE: f64 = 13.0;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn fill_for(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Folder => "#e8f0fe",
        NodeKind::Url => "#fdf2e9",
        NodeKind::Item | NodeKind::Unknown => "#f1f3f4",
    }
}

struct Frame {
    width: f64,
    height: f64,
}

impl Frame {
    fn x(&self, x: f64) -> f64 {
        x * CELL_WIDTH + MARGIN
    }

    fn y(&self, y: f64) -> f64 {
        y * CELL_HEIGHT + MARGIN
    }
}

fn write_marker(out: &mut impl Write, marker: &ArrowMarker) -> fmt::Result {
    write!(
        out,
        r#"<defs><marker id="{}" viewBox="{}" refX="{}" refY="{}" "#,
        marker.id, marker.view_box, marker.ref_x, marker.ref_y
    )?;
    write!(
        out,
        r#"markerWidth="{}" markerHeight="{}" orient="{}" class="mind-map-arrow-marker">"#,
        marker.width, marker.height, marker.orient
    )?;
    writeln!(out, r#"<path d="{}"/></marker></defs>"#, marker.path)
}

fn write_edges(out: &mut impl Write, session: &MapSession, frame: &Frame) -> fmt::Result {
    let marker_end = match session.edges.marker {
        Some(ref marker) => format!(r#" marker-end="url(#{})""#, marker.id),
        None => String::new(),
    };

    for edge in &session.edges.edges {
        writeln!(
            out,
            r##"<line class="mind-map-line" x1="{}" y1="{}" x2="{}" y2="{}" stroke="#888"{}/>"##,
            frame.x(edge.x1),
            frame.y(edge.y1),
            frame.x(edge.x2),
            frame.y(edge.y2),
            marker_end
        )?;
    }
    Ok(())
}

fn write_nodes(out: &mut impl Write, session: &MapSession, frame: &Frame) -> fmt::Result {
    for id in session.visible_nodes() {
        let (Some(node), Some(pos)) = (session.node(id), session.position(id)) else {
            continue;
        };
        let (x, y) = (frame.x(pos.x), frame.y(pos.y));

        write!(
            out,
            r#"<g id="{}" class="node {}">"#,
            escape(&node.key),
            node.kind().as_str()
        )?;
        write!(
            out,
            r##"<rect x="{}" y="{}" width="{}" height="{}" rx="6" fill="{}" stroke="#555"/>"##,
            x,
            y,
            pos.width * CELL_WIDTH,
            pos.height * CELL_HEIGHT,
            fill_for(node.kind())
        )?;
        write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif">{}</text>"#,
            x + CELL_WIDTH,
            y + CELL_HEIGHT * 1.6,
            FONT_SIZE,
            escape(node.name())
        )?;
        writeln!(
            out,
            r##"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" fill="#666">{}</text></g>"##,
            x + CELL_WIDTH,
            y + CELL_HEIGHT * 2.8,
            FONT_SIZE - 2.0,
            escape(&node.detail())
        )?;
    }
    Ok(())
}

/// Writes the current map (nodes, edges and the arrow marker) as SVG.
pub fn write_map(out: &mut impl Write, session: &MapSession) -> fmt::Result {
    let (max_x, max_y) = session.extent();
    let frame = Frame {
        width: max_x * CELL_WIDTH + MARGIN * 2.0,
        height: max_y * CELL_HEIGHT + MARGIN * 2.0,
    };

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = frame.width,
        h = frame.height
    )?;
    if let Some(ref marker) = session.edges.marker {
        write_marker(out, marker)?;
    }
    write_edges(out, session, &frame)?;
    write_nodes(out, session, &frame)?;
    out.write_str("</svg>\n")
}

pub fn to_svg(session: &MapSession) -> Result<String, fmt::Error> {
    let mut svg = String::new();
    write_map(&mut svg, session)?;
    Ok(svg)
}

pub fn write_svg(session: &MapSession, path: &Path) -> Result<()> {
    let svg = to_svg(session).context("Failed to render SVG")?;
    fs::write(path, svg)
        .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported svg");
    Ok(())
}
