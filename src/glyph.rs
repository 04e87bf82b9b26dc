//! Star glyph drawing
//!
//! The widget only knows how to ask for "a star, filled or not, in this
//! square". Anything implementing [`GlyphPainter`] can answer that.

use crate::constants::{STAR_PATH, STAR_VIEWBOX};
use crate::theme;
use std::sync::OnceLock;
use tracing::warn;

/// Draws one star into a square rect
pub trait GlyphPainter {
    fn paint(&self, painter: &egui::Painter, rect: egui::Rect, filled: bool);
}

/// Vector star built from [`STAR_PATH`]
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorStar;

/// Font glyph star ("★" / "☆")
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStar;

impl GlyphPainter for VectorStar {
    fn paint(&self, painter: &egui::Painter, rect: egui::Rect, filled: bool) {
        let outline = star_outline();
        if outline.is_empty() {
            return;
        }
        let scale = rect.width() / STAR_VIEWBOX;
        let points: Vec<egui::Pos2> = outline
            .iter()
            .map(|p| rect.min + p.to_vec2() * scale)
            .collect();

        if filled {
            painter.add(fan_mesh(&points, theme::STAR_FILLED));
        }
        let stroke_color = if filled {
            theme::STAR_FILLED
        } else {
            theme::STAR_OUTLINE
        };
        painter.add(egui::Shape::closed_line(
            points,
            egui::Stroke::new(theme::STAR_STROKE, stroke_color),
        ));
    }
}

impl GlyphPainter for TextStar {
    fn paint(&self, painter: &egui::Painter, rect: egui::Rect, filled: bool) {
        let (glyph, color) = if filled {
            ("★", theme::STAR_FILLED)
        } else {
            ("☆", theme::STAR_OUTLINE)
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(rect.height()),
            color,
        );
    }
}

impl<T: GlyphPainter + ?Sized> GlyphPainter for &T {
    fn paint(&self, painter: &egui::Painter, rect: egui::Rect, filled: bool) {
        (**self).paint(painter, rect, filled)
    }
}

/// Star vertices in viewBox units, parsed once
pub fn star_outline() -> &'static [egui::Pos2] {
    static OUTLINE: OnceLock<Vec<egui::Pos2>> = OnceLock::new();
    OUTLINE.get_or_init(|| match parse_outline(STAR_PATH) {
        Some(points) => points,
        None => {
            warn!("Failed to parse star path, stars will not be drawn");
            Vec::new()
        }
    })
}

fn parse_outline(path_data: &str) -> Option<Vec<egui::Pos2>> {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}"><path d="{1}"/></svg>"#,
        STAR_VIEWBOX, path_data
    );
    let tree = resvg::usvg::Tree::from_str(&svg, &resvg::usvg::Options::default()).ok()?;
    let path = tree.root().children().iter().find_map(|node| match node {
        resvg::usvg::Node::Path(path) => Some(path),
        _ => None,
    })?;

    let mut points: Vec<egui::Pos2> = path
        .data()
        .points()
        .iter()
        .map(|p| egui::pos2(p.x, p.y))
        .collect();
    // Closing point repeats the start
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    (points.len() >= 3).then_some(points)
}

/// Fill a star-shaped polygon as a triangle fan around its vertex centroid
fn fan_mesh(points: &[egui::Pos2], color: egui::Color32) -> egui::Shape {
    let mut mesh = egui::Mesh::default();
    let n = points.len() as f32;
    let center = points
        .iter()
        .fold(egui::Vec2::ZERO, |acc, p| acc + p.to_vec2())
        / n;
    mesh.colored_vertex(center.to_pos2(), color);
    for p in points {
        mesh.colored_vertex(*p, color);
    }
    let count = points.len() as u32;
    for i in 0..count {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % count);
    }
    egui::Shape::mesh(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_has_ten_vertices() {
        let outline = star_outline();
        assert_eq!(outline.len(), 10);
        assert_eq!(outline[0], egui::pos2(12.0, 2.0));
        // Relative segment: 12 + 3.09, 2 + 6.26
        assert!((outline[1].x - 15.09).abs() < 1e-3);
        assert!((outline[1].y - 8.26).abs() < 1e-3);
    }

    #[test]
    fn outline_stays_inside_viewbox() {
        for p in star_outline() {
            assert!((0.0..=STAR_VIEWBOX).contains(&p.x), "{p:?}");
            assert!((0.0..=STAR_VIEWBOX).contains(&p.y), "{p:?}");
        }
    }

    #[test]
    fn fan_covers_every_edge() {
        let outline = star_outline();
        let egui::Shape::Mesh(mesh) = fan_mesh(outline, theme::STAR_FILLED) else {
            panic!("expected a mesh");
        };
        assert_eq!(mesh.vertices.len(), outline.len() + 1);
        assert_eq!(mesh.indices.len(), outline.len() * 3);
    }

    #[test]
    fn rejects_degenerate_paths() {
        assert!(parse_outline("M0 0L1 1").is_none());
    }
}
