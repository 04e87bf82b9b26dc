//! Utility functions

use eframe::egui;
use star_rating::constants::{STAR_PATH, STAR_VIEWBOX};
use star_rating::theme;

fn icon_svg() -> String {
    let c = theme::STAR_FILLED;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {0} {0}"><path d="{1}" fill="#{2:02x}{3:02x}{4:02x}" stroke="#{2:02x}{3:02x}{4:02x}" stroke-width="1" stroke-linejoin="round"/></svg>"##,
        STAR_VIEWBOX,
        STAR_PATH,
        c.r(),
        c.g(),
        c.b()
    )
}

/// Rasterize the star to a square RGBA image for window/taskbar icons.
pub fn rasterize_icon(size: u32) -> Option<egui::IconData> {
    let tree = resvg::usvg::Tree::from_str(&icon_svg(), &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some(egui::IconData {
        rgba: premul_to_straight(&pixmap),
        width: size,
        height: size,
    })
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Format an optional host dimension for display
pub fn format_dimension(value: Option<f32>) -> String {
    match value {
        Some(v) if v > 0.0 => format!("{:.0}px", v),
        _ => "fill".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_is_square_rgba() {
        let icon = rasterize_icon(64).expect("icon renders");
        assert_eq!((icon.width, icon.height), (64, 64));
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);
        // Center of the star is opaque gold, corners are empty
        let center = ((32 * 64 + 32) * 4) as usize;
        assert_eq!(&icon.rgba[center..center + 4], &[0xff, 0xd7, 0x00, 0xff]);
        assert_eq!(&icon.rgba[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn dimensions_format() {
        assert_eq!(format_dimension(Some(200.0)), "200px");
        assert_eq!(format_dimension(None), "fill");
        assert_eq!(format_dimension(Some(0.0)), "fill");
    }
}
