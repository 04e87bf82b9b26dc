//! Interactive star rating widget
//!
//! Two layers of rating: the committed value the host owns (`RatingConfig::rating`)
//! and a hover preview the widget owns. The preview wins for painting only;
//! commits go straight to the host through `on_change`.

use crate::config::RatingConfig;
use crate::glyph::{GlyphPainter, VectorStar};
use crate::sizing::{self, Geometry};
use tracing::{debug, info};

/// Accessible role of a star glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphRole {
    Button,
    Image,
}

/// One star as it should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarGlyph {
    /// 1-based position in the row
    pub index: u32,
    pub filled: bool,
    pub role: GlyphRole,
}

impl StarGlyph {
    /// "3 stars" when read-only, "Rate 3 stars" otherwise
    pub fn label(&self) -> String {
        let noun = if self.index > 1 { "stars" } else { "star" };
        match self.role {
            GlyphRole::Image => format!("{} {}", self.index, noun),
            GlyphRole::Button => format!("Rate {} {}", self.index, noun),
        }
    }

    fn widget_type(&self) -> egui::WidgetType {
        match self.role {
            GlyphRole::Button => egui::WidgetType::Button,
            GlyphRole::Image => egui::WidgetType::Image,
        }
    }
}

/// Hover state machine of a single widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Idle,
    Hovering(u32),
}

pub struct RatingWidget<G = VectorStar> {
    hover_rating: Option<u32>,
    glyph: G,
}

impl RatingWidget<VectorStar> {
    pub fn new() -> Self {
        Self::with_glyph(VectorStar)
    }
}

impl Default for RatingWidget<VectorStar> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GlyphPainter> RatingWidget<G> {
    pub fn with_glyph(glyph: G) -> Self {
        Self {
            hover_rating: None,
            glyph,
        }
    }

    pub fn hover_rating(&self) -> Option<u32> {
        self.hover_rating
    }

    pub fn phase(&self) -> HoverPhase {
        match self.hover_rating {
            Some(index) => HoverPhase::Hovering(index),
            None => HoverPhase::Idle,
        }
    }

    /// Geometry for the config's region and star count
    pub fn geometry(&self, config: &RatingConfig) -> Geometry {
        sizing::resolve(
            config.effective_width(),
            config.effective_height(),
            config.star_count(),
        )
    }

    /// Rating used for painting: hover preview, else the clamped committed rating
    pub fn active_rating(&self, config: &RatingConfig) -> f64 {
        self.hover_rating
            .map(f64::from)
            .unwrap_or_else(|| config.clamped_rating())
    }

    /// Glyphs for the current state. Fractional ratings truncate, so 3.4 fills three.
    pub fn glyphs(&self, config: &RatingConfig) -> Vec<StarGlyph> {
        let active = self.active_rating(config);
        let role = if config.read_only {
            GlyphRole::Image
        } else {
            GlyphRole::Button
        };
        (1..=config.star_count())
            .map(|index| StarGlyph {
                index,
                filled: f64::from(index) <= active,
                role,
            })
            .collect()
    }

    /// Commit `index` to the host. Returns whether `on_change` was called.
    ///
    /// Hover state is left alone; the host is expected to feed the new rating
    /// back through the config.
    pub fn on_pointer_down(
        &self,
        index: u32,
        config: &RatingConfig,
        on_change: impl FnOnce(u32),
    ) -> bool {
        if config.read_only {
            return false;
        }
        info!(rating = index, "Rating committed");
        on_change(index);
        true
    }

    pub fn on_pointer_enter(&mut self, index: u32, config: &RatingConfig) {
        if config.read_only {
            return;
        }
        if self.hover_rating != Some(index) {
            debug!(from = ?self.hover_rating, to = index, "Hover preview");
        }
        self.hover_rating = Some(index);
    }

    pub fn on_pointer_leave(&mut self, config: &RatingConfig) {
        if config.read_only {
            return;
        }
        if self.hover_rating.is_some() {
            debug!(from = ?self.hover_rating, "Hover cleared");
        }
        self.hover_rating = None;
    }

    /// Lay out, wire and paint the row inside `ui`.
    ///
    /// The widget takes exactly the configured width and height, or all the
    /// available space on a side the host left unconstrained.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        config: &RatingConfig,
        mut on_change: impl FnMut(u32),
    ) -> egui::Response {
        let width = config.effective_width();
        let height = config.effective_height();
        let size = egui::vec2(
            if width > 0.0 { width } else { ui.available_width() },
            if height > 0.0 { height } else { ui.available_height() },
        );
        let (rect, mut response) = ui.allocate_exact_size(size, egui::Sense::hover());

        // Handlers are gone in read-only mode, so a preview left from before would never clear
        if config.read_only {
            self.hover_rating = None;
        }

        let geometry = self.geometry(config);
        let sense = if config.read_only {
            egui::Sense::hover()
        } else {
            egui::Sense::click()
        };
        let star_size = egui::Vec2::splat(geometry.star_size as f32);
        let (pointer, primary_pressed) =
            ui.input(|i| (i.pointer.hover_pos(), i.pointer.primary_pressed()));

        let mut hovered_star = None;
        let mut pressed_star = None;
        let mut star_rects = Vec::with_capacity(config.star_count() as usize);
        for index in 1..=config.star_count() {
            let min = rect.min
                + egui::vec2(geometry.star_offset(index) as f32, geometry.top_padding);
            let star_rect = egui::Rect::from_min_size(min, star_size);
            let star_response = ui.interact(star_rect, response.id.with(index), sense);

            // hovered() alone reaches into the gap through the interact radius
            let over_star = star_response.hovered() && pointer.is_some_and(|p| star_rect.contains(p));
            if over_star {
                hovered_star = Some(index);
                ui.ctx().set_cursor_icon(if config.read_only {
                    egui::CursorIcon::Default
                } else {
                    egui::CursorIcon::PointingHand
                });
                if primary_pressed {
                    pressed_star = Some(index);
                }
            }
            star_rects.push((star_rect, star_response));
        }

        match hovered_star {
            Some(index) if self.hover_rating != Some(index) => self.on_pointer_enter(index, config),
            None if self.hover_rating.is_some() => self.on_pointer_leave(config),
            _ => {}
        }
        if let Some(index) = pressed_star {
            if self.on_pointer_down(index, config, &mut on_change) {
                response.mark_changed();
            }
        }

        for (glyph, (star_rect, star_response)) in self.glyphs(config).iter().zip(&star_rects) {
            star_response.widget_info(|| {
                egui::WidgetInfo::labeled(glyph.widget_type(), true, glyph.label())
            });
            if ui.is_rect_visible(*star_rect) {
                self.glyph.paint(ui.painter(), *star_rect, glyph.filled);
            }
        }

        response
    }
}
