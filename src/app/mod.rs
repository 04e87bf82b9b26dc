//! App module - the demo host that embeds the rating widget

pub(crate) mod theme;
mod views;

use crate::settings::{GlyphStyle, Settings};
use chrono::{DateTime, Local};
use eframe::egui;
use star_rating::constants::HISTORY_LIMIT;
use star_rating::{RatingConfig, RatingWidget, TextStar, VectorStar};
use std::collections::VecDeque;
use std::path::PathBuf;
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

/// A rating the widget reported back to the host
pub(crate) struct Commit {
    pub(crate) rating: u32,
    pub(crate) at: DateTime<Local>,
}

pub struct App {
    // Host-owned truth, fed back into the widget every frame
    pub(crate) rating: f64,
    pub(crate) container_width: Option<f32>,
    pub(crate) container_height: Option<f32>,
    pub(crate) max_stars: i32,
    pub(crate) read_only: bool,
    pub(crate) glyph_style: GlyphStyle,
    // One widget per painter so each keeps its own hover state
    pub(crate) vector_widget: RatingWidget<VectorStar>,
    pub(crate) text_widget: RatingWidget<TextStar>,
    pub(crate) history: VecDeque<Commit>,
    // Window tracking
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            rating: 0.0,
            container_width: settings.container_width,
            container_height: settings.container_height,
            max_stars: settings.max_stars,
            read_only: settings.read_only,
            glyph_style: settings.glyph_style,
            vector_widget: RatingWidget::new(),
            text_widget: RatingWidget::with_glyph(TextStar),
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Props handed to the widget this frame
    pub(crate) fn config(&self) -> RatingConfig {
        RatingConfig {
            rating: self.rating,
            max_stars: Some(self.max_stars),
            container_width: self.container_width,
            container_height: self.container_height,
            read_only: self.read_only,
        }
    }

    /// Host side of `onChange`
    pub(crate) fn record_commit(&mut self, rating: u32) {
        info!(rating, previous = self.rating, "Host received rating");
        self.rating = f64::from(rating);
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_back();
        }
        self.history.push_front(Commit {
            rating,
            at: Local::now(),
        });
    }

    pub(crate) fn reset_rating(&mut self) {
        info!("Rating reset");
        self.rating = 0.0;
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            container_width: self.container_width,
            container_height: self.container_height,
            max_stars: self.max_stars,
            read_only: self.read_only,
            glyph_style: self.glyph_style,
        };
        settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let settings = Settings::default();
        App {
            rating: 0.0,
            container_width: settings.container_width,
            container_height: settings.container_height,
            max_stars: settings.max_stars,
            read_only: settings.read_only,
            glyph_style: settings.glyph_style,
            vector_widget: RatingWidget::new(),
            text_widget: RatingWidget::with_glyph(TextStar),
            history: VecDeque::new(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn commit_updates_rating_and_history() {
        let mut app = app();
        app.record_commit(3);
        app.record_commit(5);
        assert_eq!(app.rating, 5.0);
        let ratings: Vec<u32> = app.history.iter().map(|c| c.rating).collect();
        assert_eq!(ratings, vec![5, 3]);
    }

    #[test]
    fn history_is_bounded() {
        let mut app = app();
        for r in 0..(HISTORY_LIMIT as u32 + 5) {
            app.record_commit(r % 5 + 1);
        }
        assert_eq!(app.history.len(), HISTORY_LIMIT);
    }

    #[test]
    fn config_reflects_host_props() {
        let mut app = app();
        app.rating = 4.0;
        app.read_only = true;
        app.container_width = None;
        let config = app.config();
        assert_eq!(config.rating, 4.0);
        assert_eq!(config.star_count(), 5);
        assert_eq!(config.effective_width(), 0.0);
        assert_eq!(config.effective_height(), 40.0);
        assert!(config.read_only);

        app.reset_rating();
        assert_eq!(app.config().rating, 0.0);
    }
}
