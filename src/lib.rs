//! Star rating widget for egui
//!
//! The host owns the committed rating and the region the widget lives in.
//! The widget sizes its stars to that region, previews hovers, and reports
//! clicks back through a callback.
//!
//! ```no_run
//! use star_rating::{RatingConfig, RatingWidget};
//!
//! # fn ui(ui: &mut egui::Ui, rating: &mut f64, widget: &mut RatingWidget) {
//! let config = RatingConfig::new(*rating).with_size(200.0, 40.0);
//! widget.show(ui, &config, |r| *rating = f64::from(r));
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod glyph;
pub mod sizing;
pub mod theme;
pub mod widget;

pub use config::RatingConfig;
pub use glyph::{GlyphPainter, TextStar, VectorStar};
pub use sizing::{resolve, Geometry};
pub use widget::{GlyphRole, HoverPhase, RatingWidget, StarGlyph};
