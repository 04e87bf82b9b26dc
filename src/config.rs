//! Host-supplied widget properties
//!
//! Every field is optional from the host's point of view. Malformed values
//! are never rejected, only defaulted or clamped when read.

use crate::constants::DEFAULT_STAR_COUNT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RatingConfig {
    /// Committed rating, owned by the host. May be fractional or out of range.
    pub rating: f64,
    pub max_stars: Option<i32>,
    pub container_width: Option<f32>,
    pub container_height: Option<f32>,
    pub read_only: bool,
}

impl RatingConfig {
    pub fn new(rating: f64) -> Self {
        Self {
            rating,
            ..Self::default()
        }
    }

    pub fn with_max_stars(mut self, max_stars: i32) -> Self {
        self.max_stars = Some(max_stars);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.container_width = Some(width);
        self.container_height = Some(height);
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Parse host props from JSON (`{"rating": 3, "maxStars": 5, ...}`)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of stars to draw, defaulting absent or non-positive values
    pub fn star_count(&self) -> u32 {
        match self.max_stars {
            Some(n) if n > 0 => n as u32,
            _ => DEFAULT_STAR_COUNT,
        }
    }

    /// Width constraint, or `0.0` when the widget should fill its parent
    pub fn effective_width(&self) -> f32 {
        positive_or_zero(self.container_width)
    }

    /// Height constraint, or `0.0` when the widget should fill its parent
    pub fn effective_height(&self) -> f32 {
        positive_or_zero(self.container_height)
    }

    /// Committed rating clamped to `0..=star_count`
    pub fn clamped_rating(&self) -> f64 {
        if self.rating.is_nan() {
            return 0.0;
        }
        self.rating.clamp(0.0, f64::from(self.star_count()))
    }
}

fn positive_or_zero(value: Option<f32>) -> f32 {
    match value {
        Some(v) if v > 0.0 => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_count_defaults() {
        assert_eq!(RatingConfig::new(0.0).star_count(), 5);
        assert_eq!(RatingConfig::new(0.0).with_max_stars(0).star_count(), 5);
        assert_eq!(RatingConfig::new(0.0).with_max_stars(-3).star_count(), 5);
        assert_eq!(RatingConfig::new(0.0).with_max_stars(10).star_count(), 10);
    }

    #[test]
    fn dimensions_default_to_fill() {
        let config = RatingConfig::new(0.0);
        assert_eq!(config.effective_width(), 0.0);
        assert_eq!(config.effective_height(), 0.0);

        let config = RatingConfig::new(0.0).with_size(-20.0, f32::NAN);
        assert_eq!(config.effective_width(), 0.0);
        assert_eq!(config.effective_height(), 0.0);

        let config = RatingConfig::new(0.0).with_size(200.0, 40.0);
        assert_eq!(config.effective_width(), 200.0);
        assert_eq!(config.effective_height(), 40.0);
    }

    #[test]
    fn rating_is_clamped() {
        let five = |r| RatingConfig::new(r).with_max_stars(5).clamped_rating();
        assert_eq!(five(-2.0), 0.0);
        assert_eq!(five(7.0), 5.0);
        assert_eq!(five(3.4), 3.4);
        assert_eq!(five(f64::NAN), 0.0);
        assert_eq!(RatingConfig::new(8.0).with_max_stars(10).clamped_rating(), 8.0);
    }

    #[test]
    fn parses_host_props() {
        let config = RatingConfig::from_json(
            r#"{"rating": 3.5, "maxStars": 7, "containerWidth": 200, "containerHeight": 40, "readOnly": true}"#,
        )
        .expect("valid props");
        assert_eq!(config.rating, 3.5);
        assert_eq!(config.star_count(), 7);
        assert_eq!(config.effective_width(), 200.0);
        assert_eq!(config.effective_height(), 40.0);
        assert!(config.read_only);
    }

    #[test]
    fn missing_props_take_defaults() {
        let config = RatingConfig::from_json(r#"{"rating": 2}"#).expect("valid props");
        assert_eq!(config, RatingConfig::new(2.0));
        assert!(!config.read_only);

        let config = RatingConfig::from_json("{}").expect("empty props");
        assert_eq!(config.rating, 0.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(RatingConfig::from_json(r#"{"rating": "#).is_err());
        assert!(RatingConfig::from_json(r#"{"maxStars": "five"}"#).is_err());
    }
}
