//! Widget sizing constants and application identity

pub const APP_NAME: &str = "Star Rating";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Star size used when the host constrains neither width nor height
pub const DEFAULT_STAR_SIZE: u32 = 24;
/// Star count used when the host omits `maxStars` or passes a non-positive value
pub const DEFAULT_STAR_COUNT: u32 = 5;
/// Smallest star that stays readable; sizing never goes below this
pub const MIN_STAR_SIZE: u32 = 12;
/// Smallest gap between two stars
pub const MIN_GAP: u32 = 4;

/// Fraction of the available height a star may occupy
pub const HEIGHT_RATIO: f32 = 0.8;
/// Gap as a fraction of star size
pub const GAP_RATIO: f32 = 0.2;

/// Five-point star outline in a 24x24 viewBox
pub const STAR_PATH: &str =
    "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";
pub const STAR_VIEWBOX: f32 = 24.0;

/// Commit history entries kept by the demo host
pub const HISTORY_LIMIT: usize = 20;
