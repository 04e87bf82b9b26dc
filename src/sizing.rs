//! Star size and gap resolution for a host-provided region
//!
//! The host hands us a width and height (either may be absent, which we get
//! as `0.0`). From those we pick the largest star that lets the whole row
//! fit horizontally while using at most 80% of the height.

use crate::constants::{DEFAULT_STAR_SIZE, GAP_RATIO, HEIGHT_RATIO, MIN_GAP, MIN_STAR_SIZE};
use tracing::debug;

/// Layout of one star row. Recomputed on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub star_size: u32,
    pub gap: u32,
    /// Offset from the top of the region that vertically centers the row
    pub top_padding: f32,
}

impl Geometry {
    /// Total width of a row of `star_count` stars
    pub fn row_width(&self, star_count: u32) -> u32 {
        if star_count == 0 {
            return 0;
        }
        star_count
            .saturating_mul(self.star_size)
            .saturating_add((star_count - 1).saturating_mul(self.gap))
    }

    /// Horizontal offset of the 1-based star `index` from the region's left edge
    pub fn star_offset(&self, index: u32) -> u32 {
        index
            .saturating_sub(1)
            .saturating_mul(self.star_size.saturating_add(self.gap))
    }
}

/// Gap that goes with a final star size
pub fn gap_for(star_size: u32) -> u32 {
    MIN_GAP.max((star_size as f32 * GAP_RATIO).floor() as u32)
}

/// Resolve star geometry for a region of `width` x `height`.
///
/// Non-positive (or NaN) dimensions mean the host left that side
/// unconstrained. `star_count` of zero is treated as one.
pub fn resolve(width: f32, height: f32, star_count: u32) -> Geometry {
    let width = if width > 0.0 { width } else { 0.0 };
    let height = if height > 0.0 { height } else { 0.0 };
    let count = star_count.max(1);

    if width == 0.0 && height == 0.0 {
        let geometry = Geometry {
            star_size: DEFAULT_STAR_SIZE,
            gap: gap_for(DEFAULT_STAR_SIZE),
            top_padding: 0.0,
        };
        debug!(star_count = count, ?geometry, "Unconstrained region, using default star size");
        return geometry;
    }

    let height_bound = if height > 0.0 {
        height * HEIGHT_RATIO
    } else {
        f32::INFINITY
    };

    // Provisional gap from a rough size that leaves one extra star's worth of room
    let width_bound = if width > 0.0 {
        let estimated = width / (count + 1) as f32;
        let provisional_gap = (MIN_GAP as f32).max(estimated * GAP_RATIO);
        (width - (count - 1) as f32 * provisional_gap) / count as f32
    } else {
        f32::INFINITY
    };

    let mut star_size = height_bound
        .min(width_bound)
        .max(MIN_STAR_SIZE as f32)
        .floor() as u32;
    let mut gap = gap_for(star_size);

    // The provisional gap can undershoot the final one after flooring
    if width > 0.0 {
        let row = |star_size: u32, gap: u32| {
            f64::from(count) * f64::from(star_size) + f64::from(count - 1) * f64::from(gap)
        };
        let width = f64::from(width);
        if row(star_size, gap) > width {
            // Jump near the largest fitting size, then settle by single steps
            let upper = star_size;
            let per_star = f64::from(count) + f64::from(GAP_RATIO) * f64::from(count - 1);
            star_size = ((width / per_star).floor() as u32).clamp(MIN_STAR_SIZE, upper);
            gap = gap_for(star_size);
            while star_size > MIN_STAR_SIZE && row(star_size, gap) > width {
                star_size -= 1;
                gap = gap_for(star_size);
            }
            while star_size < upper && row(star_size + 1, gap_for(star_size + 1)) <= width {
                star_size += 1;
                gap = gap_for(star_size);
            }
        }
    }

    let top_padding = if height > 0.0 {
        ((height - star_size as f32) / 2.0).max(0.0)
    } else {
        0.0
    };

    let geometry = Geometry { star_size, gap, top_padding };
    debug!(width, height, star_count = count, ?geometry, "Resolved star geometry");
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fits(width: f32, height: f32, count: u32) {
        let g = resolve(width, height, count);
        assert!(g.star_size >= MIN_STAR_SIZE, "{width}x{height}/{count}: {g:?}");
        assert!(g.row_width(count) as f32 <= width, "{width}x{height}/{count}: {g:?} overflows");
        assert!(g.star_size as f32 <= height * HEIGHT_RATIO, "{width}x{height}/{count}: {g:?} too tall");
        assert_eq!(g.gap, MIN_GAP.max((g.star_size as f32 * 0.2).floor() as u32));
    }

    #[test]
    fn unconstrained_region_uses_defaults() {
        let g = resolve(0.0, 0.0, 5);
        assert_eq!(g, Geometry { star_size: 24, gap: 4, top_padding: 0.0 });

        assert_eq!(resolve(-10.0, -1.0, 5), g);
        assert_eq!(resolve(f32::NAN, 0.0, 5), g);
    }

    #[test]
    fn reference_scenario() {
        let g = resolve(200.0, 40.0, 5);
        assert_eq!(g.star_size, 32);
        assert_eq!(g.gap, 6);
        assert_eq!(g.top_padding, 4.0);
    }

    #[test]
    fn height_only_bounds_by_height() {
        let g = resolve(0.0, 50.0, 5);
        assert_eq!(g.star_size, 40);
        assert_eq!(g.gap, 8);
        assert_eq!(g.top_padding, 5.0);
    }

    #[test]
    fn width_only_has_no_padding() {
        let g = resolve(300.0, 0.0, 5);
        assert_eq!(g.top_padding, 0.0);
        assert!(g.row_width(5) <= 300);
        // 300/6 = 50 -> gap 10, (300 - 40) / 5 = 52 -> gap 10, row 300
        assert_eq!(g.star_size, 52);
        assert_eq!(g.gap, 10);
    }

    #[test]
    fn no_upper_cap() {
        let g = resolve(5000.0, 2000.0, 5);
        assert!(g.star_size > 500);
        fits(5000.0, 2000.0, 5);
    }

    #[test]
    fn rounding_overflow_is_corrected() {
        // Uncorrected this gives 173 + 4 * 34 = 1001
        let g = resolve(1000.0, 0.0, 5);
        assert!(g.row_width(5) <= 1000, "{g:?}");
        assert_eq!(g.star_size, 172);
        assert_eq!(g.gap, 34);

        let g = resolve(1000.0, 0.0, 2);
        assert!(g.row_width(2) <= 1000, "{g:?}");
    }

    #[test]
    fn never_below_minimum() {
        let g = resolve(20.0, 5.0, 5);
        assert_eq!(g.star_size, MIN_STAR_SIZE);
        assert_eq!(g.gap, MIN_GAP);
        assert_eq!(g.top_padding, 0.0);
    }

    #[test]
    fn fits_across_sizes() {
        for count in 1..=10u32 {
            // Smallest width that can hold the minimum size
            let min_width = count * MIN_STAR_SIZE + (count - 1) * MIN_GAP;
            for width in (min_width..min_width + 1500).step_by(37) {
                for height in [16.0, 23.0, 40.0, 97.5, 300.0, 1200.0] {
                    fits(width as f32, height, count);
                }
            }
        }
    }

    #[test]
    fn zero_star_count_is_one() {
        assert_eq!(resolve(100.0, 40.0, 0), resolve(100.0, 40.0, 1));
    }

    #[test]
    fn offsets_step_by_size_plus_gap() {
        let g = Geometry { star_size: 32, gap: 6, top_padding: 4.0 };
        assert_eq!(g.star_offset(1), 0);
        assert_eq!(g.star_offset(3), 76);
        assert_eq!(g.row_width(5), 184);
        assert_eq!(g.row_width(0), 0);
    }

    #[test]
    fn huge_region_saturates_instead_of_overflowing() {
        let g = resolve(1e10, 0.0, 5);
        assert!(g.star_size > 1_000_000_000, "{g:?}");
        assert!(f64::from(g.star_size) * 5.0 + f64::from(g.gap) * 4.0 <= 1e10, "{g:?}");
        assert_eq!(g.star_offset(5), u32::MAX);
        assert_eq!(g.row_width(5), u32::MAX);
        assert!(g.star_offset(2) < g.star_offset(3));
    }
}
