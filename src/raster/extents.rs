//! Per-row extents of rasterized circles.
//!
//! The radial search never walks raw point lists; it consumes half-open
//! `dx` intervals per row offset, precomputed once per radius. Two variants
//! exist: [`RowExtents`] keeps separate left/right intervals hugging the
//! ring, and [`ClearanceShape`] collapses each row to a single combined
//! interval, which spans the ring interior and therefore tests a filled
//! region (what the proximity filter wants).

use super::circle::rasterize;

/// Half-open `dx` interval `[start, end)`.
///
/// The default value is empty; a row side with no rasterized points stays
/// empty and simply contributes no cells, which is not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extent {
    /// First offset in the interval.
    pub start: i32,
    /// One past the last offset.
    pub end: i32,
}

impl Extent {
    /// Is this interval empty?
    #[inline]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Iterate the offsets in the interval.
    #[inline]
    pub fn range(self) -> std::ops::Range<i32> {
        self.start..self.end
    }

    /// Grow the interval to include `dx`.
    fn include(&mut self, dx: i32) {
        if self.is_empty() {
            *self = Extent {
                start: dx,
                end: dx + 1,
            };
        } else {
            self.start = self.start.min(dx);
            self.end = self.end.max(dx + 1);
        }
    }
}

/// Left/right extents for one row of a rasterized circle.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowSpan {
    /// Interval over ring points with `dx < 0`.
    pub left: Extent,
    /// Interval over ring points with `dx >= 0`.
    pub right: Extent,
}

/// Row offset -> left/right extents for one circle radius.
#[derive(Clone, Debug)]
pub struct RowExtents {
    radius: u32,
    rows: Vec<RowSpan>,
}

impl RowExtents {
    /// Build the extents for one radius from the rasterized ring.
    ///
    /// Ring points with `|dy| > radius` (the degenerate radius-0 ring emits
    /// some) fall outside the row table and are dropped, matching the shape
    /// the search expects.
    pub fn build(radius: u32) -> Self {
        let r = radius as i32;
        let mut rows = vec![RowSpan::default(); (2 * radius + 1) as usize];
        for point in rasterize(radius) {
            if point.dy < -r || point.dy > r {
                continue;
            }
            let row = &mut rows[(point.dy + r) as usize];
            if point.dx < 0 {
                row.left.include(point.dx);
            } else {
                row.right.include(point.dx);
            }
        }
        Self { radius, rows }
    }

    /// The radius this table was built for.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Iterate `(dy, span)` over all row offsets in `[-radius, radius]`.
    pub fn rows(&self) -> impl Iterator<Item = (i32, RowSpan)> + '_ {
        let r = self.radius as i32;
        self.rows
            .iter()
            .enumerate()
            .map(move |(i, span)| (i as i32 - r, *span))
    }
}

/// Single combined interval per row, for the fixed "too close" test region.
///
/// Because each row's interval runs from the leftmost to the rightmost ring
/// point, iterating it visits the ring interior too: the proximity filter
/// effectively checks a filled disk of the given radius.
#[derive(Clone, Debug)]
pub struct ClearanceShape {
    radius: u32,
    rows: Vec<Extent>,
}

impl ClearanceShape {
    /// Build the combined-interval shape for one radius.
    pub fn build(radius: u32) -> Self {
        let r = radius as i32;
        let mut rows = vec![Extent::default(); (2 * radius + 1) as usize];
        for point in rasterize(radius) {
            if point.dy < -r || point.dy > r {
                continue;
            }
            rows[(point.dy + r) as usize].include(point.dx);
        }
        Self { radius, rows }
    }

    /// The radius this shape was built for.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Iterate `(dy, extent)` over all row offsets in `[-radius, radius]`.
    pub fn rows(&self) -> impl Iterator<Item = (i32, Extent)> + '_ {
        let r = self.radius as i32;
        self.rows
            .iter()
            .enumerate()
            .map(move |(i, extent)| (i as i32 - r, *extent))
    }
}

/// Precomputed [`RowExtents`] for a contiguous radius range.
///
/// Built once before a grid scan and shared read-only by every candidate
/// search, including across rayon workers. Radii outside the precomputed
/// range are reported as a miss; callers fall back to [`RowExtents::build`]
/// on demand rather than failing.
#[derive(Clone, Debug)]
pub struct RowExtentCache {
    min_radius: u32,
    by_radius: Vec<RowExtents>,
}

impl RowExtentCache {
    /// Precompute extents for every radius in `[min_radius, max_radius]`
    /// (inclusive; empty when `max_radius < min_radius`).
    pub fn build(min_radius: u32, max_radius: u32) -> Self {
        let by_radius = (min_radius..=max_radius).map(RowExtents::build).collect();
        Self {
            min_radius,
            by_radius,
        }
    }

    /// Smallest precomputed radius.
    #[inline]
    pub fn min_radius(&self) -> u32 {
        self.min_radius
    }

    /// Largest precomputed radius, or `None` for an empty cache.
    pub fn max_radius(&self) -> Option<u32> {
        (!self.by_radius.is_empty()).then(|| self.min_radius + self.by_radius.len() as u32 - 1)
    }

    /// Look up the extents for a radius; `None` when outside the range.
    #[inline]
    pub fn extents(&self, radius: u32) -> Option<&RowExtents> {
        radius
            .checked_sub(self.min_radius)
            .and_then(|i| self.by_radius.get(i as usize))
    }
}
