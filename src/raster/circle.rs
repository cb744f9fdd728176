//! Discrete circle rasterization.
//!
//! Incremental midpoint algorithm producing a closed, 4-connected ring of
//! grid offsets. The ring (not a filled disk) is what the row-extent
//! structures are derived from, so the extra inner/outer plot when the error
//! term crosses zero matters: it keeps the ring connected so that every row
//! of a radius-`r` circle is covered on both sides.

/// Signed grid offset relative to a circle center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Horizontal offset (columns)
    pub dx: i32,
    /// Vertical offset (rows)
    pub dy: i32,
}

impl Offset {
    /// Create a new offset
    #[inline]
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Rasterize the circle of the given radius around the origin.
///
/// Deterministic and symmetric under 8-way reflection. Points on the axes
/// and diagonals are emitted once, not duplicated per octant.
pub fn rasterize(radius: u32) -> Vec<Offset> {
    let radius = radius as i32;
    let mut points = Vec::new();
    let mut error = -radius;
    let mut x = radius;
    let mut y = 0;

    while x >= y {
        plot_octants(&mut points, x, y);
        error += y;
        y += 1;
        error += y;
        if error >= 0 {
            error -= x;
            // 4-connected join: plot before stepping inward
            plot_octants(&mut points, x, y);
            x -= 1;
            error -= x;
        }
    }

    points
}

/// Emit the eight symmetric points for `(x, y)`; four when `x == y`.
fn plot_octants(points: &mut Vec<Offset>, x: i32, y: i32) {
    plot_quadrants(points, x, y);
    if x != y {
        plot_quadrants(points, y, x);
    }
}

/// Emit the four reflections of `(x, y)`, skipping duplicates on the axes.
fn plot_quadrants(points: &mut Vec<Offset>, x: i32, y: i32) {
    points.push(Offset::new(x, y));
    if x != 0 {
        points.push(Offset::new(-x, y));
    }
    if y != 0 {
        points.push(Offset::new(x, -y));
    }
    if x != 0 && y != 0 {
        points.push(Offset::new(-x, -y));
    }
}
