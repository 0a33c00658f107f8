//! Hard-edged rasterization onto a [`Grid`] of any sample kind.
//!
//! Every write goes through [`Grid::plot`], so geometry may extend past the
//! grid edges; off-grid pixels are skipped. Coordinates are truncated toward
//! zero, never rounded.

use alloc::vec;
use core::ops::RangeInclusive;

use crate::grid::Grid;
use crate::pixel::Sample;

/// Integer drawing coordinate. May lie outside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl<S: Sample> Grid<S> {
    /// DDA line from `p1` to `p2`, both endpoints inclusive.
    ///
    /// Steps along the major axis (`max(|dx|, |dy|)` steps), accumulating
    /// the per-step increments in `f64` and truncating each sample point.
    /// Steps that cannot land on the grid are skipped without being walked.
    pub fn draw_line(&mut self, p1: Point, p2: Point, value: S) {
        let dx = i64::from(p2.x) - i64::from(p1.x);
        let dy = i64::from(p2.y) - i64::from(p1.y);
        let steps = dx.abs().max(dy.abs());
        if steps > 0 {
            let x_inc = dx as f64 / steps as f64;
            let y_inc = dy as f64 / steps as f64;
            let (x0, y0) = (f64::from(p1.x), f64::from(p1.y));
            let mut first = 0;
            let mut last = steps - 1;
            for (start, inc, size) in [(x0, x_inc, self.width()), (y0, y_inc, self.height())] {
                let Some((lo, hi)) = steps_on_axis(start, inc, size) else {
                    first = steps;
                    break;
                };
                first = first.max(lo);
                last = last.min(hi);
            }
            if first <= last {
                let mut x = x0 + first as f64 * x_inc;
                let mut y = y0 + first as f64 * y_inc;
                for _ in first..=last {
                    self.plot(x as i64, y as i64, value);
                    x += x_inc;
                    y += y_inc;
                }
            }
        }
        // last sample point is p2 exactly; accumulated error must not move it
        self.plot(i64::from(p2.x), i64::from(p2.y), value);
    }

    /// Outline of the `width x height` block anchored at `origin`.
    pub fn draw_rectangle(&mut self, origin: Point, width: i32, height: i32, value: S) {
        if width <= 0 || height <= 0 {
            return;
        }
        let right = origin.x.saturating_add(width - 1);
        let bottom = origin.y.saturating_add(height - 1);
        let corners = [
            origin,
            Point::new(right, origin.y),
            Point::new(right, bottom),
            Point::new(origin.x, bottom),
        ];
        self.draw_polygon(&corners, value);
    }

    /// Every cell of the `width x height` block anchored at `origin`.
    pub fn draw_filled_rectangle(&mut self, origin: Point, width: i32, height: i32, value: S) {
        if width <= 0 || height <= 0 {
            return;
        }
        let x0 = i64::from(origin.x);
        let y0 = i64::from(origin.y);
        let rows = y0.max(0)..(y0 + i64::from(height)).min(self.height() as i64);
        for y in rows {
            self.fill_span(x0, x0 + i64::from(width) - 1, y, value);
        }
    }

    /// Disc of `radius` around `center`.
    ///
    /// Identical to [`Grid::draw_filled_circle`]: both set every pixel with
    /// `dx² + dy² <= radius²`.
    pub fn draw_circle(&mut self, center: Point, radius: i32, value: S) {
        self.fill_disc(center, radius, value);
    }

    /// Disc of `radius` around `center`.
    pub fn draw_filled_circle(&mut self, center: Point, radius: i32, value: S) {
        self.fill_disc(center, radius, value);
    }

    /// Three edges `p1 -> p2 -> p3 -> p1`.
    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, value: S) {
        self.draw_polygon(&[p1, p2, p3], value);
    }

    /// Two-pass scan conversion, then the outline on top.
    ///
    /// Vertices are ordered by row. The top half walks rows `v0.y..=v1.y`,
    /// the bottom half `v1.y + 1..=v2.y`; each row fills between the two
    /// running edge intercepts inclusive.
    pub fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, value: S) {
        let mut v = [p1, p2, p3];
        v.sort_by_key(|p| p.y);
        let [v0, v1, v2] = v;

        let short_top = inverse_slope(v0, v1);
        let long = inverse_slope(v0, v2);
        let short_bottom = inverse_slope(v1, v2);

        let mut x1 = f64::from(v0.x);
        let mut x2 = f64::from(v0.x);
        let (y0, y1, y2) = (i64::from(v0.y), i64::from(v1.y), i64::from(v2.y));
        self.scan_edges(&mut x1, &mut x2, (short_top, long), y0..=y1, value);

        x1 = f64::from(v1.x);
        self.scan_edges(&mut x1, &mut x2, (short_bottom, long), y1 + 1..=y2, value);

        self.draw_triangle(p1, p2, p3, value);
    }

    /// Closed outline through `points`, last vertex joined to the first.
    pub fn draw_polygon(&mut self, points: &[Point], value: S) {
        for (i, &p) in points.iter().enumerate() {
            self.draw_line(p, points[(i + 1) % points.len()], value);
        }
    }

    /// Single-intercept scanline fill, then the outline on top.
    ///
    /// Each non-horizontal edge records one x-intercept for every row it
    /// spans; a later edge overwrites an earlier one on the same row. Each
    /// row with an intercept is filled from there to the bounding box's
    /// right edge. Concave shapes, or rows crossed by several edges, are
    /// not filled the way an even-odd fill would.
    pub fn draw_filled_polygon(&mut self, points: &[Point], value: S) {
        let Some(&first) = points.first() else {
            return;
        };
        let (mut min_y, mut max_x, mut max_y) = (first.y, first.x, first.y);
        for p in points {
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        // Only rows on the grid can receive pixels.
        let row_lo = i64::from(min_y).max(0);
        let row_hi = i64::from(max_y).min(self.height() as i64 - 1);
        if row_lo <= row_hi {
            let mut intercepts = vec![None; (row_hi - row_lo + 1) as usize];
            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                let edge_lo = i64::from(a.y.min(b.y));
                let edge_hi = i64::from(a.y.max(b.y));
                if edge_lo == edge_hi {
                    continue;
                }
                let dx = f64::from(b.x) - f64::from(a.x);
                let dy = f64::from(b.y) - f64::from(a.y);
                for y in edge_lo.max(row_lo)..=edge_hi.min(row_hi) {
                    let x = f64::from(a.x) + (y - edge_lo) as f64 * dx / dy;
                    intercepts[(y - row_lo) as usize] = Some(x as i64);
                }
            }
            for (row, x) in intercepts.into_iter().enumerate() {
                if let Some(x) = x {
                    self.fill_span(x, i64::from(max_x), row_lo + row as i64, value);
                }
            }
        }

        self.draw_polygon(points, value);
    }

    fn fill_disc(&mut self, center: Point, radius: i32, value: S) {
        let r = i64::from(radius);
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let (w, h) = (self.width() as i64, self.height() as i64);
        for dx in (-r).max(-cx)..=r.min(w - 1 - cx) {
            for dy in (-r).max(-cy)..=r.min(h - 1 - cy) {
                if dx * dx + dy * dy <= r * r {
                    self.plot(cx + dx, cy + dy, value);
                }
            }
        }
    }

    /// Walk `rows`, filling between `xa` and `xb` and advancing them by
    /// `slopes` per row. Rows above the grid advance the edges in one step;
    /// rows below it are never reached.
    fn scan_edges(
        &mut self,
        xa: &mut f64,
        xb: &mut f64,
        slopes: (f64, f64),
        rows: RangeInclusive<i64>,
        value: S,
    ) {
        let (top, bottom) = (*rows.start(), *rows.end());
        if top > bottom {
            return;
        }
        let first = top.max(0);
        if first > top {
            let skipped = (first.min(bottom + 1) - top) as f64;
            *xa += slopes.0 * skipped;
            *xb += slopes.1 * skipped;
        }
        for y in first..=bottom.min(self.height() as i64 - 1) {
            self.fill_span_f(*xa, *xb, y, value);
            *xa += slopes.0;
            *xb += slopes.1;
        }
    }

    /// Fill row `y` between two real intercepts, each truncated.
    fn fill_span_f(&mut self, xa: f64, xb: f64, y: i64, value: S) {
        self.fill_span(xa.min(xb) as i64, xa.max(xb) as i64, y, value);
    }

    /// Fill row `y` from `x_lo` to `x_hi` inclusive, clipped to the grid.
    fn fill_span(&mut self, x_lo: i64, x_hi: i64, y: i64, value: S) {
        if y < 0 || y >= self.height() as i64 {
            return;
        }
        let lo = x_lo.max(0);
        let hi = x_hi.min(self.width() as i64 - 1);
        for x in lo..=hi {
            self.plot(x, y, value);
        }
    }
}

/// Step range `[lo, hi]` (with one step of slack each side) over which a
/// coordinate starting at `start` and moving `inc` per step stays within
/// `-1..=size`. `None` if a fixed coordinate is off the grid.
fn steps_on_axis(start: f64, inc: f64, size: usize) -> Option<(i64, i64)> {
    let size = size as f64;
    if inc == 0.0 {
        return (start >= 0.0 && start < size).then_some((i64::MIN, i64::MAX));
    }
    let a = (-1.0 - start) / inc;
    let b = (size + 1.0 - start) / inc;
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    Some(((lo as i64).saturating_sub(1), (hi as i64).saturating_add(1)))
}

/// `dx / dy` from `a` to `b`; 0 for horizontal edges, whose loops never
/// advance past their single row.
fn inverse_slope(a: Point, b: Point) -> f64 {
    let dy = i64::from(b.y) - i64::from(a.y);
    if dy == 0 {
        0.0
    } else {
        (i64::from(b.x) - i64::from(a.x)) as f64 / dy as f64
    }
}
