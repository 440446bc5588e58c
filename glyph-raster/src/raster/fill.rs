//! Exact area coverage for the active edges of one scanline.
//!
//! Each edge adds signed area to two accumulators. `coverage[x]` receives
//! the area of pixel `x` that lies to the right of the edge. `fill[x]`
//! receives the signed height of the edge that is entirely to the left of
//! pixel `x`, which is the coverage it contributes to every pixel from `x`
//! onward. The final value of pixel `x` is `coverage[x] + fill[0..=x].sum()`.

use super::{ActiveEdge, EdgePool};

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Accumulates the coverage of every edge in the list starting at `head`
/// for the scanline whose top is at `y_top`.
///
/// `coverage` holds one value per pixel and `fill` holds one more.
pub(super) fn fill_active_edges(
    coverage: &mut [f32],
    fill: &mut [f32],
    pool: &impl EdgePool,
    head: u32,
    y_top: f32,
) {
    debug_assert_eq!(coverage.len() + 1, fill.len());
    let mut handle = head;
    while let Some(edge) = pool.get(handle) {
        fill_edge(coverage, fill, edge, y_top);
        handle = edge.next;
    }
}

fn fill_edge(coverage: &mut [f32], fill: &mut [f32], e: &ActiveEdge, y_top: f32) {
    let len = coverage.len() as f32;
    let y_bottom = y_top + 1.0;
    if e.fdx == 0.0 {
        let x0 = e.fx;
        if x0 < len {
            if x0 >= 0.0 {
                handle_clipped(coverage, x0 as i32, e, x0, y_top, x0, y_bottom);
                handle_clipped(fill, x0 as i32 + 1, e, x0, y_top, x0, y_bottom);
            } else {
                handle_clipped(fill, 0, e, x0, y_top, x0, y_bottom);
            }
        }
        return;
    }
    let mut x0 = e.fx;
    let mut dx = e.fdx;
    let mut xb = x0 + dx;
    let mut dy = e.fdy;
    debug_assert!(e.sy <= y_bottom && e.ey >= y_top);
    // where the edge enters and leaves this scanline
    let (mut x_top, mut sy0) = if e.sy > y_top {
        (x0 + dx * (e.sy - y_top), e.sy)
    } else {
        (x0, y_top)
    };
    let (mut x_bottom, mut sy1) = if e.ey < y_bottom {
        (x0 + dx * (e.ey - y_top), e.ey)
    } else {
        (xb, y_bottom)
    };
    let in_box = |x: f32| x >= 0.0 && x < len;
    if !(in_box(x_top) && in_box(x_bottom)) {
        fill_clipped(coverage, e, x0, xb, dx, y_top);
        return;
    }
    if x_top as i32 == x_bottom as i32 {
        // the edge stays within one pixel
        let x = x_top as i32;
        let xf = x as f32;
        let height = (sy1 - sy0) * e.direction;
        add(
            coverage,
            x,
            trapezoid_area(height, x_top, xf + 1.0, x_bottom, xf + 1.0),
        );
        add(fill, x + 1, height);
        return;
    }
    if x_top > x_bottom {
        // flip the scanline vertically; signed area is unchanged
        sy0 = y_bottom - (sy0 - y_top);
        sy1 = y_bottom - (sy1 - y_top);
        std::mem::swap(&mut sy0, &mut sy1);
        std::mem::swap(&mut x_top, &mut x_bottom);
        dx = -dx;
        dy = -dy;
        std::mem::swap(&mut x0, &mut xb);
    }
    debug_assert!(dx >= 0.0 && dy >= 0.0);
    let x1 = x_top as i32;
    let x2 = x_bottom as i32;
    let (x1f, x2f) = (x1 as f32, x2 as f32);
    // intersections with the right side of the first column and the left
    // side of the last
    let mut y_crossing = y_top + dy * (x1f + 1.0 - x0);
    let mut y_final = y_top + dy * (x2f - x0);
    // x_top right at the edge of its column makes y_crossing blow up
    if y_crossing > y_bottom {
        y_crossing = y_bottom;
    }
    let sign = e.direction;
    // rectangle from sy0 to y_crossing, one pixel wide
    let mut area = sign * (y_crossing - sy0);
    // triangle (x_top, sy0), (x1 + 1, sy0), (x1 + 1, y_crossing)
    add(coverage, x1, area * (x1f + 1.0 - x_top) / 2.0);
    if y_final > y_bottom {
        y_final = y_bottom;
        let denom = x2 - (x1 + 1);
        if denom != 0 {
            dy = (y_final - y_crossing) / denom as f32;
        }
    }
    // every interior column gets the area of all columns to its left plus
    // a trapezoid that slides down by dy per column
    let step = sign * dy;
    for x in x1 + 1..x2 {
        add(coverage, x, area + step / 2.0);
        area += step;
    }
    debug_assert!(area.abs() <= 1.01, "accumulated area {area}");
    add(
        coverage,
        x2,
        area + sign * trapezoid_area(sy1 - y_final, x2f, x2f + 1.0, x_bottom, x2f + 1.0),
    );
    add(fill, x2 + 1, sign * (sy1 - sy0));
}

/// Slow path for edges that leave the bitmap horizontally within this
/// scanline.
///
/// For every pixel, the segment is split at the pixel's left and right
/// sides into up to three pieces that are each clipped and accumulated.
fn fill_clipped(coverage: &mut [f32], e: &ActiveEdge, x0: f32, xb: f32, dx: f32, y_top: f32) {
    let len = i32::try_from(coverage.len()).unwrap_or(i32::MAX);
    let y_bottom = y_top + 1.0;
    for x in 0..len {
        let y0 = y_top;
        let x1 = x as f32;
        let x2 = x1 + 1.0;
        let x3 = xb;
        let y3 = y_bottom;
        // y where the edge crosses the left and right sides of the pixel
        let y1 = (x1 - x0) / dx + y_top;
        let y2 = (x2 - x0) / dx + y_top;
        let mut clip = |ax, ay, bx, by| handle_clipped(coverage, x, e, ax, ay, bx, by);
        if x0 < x1 && x3 > x2 {
            // three segments descending down-right
            clip(x0, y0, x1, y1);
            clip(x1, y1, x2, y2);
            clip(x2, y2, x3, y3);
        } else if x3 < x1 && x0 > x2 {
            // three segments descending down-left
            clip(x0, y0, x2, y2);
            clip(x2, y2, x1, y1);
            clip(x1, y1, x3, y3);
        } else if (x0 < x1 && x3 > x1) || (x3 < x1 && x0 > x1) {
            // two segments across the left side
            clip(x0, y0, x1, y1);
            clip(x1, y1, x3, y3);
        } else if (x0 < x2 && x3 > x2) || (x3 < x2 && x0 > x2) {
            // two segments across the right side
            clip(x0, y0, x2, y2);
            clip(x2, y2, x3, y3);
        } else {
            clip(x0, y0, x3, y3);
        }
    }
}

/// Adds the coverage of the segment `(x0, y0)..(x1, y1)`, clipped to the
/// vertical extent of `e`, to pixel `x` of `buf`.
///
/// The segment must lie within a single pixel column or entirely to one
/// side of it.
fn handle_clipped(
    buf: &mut [f32],
    x: i32,
    e: &ActiveEdge,
    mut x0: f32,
    mut y0: f32,
    mut x1: f32,
    mut y1: f32,
) {
    if y0 == y1 || y0 > e.ey || y1 < e.sy {
        return;
    }
    if y0 < e.sy {
        x0 += (x1 - x0) * (e.sy - y0) / (y1 - y0);
        y0 = e.sy;
    }
    if y1 > e.ey {
        x1 += (x1 - x0) * (e.ey - y1) / (y1 - y0);
        y1 = e.ey;
    }
    let xf = x as f32;
    if x0 <= xf && x1 <= xf {
        add(buf, x, e.direction * (y1 - y0));
    } else if x0 >= xf + 1.0 && x1 >= xf + 1.0 {
        // entirely to the right
    } else {
        // coverage is one minus the average x position within the pixel
        add(
            buf,
            x,
            e.direction * (y1 - y0) * (1.0 - ((x0 - xf) + (x1 - xf)) / 2.0),
        );
    }
}

fn trapezoid_area(height: f32, tx0: f32, tx1: f32, bx0: f32, bx1: f32) -> f32 {
    let top_width = tx1 - tx0;
    let bottom_width = bx1 - bx0;
    (top_width + bottom_width) / 2.0 * height
}

fn add(buf: &mut [f32], x: i32, value: f32) {
    if let Some(slot) = usize::try_from(x).ok().and_then(|x| buf.get_mut(x)) {
        *slot += value;
    }
}
