//! An exact-area reference rasterizer.
//!
//! For every pixel, each contour is clipped to the pixel square and the
//! signed area of the result is accumulated. The sum is the integral of the
//! winding number over the pixel, which is exactly what an analytic
//! nonzero-winding scanline rasterizer computes before it takes the
//! absolute value and clamps. This is far too slow for real use but makes
//! a good oracle.

/// Rasterizes closed contours given in bitmap space (x right, y down, one
/// unit per pixel) into a `width * height` coverage buffer.
///
/// `contour_lengths` gives the number of points in each consecutive
/// contour of `points`.
pub fn rasterize(
    points: &[(f32, f32)],
    contour_lengths: &[usize],
    width: usize,
    height: usize,
) -> Vec<u8> {
    let contours = split_contours(points, contour_lengths);
    let mut pixels = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let (x0, y0) = (x as f64, y as f64);
            let area: f64 = contours
                .iter()
                .map(|contour| signed_area(&clip_to_box(contour, x0, y0, x0 + 1.0, y0 + 1.0)))
                .sum();
            pixels[y * width + x] = to_byte(area);
        }
    }
    pixels
}

/// Returns the largest per-pixel absolute difference between two buffers.
pub fn max_difference(a: &[u8], b: &[u8]) -> u8 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(a, b)| a.abs_diff(*b))
        .max()
        .unwrap_or_default()
}

fn to_byte(area: f64) -> u8 {
    let k = (area.abs() * 255.0 + 0.5) as i32;
    k.min(255) as u8
}

fn split_contours(points: &[(f32, f32)], contour_lengths: &[usize]) -> Vec<Vec<(f64, f64)>> {
    let mut contours = Vec::new();
    let mut start = 0;
    for len in contour_lengths {
        let contour = points[start..start + len]
            .iter()
            .map(|(x, y)| (*x as f64, *y as f64))
            .collect();
        contours.push(contour);
        start += len;
    }
    contours
}

/// Shoelace formula.
fn signed_area(poly: &[(f64, f64)]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let (x0, y0) = poly[i];
            let (x1, y1) = poly[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum();
    twice / 2.0
}

#[derive(Copy, Clone)]
enum Axis {
    X,
    Y,
}

/// Sutherland-Hodgman clipping against an axis aligned box.
fn clip_to_box(poly: &[(f64, f64)], x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<(f64, f64)> {
    let poly = clip(poly, Axis::X, x0, true);
    let poly = clip(&poly, Axis::X, x1, false);
    let poly = clip(&poly, Axis::Y, y0, true);
    clip(&poly, Axis::Y, y1, false)
}

fn clip(poly: &[(f64, f64)], axis: Axis, bound: f64, keep_greater: bool) -> Vec<(f64, f64)> {
    let coord = |p: (f64, f64)| match axis {
        Axis::X => p.0,
        Axis::Y => p.1,
    };
    let inside = |p: (f64, f64)| {
        if keep_greater {
            coord(p) >= bound
        } else {
            coord(p) <= bound
        }
    };
    let intersect = |p: (f64, f64), q: (f64, f64)| {
        let t = (bound - coord(p)) / (coord(q) - coord(p));
        let point = (p.0 + (q.0 - p.0) * t, p.1 + (q.1 - p.1) * t);
        // snap the clipped coordinate exactly onto the boundary
        match axis {
            Axis::X => (bound, point.1),
            Axis::Y => (point.0, bound),
        }
    };
    let mut out = Vec::with_capacity(poly.len() + 4);
    let n = poly.len();
    for i in 0..n {
        let current = poly[i];
        let prev = poly[(i + n - 1) % n];
        match (inside(prev), inside(current)) {
            (true, true) => out.push(current),
            (true, false) => out.push(intersect(prev, current)),
            (false, true) => {
                out.push(intersect(prev, current));
                out.push(current);
            }
            (false, false) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_and_half_pixels() {
        // 1.5 pixels wide, one pixel tall
        let points = [(0.0, 0.0), (1.5, 0.0), (1.5, 1.0), (0.0, 1.0)];
        let pixels = rasterize(&points, &[4], 3, 1);
        assert_eq!(pixels, [255, 128, 0]);
    }

    #[test]
    fn orientation_is_irrelevant_for_single_contours() {
        let cw = [(0.0, 0.0), (2.0, 0.0), (2.0, 0.5), (0.0, 0.5)];
        let ccw = [(0.0, 0.0), (0.0, 0.5), (2.0, 0.5), (2.0, 0.0)];
        assert_eq!(rasterize(&cw, &[4], 2, 1), rasterize(&ccw, &[4], 2, 1));
    }

    #[test]
    fn opposite_contours_cancel() {
        let points = [
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (0.0, 3.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (2.0, 2.0),
            (2.0, 1.0),
        ];
        let pixels = rasterize(&points, &[4, 4], 3, 3);
        assert_eq!(pixels[4], 0);
        assert_eq!(pixels[0], 255);
    }
}
