//! Directed edges built from flattened outlines.

use alloc::vec::Vec;

/// A point in outline space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Transform applied to outline points when building edges, and the
/// placement of the bitmap in the transformed space.
///
/// A point `(x, y)` maps to `(x * scale_x + shift_x, y * scale_y + shift_y)`,
/// with `scale_y` negated when `invert_y` is set (for outlines whose y axis
/// points up). Bitmap pixel `(0, 0)` covers the unit square whose top left
/// corner is `(offset_x, offset_y)` in that space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RasterOptions {
    pub scale_x: f32,
    pub scale_y: f32,
    pub shift_x: f32,
    pub shift_y: f32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub invert_y: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            shift_x: 0.0,
            shift_y: 0.0,
            offset_x: 0,
            offset_y: 0,
            invert_y: false,
        }
    }
}

impl RasterOptions {
    /// Options for a uniform scale with no shift.
    pub fn scaled(scale: f32) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            ..Default::default()
        }
    }

    /// Maps a point from outline space into raster space.
    pub fn transform(&self, point: Point) -> Point {
        let scale_y = if self.invert_y {
            -self.scale_y
        } else {
            self.scale_y
        };
        Point::new(
            point.x * self.scale_x + self.shift_x,
            point.y * scale_y + self.shift_y,
        )
    }
}

/// A line segment oriented from top (`y0`) to bottom (`y1`).
///
/// `winding` is `1` if the outline ran downward along this segment and `-1`
/// if it ran upward; it is the contribution of the edge to the winding
/// number of points to its right.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Edge {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub winding: i8,
}

impl Edge {
    /// Creates the edge for the directed segment from `from` to `to`.
    ///
    /// Returns `None` for horizontal segments, which never cross a scanline
    /// boundary and contribute no coverage.
    pub fn from_segment(from: Point, to: Point) -> Option<Self> {
        if from.y < to.y {
            Some(Self {
                x0: from.x,
                y0: from.y,
                x1: to.x,
                y1: to.y,
                winding: 1,
            })
        } else if from.y > to.y {
            Some(Self {
                x0: to.x,
                y0: to.y,
                x1: from.x,
                y1: from.y,
                winding: -1,
            })
        } else {
            None
        }
    }

    /// Returns the winding direction as a coverage sign.
    pub fn direction(&self) -> f32 {
        if self.winding < 0 {
            -1.0
        } else {
            1.0
        }
    }

    /// Returns the edge flipped, if necessary, so that `y0 <= y1`.
    fn oriented(self) -> Self {
        if self.y0 > self.y1 {
            Self {
                x0: self.x1,
                y0: self.y1,
                x1: self.x0,
                y1: self.y0,
                winding: -self.winding.signum(),
            }
        } else {
            self
        }
    }
}

/// A list of edges sorted by ascending `y0`.
///
/// Edges with equal `y0` keep the order in which they were produced.
#[derive(Clone, Debug, Default)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the edges of closed, flattened contours.
    ///
    /// `contour_lengths` holds the number of points in each consecutive
    /// contour of `points`. Each contour is implicitly closed.
    pub fn from_contours<P>(points: &[P], contour_lengths: &[usize], options: &RasterOptions) -> Self
    where
        P: Copy + Into<Point>,
    {
        let mut list = Self::new();
        list.build(points, contour_lengths, options);
        list
    }

    /// Replaces the contents of this list with the edges of the given
    /// contours, reusing the existing allocation.
    ///
    /// See [`from_contours`](Self::from_contours).
    pub fn build<P>(&mut self, points: &[P], contour_lengths: &[usize], options: &RasterOptions)
    where
        P: Copy + Into<Point>,
    {
        self.edges.clear();
        let mut start = 0usize;
        for &len in contour_lengths {
            let Some(contour) = start
                .checked_add(len)
                .and_then(|end| points.get(start..end))
            else {
                log::warn!(
                    "contour of {len} points at {start} exceeds the {} available points",
                    points.len()
                );
                break;
            };
            start += len;
            let Some(&last) = contour.last() else {
                continue;
            };
            let mut prev = options.transform(last.into());
            for &point in contour {
                let point = options.transform(point.into());
                self.edges.extend(Edge::from_segment(prev, point));
                prev = point;
            }
        }
        self.sort();
    }

    /// Returns the sorted edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn sort(&mut self) {
        self.edges.sort_by(|a, b| a.y0.total_cmp(&b.y0));
    }
}

impl FromIterator<Edge> for EdgeList {
    /// Collects arbitrary edges, reorienting any with `y0 > y1`.
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        let mut list = Self {
            edges: iter.into_iter().map(Edge::oriented).collect(),
        };
        list.sort();
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edge(x0: f32, y0: f32, x1: f32, y1: f32, winding: i8) -> Edge {
        Edge {
            x0,
            y0,
            x1,
            y1,
            winding,
        }
    }

    #[test]
    fn segment_orientation() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(3.0, 2.0);
        assert_eq!(Edge::from_segment(a, b), Some(edge(1.0, 0.0, 3.0, 2.0, 1)));
        assert_eq!(Edge::from_segment(b, a), Some(edge(1.0, 0.0, 3.0, 2.0, -1)));
        assert_eq!(Edge::from_segment(a, Point::new(5.0, 0.0)), None);
    }

    #[test]
    fn square_edges() {
        let points: [(f32, f32); 4] = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
        let list = EdgeList::from_contours(&points, &[4], &RasterOptions::default());
        // the two horizontal sides are dropped
        assert_eq!(
            list.edges(),
            &[edge(0.0, 0.0, 0.0, 2.0, -1), edge(2.0, 0.0, 2.0, 2.0, 1)]
        );
    }

    #[test]
    fn edges_are_sorted_stably() {
        let points: [(f32, f32); 6] = [
            // first contour starts lower
            (0.0, 3.0),
            (1.0, 5.0),
            (2.0, 3.0),
            // second contour
            (0.0, 1.0),
            (1.0, 3.0),
            (2.0, 1.0),
        ];
        let list = EdgeList::from_contours(&points, &[3, 3], &RasterOptions::default());
        let tops = list.edges().iter().map(|e| e.y0).collect::<Vec<_>>();
        assert_eq!(tops, [1.0, 1.0, 3.0, 3.0]);
        // ties keep contour order
        assert_eq!(list.edges()[0], edge(0.0, 1.0, 1.0, 3.0, 1));
        assert_eq!(list.edges()[1], edge(2.0, 1.0, 1.0, 3.0, -1));
    }

    #[test]
    fn transform_and_invert() {
        let options = RasterOptions {
            scale_x: 2.0,
            scale_y: 0.5,
            shift_x: 1.0,
            shift_y: 8.0,
            invert_y: true,
            ..Default::default()
        };
        assert_eq!(
            options.transform(Point::new(3.0, 4.0)),
            Point::new(7.0, 6.0)
        );
        // (0,0)->(0,4) rises in y-up space, so it runs up the bitmap
        let points: [(f32, f32); 3] = [(0.0, 0.0), (0.0, 4.0), (1.0, 0.0)];
        let list = EdgeList::from_contours(&points, &[3], &options);
        assert_eq!(list.edges()[0].winding, -1);
        assert_eq!(list.edges()[0].y0, 6.0);
        assert_eq!(list.edges()[0].y1, 8.0);
    }

    #[test]
    fn truncated_contours_are_dropped() {
        let points: [(f32, f32); 3] = [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let list = EdgeList::from_contours(&points, &[3, 5], &RasterOptions::default());
        assert_eq!(list.len(), 2);
        let list = EdgeList::from_contours(&points, &[usize::MAX], &RasterOptions::default());
        assert!(list.is_empty());
    }

    #[test]
    fn collected_edges_are_oriented() {
        let list = [edge(0.0, 4.0, 1.0, 2.0, 1), edge(5.0, 1.0, 5.0, 3.0, 1)]
            .into_iter()
            .collect::<EdgeList>();
        assert_eq!(
            list.edges(),
            &[edge(5.0, 1.0, 5.0, 3.0, 1), edge(1.0, 2.0, 0.0, 4.0, -1)]
        );
    }

    #[test]
    fn rebuild_reuses_list() {
        let mut list = EdgeList::new();
        let options = RasterOptions::scaled(2.0);
        let triangle: [(f32, f32); 3] = [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        list.build(&triangle, &[3], &options);
        assert_eq!(list.len(), 2);
        list.build(&[Point::new(0.0, 0.0), Point::new(1.0, 2.0)], &[2], &options);
        // the closing segment is walked first
        assert_eq!(
            list.edges(),
            &[edge(0.0, 0.0, 2.0, 4.0, -1), edge(0.0, 0.0, 2.0, 4.0, 1)]
        );
    }
}
