//! Flattened test outlines.
//!
//! Coordinates are in bitmap space: x grows right, y grows down and one
//! unit is one pixel. Each glyph carries the bitmap size it was designed
//! for.

/// A flattened outline with the bitmap dimensions it should be rendered
/// into.
#[derive(Copy, Clone, Debug)]
pub struct TestGlyph {
    pub name: &'static str,
    pub points: &'static [(f32, f32)],
    /// Number of points in each consecutive contour.
    pub contour_lengths: &'static [usize],
    pub width: usize,
    pub height: usize,
}

/// A box covering the left half of the first pixel.
pub const HALF_PIXEL: TestGlyph = TestGlyph {
    name: "half_pixel",
    points: &[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (0.0, 1.0)],
    contour_lengths: &[4],
    width: 2,
    height: 1,
};

/// A box that is not aligned to the pixel grid.
pub const UNALIGNED_BOX: TestGlyph = TestGlyph {
    name: "unaligned_box",
    points: &[(1.25, 0.5), (3.25, 0.5), (3.25, 2.75), (1.25, 2.75)],
    contour_lengths: &[4],
    width: 5,
    height: 4,
};

/// A square with a square hole wound in the opposite direction.
pub const SQUARE_WITH_HOLE: TestGlyph = TestGlyph {
    name: "square_with_hole",
    points: &[
        (0.0, 0.0),
        (8.0, 0.0),
        (8.0, 8.0),
        (0.0, 8.0),
        // hole
        (2.0, 2.0),
        (2.0, 6.0),
        (6.0, 6.0),
        (6.0, 2.0),
    ],
    contour_lengths: &[4, 4],
    width: 8,
    height: 8,
};

/// An octagonal ring with a diamond shaped counter.
pub const RING: TestGlyph = TestGlyph {
    name: "ring",
    points: &[
        (5.0, 1.0),
        (11.0, 1.0),
        (15.0, 5.0),
        (15.0, 11.0),
        (11.0, 15.0),
        (5.0, 15.0),
        (1.0, 11.0),
        (1.0, 5.0),
        // counter
        (8.0, 3.5),
        (3.5, 8.0),
        (8.0, 12.5),
        (12.5, 8.0),
    ],
    contour_lengths: &[8, 4],
    width: 16,
    height: 16,
};

/// A capital A with a triangular counter.
pub const LETTER_A: TestGlyph = TestGlyph {
    name: "letter_a",
    points: &[
        (1.0, 15.0),
        (6.5, 1.0),
        (9.5, 1.0),
        (15.0, 15.0),
        (12.0, 15.0),
        (10.8, 11.5),
        (5.2, 11.5),
        (4.0, 15.0),
        // counter
        (6.2, 8.8),
        (9.8, 8.8),
        (8.0, 3.8),
    ],
    contour_lengths: &[8, 3],
    width: 16,
    height: 16,
};

/// A slanted quadrilateral that extends past every side of its bitmap.
pub const OVERHANG: TestGlyph = TestGlyph {
    name: "overhang",
    points: &[(-3.0, -2.0), (6.5, 1.25), (10.5, 9.5), (1.0, 7.25)],
    contour_lengths: &[4],
    width: 8,
    height: 8,
};

/// A thin sliver whose edges cross many columns within a single row.
pub const SHALLOW_SLIVER: TestGlyph = TestGlyph {
    name: "shallow_sliver",
    points: &[(0.2, 0.3), (11.7, 2.1), (11.7, 2.6), (0.2, 0.9)],
    contour_lengths: &[4],
    width: 12,
    height: 3,
};

/// A self intersecting pentagram. The center has a winding number of two.
pub const STAR: TestGlyph = TestGlyph {
    name: "star",
    points: &[
        (8.0, 1.0),
        (12.114, 13.663),
        (1.343, 5.837),
        (14.657, 5.837),
        (3.886, 13.663),
    ],
    contour_lengths: &[5],
    width: 16,
    height: 16,
};

/// Every glyph in this module.
pub const ALL: &[TestGlyph] = &[
    HALF_PIXEL,
    UNALIGNED_BOX,
    SQUARE_WITH_HOLE,
    RING,
    LETTER_A,
    OVERHANG,
    SHALLOW_SLIVER,
    STAR,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contour_lengths_cover_all_points() {
        for glyph in ALL {
            assert_eq!(
                glyph.contour_lengths.iter().sum::<usize>(),
                glyph.points.len(),
                "{}",
                glyph.name
            );
        }
    }
}
