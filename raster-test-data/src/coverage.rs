//! Known good coverage for the glyphs in [`crate::glyphs`].
//!
//! Buffers are tightly packed, one line per row, and agree exactly with
//! [`crate::reference::rasterize`]. Any change to these bytes is a change
//! to the numerical behavior of the rasterizer.

/// Shift applied to every glyph for the buffers in [`SHIFTED`].
pub const SUBPIXEL_SHIFT: (f32, f32) = (0.37, 0.81);

/// [`crate::glyphs::HALF_PIXEL`] with default options.
#[rustfmt::skip]
pub const HALF_PIXEL: &[u8] = &[
    128, 0,
];

/// [`crate::glyphs::UNALIGNED_BOX`] with default options.
#[rustfmt::skip]
pub const UNALIGNED_BOX: &[u8] = &[
    0, 96, 128, 32, 0,
    0, 191, 255, 64, 0,
    0, 143, 191, 48, 0,
    0, 0, 0, 0, 0,
];

/// [`crate::glyphs::SQUARE_WITH_HOLE`] with default options.
#[rustfmt::skip]
pub const SQUARE_WITH_HOLE: &[u8] = &[
    255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 0, 0, 0, 0, 255, 255,
    255, 255, 0, 0, 0, 0, 255, 255,
    255, 255, 0, 0, 0, 0, 255, 255,
    255, 255, 0, 0, 0, 0, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255,
];

/// [`crate::glyphs::RING`] with default options.
#[rustfmt::skip]
pub const RING: &[u8] = &[
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 128, 255, 255, 255, 255, 255, 255, 128, 0, 0, 0, 0,
    0, 0, 0, 128, 255, 255, 255, 255, 255, 255, 255, 255, 128, 0, 0, 0,
    0, 0, 128, 255, 255, 255, 255, 223, 223, 255, 255, 255, 255, 128, 0, 0,
    0, 128, 255, 255, 255, 255, 223, 32, 32, 223, 255, 255, 255, 255, 128, 0,
    0, 255, 255, 255, 255, 223, 32, 0, 0, 32, 223, 255, 255, 255, 255, 0,
    0, 255, 255, 255, 223, 32, 0, 0, 0, 0, 32, 223, 255, 255, 255, 0,
    0, 255, 255, 223, 32, 0, 0, 0, 0, 0, 0, 32, 223, 255, 255, 0,
    0, 255, 255, 223, 32, 0, 0, 0, 0, 0, 0, 32, 223, 255, 255, 0,
    0, 255, 255, 255, 223, 32, 0, 0, 0, 0, 32, 223, 255, 255, 255, 0,
    0, 255, 255, 255, 255, 223, 32, 0, 0, 32, 223, 255, 255, 255, 255, 0,
    0, 128, 255, 255, 255, 255, 223, 32, 32, 223, 255, 255, 255, 255, 128, 0,
    0, 0, 128, 255, 255, 255, 255, 223, 223, 255, 255, 255, 255, 128, 0, 0,
    0, 0, 0, 128, 255, 255, 255, 255, 255, 255, 255, 255, 128, 0, 0, 0,
    0, 0, 0, 0, 128, 255, 255, 255, 255, 255, 255, 128, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// [`crate::glyphs::LETTER_A`] with default options.
#[rustfmt::skip]
pub const LETTER_A: &[u8] = &[
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 178, 255, 255, 178, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 26, 251, 255, 255, 251, 26, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 123, 255, 253, 253, 255, 123, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 2, 221, 255, 191, 191, 255, 221, 2, 0, 0, 0, 0,
    0, 0, 0, 0, 68, 255, 255, 99, 99, 255, 255, 68, 0, 0, 0, 0,
    0, 0, 0, 0, 168, 255, 247, 15, 15, 247, 255, 168, 0, 0, 0, 0,
    0, 0, 0, 20, 248, 255, 170, 0, 0, 170, 255, 248, 20, 0, 0, 0,
    0, 0, 0, 114, 255, 255, 121, 51, 51, 121, 255, 255, 114, 0, 0, 0,
    0, 0, 0, 214, 255, 255, 255, 255, 255, 255, 255, 255, 214, 0, 0, 0,
    0, 0, 59, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 59, 0, 0,
    0, 0, 159, 255, 255, 142, 128, 128, 128, 128, 142, 255, 255, 159, 0, 0,
    0, 15, 245, 255, 218, 0, 0, 0, 0, 0, 0, 218, 255, 245, 15, 0,
    0, 105, 255, 255, 131, 0, 0, 0, 0, 0, 0, 131, 255, 255, 105, 0,
    0, 205, 255, 255, 44, 0, 0, 0, 0, 0, 0, 44, 255, 255, 205, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// [`crate::glyphs::OVERHANG`] with default options.
#[rustfmt::skip]
pub const OVERHANG: &[u8] = &[
    255, 255, 254, 198, 111, 26, 0, 0,
    255, 255, 255, 255, 255, 253, 141, 0,
    255, 255, 255, 255, 255, 255, 250, 32,
    255, 255, 255, 255, 255, 255, 255, 151,
    255, 255, 255, 255, 255, 255, 255, 248,
    193, 255, 255, 255, 255, 255, 255, 255,
    83, 255, 255, 255, 255, 255, 255, 255,
    3, 94, 154, 215, 254, 255, 255, 255,
];

/// [`crate::glyphs::SHALLOW_SLIVER`] with default options.
#[rustfmt::skip]
pub const SHALLOW_SLIVER: &[u8] = &[
    121, 127, 87, 47, 9, 0, 0, 0, 0, 0, 0, 0,
    0, 24, 61, 99, 134, 141, 139, 134, 102, 62, 22, 0,
    0, 0, 0, 0, 0, 0, 0, 2, 32, 70, 108, 90,
];

/// [`crate::glyphs::STAR`] with default options.
#[rustfmt::skip]
pub const STAR: &[u8] = &[
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 41, 41, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 124, 124, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 207, 207, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 35, 255, 255, 35, 0, 0, 0, 0, 0, 0,
    0, 23, 42, 42, 42, 42, 159, 255, 255, 159, 42, 42, 42, 42, 23, 0,
    0, 17, 173, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 173, 17, 0,
    0, 0, 0, 103, 246, 255, 255, 255, 255, 255, 255, 246, 103, 0, 0, 0,
    0, 0, 0, 0, 43, 255, 255, 255, 255, 255, 255, 43, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 203, 255, 255, 255, 255, 203, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 24, 253, 255, 255, 255, 255, 253, 24, 0, 0, 0, 0,
    0, 0, 0, 0, 105, 255, 192, 28, 28, 192, 255, 105, 0, 0, 0, 0,
    0, 0, 0, 0, 184, 125, 3, 0, 0, 3, 125, 184, 0, 0, 0, 0,
    0, 0, 0, 4, 55, 0, 0, 0, 0, 0, 0, 55, 4, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// [`crate::glyphs::HALF_PIXEL`] shifted by [`SUBPIXEL_SHIFT`].
#[rustfmt::skip]
pub const HALF_PIXEL_SHIFTED: &[u8] = &[
    24, 0,
];

/// [`crate::glyphs::UNALIGNED_BOX`] shifted by [`SUBPIXEL_SHIFT`].
#[rustfmt::skip]
pub const UNALIGNED_BOX_SHIFTED: &[u8] = &[
    0, 0, 0, 0, 0,
    0, 67, 176, 109, 0,
    0, 97, 255, 158, 0,
    0, 54, 143, 89, 0,
];

/// [`crate::glyphs::SQUARE_WITH_HOLE`] shifted by [`SUBPIXEL_SHIFT`].
#[rustfmt::skip]
pub const SQUARE_WITH_HOLE_SHIFTED: &[u8] = &[
    31, 48, 48, 48, 48, 48, 48, 48,
    161, 255, 255, 255, 255, 255, 255, 255,
    161, 255, 224, 207, 207, 207, 237, 255,
    161, 255, 94, 0, 0, 0, 161, 255,
    161, 255, 94, 0, 0, 0, 161, 255,
    161, 255, 94, 0, 0, 0, 161, 255,
    161, 255, 125, 48, 48, 48, 179, 255,
    161, 255, 255, 255, 255, 255, 255, 255,
];

/// [`crate::glyphs::RING`] shifted by [`SUBPIXEL_SHIFT`].
#[rustfmt::skip]
pub const RING_SHIFTED: &[u8] = &[
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 35, 48, 48, 48, 48, 48, 23, 0, 0, 0, 0,
    0, 0, 0, 0, 86, 251, 255, 255, 255, 255, 255, 230, 40, 0, 0, 0,
    0, 0, 0, 86, 251, 255, 255, 255, 255, 255, 255, 255, 230, 40, 0, 0,
    0, 0, 86, 251, 255, 255, 255, 242, 147, 255, 255, 255, 255, 230, 40, 0,
    0, 81, 251, 255, 255, 255, 242, 59, 0, 113, 255, 255, 255, 255, 230, 35,
    0, 161, 255, 255, 255, 242, 59, 0, 0, 0, 113, 255, 255, 255, 255, 94,
    0, 161, 255, 255, 242, 59, 0, 0, 0, 0, 0, 113, 255, 255, 255, 94,
    0, 161, 255, 251, 59, 0, 0, 0, 0, 0, 0, 0, 121, 255, 255, 94,
    0, 161, 255, 255, 142, 0, 0, 0, 0, 0, 0, 13, 196, 255, 255, 94,
    0, 161, 255, 255, 255, 142, 0, 0, 0, 0, 13, 196, 255, 255, 255, 94,
    0, 156, 255, 255, 255, 255, 142, 0, 0, 13, 196, 255, 255, 255, 255, 90,
    0, 25, 215, 255, 255, 255, 255, 142, 14, 196, 255, 255, 255, 255, 169, 4,
    0, 0, 25, 215, 255, 255, 255, 255, 230, 255, 255, 255, 255, 169, 4, 0,
    0, 0, 0, 25, 215, 255, 255, 255, 255, 255, 255, 255, 169, 4, 0, 0,
    0, 0, 0, 0, 25, 189, 207, 207, 207, 207, 207, 156, 4, 0, 0, 0,
];

/// [`crate::glyphs::LETTER_A`] shifted by [`SUBPIXEL_SHIFT`].
#[rustfmt::skip]
pub const LETTER_A_SHIFTED: &[u8] = &[
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 8, 48, 48, 44, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 102, 255, 255, 254, 37, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 202, 255, 255, 255, 136, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 48, 255, 255, 241, 255, 231, 5, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 148, 255, 249, 98, 255, 255, 82, 0, 0, 0, 0,
    0, 0, 0, 0, 9, 239, 255, 176, 6, 236, 255, 182, 0, 0, 0, 0,
    0, 0, 0, 0, 93, 255, 255, 84, 0, 150, 255, 252, 30, 0, 0, 0,
    0, 0, 0, 0, 193, 255, 239, 8, 0, 59, 255, 255, 127, 0, 0, 0,
    0, 0, 0, 39, 254, 255, 205, 99, 99, 100, 245, 255, 225, 2, 0, 0,
    0, 0, 0, 139, 255, 255, 255, 255, 255, 255, 255, 255, 255, 72, 0, 0,
    0, 0, 6, 233, 255, 255, 255, 255, 255, 255, 255, 255, 255, 173, 0, 0,
    0, 0, 84, 255, 255, 159, 79, 79, 79, 79, 79, 204, 255, 250, 23, 0,
    0, 0, 184, 255, 255, 41, 0, 0, 0, 0, 0, 108, 255, 255, 118, 0,
    0, 32, 253, 255, 209, 0, 0, 0, 0, 0, 0, 23, 252, 255, 217, 1,
    0, 97, 207, 207, 105, 0, 0, 0, 0, 0, 0, 0, 159, 207, 207, 44,
];

/// [`crate::glyphs::OVERHANG`] shifted by [`SUBPIXEL_SHIFT`].
#[rustfmt::skip]
pub const OVERHANG_SHIFTED: &[u8] = &[
    254, 198, 111, 26, 0, 0, 0, 0,
    255, 255, 255, 253, 191, 104, 21, 0,
    255, 255, 255, 255, 255, 255, 247, 28,
    255, 255, 255, 255, 255, 255, 255, 145,
    254, 255, 255, 255, 255, 255, 255, 246,
    188, 255, 255, 255, 255, 255, 255, 255,
    78, 255, 255, 255, 255, 255, 255, 255,
    2, 220, 255, 255, 255, 255, 255, 255,
];

/// [`crate::glyphs::SHALLOW_SLIVER`] shifted by [`SUBPIXEL_SHIFT`].
#[rustfmt::skip]
pub const SHALLOW_SLIVER_SHIFTED: &[u8] = &[
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    66, 151, 145, 110, 70, 30, 1, 0, 0, 0, 0, 0,
    0, 0, 4, 36, 74, 112, 139, 138, 135, 124, 86, 46,
];

/// [`crate::glyphs::STAR`] shifted by [`SUBPIXEL_SHIFT`].
#[rustfmt::skip]
pub const STAR_SHIFTED: &[u8] = &[
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 114, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 46, 232, 3, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 129, 255, 62, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 211, 255, 145, 0, 0, 0, 0, 0, 0,
    0, 8, 86, 90, 90, 90, 129, 255, 255, 255, 91, 90, 90, 90, 71, 0,
    0, 0, 59, 224, 255, 255, 255, 255, 255, 255, 255, 255, 255, 190, 27, 0,
    0, 0, 0, 17, 171, 255, 255, 255, 255, 255, 255, 251, 123, 3, 0, 0,
    0, 0, 0, 0, 0, 135, 255, 255, 255, 255, 255, 58, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 116, 255, 255, 255, 255, 255, 49, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 198, 255, 252, 247, 255, 255, 132, 0, 0, 0, 0,
    0, 0, 0, 0, 28, 254, 207, 40, 0, 78, 236, 215, 0, 0, 0, 0,
    0, 0, 0, 0, 108, 145, 7, 0, 0, 0, 27, 191, 43, 0, 0, 0,
    0, 0, 0, 0, 30, 0, 0, 0, 0, 0, 0, 3, 27, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Default option coverage for each entry of [`crate::glyphs::ALL`], in order.
pub const DEFAULT: &[&[u8]] = &[
    HALF_PIXEL,
    UNALIGNED_BOX,
    SQUARE_WITH_HOLE,
    RING,
    LETTER_A,
    OVERHANG,
    SHALLOW_SLIVER,
    STAR,
];

/// Shifted coverage for each entry of [`crate::glyphs::ALL`], in order.
pub const SHIFTED: &[&[u8]] = &[
    HALF_PIXEL_SHIFTED,
    UNALIGNED_BOX_SHIFTED,
    SQUARE_WITH_HOLE_SHIFTED,
    RING_SHIFTED,
    LETTER_A_SHIFTED,
    OVERHANG_SHIFTED,
    SHALLOW_SLIVER_SHIFTED,
    STAR_SHIFTED,
];
