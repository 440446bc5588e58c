//! Anti-aliased coverage rasterization of glyph outlines
//!
//! This crate turns flattened glyph outlines (closed polygons) into 8-bit
//! grayscale coverage bitmaps. Coverage is computed analytically: for every
//! pixel, the signed area enclosed by the outline under the nonzero winding
//! rule is accumulated from exact trapezoid and triangle areas rather than
//! by supersampling.
//!
//! The pipeline is:
//!
//! 1. [`EdgeList`] builds directed, sorted [`Edge`]s from contours, applying
//!    the scale and shift in [`RasterOptions`].
//! 2. A scanline sweep moves edges in and out of an active edge list and
//!    accumulates per-pixel coverage for each row.
//! 3. Rows are composited into a [`BitmapMut`].
//!
//! Memory for active edges comes either from a single scratch block
//! partitioned by [`RasterScratch`] (the one-shot [`rasterize`] and
//! [`rasterize_edges`] functions) or from an [`Arena`] owned by a reusable
//! [`Rasterizer`]. Nothing is allocated per edge during the sweep.
//!
//! The decoding primitives for the binary outline data that feeds this
//! crate live in `outline-read`, re-exported here as [`raw`].
//!
//! # Example
//!
//! ```
//! use glyph_raster::{rasterize, Bitmap, RasterOptions};
//!
//! // a right triangle covering the lower left half of a 4x4 bitmap
//! let points: [(f32, f32); 3] = [(0.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
//! let mut bitmap = Bitmap::new(4, 4);
//! rasterize(
//!     &mut bitmap.as_bitmap_mut(),
//!     &points,
//!     &[3],
//!     &RasterOptions::default(),
//! )
//! .unwrap();
//! // pixels on the diagonal are half covered
//! assert_eq!(bitmap.pixels()[0], 128);
//! assert_eq!(bitmap.pixels()[1], 0);
//! assert_eq!(bitmap.pixels()[4], 255);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

extern crate alloc;

/// Expose our "raw" underlying parser crate.
pub extern crate outline_read as raw;

mod arena;
mod bitmap;
mod edge;
mod error;
mod memory;
mod raster;

pub use arena::Arena;
pub use bitmap::{Bitmap, BitmapMut};
pub use edge::{Edge, EdgeList, Point, RasterOptions};
pub use error::RasterError;
pub use memory::RasterScratch;
pub use raster::{rasterize, rasterize_edges, ActiveEdge, Rasterizer};
