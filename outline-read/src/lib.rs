//! Reading compact glyph outline data
//!
//! This crate provides memory safe, zero-allocation parsing of the binary
//! structures that glyph outlines are stored in. It is the lowest layer of
//! the rasterization stack: everything above it (edge building and the
//! scanline rasterizer in `glyph-raster`) consumes values decoded here.
//!
//! The central type is [`ByteCursor`], a reader over a borrowed byte range.
//! Reads never panic and never touch memory outside the range: reading past
//! the end yields zero, seeking past the end clamps, and requesting an
//! invalid sub-range yields an empty cursor. This tolerant behaviour matches
//! what real-world (frequently malformed) fonts require. Every cursor
//! remembers whether it ran off the end, so strict callers can use
//! [`ByteCursor::finish`] to distinguish "legitimately zero" from
//! "truncated".
//!
//! The [`postscript`] module builds on the cursor to decode the compact
//! integer, DICT and INDEX encodings used by CFF outlines.
//!
//! # Example
//!
//! ```
//! use outline_read::ByteCursor;
//!
//! let data = [0x12, 0x34, 0x56, 0x78];
//! let mut cursor = ByteCursor::new(&data);
//! assert_eq!(cursor.get16(), 0x1234);
//! assert_eq!(cursor.get16(), 0x5678);
//! // reading past the end is tolerated, but recorded
//! assert_eq!(cursor.get8(), 0);
//! assert!(cursor.is_truncated());
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

mod cursor;
pub mod postscript;
mod read;

pub use cursor::ByteCursor;
pub use read::ReadError;
