//! test data shared between the glyph rasterization crates.

pub mod bebuffer;
pub mod coverage;
pub mod glyphs;
pub mod reference;
