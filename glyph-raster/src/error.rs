//! Errors that may occur during rasterization.

use std::fmt;

/// Reasons a glyph could not be rasterized.
///
/// Whenever one of these is returned from a rasterization entry point, the
/// target bitmap has been cleared so the glyph renders blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// Growing an arena chunk or the temporary scratch memory failed, or a
    /// configured memory limit was reached.
    OutOfMemory,
    /// The scratch buffer cannot hold the layout computed for the pass.
    ScratchTooSmall { required: usize, provided: usize },
    /// The pixel buffer is too small for the given width, height and
    /// stride, or the stride is smaller than the width.
    InvalidDimensions {
        width: usize,
        height: usize,
        stride: usize,
    },
    /// The edge list has more entries than active edge handles can address.
    TooManyEdges(usize),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "exceeded memory limits"),
            Self::ScratchTooSmall { required, provided } => write!(
                f,
                "scratch buffer of {provided} bytes is too small (required {required})"
            ),
            Self::InvalidDimensions {
                width,
                height,
                stride,
            } => write!(
                f,
                "pixel buffer does not fit a {width}x{height} bitmap with stride {stride}"
            ),
            Self::TooManyEdges(count) => write!(f, "too many edges ({count})"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RasterError {}
