//! Errors reported by strict readers.

/// An error that occurs when reading outline data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadError {
    /// A requested range did not lie within the underlying data.
    OutOfBounds,
    /// A read ran past the end of its range and produced a substitute zero.
    Truncated,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::Truncated => write!(f, "Data ended before a read completed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
