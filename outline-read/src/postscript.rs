//! Compact (CFF) outline data.
//!
//! This covers the binary primitives that sit below a charstring
//! interpreter: variable length integers, DICTs, INDEXes and subroutine
//! resolution, plus [`CffTables`] which uses them to locate the charstring
//! and subroutine data of a CFF table.

use std::fmt;

mod cff;
pub mod dict;
mod index;

pub use cff::CffTables;
pub use index::{subr_bias, Index};

use crate::ReadError;

/// Errors that are specific to compact outline processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The first byte of an operand did not select any integer encoding.
    InvalidNumber(u8),
    /// The `off_size` field in an INDEX contained an invalid value.
    InvalidIndexOffsetSize(u8),
    /// An INDEX contained a zero offset.
    ZeroOffsetInIndex,
    /// The top DICT declared a charstring format other than 2.
    UnsupportedCharstringType(i32),
    /// A required structure (named by the payload) was absent.
    Missing(&'static str),
    /// Underlying parsing error.
    Read(ReadError),
}

impl From<ReadError> for Error {
    fn from(value: ReadError) -> Self {
        Self::Read(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber(b0) => {
                write!(f, "byte {b0} does not begin a valid integer operand")
            }
            Self::InvalidIndexOffsetSize(size) => {
                write!(f, "invalid offset size of {size} for INDEX (expected 1-4)")
            }
            Self::ZeroOffsetInIndex => {
                write!(f, "invalid offset of 0 in INDEX (must be >= 1)")
            }
            Self::UnsupportedCharstringType(ty) => {
                write!(f, "unsupported charstring type {ty} (expected 2)")
            }
            Self::Missing(what) => write!(f, "required {what} is missing"),
            Self::Read(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
