//! Custom error types for the shapefile-reader crate.

use thiserror::Error;

use super::models::ShapeType;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum ShapefileError {
    /// An error originating from I/O operations, including files shorter
    /// than their declared length.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The main file header is structurally invalid (bad magic, short
    /// buffer, or an impossible declared length).
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// The header declares a shape type code outside the format's enumeration.
    #[error("Unknown shape type code: {0}")]
    UnknownShapeType(u32),

    /// The shape type is part of the format but this reader does not decode
    /// its geometry (Z/M variants and MultiPatch).
    #[error("Shape type {0} is recognized but not decoded by this reader")]
    UnsupportedShapeType(ShapeType),

    /// A record claims more content than the remaining payload bytes hold,
    /// or the record cursor fails to land exactly on the buffer end.
    #[error("Truncated record at byte {offset}: record needs {expected} bytes, but only {remaining} remain")]
    TruncatedRecord {
        offset: usize,
        expected: usize,
        remaining: usize,
    },

    /// The index file body is not an exact multiple of the 8-byte entry size.
    #[error("Truncated index: {trailing} trailing bytes after the last complete 8-byte entry")]
    TruncatedIndex { trailing: usize },
}

/// A convenience `Result` type alias using the crate's `ShapefileError` type.
pub type Result<T> = std::result::Result<T, ShapefileError>;
