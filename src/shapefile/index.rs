//! Companion index (.shx) decoding.
//!
//! The index file opens with the same 100-byte header as the main file,
//! followed by one fixed 8-byte entry per main-file record:
//!
//! ```text
//! [0,4) record offset into the main file, big-endian u32, 16-bit words
//! [4,8) record content length, big-endian u32, 16-bit words
//! ```
//!
//! The entries let callers seek straight to a record in the main file
//! without a full sequential decode.

use std::fs;
use std::path::Path;

use byteorder::{BigEndian, ByteOrder};
use log::{debug, info};

use super::error::{Result, ShapefileError};
use super::header::HEADER_LEN;
use super::models::IndexEntry;

/// Size of one index entry in bytes.
const INDEX_ENTRY_LEN: usize = 8;

/// The ordered entry list of one index file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapefileIndex {
    pub entries: Vec<IndexEntry>,
}

impl ShapefileIndex {
    /// Reads an index file from the given path.
    ///
    /// Extension validation is a caller precondition, as for the main
    /// reader.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening shapefile index: {}", path.display());
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Decodes the full byte content of an index file.
    ///
    /// The leading 100-byte header is skipped, not parsed; it mirrors the
    /// main-file header, and callers that want its contents can run
    /// [`super::header::parse`] over the same bytes.
    ///
    /// # Errors
    /// - [`ShapefileError::MalformedHeader`] if the file is shorter than its
    ///   header
    /// - [`ShapefileError::TruncatedIndex`] if the body is not an exact
    ///   multiple of the 8-byte entry size
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(ShapefileError::MalformedHeader(format!(
                "index file holds {} bytes, shorter than its {}-byte header",
                bytes.len(),
                HEADER_LEN
            )));
        }

        let body = &bytes[HEADER_LEN..];
        let trailing = body.len() % INDEX_ENTRY_LEN;
        if trailing != 0 {
            return Err(ShapefileError::TruncatedIndex { trailing });
        }

        let entries = body
            .chunks_exact(INDEX_ENTRY_LEN)
            .map(|entry| IndexEntry {
                offset: BigEndian::read_u32(&entry[0..4]),
                content_length: BigEndian::read_u32(&entry[4..8]),
            })
            .collect::<Vec<_>>();

        debug!("Index decoded: {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Number of entries, equal to the main file's record count for a
    /// well-paired index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for record `i`, in file order.
    pub fn get(&self, i: usize) -> Option<&IndexEntry> {
        self.entries.get(i)
    }
}
