use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use super::error::Result;
use super::header::{self, HEADER_LEN};
use super::index::ShapefileIndex;
use super::models::{GeometryCollection, Header};
use super::records;

/// The main reader for shapefile geometry (.shp) files.
///
/// Decodes the whole file in one pass: fixed 100-byte header, then the
/// record payload the header declares. The result is immutable; repeated
/// decodes of the same bytes yield identical values.
#[derive(Debug, Clone, PartialEq)]
pub struct Shapefile {
    pub header: Header,
    pub records: GeometryCollection,
}

impl Shapefile {
    /// Reads a shapefile from the given path.
    ///
    /// Reads exactly 100 header bytes, then exactly the
    /// `file_length * 2 - 100` payload bytes the header declares, so a file
    /// shorter than its declared length surfaces as an I/O error rather than
    /// a parse error. Extension validation is a caller precondition and is
    /// not re-checked here.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened or is shorter than its declared length
    /// - The header magic or declared length is invalid
    /// - The shape type is unknown, or known but not decoded (Z/M/MultiPatch)
    /// - A record overruns the payload
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening shapefile: {}", path.display());
        let mut file = File::open(path)?;

        let mut header_bytes = [0u8; HEADER_LEN];
        file.read_exact(&mut header_bytes)?;
        let header = header::parse(&header_bytes)?;

        let mut payload = vec![0u8; header.payload_len()];
        file.read_exact(&mut payload)?;
        let records = records::parse(header.shape_type, &payload)?;

        info!(
            "Shapefile decoded: {} {} records",
            records.len(),
            header.shape_type
        );
        Ok(Self { header, records })
    }

    /// Number of records in the file.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks the cross-file invariant with a companion index: a paired
    /// `.shx` carries exactly one entry per main-file record.
    pub fn matches_index(&self, index: &ShapefileIndex) -> bool {
        index.len() == self.len()
    }
}
