//! Main-file header parsing.
//!
//! Every `.shp` and `.shx` file starts with the same 100-byte header. The
//! layout mixes endianness:
//!
//! ```text
//! [0,4)    file code, big-endian u32 (must equal 9994)
//! [4,24)   unused
//! [24,28)  file length in 16-bit words, big-endian u32 (includes the header)
//! [28,32)  version, little-endian u32
//! [32,36)  shape type code, little-endian u32
//! [36,100) bounding box: xmin, ymin, xmax, ymax, zmin, zmax, mmin, mmax
//!          as little-endian f64
//! ```

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::{debug, trace};

use super::error::{Result, ShapefileError};
use super::models::{BoundingBox, Header, ShapeType, FILE_CODE};

/// Fixed size of the main header in bytes.
pub const HEADER_LEN: usize = 100;

/// Parses the 100-byte main-file header.
///
/// Pure function over the first [`HEADER_LEN`] bytes of the file; performs
/// no I/O.
///
/// # Errors
/// - [`ShapefileError::MalformedHeader`] if the buffer is shorter than 100
///   bytes, the file code does not match, or the declared file length is
///   smaller than the header itself
/// - [`ShapefileError::UnknownShapeType`] if the shape type code is outside
///   the format's enumeration
pub fn parse(bytes: &[u8]) -> Result<Header> {
    if bytes.len() < HEADER_LEN {
        return Err(ShapefileError::MalformedHeader(format!(
            "header requires {} bytes, got {}",
            HEADER_LEN,
            bytes.len()
        )));
    }

    let file_code = BigEndian::read_u32(&bytes[0..4]);
    if file_code != FILE_CODE {
        return Err(ShapefileError::MalformedHeader(format!(
            "file code {} does not match expected {}",
            file_code, FILE_CODE
        )));
    }

    let file_length = BigEndian::read_u32(&bytes[24..28]);
    // file_length counts 16-bit words and covers the header, so anything
    // below 50 words cannot describe a real file.
    if (file_length as usize) * 2 < HEADER_LEN {
        return Err(ShapefileError::MalformedHeader(format!(
            "declared length of {} words is shorter than the header",
            file_length
        )));
    }

    let version = LittleEndian::read_u32(&bytes[28..32]);
    let type_code = LittleEndian::read_u32(&bytes[32..36]);
    let shape_type = ShapeType::try_from(type_code)?;
    trace!("Header fields: length={} words, version={}, type code={}", file_length, version, type_code);

    // Eight f64 slots from byte 36 through 100.
    let mut extent = [0f64; 8];
    for (i, slot) in extent.iter_mut().enumerate() {
        let start = 36 + i * 8;
        *slot = LittleEndian::read_f64(&bytes[start..start + 8]);
    }
    let bbox = BoundingBox {
        xmin: extent[0],
        ymin: extent[1],
        xmax: extent[2],
        ymax: extent[3],
        zmin: extent[4],
        zmax: extent[5],
        mmin: extent[6],
        mmax: extent[7],
    };

    debug!(
        "Header parsed: type={}, {} payload bytes, bbox=({}, {})..({}, {})",
        shape_type,
        file_length as usize * 2 - HEADER_LEN,
        bbox.xmin,
        bbox.ymin,
        bbox.xmax,
        bbox.ymax
    );

    Ok(Header {
        file_code,
        file_length,
        version,
        shape_type,
        bbox,
    })
}
