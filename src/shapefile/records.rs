//! Shape-typed geometry record decoders.
//!
//! Records follow the header back-to-back with no count field; the end of
//! the payload is the only termination signal, so each decoder walks a byte
//! cursor and must land exactly on the buffer end. Every record starts with
//! a 12-byte prefix (record number and content length, big-endian, plus the
//! per-record shape tag, little-endian) that this module only uses for
//! cursor advancement; field offsets below are relative to the record start
//! and already include that prefix.
//!
//! Per-record layouts:
//!
//! ```text
//! Point      [12,20) x   [20,28) y                      size = 28
//! MultiPoint [44,48) num_points, points from 48         size = 48 + 16n
//! Poly       [44,48) num_parts,  [48,52) num_points,
//!            part starts from 52, points after them     size = 52 + 4p + 16n
//! Null       prefix only                                size = 12
//! ```
//!
//! MultiPoint and Poly records carry a 32-byte record bounding box between
//! the prefix and the counts, which is why their counts sit at offset 44.
//! All record fields are little-endian f64/u32.

use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};
use log::{info, trace};

use super::error::{Result, ShapefileError};
use super::models::{
    Geometry, GeometryCollection, MultiPointFeature, Point, PolyFeature, ShapeType,
};

/// Record number + content length + per-record shape tag.
const RECORD_PREFIX_LEN: usize = 12;
/// Fixed size of a Point record.
const POINT_RECORD_LEN: usize = 28;
/// Prefix + record bbox + point count; points start here.
const MULTIPOINT_FIXED_LEN: usize = 48;
/// Prefix + record bbox + part and point counts; part starts follow.
const POLY_FIXED_LEN: usize = 52;
/// One (x, y) pair of f64.
const POINT_PAIR_LEN: usize = 16;

/// Decodes the post-header payload into the file's record sequence.
///
/// Dispatch is a pure function of the header's shape type. Z/M variants and
/// MultiPatch are recognized tags whose geometry this reader deliberately
/// does not decode; they surface as
/// [`ShapefileError::UnsupportedShapeType`], distinct from the hard parse
/// failures, so callers can choose to skip rather than abort.
pub fn parse(shape_type: ShapeType, payload: &[u8]) -> Result<GeometryCollection> {
    let records = match shape_type {
        ShapeType::Null => parse_null_records(payload)?,
        ShapeType::Point => parse_point_records(payload)?,
        ShapeType::MultiPoint => parse_multipoint_records(payload)?,
        ShapeType::Polyline | ShapeType::Polygon => parse_poly_records(payload)?,
        unsupported => return Err(ShapefileError::UnsupportedShapeType(unsupported)),
    };

    info!("Decoded {} {} records", records.len(), shape_type);
    Ok(GeometryCollection {
        shape_type,
        records,
    })
}

/// Borrows the `size` bytes of the record at `cursor`, or fails with a
/// [`ShapefileError::TruncatedRecord`] carrying the shortfall.
fn take_record(payload: &[u8], cursor: usize, size: usize) -> Result<&[u8]> {
    let remaining = payload.len() - cursor;
    if size > remaining {
        return Err(ShapefileError::TruncatedRecord {
            offset: cursor,
            expected: size,
            remaining,
        });
    }
    Ok(&payload[cursor..cursor + size])
}

/// Reads one little-endian (x, y) pair.
fn read_point(bytes: &[u8]) -> Point {
    Point {
        x: LittleEndian::read_f64(&bytes[0..8]),
        y: LittleEndian::read_f64(&bytes[8..16]),
    }
}

/// Null records are the 12-byte prefix alone: one placeholder each, no
/// geometry payload to parse.
fn parse_null_records(payload: &[u8]) -> Result<Vec<Geometry>> {
    let mut records = Vec::new();
    let mut cursor = 0;
    while cursor < payload.len() {
        take_record(payload, cursor, RECORD_PREFIX_LEN)?;
        records.push(Geometry::Null);
        cursor += RECORD_PREFIX_LEN;
    }
    Ok(records)
}

fn parse_point_records(payload: &[u8]) -> Result<Vec<Geometry>> {
    let mut records = Vec::new();
    let mut cursor = 0;
    while cursor < payload.len() {
        let record = take_record(payload, cursor, POINT_RECORD_LEN)?;
        records.push(Geometry::Point(read_point(&record[12..28])));
        cursor += POINT_RECORD_LEN;
    }
    Ok(records)
}

fn parse_multipoint_records(payload: &[u8]) -> Result<Vec<Geometry>> {
    let mut records = Vec::new();
    let mut cursor = 0;
    while cursor < payload.len() {
        // The fixed section must be present before the point count is
        // addressable at all.
        take_record(payload, cursor, MULTIPOINT_FIXED_LEN)?;
        let num_points = LittleEndian::read_u32(&payload[cursor + 44..cursor + 48]) as usize;

        let record_len = MULTIPOINT_FIXED_LEN + num_points * POINT_PAIR_LEN;
        let record = take_record(payload, cursor, record_len)?;

        let points = (0..num_points)
            .map(|i| read_point(&record[MULTIPOINT_FIXED_LEN + i * POINT_PAIR_LEN..][..POINT_PAIR_LEN]))
            .collect();
        records.push(Geometry::MultiPoint(MultiPointFeature { points }));
        cursor += record_len;
    }
    Ok(records)
}

/// Polyline and Polygon share one layout; only the header's shape type
/// distinguishes them.
fn parse_poly_records(payload: &[u8]) -> Result<Vec<Geometry>> {
    let mut records = Vec::new();
    let mut cursor = 0;
    while cursor < payload.len() {
        take_record(payload, cursor, POLY_FIXED_LEN)?;
        let num_parts = LittleEndian::read_u32(&payload[cursor + 44..cursor + 48]) as usize;
        let num_points = LittleEndian::read_u32(&payload[cursor + 48..cursor + 52]) as usize;

        let record_len = POLY_FIXED_LEN + num_parts * 4 + num_points * POINT_PAIR_LEN;
        let record = take_record(payload, cursor, record_len)?;
        trace!(
            "Poly record at byte {}: {} parts, {} points",
            cursor,
            num_parts,
            num_points
        );

        let part_starts: Vec<usize> = (0..num_parts)
            .map(|p| {
                let at = POLY_FIXED_LEN + p * 4;
                LittleEndian::read_u32(&record[at..at + 4]) as usize
            })
            .collect();

        let points_at = POLY_FIXED_LEN + num_parts * 4;
        let points: Vec<Point> = (0..num_points)
            .map(|i| read_point(&record[points_at + i * POINT_PAIR_LEN..][..POINT_PAIR_LEN]))
            .collect();

        let part_ranges = split_parts(part_starts, num_points);
        records.push(Geometry::Poly(PolyFeature::new(points, part_ranges)));
        cursor += record_len;
    }
    Ok(records)
}

/// Turns the on-disk part start indices into index ranges over the flat
/// point array.
///
/// A single-part record takes the whole array. Otherwise a terminal
/// sentinel of `num_points` is appended so that part `i` spans
/// `[start[i], start[i+1])` and the final part runs to the end of the
/// array. Ring closure and winding order are not validated here; parts
/// pass through exactly as stored.
fn split_parts(mut starts: Vec<usize>, num_points: usize) -> Vec<Range<usize>> {
    if starts.len() == 1 {
        return vec![0..num_points];
    }
    starts.push(num_points);
    starts.windows(2).map(|pair| pair[0]..pair[1]).collect()
}
