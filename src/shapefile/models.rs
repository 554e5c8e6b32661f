//! Data structures representing shapefile format components

use std::fmt;
use std::ops::Range;

use super::error::{Result, ShapefileError};

/// Magic number at the start of every main and index file, big-endian.
pub const FILE_CODE: u32 = 9994;

/// The geometry kind declared once in the main header and shared by every
/// record in the file.
///
/// All fourteen codes defined by the format are recognized, but only the
/// two-dimensional kinds (`Null`, `Point`, `Polyline`, `Polygon`,
/// `MultiPoint`) have record decoders. The Z/M variants and `MultiPatch`
/// decode to [`ShapefileError::UnsupportedShapeType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Null = 0,
    Point = 1,
    Polyline = 3,
    Polygon = 5,
    MultiPoint = 8,
    PointZ = 11,
    PolylineZ = 13,
    PolygonZ = 15,
    MultiPointZ = 18,
    PointM = 21,
    PolylineM = 23,
    PolygonM = 25,
    MultiPointM = 28,
    MultiPatch = 31,
}

impl TryFrom<u32> for ShapeType {
    type Error = ShapefileError;
    fn try_from(code: u32) -> Result<Self> {
        match code {
            0 => Ok(Self::Null),
            1 => Ok(Self::Point),
            3 => Ok(Self::Polyline),
            5 => Ok(Self::Polygon),
            8 => Ok(Self::MultiPoint),
            11 => Ok(Self::PointZ),
            13 => Ok(Self::PolylineZ),
            15 => Ok(Self::PolygonZ),
            18 => Ok(Self::MultiPointZ),
            21 => Ok(Self::PointM),
            23 => Ok(Self::PolylineM),
            25 => Ok(Self::PolygonM),
            28 => Ok(Self::MultiPointM),
            31 => Ok(Self::MultiPatch),
            other => Err(ShapefileError::UnknownShapeType(other)),
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Bounding extent from the main header: X/Y plus the Z and M ranges the
/// format reserves even for two-dimensional files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    pub zmin: f64,
    pub zmax: f64,
    pub mmin: f64,
    pub mmax: f64,
}

/// Parsed 100-byte main-file header.
///
/// `file_length` is measured in 16-bit words and includes the header itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    pub file_code: u32,
    pub file_length: u32,
    pub version: u32,
    pub shape_type: ShapeType,
    pub bbox: BoundingBox,
}

impl Header {
    /// Number of record payload bytes following the header,
    /// `file_length * 2 - 100`.
    pub fn payload_len(&self) -> usize {
        self.file_length as usize * 2 - super::header::HEADER_LEN
    }
}

/// A single X/Y coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An ordered set of points from one MultiPoint record, in on-disk order.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPointFeature {
    pub points: Vec<Point>,
}

/// A Polyline or Polygon record: a flat point array plus the index ranges
/// that carve it into parts (sub-paths for polylines, rings for polygons).
///
/// Parts are stored as ranges into the shared array rather than per-part
/// vectors, so splitting a record into parts never re-allocates points.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFeature {
    points: Vec<Point>,
    part_ranges: Vec<Range<usize>>,
}

impl PolyFeature {
    pub(crate) fn new(points: Vec<Point>, part_ranges: Vec<Range<usize>>) -> Self {
        Self {
            points,
            part_ranges,
        }
    }

    /// The flat point array, all parts concatenated in on-disk order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of parts in this record.
    pub fn num_parts(&self) -> usize {
        self.part_ranges.len()
    }

    /// The points of part `i`, or `None` if `i` is out of range or the
    /// on-disk part index array pointed outside the point array.
    pub fn part(&self, i: usize) -> Option<&[Point]> {
        self.points.get(self.part_ranges.get(i)?.clone())
    }

    /// Iterates over the parts in on-disk order, skipping any whose on-disk
    /// index range falls outside the point array.
    pub fn parts(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.part_ranges
            .iter()
            .filter_map(|r| self.points.get(r.clone()))
    }
}

/// One decoded record, tagged by the file's shape type.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Placeholder for a Null record; carries no coordinates.
    Null,
    Point(Point),
    MultiPoint(MultiPointFeature),
    /// Shared by Polyline and Polygon files; the distinction lives in the
    /// collection's shape type.
    Poly(PolyFeature),
}

/// The ordered record sequence of one main file, all of a single shape type.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    pub shape_type: ShapeType,
    pub records: Vec<Geometry>,
}

impl GeometryCollection {
    /// Number of records in the file.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
        self.records.iter()
    }
}

/// One index-file entry locating a record in the main file.
///
/// Both fields are big-endian 16-bit word counts on disk: `offset` is
/// measured from the start of the main file, `content_length` covers the
/// record content after its 8-byte record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub offset: u32,
    pub content_length: u32,
}

impl IndexEntry {
    /// Record offset in bytes, ready to seek the main file with.
    pub fn byte_offset(&self) -> u64 {
        self.offset as u64 * 2
    }

    /// Record content length in bytes.
    pub fn byte_len(&self) -> u64 {
        self.content_length as u64 * 2
    }
}
