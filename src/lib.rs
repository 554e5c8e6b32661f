//! # shapefile-reader
//!
//! A reader for ESRI shapefile geometry (.shp) and companion index (.shx)
//! files. Decodes the 100-byte main header and the two-dimensional shape
//! kinds (Point, MultiPoint, Polyline, Polygon, Null placeholders); Z/M
//! variants and MultiPatch are recognized but their geometry is not decoded.
//!
//! **Note:** the dBASE attribute table (.dbf) that usually accompanies a
//! shapefile is out of scope; pair this crate with a dBASE reader for
//! feature attributes.
pub mod shapefile;

// Re-export the main types for convenience
pub use shapefile::{
    error::{Result, ShapefileError},
    models::{
        BoundingBox, Geometry, GeometryCollection, Header, IndexEntry, MultiPointFeature, Point,
        PolyFeature, ShapeType,
    },
    Shapefile, ShapefileIndex,
};
