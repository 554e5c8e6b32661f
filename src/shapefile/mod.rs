//! Core shapefile reader module

pub mod error;
pub mod header;
pub mod index;
pub mod models;
pub mod reader;
pub mod records;

pub use error::{Result, ShapefileError};
pub use index::ShapefileIndex;
pub use reader::Shapefile;
