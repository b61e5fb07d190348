//! DriveBC Processor Library
//!
//! A Rust library for turning DriveBC Open511 road-event data into GeoJSON
//! map layers.
//!
//! This library provides tools for:
//! - Querying the public DriveBC Open511 events API
//! - Flattening nested event JSON into a fixed-schema CSV batch
//! - Parsing textual coordinate columns into point and line geometries
//! - Accumulating typed feature collections with dense per-kind sequence numbers
//! - Writing GeoJSON point and line layers for map production
//! - Batch-level error recovery with a full skip report

pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod fetch;
pub mod models;
pub mod writer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use converter::{ConversionResult, EventConverter};
pub use error::{DriveBcError, Result};
pub use models::{
    EventAttributes, EventGeometry, FeatureCollections, FeatureRecord, GeometryKind,
    UnknownGeometryPolicy,
};
