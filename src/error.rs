//! Error handling for DriveBC processing operations.
//!
//! Provides error types with context for API access, CSV handling,
//! coordinate parsing, and schema validation failures.

use crate::models::GeometryKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriveBcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Events API returned status {status} for {url}")]
    ApiStatus { status: u16, url: String },

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Malformed {kind} coordinates: {reason}")]
    CoordinateParse { kind: GeometryKind, reason: String },

    #[error("Unknown geography type: '{tag}'")]
    UnknownGeometryKind { tag: String },

    #[error("Schema mismatch in {path}: missing required columns: {missing}")]
    SchemaMismatch { path: String, missing: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DriveBcError {
    /// Create a coordinate parse error with context
    pub fn coordinate_parse(kind: GeometryKind, reason: impl Into<String>) -> Self {
        Self::CoordinateParse {
            kind,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Per-row errors are recoverable inside a batch; everything else aborts it.
    pub fn is_row_local(&self) -> bool {
        matches!(
            self,
            Self::CoordinateParse { .. } | Self::UnknownGeometryKind { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DriveBcError>;
