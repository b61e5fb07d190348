//! Application constants for the DriveBC processor
//!
//! Default values, API endpoints, and the column names shared between the
//! fetch and convert stages.

// =============================================================================
// Events API
// =============================================================================

/// Base URL of the DriveBC Open511 API
pub const EVENTS_API_BASE_URL: &str = "https://api.open511.gov.bc.ca";

/// Default number of records requested from the events endpoint
pub const DEFAULT_RECORD_LIMIT: usize = 500;

/// Largest record limit the Open511 endpoint honors per request
pub const MAX_RECORD_LIMIT: usize = 500;

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with API requests
pub const USER_AGENT: &str = concat!("drivebc-processor/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Default filename for the flattened events CSV
pub const EVENTS_CSV_FILENAME: &str = "events.csv";

/// Output filename for the point feature layer
pub const POINTS_GEOJSON_FILENAME: &str = "points.geojson";

/// Output filename for the line feature layer
pub const LINES_GEOJSON_FILENAME: &str = "lines.geojson";

/// Default output directory for generated layers
pub const DEFAULT_OUTPUT_DIR: &str = "export";

// =============================================================================
// Column Name Constants
// =============================================================================

/// Geometry tag column in the flattened CSV (`Point` or `LineString`)
pub const GEOGRAPHY_TYPE_COLUMN: &str = "geography_type";

/// Textual coordinate column in the flattened CSV
pub const GEOGRAPHY_COORDINATES_COLUMN: &str = "geography_coordinates";

/// Timestamp format used when reporting file ages and fetch times
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
