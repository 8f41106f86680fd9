//! Application constants for the ATO log splitter
//!
//! Keywords, discard markers, header columns and CLI defaults shared by
//! the parser, the classifier and the command-line driver.

// =============================================================================
// Input Files
// =============================================================================

/// Default directory scanned for playback logs
pub const DEFAULT_INPUT_DIR: &str = "logs";

/// Default root under which category directories are created
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// File name suffix identifying playback logs
pub const DEFAULT_FILE_SUFFIX: &str = ".playback";

// =============================================================================
// Line Grammar
// =============================================================================

/// Subsystem keyword every routed line must contain
pub const SYSTEM_KEYWORD: &str = "ATO";

/// Placeholder the recorder writes for unknown values
pub const SENTINEL_VALUE: &str = "???";

/// Separator between date and time parts in the raw timestamp
pub const RAW_TIMESTAMP_SEPARATOR: char = '_';

/// Replacement producing an ISO-8601 style join
pub const ISO_TIMESTAMP_SEPARATOR: char = 'T';

/// Separator inside the composite third token
pub const COMPOSITE_FIELD_SEPARATOR: char = '.';

/// Minimum whitespace tokens for a line to produce a row
pub const MIN_LINE_TOKENS: usize = 4;

/// Lines starting with this prefix are file banners, not records
pub const VERSION_LINE_PREFIX: &str = "Version";

/// Lines containing any of these markers are dropped before parsing
pub const DISCARD_MARKERS: &[&str] = &["next_route_name", "route_name", "dsp_tdn"];

// =============================================================================
// Output Files
// =============================================================================

/// Header written as the first line of Train and Switch category files
pub const CATEGORY_HEADER: &[&str] = &[
    "Timestamp",
    "Source",
    "System",
    "Component",
    "ID",
    "Action",
    "Attribute",
    "Value",
    "Code",
];

/// Extension of generated category files
pub const OUTPUT_EXTENSION: &str = "csv";

// =============================================================================
// Logging
// =============================================================================

/// Tracing target used when building the default env filter
pub const LOG_TARGET: &str = "ato_log_splitter";
