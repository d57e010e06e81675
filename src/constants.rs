//! Constants used throughout the crate
//!
//! This module centralizes class names, style property names, and default
//! values so the thumb, the configuration layer, and the terminal renderer
//! agree on them.

// Element class names
pub const THUMB_CLASS: &str = "scrollbar-thumb";
pub const THUMB_TAG: &str = "div";
pub const TRACK_CLASS: &str = "scrollbar-track";

// Style properties
/// Leading dash asks the style layer to expand vendor prefixes
pub const TRANSFORM_PROPERTY: &str = "-transform";
pub const WIDTH_PROPERTY: &str = "width";
pub const HEIGHT_PROPERTY: &str = "height";
pub const VENDOR_PREFIXES: [&str; 4] = ["webkit", "moz", "ms", "o"];

// Configuration
pub const CONFIG_DIR_NAME: &str = "scrollthumb";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "scrollthumb.toml";
pub const LOG_FILE_NAME: &str = "scrollthumb.log";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Thumb defaults
/// Minimum thumb size in pixels
pub const DEFAULT_THUMB_MIN_SIZE: f64 = 20.0;

// Terminal rendering defaults
/// Width of one terminal cell in pixels
pub const DEFAULT_CELL_WIDTH: f64 = 8.0;
/// Height of one terminal cell in pixels
pub const DEFAULT_CELL_HEIGHT: f64 = 16.0;
pub const DEFAULT_THUMB_SYMBOL: &str = "█";
pub const DEFAULT_TRACK_SYMBOL: &str = "│";
pub const DEFAULT_HORIZONTAL_TRACK_SYMBOL: &str = "─";
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// In-memory log entries kept before the oldest are dropped
pub const MAX_LOG_ENTRIES: usize = 1000;
