//! scrollthumb - scrollbar thumb geometry and styling
//!
//! This library computes the size and position of a scrollbar thumb from a
//! scroll offset, a container size and a content size, and applies the
//! result as inline style to an element it owns. A ratatui widget paints the
//! same geometry into a terminal.
//!
//! # Modules
//!
//! * [`scrollbar`] - Thumb geometry and the thumb element
//! * [`dom`] - Element tree and style batches the thumb writes to
//! * [`config`] - Configuration loading and validation
//! * [`logger`] - Logging backend
//! * [`ui`] - Terminal rendering and the demo viewer

/// Configuration module for managing application settings
pub mod config;

/// Class names, style properties and default values
pub mod constants;

/// Element tree and style batches
pub mod dom;

/// Error types
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Thumb geometry and the thumb element
pub mod scrollbar;

/// Terminal user interface components and rendering
pub mod ui;

pub use error::ScrollbarError;
pub use scrollbar::{Offsets, ScrollbarThumb, ThumbGeometry, ThumbLayout, TrackDirection};
