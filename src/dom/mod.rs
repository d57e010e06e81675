//! Retained element tree the thumb renders into
//!
//! This is the surface a browser DOM would provide: elements with class
//! names and inline style, arranged in a tree and addressed by handle.

pub mod document;
pub mod style;

pub use document::{Document, Element, NodeId};
pub use style::{format_number, px, InlineStyle, Style};
