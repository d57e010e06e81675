//! Scrollbar thumb: geometry and the element it styles

pub mod direction;
pub mod geometry;
pub mod thumb;

pub use direction::TrackDirection;
pub use geometry::{Offsets, ThumbGeometry, ThumbLayout};
pub use thumb::{thumb_class_name, ScrollbarThumb};
