//! Thumb geometry
//!
//! Pure computation of the thumb's size and position along its track. The
//! inputs are the current scroll offset, the visible container size and the
//! total page (content) size, all in the same pixel units.
//!
//! Nothing here validates its input. A page that is not larger than the
//! container yields NaN or infinite values, which callers either avoid by
//! only updating scrollable content or tolerate downstream.

use serde::{Deserialize, Serialize};

use super::direction::TrackDirection;

/// Insets between the track edges and the usable thumb travel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Offsets {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same inset on all four sides
    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Inset at the start of the axis (left or top)
    pub fn leading(&self, direction: TrackDirection) -> f64 {
        match direction {
            TrackDirection::Horizontal => self.left,
            TrackDirection::Vertical => self.top,
        }
    }

    /// Inset at the end of the axis (right or bottom)
    pub fn trailing(&self, direction: TrackDirection) -> f64 {
        match direction {
            TrackDirection::Horizontal => self.right,
            TrackDirection::Vertical => self.bottom,
        }
    }
}

/// Size and position of the thumb after an update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThumbGeometry {
    /// Size proportional to the visible share of the page, without the floor
    pub real_size: f64,
    /// Size actually rendered, never below the minimum size
    pub display_size: f64,
    /// Distance from the track start to the thumb start
    pub offset: f64,
}

impl ThumbGeometry {
    /// True when every value is a finite number
    pub fn is_finite(&self) -> bool {
        self.real_size.is_finite() && self.display_size.is_finite() && self.offset.is_finite()
    }

    /// End of the thumb along the axis
    pub fn end(&self) -> f64 {
        self.offset + self.display_size
    }
}

/// Fixed parameters of a thumb: axis, size floor and insets.
///
/// The inset sums per axis are computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbLayout {
    direction: TrackDirection,
    min_size: f64,
    offsets: Offsets,
    reduced_x: f64,
    reduced_y: f64,
}

impl ThumbLayout {
    pub fn new(direction: TrackDirection, min_size: f64, offsets: Offsets) -> Self {
        Self {
            direction,
            min_size,
            offsets,
            reduced_x: offsets.left + offsets.right,
            reduced_y: offsets.top + offsets.bottom,
        }
    }

    pub fn direction(&self) -> TrackDirection {
        self.direction
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    /// Track length taken by insets on this layout's axis
    pub fn reduction(&self) -> f64 {
        match self.direction {
            TrackDirection::Horizontal => self.reduced_x,
            TrackDirection::Vertical => self.reduced_y,
        }
    }

    /// Compute the thumb geometry for one scroll state.
    ///
    /// When the size floor inflates the thumb, the travel distance shrinks by
    /// the same amount so a fully scrolled thumb still ends near the track end.
    pub fn measure(&self, scroll_offset: f64, container_size: f64, page_size: f64) -> ThumbGeometry {
        let ratio = scroll_offset / (page_size - container_size);
        let container = container_size - self.reduction();
        let scrolled = ratio * (page_size - container);

        let real_size = (container / page_size).min(1.0) * container;
        let display_size = real_size.max(self.min_size);

        let offset =
            scrolled / page_size * (container + (real_size - display_size)) + self.offsets.leading(self.direction);

        ThumbGeometry {
            real_size,
            display_size,
            offset,
        }
    }
}
