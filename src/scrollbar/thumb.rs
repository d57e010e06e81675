//! Scrollbar thumb element
//!
//! [`ScrollbarThumb`] owns one element in a [`Document`]. The owning
//! scrollbar attaches it to a track, calls [`ScrollbarThumb::update`]
//! whenever the scroll position or measured sizes change, and finally hands
//! it to [`ScrollbarThumb::destroy`].

use log::{debug, trace};

use super::direction::TrackDirection;
use super::geometry::{Offsets, ThumbGeometry, ThumbLayout};
use crate::constants::{HEIGHT_PROPERTY, THUMB_CLASS, THUMB_TAG, TRANSFORM_PROPERTY, WIDTH_PROPERTY};
use crate::dom::{px, Document, NodeId, Style};
use crate::error::Result;

/// The draggable indicator inside a scrollbar track
#[derive(Debug)]
pub struct ScrollbarThumb {
    element: NodeId,
    layout: ThumbLayout,
    geometry: ThumbGeometry,
}

impl ScrollbarThumb {
    /// Create the thumb and its element.
    ///
    /// The element gets the classes `scrollbar-thumb` and
    /// `scrollbar-thumb-<x|y>` and starts detached.
    pub fn new(document: &mut Document, direction: TrackDirection, min_size: f64, offsets: Offsets) -> Result<Self> {
        let element = document.create_element(THUMB_TAG);
        document.set_class_name(element, &thumb_class_name(direction))?;

        Ok(Self {
            element,
            layout: ThumbLayout::new(direction, min_size, offsets),
            geometry: ThumbGeometry::default(),
        })
    }

    /// Thumb with no size floor and no insets
    pub fn with_defaults(document: &mut Document, direction: TrackDirection) -> Result<Self> {
        Self::new(document, direction, 0.0, Offsets::default())
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn direction(&self) -> TrackDirection {
        self.layout.direction()
    }

    pub fn layout(&self) -> &ThumbLayout {
        &self.layout
    }

    pub fn geometry(&self) -> ThumbGeometry {
        self.geometry
    }

    pub fn real_size(&self) -> f64 {
        self.geometry.real_size
    }

    pub fn display_size(&self) -> f64 {
        self.geometry.display_size
    }

    pub fn offset(&self) -> f64 {
        self.geometry.offset
    }

    /// Insert the element as the last child of `track`, moving it if it was
    /// attached elsewhere
    pub fn attach_to(&self, document: &mut Document, track: NodeId) -> Result<()> {
        trace!("Attaching {} thumb {} to {}", self.direction(), self.element, track);
        document.append_child(track, self.element)
    }

    /// Recompute the geometry and write it to the element.
    ///
    /// Degenerate sizes are not rejected; their NaN or infinite results are
    /// written as they are. The only error is an element that no longer
    /// exists in `document`.
    pub fn update(
        &mut self,
        document: &mut Document,
        scroll_offset: f64,
        container_size: f64,
        page_size: f64,
    ) -> Result<()> {
        self.measure(scroll_offset, container_size, page_size);
        document.set_style(self.element, &self.style())
    }

    /// Recompute the geometry without touching the element
    pub fn measure(&mut self, scroll_offset: f64, container_size: f64, page_size: f64) -> ThumbGeometry {
        self.geometry = self.layout.measure(scroll_offset, container_size, page_size);

        if !self.geometry.is_finite() {
            debug!(
                "Degenerate {} thumb geometry {:?} (scroll_offset={}, container_size={}, page_size={})",
                self.direction(),
                self.geometry,
                scroll_offset,
                container_size,
                page_size
            );
        }

        self.geometry
    }

    /// Style batch for the current geometry
    pub fn style(&self) -> Style {
        let size = px(self.geometry.display_size);
        let offset = px(self.geometry.offset);

        match self.direction() {
            TrackDirection::Horizontal => Style::new()
                .with(WIDTH_PROPERTY, size)
                .with(TRANSFORM_PROPERTY, format!("translate3d({offset}, 0, 0)")),
            TrackDirection::Vertical => Style::new()
                .with(HEIGHT_PROPERTY, size)
                .with(TRANSFORM_PROPERTY, format!("translate3d(0, {offset}, 0)")),
        }
    }

    /// Remove the element, and anything below it, from the document
    pub fn destroy(self, document: &mut Document) -> Result<()> {
        trace!("Destroying {} thumb {}", self.direction(), self.element);
        document.remove(self.element)
    }
}

/// Class names for a thumb element on the given axis
pub fn thumb_class_name(direction: TrackDirection) -> String {
    format!("{THUMB_CLASS} {THUMB_CLASS}-{direction}")
}
