//! Terminal rendering of a thumb
//!
//! Thumb geometry is measured in pixels; the terminal only has cells. The
//! widget converts the pixel span of the thumb into a cell range along the
//! track and paints it over the track symbols.

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::constants::{DEFAULT_HORIZONTAL_TRACK_SYMBOL, DEFAULT_THUMB_SYMBOL, DEFAULT_TRACK_SYMBOL};
use crate::scrollbar::{ScrollbarThumb, ThumbGeometry, TrackDirection};

/// Paints a track and the thumb it contains.
///
/// The area is the whole track; its length along the thumb's axis maps to
/// the container size the thumb was last updated with.
pub struct ThumbWidget<'a> {
    thumb: &'a ScrollbarThumb,
    cell_size: f64,
    thumb_symbol: &'a str,
    track_symbol: &'a str,
    thumb_style: Style,
    track_style: Style,
}

impl<'a> ThumbWidget<'a> {
    /// Widget with default symbols and a dark gray palette
    pub fn new(thumb: &'a ScrollbarThumb, cell_size: f64) -> Self {
        let track_symbol = if thumb.direction().is_horizontal() {
            DEFAULT_HORIZONTAL_TRACK_SYMBOL
        } else {
            DEFAULT_TRACK_SYMBOL
        };

        Self {
            thumb,
            cell_size,
            thumb_symbol: DEFAULT_THUMB_SYMBOL,
            track_symbol,
            thumb_style: Style::default().fg(Color::Gray),
            track_style: Style::default().fg(Color::DarkGray),
        }
    }

    #[must_use]
    pub fn thumb_symbol(mut self, symbol: &'a str) -> Self {
        self.thumb_symbol = symbol;
        self
    }

    #[must_use]
    pub fn track_symbol(mut self, symbol: &'a str) -> Self {
        self.track_symbol = symbol;
        self
    }

    #[must_use]
    pub fn thumb_style(mut self, style: Style) -> Self {
        self.thumb_style = style;
        self
    }

    #[must_use]
    pub fn track_style(mut self, style: Style) -> Self {
        self.track_style = style;
        self
    }
}

impl Widget for ThumbWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(self.track_symbol).set_style(self.track_style);
                }
            }
        }

        let direction = self.thumb.direction();
        let track_len = match direction {
            TrackDirection::Horizontal => area.width,
            TrackDirection::Vertical => area.height,
        };

        let Some(cells) = thumb_cells(self.thumb.geometry(), self.cell_size, track_len) else {
            return;
        };

        for step in cells {
            let positions: Vec<(u16, u16)> = match direction {
                TrackDirection::Horizontal => (area.top()..area.bottom()).map(|y| (area.x + step, y)).collect(),
                TrackDirection::Vertical => (area.left()..area.right()).map(|x| (x, area.y + step)).collect(),
            };
            for position in positions {
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_symbol(self.thumb_symbol).set_style(self.thumb_style);
                }
            }
        }
    }
}

/// Cells along a track of `track_len` cells covered by the thumb.
///
/// Returns `None` for non-finite geometry, a non-positive cell size, or an
/// empty track. A visible thumb always covers at least one cell.
#[must_use]
pub fn thumb_cells(geometry: ThumbGeometry, cell_size: f64, track_len: u16) -> Option<Range<u16>> {
    if !geometry.is_finite() || !cell_size.is_finite() || cell_size <= 0.0 || track_len == 0 {
        return None;
    }

    let len = f64::from(track_len);
    let start = (geometry.offset / cell_size).floor().clamp(0.0, len) as u16;
    let end = (geometry.end() / cell_size).ceil().clamp(0.0, len) as u16;

    if end > start {
        Some(start..end)
    } else if geometry.display_size > 0.0 {
        let start = start.min(track_len - 1);
        Some(start..start + 1)
    } else {
        None
    }
}
