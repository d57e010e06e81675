//! Track placement for scrollable content
//!
//! Splits an area into the content viewport and the tracks the content
//! needs: a vertical track in the rightmost column and a horizontal track in
//! the bottom row.

use ratatui::layout::Rect;

/// Areas produced by [`TrackLayout::split`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackAreas {
    pub content: Rect,
    pub vertical: Option<Rect>,
    pub horizontal: Option<Rect>,
}

/// Decides which tracks are needed and where they go
pub struct TrackLayout;

impl TrackLayout {
    /// Check if a scrollbar is needed based on content size and available space.
    pub fn needs_scrollbar(content_len: usize, available: u16) -> bool {
        content_len > usize::from(available)
    }

    /// Calculate layout areas for content and tracks.
    ///
    /// A horizontal track takes a row from the viewport, which can in turn
    /// make a vertical track necessary, and the other way around.
    pub fn split(area: Rect, content_width: usize, content_height: usize) -> TrackAreas {
        let mut needs_vertical = Self::needs_scrollbar(content_height, area.height);
        let mut needs_horizontal = Self::needs_scrollbar(content_width, area.width);

        if needs_vertical && !needs_horizontal {
            needs_horizontal = Self::needs_scrollbar(content_width, area.width.saturating_sub(1));
        }
        if needs_horizontal && !needs_vertical {
            needs_vertical = Self::needs_scrollbar(content_height, area.height.saturating_sub(1));
        }

        let content = Rect {
            x: area.x,
            y: area.y,
            width: area.width.saturating_sub(u16::from(needs_vertical)),
            height: area.height.saturating_sub(u16::from(needs_horizontal)),
        };

        let vertical = needs_vertical.then(|| Rect {
            x: area.x + area.width.saturating_sub(1), // Rightmost column
            y: area.y,
            width: 1,
            height: content.height,
        });

        let horizontal = needs_horizontal.then(|| Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1), // Bottom row
            width: content.width,
            height: 1,
        });

        TrackAreas {
            content,
            vertical,
            horizontal,
        }
    }
}
