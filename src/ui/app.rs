//! Viewer state: the text being scrolled and the scrollbar that follows it

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::info;

use super::track_layout::{TrackAreas, TrackLayout};
use crate::config::{Config, UiConfig};
use crate::constants::TRACK_CLASS;
use crate::dom::{Document, NodeId};
use crate::logger::Logger;
use crate::scrollbar::{ScrollbarThumb, TrackDirection};

/// Lines shown when no file is given
pub fn sample_lines() -> Vec<String> {
    (1..=200)
        .map(|n| format!("{n:>4} {}", "scroll me ".repeat(n % 24 + 1)))
        .collect()
}

/// A track element together with the thumb inside it
struct Track {
    element: NodeId,
    thumb: ScrollbarThumb,
}

impl Track {
    fn new(document: &mut Document, root: NodeId, config: &Config, direction: TrackDirection) -> Result<Self> {
        let element = document.create_element("div");
        document.set_class_name(element, &format!("{TRACK_CLASS} {TRACK_CLASS}-{direction}"))?;
        document.append_child(root, element)?;

        let thumb = config.thumb.build(document, direction)?;
        thumb.attach_to(document, element)?;

        Ok(Self { element, thumb })
    }
}

/// Scrollable text viewer acting as the scrollbar controller
pub struct App {
    pub lines: Vec<String>,
    pub scroll_x: usize,
    pub scroll_y: usize,
    pub should_quit: bool,
    pub logger: Logger,
    pub ui: UiConfig,
    document: Document,
    root: NodeId,
    vertical: Track,
    horizontal: Track,
    viewport: (u16, u16),
}

impl App {
    pub fn new(lines: Vec<String>, config: &Config, logger: Logger) -> Result<Self> {
        let mut document = Document::new();
        let root = document.create_element("div");
        document.set_class_name(root, "scrollbar")?;

        let vertical = Track::new(&mut document, root, config, TrackDirection::Vertical)
            .context("Failed to build vertical track")?;
        let horizontal = Track::new(&mut document, root, config, TrackDirection::Horizontal)
            .context("Failed to build horizontal track")?;

        Ok(Self {
            lines,
            scroll_x: 0,
            scroll_y: 0,
            should_quit: false,
            logger,
            ui: config.ui.clone(),
            document,
            root,
            vertical,
            horizontal,
            viewport: (0, 0),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn thumb(&self, direction: TrackDirection) -> &ScrollbarThumb {
        match direction {
            TrackDirection::Horizontal => &self.horizontal.thumb,
            TrackDirection::Vertical => &self.vertical.thumb,
        }
    }

    pub fn track_element(&self, direction: TrackDirection) -> NodeId {
        match direction {
            TrackDirection::Horizontal => self.horizontal.element,
            TrackDirection::Vertical => self.vertical.element,
        }
    }

    /// Width of the widest line in columns
    pub fn content_width(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
    }

    pub fn content_height(&self) -> usize {
        self.lines.len()
    }

    pub fn max_scroll_x(&self) -> usize {
        self.content_width().saturating_sub(usize::from(self.viewport.0))
    }

    pub fn max_scroll_y(&self) -> usize {
        self.content_height().saturating_sub(usize::from(self.viewport.1))
    }

    /// Split `area` into viewport and tracks, and remember the viewport size
    pub fn layout(&mut self, area: ratatui::layout::Rect) -> TrackAreas {
        let areas = TrackLayout::split(area, self.content_width(), self.content_height());
        self.viewport = (areas.content.width, areas.content.height);
        self.clamp_scroll();
        areas
    }

    /// Push the current scroll state to the thumbs of the visible tracks.
    ///
    /// Thumbs are only updated while their axis actually overflows.
    pub fn sync_thumbs(&mut self, areas: &TrackAreas) -> Result<()> {
        if areas.vertical.is_some() {
            let cell = self.ui.cell_height;
            let page = self.content_height() as f64 * cell;
            self.vertical.thumb.update(
                &mut self.document,
                self.scroll_y as f64 * cell,
                f64::from(areas.content.height) * cell,
                page,
            )?;
        }

        if areas.horizontal.is_some() {
            let cell = self.ui.cell_width;
            let page = self.content_width() as f64 * cell;
            self.horizontal.thumb.update(
                &mut self.document,
                self.scroll_x as f64 * cell,
                f64::from(areas.content.width) * cell,
                page,
            )?;
        }

        Ok(())
    }

    pub fn scroll_by(&mut self, dx: isize, dy: isize) {
        self.scroll_x = self.scroll_x.saturating_add_signed(dx);
        self.scroll_y = self.scroll_y.saturating_add_signed(dy);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        self.scroll_x = self.scroll_x.min(self.max_scroll_x());
        self.scroll_y = self.scroll_y.min(self.max_scroll_y());
    }

    /// Handle a key press, returns true when the view changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let page = isize::try_from(self.viewport.1.max(1)).unwrap_or(1);
        let before = (self.scroll_x, self.scroll_y);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
                return false;
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.scroll_by(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.scroll_by(-1, 0),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(0, page),
            KeyCode::PageUp => self.scroll_by(0, -page),
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll_x = 0;
                self.scroll_y = 0;
            }
            KeyCode::End | KeyCode::Char('G') => self.scroll_y = self.max_scroll_y(),
            _ => return false,
        }

        (self.scroll_x, self.scroll_y) != before
    }
}
