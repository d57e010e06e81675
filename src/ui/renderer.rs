//! Main UI rendering and event loop

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    widgets::Paragraph,
    Frame, Terminal,
};

use super::app::App;
use super::track_layout::TrackAreas;
use super::widget::ThumbWidget;
use crate::scrollbar::TrackDirection;

/// Run the viewer until the user quits
pub fn run_app(mut app: App) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Viewer started with {} lines", app.lines.len());

    // Main application loop
    let res = run_ui(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let size = terminal.size()?;
        let areas = app.layout(Rect::new(0, 0, size.width, size.height));
        app.sync_thumbs(&areas)?;

        terminal.draw(|f| render_ui(f, app, &areas))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) {
                        debug!("Scrolled to ({}, {})", app.scroll_x, app.scroll_y);
                    }
                }
                Event::Resize(width, height) => {
                    debug!("Terminal resized to {width}x{height}");
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the viewport and any visible tracks
fn render_ui(f: &mut Frame, app: &App, areas: &TrackAreas) {
    let scroll = (
        u16::try_from(app.scroll_y).unwrap_or(u16::MAX),
        u16::try_from(app.scroll_x).unwrap_or(u16::MAX),
    );
    let text = app.lines.join("\n");
    f.render_widget(Paragraph::new(text).scroll(scroll), areas.content);

    if let Some(area) = areas.vertical {
        let widget = ThumbWidget::new(app.thumb(TrackDirection::Vertical), app.ui.cell_height)
            .thumb_symbol(&app.ui.thumb_symbol)
            .track_symbol(&app.ui.track_symbol);
        f.render_widget(widget, area);
    }

    if let Some(area) = areas.horizontal {
        let widget = ThumbWidget::new(app.thumb(TrackDirection::Horizontal), app.ui.cell_width)
            .thumb_symbol(&app.ui.thumb_symbol);
        f.render_widget(widget, area);
    }
}

