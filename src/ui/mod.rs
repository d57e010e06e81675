//! Terminal rendering of scrollbar thumbs and the demo viewer

pub mod app;
pub mod renderer;
pub mod track_layout;
pub mod widget;

pub use app::App;
pub use renderer::run_app;
pub use track_layout::{TrackAreas, TrackLayout};
pub use widget::{thumb_cells, ThumbWidget};
