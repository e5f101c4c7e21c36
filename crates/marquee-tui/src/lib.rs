//! marquee-tui: Terminal UI for searching movies and managing nominations.

pub mod app;
pub mod state;
pub mod ui;
mod worker;

pub use app::run;
pub use state::{AppMode, AppState};
