//! Terminal front end for the movie catalog.
//!
//! `App` is the view controller: it renders one table row per movie, opens
//! add/edit dialogs, and rebuilds the whole table after every change.
//! `run_app` drives it from crossterm key events.

pub mod app;
pub mod config;
pub mod form;
pub mod logging;
pub mod table;
pub mod terminal;
mod ui;

pub use app::{App, Modal};
pub use config::Cli;
pub use form::{Field, MovieForm};
pub use logging::init_logger;
pub use table::{MovieRow, MovieTable};
pub use terminal::run_app;
