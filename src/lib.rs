pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod tui;
pub mod ui;

pub use error::{AppError, Result};
