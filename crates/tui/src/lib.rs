//! Terminal frontend for the five-level rating widget.
//!
//! This crate plays the role of the host page: it renders the five icons
//! and the form's output field, drives selection from keyboard input, and
//! serializes the form value on submission. The widget itself lives in
//! `rating-widget` and knows nothing about the terminal.

mod config;
mod event;
mod input;
pub mod logging;
mod message;
mod presentation;
mod state;

use anyhow::Result;

pub use config::CliConfig;

use crate::event::EventLoop;
use crate::presentation::terminal;

/// Run the rating page until the user quits.
///
/// Owns terminal setup and teardown; the alternate screen is restored even
/// when the event loop fails.
pub async fn run(config: CliConfig) -> Result<()> {
    let mut tui = terminal::init()?;
    let result = EventLoop::new(config).run(&mut tui).await;
    terminal::restore()?;
    result
}
