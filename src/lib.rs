//! Folio
//!
//! A single-page personal developer portfolio for the terminal: hero, about
//! with a skills panel filtered by category, projects and contact. The
//! presentation state (light/dark mode and the active skill category) lives
//! in a small presenter that renders a pure view tree, which the terminal UI
//! and the Markdown/JSON exporters consume.

pub mod branding;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod render;
pub mod shortcuts;
pub mod state;
#[cfg(feature = "ratatui")]
pub mod tui;
