//! # UI Module
//!
//! The terminal pickers for Whale.
//!
//! ## Components
//!
//! - [`App`] - The container and action picker stages
//! - [`list`] - The generic cursor/selection state machine
//! - [`mod@render`] - Pure frame rendering
//! - [`session`] - Event loop that feeds key presses into a list
//! - [`theme`] / [`config`] - Styles and where they come from
//!
//! ## Flow
//!
//! ```text
//! Choose a container:           Container: web
//!
//!   1f2e3d redis ... cache        Exit
//! > abc123 nginx ... web   ──▶  > Copy container ID
//! ```
//!
//! Each stage is a full-screen redraw without an alternate screen, so the
//! last frame stays visible after the program exits.

pub mod app;
pub mod config;
pub mod list;
pub mod render;
pub mod session;
pub mod theme;

pub use app::App;
pub use config::Config;
pub use list::{ListEvent, ListModel, SessionState};
pub use render::render_list;
pub use theme::{StyleToken, Theme};
