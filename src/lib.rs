//! Whale - pick a container, then act on it
//!
//! This library provides the listing parser, the generic picker state
//! machine, frame rendering, and the actions that the `whale` binary
//! strings together.

pub mod action;
pub mod error;
pub mod runtime;
pub mod ui;

pub use error::{Result, WhaleError};
