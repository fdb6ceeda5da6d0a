//! # Runtime Module
//!
//! Everything that talks to, or reads output from, the container runtime.
//!
//! - [`docker`] - spawns the runtime CLI for availability checks and listings
//! - [`record`] - turns listing rows into [`Container`] values

pub mod docker;
pub mod record;

pub use docker::{ContainerRuntime, DOCKER_BINARY};
pub use record::{parse_listing, parse_record, Container, ParsedListing, RejectedLine};
