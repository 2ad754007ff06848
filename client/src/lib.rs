#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Read-only query client for the Congress.gov v3 API.
//!
//! Every exposed operation is derived from one row of the static resource
//! [`catalog`]: the builder in [`query`] turns a descriptor plus caller
//! arguments into a hierarchical path and query parameters, and the
//! dispatcher in [`client`] issues exactly one GET and normalizes any
//! failure into an [`ErrorEnvelope`]. The typed per-resource entry points
//! live in [`operations`].

pub mod catalog;
pub mod client;
pub mod config;
pub mod operations;
pub mod query;

pub use client::{CongressClient, ErrorEnvelope, QueryResult};
pub use config::{Config, ConfigError};
