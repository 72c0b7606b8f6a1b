//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod ghapi;
mod health;
mod metrics;
mod repositories;
pub mod server;
#[cfg(test)]
mod testutils;

pub use errors::{Result, ServerError};
