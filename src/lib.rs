//! l2met - Metrics relay
//!
//! Configuration resolution for the l2met process: merges command-line
//! flags, environment fallbacks, and an environment-supplied connection
//! URL into one immutable settings object read by the rest of the
//! application for the process lifetime.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod observability;

pub use config::{Cli, Config};
pub use error::{Error, Result};
