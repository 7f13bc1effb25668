//! Configuration management for l2met.
//!
//! Combines, in priority order:
//! - Command-line flags (highest priority)
//! - Environment variables
//! - Built-in defaults
//!
//! plus the connection URL read from the environment. It is up to the
//! caller to trigger flag parsing; resolution itself never fails.

mod connection;
mod settings;

pub use connection::parse_connection_url;
pub use settings::{Cli, Config, CONNECTION_URL_VAR};
