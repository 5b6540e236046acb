//! Logging utilities.
//!
//! Centralizes logger initialization for hosts. The engine itself only uses
//! the `log` facade, so a host with its own logger can skip this entirely.

mod init;

pub use init::{LoggingConfig, init_logging};
