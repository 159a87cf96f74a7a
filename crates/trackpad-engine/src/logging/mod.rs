//! Logging utilities.
//!
//! The engine itself only talks to the `log` facade. This module gives hosts a
//! one-call `env_logger` setup so engine records (clamping, boundary
//! notifications, per-sample traces) show up without extra wiring.

mod init;

pub use env_logger::WriteStyle;
pub use init::{LoggingConfig, init_logging};
