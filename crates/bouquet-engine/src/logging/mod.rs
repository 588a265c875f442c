//! Logging utilities.
//!
//! Library code only uses the `log` facade; binaries call [`init_logging`]
//! early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
