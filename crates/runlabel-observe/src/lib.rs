//! Logging setup shared by runlabel binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is
//! left to the binary via [`init_logger`].
mod logger;
pub use logger::*;
