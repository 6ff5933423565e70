//! cmdtap Core Library
//!
//! Shared functionality for cmdtap components:
//! - Child-process stream multiplexing (live mirroring + per-stream capture)
//! - Line decoration for mirrored output
//! - Tracing bootstrap
//! - Common error types

pub mod error;
pub mod mux;
pub mod style;
pub mod tracing_init;

pub use error::{Error, Result};
pub use mux::{Execution, execute, run, run_with_sink};
pub use style::LineStyle;
