//! Integration tests for the processor module
//!
//! Tests splitting and batch processing against small playback logs
//! written into temporary directories.

pub mod routing;
