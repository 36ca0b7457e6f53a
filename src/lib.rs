// LogTally - lib.rs
//
// Library entry point, exposing the analysis core and utilities for
// integration testing and programmatic use.
//
// The CLI presenter lives in `main.rs` and is not part of the library
// surface.

pub mod core;
pub mod util;
