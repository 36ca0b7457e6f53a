// LogTally - core/mod.rs
//
// Core analysis layer: line materialisation and read-only statistics
// queries. The only filesystem access in the crate is source::read_log.

pub mod extract;
pub mod model;
pub mod source;
pub mod stats;
