//! CLI command implementations
//!
//! Each submodule implements one group of CLI commands.

pub mod bench;
pub mod calibrate;
pub mod sample;
