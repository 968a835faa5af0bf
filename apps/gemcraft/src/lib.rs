//! # gemcraft
//!
//! Library half of the gemcraft binary: CLI definition, command
//! implementations and configuration loading. `main.rs` wires these to
//! logging and the process exit code.

pub mod cli;
pub mod config;
