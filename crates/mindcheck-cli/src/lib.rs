//! mindcheck-cli library root.
//!
//! Re-exports the CLI modules so integration tests can drive commands and
//! config handling without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
