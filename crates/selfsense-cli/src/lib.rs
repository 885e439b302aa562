//! selfsense-cli library root.
//!
//! Re-exports internal modules so that integration tests can exercise the
//! argument parser and the commands directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod state;
