//! Light My Way CLI library.
//!
//! Subcommand handlers live here so `main.rs` only parses arguments and
//! dispatches.

pub mod commands;
