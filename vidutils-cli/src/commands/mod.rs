//! Command implementations for the CLI.
//!
//! Each submodule maps one subcommand's parsed arguments onto a core
//! library call and prints its result.

pub mod hlsify;
pub mod inspect;
pub mod transform;
