//! devprobe CLI library.
//!
//! Parsing, handlers and error mapping live here so they can be tested
//! without spawning the binary. `main.rs` is the composition root.

#![deny(unsafe_code)]

pub mod bootstrap;
mod commands;
pub mod error;
pub mod handlers;
mod parser;
pub mod report;

pub use bootstrap::bootstrap;
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
