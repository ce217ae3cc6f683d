//! Command handlers.
//!
//! Each handler receives the composed probe and owns its output formatting.

pub mod env;
pub mod list;
