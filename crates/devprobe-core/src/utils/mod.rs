//! Small helpers shared by the domain types and adapters.

pub mod format;
