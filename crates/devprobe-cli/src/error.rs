//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use devprobe_core::{ProbeError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Device discovery failed as a whole.
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// Output could not be written or encoded.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78,    // EX_CONFIG
            Self::Discovery(_) => 71, // EX_OSERR
            Self::Io(_) => 74,        // EX_IOERR
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ProbeError> for CliError {
    fn from(err: ProbeError) -> Self {
        Self::Discovery(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devprobe_core::PlatformQuery;

    #[test]
    fn test_settings_error_maps_to_config() {
        let err: CliError = SettingsError::InvalidGpuMemoryFraction(2.0).into();
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("GPU memory fraction"));
    }

    #[test]
    fn test_probe_error_maps_to_discovery() {
        let err: CliError =
            ProbeError::query_failed(PlatformQuery::PhysicalMemory, "unavailable").into();
        assert_eq!(err.exit_code(), 71);
    }
}
