//! Host identity: processor architecture and operating platform.
//!
//! Both are plain enums so that policy code can be driven by a declared
//! value in tests instead of whatever machine happens to run them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a host identity string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseHostError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Host processor architecture family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// 64-bit x86 (`x86_64`).
    Amd64,
    /// 64-bit ARM (`aarch64`).
    Arm64,
    /// Any other architecture.
    Other,
}

impl Architecture {
    /// Architecture this binary was compiled for.
    pub fn current() -> Self {
        Self::from_target_arch(std::env::consts::ARCH)
    }

    /// Map a Rust `target_arch` value. Unrecognised values become `Other`.
    pub fn from_target_arch(arch: &str) -> Self {
        match arch {
            "x86_64" => Self::Amd64,
            "aarch64" => Self::Arm64,
            _ => Self::Other,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = ParseHostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amd64" | "x86_64" | "x64" => Ok(Self::Amd64),
            "arm64" | "aarch64" => Ok(Self::Arm64),
            "other" => Ok(Self::Other),
            _ => Err(ParseHostError {
                kind: "architecture",
                value: s.to_string(),
                expected: "amd64, x86_64, arm64, aarch64, other",
            }),
        }
    }
}

/// Host operating platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS.
    Darwin,
    Linux,
    Windows,
    Other,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_target_os(std::env::consts::OS)
    }

    /// Map a Rust `target_os` value. Unrecognised values become `Other`.
    pub fn from_target_os(os: &str) -> Self {
        match os {
            "macos" => Self::Darwin,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Other => "other",
        }
    }

    /// Whether the compute backends on this platform always see every device.
    ///
    /// Such platforms have no visibility environment variable to set.
    pub const fn exposes_all_devices(self) -> bool {
        matches!(self, Self::Darwin)
    }

    /// Whether the OS pages dynamically instead of reserving a fixed swap area.
    pub const fn has_dynamic_paging(self) -> bool {
        matches!(self, Self::Darwin)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseHostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "darwin" | "macos" => Ok(Self::Darwin),
            "linux" => Ok(Self::Linux),
            "windows" => Ok(Self::Windows),
            "other" => Ok(Self::Other),
            _ => Err(ParseHostError {
                kind: "platform",
                value: s.to_string(),
                expected: "darwin, macos, linux, windows, other",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_from_target_arch() {
        assert_eq!(Architecture::from_target_arch("x86_64"), Architecture::Amd64);
        assert_eq!(Architecture::from_target_arch("aarch64"), Architecture::Arm64);
        assert_eq!(Architecture::from_target_arch("riscv64"), Architecture::Other);
    }

    #[test]
    fn test_architecture_parse_aliases() {
        assert_eq!("AMD64".parse::<Architecture>(), Ok(Architecture::Amd64));
        assert_eq!(" arm64 ".parse::<Architecture>(), Ok(Architecture::Arm64));
        assert_eq!("aarch64".parse::<Architecture>(), Ok(Architecture::Arm64));

        let err = "sparc".parse::<Architecture>().unwrap_err();
        assert!(err.to_string().contains("sparc"));
    }

    #[test]
    fn test_platform_parse_and_display() {
        assert_eq!("macos".parse::<Platform>(), Ok(Platform::Darwin));
        assert_eq!(Platform::Darwin.to_string(), "darwin");
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn test_current_matches_compile_target() {
        #[cfg(target_os = "macos")]
        assert_eq!(Platform::current(), Platform::Darwin);
        #[cfg(target_os = "linux")]
        assert_eq!(Platform::current(), Platform::Linux);
        #[cfg(target_arch = "x86_64")]
        assert_eq!(Architecture::current(), Architecture::Amd64);
        #[cfg(target_arch = "aarch64")]
        assert_eq!(Architecture::current(), Architecture::Arm64);
    }

    #[test]
    fn test_only_darwin_is_visibility_noop() {
        assert!(Platform::Darwin.exposes_all_devices());
        assert!(!Platform::Linux.exposes_all_devices());
        assert!(!Platform::Windows.exposes_all_devices());
    }
}
