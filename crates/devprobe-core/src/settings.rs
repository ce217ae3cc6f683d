//! Probe settings and validation.
//!
//! These are pure configuration types with no infrastructure dependencies.
//! Adapters read them; the CLI fills them from flags and environment.

use serde::{Deserialize, Serialize};

use crate::domain::{Architecture, Platform};

/// Default share of physical memory treated as the GPU working set on
/// unified-memory hosts.
pub const DEFAULT_GPU_MEMORY_FRACTION: f64 = 0.75;

/// Probe settings structure.
///
/// All fields are optional; `None` means "detect from the host" or "use the
/// default".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeSettings {
    /// Declared host architecture, overriding the compile target.
    pub architecture: Option<Architecture>,

    /// Declared host platform, overriding the compile target.
    pub platform: Option<Platform>,

    /// Share of physical memory reported as the recommended working set when
    /// the platform offers no native figure. Must be in `(0, 1]`.
    pub gpu_memory_fraction: Option<f64>,
}

impl ProbeSettings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            architecture: None,
            platform: None,
            gpu_memory_fraction: Some(DEFAULT_GPU_MEMORY_FRACTION),
        }
    }

    /// Get the effective architecture (declared, else compile target).
    pub fn effective_architecture(&self) -> Architecture {
        self.architecture.unwrap_or_else(Architecture::current)
    }

    /// Get the effective platform (declared, else compile target).
    pub fn effective_platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// Get the effective working-set fraction (with default fallback).
    #[must_use]
    pub const fn effective_gpu_memory_fraction(&self) -> f64 {
        match self.gpu_memory_fraction {
            Some(fraction) => fraction,
            None => DEFAULT_GPU_MEMORY_FRACTION,
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("GPU memory fraction must be in (0, 1], got {0}")]
    InvalidGpuMemoryFraction(f64),
}

/// Validate settings values.
pub fn validate_settings(settings: &ProbeSettings) -> Result<(), SettingsError> {
    if let Some(fraction) = settings.gpu_memory_fraction {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(SettingsError::InvalidGpuMemoryFraction(fraction));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ProbeSettings::with_defaults();
        assert_eq!(settings.architecture, None);
        assert_eq!(settings.platform, None);
        assert_eq!(settings.gpu_memory_fraction, Some(DEFAULT_GPU_MEMORY_FRACTION));
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_effective_values_prefer_declared() {
        let settings = ProbeSettings {
            architecture: Some(Architecture::Amd64),
            platform: Some(Platform::Darwin),
            gpu_memory_fraction: None,
        };
        assert_eq!(settings.effective_architecture(), Architecture::Amd64);
        assert_eq!(settings.effective_platform(), Platform::Darwin);
        assert!((settings.effective_gpu_memory_fraction() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effective_values_fall_back_to_host() {
        let settings = ProbeSettings::default();
        assert_eq!(settings.effective_architecture(), Architecture::current());
        assert_eq!(settings.effective_platform(), Platform::current());
    }

    #[test]
    fn test_validate_fraction_bounds() {
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let settings = ProbeSettings {
                gpu_memory_fraction: Some(bad),
                ..Default::default()
            };
            assert!(matches!(
                validate_settings(&settings),
                Err(SettingsError::InvalidGpuMemoryFraction(_))
            ));
        }

        let settings = ProbeSettings {
            gpu_memory_fraction: Some(1.0),
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: ProbeSettings =
            serde_json::from_str(r#"{"architecture":"arm64","platform":"darwin"}"#).unwrap();
        assert_eq!(settings.architecture, Some(Architecture::Arm64));
        assert_eq!(settings.platform, Some(Platform::Darwin));
        assert_eq!(settings.gpu_memory_fraction, None);
    }
}
