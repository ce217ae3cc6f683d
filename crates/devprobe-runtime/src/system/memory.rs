//! Host memory queries backed by `sysinfo`.
//!
//! This module implements the runtime side of the `PlatformMemoryPort`
//! contract. Every call builds a fresh `System` and refreshes memory only.

use devprobe_core::ports::{PlatformMemoryPort, PlatformQuery, ProbeError, ProbeResult};
use devprobe_core::{Platform, ProbeSettings};
use sysinfo::System;
use tracing::debug;

/// `PlatformMemoryPort` reading host memory through `sysinfo`.
///
/// `recommended_max_working_set` has no native source here: it is estimated
/// as a fixed share of physical memory, the unified-memory rule of thumb for
/// Apple silicon (about 75% of RAM is usable by the GPU).
#[derive(Debug, Clone, Copy)]
pub struct SysinfoPlatform {
    platform: Platform,
    gpu_memory_fraction: f64,
}

impl SysinfoPlatform {
    pub fn new(settings: &ProbeSettings) -> Self {
        Self {
            platform: settings.effective_platform(),
            gpu_memory_fraction: settings.effective_gpu_memory_fraction(),
        }
    }

    fn snapshot(query: PlatformQuery) -> ProbeResult<System> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(ProbeError::query_failed(
                query,
                "sysinfo does not support this operating system",
            ));
        }

        let mut sys = System::new();
        sys.refresh_memory();
        Ok(sys)
    }
}

impl Default for SysinfoPlatform {
    fn default() -> Self {
        Self::new(&ProbeSettings::with_defaults())
    }
}

impl PlatformMemoryPort for SysinfoPlatform {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn recommended_max_working_set(&self) -> ProbeResult<u64> {
        let total = Self::snapshot(PlatformQuery::RecommendedMaxWorkingSet)?.total_memory();
        let working_set = (total as f64 * self.gpu_memory_fraction) as u64;
        debug!(
            total,
            working_set,
            fraction = self.gpu_memory_fraction,
            "Estimated GPU working set"
        );
        Ok(working_set)
    }

    fn physical_memory(&self) -> ProbeResult<u64> {
        Ok(Self::snapshot(PlatformQuery::PhysicalMemory)?.total_memory())
    }

    fn free_memory(&self) -> ProbeResult<u64> {
        let sys = Self::snapshot(PlatformQuery::FreeMemory)?;
        // available_memory() can read 0 on macOS; derive it from used instead
        let available = match sys.available_memory() {
            0 => sys.total_memory().saturating_sub(sys.used_memory()),
            n => n,
        };
        Ok(available)
    }

    fn free_swap(&self) -> ProbeResult<Option<u64>> {
        if self.platform.has_dynamic_paging() {
            return Ok(None);
        }
        Ok(Some(Self::snapshot(PlatformQuery::FreeSwap)?.free_swap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(platform: Platform, fraction: f64) -> ProbeSettings {
        ProbeSettings {
            platform: Some(platform),
            gpu_memory_fraction: Some(fraction),
            ..ProbeSettings::default()
        }
    }

    #[test]
    fn test_physical_memory_is_reasonable() {
        let total = SysinfoPlatform::default().physical_memory().unwrap();
        // RAM should always be detected and be a reasonable value (> 1GB)
        assert!(total > 1_000_000_000);
    }

    #[test]
    fn test_working_set_is_fraction_of_physical() {
        let port = SysinfoPlatform::new(&settings(Platform::Darwin, 0.5));
        let total = port.physical_memory().unwrap();
        let working_set = port.recommended_max_working_set().unwrap();
        assert!(working_set <= total);
        assert!(working_set >= total / 2 - 1);
    }

    #[test]
    fn test_full_fraction_equals_physical() {
        let port = SysinfoPlatform::new(&settings(Platform::Darwin, 1.0));
        let total = port.physical_memory().unwrap();
        assert_eq!(port.recommended_max_working_set().unwrap(), total);
    }

    #[test]
    fn test_darwin_omits_swap() {
        let port = SysinfoPlatform::new(&settings(Platform::Darwin, 0.75));
        assert_eq!(port.free_swap().unwrap(), None);
    }

    #[test]
    fn test_linux_reports_swap() {
        let port = SysinfoPlatform::new(&settings(Platform::Linux, 0.75));
        assert!(port.free_swap().unwrap().is_some());
    }

    #[test]
    fn test_free_memory_within_total() {
        let port = SysinfoPlatform::default();
        let free = port.free_memory().unwrap();
        let total = port.physical_memory().unwrap();
        // Separate snapshots; allow for the host changing in between
        assert!(free <= total + total / 100);
    }
}
