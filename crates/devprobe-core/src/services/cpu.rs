//! CPU fallback enumeration.

use tracing::{debug, warn};

use crate::domain::{CpuDiscovery, DeviceInfo, Library, MemoryInfo, MemoryPolicy};
use crate::ports::{CpuCapabilityPort, PlatformMemoryPort, PlatformQuery, ProbeError, ProbeResult};

/// Id of the CPU pseudo-device.
pub const CPU_DEVICE_ID: &str = "cpu";

/// Query host physical memory and swap.
///
/// A free figure above total is clamped to total. Swap is passed through as
/// reported, including `None` for platforms with dynamic paging.
pub fn cpu_memory(platform: &dyn PlatformMemoryPort) -> ProbeResult<MemoryInfo> {
    let total = platform.physical_memory()?;
    if total == 0 {
        return Err(ProbeError::UnusableValue {
            query: PlatformQuery::PhysicalMemory,
            value: total,
        });
    }

    let mut free = platform.free_memory()?;
    if free > total {
        debug!(free, total, "Free memory above total, clamping");
        free = total;
    }

    let free_swap = platform.free_swap()?;

    Ok(MemoryInfo::new(total, free).with_free_swap(free_swap))
}

/// Builds the single CPU-class descriptor.
pub struct CpuEnumerator<'a> {
    platform: &'a dyn PlatformMemoryPort,
    capability: &'a dyn CpuCapabilityPort,
}

impl<'a> CpuEnumerator<'a> {
    pub fn new(
        platform: &'a dyn PlatformMemoryPort,
        capability: &'a dyn CpuCapabilityPort,
    ) -> Self {
        Self {
            platform,
            capability,
        }
    }

    /// Enumerate the CPU fallback device.
    ///
    /// Always yields one descriptor. On a memory query failure the descriptor
    /// has zeroed memory and the error is returned alongside it.
    pub fn discover_cpu(&self) -> CpuDiscovery {
        let variant = self.capability.capability();

        let built = cpu_memory(self.platform).and_then(|memory| {
            DeviceInfo::new(
                CPU_DEVICE_ID,
                Library::Cpu,
                variant.clone(),
                memory,
                MemoryPolicy::Live,
            )
            .map_err(ProbeError::from)
        });

        match built {
            Ok(device) => {
                debug!(
                    variant = device.variant(),
                    total = device.total_memory(),
                    free = device.free_memory(),
                    "Discovered CPU device"
                );
                CpuDiscovery::new(device, None)
            }
            Err(err) => {
                warn!(error = %err, "CPU memory query failed");
                let device = DeviceInfo::with_unknown_memory(CPU_DEVICE_ID, Library::Cpu, variant);
                CpuDiscovery::new(device, Some(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockCpuCapabilityPort, MockPlatformMemoryPort};

    const GIB: u64 = 1024 * 1024 * 1024;

    fn capability(tag: &'static str) -> MockCpuCapabilityPort {
        let mut cap = MockCpuCapabilityPort::new();
        cap.expect_capability().returning(move || tag.to_string());
        cap
    }

    fn host(total: u64, free: u64, swap: Option<u64>) -> MockPlatformMemoryPort {
        let mut platform = MockPlatformMemoryPort::new();
        platform.expect_physical_memory().returning(move || Ok(total));
        platform.expect_free_memory().returning(move || Ok(free));
        platform.expect_free_swap().returning(move || Ok(swap));
        platform
    }

    #[test]
    fn test_cpu_descriptor() {
        let platform = host(16 * GIB, 6 * GIB, None);
        let cap = capability("avx2");
        let discovery = CpuEnumerator::new(&platform, &cap).discover_cpu();

        assert!(discovery.error().is_none());
        let device = discovery.device();
        assert_eq!(device.id(), "cpu");
        assert_eq!(device.library(), Library::Cpu);
        assert_eq!(device.variant(), "avx2");
        assert_eq!(device.total_memory(), 16 * GIB);
        assert_eq!(device.free_memory(), 6 * GIB);
        assert_eq!(device.free_swap(), None);
        assert_eq!(device.memory_policy(), MemoryPolicy::Live);
        assert_eq!(discovery.inventory().len(), 1);
    }

    #[test]
    fn test_reported_zero_swap_is_kept() {
        let platform = host(16 * GIB, 6 * GIB, Some(0));
        let cap = capability("");
        let discovery = CpuEnumerator::new(&platform, &cap).discover_cpu();
        assert_eq!(discovery.device().free_swap(), Some(0));
    }

    #[test]
    fn test_query_failure_zeroes_memory_and_surfaces_error() {
        let mut platform = MockPlatformMemoryPort::new();
        platform.expect_physical_memory().returning(|| {
            Err(ProbeError::query_failed(
                PlatformQuery::PhysicalMemory,
                "host_statistics64 failed",
            ))
        });
        let cap = capability("avx");

        let discovery = CpuEnumerator::new(&platform, &cap).discover_cpu();

        let device = discovery.device();
        assert_eq!(device.total_memory(), 0);
        assert_eq!(device.free_memory(), 0);
        assert_eq!(device.variant(), "avx");
        assert!(device.is_degraded());
        assert!(matches!(
            discovery.error(),
            Some(ProbeError::QueryFailed {
                query: PlatformQuery::PhysicalMemory,
                ..
            })
        ));

        let (inventory, error) = discovery.into_parts();
        assert_eq!(inventory.len(), 1);
        assert!(error.is_some());
    }

    #[test]
    fn test_free_query_failure_is_surfaced() {
        let mut platform = MockPlatformMemoryPort::new();
        platform.expect_physical_memory().returning(|| Ok(8 * GIB));
        platform.expect_free_memory().returning(|| {
            Err(ProbeError::query_failed(PlatformQuery::FreeMemory, "denied"))
        });
        let cap = capability("");

        let discovery = CpuEnumerator::new(&platform, &cap).discover_cpu();
        assert_eq!(discovery.device().total_memory(), 0);
        assert!(discovery.error().is_some());
    }

    #[test]
    fn test_zero_total_is_unusable() {
        let platform = host(0, 0, None);
        let err = cpu_memory(&platform).unwrap_err();
        assert_eq!(
            err,
            ProbeError::UnusableValue {
                query: PlatformQuery::PhysicalMemory,
                value: 0
            }
        );
    }

    #[test]
    fn test_free_clamped_to_total() {
        let platform = host(4 * GIB, 5 * GIB, Some(GIB));
        let memory = cpu_memory(&platform).unwrap();
        assert_eq!(memory.total_memory, 4 * GIB);
        assert_eq!(memory.free_memory, 4 * GIB);
        assert_eq!(memory.free_swap, Some(GIB));
    }
}
