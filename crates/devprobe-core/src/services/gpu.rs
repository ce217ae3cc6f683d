//! GPU device enumeration for unified-memory hosts.

use tracing::{debug, warn};

use crate::domain::{
    Architecture, DeviceInfo, DeviceInfoError, DeviceInventory, MemoryInfo, MemoryPolicy,
};
use crate::ports::{PlatformMemoryPort, PlatformQuery, ProbeError, ProbeResult};

use super::backend::{ArchitectureBackendSelector, BackendSelector};

/// Id of the single aggregate GPU device.
pub const GPU_DEVICE_ID: &str = "0";

/// Enumerates GPU-class devices through a platform memory port.
///
/// Models at most one aggregate GPU per host. A platform with several
/// physical GPUs needs one descriptor per device with the same invariants.
pub struct DeviceEnumerator<'a> {
    platform: &'a dyn PlatformMemoryPort,
    selector: &'a dyn BackendSelector,
    architecture: Architecture,
}

impl<'a> DeviceEnumerator<'a> {
    /// Enumerator using [`ArchitectureBackendSelector`].
    pub fn new(platform: &'a dyn PlatformMemoryPort, architecture: Architecture) -> Self {
        Self {
            platform,
            selector: &ArchitectureBackendSelector,
            architecture,
        }
    }

    /// Replace the backend selection strategy.
    #[must_use]
    pub fn with_selector(mut self, selector: &'a dyn BackendSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Enumerate devices.
    ///
    /// `total_memory` is the platform's recommended max working set and
    /// `free_memory` is set equal to it. A working set below the backend floor
    /// fails with [`DeviceInfoError::BelowMinimum`] so callers can tell an
    /// excluded GPU from a host without one.
    pub fn discover_devices(&self) -> ProbeResult<DeviceInventory> {
        let library = self.selector.select(self.architecture);

        let total = self.platform.recommended_max_working_set()?;
        if total == 0 {
            return Err(ProbeError::UnusableValue {
                query: PlatformQuery::RecommendedMaxWorkingSet,
                value: total,
            });
        }

        // No reliable counter for currently allocated video memory exists,
        // so free is pinned to total.
        let memory = MemoryInfo::new(total, total);

        let minimum = library.minimum_memory();
        if total < minimum {
            warn!(
                %library,
                total,
                minimum,
                "GPU working set below backend floor, excluding device"
            );
            return Err(DeviceInfoError::BelowMinimum {
                library,
                total,
                minimum,
            }
            .into());
        }

        let device = DeviceInfo::new(
            GPU_DEVICE_ID,
            library,
            "",
            memory,
            MemoryPolicy::OptimisticEqualToTotal,
        )?;

        debug!(
            architecture = %self.architecture,
            %library,
            total,
            "Discovered GPU device"
        );

        Ok(std::iter::once(device).collect())
    }
}
