//! Device probe implementation for devprobe-runtime.
//!
//! This module provides the `DefaultDeviceProbe` which implements
//! `DeviceProbePort` from devprobe-core. It reads host state through
//! `sysinfo` and runtime CPU feature detection.

mod capability;
mod memory;

use devprobe_core::ports::DeviceProbePort;
use devprobe_core::{
    CpuDiscovery, CpuEnumerator, DeviceEnumerator, DeviceInventory, Platform, ProbeResult,
    ProbeSettings, SettingsError, VisibilityEnv, resolve_visibility_env, validate_settings,
};
use tracing::debug;

pub use capability::{DefaultCpuCapability, detect_cpu_capability};
pub use memory::SysinfoPlatform;

/// Default implementation of `DeviceProbePort`.
///
/// GPU discovery follows the unified-memory (Darwin) policy: one aggregate
/// device whose memory is the recommended working set. On other platforms
/// the GPU inventory is empty; their discrete GPUs belong to other probes.
///
/// # Example
///
/// ```ignore
/// use devprobe_runtime::system::DefaultDeviceProbe;
/// use devprobe_core::ports::DeviceProbePort;
///
/// let probe = DefaultDeviceProbe::new();
/// let cpu = probe.discover_cpu();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DefaultDeviceProbe {
    settings: ProbeSettings,
}

impl DefaultDeviceProbe {
    /// Create a probe for the current host with default settings.
    pub const fn new() -> Self {
        Self {
            settings: ProbeSettings::with_defaults(),
        }
    }

    /// Create a probe with validated settings.
    pub fn with_settings(settings: ProbeSettings) -> Result<Self, SettingsError> {
        validate_settings(&settings)?;
        Ok(Self { settings })
    }

    pub const fn settings(&self) -> &ProbeSettings {
        &self.settings
    }
}

impl Default for DefaultDeviceProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceProbePort for DefaultDeviceProbe {
    fn discover_devices(&self) -> ProbeResult<DeviceInventory> {
        let platform = self.settings.effective_platform();
        if platform != Platform::Darwin {
            debug!(%platform, "No unified-memory GPU on this platform");
            return Ok(DeviceInventory::new());
        }

        let port = SysinfoPlatform::new(&self.settings);
        DeviceEnumerator::new(&port, self.settings.effective_architecture()).discover_devices()
    }

    fn discover_cpu(&self) -> CpuDiscovery {
        let port = SysinfoPlatform::new(&self.settings);
        CpuEnumerator::new(&port, &DefaultCpuCapability).discover_cpu()
    }

    fn visible_devices_env(&self, inventory: &DeviceInventory) -> VisibilityEnv {
        resolve_visibility_env(self.settings.effective_platform(), inventory)
    }
}
