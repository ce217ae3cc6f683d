//! Device probe port.
//!
//! This port is what a multi-platform inventory service composes: one
//! implementation per platform, each returning inventories with the same
//! fields and invariants.
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (active host queries)
//! - The CLI injects the probe at its composition root

use crate::domain::{CpuDiscovery, DeviceInventory, VisibilityEnv};

use super::platform::ProbeResult;

/// Port for discovering the compute devices of one platform.
///
/// Calls are synchronous and independent; implementations keep no state
/// between them, so a probe can be shared across threads freely.
///
/// # Example
///
/// ```ignore
/// use devprobe_core::ports::DeviceProbePort;
///
/// fn inventory(probe: &dyn DeviceProbePort) {
///     let gpus = probe.discover_devices().unwrap_or_default();
///     let (cpu, _err) = probe.discover_cpu().into_parts();
///     let all = gpus.concat(cpu);
///     let env = probe.visible_devices_env(&all);
///     // ...
/// }
/// ```
pub trait DeviceProbePort: Send + Sync {
    /// Enumerate GPU-class devices.
    ///
    /// Fails when the native query is unreachable or returns an unusable
    /// value; there is no partial result. A device whose memory is below its
    /// backend floor is reported as [`DeviceInfoError::BelowMinimum`], never
    /// dropped silently.
    ///
    /// [`DeviceInfoError::BelowMinimum`]: crate::domain::DeviceInfoError::BelowMinimum
    fn discover_devices(&self) -> ProbeResult<DeviceInventory>;

    /// Build the single CPU fallback descriptor.
    fn discover_cpu(&self) -> CpuDiscovery;

    /// Environment pair restricting a backend process to `inventory`.
    fn visible_devices_env(&self, inventory: &DeviceInventory) -> VisibilityEnv;
}
