//! Ordered device collections.

use serde::Serialize;
use tracing::info;

use super::device::DeviceInfo;
use crate::ports::ProbeError;
use crate::utils::format::format_bytes;

/// Devices from one enumeration call, in discovery order.
///
/// Inventories from different enumerators are combined with
/// [`DeviceInventory::concat`]; descriptors are never merged field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeviceInventory(Vec<DeviceInfo>);

impl DeviceInventory {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, device: DeviceInfo) {
        self.0.push(device);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn devices(&self) -> &[DeviceInfo] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeviceInfo> {
        self.0.iter()
    }

    /// Append `other` after this inventory's devices.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Device ids in discovery order.
    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(DeviceInfo::id).collect()
    }

    /// Split into one inventory per `(library, variant)` pair.
    ///
    /// Groups appear in the order their first device was discovered and
    /// keep discovery order internally.
    pub fn by_library(&self) -> Vec<Self> {
        let mut groups: Vec<Self> = Vec::new();
        for device in &self.0 {
            let existing = groups.iter_mut().find(|group| {
                group.0.first().is_some_and(|first| {
                    first.library() == device.library() && first.variant() == device.variant()
                })
            });
            match existing {
                Some(group) => group.push(device.clone()),
                None => groups.push(Self(vec![device.clone()])),
            }
        }
        groups
    }

    /// Emit one `info` event per device.
    pub fn log_details(&self) {
        for device in &self.0 {
            info!(
                id = device.id(),
                library = %device.library(),
                variant = device.variant(),
                total = %format_bytes(device.total_memory()),
                available = %format_bytes(device.free_memory()),
                minimum = %format_bytes(device.minimum_memory()),
                policy = ?device.memory_policy(),
                "inference compute"
            );
        }
    }
}

impl From<Vec<DeviceInfo>> for DeviceInventory {
    fn from(devices: Vec<DeviceInfo>) -> Self {
        Self(devices)
    }
}

impl FromIterator<DeviceInfo> for DeviceInventory {
    fn from_iter<I: IntoIterator<Item = DeviceInfo>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<DeviceInfo> for DeviceInventory {
    fn extend<I: IntoIterator<Item = DeviceInfo>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for DeviceInventory {
    type Item = DeviceInfo;
    type IntoIter = std::vec::IntoIter<DeviceInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DeviceInventory {
    type Item = &'a DeviceInfo;
    type IntoIter = std::slice::Iter<'a, DeviceInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of CPU fallback enumeration.
///
/// Always holds exactly one descriptor. When the host memory query failed the
/// descriptor carries zeroed memory and the failure is kept in `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuDiscovery {
    device: DeviceInfo,
    error: Option<ProbeError>,
}

impl CpuDiscovery {
    pub const fn new(device: DeviceInfo, error: Option<ProbeError>) -> Self {
        Self { device, error }
    }

    pub const fn device(&self) -> &DeviceInfo {
        &self.device
    }

    /// The memory query failure, if any.
    pub const fn error(&self) -> Option<&ProbeError> {
        self.error.as_ref()
    }

    /// Single-entry inventory for merging with GPU results.
    pub fn inventory(&self) -> DeviceInventory {
        DeviceInventory(vec![self.device.clone()])
    }

    pub fn into_parts(self) -> (DeviceInventory, Option<ProbeError>) {
        (DeviceInventory(vec![self.device]), self.error)
    }
}
