//! Pure domain types for device inventories.
//!
//! Nothing in here touches the host. Values are produced by the services in
//! [`crate::services`] from data returned through [`crate::ports`].

mod device;
mod host;
mod inventory;
mod library;
mod visibility;

pub use device::{DeviceInfo, DeviceInfoError, MemoryInfo, MemoryPolicy};
pub use host::{Architecture, ParseHostError, Platform};
pub use inventory::{CpuDiscovery, DeviceInventory};
pub use library::{
    CPU_MINIMUM_MEMORY, CUDA_MINIMUM_MEMORY, Library, MEBIBYTE, METAL_MINIMUM_MEMORY,
    ONEAPI_MINIMUM_MEMORY, ROCM_MINIMUM_MEMORY, VULKAN_MINIMUM_MEMORY,
};
pub use visibility::VisibilityEnv;
