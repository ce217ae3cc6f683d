//! Visibility environment resolution.

use crate::domain::{DeviceInfo, DeviceInventory, Library, Platform, VisibilityEnv};

/// Environment pair that limits a backend process to `inventory`.
///
/// On platforms whose backends always see every device (Darwin) this is the
/// no-op pair `("", "")`. Elsewhere the variable is chosen by the first
/// device's library and the value lists the ids of the devices on that
/// library, comma-separated. Devices on other libraries are skipped.
/// Libraries without such a variable, and empty inventories, are also no-ops.
pub fn resolve_visibility_env(platform: Platform, inventory: &DeviceInventory) -> VisibilityEnv {
    if platform.exposes_all_devices() {
        return VisibilityEnv::noop();
    }

    let Some(first) = inventory.devices().first() else {
        return VisibilityEnv::noop();
    };

    let library = first.library();
    let ids = inventory
        .iter()
        .filter(|device| device.library() == library)
        .map(DeviceInfo::id)
        .collect::<Vec<_>>()
        .join(",");
    match library {
        Library::Cuda => VisibilityEnv::new("CUDA_VISIBLE_DEVICES", ids),
        Library::Rocm => VisibilityEnv::new("HIP_VISIBLE_DEVICES", ids),
        Library::OneApi => VisibilityEnv::new("ONEAPI_DEVICE_SELECTOR", format!("level_zero:{ids}")),
        Library::Vulkan => VisibilityEnv::new("GGML_VK_VISIBLE_DEVICES", ids),
        Library::Metal | Library::Cpu => VisibilityEnv::noop(),
    }
}
