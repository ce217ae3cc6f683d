#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    Architecture, CpuDiscovery, DeviceInfo, DeviceInfoError, DeviceInventory, Library, MemoryInfo,
    MemoryPolicy, Platform, VisibilityEnv,
};
pub use ports::{
    CpuCapabilityPort, DeviceProbePort, PlatformMemoryPort, PlatformQuery, ProbeError, ProbeResult,
};
pub use services::{
    ArchitectureBackendSelector, BackendSelector, CpuEnumerator, DeviceEnumerator, cpu_memory,
    resolve_visibility_env,
};
pub use settings::{ProbeSettings, SettingsError, validate_settings};
