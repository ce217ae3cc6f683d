#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod system;

// Re-export device probe implementation
pub use system::{DefaultCpuCapability, DefaultDeviceProbe, SysinfoPlatform};
