//! Enumeration policy.
//!
//! Each service is a thin, stateless layer over the ports: it reads host state
//! through them on every call and returns fresh values. Nothing is cached.

mod backend;
mod cpu;
mod gpu;
mod visibility;

pub use backend::{ArchitectureBackendSelector, BackendSelector};
pub use cpu::{CPU_DEVICE_ID, CpuEnumerator, cpu_memory};
pub use gpu::{DeviceEnumerator, GPU_DEVICE_ID};
pub use visibility::resolve_visibility_env;
