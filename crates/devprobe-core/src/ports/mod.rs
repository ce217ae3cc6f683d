//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from the host.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No OS or `sysinfo` types in any signature
//! - Every port is `Send + Sync` and stateless from the caller's view
//! - Queries return `ProbeResult`; nothing is silently defaulted

pub mod cpu_capability;
pub mod device_probe;
pub mod platform;

pub use cpu_capability::{CpuCapabilityPort, FixedCapability};
pub use device_probe::DeviceProbePort;
pub use platform::{PlatformMemoryPort, PlatformQuery, ProbeError, ProbeResult};

#[cfg(test)]
pub use cpu_capability::MockCpuCapabilityPort;
#[cfg(test)]
pub use platform::MockPlatformMemoryPort;
