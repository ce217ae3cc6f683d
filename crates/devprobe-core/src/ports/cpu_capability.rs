//! CPU capability port.
//!
//! Feature detection itself is out of scope for the core; the tag is treated
//! as opaque data and copied into the CPU descriptor's `variant`.

/// Port returning the CPU capability tag (e.g. an instruction-set level).
#[cfg_attr(test, mockall::automock)]
pub trait CpuCapabilityPort: Send + Sync {
    /// Opaque tag; empty when the host has no notable capability.
    fn capability(&self) -> String;
}

/// Capability port that always answers with the same tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedCapability(pub String);

impl CpuCapabilityPort for FixedCapability {
    fn capability(&self) -> String {
        self.0.clone()
    }
}
