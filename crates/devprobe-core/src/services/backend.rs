//! Backend selection strategy.

use crate::domain::{Architecture, Library};

/// Chooses the compute library for a GPU-class device.
///
/// Selection is a pure function of the declared architecture. Injecting the
/// strategy lets tests drive both branches on any machine.
pub trait BackendSelector: Send + Sync {
    fn select(&self, architecture: Architecture) -> Library;
}

/// Static two-way branch on architecture.
///
/// The Metal backend is only validated on Apple silicon, so `amd64` hosts are
/// routed through Vulkan. Every other architecture gets Metal. This encodes a
/// compatibility constraint, not a benchmark: do not replace it with a
/// "best available" search without re-validating Metal on Intel hardware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchitectureBackendSelector;

impl BackendSelector for ArchitectureBackendSelector {
    fn select(&self, architecture: Architecture) -> Library {
        match architecture {
            Architecture::Amd64 => Library::Vulkan,
            Architecture::Arm64 | Architecture::Other => Library::Metal,
        }
    }
}
