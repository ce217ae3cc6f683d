//! Device descriptor and its memory figures.

use serde::Serialize;
use thiserror::Error;

use super::library::Library;

/// Memory figures for one device, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoryInfo {
    pub total_memory: u64,
    pub free_memory: u64,
    /// Free swap space. `None` when the platform does not report a fixed
    /// swap size (dynamic paging), which is not the same as `Some(0)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_swap: Option<u64>,
}

impl MemoryInfo {
    /// Figures with no swap reported.
    pub const fn new(total_memory: u64, free_memory: u64) -> Self {
        Self {
            total_memory,
            free_memory,
            free_swap: None,
        }
    }

    /// All-zero figures used when the memory query failed.
    pub const fn zeroed() -> Self {
        Self::new(0, 0)
    }

    #[must_use]
    pub const fn with_free_swap(mut self, free_swap: Option<u64>) -> Self {
        self.free_swap = free_swap;
        self
    }
}

/// Where a descriptor's `free_memory` figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryPolicy {
    /// Read from a live free-memory counter.
    Live,
    /// No live allocation counter exists; `free_memory` is pinned to
    /// `total_memory`. Never undercounts, never exceeds total, and does not
    /// see contention from other processes.
    OptimisticEqualToTotal,
    /// The memory query failed; figures are zero and must not be trusted.
    Unknown,
}

/// Reasons a descriptor cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceInfoError {
    #[error("Device id cannot be empty")]
    EmptyId,

    #[error("Free memory {free} exceeds total memory {total}")]
    FreeExceedsTotal { free: u64, total: u64 },

    #[error("Total memory {total} is below the {library} floor of {minimum}")]
    BelowMinimum {
        library: Library,
        total: u64,
        minimum: u64,
    },

    #[error("Memory figures do not match the {policy:?} policy")]
    PolicyMismatch { policy: MemoryPolicy },
}

/// Normalised record describing one compute device.
///
/// Descriptors are snapshots: they are built once per enumeration call and
/// expose no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    id: String,
    library: Library,
    variant: String,
    #[serde(flatten)]
    memory: MemoryInfo,
    minimum_memory: u64,
    memory_policy: MemoryPolicy,
}

impl DeviceInfo {
    /// Build a descriptor, checking the memory invariants.
    ///
    /// `minimum_memory` is taken from the library; it is never supplied by
    /// the caller.
    pub fn new(
        id: impl Into<String>,
        library: Library,
        variant: impl Into<String>,
        memory: MemoryInfo,
        memory_policy: MemoryPolicy,
    ) -> Result<Self, DeviceInfoError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DeviceInfoError::EmptyId);
        }

        let MemoryInfo {
            total_memory: total,
            free_memory: free,
            ..
        } = memory;

        if free > total {
            return Err(DeviceInfoError::FreeExceedsTotal { free, total });
        }

        let minimum = library.minimum_memory();
        if total != 0 && total < minimum {
            return Err(DeviceInfoError::BelowMinimum {
                library,
                total,
                minimum,
            });
        }

        let consistent = match memory_policy {
            MemoryPolicy::Live => true,
            MemoryPolicy::OptimisticEqualToTotal => free == total,
            MemoryPolicy::Unknown => total == 0 && free == 0,
        };
        if !consistent {
            return Err(DeviceInfoError::PolicyMismatch {
                policy: memory_policy,
            });
        }

        Ok(Self {
            id,
            library,
            variant: variant.into(),
            memory,
            minimum_memory: minimum,
            memory_policy,
        })
    }

    /// Descriptor for a device whose memory could not be read.
    ///
    /// Memory fields are zero and the policy is [`MemoryPolicy::Unknown`].
    /// An empty id is replaced by the library tag.
    pub fn with_unknown_memory(
        id: impl Into<String>,
        library: Library,
        variant: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            id: if id.is_empty() {
                library.as_str().to_string()
            } else {
                id
            },
            library,
            variant: variant.into(),
            memory: MemoryInfo::zeroed(),
            minimum_memory: library.minimum_memory(),
            memory_policy: MemoryPolicy::Unknown,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn library(&self) -> Library {
        self.library
    }

    /// Backend-specific capability tag; empty when not applicable.
    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub const fn memory(&self) -> MemoryInfo {
        self.memory
    }

    pub const fn total_memory(&self) -> u64 {
        self.memory.total_memory
    }

    pub const fn free_memory(&self) -> u64 {
        self.memory.free_memory
    }

    pub const fn free_swap(&self) -> Option<u64> {
        self.memory.free_swap
    }

    pub const fn minimum_memory(&self) -> u64 {
        self.minimum_memory
    }

    pub const fn memory_policy(&self) -> MemoryPolicy {
        self.memory_policy
    }

    /// Whether memory figures are zero because the query failed.
    pub const fn is_degraded(&self) -> bool {
        matches!(self.memory_policy, MemoryPolicy::Unknown)
    }
}
