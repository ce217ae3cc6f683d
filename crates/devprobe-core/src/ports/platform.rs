//! Platform memory port.
//!
//! The native memory primitives are external collaborators. This port is the
//! boundary: implementations live in adapters (e.g., devprobe-runtime) and
//! report plain byte counts.

use std::fmt;

use thiserror::Error;

use crate::domain::DeviceInfoError;

/// Native query a [`ProbeError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformQuery {
    RecommendedMaxWorkingSet,
    PhysicalMemory,
    FreeMemory,
    FreeSwap,
}

impl fmt::Display for PlatformQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RecommendedMaxWorkingSet => "recommended_max_working_set",
            Self::PhysicalMemory => "physical_memory",
            Self::FreeMemory => "free_memory",
            Self::FreeSwap => "free_swap",
        })
    }
}

/// Errors that can occur during device discovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// A native primitive could not be reached.
    #[error("Platform query {query} failed: {reason}")]
    QueryFailed {
        query: PlatformQuery,
        reason: String,
    },

    /// A native primitive answered with a value no device can have.
    #[error("Platform query {query} returned an unusable value: {value} bytes")]
    UnusableValue { query: PlatformQuery, value: u64 },

    /// Queried figures violate descriptor invariants.
    #[error("Invalid device descriptor: {0}")]
    InvalidDevice(#[from] DeviceInfoError),
}

impl ProbeError {
    pub fn query_failed(query: PlatformQuery, reason: impl Into<String>) -> Self {
        Self::QueryFailed {
            query,
            reason: reason.into(),
        }
    }
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Port for the host's native memory primitives.
///
/// Every call re-reads host state. Implementations must not cache: callers
/// rely on each enumeration being a fresh snapshot.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformMemoryPort: Send + Sync {
    /// Platform-curated ceiling for compute working sets, in bytes.
    ///
    /// This is not raw physical memory; it already excludes what the OS and
    /// display reserve.
    fn recommended_max_working_set(&self) -> ProbeResult<u64>;

    /// Total physical memory in bytes.
    fn physical_memory(&self) -> ProbeResult<u64>;

    /// Currently free physical memory in bytes.
    fn free_memory(&self) -> ProbeResult<u64>;

    /// Free swap in bytes, or `None` where the platform pages dynamically and
    /// has no fixed swap size.
    fn free_swap(&self) -> ProbeResult<Option<u64>>;
}
