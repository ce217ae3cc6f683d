//! Compute backends ("libraries") a device can be driven through.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One mebibyte in bytes.
pub const MEBIBYTE: u64 = 1024 * 1024;

/// Floor below which a Metal device cannot hold any workload.
pub const METAL_MINIMUM_MEMORY: u64 = 512 * MEBIBYTE;

/// Vulkan on Apple hardware shares the Metal floor.
pub const VULKAN_MINIMUM_MEMORY: u64 = METAL_MINIMUM_MEMORY;

pub const CUDA_MINIMUM_MEMORY: u64 = 457 * MEBIBYTE;
pub const ROCM_MINIMUM_MEMORY: u64 = 457 * MEBIBYTE;
pub const ONEAPI_MINIMUM_MEMORY: u64 = 457 * MEBIBYTE;

/// The CPU backend has no floor of its own.
pub const CPU_MINIMUM_MEMORY: u64 = 0;

/// Compute backend a device is driven through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    Metal,
    Vulkan,
    Cuda,
    Rocm,
    #[serde(rename = "oneapi")]
    OneApi,
    Cpu,
}

impl Library {
    /// Backend tag as consumed by compute runtimes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metal => "metal",
            Self::Vulkan => "vulkan",
            Self::Cuda => "cuda",
            Self::Rocm => "rocm",
            Self::OneApi => "oneapi",
            Self::Cpu => "cpu",
        }
    }

    /// Fixed per-backend memory floor in bytes.
    ///
    /// This is a constant of the backend, never derived from a live query.
    pub const fn minimum_memory(self) -> u64 {
        match self {
            Self::Metal => METAL_MINIMUM_MEMORY,
            Self::Vulkan => VULKAN_MINIMUM_MEMORY,
            Self::Cuda => CUDA_MINIMUM_MEMORY,
            Self::Rocm => ROCM_MINIMUM_MEMORY,
            Self::OneApi => ONEAPI_MINIMUM_MEMORY,
            Self::Cpu => CPU_MINIMUM_MEMORY,
        }
    }

    pub const fn is_gpu(self) -> bool {
        !matches!(self, Self::Cpu)
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
