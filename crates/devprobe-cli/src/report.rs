//! Merged inventory report.
//!
//! The CLI is the caller that composes the enumerators: it runs both,
//! concatenates their inventories and records any failure instead of
//! aborting the whole pass.

use chrono::{DateTime, Utc};
use devprobe_core::ports::DeviceProbePort;
use devprobe_core::{DeviceInventory, ProbeError, VisibilityEnv};
use serde::Serialize;
use tracing::warn;

/// Which enumerator a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureSource {
    Gpu,
    Cpu,
}

/// A discovery failure kept in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryFailure {
    pub source: FailureSource,
    pub message: String,
    #[serde(skip)]
    pub error: ProbeError,
}

/// Snapshot of every device on the host.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryReport {
    pub captured_at: DateTime<Utc>,
    pub devices: DeviceInventory,
    pub visibility_env: VisibilityEnv,
    pub failures: Vec<DiscoveryFailure>,
}

impl InventoryReport {
    /// Run both enumerators and merge their results.
    ///
    /// A GPU failure drops the GPU devices; a CPU failure keeps the zeroed CPU
    /// descriptor. Both are logged and listed in `failures`.
    pub fn collect(probe: &dyn DeviceProbePort) -> Self {
        let captured_at = Utc::now();
        let mut failures = Vec::new();

        let gpus = probe.discover_devices().unwrap_or_else(|err| {
            warn!(error = %err, "GPU discovery failed, continuing without GPUs");
            failures.push(DiscoveryFailure {
                source: FailureSource::Gpu,
                message: err.to_string(),
                error: err,
            });
            DeviceInventory::new()
        });

        let (cpu, cpu_error) = probe.discover_cpu().into_parts();
        if let Some(err) = cpu_error {
            warn!(error = %err, "CPU memory unknown, CPU device marked degraded");
            failures.push(DiscoveryFailure {
                source: FailureSource::Cpu,
                message: err.to_string(),
                error: err,
            });
        }

        let devices = gpus.concat(cpu);
        devices.log_details();
        let visibility_env = probe.visible_devices_env(&devices);

        Self {
            captured_at,
            devices,
            visibility_env,
            failures,
        }
    }

    pub fn gpu_failure(&self) -> Option<&ProbeError> {
        self.failures
            .iter()
            .find(|f| f.source == FailureSource::Gpu)
            .map(|f| &f.error)
    }
}
