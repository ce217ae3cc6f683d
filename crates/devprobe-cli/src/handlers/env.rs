//! Visibility environment handler.
//!
//! Prints `NAME=value` for the backend launcher, or nothing when the platform
//! needs no restriction.

use std::io::Write;

use devprobe_core::ports::DeviceProbePort;
use tracing::debug;

use crate::error::CliError;
use crate::report::InventoryReport;

/// Execute the env command.
///
/// A failed GPU discovery is an error here: printing a pair derived from a
/// partial inventory would hide devices from the backend.
pub fn execute(probe: &dyn DeviceProbePort) -> Result<(), CliError> {
    let report = InventoryReport::collect(probe);
    write_env(&mut std::io::stdout().lock(), &report)
}

pub fn write_env(out: &mut impl Write, report: &InventoryReport) -> Result<(), CliError> {
    if let Some(err) = report.gpu_failure() {
        return Err(err.clone().into());
    }

    let env = &report.visibility_env;
    if env.is_noop() {
        debug!("No visibility variable needed on this platform");
        return Ok(());
    }

    writeln!(out, "{}={}", env.name(), env.value())?;
    Ok(())
}
