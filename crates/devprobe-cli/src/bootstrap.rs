//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the concrete probe is chosen.
//! Handlers receive it as a `DeviceProbePort`.

use devprobe_runtime::DefaultDeviceProbe;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Build the device probe from the parsed global options.
pub fn bootstrap(cli: &Cli) -> Result<DefaultDeviceProbe, CliError> {
    let settings = cli.settings();
    let probe = DefaultDeviceProbe::with_settings(settings)?;
    debug!(
        architecture = %settings.effective_architecture(),
        platform = %settings.effective_platform(),
        gpu_memory_fraction = settings.effective_gpu_memory_fraction(),
        "Probe configured"
    );
    Ok(probe)
}
