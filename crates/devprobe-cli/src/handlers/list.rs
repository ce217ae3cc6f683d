//! List devices handler.
//!
//! Prints the merged inventory as a table, or as a JSON report with `--json`.

use std::io::Write;

use devprobe_core::ports::DeviceProbePort;
use devprobe_core::utils::format::format_bytes;
use devprobe_core::{DeviceInfo, MemoryPolicy};

use crate::error::CliError;
use crate::report::InventoryReport;

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the list command.
pub fn execute(probe: &dyn DeviceProbePort, json: bool) -> Result<(), CliError> {
    let report = InventoryReport::collect(probe);
    let mut out = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write_table(&mut out, &report)?;
    }

    Ok(())
}

fn policy_label(policy: MemoryPolicy) -> String {
    match policy {
        MemoryPolicy::Live => format!("{GREEN}live{RESET}"),
        MemoryPolicy::OptimisticEqualToTotal => "= total".to_string(),
        MemoryPolicy::Unknown => format!("{YELLOW}unknown (degraded){RESET}"),
    }
}

fn swap_label(device: &DeviceInfo) -> String {
    device
        .free_swap()
        .map_or_else(|| "-".to_string(), format_bytes)
}

/// Write the device table followed by any discovery failures.
pub fn write_table(out: &mut impl Write, report: &InventoryReport) -> std::io::Result<()> {
    writeln!(
        out,
        "{BOLD}{:<6} {:<8} {:<8} {:>12} {:>12} {:>12} {:>12}  {:<10}{RESET}",
        "ID", "LIBRARY", "VARIANT", "TOTAL", "FREE", "SWAP", "MINIMUM", "FREE SRC"
    )?;
    writeln!(out, "{}", "=".repeat(90))?;

    for device in &report.devices {
        let variant = if device.variant().is_empty() {
            "-"
        } else {
            device.variant()
        };
        writeln!(
            out,
            "{:<6} {:<8} {:<8} {:>12} {:>12} {:>12} {:>12}  {}",
            device.id(),
            device.library().as_str(),
            variant,
            format_bytes(device.total_memory()),
            format_bytes(device.free_memory()),
            swap_label(device),
            format_bytes(device.minimum_memory()),
            policy_label(device.memory_policy()),
        )?;
    }

    if !report.failures.is_empty() {
        writeln!(out)?;
        for failure in &report.failures {
            writeln!(
                out,
                "{YELLOW}! {:?} discovery: {}{RESET}",
                failure.source, failure.message
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::StubProbe;
    use devprobe_core::{PlatformQuery, ProbeError};

    fn render(probe: &StubProbe) -> String {
        let report = InventoryReport::collect(probe);
        let mut buf = Vec::new();
        write_table(&mut buf, &report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_lists_every_device() {
        let output = render(&StubProbe::healthy());
        assert!(output.contains("metal"));
        assert!(output.contains("cpu"));
        assert!(output.contains("avx2"));
        assert!(output.contains("12.0 GiB"));
        assert!(output.contains("512.0 MiB"));
        assert!(!output.contains("discovery:"));
    }

    #[test]
    fn test_table_reports_failures() {
        let probe = StubProbe {
            gpus: Err(ProbeError::query_failed(
                PlatformQuery::RecommendedMaxWorkingSet,
                "no device",
            )),
            ..StubProbe::healthy()
        };
        let output = render(&probe);
        assert!(!output.contains("metal"));
        assert!(output.contains("Gpu discovery"));
        assert!(output.contains("no device"));
    }
}
