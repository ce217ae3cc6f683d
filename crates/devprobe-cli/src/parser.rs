//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use devprobe_core::{Architecture, Platform, ProbeSettings};

use crate::commands::Commands;

/// Command-line interface definition for the device inventory probe.
///
/// Host overrides are global so every subcommand sees the same declared host.
#[derive(Parser)]
#[command(name = "devprobe")]
#[command(about = "Discover compute devices and their memory")]
#[command(version)]
pub struct Cli {
    /// Declare the host architecture instead of detecting it (amd64, arm64, other)
    #[arg(long, global = true, env = "DEVPROBE_ARCH")]
    pub arch: Option<Architecture>,

    /// Declare the host platform instead of detecting it (darwin, linux, windows, other)
    #[arg(long, global = true, env = "DEVPROBE_PLATFORM")]
    pub platform: Option<Platform>,

    /// Share of physical memory reported as the GPU working set, in (0, 1]
    #[arg(long, global = true, env = "DEVPROBE_GPU_MEMORY_FRACTION")]
    pub gpu_memory_fraction: Option<f64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Probe settings from the global options.
    pub fn settings(&self) -> ProbeSettings {
        ProbeSettings {
            architecture: self.arch,
            platform: self.platform,
            gpu_memory_fraction: self.gpu_memory_fraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "devprobe",
            "--verbose",
            "--arch",
            "x86_64",
            "--platform",
            "macos",
            "list",
        ]);
        assert!(cli.verbose);

        let settings = cli.settings();
        assert_eq!(settings.architecture, Some(Architecture::Amd64));
        assert_eq!(settings.platform, Some(Platform::Darwin));
        assert_eq!(settings.gpu_memory_fraction, None);
    }

    #[test]
    fn test_list_json_flag() {
        let cli = Cli::parse_from(["devprobe", "list", "--json"]);
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["devprobe", "env", "--gpu-memory-fraction", "0.5"]);
        assert!(matches!(cli.command, Some(Commands::Env)));
        assert_eq!(cli.settings().gpu_memory_fraction, Some(0.5));
    }

    #[test]
    fn test_invalid_arch_rejected() {
        let result = Cli::try_parse_from(["devprobe", "--arch", "sparc", "list"]);
        assert!(result.is_err());
    }
}
