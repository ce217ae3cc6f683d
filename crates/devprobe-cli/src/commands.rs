//! Subcommand definitions.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List GPU and CPU devices with their memory figures
    List {
        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the device visibility variable as NAME=value (nothing when not needed)
    Env,
}
