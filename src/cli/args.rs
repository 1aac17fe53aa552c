// file: src/cli/args.rs
// version: 2.0.0
// guid: f6g7h8i9-j0k1-2345-6789-012345fghijk

//! Command line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autoinstall-identity")]
#[command(about = "Validate and apply identity and hostname autoinstall sections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the identity section of an autoinstall document
    Validate {
        #[arg(short, long, env = "AUTOINSTALL_CONFIG")]
        config: PathBuf,
    },

    /// Load and apply identity data, then print the regenerated section
    Run {
        #[arg(short, long, env = "AUTOINSTALL_CONFIG")]
        config: Option<PathBuf>,

        #[arg(short, long, help = "Scripted answers file for unattended runs")]
        answers: Option<PathBuf>,

        #[arg(short, long, help = "Write the regenerated document here instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Show which steps must be confirmed interactively
    Interactive {
        #[arg(short, long, env = "AUTOINSTALL_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Print the identity section JSON schema
    Schema,
}
