// file: src/main.rs
// version: 2.0.0
// guid: h8i9j0k1-l2m3-4567-8901-234567hijklm

//! Autoinstall Identity - Main entry point

use autoinstall_identity::{
    cli::{args::Cli, args::Commands, commands::*},
    logging::{init_json_logger, init_logger},
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        init_json_logger(cli.verbose, cli.quiet)?;
    } else {
        init_logger(cli.verbose, cli.quiet)?;
    }

    match cli.command {
        Commands::Validate { config } => validate_command(&config).await,
        Commands::Run {
            config,
            answers,
            output,
        } => run_command(config, answers, output).await,
        Commands::Interactive { config } => interactive_command(config).await,
        Commands::Schema => schema_command().await,
    }
}
