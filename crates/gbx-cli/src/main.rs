//! GBX CLI - Main entry point

use clap::Parser;
use gbx_cli::{Cli, CliError, Config};
use gbx_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::{error, warn};

fn main() {
    // Parse command-line arguments; usage errors exit with code 2
    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let log_config = LogConfig::builder()
        .level(level)
        .output(LogOutput::Console)
        .log_file_prefix("gbx")
        .build();

    // Environment variables take precedence; a bad value falls back to the defaults
    let (log_config, env_error) = match log_config.clone().merge_env() {
        Ok(merged) => (merged, None),
        Err(e) => (log_config, Some(CliError::from(e))),
    };

    // The CLI should work without logging
    let _guard = init_logging(&log_config).ok();

    if let Some(e) = env_error {
        warn!(error = %e, "Ignoring invalid GBX_LOG_* setting");
    }

    if let Err(e) = execute(&cli) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn execute(cli: &Cli) -> gbx_cli::Result<()> {
    let config = Config::from_env()?;
    gbx_cli::commands::query::run(cli, &config)
}
