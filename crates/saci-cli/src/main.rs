//! Saci CLI
//!
//! Create PDF compliance reports from NUnit-style XML test results.

use clap::Parser;
use saci_core::error::exit_codes;
use saci_core::{Config, SaciError};
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Config path: --config / SACI_CONFIG, otherwise the user config dir
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            output::status::error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    init_tracing(&config, cli.debug);

    let result = match cli.command {
        Commands::Report(args) => {
            commands::report::run(args, &config, &config_path, cli.quiet, cli.debug)
        }
        Commands::Control(args) => commands::control::run(args, cli.format),
        Commands::Precheck => {
            commands::precheck::run(&config, &config_path, cli.format, cli.quiet)
        }
        Commands::Config(args) => commands::config::run(args, &config, &config_path, cli.format),
    };

    if let Err(e) = result {
        output::status::error(&format!("{:#}", e));
        std::process::exit(exit_code(&e));
    }
}

fn init_tracing(config: &Config, debug: bool) {
    let default_directive = if debug {
        "debug"
    } else if !config.logging.enable_logging {
        "off"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SaciError>()
        .map(SaciError::exit_code)
        .unwrap_or(exit_codes::GENERAL_ERROR)
}
