//! Configuration commands

use crate::app::{ConfigAction, ConfigArgs, OutputFormat};
use crate::output::status;
use anyhow::Result;
use saci_core::{Config, SaciError};
use std::path::Path;

pub fn run(args: ConfigArgs, config: &Config, config_path: &Path, format: OutputFormat) -> Result<()> {
    match args.action {
        ConfigAction::Show => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
            OutputFormat::Cli => {
                if !config_path.exists() {
                    println!("# {} does not exist, showing defaults", config_path.display());
                }
                print!("{}", config.to_yaml()?);
            }
        },
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
        ConfigAction::Init { force } => {
            if config_path.exists() && !force {
                return Err(SaciError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                ))
                .into());
            }
            Config::default().save_to(config_path)?;
            status::success(&format!("Wrote {}", config_path.display()));
        }
    }
    Ok(())
}
