//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "saci")]
#[command(
    author,
    version,
    about = "Create PDF reports from NUnit-style XML test results"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Suppress status messages on stdout
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging, print runtime parameters and export testdata.json
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file
    #[arg(long, global = true, env = "SACI_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a PDF report from a test-results document
    Report(ReportArgs),

    /// Normalize the outermost test suite as a single control
    Control(ControlArgs),

    /// Check runtime dependencies
    Precheck,

    /// Manage the local configuration file
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ReportArgs {
    /// Input XML file
    #[arg(short, long, default_value = "aarti.xml")]
    pub input: PathBuf,

    /// Output PDF file (default: cis_report_<account>_<timestamp>.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also keep the rendered HTML at this path
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Account id shown in the report header
    #[arg(long)]
    pub account_id: Option<String>,

    /// Account name shown in the report header
    #[arg(long)]
    pub account_name: Option<String>,

    /// Skip the wkhtmltopdf version check
    #[arg(long)]
    pub skip_precheck: bool,
}

#[derive(Args)]
pub struct ControlArgs {
    /// Input XML file
    #[arg(short, long, default_value = "results.xml")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Display the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
