//! Single-control command

use crate::app::{ControlArgs, OutputFormat};
use crate::output;
use anyhow::Result;
use saci_core::report::load_control;

pub fn run(args: ControlArgs, format: OutputFormat) -> Result<()> {
    let control = load_control(&args.input)?;
    print!("{}", output::format_records(&[control], format));
    Ok(())
}
