//! Concat command implementation

use anyhow::{bail, Result};
use colored::Colorize;
use std::process::ExitCode;

use audacious_wav::{WavFormat, Wave};

use super::reporting::{read_input, write_output};

/// Run the concat command
///
/// Inputs are appended in order, channel by channel. A mono input
/// contributes the same samples to both channels.
pub fn run(inputs: &[String], output: &str, format: &WavFormat) -> Result<ExitCode> {
    if inputs.is_empty() {
        bail!("No input files given");
    }
    format.validate()?;

    let mut wave = Wave::new();
    for input in inputs {
        let part = read_input(input)?;
        println!("  {} {} ({} frames)", "+".green(), input, part.len());
        wave += &part;
    }

    write_output(output, &wave, format)?;
    Ok(ExitCode::SUCCESS)
}
