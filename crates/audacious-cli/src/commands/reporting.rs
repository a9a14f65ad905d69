//! Shared file I/O and status output for commands.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use audacious_wav::utils::time_by_samples;
use audacious_wav::wav::{read_wav_file, write_wav_file};
use audacious_wav::{WavFormat, Wave};

/// Reads a WAV file, naming the path in any error.
pub(crate) fn read_input(path: &str) -> Result<Wave> {
    read_wav_file(path).with_context(|| format!("Failed to read WAV file: {}", path))
}

/// Encodes `wave` to `output` and prints a one-line summary.
pub(crate) fn write_output(output: &str, wave: &Wave, format: &WavFormat) -> Result<()> {
    let path = write_wav_file(output, wave, format)
        .with_context(|| format!("Failed to write WAV file: {}", output))?;
    print_written(&path, wave, format);
    Ok(())
}

fn print_written(path: &Path, wave: &Wave, format: &WavFormat) {
    let samples = wave.len() * usize::from(format.channels);
    let ms = time_by_samples(samples, format.sample_rate, format.channels);

    println!("{} {}", "Generated:".green().bold(), path.display());
    println!(
        "  {} {} frames, {:.1} ms, {} ch, {}-bit, {} Hz",
        "Audio:".dimmed(),
        wave.len(),
        ms,
        format.channels,
        format.bits_per_sample,
        format.sample_rate
    );
}
