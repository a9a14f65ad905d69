//! Info command implementation
//!
//! Prints the format, chunk layout and PCM hash of a WAV file without
//! decoding its samples.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use audacious_wav::wav::{hash_pcm, read_header, wav_path};
use audacious_wav::AudioResult;

use super::json_output::{error_codes, InfoOutput, InfoResult, JsonError};

/// Run the info command
///
/// # Arguments
/// * `input` - Path to the WAV file (`.wav` appended if missing)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

fn inspect(bytes: &[u8]) -> AudioResult<InfoResult> {
    let header = read_header(bytes)?;
    let pcm_hash = hash_pcm(&bytes[header.data.body()]);
    Ok(InfoResult::from_header(&header, pcm_hash))
}

/// Run info with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    let path = wav_path(Path::new(input));
    let bytes = fs::read(&path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let info = inspect(&bytes).with_context(|| format!("Invalid WAV file: {}", path.display()))?;

    println!("{} {}", "Info:".cyan().bold(), path.display());
    println!(
        "  {} {} ch, {}-bit PCM, {} Hz",
        "Format:".dimmed(),
        info.channels,
        info.bits_per_sample,
        info.sample_rate
    );
    println!(
        "  {} {} bytes/s, block align {}",
        "Rate:".dimmed(),
        info.byte_rate,
        info.block_align
    );
    println!(
        "  {} {} frames, {:.1} ms",
        "Length:".dimmed(),
        info.frames,
        info.duration_ms
    );
    println!("  {} {}", "PCM hash:".dimmed(), &info.pcm_hash[..16]);

    println!("  {}", "Chunks:".dimmed());
    for chunk in &info.chunks {
        println!(
            "    {} {:>10} bytes at {}",
            format!("'{}'", chunk.id).yellow(),
            chunk.size,
            chunk.offset
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Run info with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let path = wav_path(Path::new(input));
    let file = path.display().to_string();

    let output = match fs::read(&path) {
        Err(e) => InfoOutput::failure(
            &file,
            vec![JsonError::new(error_codes::FILE_READ, format!("Failed to read file: {}", e))
                .with_file(&file)],
        ),
        Ok(bytes) => match inspect(&bytes) {
            Ok(info) => InfoOutput::success(&file, info),
            Err(e) => InfoOutput::failure(&file, vec![JsonError::from_audio(&e).with_file(&file)]),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
