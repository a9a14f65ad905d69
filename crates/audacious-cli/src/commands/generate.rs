//! Generate commands: tone, noise and silence.
//!
//! Amplitudes are fractions of the output bit depth's full scale, so
//! `--amplitude 0.5` is half of `i16::MAX` for a 16-bit file and `0.5` for a
//! 32-bit float file.

use anyhow::Result;
use std::process::ExitCode;

use audacious_wav::generate::{self, samples_for_duration};
use audacious_wav::{WavFormat, Wave, WaveForm};

use super::reporting::write_output;

/// Peak magnitude of the raw noise generator.
const NOISE_PEAK: f32 = f32::MAX / 2.0;

/// Run the tone command
///
/// # Arguments
/// * `waveform` - Wave shape
/// * `frequency` - Frequency in Hz
/// * `duration_ms` - Length in milliseconds
/// * `amplitude` - Peak level relative to full scale
/// * `output` - Output path (`.wav` appended if missing)
/// * `format` - Encoding parameters
pub fn run_tone(
    waveform: WaveForm,
    frequency: f64,
    duration_ms: f64,
    amplitude: f32,
    output: &str,
    format: &WavFormat,
) -> Result<ExitCode> {
    let depth = format.validate()?;
    let samples = generate::tone(waveform, frequency, duration_ms, format.sample_rate)?;
    let wave = Wave::from_mono(&samples).scaled(amplitude * depth.full_scale());

    write_output(output, &wave, format)?;
    Ok(ExitCode::SUCCESS)
}

/// Run the noise command
///
/// The same seed always produces the same file.
pub fn run_noise(
    duration_ms: f64,
    seed: u32,
    amplitude: f32,
    output: &str,
    format: &WavFormat,
) -> Result<ExitCode> {
    let depth = format.validate()?;
    let count = samples_for_duration(duration_ms, format.sample_rate);
    let samples = generate::noise(count, seed);
    let wave = Wave::from_mono(&samples).scaled(amplitude * depth.full_scale() / NOISE_PEAK);

    write_output(output, &wave, format)?;
    Ok(ExitCode::SUCCESS)
}

/// Run the silence command
pub fn run_silence(duration_ms: f64, output: &str, format: &WavFormat) -> Result<ExitCode> {
    format.validate()?;
    let count = samples_for_duration(duration_ms, format.sample_rate);
    let wave = Wave::from_mono(&generate::silence(count));

    write_output(output, &wave, format)?;
    Ok(ExitCode::SUCCESS)
}
