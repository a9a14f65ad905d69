//! Mix command implementation
//!
//! Mixes two WAV files channel by channel and encodes the result.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use audacious_wav::modify::mix_waves;
use audacious_wav::WavFormat;

use super::reporting::{read_input, write_output};

/// Run the mix command
///
/// # Arguments
/// * `path_a` - First input (bias 0 keeps only this one)
/// * `path_b` - Second input (bias 1 keeps only this one)
/// * `bias` - Mix position from 0 to 1
/// * `output` - Output path
/// * `format` - Encoding parameters
pub fn run(path_a: &str, path_b: &str, bias: f32, output: &str, format: &WavFormat) -> Result<ExitCode> {
    format.validate()?;
    let a = read_input(path_a)?;
    let b = read_input(path_b)?;

    println!("{}", "Mixing files:".cyan().bold());
    println!("  {} {} ({} frames)", "A:".dimmed(), path_a, a.len());
    println!("  {} {} ({} frames)", "B:".dimmed(), path_b, b.len());
    println!("  {} {}", "Bias:".dimmed(), bias);

    let mixed = mix_waves(&a, &b, bias)?;
    write_output(output, &mixed, format)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use audacious_wav::wav::{read_wav_file, write_wav_file};
    use audacious_wav::Wave;

    #[test]
    fn test_mix_files() {
        let dir = tempfile::tempdir().unwrap();
        let format = WavFormat::stereo(8000);
        let a = write_wav_file(dir.path().join("a"), &Wave::from_mono(&[100.0, 200.0]), &format).unwrap();
        let b = write_wav_file(dir.path().join("b"), &Wave::from_mono(&[10.0]), &format).unwrap();
        let out = dir.path().join("out").to_string_lossy().into_owned();

        let code = run(
            &a.to_string_lossy(),
            &b.to_string_lossy(),
            0.5,
            &out,
            &format,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let mixed = read_wav_file(&out).unwrap();
        assert_eq!(mixed.left(), &[110.0, 200.0]);
        assert_eq!(mixed.right(), &[110.0, 200.0]);
    }

    #[test]
    fn test_mix_rejects_bias_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let format = WavFormat::mono(8000);
        let a = write_wav_file(dir.path().join("a"), &Wave::from_mono(&[1.0]), &format).unwrap();
        let a = a.to_string_lossy();
        let out = dir.path().join("out").to_string_lossy().into_owned();

        assert!(run(&a, &a, 1.5, &out, &format).is_err());
        assert!(!dir.path().join("out.wav").exists());
    }

    #[test]
    fn test_mix_missing_input_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.wav").to_string_lossy().into_owned();
        let out = dir.path().join("out").to_string_lossy().into_owned();

        let err = run(&missing, &missing, 0.5, &out, &WavFormat::default()).unwrap_err();
        assert!(err.to_string().contains("nope.wav"));
    }
}
