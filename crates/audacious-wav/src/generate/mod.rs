//! Generation of new sample data.
//!
//! Every generator is a pure function returning a fresh sample vector.
//! Samples use the wave's raw numeric range: `tone` produces unit amplitude
//! and callers scale it (for instance by [`BitDepth::full_scale`]) before
//! encoding to an integer format.
//!
//! [`BitDepth::full_scale`]: crate::wav::BitDepth::full_scale

mod waveform;


use rand::Rng;

use crate::error::{AudioError, AudioResult};
use crate::rng::create_keyed_rng;
use crate::wave::Sample;

pub use waveform::WaveForm;

/// Number of samples covering `duration_ms` at `sample_rate`.
///
/// Rounds half up: `floor(duration_ms * sample_rate / 1000 + 0.5)`.
/// Negative or non-finite durations yield zero samples.
pub fn samples_for_duration(duration_ms: f64, sample_rate: u32) -> usize {
    let exact = duration_ms * f64::from(sample_rate) / 1000.0;
    if exact.is_finite() && exact > 0.0 {
        (exact + 0.5).floor() as usize
    } else {
        0
    }
}

/// `count` samples of silence.
pub fn silence(count: usize) -> Vec<Sample> {
    vec![0.0; count]
}

/// `count` samples of white noise spanning the full sample range.
///
/// Each sample is `(u - 0.5) * f32::MAX` for a uniform `u` in `[0, 1)`. The
/// sequence is fully determined by `seed`.
pub fn noise(count: usize, seed: u32) -> Vec<Sample> {
    let mut rng = create_keyed_rng(seed, "noise");
    (0..count)
        .map(|_| (rng.gen::<f32>() - 0.5) * f32::MAX)
        .collect()
}

/// A unit-amplitude periodic tone.
///
/// The phase of sample `i` is `frac(i * frequency_hz / sample_rate)`, so long
/// tones do not drift. Frequencies above Nyquist alias.
///
/// # Errors
/// - `InvalidFrequency` if `frequency_hz` is not a finite positive number
/// - `InvalidSampleRate` if `sample_rate` is zero
/// - `InvalidParameter` if `duration_ms` is negative or not finite
pub fn tone(
    waveform: WaveForm,
    frequency_hz: f64,
    duration_ms: f64,
    sample_rate: u32,
) -> AudioResult<Vec<Sample>> {
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return Err(AudioError::InvalidFrequency { freq: frequency_hz });
    }
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    if !duration_ms.is_finite() || duration_ms < 0.0 {
        return Err(AudioError::invalid_param(
            "duration_ms",
            format!("must be a finite, non-negative number, got {}", duration_ms),
        ));
    }

    let count = samples_for_duration(duration_ms, sample_rate);
    let step = frequency_hz / f64::from(sample_rate);

    Ok((0..count)
        .map(|i| waveform.at((i as f64 * step).fract()) as Sample)
        .collect())
}
