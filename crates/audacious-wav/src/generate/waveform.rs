//! Periodic waveform shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AudioError;

/// Basic periodic waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveForm {
    /// Cosine wave, starting at +1.
    Cosine,
    /// Rising ramp from -1 to +1.
    Sawtooth,
    /// Sine wave, starting at 0.
    Sine,
    /// +1 for the first half period, -1 for the second.
    Square,
    /// Linear ramp from -1 up to +1 and back.
    Triangle,
}

impl WaveForm {
    /// All waveforms, in declaration order.
    pub const ALL: [WaveForm; 5] = [
        WaveForm::Cosine,
        WaveForm::Sawtooth,
        WaveForm::Sine,
        WaveForm::Square,
        WaveForm::Triangle,
    ];

    /// Lowercase name, as used in serialized form and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            WaveForm::Cosine => "cosine",
            WaveForm::Sawtooth => "sawtooth",
            WaveForm::Sine => "sine",
            WaveForm::Square => "square",
            WaveForm::Triangle => "triangle",
        }
    }

    /// Evaluates the waveform at a phase in `[0, 1)`.
    ///
    /// Output is in `[-1, 1]`.
    #[inline]
    pub fn at(self, phase: f64) -> f64 {
        match self {
            WaveForm::Cosine => (std::f64::consts::TAU * phase).cos(),
            WaveForm::Sawtooth => 2.0 * phase - 1.0,
            WaveForm::Sine => (std::f64::consts::TAU * phase).sin(),
            WaveForm::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            WaveForm::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
        }
    }
}

impl fmt::Display for WaveForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaveForm {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WaveForm::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                AudioError::invalid_param(
                    "waveform",
                    format!(
                        "unknown waveform '{}' (expected one of: cosine, sawtooth, sine, square, triangle)",
                        s
                    ),
                )
            })
    }
}
