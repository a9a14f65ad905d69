//! WAV file format parameters.

use serde::{Deserialize, Serialize};

use crate::error::{AudioError, AudioResult};

/// Supported PCM sample widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum BitDepth {
    /// One byte: written as a signed integer, read back as its unsigned value.
    Eight,
    /// Signed 16-bit integer, little-endian.
    Sixteen,
    /// Signed 24-bit integer, little-endian, three bytes.
    TwentyFour,
    /// IEEE-754 single precision, little-endian.
    ThirtyTwo,
}

impl BitDepth {
    /// All supported depths, narrowest first.
    pub const ALL: [BitDepth; 4] = [
        BitDepth::Eight,
        BitDepth::Sixteen,
        BitDepth::TwentyFour,
        BitDepth::ThirtyTwo,
    ];

    /// Parses a bits-per-sample value.
    pub fn from_bits(bits: u16) -> AudioResult<Self> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            24 => Ok(BitDepth::TwentyFour),
            32 => Ok(BitDepth::ThirtyTwo),
            _ => Err(AudioError::UnsupportedBitDepth { bits }),
        }
    }

    /// Bits per sample.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::TwentyFour => 24,
            BitDepth::ThirtyTwo => 32,
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes(self) -> usize {
        usize::from(self.bits() / 8)
    }

    /// Largest magnitude the encoding stores without overflow.
    ///
    /// Samples are narrowed without rescaling, so a unit-amplitude signal
    /// must be multiplied by this before encoding to use the full range.
    pub fn full_scale(self) -> f32 {
        match self {
            BitDepth::Eight => i8::MAX as f32,
            BitDepth::Sixteen => i16::MAX as f32,
            BitDepth::TwentyFour => 8_388_607.0,
            BitDepth::ThirtyTwo => 1.0,
        }
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = AudioError;

    fn try_from(bits: u16) -> AudioResult<Self> {
        Self::from_bits(bits)
    }
}

impl From<BitDepth> for u16 {
    fn from(depth: BitDepth) -> u16 {
        depth.bits()
    }
}

/// WAV file format parameters.
///
/// Fields are kept raw so that out-of-range values can be represented and
/// rejected by [`WavFormat::validate`] before anything is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (8, 16, 24 or 32).
    pub bits_per_sample: u16,
}

impl Default for WavFormat {
    fn default() -> Self {
        Self::stereo(44100)
    }
}

impl WavFormat {
    /// Creates a format from raw parameters without validating them.
    pub fn new(channels: u16, bits_per_sample: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample,
        }
    }

    /// Creates a 16-bit mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(1, 16, sample_rate)
    }

    /// Creates a 16-bit stereo format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(2, 16, sample_rate)
    }

    /// Returns a copy with a different bit depth.
    pub fn with_bits_per_sample(self, bits_per_sample: u16) -> Self {
        Self {
            bits_per_sample,
            ..self
        }
    }

    /// Checks channels, bit depth and sample rate, in that order.
    pub fn validate(&self) -> AudioResult<BitDepth> {
        if !matches!(self.channels, 1 | 2) {
            return Err(AudioError::UnsupportedChannelCount {
                channels: self.channels,
            });
        }
        let depth = BitDepth::from_bits(self.bits_per_sample)?;
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        Ok(depth)
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    ///
    /// Wraps on overflow, as the 16-bit header field would.
    pub fn block_align(&self) -> u16 {
        self.channels.wrapping_mul(self.bytes_per_sample())
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// Wraps on overflow, as the 32-bit header field would.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.wrapping_mul(u32::from(self.block_align()))
    }

    /// Returns true for two channels.
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }
}
