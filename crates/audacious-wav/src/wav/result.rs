//! WAV file generation result type.

use crate::error::AudioResult;
use crate::wave::Wave;

use super::format::{BitDepth, WavFormat};
use super::pcm::hash_pcm;
use super::writer::{encode_with_format, HEADER_SIZE};

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Number of channels written.
    pub channels: u16,
    /// Sample encoding.
    pub bit_depth: BitDepth,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a wave and hashes its data chunk.
    pub fn from_wave(wave: &Wave, format: &WavFormat) -> AudioResult<Self> {
        let bit_depth = format.validate()?;
        let wav_data = encode_with_format(wave, format)?;
        let pcm_hash = hash_pcm(&wav_data[HEADER_SIZE..]);

        Ok(Self {
            wav_data,
            pcm_hash,
            channels: format.channels,
            bit_depth,
            sample_rate: format.sample_rate,
            num_samples: wave.len(),
        })
    }

    /// Returns true if two channels were written.
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
