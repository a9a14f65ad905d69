//! WAV file writer builder pattern.

use std::io::Write;

use crate::error::AudioResult;
use crate::wave::Wave;

use super::format::WavFormat;
use super::result::WavResult;
use super::writer::{encode_with_format, write_wav};

/// WAV file writer builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a writer for an explicit format.
    pub fn new(format: WavFormat) -> Self {
        Self { format }
    }

    /// Creates a new WAV writer with 16-bit mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(WavFormat::mono(sample_rate))
    }

    /// Creates a new WAV writer with 16-bit stereo format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(WavFormat::stereo(sample_rate))
    }

    /// Sets the bits per sample. Checked when encoding.
    pub fn bit_depth(mut self, bits_per_sample: u16) -> Self {
        self.format.bits_per_sample = bits_per_sample;
        self
    }

    /// The format this writer encodes with.
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// Encodes a wave to a byte vector.
    pub fn encode(&self, wave: &Wave) -> AudioResult<Vec<u8>> {
        encode_with_format(wave, &self.format)
    }

    /// Encodes a wave and records its PCM hash.
    pub fn encode_result(&self, wave: &Wave) -> AudioResult<WavResult> {
        WavResult::from_wave(wave, &self.format)
    }

    /// Streams a wave to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, wave: &Wave) -> AudioResult<()> {
        write_wav(writer, wave, &self.format)
    }
}
