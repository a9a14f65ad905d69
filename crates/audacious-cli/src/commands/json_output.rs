//! JSON output types for machine-readable CLI output.
//!
//! `info --json` prints exactly one [`InfoOutput`] document. Failures carry
//! the codec's stable error codes (`WAV_xxx`) or a CLI code below.

use serde::{Deserialize, Serialize};

use audacious_wav::wav::{ChunkInfo, WavHeader};
use audacious_wav::AudioError;

/// Error codes for CLI operations.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WAV_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Converts a codec error, keeping its code.
    pub fn from_audio(err: &AudioError) -> Self {
        Self::new(err.code(), err.to_string())
    }

    /// Sets the file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A chunk found in the RIFF body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkOutput {
    /// Four-character id
    pub id: String,
    /// Declared body size
    pub size: u32,
    /// Offset of the body in the file
    pub offset: usize,
}

impl From<&ChunkInfo> for ChunkOutput {
    fn from(chunk: &ChunkInfo) -> Self {
        Self {
            id: chunk.id_str(),
            size: chunk.size,
            offset: chunk.offset,
        }
    }
}

/// Header details of an inspected file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfoResult {
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Byte rate as stored
    pub byte_rate: u32,
    /// Block align as stored
    pub block_align: u16,
    /// Samples per channel
    pub frames: usize,
    /// Duration in milliseconds
    pub duration_ms: f32,
    /// BLAKE3 hash of the data chunk
    pub pcm_hash: String,
    /// All chunks in file order
    pub chunks: Vec<ChunkOutput>,
}

impl InfoResult {
    /// Builds the result from a parsed header and its PCM hash.
    pub fn from_header(header: &WavHeader, pcm_hash: String) -> Self {
        let format = &header.format;
        Self {
            channels: format.channels,
            sample_rate: format.sample_rate,
            bits_per_sample: format.bits_per_sample,
            byte_rate: header.byte_rate,
            block_align: header.block_align,
            frames: header.num_frames(),
            duration_ms: audacious_wav::utils::time_by_samples(
                header.num_samples(),
                format.sample_rate,
                format.channels,
            ),
            pcm_hash,
            chunks: header.chunks.iter().map(ChunkOutput::from).collect(),
        }
    }
}

/// Output of `info --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfoOutput {
    /// Whether the file parsed
    pub success: bool,
    /// Inspected path
    pub file: String,
    /// Errors (empty on success)
    pub errors: Vec<JsonError>,
    /// Header details (absent on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InfoResult>,
}

impl InfoOutput {
    /// Creates a successful output.
    pub fn success(file: impl Into<String>, result: InfoResult) -> Self {
        Self {
            success: true,
            file: file.into(),
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(file: impl Into<String>, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            file: file.into(),
            errors,
            result: None,
        }
    }
}
