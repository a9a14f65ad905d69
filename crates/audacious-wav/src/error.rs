//! Error types for sample buffers and the WAVE codec.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while manipulating, encoding or decoding audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The RIFF container header is malformed.
    #[error("bad RIFF header: {message}")]
    BadHeader {
        /// What was wrong with the header.
        message: String,
    },

    /// A required chunk is not present in the stream.
    #[error("missing '{chunk}' chunk")]
    MissingChunk {
        /// Four-character chunk id.
        chunk: String,
    },

    /// A chunk's declared size runs past the end of the stream.
    #[error("truncated '{chunk}' chunk at offset {offset}: declared {size} bytes, {available} available")]
    TruncatedChunk {
        /// Four-character chunk id (lossy ASCII).
        chunk: String,
        /// Offset of the chunk body in the stream.
        offset: usize,
        /// Declared body size.
        size: usize,
        /// Bytes actually available from `offset`.
        available: usize,
    },

    /// The `fmt ` chunk declares a non-PCM audio format.
    #[error("unsupported compression: format code {format_code} (only PCM = 1 is supported)")]
    UnsupportedCompression {
        /// The audio format tag that was found.
        format_code: u16,
    },

    /// Channel count other than mono or stereo.
    #[error("unsupported channel count: {channels} (expected 1 or 2)")]
    UnsupportedChannelCount {
        /// The rejected channel count.
        channels: u16,
    },

    /// Bit depth other than 8, 16, 24 or 32.
    #[error("unsupported bit depth: {bits} (expected 8, 16, 24 or 32)")]
    UnsupportedBitDepth {
        /// The rejected bits per sample.
        bits: u16,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Insert or slice indices fall outside a channel.
    #[error("index out of range: index {index}, count {count}, channel length {len}")]
    IndexOutOfRange {
        /// Requested start index.
        index: usize,
        /// Requested sample count.
        count: usize,
        /// Length of the offending channel.
        len: usize,
    },

    /// The encoded data chunk would not fit a 32-bit RIFF size field.
    #[error("data chunk too large for RIFF: {bytes} bytes")]
    DataTooLarge {
        /// Size the data chunk would have had.
        bytes: u64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error from the file helpers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a bad header error.
    pub fn bad_header(message: impl Into<String>) -> Self {
        Self::BadHeader {
            message: message.into(),
        }
    }

    /// Creates a missing chunk error.
    pub fn missing_chunk(chunk: impl Into<String>) -> Self {
        Self::MissingChunk {
            chunk: chunk.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::BadHeader { .. } => "WAV_001",
            AudioError::MissingChunk { .. } => "WAV_002",
            AudioError::TruncatedChunk { .. } => "WAV_003",
            AudioError::UnsupportedCompression { .. } => "WAV_004",
            AudioError::UnsupportedChannelCount { .. } => "WAV_005",
            AudioError::UnsupportedBitDepth { .. } => "WAV_006",
            AudioError::InvalidSampleRate { .. } => "WAV_007",
            AudioError::IndexOutOfRange { .. } => "WAV_008",
            AudioError::DataTooLarge { .. } => "WAV_009",
            AudioError::InvalidFrequency { .. } => "WAV_010",
            AudioError::InvalidParameter { .. } => "WAV_011",
            AudioError::Io(_) => "WAV_012",
        }
    }
}
