//! RIFF/WAVE parsing.
//!
//! The body after the 12-byte RIFF header is scanned once into a chunk table;
//! `fmt ` and `data` are then located in that table (first occurrence wins)
//! and read by seeking back to their recorded offsets. Unknown chunks are
//! skipped by their declared size.

use std::io::{Cursor, Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{AudioError, AudioResult};
use crate::wave::{Sample, Wave};

use super::format::{BitDepth, WavFormat};
use super::pcm::pcm_to_samples;

/// Minimum body size of a PCM `fmt ` chunk.
const FMT_BODY_SIZE: u32 = 16;

/// A chunk recorded during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkInfo {
    /// Four-character chunk id.
    pub id: [u8; 4],
    /// Declared body size in bytes.
    pub size: u32,
    /// Stream offset of the body (just past the size field).
    pub offset: usize,
}

impl ChunkInfo {
    /// The chunk id as text, with non-ASCII bytes replaced.
    pub fn id_str(&self) -> String {
        fourcc(&self.id)
    }

    /// Byte range of the chunk body within the stream.
    pub fn body(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.size as usize
    }
}

/// Parsed header information of a WAV stream.
#[derive(Debug, Clone, PartialEq)]
pub struct WavHeader {
    /// Channels, sample rate and bits per sample from `fmt `.
    pub format: WavFormat,
    /// Validated bit depth.
    pub bit_depth: BitDepth,
    /// Byte rate as stored in the file (not checked).
    pub byte_rate: u32,
    /// Block align as stored in the file (not checked).
    pub block_align: u16,
    /// Every chunk found in the RIFF body, in stream order.
    pub chunks: Vec<ChunkInfo>,
    /// The `data` chunk.
    pub data: ChunkInfo,
}

impl WavHeader {
    /// Number of decoded samples across all channels, counting a trailing
    /// partial frame.
    pub fn num_samples(&self) -> usize {
        (self.data.size as usize).div_ceil(self.bit_depth.bytes())
    }

    /// Number of samples in the longer channel after de-interleaving.
    pub fn num_frames(&self) -> usize {
        if self.format.is_stereo() {
            self.num_samples().div_ceil(2)
        } else {
            self.num_samples()
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames() as f64 / self.format.sample_rate as f64
    }
}

/// Decodes a complete WAV byte stream into a new [`Wave`].
///
/// Mono data is copied into both channels; stereo data is split
/// left/right in stream order.
///
/// # Errors
/// - `BadHeader` if the stream does not start with `RIFF`, the RIFF size
///   does not match the stream length, or the form type is not `WAVE`
/// - `TruncatedChunk` if any chunk runs past the end of the stream
/// - `MissingChunk` if `fmt ` or `data` is absent
/// - `UnsupportedCompression`, `UnsupportedChannelCount`,
///   `InvalidSampleRate`, `UnsupportedBitDepth` for rejected `fmt ` fields
pub fn decode(wav_data: &[u8]) -> AudioResult<Wave> {
    decode_with_header(wav_data).map(|(_, wave)| wave)
}

/// Decodes a WAV stream and also returns its parsed header.
pub fn decode_with_header(wav_data: &[u8]) -> AudioResult<(WavHeader, Wave)> {
    let header = read_header(wav_data)?;
    let raw = &wav_data[header.data.body()];
    let samples = pcm_to_samples(raw, header.bit_depth);
    let wave = deinterleave(samples, header.format.channels);
    Ok((header, wave))
}

/// Parses and validates the RIFF header, chunk table and `fmt ` chunk
/// without converting any samples.
pub fn read_header(wav_data: &[u8]) -> AudioResult<WavHeader> {
    let mut cursor = Cursor::new(wav_data);

    let riff = read_fourcc(&mut cursor);
    if riff != Some(*b"RIFF") {
        return Err(AudioError::bad_header(format!(
            "expected RIFF, found {}",
            riff.map(|id| fourcc(&id)).unwrap_or_else(|| "end of stream".into())
        )));
    }

    let riff_size = cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| AudioError::bad_header("size mismatch: stream ends inside RIFF size"))?;
    let expected = (wav_data.len() - 8) as u64;
    if u64::from(riff_size) != expected {
        return Err(AudioError::bad_header(format!(
            "size mismatch: RIFF size {} but stream holds {} bytes after it",
            riff_size, expected
        )));
    }

    let form = read_fourcc(&mut cursor);
    if form != Some(*b"WAVE") {
        return Err(AudioError::bad_header(format!(
            "expected WAVE, found {}",
            form.map(|id| fourcc(&id)).unwrap_or_else(|| "end of stream".into())
        )));
    }

    let chunks = scan_chunks(&mut cursor)?;

    let fmt = find_chunk(&chunks, b"fmt ").ok_or_else(|| AudioError::missing_chunk("fmt "))?;
    if fmt.size < FMT_BODY_SIZE {
        return Err(AudioError::TruncatedChunk {
            chunk: fmt.id_str(),
            offset: fmt.offset,
            size: FMT_BODY_SIZE as usize,
            available: fmt.size as usize,
        });
    }
    cursor.seek(SeekFrom::Start(fmt.offset as u64))?;

    let audio_format = cursor.read_u16::<LittleEndian>()?;
    if audio_format != 1 {
        return Err(AudioError::UnsupportedCompression {
            format_code: audio_format,
        });
    }
    let channels = cursor.read_u16::<LittleEndian>()?;
    if !matches!(channels, 1 | 2) {
        return Err(AudioError::UnsupportedChannelCount { channels });
    }
    let sample_rate = cursor.read_u32::<LittleEndian>()?;
    if sample_rate < 1 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    let byte_rate = cursor.read_u32::<LittleEndian>()?;
    let block_align = cursor.read_u16::<LittleEndian>()?;
    let bits_per_sample = cursor.read_u16::<LittleEndian>()?;
    let bit_depth = BitDepth::from_bits(bits_per_sample)?;

    let data = find_chunk(&chunks, b"data")
        .ok_or_else(|| AudioError::missing_chunk("data"))?
        .clone();
    let available = wav_data.len().saturating_sub(data.offset);
    if data.size as usize > available {
        return Err(AudioError::TruncatedChunk {
            chunk: data.id_str(),
            offset: data.offset,
            size: data.size as usize,
            available,
        });
    }

    Ok(WavHeader {
        format: WavFormat::new(channels, bits_per_sample, sample_rate),
        bit_depth,
        byte_rate,
        block_align,
        chunks,
        data,
    })
}

/// Returns the raw bytes of the `data` chunk.
///
/// Used for comparing WAV files by their audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> AudioResult<&[u8]> {
    let header = read_header(wav_data)?;
    Ok(&wav_data[header.data.body()])
}

/// Records every chunk header from the cursor position to the end of the
/// stream. A chunk whose declared size passes the end is an error.
fn scan_chunks(cursor: &mut Cursor<&[u8]>) -> AudioResult<Vec<ChunkInfo>> {
    let len = cursor.get_ref().len();
    let mut chunks = Vec::new();

    while len - cursor.position() as usize > 4 {
        let mut id = [0u8; 4];
        cursor.read_exact(&mut id)?;

        let size_offset = cursor.position() as usize;
        let size = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| AudioError::TruncatedChunk {
                chunk: fourcc(&id),
                offset: size_offset,
                size: 4,
                available: len - size_offset,
            })?;

        let offset = cursor.position() as usize;
        let available = len - offset;
        if size as usize > available {
            return Err(AudioError::TruncatedChunk {
                chunk: fourcc(&id),
                offset,
                size: size as usize,
                available,
            });
        }

        chunks.push(ChunkInfo { id, size, offset });
        cursor.seek(SeekFrom::Current(i64::from(size)))?;
    }

    Ok(chunks)
}

fn find_chunk<'a>(chunks: &'a [ChunkInfo], id: &[u8; 4]) -> Option<&'a ChunkInfo> {
    chunks.iter().find(|chunk| &chunk.id == id)
}

fn read_fourcc(cursor: &mut Cursor<&[u8]>) -> Option<[u8; 4]> {
    let mut id = [0u8; 4];
    cursor.read_exact(&mut id).ok().map(|_| id)
}

fn fourcc(id: &[u8; 4]) -> String {
    id.iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
        .collect()
}

/// Splits interleaved samples into a wave.
fn deinterleave(samples: Vec<Sample>, channels: u16) -> Wave {
    if channels == 1 {
        return Wave::from(samples);
    }

    let left = samples.iter().step_by(2).copied().collect();
    let right = samples.iter().skip(1).step_by(2).copied().collect();
    Wave::from_channels(left, right)
}
