//! Core WAV writing.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{AudioError, AudioResult};
use crate::wave::Wave;

use super::format::{BitDepth, WavFormat};
use super::pcm::write_sample;

/// Size of the canonical header written before the sample data.
pub const HEADER_SIZE: usize = 44;

/// Encodes a wave to a complete WAV byte stream.
///
/// Validation happens before any output is produced: `channels` must be 1 or
/// 2, `bit_depth` one of 8/16/24/32 and `sample_rate` non-zero. The shorter
/// channel is padded with silence for the duration of the call only; the wave
/// itself is never modified, so repeated encodes are byte-identical.
///
/// # Errors
/// `UnsupportedChannelCount`, `UnsupportedBitDepth`, `InvalidSampleRate`, or
/// `DataTooLarge` if the data chunk would not fit a 32-bit size field.
pub fn encode(wave: &Wave, channels: u16, bit_depth: u16, sample_rate: u32) -> AudioResult<Vec<u8>> {
    encode_with_format(wave, &WavFormat::new(channels, bit_depth, sample_rate))
}

/// Encodes a wave using a [`WavFormat`].
pub fn encode_with_format(wave: &Wave, format: &WavFormat) -> AudioResult<Vec<u8>> {
    let depth = format.validate()?;
    let data_size = data_chunk_size(wave.len(), format)?;

    let mut buffer = Vec::with_capacity(HEADER_SIZE + data_size as usize);
    write_header(&mut buffer, format, data_size)?;
    write_frames(&mut buffer, wave, format, depth)?;
    Ok(buffer)
}

/// Writes a complete WAV stream to a writer.
///
/// Parameters are validated before the first byte is written. Unbuffered
/// writers should be wrapped in a `BufWriter`; samples are written one at a
/// time.
pub fn write_wav<W: Write>(writer: &mut W, wave: &Wave, format: &WavFormat) -> AudioResult<()> {
    let depth = format.validate()?;
    let data_size = data_chunk_size(wave.len(), format)?;

    write_header(writer, format, data_size)?;
    write_frames(writer, wave, format, depth)?;
    Ok(())
}

/// Size of the data chunk for `frames` frames: only the channels actually
/// written are counted.
fn data_chunk_size(frames: usize, format: &WavFormat) -> AudioResult<u32> {
    let bytes = frames as u64 * u64::from(format.block_align());
    match u32::try_from(bytes) {
        // The RIFF size field holds 36 + data size.
        Ok(size) if size <= u32::MAX - 36 => Ok(size),
        _ => Err(AudioError::DataTooLarge { bytes }),
    }
}

/// Writes the 44-byte RIFF/`fmt `/`data` header.
fn write_header<W: Write>(writer: &mut W, format: &WavFormat, data_size: u32) -> AudioResult<()> {
    // Total file size minus the 8 bytes of "RIFF" + size.
    let riff_size = 36 + data_size;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_u32::<LittleEndian>(riff_size)?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_u32::<LittleEndian>(16)?; // Chunk size (16 for PCM)
    writer.write_u16::<LittleEndian>(1)?; // Audio format (1 = PCM)
    writer.write_u16::<LittleEndian>(format.channels)?;
    writer.write_u32::<LittleEndian>(format.sample_rate)?;
    writer.write_u32::<LittleEndian>(format.byte_rate())?;
    writer.write_u16::<LittleEndian>(format.block_align())?;
    writer.write_u16::<LittleEndian>(format.bits_per_sample)?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_u32::<LittleEndian>(data_size)?;

    Ok(())
}

/// Writes interleaved frames. Mono output takes the left channel.
fn write_frames<W: Write>(
    writer: &mut W,
    wave: &Wave,
    format: &WavFormat,
    depth: BitDepth,
) -> AudioResult<()> {
    let stereo = format.is_stereo();
    for i in 0..wave.len() {
        let (left, right) = wave.frame(i);
        write_sample(writer, left, depth)?;
        if stereo {
            write_sample(writer, right, depth)?;
        }
    }
    Ok(())
}
