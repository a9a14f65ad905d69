//! Sample narrowing/widening and PCM data hashing.
//!
//! Narrowing is a plain numeric cast into the target width: no rescaling
//! from the float range, truncation toward zero, saturation at the integer
//! bounds (Rust `as` semantics; NaN becomes 0). The 24-bit path casts to
//! `i32` and keeps the low three bytes, so values beyond ±2^23 wrap.
//!
//! 8-bit is asymmetric: encoding writes a signed byte, decoding takes the
//! byte's unsigned value, so negative 8-bit samples come back as `256 + x`.

use std::io::{self, Write};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::error::AudioResult;
use crate::wave::Sample;

use super::format::BitDepth;
use super::reader::extract_pcm_data;

/// Writes one sample in the given encoding.
#[inline]
pub fn write_sample<W: Write>(writer: &mut W, sample: Sample, depth: BitDepth) -> io::Result<()> {
    match depth {
        BitDepth::Eight => writer.write_i8(sample as i8),
        BitDepth::Sixteen => writer.write_i16::<LittleEndian>(sample as i16),
        BitDepth::TwentyFour => {
            let bytes = (sample as i32).to_le_bytes();
            writer.write_all(&bytes[..3])
        }
        BitDepth::ThirtyTwo => writer.write_f32::<LittleEndian>(sample),
    }
}

/// Encodes samples into a fresh byte buffer.
pub fn samples_to_pcm(samples: &[Sample], depth: BitDepth) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * depth.bytes());
    for &sample in samples {
        write_sample(&mut pcm, sample, depth).expect("writing to Vec should not fail");
    }
    pcm
}

/// Widens one encoded frame back to a sample.
#[inline]
fn read_sample(frame: &[u8], depth: BitDepth) -> Sample {
    match depth {
        BitDepth::Eight => frame[0] as Sample,
        BitDepth::Sixteen => LittleEndian::read_i16(frame) as Sample,
        BitDepth::TwentyFour => LittleEndian::read_i24(frame) as Sample,
        BitDepth::ThirtyTwo => LittleEndian::read_f32(frame),
    }
}

/// Converts raw PCM bytes to samples in stream order.
///
/// A trailing partial frame is completed with zero bytes rather than dropped.
pub fn pcm_to_samples(raw: &[u8], depth: BitDepth) -> Vec<Sample> {
    let width = depth.bytes();
    let padded;
    let raw = if raw.len() % width == 0 {
        raw
    } else {
        let mut bytes = raw.to_vec();
        bytes.resize(raw.len().next_multiple_of(width), 0);
        padded = bytes;
        &padded[..]
    };

    raw.chunks_exact(width)
        .map(|frame| read_sample(frame, depth))
        .collect()
}

/// Computes the BLAKE3 hash of a WAV file's `data` chunk.
///
/// Two encodes with identical audio hash identically regardless of any
/// extra chunks in the container.
pub fn compute_pcm_hash(wav_data: &[u8]) -> AudioResult<String> {
    let pcm = extract_pcm_data(wav_data)?;
    Ok(hash_pcm(pcm))
}

/// Hashes raw PCM bytes.
pub fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowing_truncates_toward_zero() {
        let pcm = samples_to_pcm(&[1.9, -1.9, 300.7], BitDepth::Sixteen);
        let values: Vec<i16> = pcm
            .chunks_exact(2)
            .map(|c| i16::from_le_bytes([c[0], c[1]]))
            .collect();
        assert_eq!(values, vec![1, -1, 300]);
    }

    #[test]
    fn test_narrowing_saturates_at_bounds() {
        let pcm = samples_to_pcm(&[40000.0, -40000.0, f32::NAN], BitDepth::Sixteen);
        assert_eq!(&pcm[0..2], &i16::MAX.to_le_bytes());
        assert_eq!(&pcm[2..4], &i16::MIN.to_le_bytes());
        assert_eq!(&pcm[4..6], &[0, 0]);

        let pcm = samples_to_pcm(&[200.0, -200.0], BitDepth::Eight);
        assert_eq!(pcm, vec![0x7F, 0x80]);
    }

    #[test]
    fn test_24bit_keeps_low_three_bytes() {
        let pcm = samples_to_pcm(&[1.0, -1.0, 8_388_607.0, 16_777_216.0], BitDepth::TwentyFour);
        assert_eq!(pcm.len(), 12);
        assert_eq!(&pcm[0..3], &[0x01, 0x00, 0x00]);
        assert_eq!(&pcm[3..6], &[0xFF, 0xFF, 0xFF]);
        assert_eq!(&pcm[6..9], &[0xFF, 0xFF, 0x7F]);
        // 2^24 wraps to zero once the fourth byte is dropped.
        assert_eq!(&pcm[9..12], &[0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_32bit_is_ieee_float() {
        let pcm = samples_to_pcm(&[0.25, -123456.5], BitDepth::ThirtyTwo);
        assert_eq!(&pcm[0..4], &0.25f32.to_le_bytes());
        assert_eq!(&pcm[4..8], &(-123456.5f32).to_le_bytes());
    }

    #[test]
    fn test_widening_each_depth() {
        assert_eq!(pcm_to_samples(&[0x00, 0x7F, 0x80, 0xFF], BitDepth::Eight), vec![0.0, 127.0, 128.0, 255.0]);
        assert_eq!(pcm_to_samples(&[0x00, 0x00, 0xFF, 0x7F], BitDepth::Sixteen), vec![0.0, 32767.0]);
        assert_eq!(
            pcm_to_samples(&[0xFF, 0xFF, 0x7F, 0x00, 0x00, 0x80], BitDepth::TwentyFour),
            vec![8_388_607.0, -8_388_608.0]
        );
        assert_eq!(pcm_to_samples(&1.5f32.to_le_bytes(), BitDepth::ThirtyTwo), vec![1.5]);
    }

    #[test]
    fn test_partial_frame_is_zero_padded() {
        // 0x34 completes as 0x0034.
        assert_eq!(pcm_to_samples(&[0x01, 0x00, 0x34], BitDepth::Sixteen), vec![1.0, 52.0]);
        // A lone low byte of a 24-bit frame.
        assert_eq!(pcm_to_samples(&[0x05], BitDepth::TwentyFour), vec![5.0]);
    }

    #[test]
    fn test_8bit_negative_samples_read_back_unsigned() {
        let pcm = samples_to_pcm(&[-1.0, -128.0, 5.0], BitDepth::Eight);
        assert_eq!(pcm, vec![0xFF, 0x80, 0x05]);
        assert_eq!(pcm_to_samples(&pcm, BitDepth::Eight), vec![255.0, 128.0, 5.0]);
    }

    #[test]
    fn test_24bit_widening_inverts_narrowing() {
        let samples = [0.0, 1.0, -1.0, 1234567.0, -8_388_608.0];
        let pcm = samples_to_pcm(&samples, BitDepth::TwentyFour);
        assert_eq!(pcm_to_samples(&pcm, BitDepth::TwentyFour), samples.to_vec());
    }

    #[test]
    fn test_hash_pcm_is_hex_blake3() {
        let hash = hash_pcm(&[1, 2, 3]);
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, hash_pcm(&[1, 2, 3]));
        assert_ne!(hash, hash_pcm(&[1, 2, 4]));
    }
}
