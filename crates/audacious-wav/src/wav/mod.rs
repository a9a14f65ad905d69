//! RIFF/WAVE PCM codec.
//!
//! Encodes a [`Wave`](crate::Wave) as mono or stereo PCM at 8, 16, 24 or 32
//! bits, and decodes such files back. Output carries no timestamps or
//! variable metadata, so identical input always encodes to identical bytes;
//! the PCM hash can be used to compare files by audio content alone.
//!
//! Layout written (little-endian throughout):
//!
//! ```text
//! "RIFF" <36 + data size> "WAVE"
//! "fmt " <16> <1 = PCM> <channels> <sample rate> <byte rate> <block align> <bits>
//! "data" <data size> <interleaved samples>
//! ```

mod builder;
mod file;
mod format;
mod pcm;
mod reader;
mod result;
mod writer;


// Re-export public API
pub use builder::WavWriter;
pub use file::{read_wav_file, wav_path, write_wav_file};
pub use format::{BitDepth, WavFormat};
pub use pcm::{compute_pcm_hash, hash_pcm, pcm_to_samples, samples_to_pcm, write_sample};
pub use reader::{decode, decode_with_header, extract_pcm_data, read_header, ChunkInfo, WavHeader};
pub use result::WavResult;
pub use writer::{encode, encode_with_format, write_wav, HEADER_SIZE};
