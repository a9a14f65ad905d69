//! Audacious WAV toolkit
//!
//! An in-memory stereo sample buffer and a RIFF/WAVE PCM codec.
//!
//! # Overview
//!
//! A [`Wave`] holds two independent channels of `f32` samples. It can be
//! appended to, inserted into, sliced and concatenated, and its channels may
//! differ in length; the shorter one is treated as silence when encoding.
//!
//! The [`wav`] module turns a wave into a canonical 44-byte-header WAV stream
//! (PCM, mono or stereo, 8/16/24/32 bits) and parses WAV streams back,
//! skipping unknown chunks.
//!
//! Samples are stored in the numeric range of the target encoding: a
//! 16-bit file stores `1000.0` as the integer `1000`, not as a fraction of
//! full scale. Values outside the target range saturate.
//!
//! # Determinism
//!
//! Encoding is byte-identical across runs: no timestamps or variable
//! metadata are written, and noise generation is seeded through PCG32 with
//! BLAKE3 seed derivation.
//!
//! # Example
//!
//! ```
//! use audacious_wav::{generate, wav, Wave, WaveForm};
//!
//! let samples = generate::tone(WaveForm::Sine, 440.0, 100.0, 44100)?;
//! let wave = Wave::from_mono(&samples).scaled(16000.0);
//!
//! let bytes = wav::encode(&wave, 2, 16, 44100)?;
//! let decoded = wav::decode(&bytes)?;
//! assert_eq!(decoded.len(), 4410);
//! # Ok::<(), audacious_wav::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`wave`] - The two-channel sample buffer
//! - [`wav`] - WAV encoding, decoding and file helpers
//! - [`generate`] - Silence, noise and periodic tones
//! - [`modify`] - Volume scaling and mixing
//! - [`utils`] - Sample count / time conversion
//! - [`rng`] - Deterministic RNG with seed derivation

pub mod error;
pub mod generate;
pub mod modify;
pub mod rng;
pub mod utils;
pub mod wav;
pub mod wave;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::WaveForm;
pub use wav::{decode, encode, BitDepth, WavFormat, WavResult, WavWriter};
pub use wave::{Sample, Wave};
