//! CLI argument definitions for the audacious command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};

use audacious_wav::{WavFormat, WaveForm};

/// Audacious - generate, mix and inspect WAV files
#[derive(Parser)]
#[command(name = "audacious")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Encoding parameters shared by every command that writes a file.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EncodeArgs {
    /// Output channels (1 or 2)
    #[arg(long, default_value_t = 2)]
    pub channels: u16,

    /// Output bits per sample (8, 16, 24 or 32)
    #[arg(long, default_value_t = 16)]
    pub bit_depth: u16,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = 44100)]
    pub sample_rate: u32,
}

impl EncodeArgs {
    pub fn format(&self) -> WavFormat {
        WavFormat::new(self.channels, self.bit_depth, self.sample_rate)
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a periodic tone
    Tone {
        /// Wave shape (cosine, sawtooth, sine, square, triangle)
        #[arg(short, long, default_value_t = WaveForm::Sine)]
        waveform: WaveForm,

        /// Frequency in Hz
        #[arg(short, long)]
        frequency: f64,

        /// Length in milliseconds
        #[arg(short, long)]
        duration_ms: f64,

        /// Peak level as a fraction of the bit depth's full scale
        #[arg(long, default_value_t = 0.5)]
        amplitude: f32,

        /// Output file path (`.wav` appended if missing)
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        encode: EncodeArgs,
    },

    /// Generate seeded white noise
    Noise {
        /// Length in milliseconds
        #[arg(short, long)]
        duration_ms: f64,

        /// Noise seed
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Peak level as a fraction of the bit depth's full scale
        #[arg(long, default_value_t = 1.0)]
        amplitude: f32,

        /// Output file path (`.wav` appended if missing)
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        encode: EncodeArgs,
    },

    /// Generate silence
    Silence {
        /// Length in milliseconds
        #[arg(short, long)]
        duration_ms: f64,

        /// Output file path (`.wav` appended if missing)
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        encode: EncodeArgs,
    },

    /// Mix two WAV files
    Mix {
        /// First input file
        #[arg(short, long)]
        a: String,

        /// Second input file
        #[arg(short, long)]
        b: String,

        /// Mix position: 0 keeps only A, 1 keeps only B, 0.5 sums both
        #[arg(long, default_value_t = 0.5)]
        bias: f32,

        /// Output file path (`.wav` appended if missing)
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        encode: EncodeArgs,
    },

    /// Join WAV files end to end
    Concat {
        /// Input files, in order
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output file path (`.wav` appended if missing)
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        encode: EncodeArgs,
    },

    /// Print the format and chunk layout of a WAV file
    Info {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}
