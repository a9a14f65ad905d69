//! Audacious CLI - generate, mix and inspect WAV files
//!
//! This binary is a thin file I/O layer over `audacious_wav`.

use clap::Parser;
use std::process::ExitCode;

mod cli_args;

use audacious_cli::commands;
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tone {
            waveform,
            frequency,
            duration_ms,
            amplitude,
            output,
            encode,
        } => commands::generate::run_tone(
            waveform,
            frequency,
            duration_ms,
            amplitude,
            &output,
            &encode.format(),
        ),
        Commands::Noise {
            duration_ms,
            seed,
            amplitude,
            output,
            encode,
        } => commands::generate::run_noise(duration_ms, seed, amplitude, &output, &encode.format()),
        Commands::Silence {
            duration_ms,
            output,
            encode,
        } => commands::generate::run_silence(duration_ms, &output, &encode.format()),
        Commands::Mix {
            a,
            b,
            bias,
            output,
            encode,
        } => commands::mix::run(&a, &b, bias, &output, &encode.format()),
        Commands::Concat {
            inputs,
            output,
            encode,
        } => commands::concat::run(&inputs, &output, &encode.format()),
        Commands::Info { input, json } => commands::info::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
