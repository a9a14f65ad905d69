//! Audacious CLI library.
//!
//! Command implementations for the `audacious` binary. Every command reads
//! and writes whole WAV files through `audacious_wav`; nothing is played
//! back.

pub mod commands;
