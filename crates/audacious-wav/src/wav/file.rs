//! Reading and writing WAV files on disk.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::AudioResult;
use crate::wave::Wave;

use super::format::WavFormat;
use super::reader::decode;
use super::writer::write_wav;

/// Returns `path` with `.wav` appended unless it already has that extension.
pub fn wav_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "wav") {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".wav");
    PathBuf::from(name)
}

/// Reads and decodes a WAV file.
pub fn read_wav_file(path: impl AsRef<Path>) -> AudioResult<Wave> {
    let bytes = fs::read(wav_path(path.as_ref()))?;
    decode(&bytes)
}

/// Encodes `wave` into a WAV file, returning the path actually written.
///
/// The format is validated before the file is created.
pub fn write_wav_file(path: impl AsRef<Path>, wave: &Wave, format: &WavFormat) -> AudioResult<PathBuf> {
    format.validate()?;
    let path = wav_path(path.as_ref());
    let mut writer = BufWriter::new(fs::File::create(&path)?);
    write_wav(&mut writer, wave, format)?;
    writer.flush()?;
    Ok(path)
}
