//! Runs the commands in sequence the way a shell session would.

use std::process::ExitCode;

use audacious_cli::commands::{concat, generate, info, mix};
use audacious_wav::wav::{read_header, read_wav_file};
use audacious_wav::{WavFormat, WaveForm};

#[test]
fn test_generate_mix_concat_inspect() {
    let dir = tempfile::tempdir().unwrap();
    let path = |name: &str| dir.path().join(name).to_string_lossy().into_owned();
    let format = WavFormat::stereo(22050);

    generate::run_tone(WaveForm::Sine, 440.0, 100.0, 0.5, &path("tone"), &format).unwrap();
    generate::run_noise(100.0, 11, 0.1, &path("noise"), &format).unwrap();
    generate::run_silence(50.0, &path("gap"), &format).unwrap();

    mix::run(&path("tone"), &path("noise"), 0.5, &path("mixed"), &format).unwrap();

    let inputs = vec![path("mixed"), path("gap"), path("tone")];
    concat::run(&inputs, &path("session"), &format).unwrap();

    let session = read_wav_file(path("session")).unwrap();
    // 2205 + 1103 + 2205 frames
    assert_eq!(session.len(), 5513);

    let bytes = std::fs::read(dir.path().join("session.wav")).unwrap();
    let header = read_header(&bytes).unwrap();
    assert_eq!(header.format, format);
    assert_eq!(header.num_frames(), 5513);

    assert_eq!(info::run(&path("session"), true).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_output_format_differs_from_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let path = |name: &str| dir.path().join(name).to_string_lossy().into_owned();

    generate::run_tone(
        WaveForm::Square,
        100.0,
        20.0,
        1.0,
        &path("in"),
        &WavFormat::mono(8000).with_bits_per_sample(8),
    )
    .unwrap();

    let out_format = WavFormat::stereo(8000).with_bits_per_sample(32);
    concat::run(&[path("in")], &path("out"), &out_format).unwrap();

    let wave = read_wav_file(path("out")).unwrap();
    assert_eq!(wave.len(), 160);
    // 8-bit full scale survives the float re-encode exactly.
    assert_eq!(wave.left()[0], 127.0);
    assert_eq!(wave.right()[0], 127.0);
}
