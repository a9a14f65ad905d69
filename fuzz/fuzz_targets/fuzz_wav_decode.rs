#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must produce an error, never a panic.
    if let Ok((header, wave)) = audacious_wav::wav::decode_with_header(data) {
        assert_eq!(wave.left().len(), header.num_frames());

        // Anything that decodes re-encodes with its own format.
        let format = header.format;
        let _ = audacious_wav::wav::encode_with_format(&wave, &format);
    }
});
