#![no_main]

use libfuzzer_sys::fuzz_target;
use tour::utf8::{ManualDecoder, builtin_decoder, decode_first};

fuzz_target!(|data: &[u8]| {
    let manual: Vec<(usize, char)> = ManualDecoder::new(data).collect();
    let builtin: Vec<(usize, char)> = builtin_decoder(data).collect();
    assert_eq!(manual, builtin, "decoders disagree on {data:02x?}");

    // Offsets strictly increase and stay in bounds.
    for pair in manual.windows(2) {
        assert!(pair[0].0 < pair[1].0);
    }
    if let Some(&(last, _)) = manual.last() {
        assert!(last < data.len());
    }

    // Valid input must decode exactly as the standard library does.
    if let Ok(s) = std::str::from_utf8(data) {
        let std: Vec<(usize, char)> = s.char_indices().collect();
        assert_eq!(manual, std);
    }

    // A successful decode re-encodes to the bytes it consumed.
    let (c, width) = decode_first(data);
    if c != char::REPLACEMENT_CHARACTER && width > 0 {
        let mut buf = [0u8; 4];
        assert_eq!(c.encode_utf8(&mut buf).as_bytes(), &data[..width]);
    }
});
