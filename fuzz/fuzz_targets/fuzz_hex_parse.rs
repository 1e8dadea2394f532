#![no_main]

use libfuzzer_sys::fuzz_target;
use tour::runes::{hex_bytes, parse_hex};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(bytes) = parse_hex(input) {
        let rendered = hex_bytes(&bytes);
        assert_eq!(parse_hex(&rendered).ok(), Some(bytes));
    }
});
