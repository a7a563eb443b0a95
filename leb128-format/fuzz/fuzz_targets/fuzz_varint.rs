#![no_main]

use leb128_format::{
    decode_signed, decode_signed_with, decode_unsigned, decode_unsigned_with, encode_signed,
    encode_unsigned, Limits,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let strict = Limits::strict();

    // Whatever decodes must survive a re-encode round trip
    if let Ok(value) = decode_unsigned(data) {
        assert_eq!(decode_unsigned(&encode_unsigned(value)), Ok(value));
    }
    if let Ok(value) = decode_signed(data) {
        assert_eq!(decode_signed(&encode_signed(value)), Ok(value));
    }

    // Strict acceptance implies permissive acceptance with the same value
    if let Ok(value) = decode_unsigned_with(data, &strict) {
        assert_eq!(decode_unsigned(data), Ok(value));
    }
    if let Ok(value) = decode_signed_with(data, &strict) {
        assert_eq!(decode_signed(data), Ok(value));
    }
});
