#![no_main]
use libfuzzer_sys::fuzz_target;
use moncrypt_crypto::curve25519::{decode_point_bytes, encode_point_bytes, is_on_curve};

fuzz_target!(|data: &[u8]| {
    let Ok(bytes) = <[u8; 32]>::try_from(data) else {
        return;
    };
    if let Ok(p) = decode_point_bytes(&bytes) {
        assert!(is_on_curve(&p));
        assert_eq!(encode_point_bytes(&p).unwrap(), bytes);
    }
});
