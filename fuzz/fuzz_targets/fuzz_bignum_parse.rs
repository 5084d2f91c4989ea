#![no_main]
use libfuzzer_sys::fuzz_target;
use moncrypt_bignum::BigInt;

fuzz_target!(|data: &[u8]| {
    let Some((&base, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let base = 2 + u32::from(base) % 61;
    if let Ok(n) = BigInt::from_str_radix(text, base) {
        let printed = n.to_base(base).unwrap();
        assert_eq!(BigInt::from_str_radix(&printed, base).unwrap(), n);
        assert_eq!(n.to_decimal().parse::<BigInt>().unwrap(), n);
    }
});
