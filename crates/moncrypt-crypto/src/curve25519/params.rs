//! Edwards25519 domain parameters.
//!
//! Curve: -x² + y² = 1 + d·x²·y² over GF(q), q = 2^255 - 19.

use std::sync::LazyLock;

use moncrypt_bignum::BigInt;

use super::edwards::Point;

/// q = 2^255 - 19, big-endian.
const Q_BYTES: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xed,
];

/// l = 2^252 + 27742317777372353535851937790883648493, big-endian.
const L_BYTES: [u8; 32] = [
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6,
    0x58, 0x12, 0x63, 0x1a, 0x5c, 0xf5, 0xd3, 0xed,
];

/// d = -121665/121666 mod q, big-endian.
const D_BYTES: [u8; 32] = [
    0x52, 0x03, 0x6c, 0xee, 0x2b, 0x6f, 0xfe, 0x73,
    0x8c, 0xc7, 0x40, 0x79, 0x77, 0x79, 0xe8, 0x98,
    0x00, 0x70, 0x0a, 0x4d, 0x41, 0x41, 0xd8, 0xab,
    0x75, 0xeb, 0x4d, 0xca, 0x13, 0x59, 0x78, 0xa3,
];

/// I = sqrt(-1) mod q = 2^((q-1)/4) mod q, big-endian.
const SQRT_M1_BYTES: [u8; 32] = [
    0x2b, 0x83, 0x24, 0x80, 0x4f, 0xc1, 0xdf, 0x0b,
    0x2b, 0x4d, 0x00, 0x99, 0x3d, 0xfb, 0xd7, 0xa7,
    0x2f, 0x43, 0x18, 0x06, 0xad, 0x2f, 0xe4, 0x78,
    0xc4, 0xee, 0x1b, 0x27, 0x4a, 0x0e, 0xa0, 0xb0,
];

/// Base point x-coordinate (the even root for y = 4/5), big-endian.
const BASE_X_BYTES: [u8; 32] = [
    0x21, 0x69, 0x36, 0xd3, 0xcd, 0x6e, 0x53, 0xfe,
    0xc0, 0xa4, 0xe2, 0x31, 0xfd, 0xd6, 0xdc, 0x5c,
    0x69, 0x2c, 0xc7, 0x60, 0x95, 0x25, 0xa7, 0xb2,
    0xc9, 0x56, 0x2d, 0x60, 0x8f, 0x25, 0xd5, 0x1a,
];

/// Base point y-coordinate: y = 4/5 mod q, big-endian.
const BASE_Y_BYTES: [u8; 32] = [
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x58,
];

/// Parameters of the Edwards25519 group.
///
/// Built once on first use and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct CurveParams {
    /// Field prime q = 2^255 - 19.
    pub q: BigInt,
    /// Prime order l of the base point.
    pub l: BigInt,
    /// Curve coefficient d.
    pub d: BigInt,
    /// Square root of -1 mod q.
    pub i: BigInt,
    /// Base point B.
    pub b: Point,
    /// Neutral element (0, 1).
    pub identity: Point,
    /// Square-root exponent (q + 3) / 8.
    pub(crate) sqrt_exp: BigInt,
}

static PARAMS: LazyLock<CurveParams> = LazyLock::new(|| {
    log::trace!("initializing edwards25519 parameters");
    let q = BigInt::from_bytes_be(&Q_BYTES);
    // q + 3 is divisible by 8, so the shift is exact
    let sqrt_exp = q.add(&BigInt::from_u64(3)).shr(3);
    CurveParams {
        l: BigInt::from_bytes_be(&L_BYTES),
        d: BigInt::from_bytes_be(&D_BYTES),
        i: BigInt::from_bytes_be(&SQRT_M1_BYTES),
        b: Point::new(
            BigInt::from_bytes_be(&BASE_X_BYTES),
            BigInt::from_bytes_be(&BASE_Y_BYTES),
        ),
        identity: Point::identity(),
        sqrt_exp,
        q,
    }
});

impl CurveParams {
    /// The process-wide parameter set.
    pub fn get() -> &'static CurveParams {
        &PARAMS
    }
}
