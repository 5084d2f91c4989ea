//! Fixed-width encodings: compressed points and 32-byte little-endian scalars.
//!
//! A compressed point is the little-endian y-coordinate in 32 bytes with the
//! top bit of the last byte replaced by the low bit of x.

use moncrypt_bignum::BigInt;
use moncrypt_types::{CryptoError, ED25519_ENCODED_SIZE};
use subtle::Choice;

use super::edwards::{is_on_curve, scalarmult_base, x_recover, Point};
use super::field;
use super::params::CurveParams;

/// Bit `i` of a little-endian byte string.
pub fn bit(h: &[u8], i: usize) -> u8 {
    h.get(i / 8).map_or(0, |byte| (byte >> (i % 8)) & 1)
}

/// Encode a non-negative scalar or coordinate as 32 little-endian bytes.
pub fn encode_scalar(v: &BigInt) -> Result<[u8; ED25519_ENCODED_SIZE], CryptoError> {
    if v.is_negative() {
        return Err(CryptoError::EccNegativeScalar);
    }
    let bytes = v
        .to_bytes_le_padded(ED25519_ENCODED_SIZE)
        .ok_or(CryptoError::InvalidEncodingLength {
            expected: ED25519_ENCODED_SIZE,
            got: v.bit_len().div_ceil(8),
        })?;
    let mut out = [0u8; ED25519_ENCODED_SIZE];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Decode exactly 32 little-endian bytes into a scalar.
pub fn decode_scalar(bytes: &[u8]) -> Result<BigInt, CryptoError> {
    if bytes.len() != ED25519_ENCODED_SIZE {
        return Err(CryptoError::InvalidEncodingLength {
            expected: ED25519_ENCODED_SIZE,
            got: bytes.len(),
        });
    }
    Ok(BigInt::from_bytes_le(bytes))
}

/// Map 32 bytes onto a scalar in `[0, l)`: little-endian decode, then reduce mod l.
pub fn reduce_scalar(bytes: &[u8; ED25519_ENCODED_SIZE]) -> Result<BigInt, CryptoError> {
    BigInt::from_bytes_le(bytes).rem_euclid(&CurveParams::get().l)
}

/// Compress a point to its 32-byte form. Coordinates are reduced mod q first.
pub fn encode_point_bytes(p: &Point) -> Result<[u8; ED25519_ENCODED_SIZE], CryptoError> {
    let x = field::reduce(p.x())?;
    let y = field::reduce(p.y())?;
    let mut out = encode_scalar(&y)?;
    out[31] = (out[31] & 0x7f) | ((x.is_odd() as u8) << 7);
    Ok(out)
}

/// Compress a point and return it as lowercase hex.
pub fn encode_point(p: &Point) -> Result<String, CryptoError> {
    Ok(hex::encode(encode_point_bytes(p)?))
}

/// Decompress a 32-byte point.
///
/// Rejects a y-coordinate that is not below q, the encoding of x = 0 with
/// the sign bit set, and anything whose recovered point is off the curve.
pub fn decode_point_bytes(bytes: &[u8; ED25519_ENCODED_SIZE]) -> Result<Point, CryptoError> {
    let params = CurveParams::get();
    let sign = bit(bytes, 255);

    let mut y_bytes = *bytes;
    y_bytes[31] &= 0x7f;
    let y = BigInt::from_bytes_le(&y_bytes);
    if y >= params.q {
        log::debug!("rejected point encoding with non-canonical y");
        return Err(CryptoError::EccPointNotOnCurve);
    }

    let x = x_recover(&y)?;
    if x.is_zero() && sign == 1 {
        log::debug!("rejected point encoding with x = 0 and sign bit set");
        return Err(CryptoError::EccPointNotOnCurve);
    }
    let flip = Choice::from((x.is_odd() as u8) ^ sign);
    let x = BigInt::ct_select(&x, &field::sub(&params.q, &x)?, flip);

    let point = Point::new(x, y);
    if !is_on_curve(&point) {
        log::debug!("rejected point encoding that is not on the curve");
        return Err(CryptoError::EccPointNotOnCurve);
    }
    Ok(point)
}

/// Decompress a point given as 64 hex digits.
pub fn decode_point(encoded: &str) -> Result<Point, CryptoError> {
    let raw = hex::decode(encoded).map_err(|_| CryptoError::InvalidHex)?;
    let bytes: [u8; ED25519_ENCODED_SIZE] =
        raw.as_slice()
            .try_into()
            .map_err(|_| CryptoError::InvalidEncodingLength {
                expected: ED25519_ENCODED_SIZE,
                got: raw.len(),
            })?;
    decode_point_bytes(&bytes)
}

/// Public key of secret scalar `sk`: the hex-encoded compression of sk·B.
pub fn public_key(sk: &BigInt) -> Result<String, CryptoError> {
    encode_point(&scalarmult_base(sk)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve25519::edwards::scalarmult;

    #[test]
    fn test_encode_basepoint() {
        assert_eq!(
            encode_point(&Point::basepoint()).unwrap(),
            "5866666666666666666666666666666666666666666666666666666666666666"
        );
    }

    #[test]
    fn test_encode_reduces_coordinates() {
        let q = &CurveParams::get().q;
        let b = Point::basepoint();
        let shifted = Point::new(b.x().add(q), b.y().sub(q));
        assert_eq!(
            encode_point_bytes(&shifted).unwrap(),
            encode_point_bytes(&b).unwrap()
        );
    }

    #[test]
    fn test_encode_identity() {
        let encoded = encode_point_bytes(&Point::identity()).unwrap();
        assert_eq!(encoded[0], 1);
        assert!(encoded[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_sign_bit_folded() {
        // 2B has an even x, 3B an odd one
        let two = scalarmult_base(&BigInt::from_u64(2)).unwrap();
        let three = scalarmult_base(&BigInt::from_u64(3)).unwrap();
        assert_eq!(encode_point_bytes(&two).unwrap()[31] >> 7, two.x().is_odd() as u8);
        assert_eq!(
            encode_point(&three).unwrap(),
            "d4b4f5784868c3020403246717ec169ff79e26608ea126a1ab69ee77d1b16712"
        );
    }

    #[test]
    fn test_decode_roundtrip() {
        let b = Point::basepoint();
        for k in [1u64, 2, 3, 7, 12345] {
            let p = scalarmult(&b, &BigInt::from_u64(k)).unwrap();
            assert_eq!(decode_point(&encode_point(&p).unwrap()).unwrap(), p, "k={k}");
        }
    }

    #[test]
    fn test_decode_not_on_curve() {
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        assert_eq!(
            decode_point_bytes(&bytes).unwrap_err(),
            CryptoError::EccPointNotOnCurve
        );
    }

    #[test]
    fn test_decode_rejects_non_canonical() {
        // y = q
        let mut y_is_q = [0xffu8; 32];
        y_is_q[0] = 0xed;
        y_is_q[31] = 0x7f;
        assert_eq!(
            decode_point_bytes(&y_is_q).unwrap_err(),
            CryptoError::EccPointNotOnCurve
        );

        // identity with the sign bit set
        let mut neg_zero = [0u8; 32];
        neg_zero[0] = 1;
        neg_zero[31] = 0x80;
        assert_eq!(
            decode_point_bytes(&neg_zero).unwrap_err(),
            CryptoError::EccPointNotOnCurve
        );
    }

    #[test]
    fn test_decode_hex_errors() {
        assert_eq!(decode_point("zz").unwrap_err(), CryptoError::InvalidHex);
        assert_eq!(
            decode_point("0058666666666666666666666666666666666666666666666666666666666666666")
                .unwrap_err(),
            CryptoError::InvalidHex
        );
        assert_eq!(
            decode_point("005866666666666666666666666666666666666666666666666666666666666666")
                .unwrap_err(),
            CryptoError::InvalidEncodingLength {
                expected: 32,
                got: 33
            }
        );
    }

    #[test]
    fn test_scalar_encoding() {
        let bytes = encode_scalar(&BigInt::from_u64(100)).unwrap();
        assert_eq!(bytes[0], 0x64);
        assert!(bytes[1..].iter().all(|&b| b == 0));
        assert_eq!(decode_scalar(&bytes).unwrap(), BigInt::from_u64(100));

        assert!(encode_scalar(&BigInt::one().shl(256)).is_err());
        assert_eq!(
            encode_scalar(&BigInt::from_i64(-1)).unwrap_err(),
            CryptoError::EccNegativeScalar
        );
        assert_eq!(
            decode_scalar(&[0x64]).unwrap_err(),
            CryptoError::InvalidEncodingLength {
                expected: 32,
                got: 1
            }
        );
    }

    #[test]
    fn test_reduce_scalar() {
        let l = &CurveParams::get().l;
        let l_plus_5 = encode_scalar(&l.add(&BigInt::from_u64(5))).unwrap();
        assert_eq!(reduce_scalar(&l_plus_5).unwrap(), BigInt::from_u64(5));
        assert!(reduce_scalar(&[0xff; 32]).unwrap() < *l);
    }

    #[test]
    fn test_bit() {
        let h = [0b0000_0101u8, 0x80];
        assert_eq!(bit(&h, 0), 1);
        assert_eq!(bit(&h, 1), 0);
        assert_eq!(bit(&h, 2), 1);
        assert_eq!(bit(&h, 15), 1);
        assert_eq!(bit(&h, 100), 0);
    }

    #[test]
    fn test_public_key() {
        assert_eq!(
            public_key(&BigInt::from_u64(7)).unwrap(),
            "b862409fb5c4c4123df2abf7462b88f041ad36dd6864ce872fd5472be363c5b1"
        );
    }
}
