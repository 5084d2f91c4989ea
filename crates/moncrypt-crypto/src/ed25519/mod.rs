//! Monero-style Ed25519 key pairs.
//!
//! A secret key is a scalar in `[1, l)` stored as 32 little-endian bytes; its
//! public key is the compressed point `s·B`.

use moncrypt_bignum::BigInt;
use moncrypt_types::{CryptoError, ED25519_ENCODED_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::curve25519::{
    decode_point_bytes, decode_scalar, encode_point_bytes, encode_scalar, reduce_scalar,
    scalarmult_base, CurveParams, Point,
};
use crate::hash::{hint, HashInput};

/// A secret scalar and its encoding. Cleared on drop.
#[derive(Clone)]
pub struct SecretKey {
    scalar: BigInt,
    encoded: [u8; ED25519_ENCODED_SIZE],
}

impl SecretKey {
    /// Wrap a scalar, which must lie in `[1, l)`.
    pub fn from_scalar(scalar: BigInt) -> Result<Self, CryptoError> {
        if scalar.is_negative() || scalar.is_zero() || scalar >= CurveParams::get().l {
            log::debug!("rejected secret scalar outside [1, l)");
            return Err(CryptoError::EccInvalidPrivateKey);
        }
        let encoded = encode_scalar(&scalar)?;
        Ok(SecretKey { scalar, encoded })
    }

    /// Decode a canonical 32-byte little-endian scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        SecretKey::from_scalar(decode_scalar(bytes)?)
    }

    /// Decode a canonical scalar from 64 hex digits.
    pub fn from_hex(encoded: &str) -> Result<Self, CryptoError> {
        let mut bytes = hex::decode(encoded).map_err(|_| CryptoError::InvalidHex)?;
        let key = SecretKey::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Reduce 32 bytes of seed material mod l.
    pub fn from_seed(seed: &[u8; ED25519_ENCODED_SIZE]) -> Result<Self, CryptoError> {
        SecretKey::from_scalar(reduce_scalar(seed)?)
    }

    /// Derive a key from arbitrary input: the SHA-512 integer of `m` reduced mod l.
    pub fn derive<M: HashInput + ?Sized>(m: &M) -> Result<Self, CryptoError> {
        let scalar = hint(m).rem_euclid(&CurveParams::get().l)?;
        SecretKey::from_scalar(scalar)
    }

    /// Draw a uniformly random key from the operating system RNG.
    pub fn generate() -> Result<Self, CryptoError> {
        SecretKey::from_scalar(BigInt::random_nonzero_below(&CurveParams::get().l)?)
    }

    /// The secret scalar.
    pub fn scalar(&self) -> &BigInt {
        &self.scalar
    }

    /// The 32-byte little-endian encoding.
    pub fn to_bytes(&self) -> [u8; ED25519_ENCODED_SIZE] {
        self.encoded
    }

    /// The encoding as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.encoded)
    }

    /// Derive the matching public key `s·B`.
    pub fn public_key(&self) -> Result<PublicKey, CryptoError> {
        let point = scalarmult_base(&self.scalar)?;
        let encoded = encode_point_bytes(&point)?;
        Ok(PublicKey { point, encoded })
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        // the scalar wipes itself
        self.encoded.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// A public key: a validated curve point and its compressed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: Point,
    encoded: [u8; ED25519_ENCODED_SIZE],
}

impl PublicKey {
    /// Decompress and validate a 32-byte public key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let encoded: [u8; ED25519_ENCODED_SIZE] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidEncodingLength {
                    expected: ED25519_ENCODED_SIZE,
                    got: bytes.len(),
                })?;
        let point = decode_point_bytes(&encoded)?;
        Ok(PublicKey { point, encoded })
    }

    /// Decompress and validate a public key given as 64 hex digits.
    pub fn from_hex(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(encoded).map_err(|_| CryptoError::InvalidHex)?;
        PublicKey::from_bytes(&bytes)
    }

    /// The compressed 32-byte form.
    pub fn to_bytes(&self) -> [u8; ED25519_ENCODED_SIZE] {
        self.encoded
    }

    /// The compressed form as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.encoded)
    }

    /// The underlying curve point.
    pub fn point(&self) -> &Point {
        &self.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEND_SECRET: &str = "92df69221844dc2a77389e2c3ebae5fa32517c04826c870fb952171fb192cc08";
    const SPEND_PUBLIC: &str = "765d0b9d61e8ca67b8902f6b133ae7bcdde5419c72ab6244ed7400789db7be99";
    const VIEW_SECRET: &str = "e7cbc9050333b9ed07843ce835547c07c8a8d6b7acc10bebb60d7d6fe1a82f05";
    const VIEW_PUBLIC: &str = "a21d0a8ceacdb5e6a5d8bba57741123671c83a3b34187fe23324112b0c7b7760";

    #[test]
    fn test_monero_key_pairs() {
        for (secret, public) in [(SPEND_SECRET, SPEND_PUBLIC), (VIEW_SECRET, VIEW_PUBLIC)] {
            let sk = SecretKey::from_hex(secret).unwrap();
            assert_eq!(sk.to_hex(), secret);
            assert_eq!(sk.public_key().unwrap().to_hex(), public);
        }
    }

    #[test]
    fn test_public_key_decode_matches_derivation() {
        let sk = SecretKey::from_hex(SPEND_SECRET).unwrap();
        let derived = sk.public_key().unwrap();
        let decoded = PublicKey::from_hex(SPEND_PUBLIC).unwrap();
        assert_eq!(derived, decoded);
        assert_eq!(decoded.point(), &scalarmult_base(sk.scalar()).unwrap());
    }

    #[test]
    fn test_small_scalar_public_key() {
        let sk = SecretKey::from_scalar(BigInt::from_u64(12345)).unwrap();
        assert_eq!(
            sk.public_key().unwrap().to_hex(),
            "ef4f62f8479733ad879cfaced3c89a9c39dd4fc795ef2efa1c3eafe4d729a081"
        );
    }

    #[test]
    fn test_secret_range_checked() {
        let l = CurveParams::get().l.clone();
        assert_eq!(
            SecretKey::from_scalar(BigInt::zero()).unwrap_err(),
            CryptoError::EccInvalidPrivateKey
        );
        assert_eq!(
            SecretKey::from_scalar(l.clone()).unwrap_err(),
            CryptoError::EccInvalidPrivateKey
        );
        assert_eq!(
            SecretKey::from_scalar(BigInt::from_i64(-5)).unwrap_err(),
            CryptoError::EccInvalidPrivateKey
        );
        assert!(SecretKey::from_scalar(l.sub(&BigInt::one())).is_ok());
    }

    #[test]
    fn test_from_seed_reduces() {
        let sk = SecretKey::from_seed(&[0xff; 32]).unwrap();
        assert!(sk.scalar() < &CurveParams::get().l);

        let canonical = SecretKey::from_hex(SPEND_SECRET).unwrap();
        let seeded = SecretKey::from_seed(&canonical.to_bytes()).unwrap();
        assert_eq!(seeded.to_hex(), SPEND_SECRET);
    }

    #[test]
    fn test_derive_from_message() {
        let sk = SecretKey::derive("hello").unwrap();
        let expected = hint("hello").rem_euclid(&CurveParams::get().l).unwrap();
        assert_eq!(sk.scalar(), &expected);
        assert_eq!(
            SecretKey::derive(&BigInt::from_u64(100)).unwrap().to_hex(),
            SecretKey::derive("100").unwrap().to_hex()
        );
    }

    #[test]
    fn test_generate() {
        let a = SecretKey::generate().unwrap();
        let b = SecretKey::generate().unwrap();
        assert_ne!(a.to_bytes(), b.to_bytes());
        let pk = a.public_key().unwrap();
        assert_eq!(PublicKey::from_bytes(&pk.to_bytes()).unwrap(), pk);
    }

    #[test]
    fn test_bad_encodings() {
        assert_eq!(SecretKey::from_hex("xyz").unwrap_err(), CryptoError::InvalidHex);
        assert_eq!(
            SecretKey::from_bytes(&[1u8; 31]).unwrap_err(),
            CryptoError::InvalidEncodingLength {
                expected: 32,
                got: 31
            }
        );
        assert_eq!(
            PublicKey::from_bytes(&[1u8; 33]).unwrap_err(),
            CryptoError::InvalidEncodingLength {
                expected: 32,
                got: 33
            }
        );
        let mut off_curve = [0u8; 32];
        off_curve[0] = 2;
        assert_eq!(
            PublicKey::from_bytes(&off_curve).unwrap_err(),
            CryptoError::EccPointNotOnCurve
        );
    }

    #[test]
    fn test_encoding_cached_at_construction() {
        let sk = SecretKey::from_scalar(BigInt::from_u64(0x0102)).unwrap();
        let mut expected = [0u8; 32];
        expected[0] = 0x02;
        expected[1] = 0x01;
        assert_eq!(sk.to_bytes(), expected);
        assert_eq!(sk.clone().to_bytes(), expected);
    }

    #[test]
    fn test_secret_key_wiped_on_drop() {
        fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<SecretKey>();
        assert_zeroize_on_drop::<BigInt>();
    }

    #[test]
    fn test_debug_redacts_secret() {
        let sk = SecretKey::from_hex(SPEND_SECRET).unwrap();
        assert_eq!(format!("{sk:?}"), "SecretKey(..)");
    }
}
