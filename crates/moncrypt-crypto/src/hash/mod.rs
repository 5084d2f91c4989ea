//! SHA-512 hashing of messages and integers, and hash-to-integer derivation.
//!
//! Integers are hashed through their decimal string, so `h(&BigInt::from_u64(100))`
//! and `h("100")` agree.

use moncrypt_bignum::BigInt;
use moncrypt_types::SHA512_OUTPUT_SIZE;
use sha2::{Digest, Sha512};

/// Anything that can be fed to [`h`].
pub trait HashInput {
    /// Feed the canonical byte form of `self` into `hasher`.
    fn update(&self, hasher: &mut Sha512);
}

impl HashInput for [u8] {
    fn update(&self, hasher: &mut Sha512) {
        hasher.update(self);
    }
}

impl<const N: usize> HashInput for [u8; N] {
    fn update(&self, hasher: &mut Sha512) {
        hasher.update(self);
    }
}

impl HashInput for Vec<u8> {
    fn update(&self, hasher: &mut Sha512) {
        hasher.update(self);
    }
}

impl HashInput for str {
    fn update(&self, hasher: &mut Sha512) {
        hasher.update(self.as_bytes());
    }
}

impl HashInput for String {
    fn update(&self, hasher: &mut Sha512) {
        hasher.update(self.as_bytes());
    }
}

impl HashInput for BigInt {
    fn update(&self, hasher: &mut Sha512) {
        hasher.update(self.to_decimal().as_bytes());
    }
}

/// SHA-512 digest of `m`.
pub fn h<M: HashInput + ?Sized>(m: &M) -> [u8; SHA512_OUTPUT_SIZE] {
    let mut hasher = Sha512::new();
    m.update(&mut hasher);
    hasher.finalize().into()
}

/// The digest of `m` read as a big-endian unsigned 512-bit integer.
pub fn hint<M: HashInput + ?Sized>(m: &M) -> BigInt {
    BigInt::from_bytes_be(&h(m))
}

/// [`hint`] rendered in decimal.
pub fn hint_decimal<M: HashInput + ?Sized>(m: &M) -> String {
    hint(m).to_decimal()
}
