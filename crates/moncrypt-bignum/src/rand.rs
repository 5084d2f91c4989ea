//! Random big integer sampling using OS randomness.

use crate::bignum::BigInt;
use moncrypt_types::CryptoError;
use zeroize::Zeroize;

impl BigInt {
    /// Generate a random BigInt uniformly in `[0, upper)`.
    ///
    /// Uses rejection sampling over `bit_len(upper)` random bits.
    pub fn random_below(upper: &BigInt) -> Result<BigInt, CryptoError> {
        if upper.is_zero() || upper.is_negative() {
            return Err(CryptoError::InvalidArg);
        }

        let bits = upper.bit_len();
        let num_bytes = bits.div_ceil(8);
        let mut buf = vec![0u8; num_bytes];

        loop {
            getrandom::getrandom(&mut buf).map_err(|_| CryptoError::BnRandGenFail)?;

            // Mask excess bits in the most significant byte
            let excess = num_bytes * 8 - bits;
            if excess > 0 {
                buf[0] &= 0xFF >> excess;
            }

            let candidate = BigInt::from_bytes_be(&buf);
            if candidate < *upper {
                buf.zeroize();
                return Ok(candidate);
            }
        }
    }

    /// Generate a random BigInt uniformly in `[1, upper)`.
    pub fn random_nonzero_below(upper: &BigInt) -> Result<BigInt, CryptoError> {
        if upper.is_zero() || upper.is_one() {
            return Err(CryptoError::InvalidArg);
        }
        loop {
            let candidate = BigInt::random_below(upper)?;
            if !candidate.is_zero() {
                return Ok(candidate);
            }
        }
    }
}
