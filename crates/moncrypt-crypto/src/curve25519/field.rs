//! Arithmetic in GF(q), q = 2^255 - 19, on top of [`BigInt`].
//!
//! Every result is reduced into `[0, q)` with the Euclidean modulus, so
//! negative intermediates never leak out as negative field elements.

use moncrypt_bignum::BigInt;
use moncrypt_types::CryptoError;

use super::params::CurveParams;

/// Reduce `v` into `[0, q)`.
pub(crate) fn reduce(v: &BigInt) -> Result<BigInt, CryptoError> {
    v.rem_euclid(&CurveParams::get().q)
}

/// (a · b) mod q.
pub(crate) fn mul(a: &BigInt, b: &BigInt) -> Result<BigInt, CryptoError> {
    reduce(&a.mul(b))
}

/// (a + b) mod q.
pub(crate) fn add(a: &BigInt, b: &BigInt) -> Result<BigInt, CryptoError> {
    reduce(&a.add(b))
}

/// (a - b) mod q.
pub(crate) fn sub(a: &BigInt, b: &BigInt) -> Result<BigInt, CryptoError> {
    reduce(&a.sub(b))
}

/// Field inverse: x^(-1) mod q.
///
/// q is prime, so only multiples of q lack an inverse; those are reported
/// as [`CryptoError::BnNoInverse`].
pub fn inv(x: &BigInt) -> Result<BigInt, CryptoError> {
    x.mod_inverse(&CurveParams::get().q)?
        .ok_or(CryptoError::BnNoInverse)
}

/// b^e mod m, folded into `[0, m)`; `e == 0` yields 1.
pub fn expmod(b: &BigInt, e: &BigInt, m: &BigInt) -> Result<BigInt, CryptoError> {
    if e.is_zero() {
        return Ok(BigInt::one());
    }
    b.pow_mod(e, m)
}
