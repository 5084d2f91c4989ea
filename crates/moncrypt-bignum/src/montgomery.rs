//! Montgomery reduction backing `pow_mod` for odd moduli.

use crate::bignum::{BigInt, DoubleLimb, Limb, LIMB_BITS};
use moncrypt_types::CryptoError;

/// Exponent bits consumed per table lookup.
const WINDOW: usize = 4;

/// Reduction state for one odd modulus N, with R = 2^(64·limbs(N)).
pub(crate) struct Montgomery {
    modulus: BigInt,
    /// -N⁻¹ mod 2^64.
    n_inv: Limb,
    /// R² mod N.
    r2: BigInt,
}

impl Montgomery {
    pub(crate) fn new(modulus: &BigInt) -> Result<Self, CryptoError> {
        if modulus.is_negative() || modulus.is_even() || modulus.is_one() {
            return Err(CryptoError::InvalidArg);
        }
        let width = modulus.limbs().len() * LIMB_BITS;
        Ok(Montgomery {
            modulus: modulus.clone(),
            n_inv: neg_inv_limb(modulus.limbs()[0]),
            r2: BigInt::one().shl(2 * width).rem_euclid(modulus)?,
        })
    }

    /// `base^exp mod N` for a non-negative exponent.
    pub(crate) fn pow(&self, base: &BigInt, exp: &BigInt) -> Result<BigInt, CryptoError> {
        if exp.is_negative() {
            return Err(CryptoError::BnNegativeExponent);
        }

        // table[i] = base^i · R
        let base = self.redc(&base.rem_euclid(&self.modulus)?.mul(&self.r2));
        let mut table = Vec::with_capacity(1 << WINDOW);
        table.push(self.redc(&self.r2));
        for i in 1..(1 << WINDOW) {
            let next = self.redc(&table[i - 1].mul(&base));
            table.push(next);
        }

        let mut acc = table[0].clone();
        for chunk in (0..exp.bit_len().div_ceil(WINDOW)).rev() {
            for _ in 0..WINDOW {
                acc = self.redc(&acc.sqr());
            }
            let digit = (0..WINDOW)
                .fold(0, |d, b| d | (exp.test_bit(chunk * WINDOW + b) as usize) << b);
            acc = self.redc(&acc.mul(&table[digit]));
        }
        Ok(self.redc(&acc))
    }

    /// `t · R⁻¹ mod N` for `0 <= t < N·R`.
    fn redc(&self, t: &BigInt) -> BigInt {
        let n = self.modulus.limbs();
        let m = n.len();

        // one spare limb above 2m catches the final carry
        let mut work = vec![0 as Limb; 2 * m + 2];
        let t = t.limbs();
        let len = t.len().min(work.len());
        work[..len].copy_from_slice(&t[..len]);

        for i in 0..m {
            let q = work[i].wrapping_mul(self.n_inv);
            let mut carry: Limb = 0;
            for (j, &nj) in n.iter().enumerate() {
                let acc = q as DoubleLimb * nj as DoubleLimb
                    + work[i + j] as DoubleLimb
                    + carry as DoubleLimb;
                work[i + j] = acc as Limb;
                carry = (acc >> LIMB_BITS) as Limb;
            }
            for w in work[i + m..].iter_mut() {
                if carry == 0 {
                    break;
                }
                let (sum, overflow) = w.overflowing_add(carry);
                *w = sum;
                carry = overflow as Limb;
            }
        }

        BigInt::from_limbs(work[m..=2 * m].to_vec()).ct_sub_if_gte(&self.modulus)
    }
}

/// `-n0⁻¹ mod 2^64` for odd `n0`.
fn neg_inv_limb(n0: Limb) -> Limb {
    // n0 is its own inverse mod 8; each Newton step doubles the correct bits.
    let mut inv = n0;
    for _ in 0..5 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(n0.wrapping_mul(inv)));
    }
    inv.wrapping_neg()
}
