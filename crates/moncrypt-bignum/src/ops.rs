//! Basic arithmetic operations for BigInt.

use crate::bignum::{BigInt, DoubleLimb, Limb, LIMB_BITS};
use crate::montgomery::Montgomery;
use moncrypt_types::CryptoError;

impl BigInt {
    /// Add two BigInts: self + other.
    pub fn add(&self, other: &BigInt) -> BigInt {
        if self.is_negative() == other.is_negative() {
            BigInt::from_limbs_signed(add_unsigned(self.limbs(), other.limbs()), self.is_negative())
        } else if self.is_negative() {
            // (-a) + b = b - a
            sub_signed(other.limbs(), self.limbs())
        } else {
            // a + (-b) = a - b
            sub_signed(self.limbs(), other.limbs())
        }
    }

    /// Subtract: self - other.
    pub fn sub(&self, other: &BigInt) -> BigInt {
        if self.is_negative() != other.is_negative() {
            BigInt::from_limbs_signed(add_unsigned(self.limbs(), other.limbs()), self.is_negative())
        } else if self.is_negative() {
            // (-a) - (-b) = b - a
            sub_signed(other.limbs(), self.limbs())
        } else {
            sub_signed(self.limbs(), other.limbs())
        }
    }

    /// Multiply: self * other.
    pub fn mul(&self, other: &BigInt) -> BigInt {
        BigInt::from_limbs_signed(
            mul_unsigned(self.limbs(), other.limbs()),
            self.is_negative() != other.is_negative(),
        )
    }

    /// Square: self * self.
    pub fn sqr(&self) -> BigInt {
        self.mul(self)
    }

    /// Truncating division with remainder: returns (quotient, remainder).
    ///
    /// The quotient rounds toward zero and the remainder carries the sign
    /// of the dividend, so `self == q * divisor + r` and `|r| < |divisor|`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), CryptoError> {
        if divisor.is_zero() {
            return Err(CryptoError::BnDivisionByZero);
        }
        let (q, r) = div_rem_unsigned(self.limbs(), divisor.limbs());
        Ok((
            BigInt::from_limbs_signed(q, self.is_negative() != divisor.is_negative()),
            BigInt::from_limbs_signed(r, self.is_negative()),
        ))
    }

    /// Truncating division: the quotient of [`BigInt::div_rem`].
    pub fn div(&self, divisor: &BigInt) -> Result<BigInt, CryptoError> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// Truncating remainder: the remainder of [`BigInt::div_rem`].
    pub fn rem(&self, divisor: &BigInt) -> Result<BigInt, CryptoError> {
        Ok(self.div_rem(divisor)?.1)
    }

    /// Euclidean modulus: the result always lies in `[0, |modulus|)`.
    pub fn rem_euclid(&self, modulus: &BigInt) -> Result<BigInt, CryptoError> {
        let r = self.rem(modulus)?;
        if r.is_negative() {
            Ok(r.add(&modulus.abs()))
        } else {
            Ok(r)
        }
    }

    /// Modular multiplication: (self * other) mod modulus, in `[0, |modulus|)`.
    pub fn mod_mul(&self, other: &BigInt, modulus: &BigInt) -> Result<BigInt, CryptoError> {
        self.mul(other).rem_euclid(modulus)
    }

    /// Non-modular exponentiation by a small exponent.
    pub fn pow(&self, exp: u32) -> BigInt {
        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.sqr();
            }
        }
        result
    }

    /// Modular exponentiation: self^exp mod modulus, in `[0, modulus)`.
    ///
    /// The modulus must be positive and the exponent non-negative. Odd
    /// moduli use Montgomery reduction; even moduli use plain
    /// square-and-multiply.
    pub fn pow_mod(&self, exp: &BigInt, modulus: &BigInt) -> Result<BigInt, CryptoError> {
        if modulus.is_zero() {
            return Err(CryptoError::BnDivisionByZero);
        }
        if modulus.is_negative() {
            return Err(CryptoError::InvalidArg);
        }
        if exp.is_negative() {
            return Err(CryptoError::BnNegativeExponent);
        }
        if modulus.is_one() {
            return Ok(BigInt::zero());
        }

        let base = self.rem_euclid(modulus)?;
        if modulus.is_odd() {
            return Montgomery::new(modulus)?.pow(&base, exp);
        }

        let mut result = BigInt::one();
        let mut base = base;
        for i in 0..exp.bit_len() {
            if exp.test_bit(i) {
                result = result.mod_mul(&base, modulus)?;
            }
            base = base.mod_mul(&base, modulus)?;
        }
        Ok(result)
    }

    /// Compare absolute values.
    pub fn cmp_abs(&self, other: &BigInt) -> std::cmp::Ordering {
        cmp_unsigned(self.limbs(), other.limbs())
    }
}

/// Compare two unsigned limb arrays.
pub(crate) fn cmp_unsigned(a: &[Limb], b: &[Limb]) -> std::cmp::Ordering {
    let max_len = a.len().max(b.len());
    for i in (0..max_len).rev() {
        let av = a.get(i).copied().unwrap_or(0);
        let bv = b.get(i).copied().unwrap_or(0);
        if av != bv {
            return av.cmp(&bv);
        }
    }
    std::cmp::Ordering::Equal
}

/// Add two unsigned limb arrays.
pub(crate) fn add_unsigned(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let max_len = a.len().max(b.len());
    let mut limbs = vec![0u64; max_len + 1];
    let mut carry: u64 = 0;

    for i in 0..max_len {
        let av = a.get(i).copied().unwrap_or(0);
        let bv = b.get(i).copied().unwrap_or(0);
        let sum = av as DoubleLimb + bv as DoubleLimb + carry as DoubleLimb;
        limbs[i] = sum as Limb;
        carry = (sum >> LIMB_BITS) as u64;
    }
    limbs[max_len] = carry;
    limbs
}

/// Subtract unsigned magnitudes, `a - b`, requiring `a >= b`.
pub(crate) fn sub_unsigned(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut limbs = vec![0u64; a.len()];
    let mut borrow: u64 = 0;

    for i in 0..a.len() {
        let sv = b.get(i).copied().unwrap_or(0);
        let (diff, b1) = a[i].overflowing_sub(sv);
        let (diff2, b2) = diff.overflowing_sub(borrow);
        limbs[i] = diff2;
        borrow = (b1 as u64) + (b2 as u64);
    }
    limbs
}

/// Signed difference of two unsigned magnitudes: a - b.
fn sub_signed(a: &[Limb], b: &[Limb]) -> BigInt {
    match cmp_unsigned(a, b) {
        std::cmp::Ordering::Less => BigInt::from_limbs_signed(sub_unsigned(b, a), true),
        std::cmp::Ordering::Equal => BigInt::zero(),
        std::cmp::Ordering::Greater => BigInt::from_limbs(sub_unsigned(a, b)),
    }
}

/// Multiply two unsigned limb arrays.
pub(crate) fn mul_unsigned(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.iter().all(|&l| l == 0) || b.iter().all(|&l| l == 0) {
        return vec![0];
    }

    let mut limbs = vec![0u64; a.len() + b.len()];

    for i in 0..a.len() {
        let mut carry: u64 = 0;
        for j in 0..b.len() {
            let prod = a[i] as DoubleLimb * b[j] as DoubleLimb
                + limbs[i + j] as DoubleLimb
                + carry as DoubleLimb;
            limbs[i + j] = prod as Limb;
            carry = (prod >> LIMB_BITS) as u64;
        }
        limbs[i + b.len()] = carry;
    }
    limbs
}

/// In-place `a = a * m + add` on an unsigned limb array.
pub(crate) fn mul_small_add(a: &mut Vec<Limb>, m: Limb, add: Limb) {
    let mut carry = add as DoubleLimb;
    for limb in a.iter_mut() {
        let prod = *limb as DoubleLimb * m as DoubleLimb + carry;
        *limb = prod as Limb;
        carry = prod >> LIMB_BITS;
    }
    if carry != 0 {
        a.push(carry as Limb);
    }
}

/// Divide an unsigned limb array by a single non-zero limb.
pub(crate) fn div_rem_small(a: &[Limb], d: Limb) -> (Vec<Limb>, Limb) {
    let mut q = vec![0u64; a.len()];
    let mut rem: DoubleLimb = 0;
    for i in (0..a.len()).rev() {
        let cur = (rem << LIMB_BITS) | a[i] as DoubleLimb;
        q[i] = (cur / d as DoubleLimb) as Limb;
        rem = cur % d as DoubleLimb;
    }
    (q, rem as Limb)
}

/// Trim leading zero limbs of a magnitude slice.
fn trimmed(a: &[Limb]) -> &[Limb] {
    let mut len = a.len();
    while len > 1 && a[len - 1] == 0 {
        len -= 1;
    }
    &a[..len]
}

/// Unsigned division with remainder (Knuth, TAOCP vol. 2, 4.3.1, Algorithm D).
///
/// `b` must be non-zero.
fn div_rem_unsigned(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let a = trimmed(a);
    let b = trimmed(b);

    if cmp_unsigned(a, b) == std::cmp::Ordering::Less {
        return (vec![0], a.to_vec());
    }
    if b.len() == 1 {
        let (q, r) = div_rem_small(a, b[0]);
        return (q, vec![r]);
    }

    let n = b.len();
    let m = a.len() - n;
    let base: DoubleLimb = 1 << LIMB_BITS;

    // D1: normalize so the top divisor limb has its high bit set
    let shift = b[n - 1].leading_zeros();
    let bn = shl_limbs(b, shift, false);
    let mut an = shl_limbs(a, shift, true);

    let mut q = vec![0u64; m + 1];
    let top = bn[n - 1] as DoubleLimb;
    let second = bn[n - 2] as DoubleLimb;

    for j in (0..=m).rev() {
        // D3: estimate the quotient digit
        let num = ((an[j + n] as DoubleLimb) << LIMB_BITS) | an[j + n - 1] as DoubleLimb;
        let mut qhat = num / top;
        let mut rhat = num % top;
        while qhat >= base || qhat * second > ((rhat << LIMB_BITS) | an[j + n - 2] as DoubleLimb) {
            qhat -= 1;
            rhat += top;
            if rhat >= base {
                break;
            }
        }

        // D4: multiply and subtract
        let mut k: i128 = 0;
        let mut t: i128;
        for i in 0..n {
            let p = qhat * bn[i] as DoubleLimb;
            t = an[i + j] as i128 - k - (p as Limb) as i128;
            an[i + j] = t as Limb;
            k = (p >> LIMB_BITS) as i128 - (t >> LIMB_BITS);
        }
        t = an[j + n] as i128 - k;
        an[j + n] = t as Limb;

        // D5/D6: the estimate was one too large, add back
        if t < 0 {
            q[j] = (qhat - 1) as Limb;
            let mut carry: DoubleLimb = 0;
            for i in 0..n {
                let s = an[i + j] as DoubleLimb + bn[i] as DoubleLimb + carry;
                an[i + j] = s as Limb;
                carry = s >> LIMB_BITS;
            }
            an[j + n] = an[j + n].wrapping_add(carry as Limb);
        } else {
            q[j] = qhat as Limb;
        }
    }

    // D8: unnormalize the remainder
    let r = shr_limbs(&an[..n], shift);
    (q, r)
}

/// Shift a limb array left by `shift < 64` bits, optionally keeping an extra top limb.
fn shl_limbs(a: &[Limb], shift: u32, extra: bool) -> Vec<Limb> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &limb in a {
        if shift == 0 {
            out.push(limb);
        } else {
            out.push((limb << shift) | carry);
            carry = limb >> (LIMB_BITS as u32 - shift);
        }
    }
    if extra {
        out.push(carry);
    }
    out
}

/// Shift a limb array right by `shift < 64` bits.
fn shr_limbs(a: &[Limb], shift: u32) -> Vec<Limb> {
    if shift == 0 {
        return a.to_vec();
    }
    let mut out = vec![0u64; a.len()];
    for i in 0..a.len() {
        let hi = a.get(i + 1).copied().unwrap_or(0);
        out[i] = (a[i] >> shift) | (hi << (LIMB_BITS as u32 - shift));
    }
    out
}
