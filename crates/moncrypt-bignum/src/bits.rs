//! Bitwise operations and shifts.
//!
//! Bitwise operators and bit access work on the magnitude only; the result
//! of `and`/`or`/`xor` is always non-negative.

use crate::bignum::{BigInt, Limb, LIMB_BITS};

impl BigInt {
    /// Bitwise AND of the magnitudes.
    pub fn and(&self, other: &BigInt) -> BigInt {
        zip_limbs(self, other, |a, b| a & b)
    }

    /// Bitwise OR of the magnitudes.
    pub fn or(&self, other: &BigInt) -> BigInt {
        zip_limbs(self, other, |a, b| a | b)
    }

    /// Bitwise XOR of the magnitudes.
    pub fn xor(&self, other: &BigInt) -> BigInt {
        zip_limbs(self, other, |a, b| a ^ b)
    }

    /// Test bit `idx` of the magnitude (0 is the least significant bit).
    pub fn test_bit(&self, idx: usize) -> bool {
        let limb_idx = idx / LIMB_BITS;
        let bit_idx = idx % LIMB_BITS;
        match self.limbs().get(limb_idx) {
            Some(limb) => (limb >> bit_idx) & 1 == 1,
            None => false,
        }
    }

    /// Return a copy with bit `idx` of the magnitude set to `on`; the sign is kept.
    pub fn set_bit(&self, idx: usize, on: bool) -> BigInt {
        let limb_idx = idx / LIMB_BITS;
        let bit_idx = idx % LIMB_BITS;
        let mut limbs = self.limbs().to_vec();
        if limb_idx >= limbs.len() {
            limbs.resize(limb_idx + 1, 0);
        }
        if on {
            limbs[limb_idx] |= 1u64 << bit_idx;
        } else {
            limbs[limb_idx] &= !(1u64 << bit_idx);
        }
        BigInt::from_limbs_signed(limbs, self.is_negative())
    }

    /// Lowest index `>= start` holding a zero bit within [`BigInt::to_bits`], or -1.
    pub fn scan0(&self, start: usize) -> i64 {
        self.scan(start, false)
    }

    /// Lowest index `>= start` holding a one bit within [`BigInt::to_bits`], or -1.
    pub fn scan1(&self, start: usize) -> i64 {
        self.scan(start, true)
    }

    fn scan(&self, start: usize, want: bool) -> i64 {
        // "0" is the binary view of zero, so it spans one bit
        let len = self.bit_len().max(1);
        (start..len)
            .find(|&i| self.test_bit(i) == want)
            .map_or(-1, |i| i as i64)
    }

    /// Shift left: self * 2^n.
    pub fn shl(&self, n: usize) -> BigInt {
        let limb_shift = n / LIMB_BITS;
        let bit_shift = n % LIMB_BITS;
        let src = self.limbs();

        let mut limbs = vec![0u64; src.len() + limb_shift + 1];
        for (i, &limb) in src.iter().enumerate() {
            limbs[i + limb_shift] |= limb << bit_shift;
            if bit_shift != 0 {
                limbs[i + limb_shift + 1] |= limb >> (LIMB_BITS - bit_shift);
            }
        }
        BigInt::from_limbs_signed(limbs, self.is_negative())
    }

    /// Shift right: floor(self / 2^n), rounding toward negative infinity.
    pub fn shr(&self, n: usize) -> BigInt {
        let limb_shift = n / LIMB_BITS;
        let bit_shift = n % LIMB_BITS;
        let src = self.limbs();

        if limb_shift >= src.len() {
            return if self.is_negative() {
                BigInt::from_i64(-1)
            } else {
                BigInt::zero()
            };
        }

        let mut limbs = vec![0u64; src.len() - limb_shift];
        for i in 0..limbs.len() {
            let lo = src[i + limb_shift] >> bit_shift;
            let hi = if bit_shift != 0 {
                src.get(i + limb_shift + 1)
                    .map_or(0, |&h| h << (LIMB_BITS - bit_shift))
            } else {
                0
            };
            limbs[i] = lo | hi;
        }
        let magnitude = BigInt::from_limbs(limbs);

        if !self.is_negative() {
            return magnitude;
        }
        let dropped = (0..n).any(|i| self.test_bit(i));
        let q = magnitude.neg();
        if dropped {
            q.sub(&BigInt::one())
        } else {
            q
        }
    }
}

fn zip_limbs(a: &BigInt, b: &BigInt, op: impl Fn(Limb, Limb) -> Limb) -> BigInt {
    let len = a.limbs().len().max(b.limbs().len());
    let limbs = (0..len)
        .map(|i| {
            op(
                a.limbs().get(i).copied().unwrap_or(0),
                b.limbs().get(i).copied().unwrap_or(0),
            )
        })
        .collect();
    BigInt::from_limbs(limbs)
}
