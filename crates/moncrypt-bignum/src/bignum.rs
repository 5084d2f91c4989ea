//! Big integer type and basic accessors.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Limb type for big integer representation (64-bit on 64-bit platforms).
pub type Limb = u64;
/// Double-width type for multiplication intermediates.
pub type DoubleLimb = u128;

/// Bits per limb.
pub const LIMB_BITS: usize = 64;

/// An arbitrary-precision signed integer that is zeroized on drop.
///
/// Stored as sign and magnitude; the magnitude is a little-endian array of
/// `u64` limbs. Every value handed out by the public API is normalized: no
/// leading zero limbs beyond the first, and zero is never negative.
///
/// Operations never mutate their receiver; each returns a fresh value.
#[derive(Clone)]
pub struct BigInt {
    /// Little-endian limbs (limbs[0] is the least significant).
    limbs: Vec<Limb>,
    /// True if the number is negative.
    negative: bool,
}

impl BigInt {
    /// Create a zero-valued BigInt.
    pub fn zero() -> Self {
        Self {
            limbs: vec![0],
            negative: false,
        }
    }

    /// Create the value one.
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Create a BigInt from a `u64` value.
    pub fn from_u64(value: u64) -> Self {
        Self {
            limbs: vec![value],
            negative: false,
        }
    }

    /// Create a BigInt from an `i64` value.
    pub fn from_i64(value: i64) -> Self {
        let mut bn = Self::from_u64(value.unsigned_abs());
        bn.negative = value < 0;
        bn.normalize();
        bn
    }

    /// Create a non-negative BigInt from big-endian magnitude bytes (base 256).
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::zero();
        }

        let num_limbs = bytes.len().div_ceil(8);
        let mut limbs = vec![0u64; num_limbs];

        for (i, &byte) in bytes.iter().rev().enumerate() {
            let limb_idx = i / 8;
            let bit_pos = (i % 8) * 8;
            limbs[limb_idx] |= (byte as u64) << bit_pos;
        }

        Self::from_limbs(limbs)
    }

    /// Create a non-negative BigInt from little-endian magnitude bytes.
    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        let mut be = bytes.to_vec();
        be.reverse();
        let bn = Self::from_bytes_be(&be);
        be.zeroize();
        bn
    }

    /// Minimal big-endian magnitude bytes, with no leading zero byte.
    ///
    /// The sign is not encoded; zero yields an empty vector.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let bits = self.bit_len();
        let num_bytes = bits.div_ceil(8);
        let mut bytes = vec![0u8; num_bytes];

        for i in 0..num_bytes {
            let limb_idx = i / 8;
            let bit_pos = (i % 8) * 8;
            bytes[num_bytes - 1 - i] = (self.limbs[limb_idx] >> bit_pos) as u8;
        }

        bytes
    }

    /// Big-endian magnitude left-padded with zeros to exactly `len` bytes.
    ///
    /// Returns `None` if the magnitude does not fit.
    pub fn to_bytes_be_padded(&self, len: usize) -> Option<Vec<u8>> {
        let bytes = self.to_bytes_be();
        if bytes.len() > len {
            return None;
        }
        let mut out = vec![0u8; len - bytes.len()];
        out.extend_from_slice(&bytes);
        Some(out)
    }

    /// Little-endian magnitude right-padded with zeros to exactly `len` bytes.
    ///
    /// Returns `None` if the magnitude does not fit.
    pub fn to_bytes_le_padded(&self, len: usize) -> Option<Vec<u8>> {
        let mut out = self.to_bytes_be_padded(len)?;
        out.reverse();
        Some(out)
    }

    /// Return the number of significant bits of the magnitude.
    pub fn bit_len(&self) -> usize {
        for i in (0..self.limbs.len()).rev() {
            if self.limbs[i] != 0 {
                return i * LIMB_BITS + (LIMB_BITS - self.limbs[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Return true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// Return true if this number is negative.
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Return -1, 0 or 1 according to the sign.
    pub fn sign(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Return true if this number equals 1.
    pub fn is_one(&self) -> bool {
        !self.negative && self.limbs.len() == 1 && self.low_limb() == 1
    }

    /// Least significant limb; an empty magnitude reads as zero.
    fn low_limb(&self) -> Limb {
        self.limbs.first().copied().unwrap_or(0)
    }

    /// Return true if this number is even.
    pub fn is_even(&self) -> bool {
        self.low_limb() & 1 == 0
    }

    /// Return true if this number is odd.
    pub fn is_odd(&self) -> bool {
        self.low_limb() & 1 == 1
    }

    /// Convert to `i64` if the value fits.
    pub fn to_i64(&self) -> Option<i64> {
        if self.limbs.len() > 1 {
            return None;
        }
        let mag = self.low_limb();
        if self.is_negative() {
            if mag <= i64::MAX as u64 + 1 {
                Some((mag as i64).wrapping_neg())
            } else {
                None
            }
        } else {
            i64::try_from(mag).ok()
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> BigInt {
        let mut r = self.clone();
        r.negative = false;
        r
    }

    /// Negation.
    pub fn neg(&self) -> BigInt {
        let mut r = self.clone();
        r.negative = !r.negative;
        r.normalize();
        r
    }

    /// Magnitude limbs, little-endian.
    pub(crate) fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Create a BigInt from a vector of little-endian limbs.
    pub(crate) fn from_limbs(limbs: Vec<Limb>) -> Self {
        Self::from_limbs_signed(limbs, false)
    }

    /// Create a BigInt from little-endian limbs and a sign.
    pub(crate) fn from_limbs_signed(limbs: Vec<Limb>, negative: bool) -> Self {
        let mut bn = Self {
            limbs: if limbs.is_empty() { vec![0] } else { limbs },
            negative,
        };
        bn.normalize();
        bn
    }

    /// Remove leading zero limbs.
    fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.is_zero() {
            self.negative = false;
        }
    }
}

impl Drop for BigInt {
    fn drop(&mut self) {
        self.limbs.zeroize();
        self.negative = false;
    }
}

impl ZeroizeOnDrop for BigInt {}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigInt({})", self.to_decimal())
    }
}

impl std::fmt::Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.limbs == other.limbs
    }
}

impl Eq for BigInt {}

impl std::hash::Hash for BigInt {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.limbs.hash(state);
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_abs(other),
            // Both negative: larger absolute value is smaller
            (true, true) => other.cmp_abs(self),
        }
    }
}
