//! Radix identifiers and fixed sizes shared across the workspace.

use crate::CryptoError;

/// Digit alphabet for radix 2..=62 output: `0-9`, then `A-Z`, then `a-z`.
pub const DIGITS: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Smallest radix accepted by generalized conversion.
pub const MIN_RADIX: u32 = 2;
/// Largest radix accepted by generalized conversion.
pub const MAX_RADIX: u32 = 62;

/// Width in bytes of an encoded scalar, coordinate, or compressed point.
pub const ED25519_ENCODED_SIZE: usize = 32;
/// SHA-512 digest size in bytes.
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Supported numeric representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 2, characters `[01]`.
    Binary,
    /// Base 10, characters `[0-9]`.
    Decimal,
    /// Base 16, characters `[0-9A-Fa-f]`, optional `0x` prefix.
    Hex,
    /// Base 256: raw big-endian magnitude bytes.
    Bytes,
    /// Any other base in 2..=62 using [`DIGITS`].
    Other(u32),
}

impl Radix {
    /// Map a numeric base onto a `Radix`.
    pub fn from_base(base: u32) -> Result<Self, CryptoError> {
        match base {
            2 => Ok(Radix::Binary),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hex),
            256 => Ok(Radix::Bytes),
            b if (MIN_RADIX..=MAX_RADIX).contains(&b) => Ok(Radix::Other(b)),
            b => Err(CryptoError::InvalidBase(b)),
        }
    }

    /// Numeric base of this radix.
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hex => 16,
            Radix::Bytes => 256,
            Radix::Other(b) => b,
        }
    }
}

/// Value of `c` as a digit in the [`DIGITS`] alphabet, if any.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 36),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base() {
        assert_eq!(Radix::from_base(2).unwrap(), Radix::Binary);
        assert_eq!(Radix::from_base(256).unwrap(), Radix::Bytes);
        assert_eq!(Radix::from_base(58).unwrap(), Radix::Other(58));
        assert_eq!(Radix::from_base(1), Err(CryptoError::InvalidBase(1)));
        assert_eq!(Radix::from_base(63), Err(CryptoError::InvalidBase(63)));
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('7'), Some(7));
        assert_eq!(digit_value('M'), Some(22));
        assert_eq!(digit_value('z'), Some(61));
        assert_eq!(digit_value('-'), None);
        for (i, &c) in DIGITS.iter().enumerate() {
            assert_eq!(digit_value(c as char), Some(i as u32));
        }
    }
}
