//! Conversion between BigInt and textual representations in radix 2..=62.
//!
//! Input accepts embedded spaces and an optional leading `-`. Hex input may
//! carry one `0x`/`0X` prefix on either side of the sign (`0x-5` and `-0x5`
//! both read as -5) and is case-insensitive; every other radix uses the
//! case-sensitive `0-9A-Za-z` alphabet.

use std::str::FromStr;

use crate::bignum::{BigInt, Limb};
use crate::ops::{div_rem_small, mul_small_add};
use moncrypt_types::{digit_value, CryptoError, Radix, DIGITS, MAX_RADIX, MIN_RADIX};

impl BigInt {
    /// Parse `s` in the given radix.
    ///
    /// `Radix::Bytes` takes the raw bytes of `s` as a big-endian magnitude.
    pub fn parse(s: &str, radix: Radix) -> Result<BigInt, CryptoError> {
        match radix {
            Radix::Bytes => Ok(BigInt::from_bytes_be(s.as_bytes())),
            Radix::Hex => parse_digits(s, 16, true),
            Radix::Other(base) if !(MIN_RADIX..=MAX_RADIX).contains(&base) => {
                Err(CryptoError::InvalidBase(base))
            }
            other => parse_digits(s, other.base(), false),
        }
    }

    /// Parse `s` in a numeric base (2..=62, or 256 for raw bytes).
    pub fn from_str_radix(s: &str, base: u32) -> Result<BigInt, CryptoError> {
        BigInt::parse(s, Radix::from_base(base)?)
    }

    /// Decimal representation, with a leading `-` for negative values.
    pub fn to_decimal(&self) -> String {
        format_signed(self, 10)
    }

    /// Lowercase hex of the magnitude, left-padded to an even number of digits.
    pub fn to_hex(&self) -> String {
        let digits = format_magnitude(self.limbs(), 16).to_ascii_lowercase();
        if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits
        }
    }

    /// Minimal binary representation of the magnitude; `"0"` for zero.
    pub fn to_bits(&self) -> String {
        format_magnitude(self.limbs(), 2)
    }

    /// Representation in any base 2..=62 using the `0-9A-Za-z` alphabet.
    pub fn to_base(&self, base: u32) -> Result<String, CryptoError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
            return Err(CryptoError::InvalidBase(base));
        }
        Ok(format_signed(self, base))
    }

    /// Dispatch to the canonical string form of `radix`.
    ///
    /// `Radix::Bytes` has no string form; use [`BigInt::to_bytes_be`].
    pub fn to_string_radix(&self, radix: Radix) -> Result<String, CryptoError> {
        match radix {
            Radix::Binary => Ok(self.to_bits()),
            Radix::Decimal => Ok(self.to_decimal()),
            Radix::Hex => Ok(self.to_hex()),
            Radix::Bytes => Err(CryptoError::InvalidBase(256)),
            Radix::Other(base) => self.to_base(base),
        }
    }
}

impl FromStr for BigInt {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s, Radix::Decimal)
    }
}

fn parse_digits(s: &str, base: u32, hex: bool) -> Result<BigInt, CryptoError> {
    let cleaned: String = s.chars().filter(|&c| c != ' ').collect();
    let mut body = cleaned.as_str();
    let mut prefixed = false;
    if hex {
        (prefixed, body) = strip_hex_prefix(body);
    }
    let negative = match body.strip_prefix('-') {
        Some(rest) => {
            body = rest;
            true
        }
        None => false,
    };
    if hex && !prefixed {
        (_, body) = strip_hex_prefix(body);
    }
    if body.is_empty() {
        return Err(CryptoError::EmptyInput);
    }

    let mut limbs: Vec<Limb> = vec![0];
    for c in body.chars() {
        let value = if hex {
            c.to_digit(16)
        } else {
            digit_value(c).filter(|&v| v < base)
        };
        let value = value.ok_or(CryptoError::InvalidDigit { digit: c, radix: base })?;
        mul_small_add(&mut limbs, base as Limb, value as Limb);
    }
    Ok(BigInt::from_limbs_signed(limbs, negative))
}

fn strip_hex_prefix(s: &str) -> (bool, &str) {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

fn format_signed(bn: &BigInt, base: u32) -> String {
    let digits = format_magnitude(bn.limbs(), base);
    if bn.is_negative() {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Largest power of `base` fitting in a limb, and its exponent.
fn chunk_for(base: u32) -> (Limb, usize) {
    let base = base as Limb;
    let mut power = base;
    let mut count = 1;
    while let Some(next) = power.checked_mul(base) {
        power = next;
        count += 1;
    }
    (power, count)
}

/// Digits of an unsigned magnitude, most significant first; `"0"` for zero.
fn format_magnitude(limbs: &[Limb], base: u32) -> String {
    let (chunk, per_chunk) = chunk_for(base);
    let mut rest = limbs.to_vec();
    let mut out: Vec<u8> = Vec::new();

    while rest.iter().any(|&l| l != 0) {
        let (q, mut r) = div_rem_small(&rest, chunk);
        rest = q;
        for _ in 0..per_chunk {
            out.push(DIGITS[(r % base as Limb) as usize]);
            r /= base as Limb;
        }
    }

    while out.len() > 1 && out.last() == Some(&b'0') {
        out.pop();
    }
    if out.is_empty() {
        out.push(b'0');
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}
