//! GCD and modular inverse operations.

use crate::bignum::BigInt;
use moncrypt_types::CryptoError;

impl BigInt {
    /// Greatest common divisor of |self| and |other| (Euclidean algorithm).
    ///
    /// Always non-negative; `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.abs();
        let mut b = other.abs();

        while !b.is_zero() {
            // b is non-zero, so the division cannot fail
            let rem = match a.rem(&b) {
                Ok(r) => r,
                Err(_) => break,
            };
            a = b;
            b = rem;
        }
        a
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns `(g, x, y)` with `self·x + other·y == g` and `g == gcd(self, other)`.
    pub fn extended_gcd(&self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        let (mut old_r, mut r) = (self.clone(), other.clone());
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
        let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

        while !r.is_zero() {
            let (quotient, remainder) = match old_r.div_rem(&r) {
                Ok(qr) => qr,
                Err(_) => break,
            };
            old_r = std::mem::replace(&mut r, remainder);

            let new_s = old_s.sub(&quotient.mul(&s));
            old_s = std::mem::replace(&mut s, new_s);

            let new_t = old_t.sub(&quotient.mul(&t));
            old_t = std::mem::replace(&mut t, new_t);
        }

        if old_r.is_negative() {
            (old_r.neg(), old_s.neg(), old_t.neg())
        } else {
            (old_r, old_s, old_t)
        }
    }

    /// Compute the modular inverse: self^(-1) mod modulus.
    ///
    /// Returns `Ok(Some(inv))` with `inv` in `[0, |modulus|)` when
    /// `gcd(self, modulus) == 1`, and `Ok(None)` when no inverse exists. A
    /// missing inverse is an ordinary outcome; only a zero modulus is an error.
    pub fn mod_inverse(&self, modulus: &BigInt) -> Result<Option<BigInt>, CryptoError> {
        if modulus.is_zero() {
            return Err(CryptoError::BnDivisionByZero);
        }
        let m = modulus.abs();
        if m.is_one() {
            return Ok(Some(BigInt::zero()));
        }

        let a = self.rem_euclid(&m)?;
        let (g, x, _) = a.extended_gcd(&m);
        if !g.is_one() {
            return Ok(None);
        }
        Ok(Some(x.rem_euclid(&m)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(BigInt::from_u64(12).gcd(&BigInt::from_u64(8)), BigInt::from_u64(4));
        assert_eq!(BigInt::from_u64(54).gcd(&BigInt::from_u64(81)), BigInt::from_u64(27));
    }

    #[test]
    fn test_gcd_coprime() {
        assert_eq!(BigInt::from_u64(17).gcd(&BigInt::from_u64(13)), BigInt::one());
    }

    #[test]
    fn test_gcd_signs_and_zero() {
        let a = BigInt::from_i64(-42);
        assert_eq!(a.gcd(&BigInt::zero()), BigInt::from_u64(42));
        assert_eq!(BigInt::zero().gcd(&a), BigInt::from_u64(42));
        assert_eq!(BigInt::zero().gcd(&BigInt::zero()), BigInt::zero());
        assert_eq!(a.gcd(&BigInt::from_i64(-12)), BigInt::from_u64(6));
    }

    #[test]
    fn test_extended_gcd_bezout() {
        let a = BigInt::from_u64(240);
        let b = BigInt::from_u64(46);
        let (g, x, y) = a.extended_gcd(&b);
        assert_eq!(g, BigInt::from_u64(2));
        assert_eq!(a.mul(&x).add(&b.mul(&y)), g);
    }

    #[test]
    fn test_mod_inverse_basic() {
        let inv = BigInt::from_u64(3).mod_inverse(&BigInt::from_u64(10)).unwrap().unwrap();
        assert_eq!(inv, BigInt::from_u64(7));
        assert_eq!(
            BigInt::from_u64(3).mul(&inv).rem_euclid(&BigInt::from_u64(10)).unwrap(),
            BigInt::one()
        );
    }

    #[test]
    fn test_mod_inverse_negative_value() {
        // -3 ≡ 7 (mod 10), and 7 * 3 ≡ 1
        let inv = BigInt::from_i64(-3).mod_inverse(&BigInt::from_u64(10)).unwrap().unwrap();
        assert_eq!(inv, BigInt::from_u64(3));
    }

    #[test]
    fn test_mod_inverse_none() {
        // gcd(6, 9) = 3, no inverse
        assert_eq!(BigInt::from_u64(6).mod_inverse(&BigInt::from_u64(9)).unwrap(), None);
        assert_eq!(BigInt::zero().mod_inverse(&BigInt::from_u64(9)).unwrap(), None);
    }

    #[test]
    fn test_mod_inverse_zero_modulus() {
        assert_eq!(
            BigInt::from_u64(3).mod_inverse(&BigInt::zero()).unwrap_err(),
            CryptoError::BnDivisionByZero
        );
    }
}
