//! Integration tests for moncrypt.
//! Cross-crate roundtrips between the big integer engine and the curve layer.

#[cfg(test)]
mod tests {
    use moncrypt_bignum::{BigInt, Radix};
    use moncrypt_crypto::curve25519::{
        decode_point, encode_point, encode_scalar, expmod, inv, public_key, scalarmult,
        scalarmult_base, CurveParams, Point,
    };
    use moncrypt_crypto::ed25519::{PublicKey, SecretKey};
    use moncrypt_crypto::hash::hint;
    use moncrypt_types::CryptoError;

    // -------------------------------------------------------
    // 1. Every input radix yields the same value
    // -------------------------------------------------------
    #[test]
    fn test_radix_invariance() {
        let q = &CurveParams::get().q;
        let forms = [
            BigInt::parse(&q.to_bits(), Radix::Binary).unwrap(),
            BigInt::parse(&q.to_hex(), Radix::Hex).unwrap(),
            BigInt::parse(&q.to_decimal(), Radix::Decimal).unwrap(),
            BigInt::from_bytes_be(&q.to_bytes_be()),
            BigInt::from_str_radix(&q.to_base(58).unwrap(), 58).unwrap(),
        ];
        for f in &forms {
            assert_eq!(f, q);
        }
        assert_eq!(
            q.to_hex(),
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed"
        );
    }

    // -------------------------------------------------------
    // 2. Field helpers agree with raw BigInt arithmetic
    // -------------------------------------------------------
    #[test]
    fn test_field_inverse_matches_fermat() {
        let q = &CurveParams::get().q;
        let x = BigInt::from_u64(123_456_789);
        let fermat = expmod(&x, &q.sub(&BigInt::from_u64(2)), q).unwrap();
        assert_eq!(inv(&x).unwrap(), fermat);
        assert_eq!(x.mod_inverse(q).unwrap(), Some(fermat));
    }

    #[test]
    fn test_inv_of_zero_fails() {
        assert_eq!(inv(&BigInt::zero()).unwrap_err(), CryptoError::BnNoInverse);
    }

    // -------------------------------------------------------
    // 3. Scalar arithmetic is linear in the group
    // -------------------------------------------------------
    #[test]
    fn test_scalarmult_linearity() {
        let a = BigInt::from_u64(1_000_003);
        let b = BigInt::from_u64(424_242);
        let ab = scalarmult_base(&a.mul(&b)).unwrap();
        let a_then_b = scalarmult(&scalarmult_base(&a).unwrap(), &b).unwrap();
        assert_eq!(ab, a_then_b);
    }

    #[test]
    fn test_scalar_reduced_mod_order() {
        let l = &CurveParams::get().l;
        let k = BigInt::from_u64(99);
        assert_eq!(
            scalarmult_base(&k.add(l)).unwrap(),
            scalarmult_base(&k).unwrap()
        );
    }

    // -------------------------------------------------------
    // 4. Encodings roundtrip through the public API
    // -------------------------------------------------------
    #[test]
    fn test_point_encoding_roundtrip() {
        for k in [5u64, 64, 1 << 40] {
            let p = scalarmult_base(&BigInt::from_u64(k)).unwrap();
            assert_eq!(decode_point(&encode_point(&p).unwrap()).unwrap(), p);
        }
        let identity = encode_point(&Point::identity()).unwrap();
        assert_eq!(decode_point(&identity).unwrap(), Point::identity());
    }

    #[test]
    fn test_public_key_matches_key_pair() {
        let scalar = BigInt::parse(
            "08cc92b11f1752b90f876c82047c5132fae5ba3e2c9e38772adc44182269df92",
            Radix::Hex,
        )
        .unwrap();
        let expected = "765d0b9d61e8ca67b8902f6b133ae7bcdde5419c72ab6244ed7400789db7be99";
        assert_eq!(public_key(&scalar).unwrap(), expected);

        let sk = SecretKey::from_bytes(&encode_scalar(&scalar).unwrap()).unwrap();
        assert_eq!(sk.public_key().unwrap(), PublicKey::from_hex(expected).unwrap());
    }

    // -------------------------------------------------------
    // 5. Hash-derived scalars produce valid keys
    // -------------------------------------------------------
    #[test]
    fn test_hint_to_public_key() {
        let l = &CurveParams::get().l;
        let scalar = hint("moncrypt interop").rem_euclid(l).unwrap();
        let pk_hex = public_key(&scalar).unwrap();

        let sk = SecretKey::derive("moncrypt interop").unwrap();
        assert_eq!(sk.scalar(), &scalar);
        assert_eq!(sk.public_key().unwrap().to_hex(), pk_hex);
        assert_eq!(
            PublicKey::from_hex(&pk_hex).unwrap().point(),
            &scalarmult_base(&scalar).unwrap()
        );
    }

    #[test]
    fn test_negative_scalar_rejected_everywhere() {
        let neg = BigInt::from_i64(-3);
        assert_eq!(public_key(&neg).unwrap_err(), CryptoError::EccNegativeScalar);
        assert_eq!(encode_scalar(&neg).unwrap_err(), CryptoError::EccNegativeScalar);
        assert!(SecretKey::from_scalar(neg).is_err());
    }
}
