/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    // General errors
    #[error("null or empty input")]
    EmptyInput,
    #[error("invalid argument")]
    InvalidArg,
    #[error("invalid hex string")]
    InvalidHex,
    #[error("invalid encoding length: expected {expected}, got {got}")]
    InvalidEncodingLength { expected: usize, got: usize },

    // Radix conversion errors
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },
    #[error("unsupported radix {0}")]
    InvalidBase(u32),

    // BigInt errors
    #[error("big number: division by zero")]
    BnDivisionByZero,
    #[error("big number: negative exponent")]
    BnNegativeExponent,
    #[error("big number: no modular inverse")]
    BnNoInverse,
    #[error("big number: random generation failed")]
    BnRandGenFail,

    // ECC errors
    #[error("ecc: point not on curve")]
    EccPointNotOnCurve,
    #[error("ecc: negative scalar")]
    EccNegativeScalar,
    #[error("ecc: invalid private key")]
    EccInvalidPrivateKey,
}
