#![forbid(unsafe_code)]
#![doc = "Arbitrary-precision signed integer arithmetic for moncrypt."]

mod bignum;
mod bits;
mod ct;
mod gcd;
mod montgomery;
mod ops;
mod radix;
mod rand;

pub use bignum::BigInt;
pub use moncrypt_types::Radix;
