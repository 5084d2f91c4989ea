//! Edwards25519 primitives used for Monero-style keys.
//!
//! Provides field arithmetic over GF(2^255 - 19), affine point operations on
//! the twisted Edwards curve, and the 32-byte point and scalar encodings.

mod edwards;
mod encoding;
mod field;
mod params;

pub use edwards::{edwards, is_on_curve, scalarmult, scalarmult_base, x_recover, Point};
pub use encoding::{
    bit, decode_point, decode_point_bytes, decode_scalar, encode_point, encode_point_bytes,
    encode_scalar, public_key, reduce_scalar,
};
pub use field::{expmod, inv};
pub use params::CurveParams;
