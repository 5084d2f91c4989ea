#![forbid(unsafe_code)]
#![doc = "Edwards25519 arithmetic, SHA-512 scalar hashing, and Monero-style keys for moncrypt."]

#[cfg(feature = "curve25519")]
pub mod curve25519;

#[cfg(feature = "hash")]
pub mod hash;

#[cfg(feature = "ed25519")]
pub mod ed25519;
