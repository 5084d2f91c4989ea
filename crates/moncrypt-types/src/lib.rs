#![forbid(unsafe_code)]
#![doc = "Common types, error codes, radix identifiers, and size constants for moncrypt."]

pub mod error;
pub mod radix;

pub use error::*;
pub use radix::*;
