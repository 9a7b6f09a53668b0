/// Curve capability trait.
pub mod curve;
/// Hex encoding helpers.
pub mod encoding;
/// Cryptographically secure random number generation.
pub mod rng;

pub use curve::{Curve, DIGEST_BYTES};
pub use encoding::{from_hex, to_hex};
pub use rng::{sample_scalar, SampleRange, SecureRng};
