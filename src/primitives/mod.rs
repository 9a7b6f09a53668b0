//! Core cryptographic primitives for chameleon signatures.
//!
//! - **crypto**: curve capability trait, secure randomness, hex encoding
//! - **curves**: concrete curve adapters (P-256, P-384)
//! - **gadgets**: keys, randomness, digests and commitments

/// Cryptographic primitives and traits.
pub mod crypto;
/// Concrete curve implementations.
pub mod curves;
/// Keys, randomness, digests and commitments.
pub mod gadgets;

pub use crypto::{from_hex, sample_scalar, to_hex, Curve, SampleRange, SecureRng, DIGEST_BYTES};
pub use curves::{CurveKind, P256, P384};
pub use gadgets::{Commitment, Digest, PublicKey, Randomness, SigningKey};
