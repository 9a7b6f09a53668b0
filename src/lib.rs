//! Chameleon hash signatures over NIST prime-order curves.
//!
//! A chameleon hash binds a message `m` and randomness `r` to a digest
//! `d = SHA-256(encode((x·r + H(m))·G))`. Anyone with the public key `X = x·G`
//! can check an opening `(m, r, d)`. Only the holder of the trapdoor `x` can
//! produce a second opening `(m', r')` for the same `d`.
//!
//! ```rust
//! use chameleon_sig::{SecureRng, Signer, SigningKey, Verifier, P256};
//!
//! let mut rng = SecureRng::new();
//! let sk = SigningKey::<P256>::generate(&mut rng).unwrap();
//! let verifier = Verifier::new(sk.public_key());
//! let signer = Signer::new(sk);
//!
//! let (r1, digest) = signer.sign(&mut rng, b"test").unwrap();
//! let r2 = signer.re_sign(b"test", b"test2", &r1).unwrap();
//!
//! assert!(verifier.verify(b"test", &digest, &r1));
//! assert!(verifier.verify(b"test2", &digest, &r2));
//! ```

/// Layered configuration for the command-line tool.
#[cfg(feature = "cli")]
pub mod config;
/// Error types.
pub mod error;
/// Curve capability, curve adapters and value types.
pub mod primitives;
/// Key generation, signing, re-signing and verification.
pub mod protocol;

pub use error::Error;
pub use primitives::{
    from_hex, sample_scalar, to_hex, Commitment, Curve, CurveKind, Digest, PublicKey, Randomness,
    SampleRange, SecureRng, SigningKey, DIGEST_BYTES, P256, P384,
};
pub use protocol::{
    export_public_key, generate_default_key, generate_key, message_scalar, point_digest, Signer,
    Verifier,
};

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
