/// Message and point hashing.
pub mod hashing;
/// Key generation and public key export.
pub mod keygen;
/// Signing and trapdoor re-signing.
pub mod signer;
/// Verification of chameleon commitments.
pub mod verifier;

pub use hashing::{message_scalar, point_digest};
pub use keygen::{export_public_key, generate_default_key, generate_key};
pub use signer::Signer;
pub use verifier::Verifier;
