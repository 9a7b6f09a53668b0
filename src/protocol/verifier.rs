use subtle::ConstantTimeEq;
use tracing::debug;

use super::hashing::{message_scalar, point_digest};
use crate::{Commitment, Curve, Digest, PublicKey, Randomness, Result};

/// Verifier for chameleon commitments.
///
/// Needs only the public key. Checks that a `(message, randomness, digest)`
/// triple opens correctly without learning the trapdoor.
///
/// # Security
///
/// - Digest comparison is constant-time
/// - A `false` result means the opening is invalid; malformed encodings are
///   reported as [`Error::Decode`](crate::Error::Decode) instead
pub struct Verifier<C: Curve> {
    public_key: PublicKey<C>,
}

impl<C: Curve> Verifier<C> {
    /// Creates a verifier for the given public key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chameleon_sig::{SecureRng, Signer, SigningKey, Verifier, P256};
    ///
    /// let sk = SigningKey::<P256>::generate_os().unwrap();
    /// let verifier = Verifier::new(sk.public_key());
    ///
    /// let signer = Signer::new(sk);
    /// let (r, d) = signer.sign(&mut SecureRng::new(), b"hello").unwrap();
    /// assert!(verifier.verify(b"hello", &d, &r));
    /// ```
    pub fn new(public_key: PublicKey<C>) -> Self {
        Self { public_key }
    }

    /// Decodes an uncompressed public key and builds a verifier for it.
    pub fn from_public_key_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(PublicKey::from_bytes(bytes)?))
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }

    /// Recomputes `r·X + H(m)·G` and compares its digest with `digest`.
    ///
    /// `r·X` equals `(x·r)·G` without knowledge of `x`, so the sum reproduces the
    /// point `k·G` computed at signing time.
    pub fn verify(&self, message: &[u8], digest: &Digest, randomness: &Randomness<C>) -> bool {
        let rx = C::scalar_mul(self.public_key.element(), randomness.scalar());
        let mg = C::base_mul(&message_scalar::<C>(message));
        let candidate = point_digest::<C>(&C::element_add(&rx, &mg));

        let valid: bool = candidate.ct_eq(digest).into();
        debug!(curve = C::name(), valid, "verified chameleon commitment");
        valid
    }

    /// Verifies raw digest and randomness bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) if either input has the
    /// wrong length or the randomness is not below the group order.
    pub fn verify_encoded(&self, message: &[u8], digest: &[u8], randomness: &[u8]) -> Result<bool> {
        let digest = Digest::from_bytes(digest)?;
        let randomness = Randomness::<C>::from_bytes(randomness)?;
        Ok(self.verify(message, &digest, &randomness))
    }

    /// Verifies hex-encoded digest and randomness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) on invalid hex or any
    /// structural problem [`Verifier::verify_encoded`] rejects.
    pub fn verify_hex(&self, message: &[u8], digest_hex: &str, randomness_hex: &str) -> Result<bool> {
        let digest = Digest::from_hex(digest_hex)?;
        let randomness = Randomness::<C>::from_hex(randomness_hex)?;
        Ok(self.verify(message, &digest, &randomness))
    }

    /// Verifies a bundled commitment.
    pub fn verify_commitment(&self, commitment: &Commitment<C>) -> bool {
        self.verify(
            commitment.message(),
            commitment.digest(),
            commitment.randomness(),
        )
    }
}

impl<C: Curve> PublicKey<C> {
    /// Shorthand for [`Verifier::verify`].
    pub fn verify(&self, message: &[u8], digest: &Digest, randomness: &Randomness<C>) -> bool {
        Verifier::new(self.clone()).verify(message, digest, randomness)
    }
}
