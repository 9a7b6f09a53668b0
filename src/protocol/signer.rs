use rand_core::CryptoRngCore;
use tracing::debug;

use super::hashing::{commitment_exponent, message_scalar, point_digest};
use crate::{
    sample_scalar, Commitment, Curve, Digest, Error, PublicKey, Randomness, Result, SampleRange,
    SigningKey,
};

/// Holder of the chameleon trapdoor.
///
/// Signs messages into `(randomness, digest)` pairs and later re-opens a
/// published digest to a different message.
///
/// # Security
///
/// - Fresh randomness is drawn for every signature; never reuse it across
///   unrelated messages under the same key
/// - Anyone holding the signing key can forge openings, so chameleon signatures
///   provide no non-repudiation
pub struct Signer<C: Curve> {
    key: SigningKey<C>,
}

impl<C: Curve> Signer<C> {
    /// Creates a signer owning the given key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chameleon_sig::{Signer, SigningKey, P256};
    ///
    /// let sk = SigningKey::<P256>::generate_os().unwrap();
    /// let signer = Signer::new(sk);
    /// ```
    pub fn new(key: SigningKey<C>) -> Self {
        Self { key }
    }

    /// Returns the public key matching the trapdoor.
    pub fn public_key(&self) -> PublicKey<C> {
        self.key.public_key()
    }

    /// Returns the signing key.
    pub fn signing_key(&self) -> &SigningKey<C> {
        &self.key
    }

    /// Commits to `message` under fresh randomness.
    ///
    /// Computes `k = x·r + H(m) mod N` and returns `r` together with
    /// `SHA-256(encode(k·G))`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if the generator cannot supply bytes.
    pub fn sign<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        message: &[u8],
    ) -> Result<(Randomness<C>, Digest)> {
        let r = sample_scalar::<C, R>(rng, SampleRange::IncludingZero)?;
        let k = commitment_exponent::<C>(self.key.secret(), &r, message);
        let digest = point_digest::<C>(&C::base_mul(&k));

        debug!(curve = C::name(), message_len = message.len(), "signed message");
        Ok((Randomness::new(r), digest))
    }

    /// Same as [`Signer::sign`] for a UTF-8 message.
    pub fn sign_str<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        message: &str,
    ) -> Result<(Randomness<C>, Digest)> {
        self.sign(rng, message.as_bytes())
    }

    /// Signs `message` and bundles the result into a [`Commitment`].
    pub fn commit<R: CryptoRngCore>(&self, rng: &mut R, message: &[u8]) -> Result<Commitment<C>> {
        let (randomness, digest) = self.sign(rng, message)?;
        Ok(Commitment::new(message, randomness, digest))
    }

    /// Finds randomness opening the digest of `(m1, r1)` to `m2`.
    ///
    /// Solves `x·r2 + H(m2) = x·r1 + H(m1) (mod N)` for `r2`, so both openings
    /// share the exponent `k` and therefore the digest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonInvertibleKey`] if `x` has no inverse modulo `N`.
    pub fn re_sign(&self, m1: &[u8], m2: &[u8], r1: &Randomness<C>) -> Result<Randomness<C>> {
        let x = self.key.secret();
        let x_inv = C::scalar_invert(x).ok_or(Error::NonInvertibleKey)?;

        let k = commitment_exponent::<C>(x, r1.scalar(), m1);
        let shifted = C::scalar_sub(&k, &message_scalar::<C>(m2));
        let r2 = C::scalar_mul_scalar(&shifted, &x_inv);

        debug!(curve = C::name(), "re-signed commitment to a new message");
        Ok(Randomness::new(r2))
    }

    /// Same as [`Signer::re_sign`] with `r1` given as hex.
    pub fn re_sign_hex(&self, m1: &[u8], m2: &[u8], r1_hex: &str) -> Result<Vec<u8>> {
        let r1 = Randomness::<C>::from_hex(r1_hex)?;
        Ok(self.re_sign(m1, m2, &r1)?.to_bytes())
    }

    /// Relabels a whole commitment under `new_message`, keeping its digest.
    pub fn re_commit(
        &self,
        commitment: &Commitment<C>,
        new_message: &[u8],
    ) -> Result<Commitment<C>> {
        let randomness = self.re_sign(commitment.message(), new_message, commitment.randomness())?;
        Ok(Commitment::new(new_message, randomness, *commitment.digest()))
    }
}

impl<C: Curve> SigningKey<C> {
    /// Shorthand for [`Signer::sign`] without moving the key.
    pub fn sign_with_rng<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        message: &[u8],
    ) -> Result<(Randomness<C>, Digest)> {
        Signer::new(self.clone()).sign(rng, message)
    }
}
