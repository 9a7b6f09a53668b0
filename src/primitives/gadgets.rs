//! Value types exchanged by the chameleon hash.
//!
//! This module contains the private trapdoor, the public key, the per-commitment
//! randomness, the digest and the `(message, randomness, digest)` bundle. Every
//! decoding constructor returns a new, fully-populated value.

use core::fmt;

use rand_core::CryptoRngCore;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::crypto::encoding::{expect_len, from_hex, from_hex_exact, to_hex};
use super::crypto::{sample_scalar, Curve, SampleRange, SecureRng, DIGEST_BYTES};
use crate::{Error, Result};

/// Private trapdoor scalar `x` with `0 < x < N`.
///
/// # Security
///
/// - The scalar is zeroized when dropped
/// - `Debug` output never shows the value
/// - Whoever holds this key can open any published digest to any message
pub struct SigningKey<C: Curve> {
    x: C::Scalar,
}

impl<C: Curve> SigningKey<C> {
    /// Generates a key from the given CSPRNG by rejection sampling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if the generator fails.
    pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Result<Self> {
        let x = sample_scalar::<C, R>(rng, SampleRange::NonZero)?;
        Ok(Self { x })
    }

    /// Generates a key from operating-system entropy.
    pub fn generate_os() -> Result<Self> {
        Self::generate(&mut SecureRng::new())
    }

    /// Wraps an existing scalar, rejecting zero.
    pub fn from_scalar(x: C::Scalar) -> Result<Self> {
        if C::scalar_is_zero(&x) {
            return Err(Error::Decode("private key must be non-zero".to_string()));
        }
        Ok(Self { x })
    }

    /// Parses a big-endian private key of exactly [`Curve::SCALAR_BYTES`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_scalar(C::scalar_from_bytes(bytes)?)
    }

    /// Parses a hex-encoded private key.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = Zeroizing::new(from_hex(s)?);
        Self::from_bytes(&bytes)
    }

    /// Big-endian encoding of the scalar, wiped when the buffer is dropped.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(C::scalar_to_bytes(&self.x))
    }

    /// Hex encoding of the scalar.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(to_hex(self.to_bytes().as_slice()))
    }

    /// Derives the public key `X = x·G`.
    pub fn public_key(&self) -> PublicKey<C> {
        PublicKey {
            point: C::base_mul(&self.x),
        }
    }

    pub(crate) fn secret(&self) -> &C::Scalar {
        &self.x
    }

    #[cfg(test)]
    pub(crate) fn from_scalar_unchecked(x: C::Scalar) -> Self {
        Self { x }
    }
}

impl<C: Curve> Clone for SigningKey<C> {
    fn clone(&self) -> Self {
        Self { x: self.x.clone() }
    }
}

impl<C: Curve> fmt::Debug for SigningKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("curve", &C::name())
            .field("x", &"<redacted>")
            .finish()
    }
}

impl<C: Curve> Zeroize for SigningKey<C> {
    fn zeroize(&mut self) {
        self.x.zeroize();
    }
}

impl<C: Curve> Drop for SigningKey<C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C: Curve> ZeroizeOnDrop for SigningKey<C> {}

/// Public point `X = x·G`.
///
/// Encoded as an uncompressed SEC1 point. Freely shareable.
pub struct PublicKey<C: Curve> {
    point: C::Element,
}

impl<C: Curve> PublicKey<C> {
    /// Wraps a curve point, rejecting the identity.
    pub fn from_element(point: C::Element) -> Result<Self> {
        if C::is_identity(&point) {
            return Err(Error::Decode(
                "public key cannot be the point at infinity".to_string(),
            ));
        }
        Ok(Self { point })
    }

    /// Parses an uncompressed SEC1 point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_element(C::element_from_bytes(bytes)?)
    }

    /// Parses a hex-encoded uncompressed SEC1 point.
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&from_hex(s)?)
    }

    /// Uncompressed SEC1 encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        C::element_to_bytes(&self.point)
    }

    /// Hex encoding of the uncompressed point.
    pub fn to_hex(&self) -> String {
        to_hex(self.to_bytes())
    }

    /// Returns the underlying point.
    pub fn element(&self) -> &C::Element {
        &self.point
    }
}

impl<C: Curve> Clone for PublicKey<C> {
    fn clone(&self) -> Self {
        Self {
            point: self.point.clone(),
        }
    }
}

impl<C: Curve> PartialEq for PublicKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl<C: Curve> Eq for PublicKey<C> {}

impl<C: Curve> fmt::Debug for PublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_hex()).finish()
    }
}

/// Per-commitment randomness `r` with `0 <= r < N`.
///
/// Disclosed together with the message. Encoded as a fixed-width big-endian
/// scalar.
pub struct Randomness<C: Curve> {
    r: C::Scalar,
}

impl<C: Curve> Randomness<C> {
    pub(crate) fn new(r: C::Scalar) -> Self {
        Self { r }
    }

    /// Parses a canonical big-endian scalar of exactly [`Curve::SCALAR_BYTES`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            r: C::scalar_from_bytes(bytes)?,
        })
    }

    /// Parses hex-encoded randomness.
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&from_hex_exact(s, C::SCALAR_BYTES, "randomness")?)
    }

    /// Fixed-width big-endian encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        C::scalar_to_bytes(&self.r)
    }

    /// Hex encoding.
    pub fn to_hex(&self) -> String {
        to_hex(self.to_bytes())
    }

    pub(crate) fn scalar(&self) -> &C::Scalar {
        &self.r
    }
}

impl<C: Curve> Clone for Randomness<C> {
    fn clone(&self) -> Self {
        Self { r: self.r.clone() }
    }
}

impl<C: Curve> PartialEq for Randomness<C> {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r
    }
}

impl<C: Curve> Eq for Randomness<C> {}

impl<C: Curve> fmt::Debug for Randomness<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Randomness").field(&self.to_hex()).finish()
    }
}

impl<C: Curve> Serialize for Randomness<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, C: Curve> Deserialize<'de> for Randomness<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

/// Chameleon digest: SHA-256 of the uncompressed commitment point.
///
/// Equality is constant-time.
#[derive(Clone, Copy)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
    /// Wraps raw digest bytes.
    pub fn new(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parses exactly [`DIGEST_BYTES`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        expect_len(bytes, DIGEST_BYTES, "digest")?;
        let mut out = [0u8; DIGEST_BYTES];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// Parses a hex-encoded digest.
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&from_hex(s)?)
    }

    /// Returns the digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Hex encoding.
    pub fn to_hex(&self) -> String {
        to_hex(self.0)
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Digest {}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digest").field(&self.to_hex()).finish()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

/// A chameleon commitment `(m, r, d)` bound to one public key.
///
/// Serializes with hex-encoded fields so it can be handed to a relying party as
/// JSON or TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Commitment<C: Curve> {
    #[serde(with = "hex_bytes")]
    message: Vec<u8>,
    randomness: Randomness<C>,
    digest: Digest,
}

impl<C: Curve> Commitment<C> {
    /// Bundles a message with its opening.
    pub fn new(message: impl Into<Vec<u8>>, randomness: Randomness<C>, digest: Digest) -> Self {
        Self {
            message: message.into(),
            randomness,
            digest,
        }
    }

    /// Returns the committed message.
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Returns the disclosed randomness.
    pub fn randomness(&self) -> &Randomness<C> {
        &self.randomness
    }

    /// Returns the digest.
    pub fn digest(&self) -> &Digest {
        &self.digest
    }
}

mod hex_bytes {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{P256, P384};

    #[test]
    fn signing_key_hex_roundtrip_populates_key() {
        let sk = SigningKey::<P256>::generate_os().unwrap();
        let restored = SigningKey::<P256>::from_hex(&sk.to_hex()).unwrap();
        assert_eq!(sk.public_key(), restored.public_key());
    }

    #[test]
    fn signing_key_rejects_zero() {
        let zero = vec![0u8; 48];
        assert!(matches!(
            SigningKey::<P384>::from_bytes(&zero),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn signing_key_rejects_order() {
        let order = hex::decode(P256::ORDER_HEX).unwrap();
        assert!(matches!(
            SigningKey::<P256>::from_bytes(&order),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn signing_key_debug_is_redacted() {
        let sk = SigningKey::<P256>::generate_os().unwrap();
        let rendered = format!("{sk:?}");
        assert!(rendered.contains("redacted"));
        assert!(!rendered.contains(sk.to_hex().as_str()));
    }

    #[test]
    fn public_key_hex_roundtrip() {
        let pk = SigningKey::<P384>::generate_os().unwrap().public_key();
        let hex = pk.to_hex();
        assert_eq!(hex.len(), 2 * 97);
        assert!(hex.starts_with("04"));
        assert_eq!(PublicKey::<P384>::from_hex(&hex).unwrap(), pk);
    }

    #[test]
    fn public_key_rejects_garbage() {
        assert!(matches!(
            PublicKey::<P256>::from_hex("04deadbeef"),
            Err(Error::Decode(_))
        ));
        assert!(matches!(
            PublicKey::<P256>::from_hex("not hex"),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn randomness_requires_fixed_width() {
        assert!(matches!(
            Randomness::<P256>::from_hex("01"),
            Err(Error::Decode(_))
        ));
        let ok = "00".repeat(31) + "01";
        assert!(Randomness::<P256>::from_hex(&ok).is_ok());
    }

    #[test]
    fn digest_length_enforced() {
        assert!(Digest::from_bytes(&[0u8; 32]).is_ok());
        assert!(matches!(Digest::from_bytes(&[0u8; 31]), Err(Error::Decode(_))));
        assert!(matches!(Digest::from_hex("abcd"), Err(Error::Decode(_))));
    }

    #[test]
    fn digest_equality() {
        let a = Digest::new([7u8; DIGEST_BYTES]);
        let mut other = [7u8; DIGEST_BYTES];
        assert_eq!(a, Digest::new(other));
        other[DIGEST_BYTES - 1] = 8;
        assert_ne!(a, Digest::new(other));
    }
}
