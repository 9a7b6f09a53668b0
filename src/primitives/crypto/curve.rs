use core::fmt::Debug;

use zeroize::Zeroize;

use crate::Result;

/// Size in bytes of a SHA-256 output, used for message hashes and digests.
pub const DIGEST_BYTES: usize = 32;

/// Elliptic-curve capability consumed by the chameleon hash.
///
/// Every signing, re-signing and verification routine is written against this
/// trait, so a new curve only needs an implementation here. Scalars live in the
/// prime field of order `N`, elements are points of the prime-order group
/// generated by `G`.
pub trait Curve: Clone + Debug + Send + Sync + 'static {
    /// Scalar type for this curve (integers modulo `N`).
    ///
    /// Scalars must be zeroizable for security.
    type Scalar: Clone + Debug + Eq + PartialEq + Zeroize + Send + Sync;

    /// Element type for this curve (points).
    type Element: Clone + Debug + Eq + PartialEq + Send + Sync;

    /// Byte length of a canonical big-endian scalar, `ceil(bitlen(N) / 8)`.
    const SCALAR_BYTES: usize;

    /// Bit length of the group order `N`.
    const ORDER_BITS: usize;

    /// Big-endian hex of the group order `N`.
    const ORDER_HEX: &'static str;

    /// Returns the name of this curve.
    fn name() -> &'static str;

    /// Returns the base point `G`.
    fn generator() -> Self::Element;

    /// Byte length of an uncompressed SEC1 point encoding.
    fn uncompressed_len() -> usize {
        1 + 2 * Self::SCALAR_BYTES
    }

    /// Parses a canonical big-endian scalar.
    ///
    /// The input must be exactly [`Curve::SCALAR_BYTES`] long and encode a value
    /// strictly below `N`. Zero is accepted.
    fn scalar_from_bytes(b: &[u8]) -> Result<Self::Scalar>;

    /// Serializes a scalar to its fixed-width big-endian form.
    fn scalar_to_bytes(s: &Self::Scalar) -> Vec<u8>;

    /// Interprets a SHA-256 output as a big-endian integer reduced modulo `N`.
    fn scalar_from_digest(digest: &[u8; DIGEST_BYTES]) -> Self::Scalar;

    /// Parses an uncompressed SEC1 point and checks it lies on the curve.
    fn element_from_bytes(b: &[u8]) -> Result<Self::Element>;

    /// Serializes an element in uncompressed SEC1 form.
    fn element_to_bytes(e: &Self::Element) -> Vec<u8>;

    /// Base-point scalar multiplication: `s * G`.
    fn base_mul(s: &Self::Scalar) -> Self::Element;

    /// Arbitrary-point scalar multiplication: `s * e`.
    fn scalar_mul(e: &Self::Element, s: &Self::Scalar) -> Self::Element;

    /// Point addition: `a + b`.
    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Checks if an element is the point at infinity.
    fn is_identity(e: &Self::Element) -> bool;

    /// Adds two scalars modulo `N`.
    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Subtracts two scalars modulo `N`.
    fn scalar_sub(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Multiplies two scalars modulo `N`.
    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Computes the multiplicative inverse modulo `N`.
    ///
    /// Returns `None` if the scalar is zero.
    fn scalar_invert(s: &Self::Scalar) -> Option<Self::Scalar>;

    /// Checks if a scalar is zero.
    fn scalar_is_zero(s: &Self::Scalar) -> bool;
}
