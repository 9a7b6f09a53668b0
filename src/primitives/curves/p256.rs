//! NIST P-256 (secp256r1) curve adapter.
//!
//! # Security Level
//!
//! P-256 provides approximately 128 bits of security against classical attacks.

use p256::elliptic_curve::bigint::U256;
use p256::elliptic_curve::group::Group as _;
use p256::elliptic_curve::ops::Reduce;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::elliptic_curve::{Field, PrimeField};
use p256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar as P256Scalar};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::primitives::crypto::encoding::expect_len;
use crate::primitives::crypto::DIGEST_BYTES;
use crate::{Curve, Error, Result};

/// Number of bytes in a P-256 scalar (32 bytes).
const P256_SCALAR_BYTES: usize = 32;

/// SEC1 tag of an uncompressed point.
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// P-256 (secp256r1) curve marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct P256;

/// Scalar modulo the P-256 group order.
///
/// Scalars are automatically zeroized when dropped for security.
#[derive(Clone, Debug)]
pub struct Scalar(P256Scalar);

/// Point on the P-256 curve.
///
/// Points are stored in projective coordinates for efficient arithmetic and
/// encoded uncompressed.
#[derive(Clone, Debug)]
pub struct Element(ProjectivePoint);

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        // P256Scalar doesn't expose mutable internals, so we overwrite with zero
        self.0 = P256Scalar::ZERO;
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_affine().eq(&other.0.to_affine())
    }
}

impl Eq for Element {}

impl Curve for P256 {
    type Scalar = Scalar;
    type Element = Element;

    const SCALAR_BYTES: usize = P256_SCALAR_BYTES;
    const ORDER_BITS: usize = 256;
    const ORDER_HEX: &'static str =
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

    fn name() -> &'static str {
        "P-256"
    }

    fn generator() -> Self::Element {
        Element(ProjectivePoint::GENERATOR)
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar> {
        expect_len(bytes, P256_SCALAR_BYTES, "P-256 scalar")?;

        let repr = FieldBytes::clone_from_slice(bytes);
        Option::<P256Scalar>::from(P256Scalar::from_repr(repr))
            .map(Scalar)
            .ok_or_else(|| Error::Decode("P-256 scalar is not below the group order".to_string()))
    }

    fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8> {
        scalar.0.to_repr().to_vec()
    }

    fn scalar_from_digest(digest: &[u8; DIGEST_BYTES]) -> Self::Scalar {
        let bytes = FieldBytes::from_slice(digest);
        Scalar(<P256Scalar as Reduce<U256>>::reduce_bytes(bytes))
    }

    fn element_from_bytes(bytes: &[u8]) -> Result<Self::Element> {
        expect_len(bytes, Self::uncompressed_len(), "P-256 point")?;
        if bytes[0] != SEC1_UNCOMPRESSED_TAG {
            return Err(Error::Decode(format!(
                "P-256 point: expected uncompressed tag 0x04, got {:#04x}",
                bytes[0]
            )));
        }

        let encoded = EncodedPoint::from_bytes(bytes)
            .map_err(|_| Error::Decode("Failed to parse encoded P-256 point".to_string()))?;

        let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or_else(|| Error::Decode("Bytes do not represent a P-256 curve point".to_string()))?;

        Ok(Element(ProjectivePoint::from(affine)))
    }

    fn element_to_bytes(element: &Self::Element) -> Vec<u8> {
        let affine = element.0.to_affine();
        affine.to_encoded_point(false).as_bytes().to_vec()
    }

    fn base_mul(scalar: &Self::Scalar) -> Self::Element {
        Element(ProjectivePoint::GENERATOR * scalar.0)
    }

    fn scalar_mul(element: &Self::Element, scalar: &Self::Scalar) -> Self::Element {
        Element(element.0 * scalar.0)
    }

    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element {
        Element(a.0 + b.0)
    }

    fn is_identity(element: &Self::Element) -> bool {
        element.0.is_identity().into()
    }

    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 + b.0)
    }

    fn scalar_sub(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 - b.0)
    }

    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 * b.0)
    }

    fn scalar_invert(scalar: &Self::Scalar) -> Option<Self::Scalar> {
        if Self::scalar_is_zero(scalar) {
            None
        } else {
            Option::<P256Scalar>::from(scalar.0.invert()).map(Scalar)
        }
    }

    fn scalar_is_zero(scalar: &Self::Scalar) -> bool {
        scalar.0.is_zero().into()
    }
}
