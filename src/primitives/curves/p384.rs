//! NIST P-384 (secp384r1) curve adapter.
//!
//! P-384 is the default curve for freshly generated keys. Its 384-bit order is
//! wider than the SHA-256 message hash, so message scalars never wrap.

use p384::elliptic_curve::bigint::U384;
use p384::elliptic_curve::group::Group as _;
use p384::elliptic_curve::ops::Reduce;
use p384::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p384::elliptic_curve::{Field, PrimeField};
use p384::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar as P384Scalar};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::primitives::crypto::encoding::expect_len;
use crate::primitives::crypto::DIGEST_BYTES;
use crate::{Curve, Error, Result};

/// Number of bytes in a P-384 scalar (48 bytes).
const P384_SCALAR_BYTES: usize = 48;

/// SEC1 tag of an uncompressed point.
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// P-384 (secp384r1) curve marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct P384;

/// Scalar modulo the P-384 group order, zeroized on drop.
#[derive(Clone, Debug)]
pub struct Scalar(P384Scalar);

/// Point on the P-384 curve.
#[derive(Clone, Debug)]
pub struct Element(ProjectivePoint);

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0 = P384Scalar::ZERO;
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

impl Curve for P384 {
    type Scalar = Scalar;
    type Element = Element;

    const SCALAR_BYTES: usize = P384_SCALAR_BYTES;
    const ORDER_BITS: usize = 384;
    const ORDER_HEX: &'static str = "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973";

    fn name() -> &'static str {
        "P-384"
    }

    fn generator() -> Self::Element {
        Element(ProjectivePoint::GENERATOR)
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar> {
        expect_len(bytes, P384_SCALAR_BYTES, "P-384 scalar")?;

        let repr = FieldBytes::clone_from_slice(bytes);
        Option::<P384Scalar>::from(P384Scalar::from_repr(repr))
            .map(Scalar)
            .ok_or_else(|| Error::Decode("P-384 scalar is not below the group order".to_string()))
    }

    fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8> {
        scalar.0.to_repr().to_vec()
    }

    fn scalar_from_digest(digest: &[u8; DIGEST_BYTES]) -> Self::Scalar {
        // Left-pad the 32-byte digest to the 48-byte field width.
        let mut wide = FieldBytes::default();
        wide[P384_SCALAR_BYTES - DIGEST_BYTES..].copy_from_slice(digest);
        Scalar(<P384Scalar as Reduce<U384>>::reduce_bytes(&wide))
    }

    fn element_from_bytes(bytes: &[u8]) -> Result<Self::Element> {
        expect_len(bytes, Self::uncompressed_len(), "P-384 point")?;
        if bytes[0] != SEC1_UNCOMPRESSED_TAG {
            return Err(Error::Decode(format!(
                "P-384 point: expected uncompressed tag 0x04, got {:#04x}",
                bytes[0]
            )));
        }

        let encoded = EncodedPoint::from_bytes(bytes)
            .map_err(|_| Error::Decode("Failed to parse encoded P-384 point".to_string()))?;

        let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or_else(|| Error::Decode("Bytes do not represent a P-384 curve point".to_string()))?;

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
            Option::<P384Scalar>::from(scalar.0.invert()).map(Scalar)
        }
    }

    fn scalar_is_zero(scalar: &Self::Scalar) -> bool {
        scalar.0.is_zero().into()
    }
}
