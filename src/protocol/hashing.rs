//! Hash-derived values of the chameleon hash.
//!
//! Two SHA-256 passes are involved: one maps an arbitrary message to a scalar,
//! the other compresses the commitment point `k·G` into the published digest.

use sha2::{Digest as _, Sha256};

use crate::{Curve, Digest};

/// `H(m)`: SHA-256 of the message as a big-endian integer, reduced modulo `N`.
pub fn message_scalar<C: Curve>(message: &[u8]) -> C::Scalar {
    let hash: [u8; 32] = Sha256::digest(message).into();
    C::scalar_from_digest(&hash)
}

/// `k = x·r + H(m) mod N`, the exponent bound to a digest.
pub(crate) fn commitment_exponent<C: Curve>(
    x: &C::Scalar,
    r: &C::Scalar,
    message: &[u8],
) -> C::Scalar {
    let xr = C::scalar_mul_scalar(x, r);
    C::scalar_add(&xr, &message_scalar::<C>(message))
}

/// SHA-256 of the uncompressed SEC1 encoding of `point`.
pub fn point_digest<C: Curve>(point: &C::Element) -> Digest {
    let encoded = C::element_to_bytes(point);
    Digest::new(Sha256::digest(&encoded).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{P256, P384};

    #[test]
    fn message_scalar_is_deterministic() {
        assert_eq!(
            message_scalar::<P256>(b"test"),
            message_scalar::<P256>(b"test")
        );
        assert_ne!(
            message_scalar::<P256>(b"test"),
            message_scalar::<P256>(b"test2")
        );
    }

    #[test]
    fn message_scalar_matches_sha256() {
        // SHA-256("abc") is below both orders, so no reduction happens.
        let expected = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
        let scalar = message_scalar::<P384>(b"abc");
        let bytes = P384::scalar_to_bytes(&scalar);
        assert_eq!(hex::encode(&bytes[16..]), expected);
        assert_eq!(
            hex::encode(P256::scalar_to_bytes(&message_scalar::<P256>(b"abc"))),
            expected
        );
    }

    #[test]
    fn point_digest_hashes_uncompressed_encoding() {
        let g = P256::generator();
        let expected: [u8; 32] = Sha256::digest(P256::element_to_bytes(&g)).into();
        assert_eq!(point_digest::<P256>(&g), Digest::new(expected));
    }
}
