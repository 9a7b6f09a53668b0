use rand_core::CryptoRngCore;
use tracing::debug;

use crate::{Curve, PublicKey, Result, SecureRng, SigningKey, P384};

/// Generates a private trapdoor `x` with `0 < x < N`.
///
/// Draws `ceil(bitlen(N) / 8)` bytes per attempt and redraws until the value
/// lies in range.
///
/// # Errors
///
/// Returns [`Error::RandomSource`](crate::Error::RandomSource) if the generator
/// cannot supply bytes.
///
/// # Examples
///
/// ```rust
/// use chameleon_sig::{generate_key, SecureRng, P256};
///
/// let mut rng = SecureRng::new();
/// let sk = generate_key::<P256, _>(&mut rng).unwrap();
/// ```
pub fn generate_key<C: Curve, R: CryptoRngCore>(rng: &mut R) -> Result<SigningKey<C>> {
    let sk = SigningKey::generate(rng)?;
    debug!(curve = C::name(), "generated chameleon signing key");
    Ok(sk)
}

/// Generates a P-384 key from operating-system entropy.
pub fn generate_default_key() -> Result<SigningKey<P384>> {
    generate_key(&mut SecureRng::new())
}

/// Computes `X = x·G`. A pure function of the curve and the private scalar.
pub fn export_public_key<C: Curve>(sk: &SigningKey<C>) -> PublicKey<C> {
    sk.public_key()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, P256};

    #[test]
    fn generated_keys_are_below_order() {
        let order = hex::decode(P256::ORDER_HEX).unwrap();
        let mut rng = SecureRng::new();

        for _ in 0..16 {
            let sk = generate_key::<P256, _>(&mut rng).unwrap();
            let bytes = sk.to_bytes();
            assert_eq!(bytes.len(), order.len());
            // Fixed-width big-endian encodings compare like integers.
            assert!(bytes.as_slice() < order.as_slice());
            assert!(bytes.iter().any(|b| *b != 0));
        }
    }

    #[test]
    fn default_key_uses_p384() {
        let sk = generate_default_key().unwrap();
        assert_eq!(sk.to_bytes().len(), P384::SCALAR_BYTES);
    }

    #[test]
    fn public_key_is_deterministic() {
        let sk = generate_key::<P256, _>(&mut SecureRng::new()).unwrap();
        assert_eq!(export_public_key(&sk), export_public_key(&sk));

        let reloaded = SigningKey::<P256>::from_bytes(&sk.to_bytes()).unwrap();
        assert_eq!(export_public_key(&reloaded), export_public_key(&sk));
    }

    #[test]
    fn distinct_keys_have_distinct_public_keys() {
        let mut rng = SecureRng::new();
        let a = generate_key::<P256, _>(&mut rng).unwrap();
        let b = generate_key::<P256, _>(&mut rng).unwrap();
        assert_ne!(a.public_key(), b.public_key());
    }

    #[test]
    fn error_type_is_random_source() {
        let err = Error::from(rand_core::Error::new("unavailable"));
        assert!(matches!(err, Error::RandomSource(_)));
    }
}
