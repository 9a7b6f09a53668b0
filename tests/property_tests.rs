use chameleon_sig::{
    from_hex, to_hex, Curve, Randomness, SecureRng, Signer, SigningKey, Verifier, P256, P384,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn resigned_opening_verifies_p256(
        m1 in proptest::collection::vec(any::<u8>(), 0..64),
        m2 in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut rng = SecureRng::new();
        let signer = Signer::new(SigningKey::<P256>::generate(&mut rng).unwrap());
        let verifier = Verifier::new(signer.public_key());

        let (r1, d1) = signer.sign(&mut rng, &m1).unwrap();
        let r2 = signer.re_sign(&m1, &m2, &r1).unwrap();

        prop_assert!(verifier.verify(&m1, &d1, &r1));
        prop_assert!(verifier.verify(&m2, &d1, &r2));
        if m1 != m2 {
            prop_assert!(!verifier.verify(&m2, &d1, &r1));
        }
    }

    #[test]
    fn resigned_opening_verifies_p384(m1 in ".{0,32}", m2 in ".{0,32}") {
        let mut rng = SecureRng::new();
        let signer = Signer::new(SigningKey::<P384>::generate(&mut rng).unwrap());
        let verifier = Verifier::new(signer.public_key());

        let (r1, d1) = signer.sign_str(&mut rng, &m1).unwrap();
        let r2 = signer.re_sign(m1.as_bytes(), m2.as_bytes(), &r1).unwrap();

        prop_assert!(verifier.verify(m2.as_bytes(), &d1, &r2));
    }

    #[test]
    fn hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(from_hex(&to_hex(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn non_hex_input_is_rejected(s in "[0-9a-f]{0,16}[g-z][0-9a-f]{0,16}") {
        prop_assert!(from_hex(&s).is_err());
    }

    #[test]
    fn generated_keys_are_in_range(_seed in any::<u64>()) {
        let sk = SigningKey::<P256>::generate(&mut SecureRng::new()).unwrap();
        let order = hex::decode(P256::ORDER_HEX).unwrap();
        let bytes = sk.to_bytes();

        prop_assert!(bytes.as_slice() < order.as_slice());
        prop_assert!(bytes.iter().any(|b| *b != 0));
    }

    #[test]
    fn canonical_randomness_roundtrips(bytes in proptest::array::uniform32(any::<u8>())) {
        // Values at or above the order must be rejected, everything else roundtrips.
        let order = hex::decode(P256::ORDER_HEX).unwrap();
        match Randomness::<P256>::from_bytes(&bytes) {
            Ok(r) => prop_assert_eq!(r.to_bytes(), bytes.to_vec()),
            Err(_) => prop_assert!(bytes.as_slice() >= order.as_slice()),
        }
    }
}
