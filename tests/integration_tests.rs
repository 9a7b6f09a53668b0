mod common;

use chameleon_sig::{
    export_public_key, generate_key, Commitment, Curve, Digest, PublicKey, Randomness, SecureRng,
    Signer, SigningKey, Verifier, P256, P384,
};

fn resign_scenario<C: Curve>() {
    common::init_tracing();

    let mut rng = SecureRng::new();
    let sk = generate_key::<C, _>(&mut rng).expect("key generation should succeed");
    let pk = export_public_key(&sk);
    let signer = Signer::new(sk);

    let (r1, d1) = signer
        .sign_str(&mut rng, "test")
        .expect("signing should succeed");
    let r2 = signer
        .re_sign(b"test", b"test2", &r1)
        .expect("re-signing should succeed");

    let verifier = Verifier::new(pk);
    assert!(verifier.verify(b"test", &d1, &r1), "original opening");
    assert!(verifier.verify(b"test2", &d1, &r2), "re-signed opening");
    assert!(!verifier.verify(b"test2", &d1, &r1), "stale randomness");
}

#[test]
fn p256_resign_scenario() {
    resign_scenario::<P256>();
}

#[test]
fn p384_resign_scenario() {
    resign_scenario::<P384>();
}

#[test]
fn hex_exchange_between_parties() {
    common::init_tracing();

    // Signer side: everything leaves the process as hex.
    let mut rng = SecureRng::new();
    let sk = SigningKey::<P256>::generate(&mut rng).unwrap();
    let sk_hex = sk.to_hex().to_string();
    let pk_hex = sk.public_key().to_hex();
    let signer = Signer::new(sk);
    let (r1, d1) = signer.sign(&mut rng, b"invoice #1").unwrap();
    let (r1_hex, d1_hex) = (r1.to_hex(), d1.to_hex());

    // Relying party verifies from hex only.
    let verifier = Verifier::new(PublicKey::<P256>::from_hex(&pk_hex).unwrap());
    assert!(verifier.verify_hex(b"invoice #1", &d1_hex, &r1_hex).unwrap());

    // Signer restores the key from hex and relabels the digest.
    let restored = Signer::new(SigningKey::<P256>::from_hex(&sk_hex).unwrap());
    let r2 = restored
        .re_sign_hex(b"invoice #1", b"invoice #1 (amended)", &r1_hex)
        .unwrap();
    assert!(verifier
        .verify_encoded(b"invoice #1 (amended)", d1.as_bytes(), &r2)
        .unwrap());
}

#[test]
fn chained_resigning_keeps_digest() {
    let signer = common::fresh_signer::<P384>();
    let verifier = Verifier::new(signer.public_key());
    let mut rng = SecureRng::new();

    let (r1, digest) = signer.sign(&mut rng, b"v1").unwrap();
    let r2 = signer.re_sign(b"v1", b"v2", &r1).unwrap();
    let r3 = signer.re_sign(b"v2", b"v3", &r2).unwrap();

    assert!(verifier.verify(b"v1", &digest, &r1));
    assert!(verifier.verify(b"v2", &digest, &r2));
    assert!(verifier.verify(b"v3", &digest, &r3));
    assert_eq!(r3, signer.re_sign(b"v1", b"v3", &r1).unwrap());
}

#[test]
fn commitment_json_roundtrip() {
    let signer = common::fresh_signer::<P256>();
    let commitment = signer.commit(&mut SecureRng::new(), b"payload").unwrap();

    let json = serde_json::to_string(&commitment).unwrap();
    let decoded: Commitment<P256> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, commitment);
    assert!(Verifier::new(signer.public_key()).verify_commitment(&decoded));
}

#[test]
fn commitment_json_rejects_bad_randomness() {
    let json = r#"{"message":"00","randomness":"01","digest":"00"}"#;
    assert!(serde_json::from_str::<Commitment<P256>>(json).is_err());
}

#[test]
fn empty_and_binary_messages() {
    let signer = common::fresh_signer::<P256>();
    let verifier = Verifier::new(signer.public_key());
    let mut rng = SecureRng::new();

    let binary = [0u8, 0xff, 0x00, 0x10];
    let (r1, d) = signer.sign(&mut rng, b"").unwrap();
    let r2 = signer.re_sign(b"", &binary, &r1).unwrap();

    assert!(verifier.verify(b"", &d, &r1));
    assert!(verifier.verify(&binary, &d, &r2));
}

#[test]
fn signers_share_nothing_across_threads() {
    let signer = std::sync::Arc::new(common::fresh_signer::<P256>());
    let verifier = std::sync::Arc::new(Verifier::new(signer.public_key()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let signer = signer.clone();
            let verifier = verifier.clone();
            std::thread::spawn(move || {
                let message = format!("message {i}");
                let (r1, d) = signer.sign(&mut SecureRng::new(), message.as_bytes()).unwrap();
                let r2 = signer.re_sign(message.as_bytes(), b"shared", &r1).unwrap();
                verifier.verify(b"shared", &d, &r2)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn typed_values_roundtrip_through_bytes() {
    let signer = common::fresh_signer::<P384>();
    let (r, d) = signer.sign(&mut SecureRng::new(), b"m").unwrap();

    assert_eq!(Randomness::<P384>::from_bytes(&r.to_bytes()).unwrap(), r);
    assert_eq!(Digest::from_bytes(d.as_bytes()).unwrap(), d);
    assert_eq!(
        PublicKey::<P384>::from_bytes(&signer.public_key().to_bytes()).unwrap(),
        signer.public_key()
    );
}
