#![no_main]

use chameleon_sig::{Curve, SigningKey, Verifier, P256};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fixed key so that only the opening is attacker controlled.
    let Ok(sk) = SigningKey::<P256>::from_bytes(&[0x2a; 32]) else {
        return;
    };
    let verifier = Verifier::new(sk.public_key());

    let (digest, rest) = data.split_at(data.len().min(32));
    let (randomness, message) = rest.split_at(rest.len().min(P256::SCALAR_BYTES));

    let _ = verifier.verify_encoded(message, digest, randomness);
});
