#![no_main]

use chameleon_sig::{PublicKey, P256, P384};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(pk) = PublicKey::<P256>::from_bytes(data) {
        assert_eq!(pk.to_bytes(), data);
    }
    if let Ok(pk) = PublicKey::<P384>::from_bytes(data) {
        assert_eq!(pk.to_bytes(), data);
    }
});
