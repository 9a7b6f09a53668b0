//! Common test utilities shared across integration tests.

use chameleon_sig::{Curve, SecureRng, Signer, SigningKey};

/// Initialize test tracing (call once at the beginning of tests).
///
/// Shows debug output from the library on the test writer. Subsequent calls are
/// safe and will be ignored.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("chameleon_sig=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// Creates a signer around a freshly generated key.
#[allow(dead_code)]
pub fn fresh_signer<C: Curve>() -> Signer<C> {
    let sk = SigningKey::<C>::generate(&mut SecureRng::new()).expect("key generation");
    Signer::new(sk)
}
