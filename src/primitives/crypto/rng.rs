//! Cryptographically secure randomness and uniform scalar sampling.

use rand_core::{CryptoRng, CryptoRngCore, OsRng, RngCore};
use tracing::trace;
use zeroize::Zeroizing;

use super::Curve;
use crate::{Error, Result};

/// Upper bound on redraws before sampling gives up.
///
/// For the supported curves a single draw is rejected with probability below
/// `2^-32`, so reaching this bound means the source is broken.
const MAX_SAMPLING_ATTEMPTS: usize = 256;

/// Masks keeping only the significant bits of the leading byte, indexed by
/// `bitlen(N) % 8`.
const LEADING_BYTE_MASK: [u8; 8] = [0xff, 0x01, 0x03, 0x07, 0x0f, 0x1f, 0x3f, 0x7f];

/// Cryptographically secure random number generator backed by the OS.
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new generator reading from the operating system.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

/// Which end of the scalar range a sample may include.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleRange {
    /// `[0, N)`, used for commitment randomness.
    IncludingZero,
    /// `(0, N)`, used for private keys.
    NonZero,
}

/// Draws a uniform scalar below the curve order by rejection sampling.
///
/// Reads `ceil(bitlen(N) / 8)` bytes per attempt, clears the bits above
/// `bitlen(N)` and redraws whenever the value is out of range. Failures of the
/// underlying source are surfaced as [`Error::RandomSource`] and never retried.
pub fn sample_scalar<C: Curve, R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    range: SampleRange,
) -> Result<C::Scalar> {
    for attempt in 0..MAX_SAMPLING_ATTEMPTS {
        let mut buf = Zeroizing::new(vec![0u8; C::SCALAR_BYTES]);
        rng.try_fill_bytes(&mut buf)?;
        buf[0] &= LEADING_BYTE_MASK[C::ORDER_BITS % 8];

        let candidate = C::scalar_from_bytes(&buf);

        match candidate {
            Ok(s) if range == SampleRange::NonZero && C::scalar_is_zero(&s) => {
                trace!(curve = C::name(), attempt, "rejected zero scalar");
            }
            Ok(s) => return Ok(s),
            Err(_) => {
                trace!(curve = C::name(), attempt, "rejected scalar above group order");
            }
        }
    }

    Err(Error::RandomSource(format!(
        "no scalar below the {} group order after {MAX_SAMPLING_ATTEMPTS} draws",
        C::name()
    )))
}
