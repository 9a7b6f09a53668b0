use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// NIST P-256 curve adapter.
pub mod p256;
/// NIST P-384 curve adapter.
pub mod p384;

pub use self::p256::P256;
pub use self::p384::P384;

/// Runtime tag for the supported curves.
///
/// Library code is generic over [`Curve`](crate::Curve); this tag lets callers
/// pick the curve from configuration or the command line and dispatch once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// NIST P-256.
    P256,
    /// NIST P-384.
    #[default]
    P384,
}

impl CurveKind {
    /// Canonical lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveKind::P256 => "p256",
            CurveKind::P384 => "p384",
        }
    }

    /// Byte length of a private key or randomness value on this curve.
    pub fn scalar_bytes(&self) -> usize {
        use crate::Curve;

        match self {
            CurveKind::P256 => P256::SCALAR_BYTES,
            CurveKind::P384 => P384::SCALAR_BYTES,
        }
    }

    /// Infers the curve from the length of a hex-decoded private key.
    pub fn from_key_len(len: usize) -> Option<Self> {
        [CurveKind::P256, CurveKind::P384]
            .into_iter()
            .find(|kind| kind.scalar_bytes() == len)
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "p256" | "secp256r1" | "prime256v1" => Ok(CurveKind::P256),
            "p384" | "secp384r1" => Ok(CurveKind::P384),
            other => Err(Error::Config(format!("unsupported curve: {other}"))),
        }
    }
}
