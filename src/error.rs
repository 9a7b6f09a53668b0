//! Error types for chameleon signatures

/// Main error types for the library.
///
/// A verification mismatch is never an error: it is reported as `false`. These
/// variants describe inputs or environments the operations cannot work with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The random source could not supply bytes.
    #[error("Random source failure: {0}")]
    RandomSource(String),

    /// Malformed hex, scalar, point or length.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The private scalar has no inverse modulo the curve order.
    #[error("Private key is not invertible modulo the curve order")]
    NonInvertibleKey,

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<rand_core::Error> for Error {
    fn from(err: rand_core::Error) -> Self {
        Error::RandomSource(err.to_string())
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::Decode(format!("invalid hex: {err}"))
    }
}
