//! Hex helpers used at the API boundary.
//!
//! Keys, randomness and digests travel as big-endian bytes and are hex-encoded
//! when they leave the process.

use crate::Result;

/// Encodes bytes as lowercase hex.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decodes hex into bytes.
///
/// Accepts upper- and lowercase digits and surrounding whitespace. An odd number
/// of digits or any non-hex character is an [`Error::Decode`](crate::Error::Decode);
/// nothing is truncated or padded.
pub fn from_hex(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(s.trim())?)
}

/// Decodes hex that must be exactly `len` bytes long.
pub(crate) fn from_hex_exact(s: &str, len: usize, what: &str) -> Result<Vec<u8>> {
    let bytes = from_hex(s)?;
    expect_len(&bytes, len, what)?;
    Ok(bytes)
}

/// Rejects byte strings whose length differs from `len`.
pub(crate) fn expect_len(bytes: &[u8], len: usize, what: &str) -> Result<()> {
    if bytes.len() != len {
        return Err(crate::Error::Decode(format!(
            "{what}: expected {len} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn hex_roundtrip() {
        let bytes: Vec<u8> = vec![0x00, 0x01, 0xab, 0xff];
        assert_eq!(to_hex(&bytes), "0001abff");
        assert_eq!(from_hex(&to_hex(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn empty_input_roundtrips() {
        assert_eq!(to_hex([0u8; 0]), "");
        assert!(from_hex("").unwrap().is_empty());
    }

    #[test]
    fn uppercase_and_whitespace_accepted() {
        assert_eq!(from_hex(" ABcd\n").unwrap(), vec![0xab, 0xcd]);
    }

    #[test]
    fn odd_length_rejected() {
        assert!(matches!(from_hex("abc"), Err(Error::Decode(_))));
    }

    #[test]
    fn non_hex_rejected() {
        assert!(matches!(from_hex("zz"), Err(Error::Decode(_))));
    }

    #[test]
    fn exact_length_enforced() {
        assert!(from_hex_exact("0011", 2, "value").is_ok());
        assert!(matches!(
            from_hex_exact("001122", 2, "value"),
            Err(Error::Decode(_))
        ));
    }
}
