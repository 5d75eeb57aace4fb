//! `0x` hex codec shared by the byte newtypes.

use crate::error::HexError;

pub const PREFIX: &str = "0x";

/// Encodes bytes as `0x`-prefixed lowercase hex.
pub fn encode_prefixed(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(PREFIX.len() + bytes.len() * 2);
    out.push_str(PREFIX);
    out.push_str(&hex::encode(bytes));
    out
}

/// Decodes `0x`-prefixed hex. An odd number of digits is read as if it had a
/// leading zero, so `0x1` decodes to `[0x01]`.
pub fn decode_prefixed(s: &str) -> Result<Vec<u8>, HexError> {
    let digits = s
        .strip_prefix(PREFIX)
        .or_else(|| s.strip_prefix("0X"))
        .ok_or(HexError::MissingPrefix)?;

    if digits.len() % 2 == 1 {
        let mut padded = String::with_capacity(digits.len() + 1);
        padded.push('0');
        padded.push_str(digits);
        return Ok(hex::decode(padded)?);
    }
    Ok(hex::decode(digits)?)
}

/// Decodes into a fixed-width big-endian buffer, left-padding short input.
pub fn decode_left_padded<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let raw = decode_prefixed(s)?;
    if raw.len() > N {
        return Err(HexError::TooLong { max: N, found: raw.len() });
    }
    let mut out = [0u8; N];
    out[N - raw.len()..].copy_from_slice(&raw);
    Ok(out)
}

/// Decodes into a fixed-width buffer, rejecting any other length.
pub fn decode_exact<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let raw = decode_prefixed(s)?;
    raw.as_slice()
        .try_into()
        .map_err(|_| HexError::WrongLength { expected: N, found: raw.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_lowercase_and_prefixed() {
        assert_eq!(encode_prefixed(&[0xAB, 0x01]), "0xab01");
        assert_eq!(encode_prefixed(&[]), "0x");
    }

    #[test]
    fn test_decode_odd_length() {
        assert_eq!(decode_prefixed("0x1").unwrap(), vec![0x01]);
        assert_eq!(decode_prefixed("0xabc").unwrap(), vec![0x0a, 0xbc]);
    }

    #[test]
    fn test_decode_requires_prefix() {
        assert_eq!(decode_prefixed("abcd"), Err(HexError::MissingPrefix));
    }

    #[test]
    fn test_decode_invalid_digit() {
        assert_eq!(
            decode_prefixed("0xzz"),
            Err(HexError::Invalid(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }))
        );
    }

    #[test]
    fn test_left_padding() {
        let word: [u8; 4] = decode_left_padded("0x0102").unwrap();
        assert_eq!(word, [0, 0, 1, 2]);
        assert!(matches!(
            decode_left_padded::<2>("0x010203"),
            Err(HexError::TooLong { max: 2, found: 3 })
        ));
    }

    #[test]
    fn test_exact_length() {
        assert!(decode_exact::<2>("0x0102").is_ok());
        assert!(matches!(
            decode_exact::<2>("0x01"),
            Err(HexError::WrongLength { expected: 2, found: 1 })
        ));
    }
}
