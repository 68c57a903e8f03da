//! Common types and constants

use crate::error::{CipherError, Result};
use num_bigint::BigUint;

/// Fixed shift used by the Caesar cipher
pub const CAESAR_SHIFT: i64 = 3;

/// Letter appended by the transposition cipher to complete the last row
pub const FILLER: char = 'X';

/// Minimum number of letters in a transposition keyword
pub const MIN_TRANSPOSITION_KEY: usize = 2;

/// Multipliers coprime with 26 (the units of Z/26Z)
pub const AFFINE_UNITS: [i64; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];

/// Supported ciphers with descriptions
pub const CIPHERS: &[(&str, &str)] = &[
    ("caesar", "Caesar cipher, fixed shift of 3"),
    ("shift", "General shift cipher, any integer key k"),
    ("affine", "Affine cipher E(x) = a*x + b mod 26, a coprime with 26"),
    ("transposition", "Keyed columnar transposition with X padding"),
    ("rsa", "Textbook RSA over two small primes"),
];

/// Direction of a cipher operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    pub fn from_decode_flag(decode: bool) -> Self {
        if decode {
            Mode::Decode
        } else {
            Mode::Encode
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Encode => "Encoded",
            Mode::Decode => "Decoded",
        }
    }
}

/// Parse a signed integer field (shift key, affine a/b)
pub fn parse_integer(field: &'static str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| CipherError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Parse a non-negative arbitrary-precision field (RSA p, q, m, c, e, d, n)
pub fn parse_natural(field: &'static str, value: &str) -> Result<BigUint> {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CipherError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    BigUint::parse_bytes(trimmed.as_bytes(), 10).ok_or_else(|| CipherError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("k", " -7 ").unwrap(), -7);
        assert_eq!(parse_integer("k", "42").unwrap(), 42);
        assert!(matches!(
            parse_integer("k", "seven"),
            Err(CipherError::InvalidNumber { field: "k", .. })
        ));
        assert!(parse_integer("k", "").is_err());
    }

    #[test]
    fn test_parse_natural() {
        assert_eq!(parse_natural("p", "61").unwrap(), BigUint::from(61u32));
        assert_eq!(
            parse_natural("n", "123456789012345678901234567890").unwrap().to_string(),
            "123456789012345678901234567890"
        );
        assert!(parse_natural("p", "-3").is_err());
        assert!(parse_natural("p", "3.5").is_err());
        assert!(parse_natural("p", "").is_err());
    }
}
