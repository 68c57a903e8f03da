//! Error type shared by every cipher and the RSA engine

use num_bigint::BigUint;

/// Errors returned by the cipher and number-theory layers.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Input contains no letters")]
    EmptyInput,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Message {m} must be smaller than the modulus {n}")]
    MessageTooLarge { m: BigUint, n: BigUint },

    #[error("{a} has no inverse modulo {m}")]
    NoInverseExists { a: String, m: String },
}

pub type Result<T> = std::result::Result<T, CipherError>;
