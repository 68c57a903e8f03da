//! Substitution and transposition ciphers

pub mod affine;
pub mod caesar;
pub mod shift;
pub mod transposition;

pub use affine::AffineKey;
pub use transposition::TranspositionKey;

use crate::crypto::{letters_to_text, text_to_letters};
use crate::error::{CipherError, Result};
use std::fmt;

/// Letter values of `text`, failing when nothing usable is left
pub fn letters_of(text: &str) -> Result<Vec<i64>> {
    let letters = text_to_letters(text.trim());
    if letters.is_empty() {
        return Err(CipherError::EmptyInput);
    }
    Ok(letters)
}

/// Apply a per-letter map to every letter of `text` (generic function for all substitution ciphers)
pub fn substitute<F>(text: &str, map: F) -> Result<String>
where
    F: Fn(i64) -> i64,
{
    let letters = letters_of(text)?;
    Ok(map_letters(&letters, map))
}

pub(crate) fn map_letters<F>(letters: &[i64], map: F) -> String
where
    F: Fn(i64) -> i64,
{
    let mapped: Vec<i64> = letters.iter().map(|&n| map(n)).collect();
    letters_to_text(&mapped)
}

/// Key that produced a brute-force candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKey {
    Shift { k: i64 },
    Affine { a: i64, b: i64 },
}

impl fmt::Display for CandidateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateKey::Shift { k } => write!(f, "k = {:02}", k),
            CandidateKey::Affine { a, b } => write!(f, "a={}, b={}", a, b),
        }
    }
}

/// One brute-force decryption, labelled with its key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub key: CandidateKey,
    pub text: String,
}
