//! Caesar cipher (fixed shift of 3)

use super::{shift, Candidate};
use crate::error::Result;
use crate::types::{Mode, CAESAR_SHIFT};

pub fn encode(text: &str) -> Result<String> {
    shift::encode(text, CAESAR_SHIFT)
}

pub fn decode(text: &str) -> Result<String> {
    shift::decode(text, CAESAR_SHIFT)
}

pub fn apply(text: &str, mode: Mode) -> Result<String> {
    match mode {
        Mode::Encode => encode(text),
        Mode::Decode => decode(text),
    }
}

/// Same 26 candidates as the shift cipher; the intended one is `k = 03`
pub fn brute_force(text: &str) -> Result<Vec<Candidate>> {
    shift::brute_force(text)
}
