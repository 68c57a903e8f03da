//! General shift cipher and its 26-key brute force

use super::{letters_of, map_letters, substitute, Candidate, CandidateKey};
use crate::crypto::{norm_mod, ALPHABET_LEN};
use crate::error::Result;
use crate::types::Mode;

fn shift_letter(n: i64, k: i64) -> i64 {
    norm_mod(n + norm_mod(k, ALPHABET_LEN), ALPHABET_LEN)
}

fn unshift_letter(n: i64, k: i64) -> i64 {
    norm_mod(n - norm_mod(k, ALPHABET_LEN), ALPHABET_LEN)
}

/// Shift every letter forward by `k`; any integer key is accepted
pub fn encode(text: &str, k: i64) -> Result<String> {
    substitute(text, |n| shift_letter(n, k))
}

pub fn decode(text: &str, k: i64) -> Result<String> {
    substitute(text, |n| unshift_letter(n, k))
}

pub fn apply(text: &str, k: i64, mode: Mode) -> Result<String> {
    match mode {
        Mode::Encode => encode(text, k),
        Mode::Decode => decode(text, k),
    }
}

/// Decode `text` under every key `k` in `0..26`, in ascending order
pub fn brute_force(text: &str) -> Result<Vec<Candidate>> {
    let letters = letters_of(text)?;
    Ok((0..ALPHABET_LEN)
        .map(|k| Candidate {
            key: CandidateKey::Shift { k },
            text: map_letters(&letters, |n| unshift_letter(n, k)),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_round_trip_any_key() {
        let plain = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        for k in [-1000i64, -27, -1, 0, 1, 13, 25, 26, 999, i64::MAX, i64::MIN] {
            let c = encode(plain, k).unwrap();
            assert_eq!(decode(&c, k).unwrap(), plain, "key {}", k);
        }
    }

    #[test]
    fn test_negative_key_equivalent() {
        assert_eq!(encode("abc", -1).unwrap(), encode("abc", 25).unwrap());
        assert_eq!(encode("abc", 27).unwrap(), "BCD");
    }

    #[test]
    fn test_brute_force() {
        let cipher = encode("attackatdawn", 7).unwrap();
        let candidates = brute_force(&cipher).unwrap();
        assert_eq!(candidates.len(), 26);
        for (k, candidate) in candidates.iter().enumerate() {
            let k = k as i64;
            assert_eq!(candidate.key, CandidateKey::Shift { k });
            assert_eq!(candidate.text, decode(&cipher, k).unwrap());
        }
        assert_eq!(candidates[7].text, "ATTACKATDAWN");
    }

    #[test]
    fn test_brute_force_empty() {
        assert_eq!(brute_force("..."), Err(CipherError::EmptyInput));
    }
}
