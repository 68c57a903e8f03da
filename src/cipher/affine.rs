//! Affine cipher E(x) = a*x + b (mod 26)

use super::{letters_of, map_letters, substitute, Candidate, CandidateKey};
use crate::crypto::{gcd, mod_inverse_small, norm_mod, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use crate::types::{Mode, AFFINE_UNITS};

/// Validated affine key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKey {
    a: i64,
    b: i64,
    a_inv: i64,
}

impl AffineKey {
    /// `a` must be a unit in `1..26` (one of [`AFFINE_UNITS`]); `b` is reduced mod 26.
    pub fn new(a: i64, b: i64) -> Result<Self> {
        if !(1..ALPHABET_LEN).contains(&a) || gcd(a, ALPHABET_LEN) != 1 {
            return Err(CipherError::InvalidKey(format!(
                "a must be coprime with 26. Valid: {}",
                AFFINE_UNITS.map(|u| u.to_string()).join(", ")
            )));
        }
        let a_inv = mod_inverse_small(a, ALPHABET_LEN)?;
        Ok(Self {
            a,
            b: norm_mod(b, ALPHABET_LEN),
            a_inv,
        })
    }

    pub fn a(&self) -> i64 {
        self.a
    }

    pub fn b(&self) -> i64 {
        self.b
    }

    fn encode_letter(&self, n: i64) -> i64 {
        norm_mod(self.a * n + self.b, ALPHABET_LEN)
    }

    fn decode_letter(&self, n: i64) -> i64 {
        norm_mod(self.a_inv * (n - self.b), ALPHABET_LEN)
    }
}

pub fn encode(text: &str, key: &AffineKey) -> Result<String> {
    substitute(text, |n| key.encode_letter(n))
}

pub fn decode(text: &str, key: &AffineKey) -> Result<String> {
    substitute(text, |n| key.decode_letter(n))
}

pub fn apply(text: &str, key: &AffineKey, mode: Mode) -> Result<String> {
    match mode {
        Mode::Encode => encode(text, key),
        Mode::Decode => decode(text, key),
    }
}

/// Decode `text` under all 12 x 26 = 312 keys, a in unit order then b ascending
pub fn brute_force(text: &str) -> Result<Vec<Candidate>> {
    let letters = letters_of(text)?;
    let mut candidates = Vec::with_capacity(AFFINE_UNITS.len() * ALPHABET_LEN as usize);
    for a in AFFINE_UNITS {
        for b in 0..ALPHABET_LEN {
            let key = AffineKey::new(a, b)?;
            candidates.push(Candidate {
                key: CandidateKey::Affine { a, b },
                text: map_letters(&letters, |n| key.decode_letter(n)),
            });
        }
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // a=5, b=8: A->I, F->H, N->P
        let key = AffineKey::new(5, 8).unwrap();
        assert_eq!(encode("AFFINE cipher", &key).unwrap(), "IHHWVCSWFRCP");
        assert_eq!(decode("IHHWVCSWFRCP", &key).unwrap(), "AFFINECIPHER");
    }

    #[test]
    fn test_round_trip_all_keys() {
        let plain = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        for a in AFFINE_UNITS {
            for b in [-30i64, -1, 0, 7, 25, 26, 100] {
                let key = AffineKey::new(a, b).unwrap();
                let c = encode(plain, &key).unwrap();
                assert_eq!(decode(&c, &key).unwrap(), plain);
            }
        }
    }

    #[test]
    fn test_units_are_coprime_with_26() {
        let units: Vec<i64> = (1..ALPHABET_LEN).filter(|&a| gcd(a, ALPHABET_LEN) == 1).collect();
        assert_eq!(units, AFFINE_UNITS);
    }

    #[test]
    fn test_invalid_multipliers() {
        for a in -30i64..60 {
            let result = AffineKey::new(a, 0);
            if AFFINE_UNITS.contains(&a) {
                assert!(result.is_ok());
            } else {
                assert!(matches!(result, Err(CipherError::InvalidKey(_))), "a = {}", a);
            }
        }
    }

    #[test]
    fn test_b_is_normalised() {
        let key = AffineKey::new(3, -1).unwrap();
        assert_eq!(key.b(), 25);
        assert_eq!(key.a_inv, 9);
    }

    #[test]
    fn test_brute_force() {
        let key = AffineKey::new(17, 20).unwrap();
        let cipher = encode("meetmeatnoon", &key).unwrap();
        let candidates = brute_force(&cipher).unwrap();
        assert_eq!(candidates.len(), 312);
        assert_eq!(candidates[0].key, CandidateKey::Affine { a: 1, b: 0 });
        assert_eq!(candidates[26].key, CandidateKey::Affine { a: 3, b: 0 });
        assert_eq!(candidates[311].key, CandidateKey::Affine { a: 25, b: 25 });

        let hit = candidates
            .iter()
            .find(|c| c.key == CandidateKey::Affine { a: 17, b: 20 })
            .unwrap();
        assert_eq!(hit.text, "MEETMEATNOON");
    }

    #[test]
    fn test_brute_force_empty() {
        assert_eq!(brute_force("42"), Err(CipherError::EmptyInput));
    }
}
