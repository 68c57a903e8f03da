//! Letter encoding and decoding over the 26-letter Latin alphabet

use super::norm_mod;

/// Uppercase alphabet; a letter's value is its index in this string
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Size of the alphabet, the modulus of every substitution cipher
pub const ALPHABET_LEN: i64 = 26;

/// Case-fold `text` and map each ASCII letter to its value in `0..26`.
///
/// Anything that is not a letter is dropped, so the result may be empty.
pub fn text_to_letters(text: &str) -> Vec<i64> {
    text.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
        .map(|c| i64::from(c as u8 - b'A'))
        .collect()
}

/// Map a letter value back to its uppercase character.
///
/// Out-of-range and negative values are reduced mod 26 first.
pub fn letter_to_char(n: i64) -> char {
    let idx = norm_mod(n, ALPHABET_LEN) as usize;
    char::from(ALPHABET.as_bytes()[idx])
}

/// Map a sequence of letter values back to text
pub fn letters_to_text(letters: &[i64]) -> String {
    letters.iter().copied().map(letter_to_char).collect()
}

/// Keep only the letters of `text`, uppercased
pub fn clean_text(text: &str) -> String {
    letters_to_text(&text_to_letters(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_letters() {
        assert_eq!(text_to_letters("Hi, Az!"), vec![7, 8, 0, 25]);
        assert!(text_to_letters("123 ?!").is_empty());
        assert!(text_to_letters("").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_dropped() {
        assert_eq!(text_to_letters("Ça va"), vec![0, 21, 0]);
    }

    #[test]
    fn test_letters_to_text_normalises() {
        assert_eq!(letters_to_text(&[0, 25, 26, -1, 53]), "AZAZB");
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("attack at dawn!"), "ATTACKATDAWN");
    }
}
