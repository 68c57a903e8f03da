//! Keyed columnar transposition

use crate::crypto::clean_text;
use crate::error::{CipherError, Result};
use crate::types::{Mode, FILLER, MIN_TRANSPOSITION_KEY};
use std::fmt;

/// Keyword and the column order it induces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionKey {
    letters: Vec<char>,
    order: Vec<usize>,
}

impl TranspositionKey {
    /// Build a key from the letters of `keyword` (at least two).
    ///
    /// Columns are ranked by letter, ties broken left to right.
    pub fn new(keyword: &str) -> Result<Self> {
        let letters: Vec<char> = clean_text(keyword).chars().collect();
        if letters.len() < MIN_TRANSPOSITION_KEY {
            return Err(CipherError::InvalidKey(format!(
                "transposition key needs at least {} letters",
                MIN_TRANSPOSITION_KEY
            )));
        }

        let mut order: Vec<usize> = (0..letters.len()).collect();
        order.sort_by_key(|&col| letters[col]);

        Ok(Self { letters, order })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Column indices in the order they are read out
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Zero-based read-out rank of each column, in key order
    pub fn ranks(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.order.len()];
        for (rank, &col) in self.order.iter().enumerate() {
            ranks[col] = rank;
        }
        ranks
    }
}

/// Row/column layout used by an encode or decode, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionGrid {
    pub key: Vec<char>,
    pub ranks: Vec<usize>,
    pub rows: Vec<Vec<Option<char>>>,
}

impl TranspositionGrid {
    fn new(key: &TranspositionKey, rows: Vec<Vec<Option<char>>>) -> Self {
        Self {
            key: key.letters.clone(),
            ranks: key.ranks(),
            rows,
        }
    }
}

impl fmt::Display for TranspositionGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self.key.iter().map(|c| format!("{:>2}", c)).collect();
        writeln!(f, "{}", header.join(" "))?;
        let ranks: Vec<String> = self.ranks.iter().map(|r| format!("{:>2}", r + 1)).collect();
        writeln!(f, "{}", ranks.join(" "))?;
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| format!("{:>2}", cell.unwrap_or('·')))
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Result text plus the grid it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionOutput {
    pub text: String,
    pub grid: TranspositionGrid,
}

fn letters_of(text: &str) -> Result<Vec<char>> {
    let letters: Vec<char> = clean_text(text).chars().collect();
    if letters.is_empty() {
        return Err(CipherError::EmptyInput);
    }
    Ok(letters)
}

/// Pad with `X` to full rows, then read columns in rank order
pub fn encode(text: &str, key: &TranspositionKey) -> Result<TranspositionOutput> {
    let mut letters = letters_of(text)?;
    let num_cols = key.len();
    let padding = (num_cols - letters.len() % num_cols) % num_cols;
    letters.extend(std::iter::repeat(FILLER).take(padding));

    let rows: Vec<Vec<char>> = letters.chunks(num_cols).map(<[char]>::to_vec).collect();

    let mut out = String::with_capacity(letters.len());
    for &col in key.order() {
        out.extend(rows.iter().map(|row| row[col]));
    }

    let grid_rows = rows
        .into_iter()
        .map(|row| row.into_iter().map(Some).collect())
        .collect();

    Ok(TranspositionOutput {
        text: out,
        grid: TranspositionGrid::new(key, grid_rows),
    })
}

/// Number of letters column `col` holds in a ciphertext of `len` letters.
///
/// With `r = len mod cols`, the first `r` columns in key order carry one more
/// letter than the rest; `r = 0` means every column is full.
fn column_len(col: usize, len: usize, num_cols: usize) -> usize {
    let num_rows = len.div_ceil(num_cols);
    let long_cols = len % num_cols;
    if long_cols == 0 || col < long_cols {
        num_rows
    } else {
        num_rows - 1
    }
}

/// Refill columns in rank order, read rows back and strip trailing `X`
pub fn decode(text: &str, key: &TranspositionKey) -> Result<TranspositionOutput> {
    let letters = letters_of(text)?;
    let num_cols = key.len();
    let num_rows = letters.len().div_ceil(num_cols);

    let mut columns: Vec<&[char]> = vec![&letters[..0]; num_cols];
    let mut pos = 0;
    for &col in key.order() {
        let len = column_len(col, letters.len(), num_cols);
        columns[col] = &letters[pos..pos + len];
        pos += len;
    }

    let rows: Vec<Vec<Option<char>>> = (0..num_rows)
        .map(|r| columns.iter().map(|column| column.get(r).copied()).collect())
        .collect();

    let joined: String = rows.iter().flatten().flatten().collect();
    let text = joined.trim_end_matches(FILLER).to_string();

    Ok(TranspositionOutput {
        text,
        grid: TranspositionGrid::new(key, rows),
    })
}

pub fn apply(text: &str, key: &TranspositionKey, mode: Mode) -> Result<TranspositionOutput> {
    match mode {
        Mode::Encode => encode(text, key),
        Mode::Decode => decode(text, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order() {
        let key = TranspositionKey::new("zebras").unwrap();
        assert_eq!(key.letters(), &['Z', 'E', 'B', 'R', 'A', 'S']);
        assert_eq!(key.order(), &[4, 2, 1, 3, 5, 0]);
        assert_eq!(key.ranks(), vec![5, 2, 1, 3, 0, 4]);
    }

    #[test]
    fn test_repeated_letters_keep_left_to_right() {
        let key = TranspositionKey::new("BALL").unwrap();
        assert_eq!(key.order(), &[1, 0, 2, 3]);
    }

    #[test]
    fn test_invalid_key() {
        assert!(matches!(TranspositionKey::new("a"), Err(CipherError::InvalidKey(_))));
        assert!(matches!(TranspositionKey::new("1-2-3"), Err(CipherError::InvalidKey(_))));
        assert_eq!(TranspositionKey::new("k 3 y").unwrap().letters(), &['K', 'Y']);
    }

    #[test]
    fn test_encode_pads() {
        let key = TranspositionKey::new("ZEBRAS").unwrap();
        let out = encode("We are discovered, flee at once", &key).unwrap();
        assert_eq!(out.text, "EVLNXACDTXESEAXROFOXDEECXWIREE");
        assert_eq!(out.grid.rows.len(), 5);
        let last: Vec<Option<char>> = "EXXXXX".chars().map(Some).collect();
        assert_eq!(out.grid.rows[4], last);
    }

    #[test]
    fn test_decode_padded() {
        let key = TranspositionKey::new("ZEBRAS").unwrap();
        let out = decode("EVLNXACDTXESEAXROFOXDEECXWIREE", &key).unwrap();
        assert_eq!(out.text, "WEAREDISCOVEREDFLEEATONCE");
    }

    #[test]
    fn test_decode_ragged_columns() {
        let key = TranspositionKey::new("ZEBRAS").unwrap();
        let out = decode("EVLNACDTESEAROFODEECWIREE", &key).unwrap();
        assert_eq!(out.text, "WEAREDISCOVEREDFLEEATONCE");
        assert_eq!(out.grid.rows[4], vec![Some('E'), None, None, None, None, None]);
    }

    #[test]
    fn test_round_trip() {
        let key = TranspositionKey::new("BALL").unwrap();
        let out = encode("HELLOWORLD", &key).unwrap();
        assert_eq!(out.text, "EWDHOLLOXLRX");
        assert_eq!(decode(&out.text, &key).unwrap().text, "HELLOWORLD");

        let key = TranspositionKey::new("CIPHER").unwrap();
        let plain = "DEFENDTHEEASTWALLOFTHECASTLE";
        let encoded = encode(plain, &key).unwrap();
        assert_eq!(decode(&encoded.text, &key).unwrap().text, plain);
    }

    #[test]
    fn test_regular_length_has_no_padding() {
        let key = TranspositionKey::new("KEY").unwrap();
        let out = encode("ABCDEF", &key).unwrap();
        assert_eq!(out.text.len(), 6);
        assert_eq!(decode(&out.text, &key).unwrap().text, "ABCDEF");
    }

    #[test]
    fn test_grid_display() {
        let key = TranspositionKey::new("BAT").unwrap();
        let out = decode("AB", &key).unwrap();
        assert_eq!(out.text, "BA");
        assert_eq!(out.grid.to_string(), " B  A  T\n 2  1  3\n B  A  ·\n");
    }

    #[test]
    fn test_empty_input() {
        let key = TranspositionKey::new("KEY").unwrap();
        assert_eq!(encode(" 12 ", &key), Err(CipherError::EmptyInput));
        assert_eq!(decode("", &key), Err(CipherError::EmptyInput));
    }
}
