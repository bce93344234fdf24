// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sequences to feed into number walls.

use crate::error::{Result, WallError};

/// The Thue-Morse sequence: parity of the number of set bits of 0, 1, 2, ...
///
/// ```
/// use number_wall::sequence::thue_morse;
/// assert_eq!(thue_morse(8), vec![0, 1, 1, 0, 1, 0, 0, 1]);
/// ```
pub fn thue_morse(length: usize) -> Vec<i64> {
    (0..length as u64)
        .map(|x| i64::from(x.count_ones() % 2 == 1))
        .collect()
}

/// Parse a comma or whitespace separated list of integers.
pub fn parse(text: &str) -> Result<Vec<i64>> {
    let terms = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|term| !term.is_empty())
        .map(|term| {
            term.parse::<i64>().map_err(|e| WallError::InvalidInput {
                reason: format!("cannot parse {:?} as an integer: {}", term, e),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if terms.is_empty() {
        return Err(WallError::InvalidInput {
            reason: "sequence is empty".to_string(),
        });
    }
    Ok(terms)
}
