// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Census of sequences whose walls avoid large windows.
//!
//! Starting from the empty sequence, every surviving sequence is extended by
//! each residue in turn. An extension survives unless appending the new term
//! closes a run of `size + 1` zeros at the right-hand end of some row. Since
//! every prefix already survived, the survivors of length `n` are exactly the
//! sequences of length `n` none of whose walls ever showed such a run at its
//! growing edge.
//!
//! Over a field, a sequence whose wall has no window of side greater than
//! `size` is said to have deficiency at most `size`; the census counts them
//! generation by generation.

use crate::arith::Modulus;
use crate::error::Result;
use crate::wall::NumberWall;
use tracing::{debug, info};

/// One generation of the census.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Length of every sequence in this generation.
    pub length: usize,
    /// Number of sequences of this length (`m^length`, saturating).
    pub total: u128,
    pub survivors: Vec<Vec<i64>>,
}

/// Whether some row of `wall` ends in `size + 1` zeros.
///
/// Rows `1..=ceil((L+1)/2) - 1` are checked, where L is the sequence length.
pub fn has_edge_window(wall: &NumberWall, size: usize) -> bool {
    let n = wall.len();
    let last_checked = (n + 1).div_ceil(2) - 1;
    (1..=last_checked).any(|r| {
        let end = (n + 1 - r) as isize;
        (0..=size as isize).all(|k| wall.cell(r as isize, end - k).is_zero())
    })
}

/// Extend each survivor by every residue, keeping those without an edge window.
pub fn extend(survivors: &[Vec<i64>], size: usize, modulus: Modulus) -> Result<Vec<Vec<i64>>> {
    let mut next = Vec::new();
    for prefix in survivors {
        for p in 0..modulus.value() {
            let mut candidate = prefix.clone();
            candidate.push(p as i64);
            let wall = NumberWall::build(&candidate, modulus)?;
            if !has_edge_window(&wall, size) {
                next.push(candidate);
            }
        }
    }
    debug!(
        from = survivors.len(),
        to = next.len(),
        size,
        "extended census generation"
    );
    Ok(next)
}

/// Iterator over census generations, starting at length 1.
///
/// Ends after the first generation with no survivors, or after `max_length`.
#[derive(Debug, Clone)]
pub struct Census {
    modulus: Modulus,
    size: usize,
    max_length: Option<usize>,
    current: Vec<Vec<i64>>,
    length: usize,
}

impl Census {
    pub fn new(modulus: Modulus, size: usize) -> Self {
        Self {
            modulus,
            size,
            max_length: None,
            current: vec![Vec::new()],
            length: 0,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl Iterator for Census {
    type Item = Result<Generation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_empty() || self.max_length.is_some_and(|max| self.length >= max) {
            return None;
        }
        let survivors = match extend(&self.current, self.size, self.modulus) {
            Ok(survivors) => survivors,
            Err(e) => {
                self.current.clear();
                return Some(Err(e));
            }
        };
        self.length += 1;
        self.current = survivors.clone();
        let total = u128::from(self.modulus.value())
            .checked_pow(self.length as u32)
            .unwrap_or(u128::MAX);
        info!(
            length = self.length,
            total = %total,
            survivors = survivors.len(),
            size = self.size,
            "census generation"
        );
        Some(Ok(Generation {
            length: self.length,
            total,
            survivors,
        }))
    }
}
