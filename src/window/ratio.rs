// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ratios of the geometric sequences along an inner frame.

use super::Frame;
use crate::arith::{Modulus, Residue};
use crate::error::Result;
use crate::wall::Cell;

/// Common ratio along each side of an inner frame.
///
/// A ratio is `None` when the side has no usable pair of entries, e.g. when
/// the window touches the edge of the trapezoid and the side runs into blanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ratios {
    /// Along the top side, from its first two entries.
    pub p: Option<Residue>,
    /// Along the left side, from its first two entries.
    pub q: Option<Residue>,
    /// Along the right side, from the last adjacent pair of residues.
    pub r: Option<Residue>,
    /// Along the bottom side, from the last adjacent pair of residues.
    pub s: Option<Residue>,
}

/// Compute the per-side ratios of `frame`.
///
/// Fails only if an entry has no inverse modulo `modulus`.
pub fn find_ratios(frame: &Frame, modulus: Modulus) -> Result<Ratios> {
    let ratio = |first: Cell, second: Cell| -> Result<Option<Residue>> {
        match (first, second) {
            (Cell::Value(a), Cell::Value(b)) => {
                let inv = modulus.inverse(a as i128)?;
                Ok(Some(modulus.product(&[b as i128, inv as i128])))
            }
            _ => Ok(None),
        }
    };
    let leading = |side: &[Cell]| match side {
        [first, second, ..] => ratio(*first, *second),
        _ => Ok(None),
    };
    let last_pair = |side: &[Cell]| -> Result<Option<Residue>> {
        let mut found = None;
        for pair in side.windows(2) {
            if let Some(value) = ratio(pair[0], pair[1])? {
                found = Some(value);
            }
        }
        Ok(found)
    };

    Ok(Ratios {
        p: leading(&frame.top)?,
        q: leading(&frame.left)?,
        r: last_pair(&frame.right)?,
        s: last_pair(&frame.bottom)?,
    })
}
