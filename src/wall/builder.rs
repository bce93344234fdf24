// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Number wall construction.
//!
//! Rows are filled top to bottom, left to right. Each cell of row `r >= 2`
//! is determined by the cells above it:
//!
//! 1. If the cell two above is nonzero, the three-term recurrence
//!    `T[r][j] = (T[r-1][j]² - T[r-1][j-1]·T[r-1][j+1]) / T[r-2][j]` applies.
//!    Row 2 never divides (row 0 is all ones).
//! 2. Otherwise the cell two above lies in a window. If the cell directly
//!    above is also zero, the new cell is on the window's bottom inner frame
//!    (or still inside an open window).
//! 3. If the cell directly above is nonzero, the new cell is on the window's
//!    bottom outer frame.
//!
//! Cases 2 and 3 use the frame constraints of Lunnon's "The number-wall
//! algorithm: an LFSR cookbook" (J. Integer Sequences, 2001). A window that is
//! not square when reached (still open, or clipped by the trapezoid) gives 0.

use crate::arith::{sign, Modulus, Residue};
use crate::error::{Result, WallError};
use crate::wall::{Cell, NumberWall, Rule};
use crate::window::{find_ratios, inner_frame, locate_window, outer_frame, Frame};
use tracing::{debug, trace};

/// Build the number wall of `sequence` modulo `modulus`.
///
/// The returned wall has rows -1..=ceil(L/2) where L is the sequence length.
/// Fails with [`WallError::InvalidInput`] for an empty sequence, and with
/// [`WallError::DivisionUndefined`] if the modulus is composite and a
/// non-invertible divisor is reached.
pub fn build(sequence: &[i64], modulus: Modulus) -> Result<NumberWall> {
    if sequence.is_empty() {
        return Err(WallError::InvalidInput {
            reason: "sequence must have at least one element".to_string(),
        });
    }
    let length = sequence.len();
    let depth = length.div_ceil(2);
    let mut wall = NumberWall::with_shape(modulus, layout(length), length);

    for (i, &x) in sequence.iter().enumerate() {
        wall.set(1, i + 1, Cell::Value(modulus.reduce(x as i128)));
    }

    for r in 2..=depth as isize {
        for j in wall.valid_columns(r) {
            let (entry, rule) = if r == 2 {
                (first_difference(&wall, j), Rule::Recurrence)
            } else {
                next_cell(&wall, r, j)?
            };
            wall.statistics_mut().increment(rule);
            wall.set(r, j, Cell::Value(entry));
        }
    }

    let stats = wall.statistics();
    debug!(
        length,
        modulus = modulus.value(),
        rows = depth,
        recurrence = stats.get(Rule::Recurrence),
        inner_frame = stats.get(Rule::InnerFrame),
        outer_frame = stats.get(Rule::OuterFrame),
        non_square = stats.get(Rule::NonSquareWindow),
        incomplete = stats.get(Rule::IncompleteFrame),
        "built number wall"
    );
    Ok(wall)
}

/// Rows -1 and 0 are seeded; rows 1..=ceil(L/2) are pending trapezoids.
fn layout(length: usize) -> Vec<Vec<Cell>> {
    let depth = length.div_ceil(2);
    let seeded = |fill: Cell| {
        let mut row = vec![fill; length + 2];
        row[0] = Cell::Blank;
        row[length + 1] = Cell::Blank;
        row
    };
    let mut rows = Vec::with_capacity(depth + 2);
    rows.push(seeded(Cell::Value(0)));
    rows.push(seeded(Cell::Value(1)));
    for inset in 0..depth {
        let mut row = vec![Cell::Blank; length + 2];
        row[1 + inset..=length - inset].fill(Cell::Pending);
        rows.push(row);
    }
    rows
}

/// Residue at (`r`, `c`); only called on computed cells of the trapezoid.
fn residue(wall: &NumberWall, r: isize, c: usize) -> i128 {
    wall.cell(r, c as isize).value().unwrap_or_default() as i128
}

/// `T[r-1][j]² - T[r-1][j-1]·T[r-1][j+1]` for the row above `r`.
fn cross(wall: &NumberWall, r: isize, j: usize) -> i128 {
    let above = residue(wall, r - 1, j);
    above * above - residue(wall, r - 1, j - 1) * residue(wall, r - 1, j + 1)
}

fn first_difference(wall: &NumberWall, j: usize) -> Residue {
    wall.modulus().reduce(cross(wall, 2, j))
}

fn next_cell(wall: &NumberWall, r: isize, j: usize) -> Result<(Residue, Rule)> {
    let modulus = wall.modulus();
    let above2 = wall.cell(r - 2, j as isize);
    let above1 = wall.cell(r - 1, j as isize);

    if !above2.is_zero() {
        let divisor = modulus.inverse(residue(wall, r - 2, j))?;
        return Ok((
            modulus.product(&[divisor as i128, cross(wall, r, j)]),
            Rule::Recurrence,
        ));
    }

    let window = locate_window(wall, r - 2, j)?;
    if !window.is_square() {
        trace!(row = r, column = j, ?window, "window not square");
        return Ok((0, Rule::NonSquareWindow));
    }
    let inner = inner_frame(wall, &window);
    let g = inner.top.len() as i64 - 2;
    let k = g - j as i64 + window.left as i64;

    let extrapolated = if above1.is_zero() {
        inner_frame_entry(modulus, &inner, g, k)?.map(|v| (v, Rule::InnerFrame))
    } else {
        let outer = outer_frame(wall, &window);
        outer_frame_entry(modulus, &inner, &outer, k)?.map(|v| (v, Rule::OuterFrame))
    };

    match extrapolated {
        Some((entry, rule)) => {
            trace!(row = r, column = j, ?window, ?rule, entry, "window extrapolation");
            Ok((entry, rule))
        }
        None => {
            debug!(row = r, column = j, ?window, k, "incomplete frame, entry set to 0");
            Ok((0, Rule::IncompleteFrame))
        }
    }
}

/// The `k`th entry of a frame side, if it holds a residue.
fn at(side: &[Cell], k: i64) -> Option<i128> {
    let k = usize::try_from(k).ok()?;
    side.get(k)?.value().map(|v| v as i128)
}

/// Bottom inner frame: `D[k] = (-1)^(g·k) · B[k] · C[k] / A[k]`.
fn inner_frame_entry(modulus: Modulus, inner: &Frame, g: i64, k: i64) -> Result<Option<Residue>> {
    let (Some(a), Some(b), Some(c)) = (at(&inner.top, k), at(&inner.left, k), at(&inner.right, k))
    else {
        return Ok(None);
    };
    let inv_a = modulus.inverse(a)?;
    Ok(Some(modulus.product(&[sign(g * k), b, c, inv_a as i128])))
}

/// Bottom outer frame:
/// `H[k] = (Q·E[k]/A[k] + (-1)^k·P·F[k]/B[k] - (-1)^k·S·G[k]/C[k]) / (R/D[k])`.
fn outer_frame_entry(
    modulus: Modulus,
    inner: &Frame,
    outer: &Frame,
    k: i64,
) -> Result<Option<Residue>> {
    let ratios = find_ratios(inner, modulus)?;
    let (Some(p), Some(q), Some(r), Some(s)) = (ratios.p, ratios.q, ratios.r, ratios.s) else {
        return Ok(None);
    };
    let sides = (
        at(&inner.top, k),
        at(&inner.left, k),
        at(&inner.right, k),
        at(&inner.bottom, k),
        at(&outer.top, k),
        at(&outer.left, k),
        at(&outer.right, k),
    );
    let (Some(a), Some(b), Some(c), Some(d), Some(e), Some(f), Some(g)) = sides else {
        return Ok(None);
    };

    let inv = |x: i128| modulus.inverse(x).map(|v| v as i128);
    let sk = sign(k);
    let numerator = modulus.product(&[q as i128, e, inv(a)?]) as i128
        + modulus.product(&[sk, p as i128, f, inv(b)?]) as i128
        - modulus.product(&[sk, s as i128, g, inv(c)?]) as i128;
    let denominator = inv(modulus.product(&[r as i128, inv(d)?]) as i128)?;
    Ok(Some(modulus.product(&[numerator, denominator])))
}
