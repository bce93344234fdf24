// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Windows: blocks of zeros inside a number wall.
//!
//! In a wall over a field, zeros always occur in square blocks called
//! windows. The cells just outside a window (its frames) are geometric
//! sequences, and the frame constraints relate them to the cells on the far
//! side of the window. This module finds windows, reads their frames and
//! computes the ratios of those geometric sequences.
//!
//! All functions here are read-only views of a [`NumberWall`]; the builder
//! calls them on a partially computed wall, where cells not yet computed are
//! [`Cell::Pending`] and count as nonzero.

pub mod frame;
pub mod ratio;

pub use frame::{inner_frame, outer_frame, Frame};
pub use ratio::{find_ratios, Ratios};

use crate::error::{Result, WallError};
use crate::wall::{Cell, NumberWall};

/// A rectangular block of zeros, given by its inclusive corners.
///
/// Rows use wall numbering (row -1 is the row of zeros).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub top: isize,
    pub left: usize,
    pub bottom: isize,
    pub right: usize,
}

impl Window {
    pub fn height(&self) -> isize {
        self.bottom - self.top + 1
    }

    pub fn width(&self) -> usize {
        self.right + 1 - self.left
    }

    /// Only square windows have usable frame constraints.
    pub fn is_square(&self) -> bool {
        self.height() == self.width() as isize
    }

    pub fn contains(&self, row: isize, column: usize) -> bool {
        (self.top..=self.bottom).contains(&row) && (self.left..=self.right).contains(&column)
    }
}

/// Find the window containing the zero at (`row`, `column`).
///
/// The vertical extent is walked along `column`, from `row` up to the first
/// nonzero cell and down to the first nonzero (or pending) cell. The
/// horizontal extent is walked along the window's top row. If the upward walk
/// runs off row -1 the top clamps to row 0.
pub fn locate_window(wall: &NumberWall, row: isize, column: usize) -> Result<Window> {
    if !wall.cell(row, column as isize).is_zero() {
        return Err(WallError::InvalidWindowQuery { row, column });
    }
    let zero = |r: isize, c: isize| wall.cell(r, c).is_zero();
    let j = column as isize;

    let mut above = row;
    while above >= wall.first_row() && zero(above, j) {
        above -= 1;
    }
    let top = above + 1;

    let mut left = j;
    while left >= 0 && zero(top, left) {
        left -= 1;
    }
    let mut right = j;
    while right < wall.width() as isize && zero(top, right) {
        right += 1;
    }
    let mut below = row;
    while below <= wall.last_row() && zero(below, j) {
        below += 1;
    }

    Ok(Window {
        top: if above < wall.first_row() { 0 } else { top },
        left: (left + 1) as usize,
        bottom: below - 1,
        right: (right - 1) as usize,
    })
}

/// Build a synthetic table for tests: `rows` are given from row -1 and
/// padded with a blank label column and a blank trailing column.
#[cfg(test)]
pub(crate) fn table(modulus: u64, rows: &[&[u64]]) -> NumberWall {
    use crate::arith::Modulus;
    let rows = rows
        .iter()
        .map(|row| {
            std::iter::once(Cell::Blank)
                .chain(row.iter().map(|&v| Cell::Value(v)))
                .chain(std::iter::once(Cell::Blank))
                .collect()
        })
        .collect();
    NumberWall::from_rows(Modulus::new(modulus).unwrap(), rows).unwrap()
}
