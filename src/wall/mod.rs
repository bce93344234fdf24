// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The number wall table.
//!
//! A wall is stored as a rectangle of cells. Rows are indexed from -1:
//!
//! - row -1: all zeros
//! - row 0: all ones
//! - row 1: the input sequence reduced mod m
//! - rows 2..=ceil(L/2): computed by [`builder`]
//!
//! Column 0 of every row is a blank label column and column L+1 is a
//! trailing blank, so every row has `L + 2` cells. Row `r >= 1` holds
//! residues on columns `r..=L-r+1` and blanks elsewhere, which gives the
//! familiar trapezoid.
//!
//! # Examples
//!
//! ```
//! use number_wall::{Cell, Modulus, NumberWall};
//!
//! let wall = NumberWall::build(&[1, 2, 3, 4, 5], Modulus::new(2).unwrap()).unwrap();
//! assert_eq!(wall.cell(1, 2), Cell::Value(0));
//! assert_eq!(wall.last_row(), 3);
//! ```

pub mod builder;
pub mod cell;
pub mod statistics;

pub use cell::Cell;
pub use statistics::{Rule, Statistics};

use crate::arith::{Modulus, Residue};
use crate::error::{Result, WallError};
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// A materialised number wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberWall {
    modulus: Modulus,
    /// Length of the input sequence (L).
    length: usize,
    /// `rows[r + 1]` is row `r`.
    rows: Vec<Vec<Cell>>,
    #[serde(skip)]
    statistics: Statistics,
}

impl NumberWall {
    /// Build the wall of `sequence` modulo `modulus`.
    pub fn build(sequence: &[i64], modulus: Modulus) -> Result<Self> {
        builder::build(sequence, modulus)
    }

    /// Wrap an explicit table, starting at row -1.
    ///
    /// Every row must have the same width (at least 2, for the label and
    /// trailing columns). Used to probe the window code on hand-made tables.
    pub fn from_rows(modulus: Modulus, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if width < 2 || rows.iter().any(|row| row.len() != width) {
            return Err(WallError::InvalidInput {
                reason: format!("rows must share a width of at least 2 (got {})", width),
            });
        }
        Ok(Self {
            modulus,
            length: width - 2,
            rows,
            statistics: Statistics::new(),
        })
    }

    /// Wrap rows laid out by the builder, before any cell is computed.
    pub(crate) fn with_shape(modulus: Modulus, rows: Vec<Vec<Cell>>, length: usize) -> Self {
        Self {
            modulus,
            length,
            rows,
            statistics: Statistics::new(),
        }
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Length of the input sequence.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of cells per row, including the two sentinel columns.
    pub fn width(&self) -> usize {
        self.length + 2
    }

    /// Index of the first row (always -1).
    pub fn first_row(&self) -> isize {
        -1
    }

    /// Index of the last row.
    pub fn last_row(&self) -> isize {
        self.rows.len() as isize - 2
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Row `r` including its sentinel columns, or `None` outside the table.
    pub fn row(&self, r: isize) -> Option<&[Cell]> {
        usize::try_from(r + 1)
            .ok()
            .and_then(|s| self.rows.get(s))
            .map(Vec::as_slice)
    }

    /// Rows from -1 downward, paired with their index.
    pub fn rows(&self) -> impl Iterator<Item = (isize, &[Cell])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(s, row)| (s as isize - 1, row.as_slice()))
    }

    /// The cell at (row `r`, column `c`). Anything outside the table is blank.
    pub fn cell(&self, r: isize, c: isize) -> Cell {
        self.row(r)
            .zip(usize::try_from(c).ok())
            .and_then(|(row, c)| row.get(c).copied())
            .unwrap_or(Cell::Blank)
    }

    /// Columns of row `r` that hold residues in a built wall.
    pub fn valid_columns(&self, r: isize) -> RangeInclusive<usize> {
        if r <= 1 {
            1..=self.length
        } else {
            let r = r as usize;
            r..=(self.length + 1).saturating_sub(r)
        }
    }

    /// Residues of row `r`, left to right, skipping blanks.
    pub fn entries(&self, r: isize) -> Vec<Residue> {
        self.row(r)
            .map(|row| row.iter().filter_map(|cell| cell.value()).collect())
            .unwrap_or_default()
    }

    pub(crate) fn set(&mut self, r: isize, c: usize, cell: Cell) {
        self.rows[(r + 1) as usize][c] = cell;
    }

    pub(crate) fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.statistics
    }
}

impl fmt::Display for NumberWall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.modulus.value() - 1).to_string().len();
        for (r, row) in self.rows() {
            write!(f, "{:>3} |", r)?;
            for cell in row.iter().skip(1).take(self.length) {
                write!(f, " {:>width$}", cell, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
