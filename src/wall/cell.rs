// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cell type for number wall entries.

use crate::arith::Residue;
use serde::Serialize;
use std::fmt;

/// One entry of a number wall.
///
/// Blank cells pad the trapezoid out to a rectangle, and fill the label
/// column 0 and the trailing column. Pending cells only exist while the
/// builder is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Blank,
    Pending,
    Value(Residue),
}

impl Cell {
    /// The residue held by this cell, if any.
    pub fn value(self) -> Option<Residue> {
        match self {
            Cell::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Cell::Value(0)
    }

    pub fn is_blank(self) -> bool {
        self == Cell::Blank
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Blank => f.pad(" "),
            Cell::Pending => f.pad("?"),
            Cell::Value(v) => f.pad(&v.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value() {
        assert_eq!(Cell::Value(3).value(), Some(3));
        assert_eq!(Cell::Blank.value(), None);
        assert_eq!(Cell::Pending.value(), None);
    }

    #[test]
    fn test_cell_is_zero() {
        assert!(Cell::Value(0).is_zero());
        assert!(!Cell::Value(1).is_zero());
        assert!(!Cell::Blank.is_zero());
        assert!(!Cell::Pending.is_zero());
    }

    #[test]
    fn test_cell_display_padding() {
        assert_eq!(format!("{:>3}", Cell::Value(7)), "  7");
        assert_eq!(format!("{:>3}", Cell::Blank), "   ");
    }
}
