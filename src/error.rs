// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for number wall construction.

use thiserror::Error;

/// Errors that can occur while building or querying a number wall.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WallError {
    /// The input sequence was empty.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The modulus is below 2 or too large for widened products.
    #[error("Invalid modulus {modulus} (must be between 2 and 2^63 - 1)")]
    InvalidModulus { modulus: u64 },

    /// A nonzero residue has no multiplicative inverse (composite modulus).
    #[error("Division undefined: {value} has no inverse modulo {modulus}")]
    DivisionUndefined { value: u64, modulus: u64 },

    /// The window locator was asked about a cell that does not hold zero.
    #[error("Invalid window query: cell (row {row}, column {column}) is not zero")]
    InvalidWindowQuery { row: isize, column: usize },
}

pub type Result<T> = std::result::Result<T, WallError>;
