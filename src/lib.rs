// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Number walls of integer sequences over Z/mZ.
//!
//! The number wall of a sequence `s` is the table of Toeplitz determinants
//! `W[r][n] = det(s[n + i - j])` for `0 <= i, j < r`. Rather than computing
//! determinants, the wall is filled row by row:
//!
//! - the three-term recurrence
//!   `W[r][n]·W[r-2][n] = W[r-1][n]² - W[r-1][n-1]·W[r-1][n+1]`
//!   gives each cell whenever the cell two above is nonzero;
//! - zeros form square *windows*, and the frame constraints give the cells
//!   bordering a window from the geometric sequences along its other sides.
//!
//! # Architecture
//!
//! - [`arith`]: reduction and inverses modulo m
//! - [`wall`]: the table, its cells and the builder
//! - [`window`]: window location, inner/outer frames and frame ratios
//! - [`render`]: raster images of a wall
//! - [`deficiency`]: census of sequences whose walls avoid large windows
//! - [`sequence`]: input helpers (Thue-Morse, parsing)
//!
//! # Example
//!
//! ```
//! use number_wall::{sequence::thue_morse, Modulus, NumberWall};
//!
//! let wall = NumberWall::build(&thue_morse(64), Modulus::new(2)?)?;
//! assert_eq!(wall.last_row(), 32);
//! assert!(wall.entries(2).iter().all(|&v| v <= 1));
//! # Ok::<(), number_wall::WallError>(())
//! ```
//!
//! # References
//!
//! - Lunnon, W. F. (2001). "The number-wall algorithm: an LFSR cookbook."
//!   Journal of Integer Sequences, Vol. 4, Article 01.1.1.

pub mod arith;
pub mod deficiency;
pub mod error;
pub mod render;
pub mod sequence;
pub mod wall;
pub mod window;

// Re-export commonly used types
pub use arith::{Modulus, Residue};
pub use error::WallError;
pub use wall::{Cell, NumberWall, Rule, Statistics};
pub use window::{locate_window, Frame, Ratios, Window};
