// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Each wall records how many of its cells were produced by each rule of the
//! builder. Useful for spotting which sequences exercise the window code.

use serde::Serialize;
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

/// The rule that produced a computed cell.
#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Rule {
    /// Three-term recurrence (rows 2 onward with a nonzero entry two above).
    Recurrence,
    /// Bottom inner frame of a square window.
    InnerFrame,
    /// Bottom outer frame of a square window.
    OuterFrame,
    /// Window not (yet) square; entry forced to 0.
    NonSquareWindow,
    /// A frame entry or ratio was blank or missing; entry forced to 0.
    IncompleteFrame,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    stats: [u64; Rule::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, rule: Rule) {
        self.stats[rule as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, rule: Rule) -> u64 {
        self.stats[rule as usize]
    }

    /// Total number of computed cells.
    pub fn total(&self) -> u64 {
        self.stats.iter().sum()
    }
}
