// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Inner and outer frames of a window.
//!
//! Each side is read so that the top and left sides start at the top-left
//! corner, and the right and bottom sides start at the bottom-right corner:
//!
//! ```text
//!   top[0] ──▶ top[g+1]
//!   left[0]          right[g+1]
//!     │    (window)     ▲
//!     ▼                 │
//!   left[g+1]        right[0]
//!   bottom[g+1] ◀── bottom[0]
//! ```
//!
//! Both frames span columns `left-1..=right+1` and rows `top-1..=bottom+1` of
//! the window; the outer frame just sits one further ring out. Sides are
//! truncated where the table ends, and anything before its start reads as
//! blank.

use super::Window;
use crate::wall::{Cell, NumberWall};

/// Four sides bordering a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Left to right.
    pub top: Vec<Cell>,
    /// Top to bottom.
    pub left: Vec<Cell>,
    /// Bottom to top.
    pub right: Vec<Cell>,
    /// Right to left.
    pub bottom: Vec<Cell>,
}

/// The ring of cells immediately around `window`.
pub fn inner_frame(wall: &NumberWall, window: &Window) -> Frame {
    frame_at(wall, window, 1)
}

/// The ring one further out than [`inner_frame`].
pub fn outer_frame(wall: &NumberWall, window: &Window) -> Frame {
    frame_at(wall, window, 2)
}

fn frame_at(wall: &NumberWall, window: &Window, ring: isize) -> Frame {
    let left = window.left as isize;
    let right = window.right as isize;
    let last_column = wall.width() as isize - 1;
    let columns = || (left - 1)..=(right + 1).min(last_column);
    let rows = || (window.top - 1)..=(window.bottom + 1).min(wall.last_row());

    let horizontal = |r: isize| columns().map(|c| wall.cell(r, c)).collect::<Vec<_>>();
    let vertical = |c: isize| rows().map(|r| wall.cell(r, c)).collect::<Vec<_>>();
    let reversed = |mut side: Vec<Cell>| {
        side.reverse();
        side
    };

    Frame {
        top: horizontal(window.top - ring),
        left: vertical(left - ring),
        right: reversed(vertical(right + ring)),
        bottom: reversed(horizontal(window.bottom + ring)),
    }
}
