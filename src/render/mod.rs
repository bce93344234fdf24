// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Raster images of number walls.
//!
//! Every cell of the table becomes either one pixel ([`RenderStyle::Compact`])
//! or a square block with a white grid line on its top and left edges
//! ([`RenderStyle::Spaced`]). Rows -1 and 0 and the sentinel columns are
//! drawn too, so the image is `(L + 2)` cells wide and `ceil(L/2) + 2` tall.

use crate::wall::{Cell, NumberWall};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image of {width}x{height} cells at {cell_size}px per cell is too large")]
    TooLarge {
        width: usize,
        height: usize,
        cell_size: u32,
    },
}

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Colours for blanks and for residues 0, 1, 2, ...
///
/// Residues past the end of `residues` use the last colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub blank: Rgba<u8>,
    pub residues: Vec<Rgba<u8>>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            blank: WHITE,
            residues: vec![
                Rgba([255, 0, 0, 255]),
                Rgba([0x22, 0x20, 0x21, 255]),
                Rgba([0x36, 0x36, 0x36, 255]),
                Rgba([0x54, 0x4C, 0x4A, 255]),
                Rgba([0x78, 0x72, 0x76, 255]),
            ],
        }
    }
}

impl Palette {
    pub fn color(&self, cell: Cell) -> Rgba<u8> {
        match cell {
            Cell::Value(v) => self
                .residues
                .get(v as usize)
                .or(self.residues.last())
                .copied()
                .unwrap_or(self.blank),
            Cell::Blank | Cell::Pending => self.blank,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// One pixel per cell.
    Compact,
    /// `cell_size` pixels per cell, with a white line on the top and left.
    Spaced { cell_size: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: RenderStyle,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: RenderStyle::Compact,
            palette: Palette::default(),
        }
    }
}

impl RenderOptions {
    pub fn spaced(cell_size: u32) -> Self {
        Self {
            style: RenderStyle::Spaced { cell_size },
            ..Self::default()
        }
    }
}

/// Draw `wall` into a new image.
pub fn render(wall: &NumberWall, options: &RenderOptions) -> Result<RgbaImage, RenderError> {
    let cell_size = match options.style {
        RenderStyle::Compact => 1,
        RenderStyle::Spaced { cell_size } => cell_size.max(1),
    };
    let columns = wall.width();
    let rows = (wall.last_row() - wall.first_row() + 1) as usize;
    let too_large = || RenderError::TooLarge {
        width: columns,
        height: rows,
        cell_size,
    };
    let width = u32::try_from(columns)
        .ok()
        .and_then(|c| c.checked_mul(cell_size))
        .ok_or_else(too_large)?;
    let height = u32::try_from(rows)
        .ok()
        .and_then(|r| r.checked_mul(cell_size))
        .ok_or_else(too_large)?;

    let mut image: RgbaImage = ImageBuffer::from_pixel(width, height, WHITE);
    for (y, (_, row)) in wall.rows().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let color = options.palette.color(cell);
            let (x0, y0) = (x as u32 * cell_size, y as u32 * cell_size);
            match options.style {
                RenderStyle::Compact => image.put_pixel(x0, y0, color),
                RenderStyle::Spaced { .. } => {
                    if cell.is_blank() {
                        continue;
                    }
                    for dy in 1..cell_size {
                        for dx in 1..cell_size {
                            image.put_pixel(x0 + dx, y0 + dy, color);
                        }
                    }
                }
            }
        }
    }
    Ok(image)
}

/// Render `wall` and write it to `path`; the format follows the extension.
pub fn save(wall: &NumberWall, path: &Path, options: &RenderOptions) -> Result<(), RenderError> {
    let image = render(wall, options)?;
    image.save(path)?;
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "wrote number wall image"
    );
    Ok(())
}
