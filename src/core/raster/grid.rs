// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pixel grid
//!
//! The rasterization target: a fixed-size buffer of colors stored as a flat
//! row-major `Vec`, indexed `y * width + x`.

use super::primitives::{Color, Point};
use crate::core::error::{RasterError, Result};

/// Fixed-size mutable buffer of colors
///
/// Created once filled with a background color, mutated by every rasterized
/// primitive and finally handed whole to the bitmap writer.
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{Color, PixelGrid, Point};
///
/// let mut grid = PixelGrid::new(4, 2, Color::WHITE)?;
/// grid.set(Point::new(3, 1), Color(0x00FF00))?;
///
/// assert_eq!(grid.get(3, 1), Some(Color(0x00FF00)));
/// assert_eq!(grid.get(4, 1), None);
/// assert!(grid.set(Point::new(4, 0), Color::BLACK).is_err());
/// # Ok::<(), trirast::core::error::RasterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Create a `width × height` grid filled with `background`
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] if
    /// [`check_dimensions`](Self::check_dimensions) rejects the size.
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self> {
        let len = Self::check_dimensions(width, height)?;

        Ok(Self {
            width,
            height,
            pixels: vec![background; len],
        })
    }

    /// Validate a grid size and return its cell count
    ///
    /// Both dimensions must be non-zero and addressable by an `i32`
    /// coordinate, and `width * height` must not overflow `usize`.
    pub fn check_dimensions(width: usize, height: usize) -> Result<usize> {
        let invalid = || RasterError::InvalidDimensions { width, height };

        if width == 0 || height == 0 {
            return Err(invalid());
        }
        i32::try_from(width).map_err(|_| invalid())?;
        i32::try_from(height).map_err(|_| invalid())?;

        width.checked_mul(height).ok_or_else(invalid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` satisfies `0 <= x < width` and `0 <= y < height`
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        Self::in_bounds(self.width, self.height, x, y)
    }

    /// Bounds test for a `width × height` grid that has not been built yet
    #[inline]
    pub fn in_bounds(width: usize, height: usize, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
    }

    /// Reject a point that lies outside the grid
    pub fn check(&self, p: Point) -> Result<()> {
        if self.contains(p.x, p.y) {
            Ok(())
        } else {
            Err(RasterError::OutOfBounds {
                x: p.x,
                y: p.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Read a cell, `None` when out of range
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if self.contains(x, y) {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Write a single cell after checking the coordinate
    pub fn set(&mut self, p: Point, color: Color) -> Result<()> {
        self.check(p)?;
        self.put(p, color);
        Ok(())
    }

    /// Write a cell whose coordinate the caller has already validated
    ///
    /// Panics on an out-of-range coordinate instead of writing elsewhere.
    #[inline(always)]
    pub(crate) fn put(&mut self, p: Point, color: Color) {
        debug_assert!(self.contains(p.x, p.y), "unchecked write at {:?}", p);
        let index = self.index(p.x, p.y);
        self.pixels[index] = color;
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize) * self.width + (x as usize)
    }

    /// Reset every cell to `color`
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// All cells in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Rows in index order, row 0 first
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.pixels.chunks_exact(self.width)
    }

    /// Number of cells whose value differs from `color`
    pub fn count_not(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c != color).count()
    }
}
