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

//! Software rasterizer
//!
//! Converts lines, triangles and polygons into pixels of a [`PixelGrid`].
//!
//! # Pipeline
//!
//! ```text
//! point list ─▶ decompose ─▶ per triangle:
//!                              outline edges (draw_line + BoundaryCollector)
//!                              fill columns  (fill_triangle)
//!            ─▶ PixelGrid ─▶ BitmapWriter
//! ```
//!
//! # Coordinate System
//!
//! - Row is `y`, column is `x`; cell `(x, y)` is stored at `y * width + x`
//! - Valid coordinates satisfy `0 <= x < width` and `0 <= y < height`
//! - Coordinates outside the grid are rejected with
//!   [`RasterError::OutOfBounds`](crate::core::error::RasterError::OutOfBounds),
//!   never clamped or wrapped

mod boundary;
mod fill;
mod grid;
mod line;
mod polygon;
mod primitives;

// Public re-exports
pub use boundary::{sort_by_column, BoundaryCollector, POINTS_PER_COLUMN};
pub use fill::{column_spans, fill_triangle};
pub use grid::PixelGrid;
pub use line::{draw_line, BresenhamLine};
pub use polygon::{decompose, rasterize_polygon, rasterize_triangle, DecompositionStrategy};
pub use primitives::{Color, Point, Triangle};

use crate::core::error::Result;

/// Rasterizer owning the pixel grid it draws into
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{Color, Point, Rasterizer};
///
/// let mut rasterizer = Rasterizer::new(64, 64, Color::WHITE)?;
///
/// // Closed outline, each segment in its start point's color
/// rasterizer.draw_segments(&[
///     (Point::new(10, 10), Color(0xFF0000)),
///     (Point::new(40, 10), Color(0x00FF00)),
///     (Point::new(25, 40), Color(0x0000FF)),
/// ])?;
///
/// assert_eq!(rasterizer.grid().get(20, 10), Some(Color(0xFF0000)));
/// # Ok::<(), trirast::core::error::RasterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Rasterizer {
    grid: PixelGrid,
}

impl Rasterizer {
    /// Create a rasterizer over a fresh `width × height` grid
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self> {
        Ok(Self {
            grid: PixelGrid::new(width, height, background)?,
        })
    }

    /// Wrap an existing grid
    pub fn with_grid(grid: PixelGrid) -> Self {
        Self { grid }
    }

    /// Draw a single line segment
    pub fn draw_line(&mut self, p0: Point, p1: Point, color: Color) -> Result<()> {
        draw_line(&mut self.grid, p0, p1, color, None)
    }

    /// Outline and fill one triangle
    pub fn draw_triangle(&mut self, triangle: &Triangle) -> Result<()> {
        let mut boundary = BoundaryCollector::for_grid_width(self.grid.width());
        rasterize_triangle(&mut self.grid, triangle, &mut boundary)
    }

    /// Outline and fill every triangle of `points`
    ///
    /// Returns the number of triangles rasterized.
    pub fn rasterize_polygon(
        &mut self,
        points: &[Point],
        color: Color,
        strategy: DecompositionStrategy,
    ) -> Result<usize> {
        rasterize_polygon(&mut self.grid, points, color, strategy)
    }

    /// Draw a closed loop of colored segments
    ///
    /// Segment `i` runs from point `i` to point `(i + 1) % n` in point `i`'s
    /// color. A single point draws one pixel.
    ///
    /// # Returns
    ///
    /// The number of segments drawn.
    pub fn draw_segments(&mut self, points: &[(Point, Color)]) -> Result<usize> {
        let n = points.len();

        log::trace!("Rasterizing segment loop with {} points", n);

        for i in 0..n {
            let (from, color) = points[i];
            let (to, _) = points[(i + 1) % n];
            draw_line(&mut self.grid, from, to, color, None)?;
        }

        Ok(n)
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Hand the finished grid over, e.g. to the bitmap writer
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }
}
