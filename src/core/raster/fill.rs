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

//! Triangle filling
//!
//! Fills a triangle from the discrete pixels of its already-outlined edges.
//! The boundary pixels are sorted by column, grouped by shared x, and each
//! group's vertical extent is drawn with the line rasterizer.
//!
//! # Algorithm
//!
//! 1. Sort boundary points by x, then y
//! 2. Sweep with cursors `l` and `r = l + 1`, advancing `r` while
//!    `boundary[r].x == boundary[l].x` (so `r` ends one past the group)
//! 3. The span's upper index is `r - 1`, except when `r` is the final point:
//!    then the second-to-last column reaches across to that lone last point
//! 4. Draw `boundary[l] → boundary[upper]`, continue at `upper + 1`
//!
//! This fills by column rather than by row. It is exact for triangles whose
//! edges are well separated per column and approximate near degenerate or
//! very shallow edges. The step 3 tie-break changes rendered pixels and is
//! kept as is.

use super::boundary::sort_by_column;
use super::grid::PixelGrid;
use super::line::draw_line;
use super::primitives::{Color, Point};
use crate::core::error::Result;

/// Compute the vertical spans drawn for a column-sorted boundary
///
/// `points` must already be sorted with [`sort_by_column`]. Each span is a
/// pair of boundary points; most share an x coordinate.
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{column_spans, Point};
///
/// let sorted = [(0, 1), (0, 4), (1, 0), (1, 2), (1, 5)].map(Point::from);
/// assert_eq!(
///     column_spans(&sorted),
///     vec![
///         (Point::new(0, 1), Point::new(0, 4)),
///         (Point::new(1, 0), Point::new(1, 5)),
///     ]
/// );
/// ```
pub fn column_spans(points: &[Point]) -> Vec<(Point, Point)> {
    let count = points.len();
    let mut spans = Vec::new();

    let mut l = 0;
    while l < count {
        let mut r = l + 1;
        while r < count && points[r].x == points[l].x {
            r += 1;
        }

        // r is one past the group; keep it only when it is the final point
        let upper = if r == count - 1 { r } else { r - 1 };

        spans.push((points[l], points[upper]));
        l = upper + 1;
    }

    spans
}

/// Shade the interior implied by a triangle's collected boundary pixels
///
/// Sorts `boundary` in place, then draws every column span in `color`
/// without collecting.
///
/// # Errors
///
/// Only fails if a boundary point lies outside `grid`, which cannot happen
/// for points gathered by [`draw_line`] on the same grid.
pub fn fill_triangle(grid: &mut PixelGrid, boundary: &mut [Point], color: Color) -> Result<()> {
    sort_by_column(boundary);

    let spans = column_spans(boundary);
    log::trace!(
        "Filling {} columns from {} boundary points, color=0x{:08X}",
        spans.len(),
        boundary.len(),
        color.0
    );

    for (top, bottom) in spans {
        draw_line(grid, top, bottom, color, None)?;
    }

    Ok(())
}
