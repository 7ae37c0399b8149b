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

//! Line rasterization
//!
//! Implements Bresenham's line algorithm, normalized to two canonical cases:
//!
//! - **Shallow** (`|dy| < |dx|`): x always increases; y steps by ±1 when the
//!   error term goes positive.
//! - **Steep** (`|dy| >= |dx|`): y always increases; x steps by ±1.
//!
//! Endpoints are swapped so travel is always along the increasing major axis,
//! which makes `p0 → p1` and `p1 → p0` visit exactly the same cells. Only
//! integer arithmetic is used, so output is reproducible bit-for-bit.
//!
//! # References
//!
//! - [Bresenham's Line Algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)

use super::boundary::BoundaryCollector;
use super::grid::PixelGrid;
use super::primitives::{Color, Point};
use crate::core::error::Result;

/// Iterator over the cells of a discrete line, in visiting order
///
/// Yields `max(|dx|, |dy|) + 1` points, starting at whichever endpoint has
/// the smaller major-axis coordinate. Any pair of `i32` endpoints is
/// accepted; the error term is tracked in `i64`.
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{BresenhamLine, Point};
///
/// let cells: Vec<Point> = BresenhamLine::new(Point::new(0, 0), Point::new(4, 2)).collect();
/// assert_eq!(
///     cells,
///     [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)].map(Point::from)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    /// Major axis is y instead of x
    steep: bool,
    major: i64,
    major_end: i64,
    minor: i64,
    minor_step: i64,
    /// Incremental error term D
    error: i64,
    delta_major: i64,
    delta_minor: i64,
}

impl BresenhamLine {
    pub fn new(p0: Point, p1: Point) -> Self {
        let (x0, y0) = (i64::from(p0.x), i64::from(p0.y));
        let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
        let steep = (y1 - y0).abs() >= (x1 - x0).abs();

        // Travel along the increasing major axis
        let (major, major_end, minor, minor_end) = if steep {
            if y0 > y1 {
                (y1, y0, x1, x0)
            } else {
                (y0, y1, x0, x1)
            }
        } else if x0 > x1 {
            (x1, x0, y1, y0)
        } else {
            (x0, x1, y0, y1)
        };

        let delta_major = major_end - major;
        let delta_minor = (minor_end - minor).abs();
        let minor_step = if minor_end < minor { -1 } else { 1 };

        Self {
            steep,
            major,
            major_end,
            minor,
            minor_step,
            error: 2 * delta_minor - delta_major,
            delta_major,
            delta_minor,
        }
    }

    /// Whether the line is stepped along y
    pub fn is_steep(&self) -> bool {
        self.steep
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.major > self.major_end {
            return None;
        }

        // Both coordinates stay between the endpoints, so they fit in i32
        let (major, minor) = (self.major as i32, self.minor as i32);
        let point = if self.steep {
            Point::new(minor, major)
        } else {
            Point::new(major, minor)
        };

        if self.error > 0 {
            self.minor += self.minor_step;
            self.error += 2 * (self.delta_minor - self.delta_major);
        } else {
            self.error += 2 * self.delta_minor;
        }
        self.major += 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.major_end - self.major + 1).max(0);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for BresenhamLine {}

/// Draw a line from `p0` to `p1` inclusive
///
/// Every visited cell is set to `color`. When a `collector` is supplied, each
/// visited point is appended to it in visiting order.
///
/// # Errors
///
/// - [`RasterError::OutOfBounds`](crate::core::error::RasterError::OutOfBounds)
///   if either endpoint lies outside the grid. All cells of a line lie within
///   its endpoints' bounding box, so nothing is written in that case.
/// - [`RasterError::BoundaryOverflow`](crate::core::error::RasterError::BoundaryOverflow)
///   if the collector runs out of room.
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{draw_line, Color, PixelGrid, Point};
///
/// let mut grid = PixelGrid::new(8, 8, Color::WHITE)?;
/// draw_line(&mut grid, Point::new(1, 1), Point::new(1, 1), Color::BLACK, None)?;
///
/// assert_eq!(grid.count_not(Color::WHITE), 1);
/// # Ok::<(), trirast::core::error::RasterError>(())
/// ```
pub fn draw_line(
    grid: &mut PixelGrid,
    p0: Point,
    p1: Point,
    color: Color,
    mut collector: Option<&mut BoundaryCollector>,
) -> Result<()> {
    grid.check(p0)?;
    grid.check(p1)?;

    log::trace!(
        "Rasterizing line ({}, {}) -> ({}, {}) color=0x{:08X}",
        p0.x,
        p0.y,
        p1.x,
        p1.y,
        color.0
    );

    for p in BresenhamLine::new(p0, p1) {
        grid.put(p, color);
        if let Some(boundary) = collector.as_deref_mut() {
            boundary.push(p)?;
        }
    }

    Ok(())
}
