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

//! Boundary point collection
//!
//! While a triangle is outlined, every pixel the line rasterizer touches is
//! appended to a [`BoundaryCollector`]. The triangle filler later sorts these
//! points and groups them by column.
//!
//! The collector has a fixed capacity. A truncated boundary set would corrupt
//! the column grouping, so running out of room is a hard error rather than a
//! dropped point.

use super::primitives::Point;
use crate::core::error::{RasterError, Result};

/// Boundary capacity per grid column
///
/// A triangle's perimeter in pixels stays well below `4 * width` for the
/// grid sizes in scope.
pub const POINTS_PER_COLUMN: usize = 4;

/// Fixed-capacity sequence of boundary pixels for one triangle
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{BoundaryCollector, Point};
///
/// let mut boundary = BoundaryCollector::with_capacity(2);
/// boundary.push(Point::new(1, 1))?;
/// boundary.push(Point::new(0, 5))?;
/// assert!(boundary.push(Point::new(2, 2)).is_err());
///
/// boundary.sort();
/// assert_eq!(boundary.points(), &[Point::new(0, 5), Point::new(1, 1)]);
/// # Ok::<(), trirast::core::error::RasterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoundaryCollector {
    points: Vec<Point>,
    capacity: usize,
}

impl BoundaryCollector {
    /// Create an empty collector holding at most `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a collector sized for a grid `width` columns wide
    pub fn for_grid_width(width: usize) -> Self {
        Self::with_capacity(POINTS_PER_COLUMN * width)
    }

    /// Append a point in traversal order
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::BoundaryOverflow`] once the capacity is reached.
    #[inline]
    pub fn push(&mut self, p: Point) -> Result<()> {
        if self.points.len() >= self.capacity {
            return Err(RasterError::BoundaryOverflow {
                capacity: self.capacity,
            });
        }
        self.points.push(p);
        Ok(())
    }

    /// Forget every collected point, keeping the allocation
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Sort by x ascending, ties broken by y ascending
    pub fn sort(&mut self) {
        sort_by_column(&mut self.points);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Order points by column, then by row within a column
pub fn sort_by_column(points: &mut [Point]) {
    points.sort_by_key(|p| (p.x, p.y));
}
