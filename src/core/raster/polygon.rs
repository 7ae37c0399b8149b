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

//! Polygon decomposition
//!
//! Splits an ordered point list into triangles and drives outline + fill for
//! each one. Two non-interchangeable grouping strategies are provided; see
//! [`DecompositionStrategy`].

use serde::{Deserialize, Serialize};

use super::boundary::BoundaryCollector;
use super::fill::fill_triangle;
use super::grid::PixelGrid;
use super::line::draw_line;
use super::primitives::{Color, Point, Triangle};
use crate::core::error::Result;

/// How consecutive points are grouped into triangles
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DecompositionStrategy {
    /// `{p[i], p[i+1], p[i+2]}` for `i = 0, 3, 6, …`
    ///
    /// The point list is already partitioned into explicit, non-overlapping
    /// triangles. Trailing points that do not make a full triple are ignored.
    TripletStride,

    /// `{p[i], p[i+1], p[i+2]}` for every `i` in `0..=n-3`
    ///
    /// Produces `n - 2` overlapping triangles, each sharing an edge with its
    /// neighbour. Only suitable for convex or specially ordered point lists;
    /// this is not a general polygon triangulation.
    #[default]
    SlidingWindow,
}

/// Group `points` into triangles of `color` according to `strategy`
///
/// # Examples
///
/// ```
/// use trirast::core::raster::{decompose, Color, DecompositionStrategy, Point};
///
/// let points: Vec<Point> = (0..5).map(|i| Point::new(i, i * i)).collect();
///
/// let fan = decompose(&points, Color::BLACK, DecompositionStrategy::SlidingWindow);
/// assert_eq!(fan.len(), 3);
///
/// let strided = decompose(&points, Color::BLACK, DecompositionStrategy::TripletStride);
/// assert_eq!(strided.len(), 1);
/// ```
pub fn decompose(points: &[Point], color: Color, strategy: DecompositionStrategy) -> Vec<Triangle> {
    let to_triangle = |w: &[Point]| Triangle::new(w[0], w[1], w[2], color);

    match strategy {
        DecompositionStrategy::TripletStride => {
            let chunks = points.chunks_exact(3);
            if !chunks.remainder().is_empty() {
                log::warn!(
                    "Ignoring {} trailing point(s) that do not form a triangle",
                    chunks.remainder().len()
                );
            }
            chunks.map(to_triangle).collect()
        }
        DecompositionStrategy::SlidingWindow => points.windows(3).map(to_triangle).collect(),
    }
}

/// Outline a triangle into `boundary`, then fill it
///
/// `boundary` is cleared first; afterwards it holds the sorted boundary
/// pixels of this triangle.
pub fn rasterize_triangle(
    grid: &mut PixelGrid,
    triangle: &Triangle,
    boundary: &mut BoundaryCollector,
) -> Result<()> {
    boundary.clear();

    for (from, to) in triangle.edges() {
        draw_line(grid, from, to, triangle.color, Some(&mut *boundary))?;
    }

    log::trace!(
        "Outlined triangle {:?} with {} boundary points",
        triangle.vertices,
        boundary.len()
    );

    fill_triangle(grid, boundary.points_mut(), triangle.color)
}

/// Outline and fill every triangle implied by `points`
///
/// One boundary buffer of `4 * grid width` points is allocated for the whole
/// polygon and reset before each triangle.
///
/// # Returns
///
/// The number of triangles rasterized.
///
/// # Errors
///
/// Stops at the first triangle that leaves the grid or overflows the
/// boundary buffer. Triangles before it stay drawn.
pub fn rasterize_polygon(
    grid: &mut PixelGrid,
    points: &[Point],
    color: Color,
    strategy: DecompositionStrategy,
) -> Result<usize> {
    let triangles = decompose(points, color, strategy);
    let mut boundary = BoundaryCollector::for_grid_width(grid.width());

    log::debug!(
        "Rasterizing polygon: {} points -> {} triangles ({:?})",
        points.len(),
        triangles.len(),
        strategy
    );

    for triangle in &triangles {
        rasterize_triangle(grid, triangle, &mut boundary)?;
    }

    Ok(triangles.len())
}
