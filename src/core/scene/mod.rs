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

//! Scene descriptions
//!
//! A scene is everything needed for one render: grid size, background,
//! output bit depth, and the polygons and segment loops to draw. Scenes are
//! stored as TOML:
//!
//! ```toml
//! width = 64
//! height = 64
//! background = 0xFFFFFFFF
//! strategy = "sliding-window"
//!
//! [[polygons]]
//! color = 0x123456
//! points = [[10, 10], [20, 10], [15, 20]]
//!
//! [[segments]]
//! points = [[5, 5, 0xFF0000], [60, 5, 0x00FF00], [30, 60, 0x0000FF]]
//! ```
//!
//! Polygons are drawn first, then segment loops on top.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::bitmap::{BitDepth, BitmapWriter};
use super::error::{RasterError, Result};
use super::raster::{Color, DecompositionStrategy, PixelGrid, Point, Rasterizer};

/// Default grid width and height
pub const DEFAULT_SIZE: usize = 128;

/// Default output bit depth
pub const DEFAULT_BITS_PER_PIXEL: u16 = 32;

/// A filled polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolygonSpec {
    pub color: Color,
    pub points: Vec<Point>,
    /// Overrides the scene-wide strategy for this polygon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<DecompositionStrategy>,
}

/// A point carrying the color of the segment that starts at it
///
/// Written as `[x, y, color]` in scene files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, i32, Color)", into = "(i32, i32, Color)")]
pub struct ColoredPoint {
    pub point: Point,
    pub color: Color,
}

impl From<(i32, i32, Color)> for ColoredPoint {
    fn from((x, y, color): (i32, i32, Color)) -> Self {
        Self {
            point: Point::new(x, y),
            color,
        }
    }
}

impl From<ColoredPoint> for (i32, i32, Color) {
    fn from(cp: ColoredPoint) -> Self {
        (cp.point.x, cp.point.y, cp.color)
    }
}

/// A closed loop of colored segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentLoop {
    pub points: Vec<ColoredPoint>,
}

/// Everything needed for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub strategy: DecompositionStrategy,
    pub bits_per_pixel: u16,
    pub polygons: Vec<PolygonSpec>,
    pub segments: Vec<SegmentLoop>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            background: Color::WHITE,
            strategy: DecompositionStrategy::default(),
            bits_per_pixel: DEFAULT_BITS_PER_PIXEL,
            polygons: Vec::new(),
            segments: Vec::new(),
        }
    }
}

/// Summary of a finished render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderReport {
    pub width: usize,
    pub height: usize,
    pub polygons: usize,
    pub triangles: usize,
    pub segments: usize,
    /// Cells that no longer hold the background color
    pub painted_pixels: usize,
}

impl Scene {
    /// The built-in eight-point shape on a 128×128 white grid
    ///
    /// The points are drawn as a filled sliding-window polygon with the
    /// colored segment loop on top.
    pub fn builtin() -> Self {
        const SHAPE: [(i32, i32, u32); 8] = [
            (22, 62, 0x4F7B29),
            (118, 42, 0xF1A4D2),
            (110, 110, 0x8A9F77),
            (25, 118, 0xC5308E),
            (39, 25, 0xD6A4E7),
            (104, 12, 0x8E3D1F),
            (111, 92, 0x1C74B3),
            (28, 100, 0x3F57A9),
        ];

        let colored: Vec<ColoredPoint> = SHAPE
            .iter()
            .map(|&(x, y, c)| ColoredPoint::from((x, y, Color(c))))
            .collect();

        Self {
            polygons: vec![PolygonSpec {
                color: Color(0x8A9F77),
                points: colored.iter().map(|cp| cp.point).collect(),
                strategy: None,
            }],
            segments: vec![SegmentLoop { points: colored }],
            ..Self::default()
        }
    }

    /// Parse a scene from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| RasterError::Scene(format!("Failed to parse scene: {}", e)))
    }

    /// Load a scene from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RasterError::Scene(format!("Failed to read scene file {}: {}", path.display(), e))
        })?;

        log::info!("Loaded scene from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Serialize the scene as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RasterError::Scene(format!("Failed to serialize scene: {}", e)))
    }

    /// Output bit depth
    pub fn bit_depth(&self) -> Result<BitDepth> {
        BitDepth::try_from(self.bits_per_pixel)
    }

    /// Check dimensions, bit depth and that every point lies on the grid
    pub fn validate(&self) -> Result<()> {
        PixelGrid::check_dimensions(self.width, self.height)?;
        self.bit_depth()?;

        let in_range = |p: &Point| PixelGrid::in_bounds(self.width, self.height, p.x, p.y);

        for (i, polygon) in self.polygons.iter().enumerate() {
            if let Some(p) = polygon.points.iter().find(|p| !in_range(*p)) {
                return Err(RasterError::Scene(format!(
                    "polygon {} point ({}, {}) is outside the {}x{} grid",
                    i, p.x, p.y, self.width, self.height
                )));
            }
        }

        for (i, segments) in self.segments.iter().enumerate() {
            if let Some(cp) = segments.points.iter().find(|cp| !in_range(&cp.point)) {
                return Err(RasterError::Scene(format!(
                    "segment loop {} point ({}, {}) is outside the {}x{} grid",
                    i, cp.point.x, cp.point.y, self.width, self.height
                )));
            }
        }

        Ok(())
    }

    /// Rasterize every shape onto a fresh grid
    pub fn render(&self) -> Result<(PixelGrid, RenderReport)> {
        self.validate()?;

        log::info!(
            "Rendering {}x{} scene: {} polygon(s), {} segment loop(s)",
            self.width,
            self.height,
            self.polygons.len(),
            self.segments.len()
        );

        let mut rasterizer = Rasterizer::new(self.width, self.height, self.background)?;

        let mut triangles = 0;
        for polygon in &self.polygons {
            let strategy = polygon.strategy.unwrap_or(self.strategy);
            triangles += rasterizer.rasterize_polygon(&polygon.points, polygon.color, strategy)?;
        }

        let mut segments = 0;
        for segment_loop in &self.segments {
            let points: Vec<(Point, Color)> = segment_loop
                .points
                .iter()
                .map(|cp| (cp.point, cp.color))
                .collect();
            segments += rasterizer.draw_segments(&points)?;
        }

        let grid = rasterizer.into_grid();
        let report = RenderReport {
            width: self.width,
            height: self.height,
            polygons: self.polygons.len(),
            triangles,
            segments,
            painted_pixels: grid.count_not(self.background),
        };

        log::debug!("Render finished: {:?}", report);

        Ok((grid, report))
    }

    /// Render and write the bitmap to `path`
    pub fn render_to_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderReport> {
        let writer = BitmapWriter::new(self.bit_depth()?);
        let (grid, report) = self.render()?;
        writer.write_file(&grid, path)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests;
