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

//! Rasterization primitive type definitions
//!
//! This module contains the value types shared by every rasterization stage:
//! grid-space points, packed colors and triangles.

use serde::{Deserialize, Serialize};

/// A packed 32-bit color written verbatim into grid cells
///
/// The rasterizer treats the value as opaque. By convention the layout is
/// `0xAARRGGBB`, which the bitmap writer stores little-endian (B, G, R, A).
///
/// # Examples
///
/// ```
/// use trirast::core::raster::Color;
///
/// let color = Color::from_rgb(0x12, 0x34, 0x56);
/// assert_eq!(color, Color(0x123456));
/// assert_eq!(color.r(), 0x12);
/// assert_eq!(color.g(), 0x34);
/// assert_eq!(color.b(), 0x56);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Opaque white, the default background
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Black with a zero alpha byte
    pub const BLACK: Color = Color(0x0000_0000);

    /// Pack 8-bit channels into `0x00RRGGBB`
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red channel (bits 16-23)
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel (bits 8-15)
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel (bits 0-7)
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Alpha / padding byte (bits 24-31)
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// An integer coordinate in grid space
///
/// Row is `y`, column is `x`. Scene files spell a point as `[x, y]`.
///
/// # Examples
///
/// ```
/// use trirast::core::raster::Point;
///
/// let p = Point::new(3, 4);
/// assert_eq!((p.x, p.y), (3, 4));
/// assert_eq!(Point::from([3, 4]), p);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Three vertices and a flat fill color
///
/// No degeneracy checks are made: collinear or duplicate vertices are valid
/// and yield a line-only or single-pixel result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [Point; 3],
    pub color: Color,
}

impl Triangle {
    pub const fn new(v0: Point, v1: Point, v2: Point, color: Color) -> Self {
        Self {
            vertices: [v0, v1, v2],
            color,
        }
    }

    /// The three outline edges in drawing order: v0→v1, v1→v2, v2→v0
    pub fn edges(&self) -> [(Point, Point); 3] {
        let [v0, v1, v2] = self.vertices;
        [(v0, v1), (v1, v2), (v2, v0)]
    }
}
