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

//! trirast: a software rasterizer that writes BMP images
//!
//! This crate draws line segments, triangles and polygons onto a fixed-size
//! pixel grid and serializes the result as an uncompressed bitmap.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`core`]: Rasterization, bitmap output and scene descriptions
//! - [`frontend`]: Command-line front end used by the `trirast` binary
//!
//! # Example
//!
//! ```
//! use trirast::core::raster::{Color, Point, Rasterizer, DecompositionStrategy};
//!
//! let mut rasterizer = Rasterizer::new(32, 32, Color::WHITE)?;
//! let triangle = [Point::new(10, 10), Point::new(20, 10), Point::new(15, 20)];
//! rasterizer.rasterize_polygon(&triangle, Color(0x123456), DecompositionStrategy::TripletStride)?;
//!
//! assert_eq!(rasterizer.grid().get(15, 15), Some(Color(0x123456)));
//! # Ok::<(), trirast::core::error::RasterError>(())
//! ```
//!
//! # Getting Started
//!
//! 1. Create a [`core::raster::Rasterizer`] with the grid size and background
//! 2. Draw lines, triangles or polygons
//! 3. Hand the grid to [`core::bitmap::BitmapWriter`]
//!
//! # Error Handling
//!
//! All fallible operations return [`core::error::Result<T>`] which is an alias for
//! `Result<T, RasterError>`.

pub mod core;
pub mod frontend;

// Re-export commonly used types
pub use core::error::{RasterError, Result};
