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

//! Error types for rasterization and bitmap output

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, RasterError>;

/// Errors raised while rasterizing or writing an image
///
/// Degenerate geometry (zero-length edges, collinear triangles) is never an
/// error; it simply produces minimal output.
#[derive(Debug, Error)]
pub enum RasterError {
    /// A primitive would write outside the pixel grid
    ///
    /// Detected before any pixel of the primitive is written. Coordinates are
    /// never clamped or wrapped.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// More boundary pixels were collected for one triangle than fit the buffer
    #[error("boundary buffer exhausted (capacity {capacity} points)")]
    BoundaryOverflow { capacity: usize },

    /// A grid with a zero dimension was requested
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The bitmap writer only supports 24 and 32 bits per pixel
    #[error("unsupported bit depth: {0} bits per pixel")]
    UnsupportedBitDepth(u16),

    /// A scene description could not be loaded or is invalid
    #[error("scene error: {0}")]
    Scene(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
