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

//! BMP serialization
//!
//! Writes a finished [`PixelGrid`] as an uncompressed Windows bitmap:
//!
//! | Offset | Size | Content |
//! |--------|------|---------|
//! | 0      | 14   | File header: `BM`, file size, reserved, pixel data offset (54) |
//! | 14     | 40   | DIB header (`BITMAPINFOHEADER`) |
//! | 54     | ...  | Pixel rows, each padded with zeros to a multiple of 4 bytes |
//!
//! All multi-byte fields are little-endian. Grid rows are written in index
//! order with a positive height, so readers display grid row 0 at the bottom
//! of the image (y grows upward).
//!
//! # References
//!
//! - [BMP file format](https://en.wikipedia.org/wiki/BMP_file_format)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{RasterError, Result};
use super::raster::PixelGrid;

/// Size of the `BM` file header
pub const FILE_HEADER_SIZE: u32 = 14;

/// Size of the `BITMAPINFOHEADER` DIB header
pub const DIB_HEADER_SIZE: u32 = 40;

/// Offset of the first pixel byte
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + DIB_HEADER_SIZE;

/// Horizontal resolution field (pixels per meter)
pub const HORIZONTAL_RESOLUTION: i32 = 1920;

/// Vertical resolution field (pixels per meter)
pub const VERTICAL_RESOLUTION: i32 = 1080;

/// Pixel layout written to the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BitDepth {
    /// 24 bits per pixel: B, G, R (alpha byte dropped)
    Bgr24,
    /// 32 bits per pixel: B, G, R, A
    #[default]
    Bgra32,
}

impl BitDepth {
    pub fn bits_per_pixel(self) -> u16 {
        match self {
            BitDepth::Bgr24 => 24,
            BitDepth::Bgra32 => 32,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        self.bits_per_pixel() as usize / 8
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = RasterError;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            24 => Ok(BitDepth::Bgr24),
            32 => Ok(BitDepth::Bgra32),
            other => Err(RasterError::UnsupportedBitDepth(other)),
        }
    }
}

/// Serializes pixel grids as BMP files
///
/// # Examples
///
/// ```
/// use trirast::core::bitmap::{BitDepth, BitmapWriter};
/// use trirast::core::raster::{Color, PixelGrid};
///
/// let grid = PixelGrid::new(2, 2, Color::WHITE)?;
/// let bytes = BitmapWriter::new(BitDepth::Bgr24).encode(&grid)?;
///
/// assert_eq!(&bytes[0..2], b"BM");
/// // 54 header bytes + 2 rows of (6 pixel bytes + 2 padding bytes)
/// assert_eq!(bytes.len(), 54 + 2 * 8);
/// # Ok::<(), trirast::core::error::RasterError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapWriter {
    depth: BitDepth,
}

impl BitmapWriter {
    pub fn new(depth: BitDepth) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Bytes per written row, including padding
    pub fn row_stride(&self, width: usize) -> usize {
        (width * self.depth.bytes_per_pixel()).div_ceil(4) * 4
    }

    /// Zero bytes appended to each row
    pub fn row_padding(&self, width: usize) -> usize {
        self.row_stride(width) - width * self.depth.bytes_per_pixel()
    }

    /// Total size of the encoded file
    pub fn file_size(&self, grid: &PixelGrid) -> Result<u32> {
        let invalid = || RasterError::InvalidDimensions {
            width: grid.width(),
            height: grid.height(),
        };
        let pixel_bytes = (grid.width() as u64 * self.depth.bytes_per_pixel() as u64)
            .div_ceil(4)
            * 4
            * grid.height() as u64;
        u32::try_from(u64::from(PIXEL_DATA_OFFSET) + pixel_bytes).map_err(|_| invalid())
    }

    /// Build the 14-byte file header
    pub fn file_header(&self, grid: &PixelGrid) -> Result<[u8; 14]> {
        let mut header = [0u8; 14];

        header[0..2].copy_from_slice(b"BM");
        header[2..6].copy_from_slice(&self.file_size(grid)?.to_le_bytes());
        // 6..10: two reserved u16 fields, zero
        header[10..14].copy_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

        Ok(header)
    }

    /// Build the 40-byte DIB header
    pub fn dib_header(&self, grid: &PixelGrid) -> Result<[u8; 40]> {
        let invalid = || RasterError::InvalidDimensions {
            width: grid.width(),
            height: grid.height(),
        };
        let width = i32::try_from(grid.width()).map_err(|_| invalid())?;
        let height = i32::try_from(grid.height()).map_err(|_| invalid())?;

        let mut dib = [0u8; 40];
        dib[0..4].copy_from_slice(&DIB_HEADER_SIZE.to_le_bytes());
        dib[4..8].copy_from_slice(&width.to_le_bytes());
        dib[8..12].copy_from_slice(&height.to_le_bytes());
        // Color planes
        dib[12..14].copy_from_slice(&1u16.to_le_bytes());
        dib[14..16].copy_from_slice(&self.depth.bits_per_pixel().to_le_bytes());
        // 16..20: compression (BI_RGB = 0)
        // 20..24: image size, may be 0 for BI_RGB
        dib[24..28].copy_from_slice(&HORIZONTAL_RESOLUTION.to_le_bytes());
        dib[28..32].copy_from_slice(&VERTICAL_RESOLUTION.to_le_bytes());
        // 32..40: palette colors and important colors, both 0

        Ok(dib)
    }

    /// Write headers and pixel rows to `out`
    pub fn write<W: Write>(&self, grid: &PixelGrid, out: &mut W) -> Result<()> {
        out.write_all(&self.file_header(grid)?)?;
        out.write_all(&self.dib_header(grid)?)?;

        let bytes_per_pixel = self.depth.bytes_per_pixel();
        let padding = [0u8; 3];
        let padding = &padding[..self.row_padding(grid.width())];

        let mut row_bytes = Vec::with_capacity(self.row_stride(grid.width()));
        for row in grid.rows() {
            row_bytes.clear();
            for color in row {
                row_bytes.extend_from_slice(&color.0.to_le_bytes()[..bytes_per_pixel]);
            }
            row_bytes.extend_from_slice(padding);
            out.write_all(&row_bytes)?;
        }

        Ok(())
    }

    /// Encode the whole file into memory
    pub fn encode(&self, grid: &PixelGrid) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.file_size(grid)? as usize);
        self.write(grid, &mut bytes)?;
        Ok(bytes)
    }

    /// Write the bitmap to a file, replacing it if it exists
    pub fn write_file<P: AsRef<Path>>(&self, grid: &PixelGrid, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write(grid, &mut out)?;
        out.flush()?;

        log::info!(
            "Wrote {}x{} {}-bit bitmap to {}",
            grid.width(),
            grid.height(),
            self.depth.bits_per_pixel(),
            path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests;
