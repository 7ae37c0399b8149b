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

//! Unit tests for BitmapWriter

use super::*;
use crate::core::raster::{Color, Point};

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

#[test]
fn test_file_header_128_square() {
    let grid = PixelGrid::new(128, 128, Color::WHITE).unwrap();
    let writer = BitmapWriter::default();

    let header = writer.file_header(&grid).unwrap();

    assert_eq!(&header[0..2], b"BM");
    assert_eq!(u32_at(&header, 2), 14 + 40 + 128 * 128 * 4);
    assert_eq!(u32_at(&header, 6), 0);
    assert_eq!(u32_at(&header, 10), 54);
}

#[test]
fn test_dib_header_fields() {
    let grid = PixelGrid::new(300, 7, Color::WHITE).unwrap();
    let dib = BitmapWriter::new(BitDepth::Bgr24).dib_header(&grid).unwrap();

    assert_eq!(u32_at(&dib, 0), 40);
    assert_eq!(u32_at(&dib, 4), 300);
    assert_eq!(u32_at(&dib, 8), 7);
    assert_eq!(u16_at(&dib, 12), 1);
    assert_eq!(u16_at(&dib, 14), 24);
    assert_eq!(u32_at(&dib, 16), 0);
    assert_eq!(u32_at(&dib, 20), 0);
    assert_eq!(u32_at(&dib, 24), 1920);
    assert_eq!(u32_at(&dib, 28), 1080);
    assert_eq!(u32_at(&dib, 32), 0);
    assert_eq!(u32_at(&dib, 36), 0);
}

#[test]
fn test_row_padding() {
    let bgr = BitmapWriter::new(BitDepth::Bgr24);
    assert_eq!(bgr.row_padding(1), 1);
    assert_eq!(bgr.row_padding(2), 2);
    assert_eq!(bgr.row_padding(3), 3);
    assert_eq!(bgr.row_padding(4), 0);
    assert_eq!(bgr.row_stride(3), 12);

    let bgra = BitmapWriter::new(BitDepth::Bgra32);
    for width in 1..8 {
        assert_eq!(bgra.row_padding(width), 0);
    }
}

#[test]
fn test_pixel_rows_in_index_order() {
    let mut grid = PixelGrid::new(3, 2, Color(0x00FFFFFF)).unwrap();
    grid.set(Point::new(0, 0), Color(0x00112233)).unwrap();
    grid.set(Point::new(2, 1), Color(0x00AABBCC)).unwrap();

    let bytes = BitmapWriter::new(BitDepth::Bgr24).encode(&grid).unwrap();
    let pixels = &bytes[54..];

    assert_eq!(bytes.len(), 54 + 2 * 12);
    assert_eq!(u32_at(&bytes, 2) as usize, bytes.len());
    // Row 0: (0,0) stored B, G, R then padding
    assert_eq!(
        &pixels[0..12],
        &[0x33, 0x22, 0x11, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0]
    );
    // Row 1
    assert_eq!(
        &pixels[12..24],
        &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xCC, 0xBB, 0xAA, 0, 0, 0]
    );
}

#[test]
fn test_32_bit_keeps_alpha_byte() {
    let grid = PixelGrid::new(1, 1, Color(0x80123456)).unwrap();
    let bytes = BitmapWriter::default().encode(&grid).unwrap();

    assert_eq!(&bytes[54..], &[0x56, 0x34, 0x12, 0x80]);
}

#[test]
fn test_bit_depth_from_bits() {
    assert_eq!(BitDepth::try_from(24).unwrap(), BitDepth::Bgr24);
    assert_eq!(BitDepth::try_from(32).unwrap(), BitDepth::Bgra32);
    assert!(matches!(
        BitDepth::try_from(16),
        Err(RasterError::UnsupportedBitDepth(16))
    ));
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bmp");
    let grid = PixelGrid::new(5, 3, Color::BLACK).unwrap();
    let writer = BitmapWriter::new(BitDepth::Bgr24);

    writer.write_file(&grid, &path).unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, writer.encode(&grid).unwrap());
    assert_eq!(on_disk.len(), 54 + 3 * 16);
}
