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

//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::core::raster::{Color, DecompositionStrategy};

/// Rasterize lines, triangles and polygons into a BMP image
#[derive(Debug, Clone, Parser)]
#[command(name = "trirast", version, about)]
pub struct Args {
    /// Scene description (TOML); the built-in shape is drawn when omitted
    #[arg(short, long, value_name = "FILE")]
    pub scene: Option<PathBuf>,

    /// Output bitmap path
    #[arg(short, long, value_name = "FILE", default_value = "output.bmp")]
    pub output: PathBuf,

    /// Override the grid width
    #[arg(long)]
    pub width: Option<usize>,

    /// Override the grid height
    #[arg(long)]
    pub height: Option<usize>,

    /// Override the background color (e.g. 0xFFFFFFFF)
    #[arg(long, value_parser = parse_color)]
    pub background: Option<Color>,

    /// Override the polygon decomposition strategy
    #[arg(long, value_enum)]
    pub strategy: Option<DecompositionStrategy>,

    /// Override the output bit depth (24 or 32)
    #[arg(long)]
    pub bits_per_pixel: Option<u16>,

    /// Print a JSON render report to stdout
    #[arg(long)]
    pub report: bool,
}

/// Parse a color given as `0x`-prefixed hex or decimal
pub(crate) fn parse_color(s: &str) -> Result<Color, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed
        .map(Color)
        .map_err(|e| format!("invalid color '{}': {}", s, e))
}
