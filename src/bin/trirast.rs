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

//! trirast entry point
//!
//! Renders a scene (or the built-in shape) and writes it as a BMP file.

use clap::Parser;
use trirast::frontend::{app, Args};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pick up RUST_LOG and friends from a .env file, if present
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting trirast, output: {}", args.output.display());

    let report = app::run(&args)?;

    log::info!(
        "Rasterized {} triangle(s) and {} segment(s), {} pixel(s) painted",
        report.triangles,
        report.segments,
        report.painted_pixels
    );

    if args.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
