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

//! Command-line front end
//!
//! This module provides argument parsing and the render entry point used by
//! the `trirast` binary.
//!
//! # Architecture
//!
//! - [`Args`]: Command-line arguments (clap)
//! - [`app::run`]: Load the scene, apply overrides, render and write the bitmap
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use trirast::frontend::{app, Args};
//!
//! let args = Args::parse();
//! let report = app::run(&args)?;
//! println!("{} triangles", report.triangles);
//! # Ok::<(), trirast::core::error::RasterError>(())
//! ```

pub mod app;
pub mod args;

pub use args::Args;
