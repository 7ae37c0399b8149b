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

//! Render entry point

use crate::core::error::Result;
use crate::core::scene::{RenderReport, Scene};

use super::args::Args;

/// Build the scene described by `args`
///
/// Loads `--scene` (or the built-in scene) and applies the command-line
/// overrides on top.
pub fn scene_from_args(args: &Args) -> Result<Scene> {
    let mut scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => {
            log::info!("No scene file given, using the built-in shape");
            Scene::builtin()
        }
    };

    if let Some(width) = args.width {
        scene.width = width;
    }
    if let Some(height) = args.height {
        scene.height = height;
    }
    if let Some(background) = args.background {
        scene.background = background;
    }
    if let Some(strategy) = args.strategy {
        scene.strategy = strategy;
    }
    if let Some(bits) = args.bits_per_pixel {
        scene.bits_per_pixel = bits;
    }

    Ok(scene)
}

/// Render the scene and write the bitmap to `args.output`
pub fn run(args: &Args) -> Result<RenderReport> {
    let scene = scene_from_args(args)?;
    scene.render_to_file(&args.output)
}
