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

//! Unit tests for Scene

use super::*;

#[test]
fn test_empty_document_uses_defaults() {
    let scene = Scene::from_toml_str("").unwrap();

    assert_eq!(scene, Scene::default());
    assert_eq!(scene.width, 128);
    assert_eq!(scene.height, 128);
    assert_eq!(scene.background, Color::WHITE);
    assert_eq!(scene.strategy, DecompositionStrategy::SlidingWindow);
    assert_eq!(scene.bit_depth().unwrap(), BitDepth::Bgra32);
}

#[test]
fn test_parse_full_scene() {
    let scene = Scene::from_toml_str(
        r#"
        width = 32
        height = 16
        background = 0xFF000000
        strategy = "triplet-stride"
        bits_per_pixel = 24

        [[polygons]]
        color = 0x123456
        points = [[10, 10], [20, 10], [15, 15]]

        [[polygons]]
        color = 0x00FF00
        points = [[0, 0], [3, 0], [0, 3], [3, 3]]
        strategy = "sliding-window"

        [[segments]]
        points = [[1, 1, 0xF10010], [30, 1, 0x01FF11]]
        "#,
    )
    .unwrap();

    assert_eq!(scene.width, 32);
    assert_eq!(scene.height, 16);
    assert_eq!(scene.background, Color(0xFF000000));
    assert_eq!(scene.strategy, DecompositionStrategy::TripletStride);
    assert_eq!(scene.bit_depth().unwrap(), BitDepth::Bgr24);

    assert_eq!(scene.polygons.len(), 2);
    assert_eq!(scene.polygons[0].points[2], Point::new(15, 15));
    assert_eq!(scene.polygons[0].strategy, None);
    assert_eq!(
        scene.polygons[1].strategy,
        Some(DecompositionStrategy::SlidingWindow)
    );

    assert_eq!(
        scene.segments[0].points[1],
        ColoredPoint::from((30, 1, Color(0x01FF11)))
    );
}

#[test]
fn test_unknown_field_rejected() {
    let err = Scene::from_toml_str("depth = 3").unwrap_err();
    assert!(matches!(err, RasterError::Scene(_)));
}

#[test]
fn test_toml_round_trip_of_builtin() {
    let scene = Scene::builtin();
    let text = scene.to_toml_string().unwrap();

    assert_eq!(Scene::from_toml_str(&text).unwrap(), scene);
}

#[test]
fn test_validate_rejects_out_of_range_points() {
    let mut scene = Scene {
        width: 16,
        height: 16,
        ..Scene::default()
    };
    scene.polygons.push(PolygonSpec {
        color: Color::BLACK,
        points: vec![Point::new(0, 0), Point::new(16, 3), Point::new(2, 2)],
        strategy: None,
    });

    let err = scene.validate().unwrap_err();
    assert!(matches!(err, RasterError::Scene(ref msg) if msg.contains("(16, 3)")));
}

#[test]
fn test_validate_rejects_bad_depth_and_size() {
    let scene = Scene {
        bits_per_pixel: 8,
        ..Scene::default()
    };
    assert!(matches!(
        scene.validate(),
        Err(RasterError::UnsupportedBitDepth(8))
    ));

    let scene = Scene {
        width: 0,
        ..Scene::default()
    };
    assert!(matches!(
        scene.validate(),
        Err(RasterError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_validate_rejects_oversized_grid() {
    let scene = Scene {
        width: u32::MAX as usize,
        height: u32::MAX as usize,
        ..Scene::default()
    };

    assert!(matches!(
        scene.validate(),
        Err(RasterError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        scene.render(),
        Err(RasterError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_render_builtin() {
    let scene = Scene::builtin();
    let (grid, report) = scene.render().unwrap();

    assert_eq!(report.polygons, 1);
    assert_eq!(report.triangles, 6);
    assert_eq!(report.segments, 8);
    assert_eq!(report.painted_pixels, grid.count_not(Color::WHITE));
    assert!(report.painted_pixels > 0);

    // Segment loop is drawn last; a vertex keeps the color of the segment
    // starting there
    assert_eq!(grid.get(118, 42), Some(Color(0xF1A4D2)));
}

#[test]
fn test_render_empty_scene_is_background() {
    let (grid, report) = Scene::default().render().unwrap();

    assert_eq!(report.painted_pixels, 0);
    assert_eq!(grid.count_not(Color::WHITE), 0);
}

#[test]
fn test_load_and_render_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let scene_path = dir.path().join("scene.toml");
    let image_path = dir.path().join("scene.bmp");
    std::fs::write(
        &scene_path,
        "width = 8\nheight = 8\nbits_per_pixel = 24\n\n[[polygons]]\ncolor = 0x010203\npoints = [[1, 1], [6, 1], [1, 6]]\n",
    )
    .unwrap();

    let scene = Scene::load(&scene_path).unwrap();
    let report = scene.render_to_file(&image_path).unwrap();

    assert_eq!(report.triangles, 1);
    let bytes = std::fs::read(&image_path).unwrap();
    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(bytes.len(), 54 + 8 * 24);
}

#[test]
fn test_load_missing_file() {
    let err = Scene::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, RasterError::Scene(_)));
}
