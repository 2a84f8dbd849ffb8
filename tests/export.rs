mod common;

use common::{drag, observed_scene, select};
use egui::{Color32, Pos2};
use sticker_sketchpad::renderer::replay_scaled;
use sticker_sketchpad::surface::DrawCommand;
use sticker_sketchpad::{DisplayList, Scene, SketchConfig, SketchError};

#[test]
fn test_scaled_replay_multiplies_geometry() {
    let (mut scene, _log) = observed_scene();
    drag(&mut scene, &[(10.0, 20.0), (30.0, 40.0), (50.0, 25.0)]);
    select(&mut scene, "🐣");
    drag(&mut scene, &[(5.0, 5.0)]);
    // Cursor is live over the canvas while exporting.
    scene.on_pointer_move(100.0, 100.0);

    let mut native = DisplayList::new();
    replay_scaled(&mut native, scene.history().committed(), Color32::WHITE, 1.0);
    let mut scaled = DisplayList::new();
    replay_scaled(&mut scaled, scene.history().committed(), Color32::WHITE, 4.0);

    let native = native.resolved();
    let scaled = scaled.resolved();
    assert_eq!(native.len(), scaled.len());
    // Background, stroke, stamp. No cursor preview.
    assert_eq!(scaled.len(), 3);

    for (a, b) in native.iter().zip(&scaled) {
        match (a, b) {
            (DrawCommand::Clear(x), DrawCommand::Clear(y)) => assert_eq!(x, y),
            (
                DrawCommand::Path { points: pa, thickness: ta, .. },
                DrawCommand::Path { points: pb, thickness: tb, .. },
            ) => {
                assert_eq!(*tb, ta * 4.0);
                for (p, q) in pa.iter().zip(pb) {
                    assert_eq!(*q, Pos2::new(p.x * 4.0, p.y * 4.0));
                }
            }
            (
                DrawCommand::Glyph { position: pa, rotation: ra, size: sa, .. },
                DrawCommand::Glyph { position: pb, rotation: rb, size: sb, .. },
            ) => {
                assert_eq!(*pb, Pos2::new(pa.x * 4.0, pa.y * 4.0));
                assert_eq!(ra, rb);
                assert_eq!(*sb, sa * 4.0);
            }
            other => panic!("mismatched commands: {other:?}"),
        }
    }
}

#[test]
fn test_export_png_at_scale_four() {
    let (mut scene, _log) = observed_scene();
    select(&mut scene, "thick");
    let color = scene.tools().color();
    drag(&mut scene, &[(10.0, 10.0), (100.0, 10.0)]);

    // A hovering cursor and an unreleased gesture must not show up.
    scene.on_pointer_enter(200.0, 200.0);
    scene.on_pointer_down(150.0, 150.0);
    scene.on_pointer_move(160.0, 150.0);

    let committed_before = scene.history().committed().to_vec();
    let bytes = scene.export_image(4.0).unwrap();
    assert_eq!(scene.history().committed(), committed_before.as_slice());
    assert!(scene.history().pending_redo().is_empty());

    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (1024, 1024));

    let px = |x: u32, y: u32| {
        let p = image.get_pixel(x, y).0;
        Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3])
    };
    // Middle of the stroke, scaled by four.
    assert_eq!(px(220, 40), color);
    // Where the stroke would land without scaling is blank.
    assert_eq!(px(55, 10), Color32::WHITE);
    // Cursor and live stroke positions, scaled.
    assert_eq!(px(800, 800), Color32::WHITE);
    assert_eq!(px(620, 600), Color32::WHITE);
}

#[test]
fn test_export_of_empty_scene_is_background() {
    let scene = Scene::new(&common::seeded_config()).unwrap();
    let bytes = scene.export_image(1.0).unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (256, 256));
    assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn test_export_rejects_bad_scale() {
    let scene = Scene::new(&SketchConfig::default()).unwrap();
    assert!(matches!(scene.export_image(0.0), Err(SketchError::InvalidConfig(_))));
    assert!(matches!(scene.export_image(f32::NAN), Err(SketchError::InvalidConfig(_))));
}

#[test]
fn test_missing_render_target_is_fatal() {
    let config = SketchConfig {
        canvas_height: 0,
        ..SketchConfig::default()
    };
    assert!(matches!(
        Scene::new(&config),
        Err(SketchError::MissingRenderTarget { width: 256, height: 0 })
    ));
}
