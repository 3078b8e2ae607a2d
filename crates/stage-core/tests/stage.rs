//! Stage Integration Tests
//!
//! Loads real (stubbed) model bundles end to end: both descriptor formats on
//! one stage, rendering, and tap-to-motion dispatch through the surface.

mod common;

use common::{
    insert_haru_bundle, insert_shizuku_bundle, registry_with_pio, StubLoader, HARU_URL,
    SHIZUKU_URL,
};
use glam::Vec2;
use live2d_core::HitBounds;
use stage_core::{Live2DModel, Surface, SurfaceOptions};

fn surface() -> Surface {
    Surface::new(
        &registry_with_pio(),
        SurfaceOptions {
            view: "pio".to_string(),
            ..SurfaceOptions::default()
        },
    )
    .unwrap()
}

fn dual_loader() -> StubLoader {
    let mut loader = StubLoader::new();
    insert_shizuku_bundle(&mut loader);
    insert_haru_bundle(&mut loader);
    loader
}

#[tokio::test]
async fn cubism2_and_cubism4_models_share_a_stage() {
    let loader = dual_loader();
    let mut surface = surface();

    let shizuku = Live2DModel::from(&loader, SHIZUKU_URL).await.unwrap();
    let haru = Live2DModel::from(&loader, HARU_URL).await.unwrap();

    assert_eq!(shizuku.settings().name(), "shizuku");
    assert_eq!(shizuku.settings().moc_file(), "shizuku.moc");
    assert_eq!(haru.settings().name(), "haru");
    assert_eq!(haru.settings().moc_file(), "haru.moc3");

    let id2 = surface.add_child(Box::new(shizuku));
    let id4 = surface.add_child(Box::new(haru));
    assert_eq!((id2, id4), (0, 1));
    assert_eq!(surface.stage().len(), 2);

    // Both render without error.
    surface.tick(1.0 / 60.0).unwrap();
}

#[tokio::test]
async fn model_size_comes_from_the_texture_atlas() {
    let loader = dual_loader();
    let shizuku = Live2DModel::from(&loader, SHIZUKU_URL).await.unwrap();
    assert_eq!(stage_core::Renderable::size(&shizuku), (64.0, 64.0));
    assert!(!shizuku.moc().is_empty());
}

#[tokio::test]
async fn surface_tap_reaches_the_model_motion() {
    let loader = dual_loader();
    let mut surface = surface();

    let mut model = Live2DModel::from(&loader, SHIZUKU_URL).await.unwrap();
    model.motions_mut().set_autoplay_idle(false);
    // The moc owns real hit geometry; register the body region over the
    // lower half of the atlas box.
    assert!(model.set_hit_bounds(
        "body",
        HitBounds::new(Vec2::new(0.0, 32.0), Vec2::new(64.0, 64.0))
    ));
    model.on_hit(|hit_areas, motions| {
        if hit_areas.iter().any(|a| a == "body") {
            motions.start_motion("tap_body", None, live2d_core::MotionPriority::Normal);
        }
    });

    let id = surface.add_child(Box::new(model));
    {
        let node = surface.stage_mut().node_mut(id).unwrap();
        node.transform.set_position(100.0, 100.0);
        node.transform.set_scale(0.2, 0.2);
    }

    // Surface point inside the scaled body region: local (32, 48).
    surface.dispatch_tap(100.0 + 32.0 * 0.2, 100.0 + 48.0 * 0.2);

    let model = surface
        .stage_mut()
        .node_mut(id)
        .unwrap()
        .renderable
        .as_any_mut()
        .downcast_mut::<Live2DModel>()
        .unwrap();
    assert_eq!(model.motions().current().unwrap().group, "tap_body");

    // A tap above the body region reports nothing.
    model.motions_mut().stop();
    surface.dispatch_tap(100.0, 100.0);
    let model = surface
        .stage_mut()
        .node_mut(id)
        .unwrap()
        .renderable
        .as_any_mut()
        .downcast_mut::<Live2DModel>()
        .unwrap();
    assert!(!model.motions().is_playing());
}

#[tokio::test]
async fn undefined_motion_group_is_ignored() {
    let loader = dual_loader();
    let mut model = Live2DModel::from(&loader, SHIZUKU_URL).await.unwrap();
    model.motions_mut().set_autoplay_idle(false);

    assert!(!model.motion("flick_head"));
    assert!(!model.motions().is_playing());
    assert!(model.motion("tap_body"));
}
