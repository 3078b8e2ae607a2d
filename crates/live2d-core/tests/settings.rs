//! Settings Tests
//!
//! Covers URL resolution, fade-time normalization, and the unified view over
//! both descriptor formats.

use live2d_core::ModelSettings;
use live2d_data::model::ModelJson;

fn shizuku_like() -> ModelSettings {
    let json = serde_json::json!({
        "model": "shizuku.moc",
        "textures": ["shizuku.1024/texture_00.png", "shizuku.1024/texture_01.png"],
        "hit_areas": [
            { "name": "head", "id": "D_REF.HEAD" },
            { "name": "body", "id": "D_REF.BODY" }
        ],
        "motions": {
            "idle": [{ "file": "motions/idle_00.mtn", "fade_in": 2000, "fade_out": 500 }],
            "tap_body": [{ "file": "motions/tapBody_00.mtn", "sound": "sounds/tapBody_00.mp3" }]
        }
    });
    let parsed = ModelJson::from_slice(json.to_string().as_bytes()).unwrap();
    ModelSettings::new(
        "https://cdn.example.com/assets/shizuku/shizuku.model.json",
        parsed,
    )
}

#[test]
fn resolves_relative_references_against_descriptor_url() {
    let settings = shizuku_like();
    assert_eq!(
        settings.resolve("shizuku.moc"),
        "https://cdn.example.com/assets/shizuku/shizuku.moc"
    );
    assert_eq!(
        settings.resolve("motions/idle_00.mtn"),
        "https://cdn.example.com/assets/shizuku/motions/idle_00.mtn"
    );
    // Absolute references pass through untouched.
    assert_eq!(
        settings.resolve("https://other.example.com/t.png"),
        "https://other.example.com/t.png"
    );
    assert_eq!(settings.resolve("/t.png"), "/t.png");
}

#[test]
fn derives_name_from_descriptor_file() {
    let settings = shizuku_like();
    assert_eq!(settings.name(), "shizuku");
}

#[test]
fn normalizes_cubism2_fade_times_to_seconds() {
    let settings = shizuku_like();
    let idle = &settings.motion_group("idle").unwrap()[0];
    assert_eq!(idle.fade_in, 2.0);
    assert_eq!(idle.fade_out, 0.5);

    // Unspecified fades fall back to the default.
    let tap = &settings.motion_group("tap_body").unwrap()[0];
    assert_eq!(tap.fade_in, live2d_core::settings::DEFAULT_FADE_SECONDS);
}

#[test]
fn cubism4_fades_pass_through_in_seconds() {
    let json = serde_json::json!({
        "Version": 3,
        "FileReferences": {
            "Moc": "haru.moc3",
            "Textures": ["haru.2048/texture_00.png"],
            "Motions": {
                "Idle": [{ "File": "motions/idle.motion3.json", "FadeInTime": 0.5, "FadeOutTime": 0.25 }]
            }
        },
        "HitAreas": [{ "Id": "HitArea", "Name": "Body" }]
    });
    let parsed = ModelJson::from_slice(json.to_string().as_bytes()).unwrap();
    let settings = ModelSettings::new("https://cdn.example.com/haru/haru.model3.json", parsed);

    assert_eq!(settings.moc_file(), "haru.moc3");
    assert_eq!(settings.idle_group(), Some("Idle"));
    let idle = &settings.motion_group("Idle").unwrap()[0];
    assert_eq!(idle.fade_in, 0.5);
    assert_eq!(idle.fade_out, 0.25);
    assert_eq!(settings.hit_area_names().collect::<Vec<_>>(), ["Body"]);
}

#[test]
fn undefined_motion_group_is_none() {
    let settings = shizuku_like();
    assert!(settings.motion_group("flick_head").is_none());
    assert_eq!(settings.idle_group(), Some("idle"));
}
