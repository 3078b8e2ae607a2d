// live2d-data: Serde structs for Live2D Cubism model descriptors
pub mod model;

#[cfg(test)]
mod tests {
    use super::model::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_cubism2_minimal() {
        let data = json!({
            "version": "Sample 1.0.0",
            "model": "shizuku.moc",
            "textures": ["shizuku.1024/texture_00.png", "shizuku.1024/texture_01.png"]
        });
        let model: Cubism2Model = serde_json::from_value(data).unwrap();
        assert_eq!(model.model, "shizuku.moc");
        assert_eq!(model.textures.len(), 2);
        assert!(model.motions.is_empty());
        assert!(model.hit_areas.is_empty());
    }

    #[test]
    fn test_deserialize_cubism2_motions_and_hit_areas() {
        let data = json!({
            "model": "shizuku.moc",
            "textures": ["texture_00.png"],
            "hit_areas": [
                { "name": "head", "id": "D_REF.HEAD" },
                { "name": "body", "id": "D_REF.BODY" }
            ],
            "motions": {
                "idle": [
                    { "file": "motions/idle_00.mtn", "fade_in": 2000, "fade_out": 2000 }
                ],
                "tap_body": [
                    { "file": "motions/tapBody_00.mtn", "sound": "sounds/tapBody_00.mp3" }
                ]
            }
        });
        let model: Cubism2Model = serde_json::from_value(data).unwrap();
        assert_eq!(model.hit_areas[1].name, "body");
        let tap = &model.motions["tap_body"][0];
        assert_eq!(tap.sound.as_deref(), Some("sounds/tapBody_00.mp3"));
        assert_eq!(tap.fade_in, None);
        assert_eq!(model.motions["idle"][0].fade_in, Some(2000.0));
    }

    #[test]
    fn test_deserialize_cubism4() {
        let data = json!({
            "Version": 3,
            "FileReferences": {
                "Moc": "haru_greeter_t03.moc3",
                "Textures": ["haru_greeter_t03.2048/texture_00.png"],
                "Motions": {
                    "Idle": [
                        { "File": "motions/haru_g_idle.motion3.json", "FadeInTime": 0.5, "FadeOutTime": 0.5 }
                    ]
                }
            },
            "HitAreas": [
                { "Id": "HitArea", "Name": "Body" }
            ]
        });
        let model: Cubism4Model = serde_json::from_value(data).unwrap();
        assert_eq!(model.file_references.moc, "haru_greeter_t03.moc3");
        assert_eq!(model.hit_areas[0].name, "Body");
        assert_eq!(
            model.file_references.motions["Idle"][0].fade_in_time,
            Some(0.5)
        );
    }

    #[test]
    fn test_format_sniffing() {
        let v2 = json!({ "model": "a.moc", "textures": ["t.png"] });
        let v4 = json!({ "FileReferences": { "Moc": "a.moc3" } });

        let parsed = ModelJson::from_slice(v2.to_string().as_bytes()).unwrap();
        assert!(matches!(parsed, ModelJson::Cubism2(_)));

        let parsed = ModelJson::from_slice(v4.to_string().as_bytes()).unwrap();
        assert!(matches!(parsed, ModelJson::Cubism4(_)));
    }

    #[test]
    fn test_malformed_descriptor_fails() {
        assert!(ModelJson::from_slice(b"not json").is_err());
        // Valid JSON but missing the required moc reference.
        assert!(ModelJson::from_slice(br#"{ "textures": [] }"#).is_err());
    }
}
