//! Tests for the scene descriptor wire form.

use showrunner_core::{Location, SceneDescriptor};

fn studio_descriptor() -> SceneDescriptor {
    SceneDescriptor::builder()
        .scene_id("Studio")
        .actors(vec!["A".to_string(), "B".to_string()])
        .locations(vec![Location::new(
            "Studio",
            vec!["Desk".to_string(), "Camera".to_string()],
        )])
        .build()
        .expect("Valid descriptor")
}

#[test]
fn test_descriptor_round_trip() {
    let descriptor = studio_descriptor();

    let json = serde_json::to_string(&descriptor).unwrap();
    let parsed: SceneDescriptor = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, descriptor);
    assert_eq!(parsed.scene_id(), "Studio");
}

#[test]
fn test_descriptor_wire_field_names() {
    let json = serde_json::to_value(studio_descriptor()).unwrap();

    assert_eq!(json["characters"], serde_json::json!(["A", "B"]));
    assert_eq!(json["locations"][0]["title"], "Studio");
    assert_eq!(
        json["locations"][0]["interactableObjects"],
        serde_json::json!(["Desk", "Camera"])
    );
}

#[test]
fn test_descriptor_accepts_payload_without_scene_id() {
    let payload = r#"{"characters": ["A"], "locations": [{"title": "L", "interactableObjects": ["X"]}]}"#;

    let parsed: SceneDescriptor = serde_json::from_str(payload).unwrap();

    assert!(parsed.scene_id().is_empty());
    assert_eq!(parsed.actors(), &vec!["A".to_string()]);
    assert_eq!(parsed.locations()[0].interactables, vec!["X".to_string()]);
}

#[test]
fn test_empty_descriptor_is_empty() {
    let descriptor = SceneDescriptor::builder().build().unwrap();
    assert!(descriptor.is_empty());
    assert!(descriptor.locations().is_empty());
}
