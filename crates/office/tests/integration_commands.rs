//! Integration tests for the AgentCommand JSON protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use virtual_office_lib::command::{execute_json, execute_json_batch};
use virtual_office_lib::fixtures;
use virtual_office_lib::harness::TestHarness;
use virtual_office_lib::state::scene::AL_FIGMA_URL_KEY;

#[test]
fn test_command_move_and_get_object() {
    let mut h = TestHarness::new();

    let json = r#"{"command": "move_object", "id": "desk_alex", "position": {"x": 1, "y": 0.375, "z": 2}, "rotation": {"x": 0, "y": 0.5, "z": 0}}"#;
    let resp = execute_json(&mut h.session, json).unwrap();
    assert!(resp.success);
    let data = resp.data.unwrap();
    assert_eq!(data["position"]["x"], 1.0);
    assert_eq!(data["rotation"]["y"], 0.5);

    let resp = execute_json(&mut h.session, r#"{"command": "get_object", "id": "desk_alex"}"#).unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data["id"], "desk_alex");
    assert_eq!(data["type"], "box");
    assert_eq!(data["position"]["z"], 2.0);
}

#[test]
fn test_command_move_unknown_object() {
    let mut h = TestHarness::new();
    let json = r#"{"command": "move_object", "id": "sofa", "position": {"x": 1, "y": 0, "z": 0}}"#;
    let resp = execute_json(&mut h.session, json).unwrap();
    assert!(!resp.success);
    assert!(resp.error.unwrap().contains("sofa"));
}

#[test]
fn test_command_agent_kinds_on_wire() {
    let mut h = TestHarness::new();
    let resp = execute_json(&mut h.session, r#"{"command": "get_object", "id": "body_al_near_kevin"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["type"], "al");

    let resp = execute_json(&mut h.session, r#"{"command": "get_object", "id": "body_sara"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["type"], "character");
}

#[test]
fn test_command_save_reset_reload_via_json_batch() {
    let mut h = TestHarness::new();

    let json = r#"[
        {"command": "move_object", "id": "ground", "position": {"x": 0, "y": -1, "z": 0}},
        {"command": "save"},
        {"command": "reload"},
        {"command": "get_object", "id": "ground"},
        {"command": "reset"},
        {"command": "reload"},
        {"command": "get_object", "id": "ground"}
    ]"#;

    let responses = execute_json_batch(&mut h.session, json).unwrap();
    assert_eq!(responses.len(), 7);
    assert!(responses.iter().all(|r| r.success));

    assert_eq!(responses[1].data.as_ref().unwrap()["saved"], 52);
    assert_eq!(responses[2].data.as_ref().unwrap()["layout_source"], "saved");
    assert_eq!(responses[3].data.as_ref().unwrap()["position"]["y"], -1.0);
    assert_eq!(responses[4].data.as_ref().unwrap()["reload_required"], true);
    assert_eq!(responses[5].data.as_ref().unwrap()["layout_source"], "default");
    assert_eq!(responses[6].data.as_ref().unwrap()["position"]["y"], -0.01);
}

#[test]
fn test_command_load_applies_saved_layout() {
    let mut h = TestHarness::new();
    let resp = execute_json(&mut h.session, r#"{"command": "load"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.unwrap()["found"], false);

    let mut doc = fixtures::stale_document();
    doc.objects.push(fixtures::record_at("desk_julia", [2.0, 0.375, 2.0]));
    h.put_raw(&fixtures::stored_json(&doc));

    let resp = execute_json(&mut h.session, r#"{"command": "load"}"#).unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data["found"], true);
    assert_eq!(data["applied"], 1);
    assert_eq!(data["skipped"].as_array().unwrap().len(), 2);
    assert_eq!(h.position_of("desk_julia").unwrap().x, 2.0);
}

#[test]
fn test_command_load_adopts_saved_environment() {
    let mut h = TestHarness::new();
    assert!(!h.session.scene.environment.fog_enabled);

    let mut doc = fixtures::desk_alex_moved();
    doc.settings.fog_enabled = true;
    h.put_raw(&fixtures::stored_json(&doc));

    let resp = execute_json(&mut h.session, r#"{"command": "load"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["found"], true);
    assert!(h.session.scene.environment.fog_enabled);

    let resp = execute_json(&mut h.session, r#"{"command": "inspect"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["layout_source"], "saved");
}

#[test]
fn test_command_load_ignores_empty_document() {
    let mut h = TestHarness::new();
    h.put_raw(&fixtures::stored_json(&fixtures::empty_document()));

    let resp = execute_json(&mut h.session, r#"{"command": "load"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["found"], false);
}

#[test]
fn test_command_import_scene_requires_reload() {
    let mut h = TestHarness::new();
    let cmd = serde_json::json!({
        "command": "import_scene",
        "json": fixtures::DESK_ALEX_JSON,
    });

    let resp = execute_json(&mut h.session, &cmd.to_string()).unwrap();
    assert!(resp.success);
    let data = resp.data.unwrap();
    assert_eq!(data["objects"], 1);
    assert_eq!(data["reload_required"], true);
    assert_eq!(h.stored_document().unwrap(), fixtures::desk_alex_moved());

    execute_json(&mut h.session, r#"{"command": "reload"}"#).unwrap();
    assert_eq!(h.position_of("desk_alex").unwrap().z, 2.0);
}

#[test]
fn test_command_export_scene() {
    let mut h = TestHarness::new();
    let resp = execute_json(&mut h.session, r#"{"command": "export_scene"}"#).unwrap();
    assert!(resp.success);

    let data = resp.data.unwrap();
    let scene_json = data["scene_json"].as_str().unwrap();
    assert!(scene_json.starts_with("{\n  \"version\": 1,"));
    assert!(scene_json.contains("\"scaling\""));
}

#[test]
fn test_command_embed_urls() {
    let mut h = TestHarness::new();

    let resp = execute_json(
        &mut h.session,
        r#"{"command": "set_embed_url", "slot": "al", "url": "https://figma.com/file/al"}"#,
    )
    .unwrap();
    assert!(resp.success);
    assert_eq!(
        h.backend().get(AL_FIGMA_URL_KEY).unwrap().as_deref(),
        Some("https://figma.com/file/al")
    );

    let resp = execute_json(&mut h.session, r#"{"command": "export_scene"}"#).unwrap();
    let scene_json = resp.data.unwrap()["scene_json"].as_str().unwrap().to_string();
    assert!(scene_json.contains("\"alFigmaUrl\": \"https://figma.com/file/al\""));

    let resp = execute_json(&mut h.session, r#"{"command": "clear_embed_url", "slot": "al"}"#).unwrap();
    assert!(resp.success);
    assert!(h.backend().get(AL_FIGMA_URL_KEY).unwrap().is_none());
}

#[test]
fn test_command_unknown_command_rejected() {
    let mut h = TestHarness::new();
    assert!(execute_json(&mut h.session, r#"{"command": "fly"}"#).is_err());
    assert!(execute_json_batch(&mut h.session, r#"{"command": "save"}"#).is_err());
}
