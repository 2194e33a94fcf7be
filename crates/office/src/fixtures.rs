//! Factory functions for creating test data.
//!
//! Records, documents and raw JSON used by tests and by command-protocol
//! drivers.

use shared::*;

// ── Record factories ────────────────────────────────────────────

/// Box record at `pos` with identity rotation and unit scale.
pub fn record_at(id: &str, pos: [f64; 3]) -> TransformRecord {
    TransformRecord::new(id, ObjectKind::Box).with_position(pos.into())
}

/// Record with every transform field given.
pub fn record(id: &str, pos: [f64; 3], rot: [f64; 3], scale: [f64; 3]) -> TransformRecord {
    TransformRecord::new(id, ObjectKind::Box)
        .with_position(pos.into())
        .with_rotation(rot.into())
        .with_scale(scale.into())
}

// ── Document factories ──────────────────────────────────────────

/// Document with default settings.
pub fn document(objects: Vec<TransformRecord>) -> SceneDocument {
    SceneDocument::new(objects, SceneSettings::default())
}

/// Document with no records at all.
pub fn empty_document() -> SceneDocument {
    document(Vec::new())
}

/// Alex's desk pulled to (1, 0.375, 2).
pub fn desk_alex_moved() -> SceneDocument {
    document(vec![record_at("desk_alex", [1.0, 0.375, 2.0])])
}

/// Records for ids no office builds.
pub fn stale_document() -> SceneDocument {
    document(vec![
        record_at("removed_plant", [3.0, 0.0, 3.0]),
        record_at("old_sofa", [-4.0, 0.0, 1.0]),
    ])
}

// ── Raw JSON ────────────────────────────────────────────────────

/// Compact JSON of `document`, as the store would hold it.
pub fn stored_json(document: &SceneDocument) -> String {
    serde_json::to_string(document).unwrap_or_default()
}

/// Hand-written JSON in the exact persisted shape.
pub const DESK_ALEX_JSON: &str = r#"{
  "version": 1,
  "objects": [
    {
      "id": "desk_alex",
      "name": "desk_alex",
      "type": "box",
      "position": { "x": 1, "y": 0.375, "z": 2 },
      "rotation": { "x": 0, "y": 0, "z": 0 },
      "scaling": { "x": 1, "y": 1, "z": 1 }
    }
  ],
  "settings": {
    "fogEnabled": false,
    "fogStart": 60,
    "fogEnd": 250,
    "ambientIntensity": 0.4
  }
}"#;
