//! Merge between live objects and scene documents, in both directions

use shared::{SceneDocument, SceneSettings, TransformRecord};

use super::live::{TrackedObjects, Transformable};

/// What an apply pass did, for logging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Records that matched a live object
    pub applied: usize,
    /// Record ids with no live counterpart (stale layout)
    pub skipped: Vec<String>,
}

/// Copy the saved transforms of `document` onto matching live objects.
///
/// Records whose id is not tracked are skipped; live objects the document does
/// not mention keep their current transform. Applying the same document again
/// changes nothing. With duplicate ids, the later record wins.
pub fn apply_document_to_live(document: &SceneDocument, live: &mut TrackedObjects) -> ApplyReport {
    let mut report = ApplyReport::default();

    for record in &document.objects {
        match live.get_mut(&record.id) {
            Some(object) => {
                object.set_position(record.position);
                object.set_rotation(record.rotation);
                object.set_scale(record.scale);
                report.applied += 1;
            }
            None => report.skipped.push(record.id.clone()),
        }
    }

    if !report.skipped.is_empty() {
        tracing::debug!(
            "Skipped {} record(s) with no live object: {:?}",
            report.skipped.len(),
            report.skipped
        );
    }
    report
}

/// Snapshot one live object as a record
pub fn record_of(object: &dyn Transformable) -> TransformRecord {
    TransformRecord {
        id: object.id().to_string(),
        name: object.name().to_string(),
        kind: object.kind(),
        position: object.position(),
        rotation: object.rotation(),
        scale: object.scale(),
        color: None,
        properties: None,
    }
}

/// Fresh document with one record per tracked object, in tracking order
pub fn capture_live_to_document(live: &TrackedObjects, settings: SceneSettings) -> SceneDocument {
    SceneDocument::new(live.iter().map(record_of).collect(), settings)
}

#[cfg(test)]
mod tests {
    use shared::{ObjectKind, Vec3};

    use super::*;
    use crate::state::scene::live::SceneObject;

    const EPS: f64 = 1e-9;

    fn live_set() -> TrackedObjects {
        let mut live = TrackedObjects::new();
        live.track(SceneObject::new("desk", ObjectKind::Box).at(1.0, 0.375, 2.0).yaw(0.5));
        live.track(
            SceneObject::new("lamp", ObjectKind::Sphere)
                .at(-3.25, 2.0, 0.125)
                .scaled(Vec3::new(0.5, 0.5, 0.5)),
        );
        live.track(SceneObject::new("ground", ObjectKind::Plane).at(0.0, -0.01, 0.0));
        live
    }

    fn transforms(live: &TrackedObjects) -> Vec<(String, Vec3, Vec3, Vec3)> {
        live.iter()
            .map(|o| (o.id().to_string(), o.position(), o.rotation(), o.scale()))
            .collect()
    }

    fn same_transforms(a: &TrackedObjects, b: &TrackedObjects) -> bool {
        transforms(a)
            .iter()
            .zip(transforms(b).iter())
            .all(|(x, y)| {
                x.0 == y.0 && x.1.approx_eq(&y.1, EPS) && x.2.approx_eq(&y.2, EPS) && x.3.approx_eq(&y.3, EPS)
            })
    }

    #[test]
    fn test_capture_then_apply_round_trip() {
        let source = live_set();
        let doc = capture_live_to_document(&source, SceneSettings::default());

        let mut target = TrackedObjects::new();
        for id in ["desk", "lamp", "ground"] {
            target.track(SceneObject::new(id, ObjectKind::Box));
        }
        let report = apply_document_to_live(&doc, &mut target);

        assert_eq!(report.applied, 3);
        assert!(report.skipped.is_empty());
        assert!(same_transforms(&source, &target));
    }

    #[test]
    fn test_capture_is_total_and_ordered() {
        let live = live_set();
        let doc = capture_live_to_document(&live, SceneSettings::default());

        assert_eq!(doc.version, 1);
        assert_eq!(doc.ids().collect::<Vec<_>>(), vec!["desk", "lamp", "ground"]);
        assert_eq!(doc.objects[1].kind, ObjectKind::Sphere);
        assert_eq!(doc.objects[1].scale, Vec3::new(0.5, 0.5, 0.5));
        assert!(doc.objects.iter().all(|r| r.color.is_none() && r.properties.is_none()));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let doc = SceneDocument::new(
            vec![
                TransformRecord::new("desk", ObjectKind::Box).with_position(Vec3::new(9.0, 0.0, 9.0)),
                TransformRecord::new("lamp", ObjectKind::Box).with_rotation(Vec3::new(0.1, 0.2, 0.3)),
            ],
            SceneSettings::default(),
        );

        let mut once = live_set();
        apply_document_to_live(&doc, &mut once);

        let mut twice = live_set();
        apply_document_to_live(&doc, &mut twice);
        apply_document_to_live(&doc, &mut twice);

        assert!(same_transforms(&once, &twice));
    }

    #[test]
    fn test_unknown_id_is_skipped() {
        let doc = SceneDocument::new(
            vec![
                TransformRecord::new("removed_plant", ObjectKind::Box).with_position(Vec3::new(7.0, 7.0, 7.0)),
                TransformRecord::new("desk", ObjectKind::Box).with_position(Vec3::new(4.0, 0.375, 4.0)),
            ],
            SceneSettings::default(),
        );
        let mut live = live_set();
        let report = apply_document_to_live(&doc, &mut live);

        assert_eq!(report.applied, 1);
        assert_eq!(report.skipped, vec!["removed_plant".to_string()]);
        assert_eq!(live.get("desk").unwrap().position(), Vec3::new(4.0, 0.375, 4.0));
        assert!(!live.contains("removed_plant"));
    }

    #[test]
    fn test_unmentioned_object_keeps_transform() {
        let doc = SceneDocument::new(
            vec![TransformRecord::new("desk", ObjectKind::Box).with_position(Vec3::new(4.0, 0.0, 4.0))],
            SceneSettings::default(),
        );
        let mut live = live_set();
        apply_document_to_live(&doc, &mut live);

        let lamp = live.get("lamp").unwrap();
        assert_eq!(lamp.position(), Vec3::new(-3.25, 2.0, 0.125));
        assert_eq!(lamp.scale(), Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_duplicate_record_last_wins() {
        let doc = SceneDocument::new(
            vec![
                TransformRecord::new("desk", ObjectKind::Box).with_position(Vec3::new(1.0, 0.0, 0.0)),
                TransformRecord::new("desk", ObjectKind::Box).with_position(Vec3::new(2.0, 0.0, 0.0)),
            ],
            SceneSettings::default(),
        );
        let mut live = live_set();
        apply_document_to_live(&doc, &mut live);
        assert_eq!(live.get("desk").unwrap().position().x, 2.0);
    }

    #[test]
    fn test_apply_does_not_touch_identity() {
        let mut record = TransformRecord::new("lamp", ObjectKind::Character);
        record.name = "Renamed".into();
        let doc = SceneDocument::new(vec![record], SceneSettings::default());

        let mut live = live_set();
        apply_document_to_live(&doc, &mut live);

        let lamp = live.get("lamp").unwrap();
        assert_eq!(lamp.name(), "lamp");
        assert_eq!(lamp.kind(), ObjectKind::Sphere);
    }
}
