//! Headless harness for driving an office session in tests.
//!
//! The session sits on an in-memory key-value store that outlives it, so a
//! test can "restart the app" and observe what was persisted.

use std::sync::Arc;

use shared::{SceneDocument, Vec3};

use crate::agent::Roster;
use crate::state::scene::{KeyValueStore, MemoryStore, SceneStore, SCENE_KEY};
use crate::state::{AppSettings, OfficeSession};

/// Headless test harness: one session plus the store behind it
pub struct TestHarness {
    pub session: OfficeSession,
    backend: Arc<dyn KeyValueStore>,
}

impl TestHarness {
    /// Office over an empty in-memory store, no API key.
    pub fn new() -> Self {
        Self::with_backend(Arc::new(MemoryStore::new()))
    }

    /// Office over an existing store
    pub fn with_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        let session = Self::start_session(backend.clone());
        Self { session, backend }
    }

    fn start_session(backend: Arc<dyn KeyValueStore>) -> OfficeSession {
        OfficeSession::start(
            SceneStore::new(backend),
            AppSettings::default(),
            Roster::office(),
            None,
        )
    }

    /// Drop the session and start a fresh one on the same store
    pub fn restart(&mut self) {
        self.session = Self::start_session(self.backend.clone());
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Set an object's position; false if the id is unknown
    pub fn move_object(&mut self, id: &str, x: f64, y: f64, z: f64) -> bool {
        self.session
            .scene
            .set_transform(id, Some(Vec3::new(x, y, z)), None, None)
            .is_ok()
    }

    pub fn position_of(&self, id: &str) -> Option<Vec3> {
        self.session.scene.get(id).map(|o| o.position())
    }

    pub fn object_count(&self) -> usize {
        self.session.scene.objects.len()
    }

    /// Save, panicking on failure
    pub fn save(&self) {
        if let Err(e) = self.session.save_scene() {
            panic!("save failed: {e}");
        }
    }

    // ── Store inspection ──────────────────────────────────────

    /// Raw value under the saved-layout key
    pub fn stored_raw(&self) -> Option<String> {
        self.backend.get(SCENE_KEY).ok().flatten()
    }

    pub fn stored_document(&self) -> Option<SceneDocument> {
        self.session.store.load()
    }

    /// Put a raw value under the saved-layout key
    pub fn put_raw(&self, json: &str) {
        if let Err(e) = self.backend.set(SCENE_KEY, json) {
            panic!("put_raw failed: {e}");
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LayoutSource;

    #[test]
    fn test_fresh_harness_uses_default_layout() {
        let h = TestHarness::new();
        assert_eq!(h.object_count(), 52);
        assert_eq!(h.session.scene.layout_source(), LayoutSource::Default);
        assert!(h.stored_raw().is_none());
    }

    #[test]
    fn test_restart_keeps_store() {
        let mut h = TestHarness::new();
        assert!(h.move_object("ground", 0.0, -0.5, 0.0));
        h.save();
        h.restart();

        assert_eq!(h.session.scene.layout_source(), LayoutSource::Saved);
        assert_eq!(h.position_of("ground"), Some(Vec3::new(0.0, -0.5, 0.0)));
    }

    #[test]
    fn test_move_unknown_object() {
        let mut h = TestHarness::new();
        assert!(!h.move_object("sofa", 1.0, 1.0, 1.0));
        assert!(h.position_of("sofa").is_none());
    }
}
