//! Scene state management
//!
//! Live objects are the source of truth while the office is running. This
//! module decides which layout they start from (saved document or the default
//! seed) and turns them back into documents for save and export.

pub mod extension;
pub mod layout;
pub mod live;
pub mod persistence;
pub mod resolver;
pub mod seed;
pub mod storage;
mod transform_ops;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::SceneDocument;

pub use extension::{EmbedSlot, EmbedUrls, AD_FIGMA_URL_KEY, AL_FIGMA_URL_KEY};
pub use live::{SceneObject, TrackedObjects, Transformable};
pub use persistence::{ImportOutcome, SceneStore, EXPORT_FILE_NAME, SCENE_KEY};
pub use resolver::{apply_document_to_live, capture_live_to_document, record_of, ApplyReport};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use transform_ops::MoveError;

use super::settings::EnvironmentSettings;
use crate::agent::Roster;

/// Where the current layout came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutSource {
    /// A stored document with at least one record
    Saved,
    /// The built-in seed
    Default,
}

/// Live office objects plus the environment they are shown in
pub struct SceneState {
    pub objects: TrackedObjects,
    pub environment: EnvironmentSettings,
    /// Monotonically increasing version counter, bumped on every mutation
    pub(crate) version: u64,
    source: LayoutSource,
}

impl SceneState {
    pub fn new(objects: TrackedObjects, environment: EnvironmentSettings) -> Self {
        Self {
            objects,
            environment,
            version: 0,
            source: LayoutSource::Default,
        }
    }

    /// Freshly built office with code-computed transforms
    pub fn build(roster: &Roster, environment: EnvironmentSettings) -> Self {
        Self::new(layout::build_office(roster), environment)
    }

    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn notify_mutated(&mut self) {
        self.version += 1;
    }

    pub fn layout_source(&self) -> LayoutSource {
        self.source
    }

    pub fn get(&self, id: &str) -> Option<&dyn Transformable> {
        self.objects.get(id)
    }

    /// Apply the stored layout, or the default seed when nothing usable is stored.
    ///
    /// A stored document with no records counts as absent.
    pub fn load_startup_layout(&mut self, store: &SceneStore) -> LayoutSource {
        match store.load().filter(|doc| !doc.is_empty()) {
            Some(document) => {
                let report = self.apply_saved(&document);
                tracing::info!(
                    "Applied saved layout: {} objects, {} stale records",
                    report.applied,
                    report.skipped.len()
                );
            }
            None => {
                let report = apply_document_to_live(&seed::default_layout(), &mut self.objects);
                tracing::info!("Applied default layout to {} objects", report.applied);
                self.source = LayoutSource::Default;
                self.notify_mutated();
            }
        }
        self.source
    }

    /// Show a saved document: its transforms and its environment
    pub fn apply_saved(&mut self, document: &SceneDocument) -> ApplyReport {
        let report = apply_document_to_live(document, &mut self.objects);
        self.environment = EnvironmentSettings::from_scene(&document.settings);
        self.source = LayoutSource::Saved;
        self.notify_mutated();
        report
    }

    /// Document of the current live transforms with `embeds` folded into the settings
    pub fn capture(&self, embeds: EmbedUrls) -> SceneDocument {
        capture_live_to_document(&self.objects, embeds.attach_to(self.environment.to_scene()))
    }

    /// Capture and write to the saved-layout key
    pub fn save(&self, store: &SceneStore) -> Result<(), StoreError> {
        store.save(&self.capture(store.embed_urls()))
    }

    /// Capture and write `dir/virtual-office-scene.json`
    pub fn export(&self, store: &SceneStore, dir: &Path) -> Result<PathBuf, StoreError> {
        store.export_to_file(&self.capture(store.embed_urls()), dir)
    }
}

impl std::fmt::Debug for SceneState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneState")
            .field("objects", &self.objects.len())
            .field("environment", &self.environment)
            .field("version", &self.version)
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use shared::{ObjectKind, SceneSettings, TransformRecord, Vec3};

    use super::*;

    fn office() -> SceneState {
        SceneState::build(&Roster::office(), EnvironmentSettings::default())
    }

    #[test]
    fn test_startup_without_saved_layout_uses_seed() {
        let store = SceneStore::in_memory();
        let mut scene = office();
        assert_eq!(scene.load_startup_layout(&store), LayoutSource::Default);

        let desk = scene.get("desk_alex").unwrap();
        let seeded = seed::default_layout();
        assert_eq!(desk.position(), seeded.find("desk_alex").unwrap().position);
    }

    #[test]
    fn test_startup_with_empty_objects_uses_seed() {
        let store = SceneStore::in_memory();
        store
            .save(&SceneDocument::new(
                Vec::new(),
                SceneSettings {
                    fog_enabled: true,
                    ..SceneSettings::default()
                },
            ))
            .unwrap();

        let mut scene = office();
        assert_eq!(scene.load_startup_layout(&store), LayoutSource::Default);
        assert_eq!(scene.layout_source(), LayoutSource::Default);
        // Settings of an ignored document are not adopted
        assert!(!scene.environment.fog_enabled);
    }

    #[test]
    fn test_startup_adopts_saved_environment() {
        let store = SceneStore::in_memory();
        let doc = SceneDocument::new(
            vec![TransformRecord::new("ground", ObjectKind::Plane).with_position(Vec3::new(0.0, -1.0, 0.0))],
            SceneSettings {
                fog_enabled: true,
                fog_start: 10.0,
                ..SceneSettings::default()
            },
        );
        store.save(&doc).unwrap();

        let mut scene = office();
        assert_eq!(scene.load_startup_layout(&store), LayoutSource::Saved);
        assert!(scene.environment.fog_enabled);
        assert_eq!(scene.environment.fog_start, 10.0);
        assert_eq!(scene.get("ground").unwrap().position().y, -1.0);
    }

    #[test]
    fn test_apply_saved_marks_layout_saved() {
        let mut scene = office();
        let version = scene.version();
        let doc = SceneDocument::new(
            vec![TransformRecord::new("ground", ObjectKind::Plane).with_position(Vec3::new(0.0, -1.0, 0.0))],
            SceneSettings {
                fog_enabled: true,
                ..SceneSettings::default()
            },
        );

        let report = scene.apply_saved(&doc);
        assert_eq!(report.applied, 1);
        assert_eq!(scene.layout_source(), LayoutSource::Saved);
        assert!(scene.environment.fog_enabled);
        assert!(scene.version() > version);
    }

    #[test]
    fn test_capture_folds_in_embed_urls() {
        let store = SceneStore::in_memory();
        store.set_embed_url(EmbedSlot::Ad, "https://figma.com/ad").unwrap();

        let scene = office();
        scene.save(&store).unwrap();

        let saved = store.load().unwrap();
        assert_eq!(saved.objects.len(), scene.objects.len());
        assert_eq!(saved.settings.ad_figma_url.as_deref(), Some("https://figma.com/ad"));
        assert_eq!(saved.settings.al_figma_url, None);
    }

    #[test]
    fn test_startup_bumps_version() {
        let store = SceneStore::in_memory();
        let mut scene = office();
        let before = scene.version();
        scene.load_startup_layout(&store);
        assert!(scene.version() > before);
    }
}
