//! Session state: the office scene, its store, conversations and settings

pub mod chat;
pub mod scene;
pub mod settings;

use std::path::{Path, PathBuf};

use shared::SceneDocument;

use crate::agent::{AgentId, RemoteAgent, Roster};
use chat::Conversations;
pub use scene::{EmbedSlot, ImportOutcome, LayoutSource, SceneState, SceneStore, StoreError};
pub use settings::AppSettings;

/// Returned by a reset: the live scene still shows the old layout until
/// [`OfficeSession::finish_reset`] or [`OfficeSession::reload`] runs.
#[must_use = "pass to OfficeSession::finish_reset to show the default layout"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadRequired;

/// Everything one running office owns
pub struct OfficeSession {
    pub scene: SceneState,
    pub store: SceneStore,
    pub chat: Conversations,
    pub roster: Roster,
    pub settings: AppSettings,
}

impl OfficeSession {
    /// Build the office and apply the startup layout from `store`
    pub fn start(store: SceneStore, settings: AppSettings, roster: Roster, api_key: Option<String>) -> Self {
        let mut scene = SceneState::build(&roster, settings.environment);
        scene.load_startup_layout(&store);
        let chat = Conversations::new(RemoteAgent::new(&settings.agent, api_key), roster.stats);
        Self {
            scene,
            store,
            chat,
            roster,
            settings,
        }
    }

    /// Session over the configured data directory with the standard roster.
    ///
    /// Falls back to an in-memory store when no data directory can be found.
    pub fn open(settings: AppSettings) -> Self {
        let store = match settings.data_dir() {
            Some(dir) => {
                tracing::debug!("Scene data directory: {}", dir.display());
                SceneStore::open_dir(dir)
            }
            None => {
                tracing::warn!("No data directory available; scene changes will not persist");
                SceneStore::in_memory()
            }
        };
        Self::start(store, settings, Roster::office(), AppSettings::api_key_from_env())
    }

    // ── Scene persistence ─────────────────────────────────────

    /// Current live transforms plus stored embed URLs
    pub fn scene_document(&self) -> SceneDocument {
        self.scene.capture(self.store.embed_urls())
    }

    pub fn save_scene(&self) -> Result<(), StoreError> {
        self.scene.save(&self.store)
    }

    pub fn export_scene(&self, dir: &Path) -> Result<PathBuf, StoreError> {
        self.scene.export(&self.store, dir)
    }

    pub async fn export_scene_with_dialog(&self) -> Result<Option<PathBuf>, StoreError> {
        self.store.export_with_dialog(&self.scene_document()).await
    }

    /// Persist an imported document as the saved layout.
    ///
    /// The live scene is left alone; a [`reload`](Self::reload) shows it.
    /// A document that decoded but could not be stored is an error, and the
    /// previously saved layout stays in place.
    pub async fn import_scene(&self, path: &Path) -> Result<ImportOutcome, StoreError> {
        let store = &self.store;
        let mut saved = Ok(());
        let outcome = store
            .import_from_file(path, |document| saved = persist_import(store, &document))
            .await;
        saved.map(|()| outcome)
    }

    pub async fn import_scene_with_dialog(&self) -> Result<ImportOutcome, StoreError> {
        let store = &self.store;
        let mut saved = Ok(());
        let outcome = store
            .import_with_dialog(|document| saved = persist_import(store, &document))
            .await;
        saved.map(|()| outcome)
    }

    /// Forget the saved layout. Embed URLs are kept.
    pub fn reset_scene(&self) -> ReloadRequired {
        self.store.clear();
        ReloadRequired
    }

    /// Finish a [`reset_scene`](Self::reset_scene) by showing the default layout
    pub fn finish_reset(&mut self, _pending: ReloadRequired) -> LayoutSource {
        self.reload()
    }

    /// Rebuild the office and rerun the startup layout choice
    pub fn reload(&mut self) -> LayoutSource {
        self.scene = SceneState::build(&self.roster, self.settings.environment);
        self.scene.load_startup_layout(&self.store)
    }

    // ── Embedded panels ───────────────────────────────────────

    pub fn set_embed_url(&self, slot: EmbedSlot, url: &str) -> Result<(), StoreError> {
        self.store.set_embed_url(slot, url)
    }

    pub fn clear_embed_url(&self, slot: EmbedSlot) -> Result<(), StoreError> {
        self.store.clear_embed_url(slot)
    }

    /// URL of the panel shown beside a conversation with `agent`
    pub fn embed_panel_for(&self, agent: AgentId) -> Option<String> {
        EmbedSlot::for_agent(agent).and_then(|slot| self.store.embed_url(slot))
    }

    // ── Conversations ─────────────────────────────────────────

    pub async fn send_message(&mut self, agent: AgentId, text: &str) -> Option<String> {
        self.chat.send_message(agent, text).await
    }
}

fn persist_import(store: &SceneStore, document: &SceneDocument) -> Result<(), StoreError> {
    store.save(document)?;
    tracing::info!("Imported layout saved; reload to apply it");
    Ok(())
}
