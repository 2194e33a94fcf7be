//! Scene document storage: the saved layout key plus file export/import

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use shared::SceneDocument;

use super::storage::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Key of the saved scene document
pub const SCENE_KEY: &str = "virtual-office-scene-data";

/// Suggested name for exported files
pub const EXPORT_FILE_NAME: &str = "virtual-office-scene.json";

/// How an import attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Callback received the decoded document
    Delivered,
    /// File dialog dismissed
    Cancelled,
    /// Another import on this store has not finished
    Busy,
    /// Unreadable file or invalid document (already logged)
    Failed,
}

/// Reads and writes the one scene document a store holds
pub struct SceneStore {
    backend: Arc<dyn KeyValueStore>,
    importing: AtomicBool,
}

impl SceneStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            importing: AtomicBool::new(false),
        }
    }

    /// Store backed by files under `dir`
    pub fn open_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStore::new(dir)))
    }

    /// Non-persistent store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    // ── Saved layout ──────────────────────────────────────────

    /// Replace the saved document.
    ///
    /// On any failure the previously saved value stays as it was.
    pub fn save(&self, document: &SceneDocument) -> Result<(), StoreError> {
        let result = document
            .encode()
            .map_err(StoreError::from)
            .and_then(|json| self.backend.set(SCENE_KEY, &json));
        match &result {
            Ok(()) => tracing::info!("Saved scene with {} objects", document.objects.len()),
            Err(e) => tracing::error!("Failed to save scene: {e}"),
        }
        result
    }

    /// The saved document, if there is a valid one
    pub fn load(&self) -> Option<SceneDocument> {
        let json = match self.backend.get(SCENE_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!("Failed to read saved scene: {e}");
                return None;
            }
        };
        match SceneDocument::decode(&json) {
            Ok(document) => {
                tracing::info!("Loaded saved scene with {} objects", document.objects.len());
                Some(document)
            }
            Err(e) => {
                tracing::warn!("Ignoring saved scene: {e}");
                None
            }
        }
    }

    /// Whether a startup would find a usable saved document
    pub fn has_saved(&self) -> bool {
        self.load().is_some()
    }

    /// Forget the saved document
    pub fn clear(&self) {
        match self.backend.remove(SCENE_KEY) {
            Ok(()) => tracing::info!("Cleared saved scene"),
            Err(e) => tracing::error!("Failed to clear saved scene: {e}"),
        }
    }

    // ── Export ────────────────────────────────────────────────

    /// Write the document as indented JSON to `dir/virtual-office-scene.json`
    pub fn export_to_file(&self, document: &SceneDocument, dir: &Path) -> Result<PathBuf, StoreError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(EXPORT_FILE_NAME);
        self.export_to_path(document, &path)?;
        Ok(path)
    }

    pub fn export_to_path(&self, document: &SceneDocument, path: &Path) -> Result<(), StoreError> {
        let json = document.encode_pretty()?;
        match std::fs::write(path, json) {
            Ok(()) => {
                tracing::info!("Exported scene to {}", path.display());
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to write {}: {e}", path.display());
                Err(e.into())
            }
        }
    }

    /// Ask where to export; `Ok(None)` when the dialog was dismissed
    pub async fn export_with_dialog(&self, document: &SceneDocument) -> Result<Option<PathBuf>, StoreError> {
        let Some(file) = rfd::AsyncFileDialog::new()
            .set_title("Export scene")
            .add_filter("JSON", &["json"])
            .set_file_name(EXPORT_FILE_NAME)
            .save_file()
            .await
        else {
            return Ok(None);
        };
        let path = file.path().to_path_buf();
        self.export_to_path(document, &path)?;
        Ok(Some(path))
    }

    // ── Import ────────────────────────────────────────────────

    /// Read and decode `path`, handing the document to `on_loaded` exactly once.
    ///
    /// The callback is never called when the file cannot be read or decoded.
    pub async fn import_from_file<F>(&self, path: &Path, on_loaded: F) -> ImportOutcome
    where
        F: FnOnce(SceneDocument),
    {
        let Some(_guard) = self.begin_import() else {
            tracing::warn!("Import of {} rejected: another import is in progress", path.display());
            return ImportOutcome::Busy;
        };
        Self::read_document(path, on_loaded).await
    }

    /// Pick a `.json` file with a native dialog, then import it
    pub async fn import_with_dialog<F>(&self, on_loaded: F) -> ImportOutcome
    where
        F: FnOnce(SceneDocument),
    {
        let Some(_guard) = self.begin_import() else {
            tracing::warn!("Import rejected: another import is in progress");
            return ImportOutcome::Busy;
        };
        let Some(file) = rfd::AsyncFileDialog::new()
            .set_title("Import scene")
            .add_filter("JSON", &["json"])
            .pick_file()
            .await
        else {
            return ImportOutcome::Cancelled;
        };
        Self::read_document(file.path(), on_loaded).await
    }

    pub fn is_importing(&self) -> bool {
        self.importing.load(Ordering::SeqCst)
    }

    fn begin_import(&self) -> Option<ImportGuard<'_>> {
        self.importing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| ImportGuard { flag: &self.importing })
    }

    async fn read_document<F>(path: &Path, on_loaded: F) -> ImportOutcome
    where
        F: FnOnce(SceneDocument),
    {
        let json = match tokio::fs::read_to_string(path).await {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to read {}: {e}", path.display());
                return ImportOutcome::Failed;
            }
        };
        match SceneDocument::decode(&json) {
            Ok(document) => {
                tracing::info!(
                    "Imported scene with {} objects from {}",
                    document.objects.len(),
                    path.display()
                );
                on_loaded(document);
                ImportOutcome::Delivered
            }
            Err(e) => {
                tracing::error!("Failed to import {}: {e}", path.display());
                ImportOutcome::Failed
            }
        }
    }
}

impl std::fmt::Debug for SceneStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneStore")
            .field("importing", &self.is_importing())
            .finish_non_exhaustive()
    }
}

/// Clears the in-progress flag when the import ends, however it ends
struct ImportGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for ImportGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
