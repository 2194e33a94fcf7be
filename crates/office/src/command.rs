//! JSON command protocol for programmatic control of an office session.

use serde::{Deserialize, Serialize};
use shared::{SceneDocument, Vec3};

use crate::state::scene::{record_of, EmbedSlot};
use crate::state::{OfficeSession, ReloadRequired};

/// A command an external driver can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// List every tracked object with its transform.
    Inspect,
    /// One object's transform.
    GetObject { id: String },
    /// Overwrite any of an object's transform fields.
    MoveObject {
        id: String,
        #[serde(default)]
        position: Option<Vec3>,
        #[serde(default)]
        rotation: Option<Vec3>,
        #[serde(default)]
        scale: Option<Vec3>,
    },
    /// Capture live transforms into the saved layout.
    Save,
    /// Apply the saved layout to the live objects.
    Load,
    /// Current scene as indented export JSON.
    ExportScene,
    /// Store a document as the saved layout (shown after `reload`).
    ImportScene { json: String },
    /// Forget the saved layout.
    Reset,
    /// Rebuild the office and choose the startup layout again.
    Reload,
    SetEmbedUrl { slot: EmbedSlot, url: String },
    ClearEmbedUrl { slot: EmbedSlot },
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn object_json(session: &OfficeSession, id: &str) -> Option<serde_json::Value> {
    let object = session.scene.get(id)?;
    serde_json::to_value(record_of(object)).ok()
}

/// Execute a single command on the session.
pub fn execute_command(session: &mut OfficeSession, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::Inspect => {
            let objects: Vec<serde_json::Value> = session
                .scene
                .objects
                .iter()
                .filter_map(|o| serde_json::to_value(record_of(o)).ok())
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "object_count": objects.len(),
                "layout_source": session.scene.layout_source(),
                "objects": objects,
            }))
        }

        AgentCommand::GetObject { id } => match object_json(session, &id) {
            Some(object) => CommandResponse::ok_with_data(object),
            None => CommandResponse::err(format!("Unknown object: {id}")),
        },

        AgentCommand::MoveObject {
            id,
            position,
            rotation,
            scale,
        } => match session.scene.set_transform(&id, position, rotation, scale) {
            Ok(()) => match object_json(session, &id) {
                Some(object) => CommandResponse::ok_with_data(object),
                None => CommandResponse::ok(),
            },
            Err(e) => CommandResponse::err(e.to_string()),
        },

        AgentCommand::Save => match session.save_scene() {
            Ok(()) => CommandResponse::ok_with_data(serde_json::json!({
                "saved": session.scene.objects.len(),
            })),
            Err(e) => CommandResponse::err(format!("Save failed: {e}")),
        },

        AgentCommand::Load => match session.store.load().filter(|doc| !doc.is_empty()) {
            Some(document) => {
                let report = session.scene.apply_saved(&document);
                CommandResponse::ok_with_data(serde_json::json!({
                    "found": true,
                    "applied": report.applied,
                    "skipped": report.skipped,
                }))
            }
            None => CommandResponse::ok_with_data(serde_json::json!({ "found": false })),
        },

        AgentCommand::ExportScene => match session.scene_document().encode_pretty() {
            Ok(json) => CommandResponse::ok_with_data(serde_json::json!({ "scene_json": json })),
            Err(e) => CommandResponse::err(format!("Export failed: {e}")),
        },

        AgentCommand::ImportScene { json } => {
            let document = match SceneDocument::decode(&json) {
                Ok(document) => document,
                Err(e) => return CommandResponse::err(format!("Import failed: {e}")),
            };
            match session.store.save(&document) {
                Ok(()) => CommandResponse::ok_with_data(serde_json::json!({
                    "objects": document.objects.len(),
                    "reload_required": true,
                })),
                Err(e) => CommandResponse::err(format!("Import failed: {e}")),
            }
        }

        AgentCommand::Reset => {
            let ReloadRequired = session.reset_scene();
            CommandResponse::ok_with_data(serde_json::json!({ "reload_required": true }))
        }

        AgentCommand::Reload => {
            let source = session.reload();
            CommandResponse::ok_with_data(serde_json::json!({ "layout_source": source }))
        }

        AgentCommand::SetEmbedUrl { slot, url } => match session.set_embed_url(slot, &url) {
            Ok(()) => CommandResponse::ok(),
            Err(e) => CommandResponse::err(format!("Failed to store {slot} embed URL: {e}")),
        },

        AgentCommand::ClearEmbedUrl { slot } => match session.clear_embed_url(slot) {
            Ok(()) => CommandResponse::ok(),
            Err(e) => CommandResponse::err(format!("Failed to clear {slot} embed URL: {e}")),
        },
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(session: &mut OfficeSession, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(session, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    session: &mut OfficeSession,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(session, cmd))
        .collect())
}
