use crate::{SceneDocument, SCENE_FORMAT_VERSION};

/// Errors when encoding or decoding a scene document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Not JSON, or JSON of the wrong shape
    #[error("malformed scene document: {0}")]
    Json(#[from] serde_json::Error),
    /// Written by a format this build does not understand
    #[error("unsupported scene document version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    /// NaN or infinity in a transform
    #[error("object '{id}' has a non-finite transform")]
    NonFinite { id: String },
}

impl SceneDocument {
    /// Parse and check a document.
    ///
    /// Only [`SCENE_FORMAT_VERSION`] is accepted; there are no migrations yet,
    /// so any other version is rejected instead of being guessed at.
    pub fn decode(json: &str) -> Result<Self, DocumentError> {
        let document: SceneDocument = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Compact JSON, as stored under the scene key
    pub fn encode(&self) -> Result<String, DocumentError> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }

    /// Two-space indented JSON, as written to exported files
    pub fn encode_pretty(&self) -> Result<String, DocumentError> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Version and transform sanity checks
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.version != SCENE_FORMAT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                found: self.version,
                expected: SCENE_FORMAT_VERSION,
            });
        }
        for record in &self.objects {
            if !(record.position.is_finite()
                && record.rotation.is_finite()
                && record.scale.is_finite())
            {
                return Err(DocumentError::NonFinite {
                    id: record.id.clone(),
                });
            }
        }
        Ok(())
    }
}
