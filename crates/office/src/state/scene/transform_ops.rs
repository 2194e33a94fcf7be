//! Transform edits on live objects

use shared::Vec3;

use super::SceneState;

/// Why a transform edit was refused
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoveError {
    #[error("no object with id '{0}'")]
    UnknownObject(String),
    #[error("{field} of '{id}' must be finite")]
    NonFinite { id: String, field: &'static str },
}

impl SceneState {
    /// Overwrite the given transform fields of one object.
    ///
    /// Nothing changes unless every given field is finite.
    pub fn set_transform(
        &mut self,
        id: &str,
        position: Option<Vec3>,
        rotation: Option<Vec3>,
        scale: Option<Vec3>,
    ) -> Result<(), MoveError> {
        for (field, value) in [("position", position), ("rotation", rotation), ("scale", scale)] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(MoveError::NonFinite {
                    id: id.to_string(),
                    field,
                });
            }
        }

        let object = self
            .objects
            .get_mut(id)
            .ok_or_else(|| MoveError::UnknownObject(id.to_string()))?;
        if let Some(position) = position {
            object.set_position(position);
        }
        if let Some(rotation) = rotation {
            object.set_rotation(rotation);
        }
        if let Some(scale) = scale {
            object.set_scale(scale);
        }
        self.version += 1;
        Ok(())
    }

    /// Move an object by a delta
    pub fn apply_translate_delta(&mut self, id: &str, dx: f64, dy: f64, dz: f64) -> Result<(), MoveError> {
        let current = self
            .objects
            .get(id)
            .ok_or_else(|| MoveError::UnknownObject(id.to_string()))?
            .position();
        let moved = Vec3::new(current.x + dx, current.y + dy, current.z + dz);
        self.set_transform(id, Some(moved), None, None)
    }
}
