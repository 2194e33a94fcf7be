//! Live trackable objects and the id → handle registry

use std::collections::HashMap;

use shared::{ObjectId, ObjectKind, Vec3};

/// The only view of a scene object the persistence layer ever uses.
///
/// Geometry and materials stay with whatever owns the object; only identity
/// and the three transform fields cross this boundary.
pub trait Transformable {
    /// Stable id, assigned once at construction
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn kind(&self) -> ObjectKind {
        ObjectKind::Box
    }
    fn position(&self) -> Vec3;
    fn rotation(&self) -> Vec3;
    fn scale(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn set_rotation(&mut self, rotation: Vec3);
    fn set_scale(&mut self, scale: Vec3);
}

/// Headless scene object: identity plus transform
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl SceneObject {
    /// Object at the origin with unit scale; name mirrors the id
    pub fn new(id: impl Into<ObjectId>, kind: ObjectKind) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Rotation about the vertical axis
    pub fn yaw(mut self, radians: f64) -> Self {
        self.rotation = Vec3::new(0.0, radians, 0.0);
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

impl Transformable for SceneObject {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Vec3 {
        self.rotation
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}

/// Registry of trackable objects keyed by id, in tracking order
#[derive(Default)]
pub struct TrackedObjects {
    objects: Vec<Box<dyn Transformable>>,
    index: HashMap<ObjectId, usize>,
}

impl TrackedObjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an object.
    ///
    /// Re-tracking an existing id replaces the old handle in place (last
    /// write wins), keeping its original position in the enumeration order.
    pub fn track(&mut self, object: impl Transformable + 'static) {
        self.track_boxed(Box::new(object));
    }

    pub fn track_boxed(&mut self, object: Box<dyn Transformable>) {
        let id = object.id().to_string();
        match self.index.get(&id) {
            Some(&slot) => {
                tracing::warn!("Object id '{id}' tracked twice; keeping the newer handle");
                self.objects[slot] = object;
            }
            None => {
                self.index.insert(id, self.objects.len());
                self.objects.push(object);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn Transformable> {
        let slot = *self.index.get(id)?;
        Some(self.objects[slot].as_ref() as &dyn Transformable)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn Transformable + 'static)> {
        let slot = *self.index.get(id)?;
        Some(self.objects[slot].as_mut())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Ids in tracking order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|o| o.id())
    }

    /// Handles in tracking order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Transformable> {
        self.objects.iter().map(|o| o.as_ref() as &dyn Transformable)
    }
}

impl std::fmt::Debug for TrackedObjects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
