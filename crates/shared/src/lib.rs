//! Wire-level data model of the virtual office scene.
//!
//! The JSON produced here is the persisted layout format: field names and
//! spellings (`type`, `scaling`, camelCase settings) are part of the format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod document;

pub use document::DocumentError;

/// Stable identifier of a trackable object
pub type ObjectId = String;

/// Current scene document format version
pub const SCENE_FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SCENE_FORMAT_VERSION
}

/// 3-component vector (position in scene units, rotation in radians, scale multiplier)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// All components are finite (JSON cannot carry NaN or infinity)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component-wise comparison within `eps`
    pub fn approx_eq(&self, other: &Vec3, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// Descriptive object category. Never used to rebuild geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    #[default]
    Box,
    Sphere,
    Cylinder,
    Capsule,
    Plane,
    Character,
    /// Assistant avatar; spelled `"al"` on the wire
    #[serde(rename = "al")]
    Agent,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Box => "box",
            ObjectKind::Sphere => "sphere",
            ObjectKind::Cylinder => "cylinder",
            ObjectKind::Capsule => "capsule",
            ObjectKind::Plane => "plane",
            ObjectKind::Character => "character",
            ObjectKind::Agent => "al",
        }
    }
}

/// Persisted transform of one trackable object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRecord {
    /// Join key; assigned once when the object is constructed
    pub id: ObjectId,
    /// Display/debug label, not unique
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub position: Vec3,
    /// Euler angles in radians
    pub rotation: Vec3,
    #[serde(rename = "scaling")]
    pub scale: Vec3,
    /// Hex color, reserved for extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Open-ended extension data, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

impl TransformRecord {
    /// Record with identity transform; name mirrors the id
    pub fn new(id: impl Into<ObjectId>, kind: ObjectKind) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color: None,
            properties: None,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

/// Environment settings stored alongside the transforms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSettings {
    pub fog_enabled: bool,
    pub fog_start: f64,
    pub fog_end: f64,
    pub ambient_intensity: f64,
    /// Embed URL for the AL panel (mirrors the `al-figma-url` key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub al_figma_url: Option<String>,
    /// Embed URL for the AD panel (mirrors the `ad-figma-url` key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_figma_url: Option<String>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            fog_enabled: false,
            fog_start: 60.0,
            fog_end: 250.0,
            ambient_intensity: 0.4,
            al_figma_url: None,
            ad_figma_url: None,
        }
    }
}

/// Whole persisted unit: every transform record plus settings.
///
/// Built fresh on each save/export and replaced wholesale on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Format version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Records in capture order; matching is by id only
    pub objects: Vec<TransformRecord>,
    pub settings: SceneSettings,
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self {
            version: SCENE_FORMAT_VERSION,
            objects: Vec::new(),
            settings: SceneSettings::default(),
        }
    }
}

impl SceneDocument {
    pub fn new(objects: Vec<TransformRecord>, settings: SceneSettings) -> Self {
        Self {
            version: SCENE_FORMAT_VERSION,
            objects,
            settings,
        }
    }

    /// No transform records at all
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Look up a record by id. With duplicate ids the last one wins.
    pub fn find(&self, id: &str) -> Option<&TransformRecord> {
        self.objects.iter().rev().find(|r| r.id == id)
    }

    /// Ids in document order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|r| r.id.as_str())
    }

    /// Ids that occur more than once, each reported once, in order of first repeat
    pub fn duplicate_ids(&self) -> Vec<ObjectId> {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        let mut dups: Vec<ObjectId> = Vec::new();
        for record in &self.objects {
            if !seen.insert(record.id.as_str()) && !dups.contains(&record.id) {
                dups.push(record.id.clone());
            }
        }
        dups
    }
}
