use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::secondary::IdleMotion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Slim,
    #[default]
    Regular,
    Athletic,
}

impl BodyType {
    pub const ALL: [BodyType; 3] = [BodyType::Slim, BodyType::Regular, BodyType::Athletic];
}

pub const MIN_HEIGHT_M: f32 = 1.50;
pub const MAX_HEIGHT_M: f32 = 2.00;
pub const REFERENCE_HEIGHT_M: f32 = 1.75;

/// Avatar body settings. Every field is always present; edits replace one
/// field at a time through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyCustomization {
    pub body_type: BodyType,
    /// Meters, within [`MIN_HEIGHT_M`, `MAX_HEIGHT_M`].
    pub height: f32,
    pub skin_tone: Rgb,
    pub hair_color: Rgb,
}

impl Default for BodyCustomization {
    fn default() -> Self {
        Self {
            body_type: BodyType::Regular,
            height: REFERENCE_HEIGHT_M,
            skin_tone: Rgb::hex(0xF1C27D),
            hair_color: Rgb::hex(0x8B4513),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentKind {
    Shirt,
    Pants,
    Jacket,
    Dress,
    Shoes,
    /// Any type string the generator does not know; renders nothing.
    #[serde(other)]
    Unrecognized,
}

impl GarmentKind {
    pub const RECOGNIZED: [GarmentKind; 5] = [
        GarmentKind::Shirt,
        GarmentKind::Pants,
        GarmentKind::Jacket,
        GarmentKind::Dress,
        GarmentKind::Shoes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GarmentKind::Shirt => "shirt",
            GarmentKind::Pants => "pants",
            GarmentKind::Jacket => "jacket",
            GarmentKind::Dress => "dress",
            GarmentKind::Shoes => "shoes",
            GarmentKind::Unrecognized => "unrecognized",
        }
    }
}

/// The garment currently worn on the avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentSelection {
    pub id: String,
    pub name: String,
    pub color: Rgb,
    #[serde(rename = "type")]
    pub kind: GarmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl GarmentSelection {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: Rgb, kind: GarmentKind) -> Self {
        Self { id: id.into(), name: name.into(), color, kind, size: None }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// On-disk try-on session description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TryOnProfile {
    pub customization: BodyCustomization,
    pub garment: Option<GarmentSelection>,
    pub idle: IdleMotion,
}
