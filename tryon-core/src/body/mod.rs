//! Body parameterization: turns a [`BodyCustomization`] into the scale
//! factors and colors every mesh generator reads.

pub mod figure;

use glam::Vec3;

use crate::color::Rgb;
use crate::profile::schema::REFERENCE_HEIGHT_M;
use crate::profile::{BodyCustomization, BodyType};
use crate::rig::Skeleton;

pub use figure::build_figure;

/// Per-axis multiplier for torso and limb geometry.
pub fn derive_scale(body_type: BodyType) -> Vec3 {
    match body_type {
        BodyType::Slim => Vec3::new(0.9, 1.0, 0.9),
        BodyType::Regular => Vec3::ONE,
        BodyType::Athletic => Vec3::new(1.1, 1.0, 1.1),
    }
}

/// Vertical multiplier relative to the 1.75 m reference figure.
pub fn height_factor(height: f32) -> f32 { height / REFERENCE_HEIGHT_M }

// Apparel and waist sizes share one linear scale.
const FIT_TABLE: &[(&str, f32)] = &[
    ("XS", 0.85), ("S", 0.9), ("M", 1.0), ("L", 1.1), ("XL", 1.2), ("XXL", 1.3),
    ("28", 0.85), ("30", 0.9), ("32", 1.0), ("34", 1.1), ("36", 1.2), ("38", 1.3),
];

/// Fit multiplier for a size label. Missing or unknown sizes fit like "M".
pub fn fit_multiplier(size: Option<&str>) -> f32 {
    let Some(label) = size else { return 1.0 };
    let label = label.trim();
    FIT_TABLE
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(label))
        .map(|(_, v)| *v)
        .unwrap_or(1.0)
}

/// Derived, read-only view of one customization snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyParams {
    pub scale: Vec3,
    pub height: f32,
    pub skin: Rgb,
    pub hair: Rgb,
}

impl BodyParams {
    pub fn derive(c: &BodyCustomization) -> Self {
        Self {
            scale: derive_scale(c.body_type),
            height: height_factor(c.height),
            skin: c.skin_tone,
            hair: c.hair_color,
        }
    }

    pub fn skeleton(&self) -> Skeleton {
        Skeleton { width: self.scale.x, height: self.height }
    }

    /// Scale for a width-following solid: body-type on x/z, `base_y * height` on y.
    pub fn limb_scale(&self, base_y: f32) -> Vec3 {
        Vec3::new(self.scale.x, base_y * self.height, self.scale.z)
    }
}
