//! Primitive vocabulary handed to the renderer: solids with a local transform
//! and a material, tagged with the body part or garment piece they draw.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::profile::GarmentKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Sphere { radius: f32 },
    Box { width: f32, height: f32, depth: f32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    /// Cylinder of `length` capped with hemispheres; total height is `length + 2 * radius`.
    Capsule { radius: f32, length: f32 },
    /// Apex points along +Y.
    Cone { radius: f32, height: f32 },
    /// Flat annulus in the local XY plane.
    Ring { inner_radius: f32, outer_radius: f32 },
    /// Flat rectangle in the local XY plane.
    Plane { width: f32, height: f32 },
}

impl Shape {
    /// Half size of the shape's local bounding box.
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            Shape::Sphere { radius } => Vec3::splat(radius),
            Shape::Box { width, height, depth } => Vec3::new(width, height, depth) * 0.5,
            Shape::Cylinder { radius_top, radius_bottom, height } => {
                let r = radius_top.max(radius_bottom);
                Vec3::new(r, height * 0.5, r)
            }
            Shape::Capsule { radius, length } => Vec3::new(radius, length * 0.5 + radius, radius),
            Shape::Cone { radius, height } => Vec3::new(radius, height * 0.5, radius),
            Shape::Ring { outer_radius, .. } => Vec3::new(outer_radius, outer_radius, 0.0),
            Shape::Plane { width, height } => Vec3::new(width * 0.5, height * 0.5, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalTransform {
    pub translation: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self { Self { translation: Vec3::ZERO, rotation: Vec3::ZERO, scale: Vec3::ONE } }
}

impl LocalTransform {
    pub fn at(translation: Vec3) -> Self { Self { translation, ..Default::default() } }
    pub fn rotated(mut self, rotation: Vec3) -> Self { self.rotation = rotation; self }
    pub fn scaled(mut self, scale: Vec3) -> Self { self.scale = scale; self }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.translation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Rgb,
    pub opacity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metalness: Option<f32>,
}

impl Material {
    pub fn solid(color: Rgb) -> Self { Self { color, opacity: 1.0, roughness: None, metalness: None } }

    pub fn pbr(color: Rgb, roughness: f32, metalness: f32) -> Self {
        Self { roughness: Some(roughness), metalness: Some(metalness), ..Self::solid(color) }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self { self.opacity = opacity; self }
    pub fn is_translucent(&self) -> bool { self.opacity < 1.0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side { Left, Right }

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
    /// Lateral sign: the figure's left is -X.
    pub fn sign(self) -> f32 { match self { Side::Left => -1.0, Side::Right => 1.0 } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    // body
    Head, Hair, Eye, Nose, Mouth, Neck, Torso, UpperArm, Forearm, Hand, Hips, Thigh, Shin, Foot,
    // garments
    ShirtBody, Sleeve, Collar, Waistband, UpperLeg, LowerLeg, JacketBody, Lapel, Button,
    Bodice, Skirt, Strap, Shoe, Lace,
}

impl Part {
    /// Pieces that tilt with the head nod.
    pub fn is_head_feature(self) -> bool { matches!(self, Part::Head | Part::Hair | Part::Eye | Part::Nose | Part::Mouth) }

    /// Body surfaces drawn in the skin tone.
    pub fn is_skin(self) -> bool {
        matches!(
            self,
            Part::Head | Part::Nose | Part::Neck | Part::Torso | Part::UpperArm | Part::Forearm | Part::Hand | Part::Hips | Part::Thigh | Part::Shin
        )
    }

    /// Solids whose girth follows the body-type width and depth.
    pub fn follows_width(self) -> bool {
        matches!(self, Part::Torso | Part::Hips | Part::UpperArm | Part::Forearm | Part::Thigh | Part::Shin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "layer", content = "garment", rename_all = "snake_case")]
pub enum Layer {
    Body,
    Garment(GarmentKind),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub part: Part,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    pub layer: Layer,
    pub shape: Shape,
    pub transform: LocalTransform,
    pub material: Material,
}

impl Primitive {
    pub fn body(part: Part, shape: Shape, transform: LocalTransform, material: Material) -> Self {
        Self { part, side: None, layer: Layer::Body, shape, transform, material }
    }

    pub fn garment(kind: GarmentKind, part: Part, shape: Shape, transform: LocalTransform, material: Material) -> Self {
        Self { part, side: None, layer: Layer::Garment(kind), shape, transform, material }
    }

    pub fn on(mut self, side: Side) -> Self { self.side = Some(side); self }

    /// Bounds after applying `parent * local`.
    pub fn bounds(&self, parent: Mat4) -> Aabb {
        Aabb::of_box(parent * self.transform.matrix(), self.shape.half_extents())
    }
}

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb { min: Vec3::splat(f32::INFINITY), max: Vec3::splat(f32::NEG_INFINITY) };

    pub fn of_box(m: Mat4, half: Vec3) -> Self {
        let mut out = Aabb::EMPTY;
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { -half.x } else { half.x },
                if i & 2 == 0 { -half.y } else { half.y },
                if i & 4 == 0 { -half.z } else { half.z },
            );
            let p = m.transform_point3(corner);
            out.min = out.min.min(p);
            out.max = out.max.max(p);
        }
        out
    }

    pub fn union(self, other: Aabb) -> Aabb { Aabb { min: self.min.min(other.min), max: self.max.max(other.max) } }
    pub fn is_empty(&self) -> bool { self.min.x > self.max.x }
    pub fn size(&self) -> Vec3 { if self.is_empty() { Vec3::ZERO } else { self.max - self.min } }
    pub fn center(&self) -> Vec3 { (self.min + self.max) * 0.5 }
}

/// Everything the renderer needs for one avatar: the figure root plus the
/// body and garment primitives expressed relative to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarScene {
    pub root: LocalTransform,
    pub body: Vec<Primitive>,
    pub garment: Vec<Primitive>,
}

impl AvatarScene {
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.body.iter().chain(self.garment.iter())
    }

    pub fn len(&self) -> usize { self.body.len() + self.garment.len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn bounds(&self) -> Aabb {
        let root = self.root.matrix();
        self.primitives().fold(Aabb::EMPTY, |acc, p| acc.union(p.bounds(root)))
    }

    /// Same scene with the root rotated and the head tilted by an idle pose.
    /// Face pieces pitch rigidly about the head center.
    pub fn posed(&self, pose: crate::secondary::IdlePose) -> AvatarScene {
        let mut out = self.clone();
        out.root.rotation.y += pose.root_yaw;
        let pivot = out.body.iter().find(|p| p.part == Part::Head).map(|p| p.transform.translation);
        let nod = Quat::from_rotation_x(pose.head_pitch);
        for p in out.body.iter_mut().filter(|p| p.part.is_head_feature()) {
            if let Some(c) = pivot {
                p.transform.translation = c + nod * (p.transform.translation - c);
            }
            // XYZ euler: the outermost x turn composes additively.
            p.transform.rotation.x += pose.head_pitch;
        }
        out
    }
}
