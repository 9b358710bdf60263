//! Fixed skeletal layout of the reference (1.75 m, regular) figure.
//!
//! Offsets are meters from the pelvis origin. Lateral (x) offsets are the
//! unscaled values; callers multiply them by the body-type width factor so
//! limbs and garments follow the torso.

use glam::Vec3;

/// Pelvis height above the ground for the reference figure.
pub const PELVIS_HEIGHT: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Head,
    HairCap,
    Neck,
    Collar,
    Chest,
    UpperArm,
    Forearm,
    Hand,
    Pelvis,
    Thigh,
    Shin,
    Foot,
}

impl Joint {
    /// Anchor offset; for paired joints this is the right-side (+X) position.
    pub const fn offset(self) -> Vec3 {
        match self {
            Joint::Head => Vec3::new(0.0, 0.9, 0.0),
            Joint::HairCap => Vec3::new(0.0, 0.96, -0.02),
            Joint::Neck => Vec3::new(0.0, 0.75, 0.0),
            Joint::Collar => Vec3::new(0.0, 0.68, 0.0),
            Joint::Chest => Vec3::new(0.0, 0.4, 0.0),
            Joint::UpperArm => Vec3::new(0.25, 0.55, 0.0),
            Joint::Forearm => Vec3::new(0.32, 0.25, 0.0),
            Joint::Hand => Vec3::new(0.32, 0.1, 0.0),
            Joint::Pelvis => Vec3::ZERO,
            Joint::Thigh => Vec3::new(0.08, -0.3, 0.0),
            Joint::Shin => Vec3::new(0.08, -0.65, 0.0),
            Joint::Foot => Vec3::new(0.08, -0.78, 0.05),
        }
    }

    pub const fn is_paired(self) -> bool {
        matches!(self, Joint::UpperArm | Joint::Forearm | Joint::Hand | Joint::Thigh | Joint::Shin | Joint::Foot)
    }
}

/// Resolves joint anchors for one body: lateral offsets scale with the
/// width factor, vertical offsets with the height factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skeleton {
    pub width: f32,
    pub height: f32,
}

impl Default for Skeleton {
    fn default() -> Self { Self { width: 1.0, height: 1.0 } }
}

impl Skeleton {
    /// Anchor position; `sign` is -1 for left, +1 for right (ignored by unpaired joints).
    pub fn anchor(&self, joint: Joint, sign: f32) -> Vec3 {
        let o = joint.offset();
        let x = if joint.is_paired() { o.x * sign } else { o.x };
        Vec3::new(x * self.width, o.y * self.height, o.z)
    }

    /// Where the root sits in world space (feet on the ground plane).
    pub fn root_translation(&self) -> Vec3 { Vec3::new(0.0, PELVIS_HEIGHT * self.height, 0.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_anchors_mirror() {
        let s = Skeleton { width: 1.1, height: 1.0 };
        let l = s.anchor(Joint::UpperArm, -1.0);
        let r = s.anchor(Joint::UpperArm, 1.0);
        assert!((l.x + r.x).abs() < 1e-6);
        assert!((r.x - 0.275).abs() < 1e-6);
        assert_eq!(s.anchor(Joint::Head, -1.0), s.anchor(Joint::Head, 1.0));
    }

    #[test]
    fn feet_touch_ground() {
        for h in [0.9, 1.0, 1.1] {
            let s = Skeleton { height: h, ..Default::default() };
            let foot_world = s.root_translation() + s.anchor(Joint::Foot, 1.0);
            assert!((foot_world.y - 0.02 * h).abs() < 1e-6);
        }
    }
}
