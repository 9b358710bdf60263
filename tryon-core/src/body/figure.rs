//! Procedural base figure: a jointed humanoid of primitive solids.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use super::BodyParams;
use crate::color::{DARK_SLATE, LIP};
use crate::rig::Joint;
use crate::scene::{LocalTransform, Material, Part, Primitive, Shape, Side};

pub const TORSO_RADIUS: f32 = 0.2;
const ARM_TILT: f32 = PI / 12.0;

/// Build every body primitive for one customization snapshot. Positions are
/// relative to the pelvis origin; see [`crate::rig::Skeleton::root_translation`].
pub fn build_figure(body: &BodyParams) -> Vec<Primitive> {
    let sk = body.skeleton();
    let h = body.height;
    let skin = Material::solid(body.skin);
    let upright = Vec3::new(1.0, h, 1.0);
    let mut out = Vec::with_capacity(24);

    // head group
    let head = sk.anchor(Joint::Head, 1.0);
    out.push(Primitive::body(
        Part::Head,
        Shape::Sphere { radius: 0.12 },
        LocalTransform::at(head).scaled(upright),
        Material::pbr(body.skin, 0.6, 0.1),
    ));
    out.push(Primitive::body(
        Part::Hair,
        Shape::Sphere { radius: 0.13 },
        LocalTransform::at(sk.anchor(Joint::HairCap, 1.0)).scaled(upright),
        Material::pbr(body.hair, 0.8, 0.1),
    ));
    for side in Side::BOTH {
        out.push(
            Primitive::body(
                Part::Eye,
                Shape::Sphere { radius: 0.015 },
                LocalTransform::at(head + Vec3::new(0.04 * side.sign(), 0.02 * h, 0.11)).scaled(upright),
                Material::solid(DARK_SLATE),
            )
            .on(side),
        );
    }
    out.push(Primitive::body(
        Part::Nose,
        Shape::Cone { radius: 0.008, height: 0.025 },
        LocalTransform::at(head + Vec3::new(0.0, -0.01 * h, 0.12)).scaled(upright),
        skin,
    ));
    out.push(Primitive::body(
        Part::Mouth,
        Shape::Cylinder { radius_top: 0.008, radius_bottom: 0.008, height: 0.025 },
        // After the quarter turn local -z points up, so stretch z.
        LocalTransform::at(head + Vec3::new(0.0, -0.04 * h, 0.11))
            .rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0))
            .scaled(Vec3::new(1.0, 1.0, h)),
        Material::solid(LIP),
    ));
    out.push(Primitive::body(
        Part::Neck,
        Shape::Cylinder { radius_top: 0.06, radius_bottom: 0.08, height: 0.15 },
        LocalTransform::at(sk.anchor(Joint::Neck, 1.0)).scaled(upright),
        skin,
    ));

    // trunk
    out.push(Primitive::body(
        Part::Torso,
        Shape::Capsule { radius: TORSO_RADIUS, length: 0.6 },
        LocalTransform::at(sk.anchor(Joint::Chest, 1.0)).scaled(body.limb_scale(1.0)),
        skin,
    ));
    out.push(Primitive::body(
        Part::Hips,
        Shape::Sphere { radius: 0.15 },
        LocalTransform::at(sk.anchor(Joint::Pelvis, 1.0)).scaled(body.limb_scale(1.0)),
        skin,
    ));

    for side in Side::BOTH {
        let s = side.sign();
        out.push(
            Primitive::body(
                Part::UpperArm,
                Shape::Capsule { radius: 0.05, length: 0.25 },
                LocalTransform::at(sk.anchor(Joint::UpperArm, s))
                    .rotated(Vec3::new(0.0, 0.0, -s * ARM_TILT))
                    .scaled(body.limb_scale(1.0)),
                skin,
            )
            .on(side),
        );
        out.push(
            Primitive::body(
                Part::Forearm,
                Shape::Capsule { radius: 0.045, length: 0.22 },
                LocalTransform::at(sk.anchor(Joint::Forearm, s)).scaled(body.limb_scale(1.0)),
                skin,
            )
            .on(side),
        );
        out.push(
            Primitive::body(
                Part::Hand,
                Shape::Sphere { radius: 0.05 },
                LocalTransform::at(sk.anchor(Joint::Hand, s)).scaled(upright),
                skin,
            )
            .on(side),
        );
        out.push(
            Primitive::body(
                Part::Thigh,
                Shape::Capsule { radius: 0.06, length: 0.35 },
                LocalTransform::at(sk.anchor(Joint::Thigh, s)).scaled(body.limb_scale(1.0)),
                skin,
            )
            .on(side),
        );
        out.push(
            Primitive::body(
                Part::Shin,
                Shape::Capsule { radius: 0.055, length: 0.3 },
                LocalTransform::at(sk.anchor(Joint::Shin, s)).scaled(body.limb_scale(1.0)),
                skin,
            )
            .on(side),
        );
        out.push(
            Primitive::body(
                Part::Foot,
                Shape::Box { width: 0.08, height: 0.04, depth: 0.15 },
                LocalTransform::at(sk.anchor(Joint::Foot, s)).scaled(upright),
                Material::solid(DARK_SLATE),
            )
            .on(side),
        );
    }

    out
}
