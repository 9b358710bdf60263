//! Garment overlay geometry. One selection yields the solids for exactly one
//! garment type, anchored on the same skeleton as the base figure.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use crate::body::{fit_multiplier, BodyParams};
use crate::color::{Rgb, DARK_SLATE};
use crate::profile::{GarmentKind, GarmentSelection};
use crate::rig::{Joint, Skeleton};
use crate::scene::{LocalTransform, Material, Part, Primitive, Shape, Side};

const SLEEVE_TILT: f32 = PI / 12.0;
pub const GARMENT_OPACITY: f32 = 0.95;
/// Jacket layers over the base figure and stays see-through.
pub const JACKET_OPACITY: f32 = 0.9;
pub const JACKET_RADIUS: f32 = 0.25;
pub const JACKET_BUTTONS: usize = 3;

/// Cloth material for a garment type: jackets are glossier and more translucent.
pub fn cloth(kind: GarmentKind, color: Rgb) -> Material {
    match kind {
        GarmentKind::Jacket => Material::pbr(color, 0.7, 0.1).with_opacity(JACKET_OPACITY),
        _ => Material::pbr(color, 0.9, 0.05).with_opacity(GARMENT_OPACITY),
    }
}

/// Overlay primitives for `selection`, or nothing when no garment is worn or
/// the type is not one the generator knows.
pub fn build_garment(selection: Option<&GarmentSelection>, body: &BodyParams) -> Vec<Primitive> {
    let Some(sel) = selection else { return Vec::new() };
    let fit = Fit { s: fit_multiplier(sel.size.as_deref()), b: body.scale, h: body.height, sk: body.skeleton() };
    let mat = cloth(sel.kind, sel.color);
    match sel.kind {
        GarmentKind::Shirt => shirt(&fit, mat),
        GarmentKind::Pants => pants(&fit, mat),
        GarmentKind::Jacket => jacket(&fit, mat),
        GarmentKind::Dress => dress(&fit, mat),
        GarmentKind::Shoes => shoes(&fit, mat),
        GarmentKind::Unrecognized => {
            log::debug!("garment '{}' has an unrecognized type, nothing to draw", sel.id);
            Vec::new()
        }
    }
}

struct Fit {
    /// Size multiplier.
    s: f32,
    /// Body-type scale.
    b: Vec3,
    /// Height factor.
    h: f32,
    sk: Skeleton,
}

fn shirt(f: &Fit, mat: Material) -> Vec<Primitive> {
    let k = GarmentKind::Shirt;
    let mut out = vec![Primitive::garment(
        k,
        Part::ShirtBody,
        Shape::Capsule { radius: 0.22, length: 0.62 },
        LocalTransform::at(f.sk.anchor(Joint::Chest, 1.0))
            .scaled(Vec3::new(f.b.x * 1.05 * f.s, 1.02 * f.s * f.h, f.b.z * 1.05)),
        mat,
    )];
    for side in Side::BOTH {
        let s = side.sign();
        out.push(
            Primitive::garment(
                k,
                Part::Sleeve,
                Shape::Capsule { radius: 0.055, length: 0.26 },
                LocalTransform::at(f.sk.anchor(Joint::UpperArm, s))
                    .rotated(Vec3::new(0.0, 0.0, -s * SLEEVE_TILT))
                    .scaled(Vec3::new(1.1 * f.b.x * f.s, 1.05 * f.h, 1.1 * f.b.z * f.s)),
                mat,
            )
            .on(side),
        );
    }
    out.push(Primitive::garment(
        k,
        Part::Collar,
        Shape::Ring { inner_radius: 0.12, outer_radius: 0.15 },
        LocalTransform::at(f.sk.anchor(Joint::Collar, 1.0))
            .rotated(Vec3::new(-FRAC_PI_2, 0.0, 0.0))
            .scaled(Vec3::new(f.s, f.s, 1.0)),
        mat,
    ));
    out
}

fn pants(f: &Fit, mat: Material) -> Vec<Primitive> {
    let k = GarmentKind::Pants;
    let mut out = vec![Primitive::garment(
        k,
        Part::Waistband,
        Shape::Cylinder { radius_top: 0.16, radius_bottom: 0.16, height: 0.1 },
        LocalTransform::at(f.sk.anchor(Joint::Pelvis, 1.0))
            .scaled(Vec3::new(f.b.x * 1.05 * f.s, f.h, f.b.z * 1.05 * f.s)),
        mat,
    )];
    for side in Side::BOTH {
        let s = side.sign();
        // Both segments share the body's leg line (0.08 b.x), pushed out by the
        // fit multiplier, so the lateral offset spans 0.068..0.104 over the size table.
        let upper = f.sk.anchor(Joint::Thigh, s) * Vec3::new(f.s, 1.0, 1.0);
        let lower = f.sk.anchor(Joint::Shin, s) * Vec3::new(f.s, 1.0, 1.0);
        out.push(
            Primitive::garment(
                k,
                Part::UpperLeg,
                Shape::Capsule { radius: 0.065, length: 0.36 },
                LocalTransform::at(upper).scaled(Vec3::new(1.1 * f.b.x * f.s, 1.02 * f.h, 1.1 * f.b.z * f.s)),
                mat,
            )
            .on(side),
        );
        out.push(
            Primitive::garment(
                k,
                Part::LowerLeg,
                Shape::Capsule { radius: 0.06, length: 0.31 },
                LocalTransform::at(lower).scaled(Vec3::new(1.05 * f.b.x * f.s, 1.02 * f.h, 1.05 * f.b.z * f.s)),
                mat,
            )
            .on(side),
        );
    }
    out
}

fn jacket(f: &Fit, mat: Material) -> Vec<Primitive> {
    let k = GarmentKind::Jacket;
    let chest = f.sk.anchor(Joint::Chest, 1.0);
    let front_z = JACKET_RADIUS * 1.15 * f.b.z;
    let mut out = vec![Primitive::garment(
        k,
        Part::JacketBody,
        Shape::Capsule { radius: JACKET_RADIUS, length: 0.65 },
        LocalTransform::at(chest).scaled(Vec3::new(f.b.x * 1.15 * f.s, 1.05 * f.s * f.h, f.b.z * 1.15)),
        mat,
    )];
    for side in Side::BOTH {
        let s = side.sign();
        let anchor = f.sk.anchor(Joint::UpperArm, s) * Vec3::new(0.26 / 0.25, 1.0, 1.0);
        out.push(
            Primitive::garment(
                k,
                Part::Sleeve,
                Shape::Capsule { radius: 0.06, length: 0.28 },
                LocalTransform::at(anchor)
                    .rotated(Vec3::new(0.0, 0.0, -s * SLEEVE_TILT))
                    .scaled(Vec3::new(1.2 * f.b.x * f.s, 1.1 * f.h, 1.2 * f.b.z * f.s)),
                mat,
            )
            .on(side),
        );
    }
    out.push(Primitive::garment(
        k,
        Part::Lapel,
        Shape::Box { width: 0.3, height: 0.05, depth: 0.15 },
        LocalTransform::at(Vec3::new(0.0, 0.72 * f.h, 0.0))
            .rotated(Vec3::new(PI / 8.0, 0.0, 0.0))
            .scaled(Vec3::new(f.b.x * f.s, f.h, f.b.z)),
        mat,
    ));
    let button = Material::pbr(DARK_SLATE, 0.2, 0.8);
    for i in 0..JACKET_BUTTONS {
        let y = (0.6 - i as f32 * 0.15) * f.h;
        out.push(Primitive::garment(
            k,
            Part::Button,
            Shape::Cylinder { radius_top: 0.015, radius_bottom: 0.015, height: 0.01 },
            LocalTransform::at(Vec3::new(0.0, y, chest.z + front_z)).rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0)),
            button,
        ));
    }
    out
}

fn dress(f: &Fit, mat: Material) -> Vec<Primitive> {
    let k = GarmentKind::Dress;
    let mut out = vec![
        Primitive::garment(
            k,
            Part::Bodice,
            Shape::Capsule { radius: 0.22, length: 0.4 },
            LocalTransform::at(f.sk.anchor(Joint::Chest, 1.0))
                .scaled(Vec3::new(f.b.x * 1.05 * f.s, 1.02 * f.h, f.b.z * 1.05 * f.s)),
            mat,
        ),
        Primitive::garment(
            k,
            Part::Skirt,
            Shape::Cone { radius: 0.35, height: 0.6 },
            LocalTransform::at(Vec3::new(0.0, -0.1 * f.h, 0.0)).scaled(Vec3::new(f.b.x * f.s, f.h, f.b.z * f.s)),
            mat,
        ),
    ];
    for side in Side::BOTH {
        out.push(
            Primitive::garment(
                k,
                Part::Strap,
                Shape::Cylinder { radius_top: 0.015, radius_bottom: 0.015, height: 0.3 },
                LocalTransform::at(Vec3::new(0.1 * side.sign() * f.b.x * f.s, 0.65 * f.h, 0.0))
                    .scaled(Vec3::new(1.0, f.h, 1.0)),
                mat,
            )
            .on(side),
        );
    }
    out
}

fn shoes(f: &Fit, mat: Material) -> Vec<Primitive> {
    let k = GarmentKind::Shoes;
    let mut out = Vec::with_capacity(4);
    for side in Side::BOTH {
        let foot = f.sk.anchor(Joint::Foot, side.sign());
        out.push(
            Primitive::garment(
                k,
                Part::Shoe,
                Shape::Box { width: 0.09, height: 0.05, depth: 0.16 },
                LocalTransform::at(foot).scaled(Vec3::new(1.1 * f.s, 1.1 * f.h, 1.1 * f.s)),
                mat,
            )
            .on(side),
        );
        out.push(
            Primitive::garment(
                k,
                Part::Lace,
                Shape::Box { width: 0.06, height: 0.01, depth: 0.08 },
                LocalTransform::at(foot + Vec3::new(0.0, 0.02 * f.h, 0.03)).scaled(Vec3::new(f.s, f.h, f.s)),
                Material::solid(DARK_SLATE),
            )
            .on(side),
        );
    }
    out
}
