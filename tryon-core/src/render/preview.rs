//! Front orthographic software preview.
//!
//! Primitives are tessellated, moved to world space and painted back to front
//! by their center depth. Each triangle gets its material color banded by a
//! two-step toon ramp and is blended over what is already in the buffer.

use glam::{Vec2, Vec3};

use crate::color::Rgb;
use crate::scene::{Aabb, AvatarScene, Shape};

use super::mesh::{tessellate, Detail, MeshData};

#[derive(Debug, Clone, Copy)]
pub struct PreviewParams {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    /// Fraction of the frame left empty around the figure.
    pub margin: f32,
    /// `dot(n, light)` below this is drawn in the shadow band.
    pub shadow_threshold: f32,
    pub shadow_strength: f32,
    pub light_dir: Vec3,
    pub detail: Detail,
}

impl Default for PreviewParams {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            background: Rgb::hex(0xf3f4f6),
            margin: 0.08,
            shadow_threshold: 0.25,
            shadow_strength: 0.7,
            light_dir: Vec3::new(0.4, 0.6, 1.0),
            detail: Detail::default(),
        }
    }
}

impl PreviewParams {
    /// Size of the RGBA8 buffer, computed in `usize` so large frames cannot wrap.
    pub fn byte_len(&self) -> usize { self.width as usize * self.height as usize * 4 }

    fn offset(&self, x: u32, y: u32) -> usize { (y as usize * self.width as usize + x as usize) * 4 }
}

struct Ortho {
    center: Vec2,
    scale: f32,
    half_px: Vec2,
}

impl Ortho {
    fn fit(bounds: Aabb, p: &PreviewParams) -> Self {
        let half_px = Vec2::new(p.width as f32, p.height as f32) * 0.5;
        if bounds.is_empty() {
            return Self { center: Vec2::ZERO, scale: 1.0, half_px };
        }
        let size = bounds.size();
        let usable = (1.0 - 2.0 * p.margin).clamp(0.1, 1.0);
        let sx = p.width as f32 * usable / size.x.max(1e-4);
        let sy = p.height as f32 * usable / size.y.max(1e-4);
        let c = bounds.center();
        Self { center: Vec2::new(c.x, c.y), scale: sx.min(sy), half_px }
    }

    // World xy to pixel coordinates, y down.
    fn project(&self, p: Vec3) -> Vec2 {
        let d = (Vec2::new(p.x, p.y) - self.center) * self.scale;
        Vec2::new(self.half_px.x + d.x, self.half_px.y - d.y)
    }
}

/// Render `scene` to a tightly packed RGBA8 buffer of `width * height * 4` bytes.
pub fn render_preview(scene: &AvatarScene, p: &PreviewParams) -> Vec<u8> {
    let mut pixels = p.background.to_rgba8(1.0).repeat(p.byte_len() / 4);
    let root = scene.root.matrix();
    let cam = Ortho::fit(scene.bounds(), p);
    let light = p.light_dir.normalize_or_zero();

    let mut order: Vec<(f32, &crate::scene::Primitive)> = scene
        .primitives()
        .map(|prim| (prim.bounds(root).center().z, prim))
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (_, prim) in order {
        let world = root * prim.transform.matrix();
        let mesh = tessellate(&prim.shape, p.detail).transformed(world);
        let two_sided = matches!(prim.shape, Shape::Ring { .. } | Shape::Plane { .. });
        let base = Vec3::from(prim.material.color.to_unit_f32());
        paint_mesh(&mut pixels, p, &cam, &mesh, |n| {
            let n = if two_sided && n.z < 0.0 { -n } else { n };
            if !two_sided && n.z < 0.0 {
                return None;
            }
            let lit = n.dot(light) >= p.shadow_threshold;
            let shade = if lit { 1.0 } else { p.shadow_strength };
            Some((base * shade, prim.material.opacity.clamp(0.0, 1.0)))
        });
    }
    pixels
}

fn paint_mesh(
    pixels: &mut [u8],
    p: &PreviewParams,
    cam: &Ortho,
    mesh: &MeshData,
    shade: impl Fn(Vec3) -> Option<(Vec3, f32)>,
) {
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(mesh.vertices[i as usize].pos));
        let face_n = (b - a).cross(c - a).normalize_or_zero();
        if face_n == Vec3::ZERO {
            continue;
        }
        let Some((color, alpha)) = shade(face_n) else { continue };
        fill_triangle(pixels, p, [cam.project(a), cam.project(b), cam.project(c)], color, alpha);
    }
}

fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 { (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x) }

fn fill_triangle(pixels: &mut [u8], p: &PreviewParams, v: [Vec2; 3], color: Vec3, alpha: f32) {
    let area = edge(v[0], v[1], v[2]);
    if area.abs() < 1e-8 {
        return;
    }
    let min = v[0].min(v[1]).min(v[2]).floor().max(Vec2::ZERO);
    let max = v[0].max(v[1]).max(v[2]).ceil().min(Vec2::new(p.width as f32 - 1.0, p.height as f32 - 1.0));
    if min.x > max.x || min.y > max.y {
        return;
    }
    let src = color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
    for y in min.y as u32..=max.y as u32 {
        for x in min.x as u32..=max.x as u32 {
            let s = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let w0 = edge(v[1], v[2], s) / area;
            let w1 = edge(v[2], v[0], s) / area;
            let w2 = edge(v[0], v[1], s) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }
            let i = p.offset(x, y);
            for (k, channel) in pixels[i..i + 3].iter_mut().enumerate() {
                let dst = *channel as f32;
                *channel = (src[k] * alpha + dst * (1.0 - alpha)).round() as u8;
            }
            pixels[i + 3] = 255;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Controller;
    use crate::profile::{GarmentKind, GarmentSelection};
    use crate::scene::{LocalTransform, Material, Part, Primitive};

    fn pixel(buf: &[u8], w: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * w + x) * 4) as usize;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    fn small() -> PreviewParams {
        PreviewParams { width: 64, height: 96, ..Default::default() }
    }

    #[test]
    fn buffer_has_expected_size_and_background_corners() {
        let c = Controller::default();
        let p = small();
        let buf = render_preview(c.scene(), &p);
        assert_eq!(buf.len(), (64 * 96 * 4) as usize);
        assert_eq!(pixel(&buf, 64, 0, 0), p.background.to_rgba8(1.0));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn buffer_math_does_not_wrap_for_large_frames() {
        let p = PreviewParams { width: 70_000, height: 70_000, ..Default::default() };
        assert_eq!(p.byte_len(), 19_600_000_000);
        assert_eq!(p.offset(69_999, 69_999), 19_599_999_996);
    }

    #[test]
    fn front_facing_plane_fills_center() {
        let scene = AvatarScene {
            root: LocalTransform::default(),
            body: vec![Primitive::body(
                Part::Torso,
                Shape::Plane { width: 1.0, height: 1.0 },
                LocalTransform::default(),
                Material::solid(Rgb::hex(0xff0000)),
            )],
            garment: Vec::new(),
        };
        let p = PreviewParams { light_dir: Vec3::Z, ..small() };
        let buf = render_preview(&scene, &p);
        assert_eq!(pixel(&buf, 64, 32, 48), [255, 0, 0, 255]);
    }

    #[test]
    fn translucent_garment_blends_with_body() {
        let mut c = Controller::default();
        let bare = render_preview(c.scene(), &small());
        c.select_garment(Some(GarmentSelection::new("1", "Shirt", Rgb::hex(0x0000ff), GarmentKind::Shirt)));
        let dressed = render_preview(c.scene(), &small());
        assert_ne!(bare, dressed);
        let blue_dominant = dressed.chunks_exact(4).any(|px| px[2] > 200 && px[0] < 60 && px[0] > 0);
        assert!(blue_dominant);
    }
}
