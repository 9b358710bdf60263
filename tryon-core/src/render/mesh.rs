use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

use crate::scene::Shape;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(pos: Vec3, normal: Vec3) -> Self { Self { pos: pos.to_array(), normal: normal.to_array() } }
}

/// Indexed triangle mesh ready for upload.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_bytes(&self) -> &[u8] { bytemuck::cast_slice(&self.vertices) }
    pub fn index_bytes(&self) -> &[u8] { bytemuck::cast_slice(&self.indices) }
    pub fn triangle_count(&self) -> usize { self.indices.len() / 3 }

    /// Copy with positions and normals moved by `m`.
    pub fn transformed(&self, m: Mat4) -> MeshData {
        let normal_m = m.inverse().transpose();
        let vertices = self
            .vertices
            .iter()
            .map(|v| {
                let p = m.transform_point3(Vec3::from(v.pos));
                let n = normal_m.transform_vector3(Vec3::from(v.normal)).normalize_or_zero();
                Vertex::new(p, n)
            })
            .collect();
        MeshData { vertices, indices: self.indices.clone() }
    }
}

/// Tessellation density; stacks/slices are clamped to at least 3.
#[derive(Debug, Clone, Copy)]
pub struct Detail {
    pub stacks: u32,
    pub slices: u32,
}

impl Default for Detail {
    fn default() -> Self { Self { stacks: 12, slices: 16 } }
}

pub fn tessellate(shape: &Shape, detail: Detail) -> MeshData {
    let stacks = detail.stacks.max(3);
    let slices = detail.slices.max(3);
    match *shape {
        Shape::Sphere { radius } => capsule(radius, 0.0, stacks, slices),
        Shape::Capsule { radius, length } => capsule(radius, length, stacks, slices),
        Shape::Box { width, height, depth } => cuboid(Vec3::new(width, height, depth) * 0.5),
        Shape::Cylinder { radius_top, radius_bottom, height } => frustum(radius_top, radius_bottom, height, slices),
        Shape::Cone { radius, height } => frustum(0.0, radius, height, slices),
        Shape::Ring { inner_radius, outer_radius } => annulus(inner_radius, outer_radius, slices),
        Shape::Plane { width, height } => quad(width * 0.5, height * 0.5),
    }
}

// UV sphere split at the equator; the equator ring is emitted twice and the
// halves pushed apart by `length`, so a zero length gives a plain sphere.
fn capsule(radius: f32, length: f32, stacks: u32, slices: u32) -> MeshData {
    let stacks = stacks + stacks % 2;
    let half = stacks / 2;
    let mut mesh = MeshData::default();
    let mut rings = 0u32;
    for i in 0..=stacks {
        let theta = i as f32 / stacks as f32 * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        let shifts: &[f32] = if i == half && length > 0.0 {
            &[0.5, -0.5]
        } else if i <= half {
            &[0.5]
        } else {
            &[-0.5]
        };
        for &k in shifts {
            for j in 0..=slices {
                let phi = j as f32 / slices as f32 * TAU;
                let (sin_p, cos_p) = phi.sin_cos();
                let n = Vec3::new(sin_t * cos_p, cos_t, sin_t * sin_p);
                mesh.vertices.push(Vertex::new(n * radius + Vec3::Y * (length * k), n));
            }
            rings += 1;
        }
    }
    let stride = slices + 1;
    for i in 0..rings - 1 {
        for j in 0..slices {
            let a = i * stride + j;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            mesh.indices.extend_from_slice(&[a, b, c, b, d, c]);
        }
    }
    mesh
}

fn cuboid(h: Vec3) -> MeshData {
    let mut mesh = MeshData::default();
    let faces = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    for n in faces {
        let u = if n.y.abs() > 0.5 { Vec3::X } else { Vec3::Y };
        let v = n.cross(u);
        let base = mesh.vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (n + u * su + v * sv) * h;
            mesh.vertices.push(Vertex::new(p, n));
        }
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

fn frustum(r_top: f32, r_bottom: f32, height: f32, slices: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let hy = height * 0.5;
    let slope = (r_bottom - r_top) / height.max(f32::EPSILON);
    for j in 0..=slices {
        let phi = j as f32 / slices as f32 * TAU;
        let (s, c) = phi.sin_cos();
        let n = Vec3::new(c, slope, s).normalize_or_zero();
        mesh.vertices.push(Vertex::new(Vec3::new(c * r_top, hy, s * r_top), n));
        mesh.vertices.push(Vertex::new(Vec3::new(c * r_bottom, -hy, s * r_bottom), n));
    }
    for j in 0..slices {
        let (a, b, c, d) = (2 * j, 2 * j + 1, 2 * j + 2, 2 * j + 3);
        mesh.indices.extend_from_slice(&[a, c, b, c, d, b]);
    }
    for (r, y, n) in [(r_top, hy, Vec3::Y), (r_bottom, -hy, Vec3::NEG_Y)] {
        if r <= 0.0 { continue; }
        let center = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), n));
        for j in 0..=slices {
            let phi = j as f32 / slices as f32 * TAU;
            let (s, c) = phi.sin_cos();
            mesh.vertices.push(Vertex::new(Vec3::new(c * r, y, s * r), n));
        }
        for j in 0..slices {
            let (a, b) = (center + 1 + j, center + 2 + j);
            if n.y > 0.0 {
                mesh.indices.extend_from_slice(&[center, b, a]);
            } else {
                mesh.indices.extend_from_slice(&[center, a, b]);
            }
        }
    }
    mesh
}

fn annulus(inner: f32, outer: f32, slices: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=slices {
        let phi = j as f32 / slices as f32 * TAU;
        let (s, c) = phi.sin_cos();
        mesh.vertices.push(Vertex::new(Vec3::new(c * inner, s * inner, 0.0), Vec3::Z));
        mesh.vertices.push(Vertex::new(Vec3::new(c * outer, s * outer, 0.0), Vec3::Z));
    }
    for j in 0..slices {
        let (a, b, c, d) = (2 * j, 2 * j + 1, 2 * j + 2, 2 * j + 3);
        mesh.indices.extend_from_slice(&[a, b, c, c, b, d]);
    }
    mesh
}

fn quad(hx: f32, hy: f32) -> MeshData {
    let vertices = [(-hx, -hy), (hx, -hy), (hx, hy), (-hx, hy)]
        .into_iter()
        .map(|(x, y)| Vertex::new(Vec3::new(x, y, 0.0), Vec3::Z))
        .collect();
    MeshData { vertices, indices: vec![0, 1, 2, 0, 2, 3] }
}
