//! Scene export: a JSON draw list for external renderers and a Wavefront OBJ
//! (plus MTL) of the tessellated, world-space figure.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::Result;
use crate::render::mesh::{tessellate, Detail};
use crate::scene::{AvatarScene, Layer, LocalTransform, Material, Part, Shape, Side};

#[derive(Debug, Clone, Serialize)]
pub struct DrawItem {
    pub part: Part,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    pub layer: Layer,
    pub shape: Shape,
    /// Column-major `root * local`.
    pub world: [f32; 16],
    pub material: Material,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrawList {
    pub version: &'static str,
    pub root: LocalTransform,
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn from_scene(scene: &AvatarScene) -> Self {
        let root = scene.root.matrix();
        let items = scene
            .primitives()
            .map(|p| DrawItem {
                part: p.part,
                side: p.side,
                layer: p.layer,
                shape: p.shape,
                world: (root * p.transform.matrix()).to_cols_array(),
                material: p.material,
            })
            .collect();
        Self { version: crate::VERSION, root: scene.root, items }
    }

    pub fn to_json(&self) -> Result<String> { Ok(serde_json::to_string_pretty(self)?) }
}

fn object_name(index: usize, part: Part, side: Option<Side>) -> String {
    match side {
        Some(s) => format!("{:?}_{:?}_{}", part, s, index),
        None => format!("{:?}_{}", part, index),
    }
}

/// Wavefront OBJ of every primitive, one object and material per primitive.
/// `mtllib` names the companion file written by [`to_mtl`].
pub fn to_obj(scene: &AvatarScene, detail: Detail, mtllib: Option<&str>) -> String {
    let root = scene.root.matrix();
    let mut out = String::new();
    let _ = writeln!(out, "# tryon {}", crate::VERSION);
    if let Some(lib) = mtllib {
        let _ = writeln!(out, "mtllib {}", lib);
    }
    let mut base = 1usize;
    for (i, p) in scene.primitives().enumerate() {
        let mesh = tessellate(&p.shape, detail).transformed(root * p.transform.matrix());
        let _ = writeln!(out, "o {}", object_name(i, p.part, p.side));
        if mtllib.is_some() {
            let _ = writeln!(out, "usemtl mat_{}", i);
        }
        for v in &mesh.vertices {
            let _ = writeln!(out, "v {:.5} {:.5} {:.5}", v.pos[0], v.pos[1], v.pos[2]);
        }
        for v in &mesh.vertices {
            let _ = writeln!(out, "vn {:.4} {:.4} {:.4}", v.normal[0], v.normal[1], v.normal[2]);
        }
        for t in mesh.indices.chunks_exact(3) {
            let (a, b, c) = (t[0] as usize + base, t[1] as usize + base, t[2] as usize + base);
            let _ = writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}");
        }
        base += mesh.vertices.len();
    }
    out
}

/// Materials matching the `usemtl` names emitted by [`to_obj`].
pub fn to_mtl(scene: &AvatarScene) -> String {
    let mut out = String::new();
    for (i, p) in scene.primitives().enumerate() {
        let [r, g, b] = p.material.color.to_unit_f32();
        let _ = writeln!(out, "newmtl mat_{}", i);
        let _ = writeln!(out, "Kd {:.4} {:.4} {:.4}", r, g, b);
        let _ = writeln!(out, "d {:.3}", p.material.opacity);
        if let Some(rough) = p.material.roughness {
            let _ = writeln!(out, "Pr {:.3}", rough);
        }
        if let Some(metal) = p.material.metalness {
            let _ = writeln!(out, "Pm {:.3}", metal);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::controller::Controller;
    use crate::profile::{GarmentKind, GarmentSelection};

    fn dressed() -> Controller {
        let mut c = Controller::default();
        c.select_garment(Some(GarmentSelection::new("2", "Jeans", Rgb::hex(0x1e40af), GarmentKind::Pants)));
        c
    }

    #[test]
    fn draw_list_carries_every_primitive_in_world_space() {
        let c = dressed();
        let list = DrawList::from_scene(c.scene());
        assert_eq!(list.items.len(), c.scene().len());
        // pelvis-relative torso lands above the root height
        let torso = list.items.iter().find(|i| i.part == Part::Torso).expect("torso");
        assert!(torso.world[13] > c.scene().root.translation.y);

        let json = list.to_json().expect("serializes");
        let v: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(v["items"].as_array().map(|a| a.len()), Some(c.scene().len()));
        assert!(json.contains("\"garment\": \"pants\""));
        assert!(json.contains("#1e40af"));
    }

    #[test]
    fn obj_indices_are_global_and_in_range() {
        let c = dressed();
        let detail = Detail { stacks: 6, slices: 8 };
        let obj = to_obj(c.scene(), detail, Some("avatar.mtl"));
        let verts = obj.lines().filter(|l| l.starts_with("v ")).count();
        let objects = obj.lines().filter(|l| l.starts_with("o ")).count();
        assert_eq!(objects, c.scene().len());
        assert!(obj.lines().any(|l| l == "mtllib avatar.mtl"));
        for line in obj.lines().filter(|l| l.starts_with("f ")) {
            for corner in line[2..].split_whitespace() {
                let idx: usize = corner.split("//").next().and_then(|s| s.parse().ok()).expect("index");
                assert!(idx >= 1 && idx <= verts, "{line}");
            }
        }
    }

    #[test]
    fn mtl_lists_one_material_per_primitive() {
        let c = dressed();
        let mtl = to_mtl(c.scene());
        assert_eq!(mtl.lines().filter(|l| l.starts_with("newmtl")).count(), c.scene().len());
        assert!(mtl.contains("d 0.950"));
    }
}
