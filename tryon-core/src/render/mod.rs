//! CPU-side rendering helpers: shape tessellation for upload and a small
//! software preview used by the CLI.

pub mod mesh;
pub mod preview;

pub use mesh::{tessellate, Detail, MeshData, Vertex};
pub use preview::{render_preview, PreviewParams};
