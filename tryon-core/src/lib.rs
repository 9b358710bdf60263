//! Procedural avatar and garment composition for a virtual try-on view.
//!
//! The crate turns a body customization and an optional garment selection
//! into a flat list of renderer primitives, and animates the figure root with
//! a small idle sway.

pub mod asset;
pub mod body;
pub mod color;
pub mod controller;
pub mod error;
pub mod export;
pub mod garment;
pub mod profile;
pub mod render;
pub mod rig;
pub mod scene;
pub mod secondary;

pub use controller::{Controller, CustomizationField};
pub use error::TryOnError;
pub use scene::{AvatarScene, Primitive};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
