//! Optional richer figure loaded from disk. The procedural figure is always
//! the fallback: a pending or failed asset never blocks the try-on view.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::body::{build_figure, BodyParams};
use crate::error::TryOnError;
use crate::scene::{Layer, Part, Primitive};

/// Body primitives authored for the 1.75 m reference, pelvis-relative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFigure {
    pub name: String,
    pub primitives: Vec<Primitive>,
}

impl ExternalFigure {
    pub fn from_json_str(s: &str) -> std::result::Result<Self, TryOnError> {
        let mut fig: ExternalFigure = serde_json::from_str(s)?;
        if fig.primitives.is_empty() { return Err(TryOnError::EmptyFigure); }
        for p in &mut fig.primitives { p.layer = Layer::Body; }
        Ok(fig)
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading figure {}", path.display()))?;
        Self::from_json_str(&data).with_context(|| format!("parsing figure {}", path.display()))
    }
}

#[derive(Debug, Clone, Default)]
pub enum FigureAsset {
    #[default]
    Pending,
    Ready(ExternalFigure),
    Failed(String),
}

impl FigureAsset {
    /// Turn a load attempt into an asset slot, logging failures.
    pub fn from_load(result: Result<ExternalFigure>) -> Self {
        match result {
            Ok(fig) => {
                log::info!("external figure '{}' ready ({} primitives)", fig.name, fig.primitives.len());
                FigureAsset::Ready(fig)
            }
            Err(e) => {
                log::warn!("external figure unavailable, using procedural figure: {:#}", e);
                FigureAsset::Failed(format!("{:#}", e))
            }
        }
    }

    /// Body primitives for `body`: the external figure fitted to the current
    /// customization when ready, the procedural figure otherwise.
    pub fn body_primitives(&self, body: &BodyParams) -> Vec<Primitive> {
        match self {
            FigureAsset::Ready(fig) => fig.primitives.iter().map(|p| fit_to_body(p, body)).collect(),
            FigureAsset::Pending | FigureAsset::Failed(_) => build_figure(body),
        }
    }
}

// Same rules as the procedural figure: lateral offsets and limb girth follow
// the body-type width, everything stretches vertically, skin and hair recolor.
fn fit_to_body(p: &Primitive, body: &BodyParams) -> Primitive {
    let mut p = p.clone();
    let t = &mut p.transform;
    if !p.part.is_head_feature() {
        t.translation.x *= body.scale.x;
    }
    if p.part.follows_width() {
        t.scale.x *= body.scale.x;
        t.scale.z *= body.scale.z;
    }
    t.translation.y *= body.height;
    t.scale.y *= body.height;
    if p.part == Part::Hair {
        p.material.color = body.hair;
    } else if p.part.is_skin() {
        p.material.color = body.skin;
    }
    p
}
