//! Errors raised at the loading boundary (profiles, catalogs, figure assets).
//!
//! Geometry generation and controller transitions are total and never fail;
//! only text/file input can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TryOnError {
    #[error("invalid color '{0}': expected #rrggbb, #rgb or a known color name")]
    InvalidColor(String),
    #[error("height {0:.2} m is outside the supported range [1.50, 2.00]")]
    HeightOutOfRange(f32),
    #[error("no garment with id '{0}' in catalog")]
    UnknownGarment(String),
    #[error("external figure has no primitives")]
    EmptyFigure,
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TryOnError>;
