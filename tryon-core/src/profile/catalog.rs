//! Garments the host view offers for try-on.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::schema::{GarmentKind, GarmentSelection};
use crate::color::Rgb;
use crate::error::TryOnError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<GarmentSelection>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: vec![
                GarmentSelection::new("1", "Classic White Shirt", Rgb::hex(0xffffff), GarmentKind::Shirt),
                GarmentSelection::new("2", "Blue Denim Jeans", Rgb::hex(0x1e40af), GarmentKind::Pants).with_size("32"),
                GarmentSelection::new("3", "Black Leather Jacket", Rgb::hex(0x000000), GarmentKind::Jacket).with_size("M"),
                GarmentSelection::new("4", "Red Casual Dress", Rgb::hex(0xdc2626), GarmentKind::Dress),
                GarmentSelection::new("5", "Brown Leather Boots", Rgb::hex(0x5c3a21), GarmentKind::Shoes),
            ],
        }
    }
}

impl Catalog {
    pub fn from_yaml_str(s: &str) -> std::result::Result<Self, TryOnError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let catalog = Self::from_yaml_str(&data)
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        log::info!("loaded {} catalog items from {}", catalog.items.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&GarmentSelection> {
        self.items.iter().find(|g| g.id == id)
    }

    /// Build the selection a product page "try on" action hands over,
    /// optionally overriding the size chosen on that page.
    pub fn select(&self, id: &str, size: Option<&str>) -> std::result::Result<GarmentSelection, TryOnError> {
        let mut sel = self.get(id).cloned().ok_or_else(|| TryOnError::UnknownGarment(id.to_string()))?;
        if let Some(s) = size { sel.size = Some(s.to_string()); }
        Ok(sel)
    }
}
