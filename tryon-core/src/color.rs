//! sRGB colors as used by the storefront (hex strings or a few CSS names).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TryOnError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Build from a 0xRRGGBB literal.
    pub const fn hex(v: u32) -> Self {
        Self::new(((v >> 16) & 0xff) as u8, ((v >> 8) & 0xff) as u8, (v & 0xff) as u8)
    }

    /// Channels as 0..=1 floats, no gamma conversion.
    pub fn to_unit_f32(self) -> [f32; 3] {
        [self.r as f32 / 255.0, self.g as f32 / 255.0, self.b as f32 / 255.0]
    }

    pub fn to_rgba8(self, alpha: f32) -> [u8; 4] {
        [self.r, self.g, self.b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8]
    }
}

// Names the catalog pages use instead of hex codes.
const NAMED: &[(&str, Rgb)] = &[
    ("white", Rgb::hex(0xffffff)),
    ("black", Rgb::hex(0x000000)),
    ("blue", Rgb::hex(0x0000ff)),
    ("navy", Rgb::hex(0x000080)),
    ("red", Rgb::hex(0xff0000)),
    ("brown", Rgb::hex(0xa52a2a)),
    ("gray", Rgb::hex(0x808080)),
    ("grey", Rgb::hex(0x808080)),
    ("green", Rgb::hex(0x008000)),
    ("beige", Rgb::hex(0xf5f5dc)),
];

impl FromStr for Rgb {
    type Err = TryOnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let invalid = || TryOnError::InvalidColor(s.to_string());
        if let Some(h) = t.strip_prefix('#') {
            if !h.bytes().all(|c| c.is_ascii_hexdigit()) { return Err(invalid()); }
            return match h.len() {
                6 => u32::from_str_radix(h, 16).map(Rgb::hex).map_err(|_| invalid()),
                3 => {
                    let v = u32::from_str_radix(h, 16).map_err(|_| invalid())?;
                    let expand = |n: u32| ((n & 0xf) * 0x11) as u8;
                    Ok(Rgb::new(expand(v >> 8), expand(v >> 4), expand(v)))
                }
                _ => Err(invalid()),
            };
        }
        let lower = t.to_ascii_lowercase();
        NAMED.iter().find(|(n, _)| *n == lower).map(|(_, c)| *c).ok_or_else(invalid)
    }
}

impl TryFrom<String> for Rgb {
    type Error = TryOnError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self { c.to_string() }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Swatch offered by the customization panel.
#[derive(Debug, Clone, Copy)]
pub struct Swatch {
    pub name: &'static str,
    pub color: Rgb,
}

pub const SKIN_TONES: &[Swatch] = &[
    Swatch { name: "Fair", color: Rgb::hex(0xFDBCB4) },
    Swatch { name: "Light", color: Rgb::hex(0xF1C27D) },
    Swatch { name: "Medium", color: Rgb::hex(0xE0AC69) },
    Swatch { name: "Tan", color: Rgb::hex(0xC68642) },
    Swatch { name: "Brown", color: Rgb::hex(0xA67C5A) },
    Swatch { name: "Dark", color: Rgb::hex(0x8D5524) },
];

pub const HAIR_COLORS: &[Swatch] = &[
    Swatch { name: "Brown", color: Rgb::hex(0x8B4513) },
    Swatch { name: "Blonde", color: Rgb::hex(0xD2691E) },
    Swatch { name: "Black", color: Rgb::hex(0x000000) },
    Swatch { name: "Red", color: Rgb::hex(0xB22222) },
    Swatch { name: "Auburn", color: Rgb::hex(0xA0522D) },
    Swatch { name: "Gray", color: Rgb::hex(0x808080) },
];

/// Eyes, shoes and buttons.
pub const DARK_SLATE: Rgb = Rgb::hex(0x2c3e50);
pub const LIP: Rgb = Rgb::hex(0x8b4444);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!("#F1C27D".parse::<Rgb>().unwrap(), Rgb::new(0xf1, 0xc2, 0x7d));
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert_eq!("White".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("chartreuse-ish".parse::<Rgb>().is_err());
    }

    #[test]
    fn displays_lowercase_hex() {
        assert_eq!(Rgb::hex(0x1E40AF).to_string(), "#1e40af");
        let json = serde_json::to_string(&Rgb::hex(0xdc2626)).unwrap();
        assert_eq!(json, "\"#dc2626\"");
    }
}
