pub mod catalog;
pub mod schema;

use anyhow::{Context, Result};
use schema::{TryOnProfile, MAX_HEIGHT_M, MIN_HEIGHT_M};

use crate::error::TryOnError;

pub use catalog::Catalog;
pub use schema::{BodyCustomization, BodyType, GarmentKind, GarmentSelection};

/// Parse a profile and reject heights the height slider could never produce.
pub fn load_from_yaml_str(s: &str) -> Result<TryOnProfile> {
    let profile: TryOnProfile = serde_yaml::from_str(s).map_err(TryOnError::from)?;
    validate(&profile)?;
    Ok(profile)
}

pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<TryOnProfile> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;
    let profile = load_from_yaml_str(&data)
        .with_context(|| format!("parsing profile {}", path.display()))?;
    log::info!(
        "loaded profile {} ({:?}, {:.2} m, garment: {})",
        path.display(),
        profile.customization.body_type,
        profile.customization.height,
        profile.garment.as_ref().map(|g| g.name.as_str()).unwrap_or("none"),
    );
    Ok(profile)
}

pub fn validate(profile: &TryOnProfile) -> std::result::Result<(), TryOnError> {
    let h = profile.customization.height;
    if !(MIN_HEIGHT_M..=MAX_HEIGHT_M).contains(&h) {
        return Err(TryOnError::HeightOutOfRange(h));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn full_profile_parses() {
        let yaml = r##"
customization:
  body_type: athletic
  height: 1.82
  skin_tone: "#C68642"
  hair_color: black
garment:
  id: "3"
  name: Black Leather Jacket
  color: "#000000"
  type: jacket
  size: XL
idle:
  amplitude: 0.05
"##;
        let p = load_from_yaml_str(yaml).expect("valid");
        assert_eq!(p.customization.body_type, BodyType::Athletic);
        assert_eq!(p.customization.hair_color, Rgb::hex(0x000000));
        let g = p.garment.expect("garment");
        assert_eq!(g.kind, GarmentKind::Jacket);
        assert_eq!(g.size.as_deref(), Some("XL"));
        assert!((p.idle.amplitude - 0.05).abs() < 1e-6);
        assert!((p.idle.frequency - 0.3).abs() < 1e-6);
    }

    #[test]
    fn empty_profile_uses_defaults() {
        let p = load_from_yaml_str("{}").expect("valid");
        assert_eq!(p.customization, BodyCustomization::default());
        assert!(p.garment.is_none());
    }

    #[test]
    fn unknown_garment_type_is_kept_as_unrecognized() {
        let yaml = "garment: { id: x, name: Hat, color: red, type: hat }";
        let p = load_from_yaml_str(yaml).expect("valid");
        assert_eq!(p.garment.unwrap().kind, GarmentKind::Unrecognized);
    }

    #[test]
    fn height_outside_slider_range_is_rejected() {
        let err = load_from_yaml_str("customization: { height: 2.4 }").unwrap_err();
        assert!(matches!(err.downcast_ref::<TryOnError>(), Some(TryOnError::HeightOutOfRange(_))));
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        assert!(load_from_yaml_str("customization: { skin_tone: '#xyz' }").is_err());
    }
}
