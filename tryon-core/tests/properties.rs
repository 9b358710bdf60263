use tryon_core::body::{build_figure, fit_multiplier, BodyParams};
use tryon_core::color::Rgb;
use tryon_core::controller::{Controller, CustomizationField};
use tryon_core::garment::build_garment;
use tryon_core::profile::{BodyCustomization, BodyType, GarmentKind, GarmentSelection};
use tryon_core::scene::{Layer, Part, Primitive, Side};
use tryon_core::secondary::IdleMotion;

const WIDTH_FOLLOWING: [Part; 6] = [Part::UpperArm, Part::Forearm, Part::Hand, Part::Thigh, Part::Shin, Part::Foot];

fn body(body_type: BodyType, height: f32) -> BodyParams {
    BodyParams::derive(&BodyCustomization { body_type, height, ..Default::default() })
}

fn find(prims: &[Primitive], part: Part, side: Option<Side>) -> &Primitive {
    prims
        .iter()
        .find(|p| p.part == part && p.side == side)
        .unwrap_or_else(|| panic!("missing {:?} {:?}", part, side))
}

fn torso_half_width(prims: &[Primitive]) -> f32 {
    let t = find(prims, Part::Torso, None);
    t.shape.half_extents().x * t.transform.scale.x
}

fn selection(kind: GarmentKind, size: &str) -> GarmentSelection {
    GarmentSelection::new("p", "Sample", Rgb::hex(0x336699), kind).with_size(size)
}

#[test]
fn limbs_keep_their_ratio_to_the_torso_across_body_types() {
    let reference = build_figure(&body(BodyType::Regular, 1.75));
    let ref_w = torso_half_width(&reference);
    for bt in BodyType::ALL {
        let prims = build_figure(&body(bt, 1.75));
        let w = torso_half_width(&prims);
        for part in WIDTH_FOLLOWING {
            for side in Side::BOTH {
                let expected = find(&reference, part, Some(side)).transform.translation.x / ref_w;
                let got = find(&prims, part, Some(side)).transform.translation.x / w;
                assert!(((got - expected) / expected).abs() < 0.02, "{:?} {:?} {:?}: {} vs {}", bt, part, side, got, expected);
            }
        }
    }
}

#[test]
fn vertical_positions_scale_with_height() {
    let reference = build_figure(&body(BodyType::Regular, 1.75));
    let mut last_extent = 0.0;
    for height in [1.50, 1.60, 1.75, 1.85, 2.00] {
        let c = Controller::new(BodyCustomization { height, ..Default::default() });
        let extent = c.scene().bounds().size().y;
        assert!(extent > last_extent, "{height}: {extent} <= {last_extent}");
        last_extent = extent;

        let f = height / 1.75;
        for (p, r) in c.scene().body.iter().zip(&reference) {
            let want = r.transform.translation.y * f;
            assert!((p.transform.translation.y - want).abs() < 1e-5, "{:?} at {height}", p.part);
        }
    }
}

#[test]
fn garment_offsets_keep_their_ratio_to_the_torso_across_body_types() {
    let ref_body = body(BodyType::Regular, 1.75);
    let ref_w = torso_half_width(&build_figure(&ref_body));
    for kind in GarmentKind::RECOGNIZED {
        let sel = selection(kind, "L");
        let reference = build_garment(Some(&sel), &ref_body);
        for bt in BodyType::ALL {
            let b = body(bt, 1.75);
            let w = torso_half_width(&build_figure(&b));
            let prims = build_garment(Some(&sel), &b);
            for (r, p) in reference.iter().zip(&prims).filter(|(r, _)| r.side.is_some()) {
                let expected = r.transform.translation.x / ref_w;
                let got = p.transform.translation.x / w;
                assert!(((got - expected) / expected).abs() < 0.02, "{:?} {:?} {:?} {:?}", kind, bt, r.part, r.side);
            }
            // sleeves also keep their place against the garment's own body
            let main = prims.iter().find(|p| matches!(p.part, Part::ShirtBody | Part::JacketBody));
            let ref_main = reference.iter().find(|p| matches!(p.part, Part::ShirtBody | Part::JacketBody));
            if let (Some(m), Some(rm)) = (main, ref_main) {
                let sleeve = find(&prims, Part::Sleeve, Some(Side::Right)).transform.translation.x;
                let ref_sleeve = find(&reference, Part::Sleeve, Some(Side::Right)).transform.translation.x;
                let got = sleeve / m.transform.scale.x;
                let expected = ref_sleeve / rm.transform.scale.x;
                assert!(((got - expected) / expected).abs() < 0.02, "{:?} {:?}", kind, bt);
            }
        }
    }
}

#[test]
fn garment_vertical_positions_scale_with_height() {
    let ref_body = body(BodyType::Athletic, 1.75);
    for kind in GarmentKind::RECOGNIZED {
        let sel = selection(kind, "XS");
        let reference = build_garment(Some(&sel), &ref_body);
        for height in [1.50, 1.68, 2.00] {
            let f = height / 1.75;
            let prims = build_garment(Some(&sel), &body(BodyType::Athletic, height));
            assert_eq!(prims.len(), reference.len());
            for (p, r) in prims.iter().zip(&reference) {
                let want = r.transform.translation.y * f;
                assert!((p.transform.translation.y - want).abs() < 1e-5, "{:?} {:?} at {height}", kind, p.part);
            }
        }
    }
}

#[test]
fn garment_scale_follows_size_table() {
    let b = body(BodyType::Regular, 1.75);
    let expected = [0.85, 0.9, 1.0, 1.1, 1.2, 1.3];
    for labels in [["XS", "S", "M", "L", "XL", "XXL"], ["28", "30", "32", "34", "36", "38"]] {
        let mut last = 0.0;
        for (label, want) in labels.iter().zip(expected) {
            assert!((fit_multiplier(Some(label)) - want).abs() < 1e-6);
            let shirt = build_garment(Some(&selection(GarmentKind::Shirt, label)), &b);
            let sx = find(&shirt, Part::ShirtBody, None).transform.scale.x;
            assert!(sx >= last, "{label}");
            assert!((sx - 1.05 * want).abs() < 1e-5);
            last = sx;
        }
    }
}

#[test]
fn one_selection_draws_exactly_one_garment_type() {
    let b = body(BodyType::Athletic, 1.8);
    for kind in GarmentKind::RECOGNIZED {
        let prims = build_garment(Some(&selection(kind, "M")), &b);
        assert!(!prims.is_empty(), "{:?}", kind);
        assert!(prims.iter().all(|p| p.layer == Layer::Garment(kind)), "{:?}", kind);
    }
    assert!(build_garment(Some(&selection(GarmentKind::Unrecognized, "M")), &b).is_empty());
    assert!(build_garment(None, &b).is_empty());
}

#[test]
fn clear_returns_to_the_undressed_scene() {
    let mut c = Controller::default();
    c.set_customization_field(CustomizationField::HairColor(Rgb::hex(0x2c1b18)));
    let initial = c.scene().clone();
    for kind in GarmentKind::RECOGNIZED {
        c.select_garment(Some(selection(kind, "XL")));
    }
    c.clear();
    for _ in 0..3 {
        let _ = c.frame(1.0);
        assert_eq!(c.scene(), &initial);
    }
    assert!(c.scene().garment.is_empty());
}

#[test]
fn color_updates_keep_garment_identity() {
    let mut c = Controller::default();
    c.select_garment(Some(GarmentSelection::new("4", "Summer Dress", Rgb::hex(0xdc2626), GarmentKind::Dress).with_size("S")));
    let c1: Rgb = "#112233".parse().expect("hex");
    let c2: Rgb = "navy".parse().expect("named");
    c.update_garment_color(c1);
    c.update_garment_color(c2);
    let g = c.selected_garment().expect("still selected");
    assert_eq!((g.id.as_str(), g.kind, g.size.as_deref()), ("4", GarmentKind::Dress, Some("S")));
    assert_eq!(g.color, c2);
    assert!(c.scene().garment.iter().all(|p| p.material.color == c2));
}

#[test]
fn unknown_size_fits_like_medium() {
    let b = body(BodyType::Slim, 1.65);
    for kind in GarmentKind::RECOGNIZED {
        let medium = build_garment(Some(&selection(kind, "M")), &b);
        let waist = build_garment(Some(&selection(kind, "32")), &b);
        let odd = build_garment(Some(&selection(kind, "4XL-tall")), &b);
        let none = build_garment(Some(&GarmentSelection::new("p", "Sample", Rgb::hex(0x336699), kind)), &b);
        assert_eq!(odd, medium, "{:?}", kind);
        assert_eq!(none, medium, "{:?}", kind);
        assert_eq!(waist, medium, "{:?}", kind);
    }
}

#[test]
fn idle_sway_is_bounded_and_periodic() {
    let m = IdleMotion::default();
    let period = std::f32::consts::TAU / m.frequency;
    for i in 0..500 {
        let t = i as f32 * 0.173;
        let a = m.sample(t).root_yaw;
        assert!(a.abs() <= m.amplitude + 1e-7);
        let b = m.sample(t + period).root_yaw;
        assert!((a - b).abs() < 1e-4, "t={t}");
    }
}
