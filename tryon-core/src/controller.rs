//! Owns the try-on session state and keeps the primitive set in step with it.
//!
//! Every mutation regenerates the affected geometry synchronously, so the
//! next frame always reads a scene that matches the current state.

use crate::asset::FigureAsset;
use crate::body::BodyParams;
use crate::color::Rgb;
use crate::garment::build_garment;
use crate::profile::schema::TryOnProfile;
use crate::profile::{BodyCustomization, BodyType, GarmentSelection};
use crate::scene::{AvatarScene, LocalTransform};
use crate::secondary::{IdleMotion, IdlePose};

/// One customization edit: the field and its new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CustomizationField {
    BodyType(BodyType),
    Height(f32),
    SkinTone(Rgb),
    HairColor(Rgb),
}

pub type CustomizeObserver = Box<dyn FnMut(&BodyCustomization)>;

pub struct Controller {
    customization: BodyCustomization,
    selected: Option<GarmentSelection>,
    idle: IdleMotion,
    figure: FigureAsset,
    observer: Option<CustomizeObserver>,
    scene: AvatarScene,
}

impl Default for Controller {
    fn default() -> Self { Self::new(BodyCustomization::default()) }
}

impl Controller {
    pub fn new(customization: BodyCustomization) -> Self {
        let mut c = Self {
            customization,
            selected: None,
            idle: IdleMotion::default(),
            figure: FigureAsset::Pending,
            observer: None,
            scene: AvatarScene { root: LocalTransform::default(), body: Vec::new(), garment: Vec::new() },
        };
        c.regenerate_body();
        c.regenerate_garment();
        c
    }

    pub fn from_profile(profile: &TryOnProfile) -> Self {
        let mut c = Self::new(profile.customization);
        c.idle = profile.idle;
        c.select_garment(profile.garment.clone());
        c
    }

    /// Register the host callback that receives every updated customization.
    pub fn on_customize(&mut self, observer: impl FnMut(&BodyCustomization) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn customization(&self) -> &BodyCustomization { &self.customization }
    pub fn selected_garment(&self) -> Option<&GarmentSelection> { self.selected.as_ref() }
    pub fn idle(&self) -> &IdleMotion { &self.idle }
    pub fn set_idle(&mut self, idle: IdleMotion) { self.idle = idle; }
    pub fn scene(&self) -> &AvatarScene { &self.scene }

    pub fn set_customization_field(&mut self, field: CustomizationField) {
        let c = &mut self.customization;
        match field {
            CustomizationField::BodyType(v) => c.body_type = v,
            CustomizationField::Height(v) => c.height = v,
            CustomizationField::SkinTone(v) => c.skin_tone = v,
            CustomizationField::HairColor(v) => c.hair_color = v,
        }
        self.regenerate_body();
        self.regenerate_garment();
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.customization);
        }
    }

    /// Replace the worn garment wholesale; `None` is the same as [`Self::clear`].
    pub fn select_garment(&mut self, selection: Option<GarmentSelection>) {
        self.selected = selection;
        self.regenerate_garment();
    }

    /// Swap the worn garment's color, keeping its id, type and size.
    pub fn update_garment_color(&mut self, color: Rgb) {
        let Some(sel) = self.selected.as_mut() else { return };
        sel.color = color;
        self.regenerate_garment();
    }

    /// Take the garment off; the body customization is kept.
    pub fn clear(&mut self) {
        self.select_garment(None);
    }

    /// Install the result of loading a richer figure asset.
    pub fn attach_figure(&mut self, figure: FigureAsset) {
        self.figure = figure;
        self.regenerate_body();
    }

    /// Idle pose for the render clock's elapsed seconds.
    pub fn idle_pose(&self, elapsed: f32) -> IdlePose {
        self.idle.pose(elapsed, self.selected.is_some())
    }

    /// The scene as it should be drawn at `elapsed` seconds.
    pub fn frame(&self, elapsed: f32) -> AvatarScene {
        self.scene.posed(self.idle_pose(elapsed))
    }

    fn regenerate_body(&mut self) {
        let body = BodyParams::derive(&self.customization);
        self.scene.root = LocalTransform::at(body.skeleton().root_translation());
        self.scene.body = self.figure.body_primitives(&body);
        log::debug!(
            "regenerated body: {:?} {:.2} m, {} primitives",
            self.customization.body_type,
            self.customization.height,
            self.scene.body.len()
        );
    }

    fn regenerate_garment(&mut self) {
        let body = BodyParams::derive(&self.customization);
        self.scene.garment = build_garment(self.selected.as_ref(), &body);
        log::debug!(
            "regenerated garment: {} ({} primitives)",
            self.selected.as_ref().map(|g| g.kind.label()).unwrap_or("none"),
            self.scene.garment.len()
        );
    }
}
