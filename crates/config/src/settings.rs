// Session-scoped presentation preferences.
// Created once at app start with defaults, mutated only through
// SettingsStore::update, never persisted.

use serde::{Deserialize, Serialize};

/// Pixel offset applied when repositioning an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Nested animation preferences.
///
/// Fields are free-form strings: the store accepts whatever the UI hands
/// it, and consumers default unrecognized or missing values at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationSettings {
    /// slow | normal | fast
    pub speed: Option<String>,
    /// smooth | bounce | elastic
    #[serde(rename = "type")]
    pub easing: Option<String>,
    /// low | medium | high
    pub intensity: Option<String>,
    /// fade | slide | scale | none
    pub page_transition: Option<String>,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            speed: Some("normal".into()),
            easing: Some("smooth".into()),
            intensity: Some("medium".into()),
            page_transition: Some("fade".into()),
        }
    }
}

/// Nested layout preferences, same permissive contract as
/// [`AnimationSettings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSettings {
    /// compact | comfortable | spacious
    pub spacing: Option<String>,
    /// none | small | medium | large
    pub border_radius: Option<String>,
    /// none | subtle | medium | strong
    pub shadow_intensity: Option<String>,
    /// grid | masonry | list
    pub card_style: Option<String>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            spacing: Some("comfortable".into()),
            border_radius: Some("medium".into()),
            shadow_intensity: Some("medium".into()),
            card_style: Some("grid".into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    // Appearance
    /// default | dark | light
    pub theme: String,

    /// Accent color, `#RRGGBB`. Stored as-is: an invalid value flows
    /// through with undefined rendering consequences (legacy behavior).
    pub profile_color: String,

    /// filled | outlined
    pub icon_style: String,

    /// Component preset: default | glass | neomorphic | retro | minimal
    /// | cyber | material
    pub component_style: String,

    // Decoration
    /// One of the twelve background pattern ids.
    pub background_animation: String,

    /// spinner | dots | progress
    pub page_loader: String,

    /// fade | slide | zoom
    pub page_entrance: String,

    // Nested records (replaced wholesale by updates, see SettingsPatch)
    pub animations: Option<AnimationSettings>,
    pub layout: Option<LayoutSettings>,

    // Images
    /// Data URI; None shows the placeholder.
    pub banner_image: Option<String>,
    pub profile_image: Option<String>,
    pub banner_position: Position,
    pub profile_position: Position,
    /// Expected range [0.5, 2.0].
    pub banner_zoom: f32,
    pub profile_zoom: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Appearance
            theme: "default".into(),
            profile_color: "#3B82F6".into(),
            icon_style: "filled".into(),
            component_style: "default".into(),
            // Decoration
            background_animation: "boxes".into(),
            page_loader: "spinner".into(),
            page_entrance: "fade".into(),
            // Nested
            animations: Some(AnimationSettings::default()),
            layout: Some(LayoutSettings::default()),
            // Images
            banner_image: None,
            profile_image: None,
            banner_position: Position::default(),
            profile_position: Position::default(),
            banner_zoom: 1.0,
            profile_zoom: 1.0,
        }
    }
}

/// Partial update, merged one level deep: every key present here replaces
/// the corresponding top-level value of [`Settings`] *entirely*.
///
/// Nested objects are not deep-merged. Changing a single nested field
/// without losing its siblings goes through
/// [`crate::SettingsStore::update_layout`] /
/// [`crate::SettingsStore::update_animations`], which do the
/// read-merge-write dance on the caller's behalf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub theme: Option<String>,
    pub profile_color: Option<String>,
    pub icon_style: Option<String>,
    pub component_style: Option<String>,
    pub background_animation: Option<String>,
    pub page_loader: Option<String>,
    pub page_entrance: Option<String>,
    pub animations: Option<AnimationSettings>,
    pub layout: Option<LayoutSettings>,
    /// `Some(None)` clears the image, `Some(Some(uri))` replaces it.
    pub banner_image: Option<Option<String>>,
    pub profile_image: Option<Option<String>>,
    pub banner_position: Option<Position>,
    pub profile_position: Option<Position>,
    pub banner_zoom: Option<f32>,
    pub profile_zoom: Option<f32>,
}

impl Settings {
    /// Apply a patch with top-level-replace semantics.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(v) = patch.theme {
            self.theme = v;
        }
        if let Some(v) = patch.profile_color {
            self.profile_color = v;
        }
        if let Some(v) = patch.icon_style {
            self.icon_style = v;
        }
        if let Some(v) = patch.component_style {
            self.component_style = v;
        }
        if let Some(v) = patch.background_animation {
            self.background_animation = v;
        }
        if let Some(v) = patch.page_loader {
            self.page_loader = v;
        }
        if let Some(v) = patch.page_entrance {
            self.page_entrance = v;
        }
        if let Some(v) = patch.animations {
            self.animations = Some(v);
        }
        if let Some(v) = patch.layout {
            self.layout = Some(v);
        }
        if let Some(v) = patch.banner_image {
            self.banner_image = v;
        }
        if let Some(v) = patch.profile_image {
            self.profile_image = v;
        }
        if let Some(v) = patch.banner_position {
            self.banner_position = v;
        }
        if let Some(v) = patch.profile_position {
            self.profile_position = v;
        }
        if let Some(v) = patch.banner_zoom {
            self.banner_zoom = v;
        }
        if let Some(v) = patch.profile_zoom {
            self.profile_zoom = v;
        }
    }
}
