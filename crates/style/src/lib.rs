// Style resolution - pure mapping from settings + variant to concrete
// visual attributes (class names and inline color overrides).

pub mod layout;
pub mod preset;
pub mod theme;

use std::collections::BTreeMap;

use serde::Serialize;
use tapcard_config::Settings;

pub use layout::{BorderRadius, ShadowIntensity, Spacing};
pub use preset::ComponentStyle;
pub use theme::Theme;

/// Accent used when the stored profile color is empty.
pub const DEFAULT_PROFILE_COLOR: &str = "#3B82F6";

/// Which structural style rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Card,
    Button,
    Input,
}

impl Variant {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "card" => Some(Variant::Card),
            "button" => Some(Variant::Button),
            "input" => Some(Variant::Input),
            _ => None,
        }
    }
}

/// Button sizing, supplied by the caller independent of settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ButtonSize {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sm" => Some(ButtonSize::Sm),
            "md" => Some(ButtonSize::Md),
            "lg" => Some(ButtonSize::Lg),
            "xl" => Some(ButtonSize::Xl),
            _ => None,
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-sm",
            ButtonSize::Md => "px-5 py-2.5 text-base",
            ButtonSize::Lg => "px-7 py-3.5 text-lg",
            ButtonSize::Xl => "px-9 py-5 text-xl font-bold min-h-[70px]",
        }
    }
}

/// Concrete visual attributes for one component.
///
/// `inline` is an ordered map so identical inputs always serialize to
/// identical output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResolvedStyle {
    pub classes: Vec<String>,
    pub inline: BTreeMap<String, String>,
}

impl ResolvedStyle {
    pub(crate) fn push_class(&mut self, class: &str) {
        self.classes.push(class.to_string());
    }

    pub(crate) fn set(&mut self, property: &str, value: impl Into<String>) {
        self.inline.insert(property.to_string(), value.into());
    }

    /// Space-joined value for an HTML `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// `prop: value; ...` value for an HTML `style` attribute.
    pub fn style_attr(&self) -> String {
        self.inline
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Effective accent color: the stored value unless it is empty. Invalid
/// hex flows through untouched (permissive legacy contract); reject bad
/// colors at input boundaries, not here.
pub fn profile_color(settings: &Settings) -> &str {
    if settings.profile_color.is_empty() {
        DEFAULT_PROFILE_COLOR
    } else {
        &settings.profile_color
    }
}

/// Resolve the full style for a component. Pure and deterministic:
/// the same settings and variant always produce the same output.
///
/// Unknown preset names fall back to the default branch; a missing
/// `layout` record falls back to per-field defaults.
pub fn resolve(settings: &Settings, variant: Variant) -> ResolvedStyle {
    let preset = ComponentStyle::parse(&settings.component_style).unwrap_or_default();
    let color = profile_color(settings);

    let mut out = ResolvedStyle::default();
    preset::apply(preset, variant, color, &mut out);
    layout::apply(settings.layout.as_ref(), &mut out);
    out
}

/// Button resolution: `resolve` plus the caller-chosen size classes.
pub fn resolve_button(settings: &Settings, size: ButtonSize) -> ResolvedStyle {
    let mut out = resolve(settings, Variant::Button);
    out.push_class(size.classes());
    out
}
