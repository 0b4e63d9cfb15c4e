// Layout maps: orthogonal to the preset, applied uniformly across all
// variants. When the nested layout record or one of its fields is
// missing, each field falls back individually to its documented default.

use tapcard_config::LayoutSettings;

use crate::ResolvedStyle;

/// compact | comfortable | spacious -> padding class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

impl Spacing {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "compact" => Some(Spacing::Compact),
            "comfortable" => Some(Spacing::Comfortable),
            "spacious" => Some(Spacing::Spacious),
            _ => None,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Spacing::Compact => "p-2",
            Spacing::Comfortable => "p-4",
            Spacing::Spacious => "p-8",
        }
    }
}

/// none | small | medium | large -> radius class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderRadius {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

impl BorderRadius {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(BorderRadius::None),
            "small" => Some(BorderRadius::Small),
            "medium" => Some(BorderRadius::Medium),
            "large" => Some(BorderRadius::Large),
            _ => None,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            BorderRadius::None => "rounded-none",
            BorderRadius::Small => "rounded",
            BorderRadius::Medium => "rounded-xl",
            BorderRadius::Large => "rounded-3xl",
        }
    }
}

/// none | subtle | medium | strong -> shadow class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowIntensity {
    None,
    Subtle,
    #[default]
    Medium,
    Strong,
}

impl ShadowIntensity {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(ShadowIntensity::None),
            "subtle" => Some(ShadowIntensity::Subtle),
            "medium" => Some(ShadowIntensity::Medium),
            "strong" => Some(ShadowIntensity::Strong),
            _ => None,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ShadowIntensity::None => "shadow-none",
            ShadowIntensity::Subtle => "shadow-sm",
            ShadowIntensity::Medium => "shadow-md",
            ShadowIntensity::Strong => "shadow-2xl",
        }
    }
}

fn field_or_default<T: Default>(
    layout: Option<&LayoutSettings>,
    get: impl Fn(&LayoutSettings) -> Option<&String>,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    layout
        .and_then(get)
        .and_then(|v| parse(v))
        .unwrap_or_default()
}

pub(crate) fn apply(layout: Option<&LayoutSettings>, out: &mut ResolvedStyle) {
    let radius = field_or_default(layout, |l| l.border_radius.as_ref(), BorderRadius::parse);
    let shadow = field_or_default(layout, |l| l.shadow_intensity.as_ref(), ShadowIntensity::parse);
    let spacing = field_or_default(layout, |l| l.spacing.as_ref(), Spacing::parse);

    out.push_class(radius.class());
    out.push_class(shadow.class());
    out.push_class(spacing.class());
}
