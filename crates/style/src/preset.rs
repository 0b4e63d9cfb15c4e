// Preset dispatch: one branch per componentStyle value, producing plain
// class/color data. Structural classes come from the branch; accent
// colors are overlaid afterward as inline values, so a preset can mix
// fixed classes with colorized output.

use crate::{ResolvedStyle, Variant};

// Raised and pressed dual-shadow looks for the neomorphic preset.
const NEO_SHADOW: &str =
    "shadow-[5px_5px_10px_rgba(0,0,0,0.1),-5px_-5px_10px_rgba(255,255,255,0.7)]";
const NEO_SHADOW_DARK: &str =
    "dark:shadow-[5px_5px_10px_rgba(0,0,0,0.3),-5px_-5px_10px_rgba(255,255,255,0.05)]";
const NEO_PRESS: &str =
    "active:shadow-[inset_5px_5px_10px_rgba(0,0,0,0.1),inset_-5px_-5px_10px_rgba(255,255,255,0.7)]";

// Cyan/magenta glow for the retro preset.
const RETRO_GLOW: &str =
    "shadow-[0_0_10px_rgba(0,255,255,0.7),inset_0_0_10px_rgba(255,0,255,0.4)]";
const RETRO_HOVER: &str =
    "hover:text-pink-200 hover:shadow-[0_0_15px_rgba(0,255,255,0.9),inset_0_0_15px_rgba(255,0,255,0.6)]";

/// Named style preset selecting a whole family of visual rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentStyle {
    #[default]
    Default,
    Glass,
    Neomorphic,
    Retro,
    Minimal,
    Cyber,
    Material,
}

impl ComponentStyle {
    pub const ALL: [ComponentStyle; 7] = [
        ComponentStyle::Default,
        ComponentStyle::Glass,
        ComponentStyle::Neomorphic,
        ComponentStyle::Retro,
        ComponentStyle::Minimal,
        ComponentStyle::Cyber,
        ComponentStyle::Material,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "default" => Some(ComponentStyle::Default),
            "glass" => Some(ComponentStyle::Glass),
            "neomorphic" => Some(ComponentStyle::Neomorphic),
            "retro" => Some(ComponentStyle::Retro),
            "minimal" => Some(ComponentStyle::Minimal),
            "cyber" => Some(ComponentStyle::Cyber),
            "material" => Some(ComponentStyle::Material),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentStyle::Default => "default",
            ComponentStyle::Glass => "glass",
            ComponentStyle::Neomorphic => "neomorphic",
            ComponentStyle::Retro => "retro",
            ComponentStyle::Minimal => "minimal",
            ComponentStyle::Cyber => "cyber",
            ComponentStyle::Material => "material",
        }
    }

    /// Neomorphic and retro use fixed palettes and ignore the accent.
    pub fn uses_profile_color(self) -> bool {
        !matches!(self, ComponentStyle::Neomorphic | ComponentStyle::Retro)
    }
}

pub(crate) fn apply(preset: ComponentStyle, variant: Variant, color: &str, out: &mut ResolvedStyle) {
    let button = variant == Variant::Button;

    match preset {
        ComponentStyle::Glass => {
            out.push_class("backdrop-blur-md");
            out.push_class("border");
            if button {
                out.push_class("hover:bg-opacity-30 active:bg-opacity-40 transition-all");
            }
            // 20% background / 30% border alpha suffixes on the raw hex
            out.set("background-color", format!("{color}33"));
            out.set("border-color", format!("{color}4D"));
        }
        ComponentStyle::Neomorphic => {
            out.push_class("bg-gray-100 dark:bg-gray-800");
            out.push_class(NEO_SHADOW);
            out.push_class(NEO_SHADOW_DARK);
            if button {
                out.push_class(NEO_PRESS);
            }
        }
        ComponentStyle::Retro => {
            out.push_class("bg-purple-900 text-pink-300 border-2 border-cyan-400");
            out.push_class(RETRO_GLOW);
            if button {
                out.push_class(RETRO_HOVER);
            }
        }
        ComponentStyle::Minimal => {
            out.push_class("border");
            if button {
                out.push_class("hover:bg-opacity-10 transition-colors");
                out.set("transition", "all 0.2s");
            }
            out.set("border-color", color);
            out.set("color", color);
        }
        ComponentStyle::Cyber => {
            out.push_class("border-2 border-b-4 border-r-4");
            out.push_class("shadow-[0_0_10px_rgba(0,0,0,0.5)]");
            if button {
                out.push_class("hover:shadow-[0_0_15px_rgba(0,0,0,0.7)]");
            }
            out.set("background-color", "black");
            out.set("color", color);
            out.set("border-color", color);
        }
        ComponentStyle::Material => {
            out.push_class("shadow-md");
            if button {
                out.push_class("hover:shadow-lg active:shadow-sm transition-shadow");
            }
            out.set("background-color", color);
            out.set("color", "white");
        }
        ComponentStyle::Default => {
            out.push_class("bg-background border border-border");
            if button {
                out.push_class("hover:bg-muted/50 active:bg-muted transition-colors");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_preset() {
        for preset in ComponentStyle::ALL {
            assert_eq!(ComponentStyle::parse(preset.as_str()), Some(preset));
        }
        assert_eq!(ComponentStyle::parse("glassmorphism"), None);
    }

    #[test]
    fn only_fixed_palette_presets_skip_the_accent() {
        assert!(!ComponentStyle::Neomorphic.uses_profile_color());
        assert!(!ComponentStyle::Retro.uses_profile_color());
        for preset in [
            ComponentStyle::Default,
            ComponentStyle::Glass,
            ComponentStyle::Minimal,
            ComponentStyle::Cyber,
            ComponentStyle::Material,
        ] {
            assert!(preset.uses_profile_color(), "{:?}", preset);
        }
    }

    #[test]
    fn button_variant_adds_press_state_to_neomorphic() {
        let mut card = ResolvedStyle::default();
        apply(ComponentStyle::Neomorphic, Variant::Card, "#3B82F6", &mut card);
        assert!(!card.classes.iter().any(|c| c.starts_with("active:shadow-[inset")));

        let mut button = ResolvedStyle::default();
        apply(ComponentStyle::Neomorphic, Variant::Button, "#3B82F6", &mut button);
        assert!(button.classes.iter().any(|c| c.starts_with("active:shadow-[inset")));
    }

    #[test]
    fn cyber_forces_black_background_with_accent_ink() {
        let mut out = ResolvedStyle::default();
        apply(ComponentStyle::Cyber, Variant::Card, "#F59E0B", &mut out);
        assert_eq!(out.inline["background-color"], "black");
        assert_eq!(out.inline["color"], "#F59E0B");
        assert_eq!(out.inline["border-color"], "#F59E0B");
    }

    #[test]
    fn material_is_solid_accent_with_white_text() {
        let mut out = ResolvedStyle::default();
        apply(ComponentStyle::Material, Variant::Card, "#8B5CF6", &mut out);
        assert_eq!(out.inline["background-color"], "#8B5CF6");
        assert_eq!(out.inline["color"], "white");
        assert!(out.classes.iter().any(|c| c == "shadow-md"));
    }

    #[test]
    fn minimal_button_gets_the_transition_override() {
        let mut out = ResolvedStyle::default();
        apply(ComponentStyle::Minimal, Variant::Button, "#10B981", &mut out);
        assert_eq!(out.inline["transition"], "all 0.2s");

        let mut input = ResolvedStyle::default();
        apply(ComponentStyle::Minimal, Variant::Input, "#10B981", &mut input);
        assert!(!input.inline.contains_key("transition"));
    }
}
