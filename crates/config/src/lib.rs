// Configuration - settings model, settings store, colors

pub mod settings;
pub mod store;

pub use settings::{AnimationSettings, LayoutSettings, Position, Settings, SettingsPatch};
pub use store::{SettingsStore, StoreError};

/// Framework-agnostic RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#RRGGBB` hex string
    pub fn parse_hex(hex: &str) -> Option<Color> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;
        Some(Color::from_rgb(r, g, b))
    }

    /// CSS `rgba(...)` string with the given alpha (decorative layers
    /// need translucent derivatives of the accent color).
    pub fn to_rgba_string(self, alpha: f32) -> String {
        format!(
            "rgba({},{},{},{})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            alpha
        )
    }
}

/// True for a `#RRGGBB` value. The settings store does not enforce this;
/// input boundaries (the CLI color flag) use it to reject typos early.
pub fn is_valid_hex(value: &str) -> bool {
    Color::parse_hex(value).is_some() && value.starts_with('#')
}
