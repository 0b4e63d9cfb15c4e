// Theme vocabulary: base background/text classes for the page shell.

/// default | dark | light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Default, Theme::Dark, Theme::Light];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "default" => Some(Theme::Default),
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Base background/text classes applied to the page root.
    pub fn page_classes(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-900 text-white",
            Theme::Light => "bg-gray-100 text-gray-900",
            Theme::Default => "bg-[#0A0B14] text-white",
        }
    }

    pub fn is_dark(self) -> bool {
        !matches!(self, Theme::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_parses_to_none_and_callers_default() {
        assert_eq!(Theme::parse("midnight"), None);
        assert_eq!(Theme::parse("midnight").unwrap_or_default(), Theme::Default);
    }

    #[test]
    fn page_classes_match_the_three_themes() {
        assert_eq!(Theme::Dark.page_classes(), "bg-gray-900 text-white");
        assert_eq!(Theme::Light.page_classes(), "bg-gray-100 text-gray-900");
        assert_eq!(Theme::Default.page_classes(), "bg-[#0A0B14] text-white");
    }
}
