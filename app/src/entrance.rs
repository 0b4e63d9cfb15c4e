// Page entrance animation applied to the card once the loader clears.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntranceKind {
    #[default]
    Fade,
    Slide,
    Zoom,
}

impl EntranceKind {
    pub const ALL: [EntranceKind; 3] = [EntranceKind::Fade, EntranceKind::Slide, EntranceKind::Zoom];

    /// Unknown ids fall back to fade.
    pub fn parse(value: &str) -> EntranceKind {
        match value {
            "slide" => EntranceKind::Slide,
            "zoom" => EntranceKind::Zoom,
            _ => EntranceKind::Fade,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntranceKind::Fade => "fade",
            EntranceKind::Slide => "slide",
            EntranceKind::Zoom => "zoom",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            EntranceKind::Fade => "entrance-fade",
            EntranceKind::Slide => "entrance-slide",
            EntranceKind::Zoom => "entrance-zoom",
        }
    }
}

/// Keyframes for all three entrances. Emitted once per page.
pub fn style_block() -> &'static str {
    "<style>\
     .entrance-fade{animation:entrance-fade 0.5s ease-out both}\
     .entrance-slide{animation:entrance-slide 0.5s ease-out both}\
     .entrance-zoom{animation:entrance-zoom 0.5s ease-out both}\
     @keyframes entrance-fade{from{opacity:0}to{opacity:1}}\
     @keyframes entrance-slide{from{opacity:0;transform:translateY(24px)}to{opacity:1;transform:none}}\
     @keyframes entrance-zoom{from{opacity:0;transform:scale(0.92)}to{opacity:1;transform:scale(1)}}\
     </style>"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_entrance_falls_back_to_fade() {
        assert_eq!(EntranceKind::parse("slide"), EntranceKind::Slide);
        assert_eq!(EntranceKind::parse("zoom"), EntranceKind::Zoom);
        assert_eq!(EntranceKind::parse("spiral"), EntranceKind::Fade);
    }

    #[test]
    fn every_class_has_keyframes() {
        let css = style_block();
        for kind in EntranceKind::ALL {
            assert!(css.contains(kind.class()));
        }
    }
}
