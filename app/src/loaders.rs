// Page loader overlay. The original showed it for a fixed delay before
// revealing the card; the static export reproduces that with a CSS
// animation that fades the overlay out and drops it from hit testing.

use tapcard_style::Theme;

/// How long the overlay stays up before dismissing itself.
pub const DISMISS_AFTER_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderKind {
    #[default]
    Spinner,
    Dots,
    Progress,
}

impl LoaderKind {
    pub const ALL: [LoaderKind; 3] = [LoaderKind::Spinner, LoaderKind::Dots, LoaderKind::Progress];

    /// Unknown ids fall back to the spinner.
    pub fn parse(value: &str) -> LoaderKind {
        match value {
            "dots" => LoaderKind::Dots,
            "progress" => LoaderKind::Progress,
            _ => LoaderKind::Spinner,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoaderKind::Spinner => "spinner",
            LoaderKind::Dots => "dots",
            LoaderKind::Progress => "progress",
        }
    }
}

/// Overlay markup plus the style block driving it. `accent` colors the
/// indicator; the backdrop follows the page theme.
pub fn render(kind: LoaderKind, theme: Theme, accent: &str) -> String {
    let backdrop = match theme {
        Theme::Light => "#f3f4f6",
        Theme::Dark => "#111827",
        Theme::Default => "#0A0B14",
    };
    let indicator = match kind {
        LoaderKind::Spinner => format!(
            "<div style=\"width:48px;height:48px;border:4px solid {accent};\
             border-top-color:transparent;border-radius:9999px;\
             animation:loader-spin 1s linear infinite\"></div>"
        ),
        LoaderKind::Dots => {
            let mut dots = String::new();
            for i in 0..3 {
                let delay = i as f32 * 0.15;
                dots.push_str(&format!(
                    "<div style=\"width:12px;height:12px;border-radius:9999px;\
                     background:{accent};animation:loader-bounce 0.6s ease-in-out {delay}s infinite alternate\"></div>"
                ));
            }
            format!("<div style=\"display:flex;gap:8px\">{dots}</div>")
        }
        LoaderKind::Progress => format!(
            "<div style=\"width:192px;height:8px;border-radius:9999px;\
             background:rgba(128,128,128,0.25);overflow:hidden\">\
             <div style=\"height:100%;background:{accent};\
             animation:loader-fill {DISMISS_AFTER_MS}ms ease-out forwards\"></div></div>"
        ),
    };
    format!(
        "<style>\
         .loader-overlay{{position:fixed;inset:0;z-index:50;display:flex;align-items:center;\
         justify-content:center;background:{backdrop};\
         animation:loader-dismiss 0.4s ease-out {DISMISS_AFTER_MS}ms forwards}}\
         @keyframes loader-dismiss{{to{{opacity:0;visibility:hidden}}}}\
         @keyframes loader-spin{{to{{transform:rotate(360deg)}}}}\
         @keyframes loader-bounce{{to{{transform:translateY(-12px)}}}}\
         @keyframes loader-fill{{from{{width:0}}to{{width:100%}}}}\
         </style><div class=\"loader-overlay\">{indicator}</div>"
    )
}
