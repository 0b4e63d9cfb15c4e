// Decorative full-viewport backgrounds: a pattern id + theme + accent in,
// a markup string out. Pure lookup table, no shared state. Where the
// interactive original randomized durations and positions, the exporter
// derives them from the element index so output stays byte-stable.

use tapcard_config::Color;
use tapcard_style::Theme;

/// The twelve decorative pattern ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    Boxes,
    Particles,
    Waves,
    LetterGlitch,
    Honeycomb,
    GridPattern,
    Cubes,
    DarkPattern,
    IsoCubes,
    TrianglePattern,
    TrippyCircles,
    CubicHoles,
}

impl BackgroundKind {
    pub const ALL: [BackgroundKind; 12] = [
        BackgroundKind::Boxes,
        BackgroundKind::Particles,
        BackgroundKind::Waves,
        BackgroundKind::LetterGlitch,
        BackgroundKind::Honeycomb,
        BackgroundKind::GridPattern,
        BackgroundKind::Cubes,
        BackgroundKind::DarkPattern,
        BackgroundKind::IsoCubes,
        BackgroundKind::TrianglePattern,
        BackgroundKind::TrippyCircles,
        BackgroundKind::CubicHoles,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "boxes" => Some(BackgroundKind::Boxes),
            "particles" => Some(BackgroundKind::Particles),
            "waves" => Some(BackgroundKind::Waves),
            "letterGlitch" => Some(BackgroundKind::LetterGlitch),
            "honeycomb" => Some(BackgroundKind::Honeycomb),
            "gridPattern" => Some(BackgroundKind::GridPattern),
            "cubes" => Some(BackgroundKind::Cubes),
            "darkPattern" => Some(BackgroundKind::DarkPattern),
            "isoCubes" => Some(BackgroundKind::IsoCubes),
            "trianglePattern" => Some(BackgroundKind::TrianglePattern),
            "trippyCircles" => Some(BackgroundKind::TrippyCircles),
            "cubicHoles" => Some(BackgroundKind::CubicHoles),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundKind::Boxes => "boxes",
            BackgroundKind::Particles => "particles",
            BackgroundKind::Waves => "waves",
            BackgroundKind::LetterGlitch => "letterGlitch",
            BackgroundKind::Honeycomb => "honeycomb",
            BackgroundKind::GridPattern => "gridPattern",
            BackgroundKind::Cubes => "cubes",
            BackgroundKind::DarkPattern => "darkPattern",
            BackgroundKind::IsoCubes => "isoCubes",
            BackgroundKind::TrianglePattern => "trianglePattern",
            BackgroundKind::TrippyCircles => "trippyCircles",
            BackgroundKind::CubicHoles => "cubicHoles",
        }
    }
}

/// Full-viewport markup for the selected pattern. Unknown pattern ids
/// are the caller's problem; consumers parse with a fallback first.
pub fn render(kind: BackgroundKind, theme: Theme, accent: &str) -> String {
    match kind {
        BackgroundKind::Boxes => boxes(accent),
        BackgroundKind::Particles => particles(accent),
        BackgroundKind::Waves => waves(accent),
        BackgroundKind::LetterGlitch => letter_glitch(theme),
        BackgroundKind::Honeycomb => honeycomb(theme),
        BackgroundKind::GridPattern => grid_pattern(theme),
        BackgroundKind::Cubes => cubes(theme),
        BackgroundKind::DarkPattern => dark_pattern(theme),
        BackgroundKind::IsoCubes => iso_cubes(theme),
        BackgroundKind::TrianglePattern => triangle_pattern(theme),
        BackgroundKind::TrippyCircles => trippy_circles(theme),
        BackgroundKind::CubicHoles => cubic_holes(),
    }
}

fn accent_rgba(accent: &str, alpha: f32) -> String {
    Color::parse_hex(accent)
        .unwrap_or(Color::from_rgb(0.231, 0.510, 0.965)) // #3B82F6
        .to_rgba_string(alpha)
}

// 6x6 grid of slowly spinning outlined boxes.
fn boxes(accent: &str) -> String {
    let ink = accent_rgba(accent, 0.2);
    let mut cells = String::new();
    for i in 0..36 {
        // spread durations 20..30s and negative delays so cells desync
        let duration = 20 + (i * 7) % 10;
        let delay = (i * 11) % 20;
        cells.push_str(&format!(
            "<div class=\"bg-box\" style=\"animation-duration:{duration}s;animation-delay:-{delay}s\"></div>"
        ));
    }
    format!(
        "<style>\
         .bg-boxes{{display:grid;grid-template-columns:repeat(6,1fr);grid-template-rows:repeat(6,1fr);gap:16px;padding:16px;opacity:0.2}}\
         .bg-box{{border:1px solid {ink};border-radius:2px;animation-name:bg-box-spin;animation-iteration-count:infinite;animation-timing-function:linear}}\
         @keyframes bg-box-spin{{0%{{transform:rotate(0deg) scale(1)}}50%{{transform:rotate(180deg) scale(1.2)}}100%{{transform:rotate(360deg) scale(1)}}}}\
         </style><div class=\"bg-layer bg-boxes\">{cells}</div>"
    )
}

// Drifting translucent dots; positions derived from the index.
fn particles(accent: &str) -> String {
    let ink = accent_rgba(accent, 1.0);
    let mut dots = String::new();
    for i in 0..50 {
        let x = (i * 37) % 100;
        let y = (i * 61) % 100;
        let dx = ((i * 13) % 40) as i32 - 20;
        let dy = ((i * 29) % 40) as i32 - 20;
        let duration = 10 + (i * 3) % 20;
        let opacity = 0.2 + ((i % 4) as f32) * 0.1;
        dots.push_str(&format!(
            "<div class=\"bg-dot\" style=\"left:{x}%;top:{y}%;opacity:{opacity};\
             --drift-x:{dx}vw;--drift-y:{dy}vh;animation-duration:{duration}s\"></div>"
        ));
    }
    format!(
        "<style>\
         .bg-dot{{position:absolute;width:8px;height:8px;border-radius:9999px;background:{ink};\
         animation-name:bg-dot-drift;animation-iteration-count:infinite;animation-direction:alternate;animation-timing-function:ease-in-out}}\
         @keyframes bg-dot-drift{{to{{transform:translate(var(--drift-x),var(--drift-y))}}}}\
         </style><div class=\"bg-layer\">{dots}</div>"
    )
}

// Three stacked bands swaying near the bottom edge.
fn waves(accent: &str) -> String {
    let mut bands = String::new();
    for i in 0..3u32 {
        let opacity = 0.1 - (i as f32) * 0.02;
        let scale = 1.0 - (i as f32) * 0.2;
        let duration = 10 + i * 2;
        bands.push_str(&format!(
            "<div class=\"bg-wave\" style=\"opacity:{opacity:.2};transform:scaleY({scale:.1});\
             animation-duration:{duration}s\"></div>"
        ));
    }
    let ink = accent_rgba(accent, 1.0);
    format!(
        "<style>\
         .bg-wave{{position:absolute;bottom:0;left:0;right:0;height:16rem;background:{ink};\
         animation-name:bg-wave-sway;animation-iteration-count:infinite;animation-timing-function:ease-in-out}}\
         @keyframes bg-wave-sway{{0%,100%{{translate:0 -5%}}50%{{translate:0 5%}}}}\
         </style><div class=\"bg-layer\">{bands}</div>"
    )
}

// Flickering monospace glyph field with per-theme palettes.
fn letter_glitch(theme: Theme) -> String {
    let (backdrop, palette) = match theme {
        Theme::Light => ("#404040", ["#505050", "#404040", "#303030"]),
        Theme::Dark => ("#121212", ["#121212", "#1e1e1e", "#2a2a2a"]),
        Theme::Default => ("#121212", ["#0A0B14", "#161827", "#1f2235"]),
    };
    const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789#$%&*+-";
    let mut cells = String::new();
    for i in 0..240 {
        let glyph = GLYPHS[(i * 17) % GLYPHS.len()] as char;
        let color = palette[i % 3];
        let delay = (i * 7) % 30;
        cells.push_str(&format!(
            "<span style=\"color:{color};animation-delay:-{delay}.0s\">{glyph}</span>"
        ));
    }
    format!(
        "<style>\
         .bg-glitch{{background:{backdrop};font-family:monospace;font-size:18px;line-height:1.4;\
         display:flex;flex-wrap:wrap;align-content:flex-start;overflow:hidden}}\
         .bg-glitch span{{padding:2px 6px;animation:bg-glitch-flicker 3s steps(2,jump-none) infinite}}\
         @keyframes bg-glitch-flicker{{0%,70%{{opacity:1}}85%{{opacity:0.35}}100%{{opacity:1}}}}\
         </style><div class=\"bg-layer bg-glitch\">{cells}</div>"
    )
}

// Tiled hexagon lattice built from three offset conic gradients.
fn honeycomb(theme: Theme) -> String {
    let (bg, hex) = match theme {
        Theme::Light => ("#f5f5f5", "#d0d0d0"),
        Theme::Dark => ("#1e1e1e", "#282828"),
        Theme::Default => ("#0A0B14", "#161827"),
    };
    let s = "37px";
    format!(
        "<div class=\"bg-layer\" style=\"background-color:{bg};background:\
         conic-gradient(from 60deg at 56.25% calc(425% / 6),#0000,{hex} 0.5deg 119.5deg,#0000 120deg),\
         conic-gradient(from 60deg at 56.25% calc(425% / 6),#0000,{hex} 0.5deg 119.5deg,#0000 120deg) {s} calc(1.73 * {s}),\
         conic-gradient(from 180deg at 43.75% calc(425% / 6),#0000,{hex} 0.5deg 119.5deg,#0000 120deg),\
         conic-gradient(from 180deg at 43.75% calc(425% / 6),#0000,{hex} 0.5deg 119.5deg,#0000 120deg) {s} calc(1.73 * {s}),\
         conic-gradient(from -60deg at 50% calc(175% / 12),#0000,{hex} 0.5deg 119.5deg,#0000 120deg) {s} 0,\
         conic-gradient(from -60deg at 50% calc(175% / 12),#0000,{hex} 0.5deg 119.5deg,#0000 120deg) 0 calc(1.73 * {s});\
         background-size:calc(2 * {s}) calc(3.46 * {s})\"></div>"
    )
}

// Simple 50px graph-paper grid.
fn grid_pattern(theme: Theme) -> String {
    let (bg, line) = match theme {
        Theme::Light => ("#f0f0f0", "rgba(0, 0, 0, 0.1)"),
        Theme::Dark => ("#000000", "rgba(255, 255, 255, 0.1)"),
        Theme::Default => ("#0A0B14", "rgba(255, 255, 255, 0.05)"),
    };
    format!(
        "<div class=\"bg-layer\" style=\"background-color:{bg};\
         background-image:linear-gradient({line} 1px,transparent 1px),\
         linear-gradient(90deg,{line} 1px,transparent 1px);background-size:50px 50px\"></div>"
    )
}

fn cube_gradients(c1: &str, c3: &str) -> String {
    format!(
        "linear-gradient(30deg,{c1} 12%,transparent 12.5%,transparent 87%,{c1} 87.5%,{c1}),\
         linear-gradient(150deg,{c1} 12%,transparent 12.5%,transparent 87%,{c1} 87.5%,{c1}),\
         linear-gradient(30deg,{c1} 12%,transparent 12.5%,transparent 87%,{c1} 87.5%,{c1}),\
         linear-gradient(150deg,{c1} 12%,transparent 12.5%,transparent 87%,{c1} 87.5%,{c1}),\
         linear-gradient(60deg,{c3} 25%,transparent 25.5%,transparent 75%,{c3} 75%,{c3})"
    )
}

fn cubes(theme: Theme) -> String {
    let (c1, c2, c3) = match theme {
        Theme::Light => ("#d9d9d9", "#b2b2b2", "#999999"),
        Theme::Dark => ("#2a2a2a", "#1e1e1e", "#121212"),
        Theme::Default => ("#161827", "#0A0B14", "#1f2235"),
    };
    format!(
        "<div class=\"bg-layer\" style=\"background-color:{c2};\
         background-image:{};background-size:80px 140px\"></div>",
        cube_gradients(c1, c3)
    )
}

// Gradient backdrop with a faint masked grid floating above it.
fn dark_pattern(theme: Theme) -> String {
    let (from, to) = match theme {
        Theme::Light => ("#ffffff", "#f9fafb"),
        Theme::Dark => ("#030712", "#1f2937"),
        Theme::Default => ("#0A0B14", "#161827"),
    };
    let grid = "#4f4f4f2e";
    format!(
        "<div class=\"bg-layer\" style=\"background:linear-gradient(to top,{from},{to})\">\
         <div style=\"position:absolute;inset:0;pointer-events:none;\
         background:linear-gradient(to right,{grid} 1px,transparent 1px),\
         linear-gradient(to bottom,{grid} 1px,transparent 1px);background-size:35px 34px;\
         mask-image:radial-gradient(ellipse 60% 50% at 50% 0%,#000 70%,transparent 100%)\"></div></div>"
    )
}

fn iso_cubes(theme: Theme) -> String {
    let (c1, c3, backdrop) = match theme {
        Theme::Light => ("#d9d9d9", "#b2b2b2", "#e5e5e5"),
        Theme::Dark => ("#1d1d1d", "#3c3c3c", "#222222"),
        Theme::Default => ("#0A0B14", "#1f2235", "#222222"),
    };
    format!(
        "<div class=\"bg-layer\" style=\"background-color:{backdrop};\
         background-image:{};background-size:40px 70px;\
         background-position:0 0,0 0,20px 35px,20px 35px,0 0\"></div>",
        cube_gradients(c1, c3)
    )
}

fn triangle_pattern(theme: Theme) -> String {
    let (c1, c2, c3) = match theme {
        Theme::Light => ("#f2f2f2", "#cdcbcc", "#999999"),
        Theme::Dark => ("#2a2a2a", "#1e1e1e", "#121212"),
        Theme::Default => ("#1f2235", "#161827", "#0A0B14"),
    };
    format!(
        "<div class=\"bg-layer\" style=\"background-image:\
         conic-gradient(from 0deg at calc(500% / 6) calc(100% / 3),{c3} 0 120deg,#0000 0),\
         conic-gradient(from -120deg at calc(100% / 6) calc(100% / 3),{c2} 0 120deg,#0000 0),\
         conic-gradient(from 120deg at calc(100% / 3) calc(500% / 6),{c1} 0 120deg,#0000 0),\
         conic-gradient(from 120deg at calc(200% / 3) calc(500% / 6),{c1} 0 120deg,#0000 0),\
         conic-gradient(from -180deg at calc(100% / 3) 50%,{c2} 60deg,{c1} 0 120deg,#0000 0),\
         conic-gradient(from 60deg at calc(200% / 3) 50%,{c1} 60deg,{c3} 0 120deg,#0000 0),\
         conic-gradient(from -60deg at 50% calc(100% / 3),{c1} 120deg,{c2} 0 240deg,{c3} 0);\
         background-size:calc(84px * 1.732) 84px\"></div>"
    )
}

fn trippy_circles(theme: Theme) -> String {
    let (c1, c2, c3) = match theme {
        Theme::Light => ("#e0e0e0", "#b0b0b0", "#d0d0d0"),
        Theme::Dark => ("#2a2a2a", "#1a1a1a", "#333333"),
        Theme::Default => ("#161827", "#0A0B14", "#1f2235"),
    };
    format!(
        "<div class=\"bg-layer\" style=\"background-color:{c2};background-image:\
         radial-gradient(circle at 50% 50%,{c1} 20%,transparent 20%),\
         radial-gradient(circle at 0% 50%,{c1} 10%,transparent 10%),\
         radial-gradient(circle at 100% 50%,{c1} 10%,transparent 10%),\
         radial-gradient(circle at 0% 0%,{c1} 10%,transparent 10%),\
         radial-gradient(circle at 100% 0%,{c1} 10%,transparent 10%),\
         radial-gradient(circle at 0% 100%,{c1} 10%,transparent 10%),\
         radial-gradient(circle at 100% 100%,{c1} 10%,transparent 10%),\
         radial-gradient(circle at 50% 0%,{c3} 30%,transparent 30%),\
         radial-gradient(circle at 50% 100%,{c3} 30%,transparent 30%);\
         background-size:100px 100px,50px 50px,50px 50px,50px 50px,50px 50px,50px 50px,50px 50px,100px 100px,100px 100px\"></div>"
    )
}

// Mauve lattice of inset squares; same palette in every theme.
fn cubic_holes() -> String {
    let (c1, c2, c3) = ("#7f727b", "#d6b4c2", "#baa0ab");
    let s = "111px";
    format!(
        "<div class=\"bg-layer\" style=\"background:\
         linear-gradient(145deg,{c1} 10%,{c2} 10.5% 19%,#0000 19.5% 80.5%,{c2} 81% 89.5%,{c3} 90%),\
         linear-gradient(145deg,{c1} 10%,{c2} 10.5% 19%,#0000 19.5% 80.5%,{c2} 81% 89.5%,{c3} 90%) calc({s} / 2) {s},\
         linear-gradient(35deg,{c1} 10%,{c2} 10.5% 19%,#0000 19.5% 80.5%,{c2} 81% 89.5%,{c3} 90%),\
         linear-gradient(35deg,{c1} 10%,{c2} 10.5% 19%,#0000 19.5% 80.5%,{c2} 81% 89.5%,{c3} 90%) calc({s} / 2) {s},\
         conic-gradient(from -90deg at 37.5% 50%,#0000 75%,{c1} 0) calc({s} / 8) 0,\
         conic-gradient(from -90deg at 37.5% 50%,#0000 75%,{c3} 0) calc({s} / 2) 0,\
         linear-gradient(90deg,{c3} 38%,{c1} 0 50%,{c3} 0 62%,{c1} 0);\
         background-size:{s} calc(2 * {s} / 3)\"></div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_all_twelve_ids() {
        for kind in BackgroundKind::ALL {
            assert_eq!(BackgroundKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(BackgroundKind::parse("lavaLamp"), None);
    }

    #[test]
    fn every_pattern_renders_a_fixed_layer() {
        for kind in BackgroundKind::ALL {
            let markup = render(kind, Theme::Default, "#3B82F6");
            assert!(markup.contains("bg-layer"), "{:?}", kind);
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        for kind in BackgroundKind::ALL {
            let a = render(kind, Theme::Dark, "#EC4899");
            let b = render(kind, Theme::Dark, "#EC4899");
            assert_eq!(a, b, "{:?}", kind);
        }
    }

    #[test]
    fn themed_patterns_change_with_the_theme() {
        let light = render(BackgroundKind::Honeycomb, Theme::Light, "#3B82F6");
        let dark = render(BackgroundKind::Honeycomb, Theme::Dark, "#3B82F6");
        assert_ne!(light, dark);
    }

    #[test]
    fn accent_patterns_tolerate_invalid_hex() {
        // permissive settings can hand us garbage; the renderer falls
        // back to the stock accent instead of panicking
        let markup = render(BackgroundKind::Particles, Theme::Default, "not-a-color");
        assert!(markup.contains("rgba(59,130,246,1)"));
    }
}
