// Static page export. Renders the card to one self-contained HTML
// document plus the contact file next to it. The class vocabulary the
// resolver emits is translated to real CSS here, one attribute-selector
// rule per token, so bracketed class names need no escaping.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tapcard_config::Settings;
use tapcard_style::{resolve, resolve_button, profile_color, ButtonSize, Theme, Variant};
use tapcard_vcard::{export, vcf, ExportError};

use crate::backgrounds::{self, BackgroundKind};
use crate::entrance::{self, EntranceKind};
use crate::loaders::{self, LoaderKind};
use crate::profile::Profile;

#[derive(Debug)]
pub enum SiteError {
    CreateDir(PathBuf, io::Error),
    Write(PathBuf, io::Error),
    Vcf(ExportError),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::CreateDir(path, e) => write!(f, "cannot create {}: {}", path.display(), e),
            SiteError::Write(path, e) => write!(f, "cannot write {}: {}", path.display(), e),
            SiteError::Vcf(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteError::CreateDir(_, e) | SiteError::Write(_, e) => Some(e),
            SiteError::Vcf(e) => Some(e),
        }
    }
}

impl From<ExportError> for SiteError {
    fn from(e: ExportError) -> Self {
        SiteError::Vcf(e)
    }
}

/// Paths written by [`export_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteManifest {
    pub index: PathBuf,
    pub vcf: PathBuf,
}

/// Write `index.html` and the contact file into `dir`.
pub fn export_site(
    profile: &Profile,
    settings: &Settings,
    dir: &Path,
) -> Result<SiteManifest, SiteError> {
    fs::create_dir_all(dir).map_err(|e| SiteError::CreateDir(dir.to_path_buf(), e))?;
    let vcf_path = export::write_vcf(&profile.contact, dir)?;
    let index = dir.join("index.html");
    let html = render_page(profile, settings);
    fs::write(&index, html).map_err(|e| SiteError::Write(index.clone(), e))?;
    log::info!("exported site to {}", dir.display());
    Ok(SiteManifest { index, vcf: vcf_path })
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn style_attr_fragment(style: &tapcard_style::ResolvedStyle) -> String {
    if style.inline.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", style.style_attr())
    }
}

/// Render the whole card page as one HTML document.
pub fn render_page(profile: &Profile, settings: &Settings) -> String {
    let theme = Theme::parse(&settings.theme).unwrap_or_default();
    let accent = profile_color(settings);
    let entrance = EntranceKind::parse(&settings.page_entrance);
    let loader = LoaderKind::parse(&settings.page_loader);
    let background = BackgroundKind::parse(&settings.background_animation)
        .unwrap_or(BackgroundKind::Boxes);

    let card = resolve(settings, Variant::Card);
    let link_card = resolve(settings, Variant::Input);
    let save = resolve_button(settings, ButtonSize::Xl);

    let mut used: BTreeSet<String> = BTreeSet::new();
    for style in [&card, &link_card, &save] {
        for class in &style.classes {
            for token in class.split_whitespace() {
                used.insert(token.to_string());
            }
        }
    }
    for token in theme.page_classes().split_whitespace() {
        used.insert(token.to_string());
    }

    let contact = &profile.contact;
    let full_name = contact.full_name();
    let vcf_name = vcf::file_name(contact);

    let banner = banner_markup(settings, accent);
    let avatar = avatar_markup(settings, accent, &full_name);

    let tagline = profile
        .tagline
        .as_deref()
        .map(|t| format!("<p class=\"tagline\">{}</p>", escape(t)))
        .unwrap_or_default();

    let mut details = String::new();
    for line in &profile.details {
        details.push_str(&format!("<p class=\"detail\">{}</p>", escape(line)));
    }

    let links = links_markup(profile, settings, &link_card);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>{base}</style>\n\
         <style>{utility}</style>\n\
         {entrance_css}\n\
         </head>\n\
         <body class=\"{page_classes} theme-{theme_id}\">\n\
         {background}\n\
         {loader}\n\
         <main class=\"card-shell {entrance_class}\">\n\
         <section class=\"{card_classes}\"{card_style}>\n\
         {banner}\n{avatar}\n\
         <h1 class=\"name\">{name}</h1>\n\
         {tagline}\n{details}\n\
         <div class=\"links\">{links}</div>\n\
         <a class=\"save {save_classes}\"{save_style} href=\"{vcf_href}\" download>Save Contact</a>\n\
         </section>\n\
         </main>\n\
         </body>\n</html>\n",
        title = escape(&full_name),
        base = base_css(accent),
        utility = utility_css(&used),
        entrance_css = entrance::style_block(),
        page_classes = theme.page_classes(),
        theme_id = theme.as_str(),
        background = backgrounds::render(background, theme, accent),
        loader = loaders::render(loader, theme, accent),
        entrance_class = entrance.class(),
        card_classes = card.class_attr(),
        card_style = style_attr_fragment(&card),
        banner = banner,
        avatar = avatar,
        name = escape(&full_name),
        tagline = tagline,
        details = details,
        links = links,
        save_classes = save.class_attr(),
        save_style = style_attr_fragment(&save),
        vcf_href = escape(&vcf_name),
    )
}

fn banner_markup(settings: &Settings, accent: &str) -> String {
    let zoom = (settings.banner_zoom.clamp(0.5, 2.0) * 100.0) as i32;
    let pos = settings.banner_position;
    match settings.banner_image.as_deref() {
        Some(uri) => format!(
            "<div class=\"banner\" style=\"background-image:url('{}');\
             background-size:{zoom}%;background-position:center;\
             transform:translate({}px,{}px)\"></div>",
            escape(uri),
            pos.x,
            pos.y
        ),
        // placeholder gradient tinted with the accent at 25% alpha
        None => format!(
            "<div class=\"banner\" style=\"background:linear-gradient(135deg,{accent}40,transparent)\"></div>"
        ),
    }
}

fn avatar_markup(settings: &Settings, accent: &str, full_name: &str) -> String {
    let zoom = (settings.profile_zoom.clamp(0.5, 2.0) * 100.0) as i32;
    let pos = settings.profile_position;
    match settings.profile_image.as_deref() {
        Some(uri) => format!(
            "<div class=\"avatar\" style=\"background-image:url('{}');\
             background-size:{zoom}%;background-position:center;\
             transform:translate({}px,{}px)\"></div>",
            escape(uri),
            pos.x,
            pos.y
        ),
        None => {
            let initial = full_name.chars().next().unwrap_or('?');
            format!(
                "<div class=\"avatar\" style=\"background:{accent};display:flex;\
                 align-items:center;justify-content:center;color:white;\
                 font-size:2rem;font-weight:700\">{}</div>",
                escape(&initial.to_string())
            )
        }
    }
}

fn links_markup(
    profile: &Profile,
    settings: &Settings,
    link_card: &tapcard_style::ResolvedStyle,
) -> String {
    // grid | masonry | list, defaulting to grid for anything else
    let card_style = settings
        .layout
        .as_ref()
        .and_then(|l| l.card_style.as_deref())
        .unwrap_or("grid");
    let layout_class = match card_style {
        "masonry" => "links-masonry",
        "list" => "links-list",
        _ => "links-grid",
    };

    let mut out = format!("<div class=\"{layout_class}\">");
    for link in &profile.links {
        let value = link
            .value
            .as_deref()
            .map(|v| format!("<span class=\"link-value\">{}</span>", escape(v)))
            .unwrap_or_default();
        out.push_str(&format!(
            "<a class=\"link {classes}\"{style} href=\"{href}\">\
             <span class=\"link-label\">{label}</span>{value}</a>",
            classes = link_card.class_attr(),
            style = style_attr_fragment(link_card),
            href = escape(&link.href),
            label = escape(&link.label),
        ));
    }
    out.push_str("</div>");
    out
}

// ============================================================================
// CSS
// ============================================================================

fn base_css(accent: &str) -> String {
    format!(
        "*{{box-sizing:border-box;margin:0}}\
         html,body{{min-height:100%}}\
         body{{font-family:system-ui,sans-serif;position:relative;overflow-x:hidden}}\
         .bg-layer{{position:fixed;inset:0;z-index:-1;overflow:hidden}}\
         .card-shell{{max-width:28rem;margin:0 auto;padding:1.5rem;min-height:100vh;\
         display:flex;flex-direction:column;justify-content:center}}\
         .banner{{height:8rem;border-radius:0.75rem 0.75rem 0 0;background-repeat:no-repeat}}\
         .avatar{{width:6rem;height:6rem;border-radius:9999px;margin:-3rem auto 0;\
         background-repeat:no-repeat;border:4px solid rgba(255,255,255,0.2);overflow:hidden}}\
         .name{{text-align:center;margin-top:0.75rem;font-size:1.5rem}}\
         .tagline{{text-align:center;opacity:0.8}}\
         .detail{{text-align:center;font-size:0.875rem;opacity:0.6;margin-top:0.25rem}}\
         .links{{margin-top:1.25rem}}\
         .links-grid{{display:grid;grid-template-columns:repeat(2,1fr);gap:0.75rem}}\
         .links-masonry{{columns:2;column-gap:0.75rem}}\
         .links-masonry .link{{break-inside:avoid;margin-bottom:0.75rem}}\
         .links-list{{display:flex;flex-direction:column;gap:0.75rem}}\
         .link{{display:flex;flex-direction:column;gap:0.125rem;text-decoration:none;\
         color:inherit;padding:0.75rem}}\
         .link:hover{{outline:1px solid {accent}}}\
         .link-label{{font-weight:600;font-size:0.875rem}}\
         .link-value{{font-size:0.75rem;opacity:0.7}}\
         .save{{display:flex;align-items:center;justify-content:center;margin-top:1.25rem;\
         text-decoration:none;color:inherit;cursor:pointer}}"
    )
}

/// One `[class~="token"]` rule per vocabulary token. Tokens with no
/// static equivalent (hover opacity tweaks and the like) are skipped.
fn utility_css(used: &BTreeSet<String>) -> String {
    let mut out = String::new();
    for token in used {
        if let Some(rule) = rule_for(token) {
            out.push_str(&rule);
        }
    }
    out
}

fn rule_for(token: &str) -> Option<String> {
    // state and theme prefixes recurse on the bare token
    if let Some(rest) = token.strip_prefix("hover:") {
        let body = declarations_for(rest)?;
        return Some(format!("[class~=\"{token}\"]:hover{{{body}}}"));
    }
    if let Some(rest) = token.strip_prefix("active:") {
        let body = declarations_for(rest)?;
        return Some(format!("[class~=\"{token}\"]:active{{{body}}}"));
    }
    if let Some(rest) = token.strip_prefix("dark:") {
        let body = declarations_for(rest)?;
        return Some(format!(".theme-dark [class~=\"{token}\"]{{{body}}}"));
    }
    let body = declarations_for(token)?;
    Some(format!("[class~=\"{token}\"]{{{body}}}"))
}

fn declarations_for(token: &str) -> Option<String> {
    // arbitrary-value tokens first
    if let Some(inner) = token.strip_prefix("shadow-[").and_then(|t| t.strip_suffix(']')) {
        return Some(format!("box-shadow:{}", inner.replace('_', " ")));
    }
    if let Some(inner) = token.strip_prefix("bg-[").and_then(|t| t.strip_suffix(']')) {
        return Some(format!("background-color:{inner}"));
    }
    if let Some(inner) = token.strip_prefix("min-h-[").and_then(|t| t.strip_suffix(']')) {
        return Some(format!("min-height:{inner}"));
    }

    let css = match token {
        "backdrop-blur-md" => "backdrop-filter:blur(12px)",
        "border" => "border:1px solid",
        "border-2" => "border:2px solid",
        "border-b-4" => "border-bottom-width:4px",
        "border-r-4" => "border-right-width:4px",
        "border-cyan-400" => "border-color:#22d3ee",
        "border-border" => "border-color:rgba(128,128,128,0.3)",
        "bg-background" => "background-color:rgba(128,128,128,0.08)",
        "bg-gray-100" => "background-color:#f3f4f6",
        "bg-gray-800" => "background-color:#1f2937",
        "bg-gray-900" => "background-color:#111827",
        "bg-purple-900" => "background-color:#581c87",
        "text-white" => "color:#ffffff",
        "text-gray-900" => "color:#111827",
        "text-pink-200" => "color:#fbcfe8",
        "text-pink-300" => "color:#f9a8d4",
        "rounded-none" => "border-radius:0",
        "rounded" => "border-radius:0.25rem",
        "rounded-xl" => "border-radius:0.75rem",
        "rounded-3xl" => "border-radius:1.5rem",
        "shadow-none" => "box-shadow:none",
        "shadow-sm" => "box-shadow:0 1px 2px rgba(0,0,0,0.05)",
        "shadow-md" => "box-shadow:0 4px 6px rgba(0,0,0,0.1)",
        "shadow-lg" => "box-shadow:0 10px 15px rgba(0,0,0,0.1)",
        "shadow-2xl" => "box-shadow:0 25px 50px rgba(0,0,0,0.25)",
        "p-2" => "padding:0.5rem",
        "p-4" => "padding:1rem",
        "p-8" => "padding:2rem",
        "px-3" => "padding-left:0.75rem;padding-right:0.75rem",
        "px-5" => "padding-left:1.25rem;padding-right:1.25rem",
        "px-7" => "padding-left:1.75rem;padding-right:1.75rem",
        "px-9" => "padding-left:2.25rem;padding-right:2.25rem",
        "py-1.5" => "padding-top:0.375rem;padding-bottom:0.375rem",
        "py-2.5" => "padding-top:0.625rem;padding-bottom:0.625rem",
        "py-3.5" => "padding-top:0.875rem;padding-bottom:0.875rem",
        "py-5" => "padding-top:1.25rem;padding-bottom:1.25rem",
        "text-sm" => "font-size:0.875rem",
        "text-base" => "font-size:1rem",
        "text-lg" => "font-size:1.125rem",
        "text-xl" => "font-size:1.25rem",
        "font-bold" => "font-weight:700",
        "transition-all" => "transition:all 0.15s",
        "transition-colors" => "transition:color 0.15s,background-color 0.15s,border-color 0.15s",
        "transition-shadow" => "transition:box-shadow 0.15s",
        _ => return None,
    };
    Some(css.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapcard_config::{LayoutSettings, SettingsPatch};

    fn settings_with(patch: SettingsPatch) -> Settings {
        let mut s = Settings::default();
        s.apply(patch);
        s
    }

    #[test]
    fn page_carries_theme_loader_background_and_entrance() {
        let settings = settings_with(SettingsPatch {
            theme: Some("dark".into()),
            background_animation: Some("gridPattern".into()),
            page_loader: Some("dots".into()),
            page_entrance: Some("zoom".into()),
            ..Default::default()
        });
        let html = render_page(&Profile::sample(), &settings);
        assert!(html.contains("bg-gray-900 text-white theme-dark"));
        assert!(html.contains("loader-bounce"));
        assert!(html.contains("background-size:50px 50px"));
        assert!(html.contains("entrance-zoom"));
    }

    #[test]
    fn save_button_links_to_the_contact_file() {
        let html = render_page(&Profile::sample(), &Settings::default());
        assert!(html.contains("href=\"Jane_Doe.vcf\" download"));
        assert!(html.contains("Save Contact"));
        // caller-chosen XL sizing on the save button
        assert!(html.contains("px-9 py-5 text-xl"));
    }

    #[test]
    fn unknown_settings_values_fall_back_at_render_time() {
        let settings = settings_with(SettingsPatch {
            theme: Some("sepia".into()),
            background_animation: Some("lavaLamp".into()),
            page_loader: Some("hourglass".into()),
            page_entrance: Some("spiral".into()),
            ..Default::default()
        });
        let html = render_page(&Profile::sample(), &settings);
        assert!(html.contains("theme-default"));
        assert!(html.contains("entrance-fade"));
        assert!(html.contains("loader-spin"));
        assert!(html.contains("bg-boxes"));
    }

    #[test]
    fn card_style_switches_the_links_layout() {
        for (value, class) in [
            ("grid", "links-grid"),
            ("masonry", "links-masonry"),
            ("list", "links-list"),
            ("mosaic", "links-grid"),
        ] {
            let settings = settings_with(SettingsPatch {
                layout: Some(LayoutSettings {
                    card_style: Some(value.into()),
                    ..LayoutSettings::default()
                }),
                ..Default::default()
            });
            let html = render_page(&Profile::sample(), &settings);
            assert!(html.contains(class), "{value} should render {class}");
        }
    }

    #[test]
    fn utility_rules_cover_emitted_classes() {
        let html = render_page(&Profile::sample(), &Settings::default());
        assert!(html.contains("[class~=\"rounded-xl\"]{border-radius:0.75rem}"));
        assert!(html.contains("[class~=\"shadow-md\"]{box-shadow:0 4px 6px rgba(0,0,0,0.1)}"));
        assert!(html.contains("[class~=\"p-4\"]{padding:1rem}"));
    }

    #[test]
    fn arbitrary_value_tokens_get_attribute_selector_rules() {
        let settings = settings_with(SettingsPatch {
            component_style: Some("retro".into()),
            ..Default::default()
        });
        let html = render_page(&Profile::sample(), &settings);
        assert!(html.contains(
            "[class~=\"shadow-[0_0_10px_rgba(0,255,255,0.7),inset_0_0_10px_rgba(255,0,255,0.4)]\"]\
             {box-shadow:0 0 10px rgba(0,255,255,0.7),inset 0 0 10px rgba(255,0,255,0.4)}"
        ));
    }

    #[test]
    fn banner_honors_zoom_and_position() {
        let settings = settings_with(SettingsPatch {
            banner_image: Some(Some("data:image/png;base64,AAAA".into())),
            banner_zoom: Some(1.5),
            banner_position: Some(tapcard_config::Position { x: 10.0, y: -4.0 }),
            ..Default::default()
        });
        let html = render_page(&Profile::sample(), &settings);
        assert!(html.contains("background-size:150%"));
        assert!(html.contains("translate(10px,-4px)"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut profile = Profile::sample();
        profile.tagline = Some("Design & <Code>".into());
        let html = render_page(&profile, &Settings::default());
        assert!(html.contains("Design &amp; &lt;Code&gt;"));
    }

    #[test]
    fn export_site_writes_page_and_contact_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");
        let manifest = export_site(&Profile::sample(), &Settings::default(), &out).unwrap();
        assert_eq!(manifest.index.file_name().unwrap(), "index.html");
        assert_eq!(manifest.vcf.file_name().unwrap(), "Jane_Doe.vcf");
        let html = fs::read_to_string(&manifest.index).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        let card = fs::read_to_string(&manifest.vcf).unwrap();
        assert!(card.starts_with("BEGIN:VCARD\nVERSION:3.0\n"));
        assert!(card.ends_with("END:VCARD"));
    }
}
