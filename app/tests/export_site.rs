// End-to-end export: profile in, static site plus contact file out.

use std::fs;

use tapcard_app::page;
use tapcard_app::profile::Profile;
use tapcard_config::{Settings, SettingsPatch, SettingsStore};

fn settings_with(patch: SettingsPatch) -> Settings {
    let store = SettingsStore::new();
    store.update(patch);
    store.settings()
}

#[test]
fn sample_export_matches_the_golden_contact_file() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = page::export_site(&Profile::sample(), &Settings::default(), dir.path()).unwrap();

    let expected = "BEGIN:VCARD\nVERSION:3.0\n\
                    N:Doe;Jane;;;\n\
                    FN:Jane Doe\n\
                    TITLE:Product Designer\n\
                    TEL;type=CELL:5550102030\n\
                    EMAIL;type=INTERNET:jane@example.com\n\
                    URL:https://jane.example\n\
                    END:VCARD";
    assert_eq!(fs::read_to_string(&manifest.vcf).unwrap(), expected);
    assert_eq!(manifest.vcf.file_name().unwrap(), "Jane_Doe.vcf");
}

#[test]
fn exported_page_is_self_contained() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = page::export_site(&Profile::sample(), &Settings::default(), dir.path()).unwrap();
    let html = fs::read_to_string(&manifest.index).unwrap();

    // no external fetches: every style is inline, the only link targets
    // are the contact file and the profile's own urls
    assert!(!html.contains("<link"));
    assert!(!html.contains("<script"));
    assert!(html.contains("href=\"Jane_Doe.vcf\" download"));
}

#[test]
fn every_preset_renders_a_complete_page() {
    for preset in [
        "default",
        "glass",
        "neomorphic",
        "retro",
        "minimal",
        "cyber",
        "material",
    ] {
        let settings = settings_with(SettingsPatch {
            component_style: Some(preset.into()),
            ..Default::default()
        });
        let html = page::render_page(&Profile::sample(), &settings);
        assert!(html.starts_with("<!DOCTYPE html>"), "{preset}");
        assert!(html.contains("Jane Doe"), "{preset}");
        assert!(html.contains("Save Contact"), "{preset}");
    }
}

#[test]
fn every_background_renders_under_every_theme() {
    for theme in ["default", "dark", "light"] {
        for background in [
            "boxes",
            "particles",
            "waves",
            "letterGlitch",
            "honeycomb",
            "gridPattern",
            "cubes",
            "darkPattern",
            "isoCubes",
            "trianglePattern",
            "trippyCircles",
            "cubicHoles",
        ] {
            let settings = settings_with(SettingsPatch {
                theme: Some(theme.into()),
                background_animation: Some(background.into()),
                ..Default::default()
            });
            let html = page::render_page(&Profile::sample(), &settings);
            assert!(html.contains("bg-layer"), "{theme}/{background}");
        }
    }
}

#[test]
fn rendering_the_same_inputs_twice_is_byte_identical() {
    let settings = settings_with(SettingsPatch {
        theme: Some("dark".into()),
        component_style: Some("glass".into()),
        profile_color: Some("#EC4899".into()),
        background_animation: Some("particles".into()),
        ..Default::default()
    });
    let a = page::render_page(&Profile::sample(), &settings);
    let b = page::render_page(&Profile::sample(), &settings);
    assert_eq!(a, b);
}

#[test]
fn profile_from_toml_flows_through_to_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.toml");
    fs::write(
        &path,
        r#"
            tagline = "Analytical Engine Programmer"

            [contact]
            first_name = "Ada"
            last_name = "Lovelace"
            email = "ada@example.org"

            [[links]]
            label = "Notes"
            href = "https://ada.example.org/notes"
        "#,
    )
    .unwrap();

    let profile = Profile::load(&path).unwrap();
    let html = page::render_page(&profile, &Settings::default());
    assert!(html.contains("<title>Ada Lovelace</title>"));
    assert!(html.contains("Analytical Engine Programmer"));
    assert!(html.contains("https://ada.example.org/notes"));
    assert!(html.contains("href=\"Ada_Lovelace.vcf\""));
}
