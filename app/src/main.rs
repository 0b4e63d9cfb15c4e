// tapcard CLI - render the card site, emit the contact file, inspect
// resolved styles.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use tapcard_app::backgrounds::BackgroundKind;
use tapcard_app::entrance::EntranceKind;
use tapcard_app::loaders::LoaderKind;
use tapcard_app::page;
use tapcard_app::profile::Profile;
use tapcard_config::{is_valid_hex, store, SettingsPatch};
use tapcard_style::{resolve, resolve_button, ButtonSize, ComponentStyle, Theme, Variant};
use tapcard_vcard::{generate, write_vcf};

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_USAGE: u8 = 2;
const EXIT_IO_ERROR: u8 = 3;
const EXIT_PARSE_ERROR: u8 = 4;

/// Error carrying its exit code and an optional remediation hint.
struct CliError {
    code: u8,
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn usage(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            code: EXIT_USAGE,
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    fn io(message: impl Into<String>) -> Self {
        Self {
            code: EXIT_IO_ERROR,
            message: message.into(),
            hint: None,
        }
    }

    fn parse(message: impl Into<String>) -> Self {
        Self {
            code: EXIT_PARSE_ERROR,
            message: message.into(),
            hint: None,
        }
    }

    fn other(message: impl Into<String>) -> Self {
        Self {
            code: EXIT_ERROR,
            message: message.into(),
            hint: None,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "tapcard",
    version,
    about = "Digital business card: static site and contact file exporter",
    after_help = "EXAMPLES:\n    \
        tapcard render profile.toml -o site --style glass --color '#10B981'\n    \
        tapcard vcf profile.toml -o exports\n    \
        tapcard inspect button --size xl --style retro --json\n    \
        tapcard list presets"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Presentation overrides shared by `render` and `inspect`. Each flag
/// patches the settings store before the command runs.
#[derive(Args, Default)]
struct StyleFlags {
    /// Page theme: default | dark | light
    #[arg(long)]
    theme: Option<String>,

    /// Accent color, #RRGGBB
    #[arg(long)]
    color: Option<String>,

    /// Component preset: default | glass | neomorphic | retro | minimal | cyber | material
    #[arg(long)]
    style: Option<String>,

    /// Background pattern id (see `tapcard list backgrounds`)
    #[arg(long)]
    background: Option<String>,

    /// Loading indicator: spinner | dots | progress
    #[arg(long)]
    loader: Option<String>,

    /// Card entrance: fade | slide | zoom
    #[arg(long)]
    entrance: Option<String>,

    /// Corner rounding: none | small | medium | large
    #[arg(long)]
    radius: Option<String>,

    /// Drop shadow: none | subtle | medium | strong
    #[arg(long)]
    shadow: Option<String>,

    /// Padding scale: compact | comfortable | spacious
    #[arg(long)]
    spacing: Option<String>,

    /// Links layout: grid | masonry | list
    #[arg(long)]
    card_style: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Export the card as a static site (index.html + contact file)
    Render {
        /// Profile TOML; omit to render the built-in sample
        profile: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "site")]
        out: PathBuf,

        #[command(flatten)]
        flags: StyleFlags,

        /// Suppress the summary line
        #[arg(short, long)]
        quiet: bool,
    },

    /// Emit the vCard for a profile
    Vcf {
        /// Profile TOML; omit to use the built-in sample
        profile: Option<PathBuf>,

        /// Write <First>_<Last>.vcf into this directory instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the resolved style for one component
    Inspect {
        /// card | button | input
        #[arg(default_value = "card")]
        variant: String,

        /// Button sizing: sm | md | lg | xl
        #[arg(long, default_value = "md")]
        size: String,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        flags: StyleFlags,
    },

    /// List the available ids for one vocabulary
    List {
        /// presets | backgrounds | loaders | entrances | themes
        topic: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    store::init();

    match run(cli.command) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = e.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(e.code)
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Render {
            profile,
            out,
            flags,
            quiet,
        } => {
            apply_flags(&flags)?;
            let profile = load_profile(profile)?;
            let settings = store_settings()?;
            let manifest = page::export_site(&profile, &settings, &out)
                .map_err(|e| CliError::io(e.to_string()))?;
            if !quiet {
                println!(
                    "wrote {} and {}",
                    manifest.index.display(),
                    manifest.vcf.display()
                );
            }
            Ok(())
        }

        Command::Vcf { profile, out } => {
            let profile = load_profile(profile)?;
            match out {
                Some(dir) => {
                    let path = write_vcf(&profile.contact, &dir)
                        .map_err(|e| CliError::io(e.to_string()))?;
                    println!("wrote {}", path.display());
                }
                None => print!("{}", generate(&profile.contact)),
            }
            Ok(())
        }

        Command::Inspect {
            variant,
            size,
            json,
            flags,
        } => {
            apply_flags(&flags)?;
            let variant = Variant::parse(&variant).ok_or_else(|| {
                CliError::usage(
                    format!("unknown variant '{variant}'"),
                    "expected card, button or input",
                )
            })?;
            let settings = store_settings()?;

            let style = if variant == Variant::Button {
                let size = ButtonSize::parse(&size).ok_or_else(|| {
                    CliError::usage(
                        format!("unknown size '{size}'"),
                        "expected sm, md, lg or xl",
                    )
                })?;
                resolve_button(&settings, size)
            } else {
                resolve(&settings, variant)
            };

            if json {
                let payload = serde_json::to_string_pretty(&style)
                    .map_err(|e| CliError::other(e.to_string()))?;
                println!("{payload}");
            } else {
                println!("class: {}", style.class_attr());
                if !style.inline.is_empty() {
                    println!("style: {}", style.style_attr());
                }
            }
            Ok(())
        }

        Command::List { topic } => list(&topic),
    }
}

fn load_profile(path: Option<PathBuf>) -> Result<Profile, CliError> {
    match path {
        Some(path) => Profile::load(&path).map_err(|e| CliError::parse(e.to_string())),
        None => Ok(Profile::sample()),
    }
}

fn store_settings() -> Result<tapcard_config::Settings, CliError> {
    let store = store::global().map_err(|e| CliError::other(e.to_string()))?;
    Ok(store.settings())
}

/// Turn the style flags into store updates. Top-level flags go through
/// one patch; the layout flags go through the sibling-preserving helper.
fn apply_flags(flags: &StyleFlags) -> Result<(), CliError> {
    if let Some(color) = &flags.color {
        if !is_valid_hex(color) {
            return Err(CliError::usage(
                format!("'{color}' is not a #RRGGBB color"),
                "pass a six-digit hex value, e.g. --color '#3B82F6'",
            ));
        }
    }

    let store = store::global().map_err(|e| CliError::other(e.to_string()))?;
    store.update(SettingsPatch {
        theme: flags.theme.clone(),
        profile_color: flags.color.clone(),
        component_style: flags.style.clone(),
        background_animation: flags.background.clone(),
        page_loader: flags.loader.clone(),
        page_entrance: flags.entrance.clone(),
        ..Default::default()
    });

    if flags.radius.is_some()
        || flags.shadow.is_some()
        || flags.spacing.is_some()
        || flags.card_style.is_some()
    {
        store.update_layout(|layout| {
            if let Some(v) = &flags.radius {
                layout.border_radius = Some(v.clone());
            }
            if let Some(v) = &flags.shadow {
                layout.shadow_intensity = Some(v.clone());
            }
            if let Some(v) = &flags.spacing {
                layout.spacing = Some(v.clone());
            }
            if let Some(v) = &flags.card_style {
                layout.card_style = Some(v.clone());
            }
        });
    }
    Ok(())
}

fn list(topic: &str) -> Result<(), CliError> {
    match topic {
        "presets" => {
            for preset in ComponentStyle::ALL {
                let palette = if preset.uses_profile_color() {
                    "adapts to profile color"
                } else {
                    "fixed palette"
                };
                println!("{:<12} {}", preset.as_str(), palette);
            }
        }
        "backgrounds" => {
            for kind in BackgroundKind::ALL {
                println!("{}", kind.as_str());
            }
        }
        "loaders" => {
            for kind in LoaderKind::ALL {
                println!("{}", kind.as_str());
            }
        }
        "entrances" => {
            for kind in EntranceKind::ALL {
                println!("{}", kind.as_str());
            }
        }
        "themes" => {
            for theme in Theme::ALL {
                println!("{}", theme.as_str());
            }
        }
        other => {
            return Err(CliError::usage(
                format!("unknown topic '{other}'"),
                "expected presets, backgrounds, loaders, entrances or themes",
            ));
        }
    }
    Ok(())
}
