// Profile input: the card owner's identity and links, loaded from TOML.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tapcard_vcard::Contact;

#[derive(Debug)]
pub enum ProfileError {
    Read(PathBuf, io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Read(path, e) => write!(f, "cannot read {}: {}", path.display(), e),
            ProfileError::Parse(path, e) => write!(f, "cannot parse {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ProfileError {}

/// One row in the contact links list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub label: String,
    #[serde(default)]
    pub value: Option<String>,
    pub href: String,
}

/// Everything the card renders: contact identity plus display extras.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub contact: Contact,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Profile, ProfileError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ProfileError::Read(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ProfileError::Parse(path.to_path_buf(), e))
    }

    /// Built-in sample used when no profile file is given.
    pub fn sample() -> Profile {
        Profile {
            contact: Contact {
                first_name: "Jane".into(),
                last_name: Some("Doe".into()),
                title: Some("Product Designer".into()),
                email: Some("jane@example.com".into()),
                phone: Some("(555) 010-2030".into()),
                website: Some("https://jane.example".into()),
                ..Default::default()
            },
            tagline: Some("Product Designer".into()),
            details: vec!["Design systems and tooling".into(), "Springfield, USA".into()],
            links: vec![
                Link {
                    label: "LinkedIn".into(),
                    value: Some("Jane Doe".into()),
                    href: "https://www.linkedin.com/in/janedoe".into(),
                },
                Link {
                    label: "Email".into(),
                    value: Some("jane@example.com".into()),
                    href: "mailto:jane@example.com".into(),
                },
                Link {
                    label: "GitHub".into(),
                    value: Some("janedoe".into()),
                    href: "https://github.com/janedoe".into(),
                },
            ],
        }
    }
}
