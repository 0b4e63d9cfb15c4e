// File export. The download trigger is fire-and-forget: platform
// failures are logged and swallowed so the view never crashes over a
// missing directory or a full disk.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::contact::Contact;
use crate::vcf::{file_name, generate};

#[derive(Debug)]
pub enum ExportError {
    CreateDir(PathBuf, io::Error),
    Write(PathBuf, io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::CreateDir(path, e) => {
                write!(f, "cannot create {}: {}", path.display(), e)
            }
            ExportError::Write(path, e) => write!(f, "cannot write {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::CreateDir(_, e) | ExportError::Write(_, e) => Some(e),
        }
    }
}

/// Serialize the contact and write it under `dir`, creating the
/// directory if needed. Returns the path of the written file.
pub fn write_vcf(contact: &Contact, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|e| ExportError::CreateDir(dir.to_path_buf(), e))?;
    let path = dir.join(file_name(contact));
    fs::write(&path, generate(contact)).map_err(|e| ExportError::Write(path.clone(), e))?;
    Ok(path)
}

/// Fire-and-forget save. Failure is not signaled to the caller; it is
/// logged and prior state stays unchanged.
pub fn trigger_download(contact: &Contact, dir: &Path) {
    if let Err(e) = write_vcf(contact, dir) {
        log::warn!("contact export failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane_doe() -> Contact {
        Contact {
            first_name: "Jane".into(),
            last_name: Some("Doe".into()),
            ..Default::default()
        }
    }

    #[test]
    fn write_vcf_synthesizes_the_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_vcf(&jane_doe(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "Jane_Doe.vcf");

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, generate(&jane_doe()));
    }

    #[test]
    fn write_vcf_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("cards");
        let path = write_vcf(&jane_doe(), &nested).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn trigger_download_swallows_failures() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "occupied").unwrap();
        // target is a file, the write must fail - and must not panic
        trigger_download(&jane_doe(), &file);
        assert_eq!(fs::read_to_string(&file).unwrap(), "occupied");
    }
}
