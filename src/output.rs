//! Output - Writing Identicons to Disk

use std::fs;
use std::path::{Path, PathBuf};

use crate::pipeline::IdenticonError;

/// Where rendered images are written
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl OutputConfig {
    pub fn in_dir(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, input: &str) -> PathBuf {
        self.directory.join(identicon_filename(input))
    }
}

pub fn identicon_filename(input: &str) -> String {
    format!("{}.png", input)
}

/// Write already-rendered bytes to `{input}.png`, replacing any existing file
pub fn save_identicon(
    input: &str,
    png: &[u8],
    config: &OutputConfig,
) -> Result<PathBuf, IdenticonError> {
    let path = config.path_for(input);
    fs::write(&path, png)?;
    log::info!("wrote {} ({} bytes)", path.display(), png.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename() {
        assert_eq!(identicon_filename("alice"), "alice.png");
        assert_eq!(identicon_filename(""), ".png");
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig::in_dir(dir.path());

        save_identicon("bob", b"first", &config).unwrap();
        let path = save_identicon("bob", b"second", &config).unwrap();

        assert_eq!(path, dir.path().join("bob.png"));
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig::in_dir(dir.path().join("absent"));
        let err = save_identicon("carol", b"png", &config).unwrap_err();
        assert!(matches!(err, IdenticonError::Io(_)));
    }
}
