//! Local object storage for product images

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;
use url::Url;

use crate::error::MediaError;

/// Copies files into a directory and hands back their public URLs
#[derive(Debug, Clone)]
pub struct MediaStore {
    dir: PathBuf,
    base_url: String,
}

impl MediaStore {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
        }
    }

    /// Store a file as `<unix-millis>-<file name>` and return its URL
    pub fn store(&self, source: &Path) -> Result<String, MediaError> {
        let file_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| MediaError::MissingFileName(source.display().to_string()))?;

        let object_path = format!("{}-{}", Utc::now().timestamp_millis(), file_name);

        fs::create_dir_all(&self.dir)?;
        fs::copy(source, self.dir.join(&object_path))?;

        let url = self.public_url(&object_path)?;
        info!(source = %source.display(), %url, "stored media");
        Ok(url)
    }

    /// Base URL with the object path appended as one percent-encoded segment
    pub fn public_url(&self, object_path: &str) -> Result<String, MediaError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| MediaError::CannotBeABase(self.base_url.clone()))?
            .pop_if_empty()
            .push(object_path);
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_file_and_returns_url() {
        let source_dir = tempfile::tempdir().unwrap();
        let media_dir = tempfile::tempdir().unwrap();
        let source = source_dir.path().join("vase.png");
        fs::write(&source, b"png bytes").unwrap();

        let store = MediaStore::new(media_dir.path(), "https://cdn.example.com/product-images/");
        let url = store.store(&source).unwrap();

        let object = url
            .strip_prefix("https://cdn.example.com/product-images/")
            .unwrap();
        assert!(object.ends_with("-vase.png"));
        assert_eq!(fs::read(media_dir.path().join(object)).unwrap(), b"png bytes");
    }

    #[test]
    fn file_names_are_percent_encoded() {
        let store = MediaStore::new("unused", "https://cdn.example.com/product-images");
        let url = store.public_url("1700000000000-my vase #2.png").unwrap();
        assert_eq!(
            url,
            "https://cdn.example.com/product-images/1700000000000-my%20vase%20%232.png"
        );

        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.fragment(), None);
        assert_eq!(
            parsed.path_segments().unwrap().last(),
            Some("1700000000000-my%20vase%20%232.png")
        );
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let store = MediaStore::new("unused", "not a url");
        assert!(matches!(store.public_url("a.png"), Err(MediaError::BaseUrl(_))));
    }

    #[test]
    fn missing_source_is_an_error() {
        let media_dir = tempfile::tempdir().unwrap();
        let store = MediaStore::new(media_dir.path(), "http://localhost");
        assert!(matches!(
            store.store(Path::new("/nonexistent/vase.png")),
            Err(MediaError::Io(_))
        ));
        assert!(matches!(store.store(Path::new("/")), Err(MediaError::MissingFileName(_))));
    }
}
