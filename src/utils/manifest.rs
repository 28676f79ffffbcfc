//! Keeps the `icons` list of a web app manifest in step with the generated files.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;

use crate::icon::{OUTPUT_DIR, icon_filename};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl IconEntry {
    pub fn for_size(size: u32) -> Self {
        IconEntry {
            src: format!("/{}/{}", OUTPUT_DIR, icon_filename(size)),
            sizes: format!("{}x{}", size, size),
            mime_type: "image/png".to_string(),
        }
    }
}

/// A manifest document. Fields other than `icons` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WebManifest {
    fields: Map<String, Value>,
}

impl WebManifest {
    /// Load a manifest, or start an empty one if the file does not exist.
    pub fn load_or_default(path: &Path) -> io::Result<WebManifest> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(WebManifest::default()),
            Err(e) => Err(e),
        }
    }

    fn parse(content: &str) -> io::Result<WebManifest> {
        match serde_json::from_str(content) {
            Ok(Value::Object(fields)) => Ok(WebManifest { fields }),
            Ok(_) => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "manifest must be a JSON object",
            )),
            Err(e) => Err(io::Error::new(io::ErrorKind::InvalidData, e)),
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let content = serde_json::to_string_pretty(&self.fields)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)
    }

    /// Replace the icon list with one PNG entry per size.
    pub fn set_icons(&mut self, sizes: &[u32]) -> io::Result<()> {
        let entries: Vec<IconEntry> = sizes.iter().map(|&s| IconEntry::for_size(s)).collect();
        let value = serde_json::to_value(entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.fields.insert("icons".to_string(), value);
        Ok(())
    }

    /// The current icon list. A manifest without `icons` has none.
    pub fn icons(&self) -> io::Result<Vec<IconEntry>> {
        match self.fields.get("icons") {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            None => Ok(Vec::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::TARGET_SIZES;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn entry_matches_cached_asset_paths() {
        let entry = IconEntry::for_size(192);
        assert_eq!(entry.src, "/icons/icon-192x192.png");
        assert_eq!(entry.sizes, "192x192");
        assert_eq!(entry.mime_type, "image/png");
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let manifest = WebManifest::load_or_default(&dir.path().join("manifest.json")).unwrap();
        assert!(manifest.icons().unwrap().is_empty());
    }

    #[test]
    fn set_icons_preserves_other_fields() {
        let json = r#"{
            "name": "Feeding Tracker",
            "start_url": "/",
            "icons": [{ "src": "/old.png", "sizes": "48x48", "type": "image/png" }]
        }"#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), json).unwrap();

        let mut manifest = WebManifest::load_or_default(temp_file.path()).unwrap();
        manifest.set_icons(&TARGET_SIZES).unwrap();
        manifest.save(temp_file.path()).unwrap();

        let reloaded = WebManifest::load_or_default(temp_file.path()).unwrap();
        assert_eq!(
            reloaded.get("name"),
            Some(&Value::String("Feeding Tracker".to_string()))
        );
        assert_eq!(reloaded.get("start_url"), Some(&Value::String("/".to_string())));
        assert_eq!(
            reloaded.icons().unwrap(),
            vec![IconEntry::for_size(192), IconEntry::for_size(512)]
        );
    }

    #[test]
    fn malformed_icons_value_returns_error() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), r#"{ "icons": "not a list" }"#).unwrap();

        let manifest = WebManifest::load_or_default(temp_file.path()).unwrap();
        assert!(manifest.icons().is_err());
    }

    #[test]
    fn save_uses_type_key() {
        let mut manifest = WebManifest::default();
        manifest.set_icons(&[192]).unwrap();

        let temp_file = NamedTempFile::new().unwrap();
        manifest.save(temp_file.path()).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"type\": \"image/png\""));
        assert!(!content.contains("mime_type"));
    }

    #[test]
    fn malformed_json_returns_error() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "not valid json").unwrap();

        assert!(WebManifest::load_or_default(temp_file.path()).is_err());
    }

    #[test]
    fn non_object_json_returns_error() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "[1, 2, 3]").unwrap();

        assert!(WebManifest::load_or_default(temp_file.path()).is_err());
    }
}
