//! Input loading: read a key/value document and decode it into entries.

pub mod parsers;

pub use parsers::{MappingParser, ParserRegistry};

use std::path::Path;

use crate::error::Result;
use crate::graph::Entry;

/// Read `path` and decode it with the parser matching its extension.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let content = std::fs::read_to_string(path)?;

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let entries = ParserRegistry::new().parse(&content, &path.display().to_string(), &extension)?;
    log::info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueGraphError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_entries_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("values.YML");
        fs::write(&path, "a: hello\nb: hello world\n").unwrap();

        let entries = load_entries(&path).unwrap();
        assert_eq!(entries, vec![Entry::new("a", "hello"), Entry::new("b", "hello world")]);
    }

    #[test]
    fn test_load_entries_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("values.json");
        fs::write(&path, r#"{"a": "hello"}"#).unwrap();

        let entries = load_entries(&path).unwrap();
        assert_eq!(entries, vec![Entry::new("a", "hello")]);
    }

    #[test]
    fn test_load_entries_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_entries(&temp_dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ValueGraphError::Io(_))));
    }

    #[test]
    fn test_load_entries_parse_error_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "- not\n- a mapping\n").unwrap();

        let err = load_entries(&path).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }
}
