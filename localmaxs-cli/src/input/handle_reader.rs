//! Index handle loading

use crate::error::CliError;
use anyhow::{Context, Result};
use localmaxs_core::{ArrayHandle, CorpusProvider, IndexHandle};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads JSON index handles from disk
pub struct HandleReader;

impl HandleReader {
    /// Read and deserialize a whole index handle
    pub fn read(path: &Path) -> Result<IndexHandle> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let handle = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse index handle: {}", path.display()))?;
        Ok(handle)
    }

    /// Read a handle and take the array stored under `name`
    pub fn read_array(path: &Path, name: &str) -> Result<ArrayHandle> {
        let mut handle = Self::read(path)?;
        match handle.take(name) {
            Some(array) => Ok(array),
            None => Err(CliError::ArrayNotFound {
                name: name.to_string(),
                available: handle.names().into_iter().map(String::from).collect(),
            })
            .with_context(|| format!("In index handle: {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HANDLE: &str = r#"{
        "arrays": {
            "surface": { "corpus": [1, 2, 0], "symbols": { "a": 1, "b": 2 } },
            "lemma": { "corpus": [1, 1, 0], "symbols": { "a": 1 } }
        }
    }"#;

    #[test]
    fn test_read_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("index.json");
        fs::write(&path, HANDLE).unwrap();

        let array = HandleReader::read_array(&path, "surface").unwrap();
        assert_eq!(array.corpus, vec![1, 2, 0]);
        assert_eq!(array.corpus_size(), 2);
    }

    #[test]
    fn test_missing_array_names_alternatives() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("index.json");
        fs::write(&path, HANDLE).unwrap();

        let err = HandleReader::read_array(&path, "pos").unwrap_err();
        match err.downcast_ref::<CliError>() {
            Some(CliError::ArrayNotFound { available, .. }) => {
                assert_eq!(available, &vec!["lemma".to_string(), "surface".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nonexistent_file() {
        let err = HandleReader::read(Path::new("/nonexistent/index.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{\"arrays\": ").unwrap();

        let err = HandleReader::read(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse index handle"));
    }
}
