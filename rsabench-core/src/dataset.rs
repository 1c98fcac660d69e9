// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Dataset enumeration.
//!
//! A dataset directory holds flat files whose names start with their
//! category prefix (`random_data_0.bin`, `structured_data_0.xml`, ...).
//! Files are listed in name order so reruns traverse them identically.

use std::path::PathBuf;

use crate::error::{BenchError, BenchResult};
use crate::types::{DatasetCategory, Message};

/// Supplies the messages of one dataset category.
///
/// Called once per trial; implementations must not cache between calls.
pub trait MessageSource {
    fn load(&self, category: &DatasetCategory) -> BenchResult<Vec<Message>>;
}

/// Dataset files under a root directory.
#[derive(Debug, Clone)]
pub struct DatasetDir {
    root: PathBuf,
}

impl DatasetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// List the files of a category in name order.
    pub fn files(&self, category: &DatasetCategory) -> BenchResult<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(BenchError::DatasetNotFound {
                path: self.root.clone(),
            });
        }

        let entries = std::fs::read_dir(&self.root).map_err(|e| BenchError::Io {
            context: "listing dataset directory",
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BenchError::Io {
                context: "listing dataset directory",
                source: e,
            })?;
            let path = entry.path();
            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| category.matches(name))
                .unwrap_or(false);
            if matches && path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        Ok(files)
    }
}

impl MessageSource for DatasetDir {
    fn load(&self, category: &DatasetCategory) -> BenchResult<Vec<Message>> {
        let files = self.files(category)?;
        let mut messages = Vec::with_capacity(files.len());

        for path in &files {
            let bytes = std::fs::read(path).map_err(|e| BenchError::Io {
                context: "reading dataset file",
                source: e,
            })?;
            messages.push(Message::new(bytes));
        }

        tracing::debug!(
            category = %category,
            files = messages.len(),
            "Loaded dataset messages"
        );

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn category(prefix: &str) -> DatasetCategory {
        DatasetCategory::new(prefix).unwrap()
    }

    #[test]
    fn test_files_filtered_and_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("text_data_2.txt"), b"two").unwrap();
        std::fs::write(root.join("text_data_0.txt"), b"zero").unwrap();
        std::fs::write(root.join("text_data_1.txt"), b"one").unwrap();
        std::fs::write(root.join("random_data_0.bin"), [0u8; 8]).unwrap();
        std::fs::create_dir(root.join("text_data_dir")).unwrap();

        let dataset = DatasetDir::new(root);
        let files = dataset.files(&category("text_data")).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["text_data_0.txt", "text_data_1.txt", "text_data_2.txt"]
        );

        let messages = dataset.load(&category("text_data")).unwrap();
        assert_eq!(messages[0].as_bytes(), b"zero");
        assert_eq!(messages[2].as_bytes(), b"two");
    }

    #[test]
    fn test_empty_category_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("random_data_0.bin"), [1u8; 4]).unwrap();

        let messages = DatasetDir::new(temp_dir.path())
            .load(&category("structured_data"))
            .unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let err = DatasetDir::new("/nonexistent/dataset")
            .load(&category("text_data"))
            .unwrap_err();
        assert!(matches!(err, BenchError::DatasetNotFound { .. }));
    }

    #[test]
    fn test_reads_fresh_each_call() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("text_data_0.txt");
        std::fs::write(&path, b"first").unwrap();

        let dataset = DatasetDir::new(temp_dir.path());
        assert_eq!(dataset.load(&category("text_data")).unwrap()[0].as_bytes(), b"first");

        std::fs::write(&path, b"second").unwrap();
        assert_eq!(dataset.load(&category("text_data")).unwrap()[0].as_bytes(), b"second");
    }
}
