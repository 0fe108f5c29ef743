// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::error::StorageError;

// Characters that are unsafe in filenames on at least one platform
static UNSAFE_FILENAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[<>:"/\\|?*]"#).expect("Failed to compile UNSAFE_FILENAME_RE")
});

/// Replaces filesystem-reserved characters in a category name with `_`.
pub fn sanitize_filename(name: &str) -> String {
    UNSAFE_FILENAME_RE.replace_all(name, "_").into_owned()
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Writes one category's Markdown document.
    pub fn save_category(&self, category: &str, content: &str) -> Result<PathBuf, StorageError> {
        let filename = format!("{}.md", sanitize_filename(category));
        let file_path = self.base_dir.join(filename);

        fs::write(&file_path, content).map_err(StorageError::IoError)?;

        tracing::debug!("Saved category file to {}", file_path.display());
        Ok(file_path)
    }

    /// Writes the README.md index document.
    pub fn save_index(&self, content: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join("README.md");

        fs::write(&file_path, content).map_err(StorageError::IoError)?;

        tracing::debug!("Saved index to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves a machine-readable summary of the run in JSON format
    pub fn save_summary(
        &self,
        site_title: &str,
        total_posts: usize,
        total_comments: usize,
        categories: &[(String, usize)],
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join("summary.json");

        let summary = serde_json::json!({
            "site_title": site_title,
            "total_posts": total_posts,
            "retained_comments": total_comments,
            "categories": categories
                .iter()
                .map(|(name, count)| serde_json::json!({ "name": name, "posts": count }))
                .collect::<Vec<_>>(),
            "generated_at": chrono::Utc::now().to_rfc3339(),
        });

        let summary_str = serde_json::to_string_pretty(&summary)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, summary_str).map_err(StorageError::IoError)?;

        tracing::debug!("Saved run summary to {}", file_path.display());
        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_replaces_reserved_characters() {
        assert_eq!(
            sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#),
            "a_b_c_d_e_f_g_h_i_j"
        );
    }

    #[test]
    fn test_sanitize_filename_keeps_ordinary_names() {
        assert_eq!(sanitize_filename("学习历程"), "学习历程");
        assert_eq!(sanitize_filename("notes-2020"), "notes-2020");
    }
}
