//! CLI configuration.
//!
//! Presentation defaults only. Grading semantics (the 0-100 range, the
//! pass threshold) are fixed by `gradebook-core` and are not
//! configurable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level gradebook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Default number of students shown by the top-students view.
    #[serde(default = "default_top_count")]
    pub top_count: usize,
    /// Whether removing a student asks for y/n confirmation.
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_top_count() -> usize {
    3
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            top_count: default_top_count(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

/// Load config from an explicit path, or `gradebook.toml` in the current
/// directory, falling back to the defaults when neither exists.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(GradebookConfig::default()),
    }
}
