//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Blog configuration, read from `_config.yml` at the blog root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding posts, relative to the blog root
    pub posts_dir: String,
    /// Extension of post files, without the leading dot
    pub post_extension: String,
    /// Editor command used when none is given on the command line
    pub editor: String,
    /// Block until the editor exits
    pub wait_for_editor: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
            post_extension: "md".to_string(),
            editor: "vim".to_string(),
            wait_for_editor: true,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the editor, preferring an explicit override
    pub fn editor_or<'a>(&'a self, overridden: Option<&'a str>) -> &'a str {
        match overridden {
            Some(editor) if !editor.trim().is_empty() => editor,
            _ => &self.editor,
        }
    }
}
