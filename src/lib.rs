//! blog-rs: scaffold new blog posts
//!
//! Creates `posts/<date>-<slug>.md` with the blog's standard front-matter
//! and opens it in an editor.

pub mod commands;
pub mod config;
pub mod content;
pub mod editor;
pub mod error;

pub use error::ScaffoldError;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::NewPostRequest;

/// The blog being worked on
#[derive(Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::SiteConfig,
    /// Posts directory
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Open a blog rooted at a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            posts_dir,
        })
    }

    /// Create a new post and open it in the editor
    pub fn new_post(&self, request: &NewPostRequest) -> Result<PathBuf, ScaffoldError> {
        commands::new::create_post(self, request)
    }

    /// List existing posts
    pub fn list(&self) -> Result<()> {
        commands::list::run(self)
    }
}
