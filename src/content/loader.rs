//! Content loader - reads existing posts from the posts directory

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::frontmatter::unescape_title;
use super::post::split_date_prefix;
use super::{FrontMatter, PostSummary};
use crate::Blog;

/// Loads post summaries from the posts directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<PostSummary>> {
        let posts_dir = &self.blog.posts_dir;
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && self.is_post_file(path) {
                match self.load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
                }
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.file.cmp(&a.file)));

        Ok(posts)
    }

    /// Load a single post summary from a file
    fn load_post(&self, path: &Path) -> Result<PostSummary> {
        let content = fs::read_to_string(path)?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");
        let (date, name) = split_date_prefix(stem);

        let title = match FrontMatter::parse(&content) {
            Ok(fm) => fm.title,
            Err(e) => {
                tracing::warn!("Failed to parse front-matter in {:?}: {}", path, e);
                None
            }
        };
        let title = title
            .map(|t| unescape_title(&t))
            .unwrap_or_else(|| name.to_string());

        let file = path
            .strip_prefix(&self.blog.posts_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        Ok(PostSummary { date, title, file })
    }

    fn is_post_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(&self.blog.config.post_extension))
            .unwrap_or(false)
    }
}
