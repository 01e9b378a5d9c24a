//! Post models

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// A request to scaffold a new post
#[derive(Debug, Clone)]
pub struct NewPostRequest {
    /// Title as given on the command line, one entry per word
    pub title_words: Vec<String>,

    /// Editor override; the site config is used when absent
    pub editor: Option<String>,

    /// Date stamped into the file name
    pub date: NaiveDate,
}

impl NewPostRequest {
    /// Create a request for the given title words and date
    pub fn new<I, S>(title_words: I, date: NaiveDate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title_words: title_words.into_iter().map(Into::into).collect(),
            editor: None,
            date,
        }
    }

    /// Set the editor override
    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = Some(editor.into());
        self
    }

    /// Display title: the words joined with single spaces
    pub fn title(&self) -> String {
        self.title_words.join(" ")
    }

    /// Validate the title and derive its slug
    pub fn slug(&self) -> Result<String, ScaffoldError> {
        let title = self.title();
        if title.trim().is_empty() {
            return Err(ScaffoldError::EmptyTitle);
        }

        let slug = slug::slugify(&title);
        if slug.is_empty() {
            return Err(ScaffoldError::UnsluggableTitle(title));
        }

        Ok(slug)
    }

    /// Compute the post's file path under `posts_dir`
    pub fn post_path(&self, posts_dir: &Path, extension: &str) -> Result<PathBuf, ScaffoldError> {
        let slug = self.slug()?;
        Ok(posts_dir.join(post_file_name(self.date, &slug, extension)))
    }
}

/// File name of a post: `<YYYY-MM-DD>-<slug>.<ext>`
pub fn post_file_name(date: NaiveDate, slug: &str, extension: &str) -> String {
    format!("{}-{}.{}", date.format("%Y-%m-%d"), slug, extension)
}

/// Split a `YYYY-MM-DD-` prefix off a post file stem
pub fn split_date_prefix(stem: &str) -> (Option<NaiveDate>, &str) {
    match (stem.get(..10), stem.get(10..)) {
        (Some(prefix), Some(rest)) => match NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            Ok(date) => (Some(date), rest.trim_start_matches('-')),
            Err(_) => (None, stem),
        },
        _ => (None, stem),
    }
}

/// An existing post, as shown by `list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    /// Date from the file name prefix
    pub date: Option<NaiveDate>,

    /// Title from front-matter, or the file stem
    pub title: String,

    /// File name relative to the posts directory
    pub file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_post_path() {
        let request = NewPostRequest::new(["My", "First", "Post"], june_first());
        assert_eq!(request.title(), "My First Post");
        let path = request.post_path(Path::new("posts"), "md").unwrap();
        assert_eq!(path, Path::new("posts/2025-06-01-my-first-post.md"));
    }

    #[test]
    fn test_punctuation_and_case_collapse() {
        let a = NewPostRequest::new(["Hello,", "World"], june_first());
        let b = NewPostRequest::new(["hello", "world"], june_first());
        let dir = Path::new("posts");
        assert_eq!(
            a.post_path(dir, "md").unwrap(),
            b.post_path(dir, "md").unwrap()
        );
    }

    #[test]
    fn test_slug_trims_and_collapses() {
        let request = NewPostRequest::new(["--Either", "&&", "Result!!"], june_first());
        let path = request.post_path(Path::new("p"), "md").unwrap();
        assert_eq!(path, Path::new("p/2025-06-01-either-result.md"));
    }

    #[test]
    fn test_empty_title() {
        let request = NewPostRequest::new(Vec::<String>::new(), june_first());
        assert!(matches!(
            request.post_path(Path::new("posts"), "md"),
            Err(ScaffoldError::EmptyTitle)
        ));

        let request = NewPostRequest::new(["", "  "], june_first());
        assert!(matches!(
            request.post_path(Path::new("posts"), "md"),
            Err(ScaffoldError::EmptyTitle)
        ));
    }

    #[test]
    fn test_unsluggable_title() {
        let request = NewPostRequest::new(["!!!", "???"], june_first());
        assert!(matches!(
            request.post_path(Path::new("posts"), "md"),
            Err(ScaffoldError::UnsluggableTitle(t)) if t == "!!! ???"
        ));
    }

    #[test]
    fn test_non_ascii_titles_are_transliterated() {
        let request = NewPostRequest::new(["🎉"], june_first());
        assert_eq!(request.slug().unwrap(), "tada");

        let request = NewPostRequest::new(["日本語"], june_first());
        assert_eq!(request.slug().unwrap(), "ri-ben-yu");

        let request = NewPostRequest::new(["Café", "Crème"], june_first());
        assert_eq!(request.slug().unwrap(), "cafe-creme");
    }

    #[test]
    fn test_split_date_prefix() {
        assert_eq!(
            split_date_prefix("2025-06-01-my-first-post"),
            (Some(june_first()), "my-first-post")
        );
        assert_eq!(split_date_prefix("about"), (None, "about"));
        assert_eq!(split_date_prefix("2025-13-01-nope"), (None, "2025-13-01-nope"));
    }
}
