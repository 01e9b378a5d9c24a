//! Content module - post models, front-matter, and loading

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::{escape_title, render_scaffold, FrontMatter};
pub use post::{post_file_name, NewPostRequest, PostSummary};
