//! List existing posts

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::Blog;

/// Print posts, newest first
pub fn run(blog: &Blog) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        let date = post
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        println!("  {} - {} [{}]", date, post.title, post.file);
    }

    Ok(())
}
