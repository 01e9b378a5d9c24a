//! Create a new post

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::content::{render_scaffold, NewPostRequest};
use crate::editor;
use crate::error::ScaffoldError;
use crate::Blog;

/// Write the scaffold for a new post and return its path.
///
/// Never overwrites: an existing file at the computed path is reported as
/// [`ScaffoldError::DuplicatePath`] and left untouched.
pub fn write_post(blog: &Blog, request: &NewPostRequest) -> Result<PathBuf, ScaffoldError> {
    let file_path = request.post_path(&blog.posts_dir, &blog.config.post_extension)?;

    if file_path.exists() {
        return Err(ScaffoldError::DuplicatePath(file_path));
    }

    fs::create_dir_all(&blog.posts_dir)?;

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&file_path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(ScaffoldError::DuplicatePath(file_path));
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(render_scaffold(&request.title()).as_bytes())?;

    tracing::info!("Wrote scaffold to {:?}", file_path);

    Ok(file_path)
}

/// Create a new post and open it in the editor.
///
/// If the editor cannot be started the post stays on disk and the launch
/// error is returned.
pub fn create_post(blog: &Blog, request: &NewPostRequest) -> Result<PathBuf, ScaffoldError> {
    let file_path = write_post(blog, request)?;

    println!("Created: {}", file_path.display());

    let editor = blog.config.editor_or(request.editor.as_deref());
    editor::launch(editor, &file_path, blog.config.wait_for_editor)?;

    Ok(file_path)
}
