//! Errors raised while scaffolding a post

use std::path::PathBuf;
use thiserror::Error;

/// Post scaffolding errors
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("A post title is required")]
    EmptyTitle,

    #[error("Title {0:?} has no letters or digits to build a file name from")]
    UnsluggableTitle(String),

    #[error("File already exists: {}", .0.display())]
    DuplicatePath(PathBuf),

    #[error("Failed to launch editor `{editor}`")]
    EditorLaunch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
