//! Launch an external editor on a file

use std::io;
use std::path::Path;
use std::process::Command;

use crate::error::ScaffoldError;

/// Start `editor` with `path` as its last argument.
///
/// The command is split on whitespace, so `code --wait` runs `code` with
/// `--wait` before the path. With `wait` set, blocks until the editor exits.
pub fn launch(editor: &str, path: &Path, wait: bool) -> Result<(), ScaffoldError> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or_else(|| ScaffoldError::EditorLaunch {
        editor: editor.to_string(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "empty editor command"),
    })?;

    tracing::debug!("Launching editor {:?} on {:?}", editor, path);

    let mut child = Command::new(program)
        .args(parts)
        .arg(path)
        .spawn()
        .map_err(|source| ScaffoldError::EditorLaunch {
            editor: editor.to_string(),
            source,
        })?;

    if wait {
        let status = child.wait()?;
        if !status.success() {
            tracing::warn!("Editor `{}` exited with {}", editor, status);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_editor() {
        let err = launch("   ", Path::new("post.md"), true).unwrap_err();
        assert!(matches!(err, ScaffoldError::EditorLaunch { .. }));
    }

    #[test]
    fn test_missing_editor() {
        let err = launch("no-such-editor-blog-rs", Path::new("post.md"), true).unwrap_err();
        match err {
            ScaffoldError::EditorLaunch { editor, source } => {
                assert_eq!(editor, "no-such-editor-blog-rs");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_launch_error_reads_as_one_line() {
        let err = launch("no-such-editor-blog-rs", Path::new("post.md"), true).unwrap_err();
        assert_eq!(err.to_string(), "Failed to launch editor `no-such-editor-blog-rs`");

        let message = format!("{:#}", anyhow::Error::from(err));
        assert!(message.starts_with("Failed to launch editor `no-such-editor-blog-rs`: "));
        assert_eq!(message.lines().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_editor_receives_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("copy.md");
        let source = dir.path().join("post.md");
        std::fs::write(&source, "---\n").unwrap();

        // Runs `cp <source> <target>`
        let editor = format!("cp {}", source.display());
        launch(&editor, &target, true).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "---\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_editor_is_not_an_error() {
        launch("false", Path::new("post.md"), true).unwrap();
    }
}
