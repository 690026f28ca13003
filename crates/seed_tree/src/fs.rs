//! Directory creation primitive.

use std::fs::DirBuilder;
use std::io::ErrorKind;
use std::path::{Component, Path};

use crate::error::{TreeError, TreeResult};

/// Permission bits for created directories (rwxr-xr-x, before umask).
pub const DIR_MODE: u32 = 0o755;

/// Result of ensuring a directory exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    Created,
    AlreadyExisted,
}

/// Whether `name` is exactly one ordinary path component.
///
/// Rejects empty names, absolute paths, `.`/`..` and anything containing a
/// separator, so a segment can never leave its parent directory.
pub fn is_path_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}

/// Create a single directory. The parent must already exist.
///
/// An existing entry at `path` is reported as [`DirOutcome::AlreadyExisted`],
/// never as an error.
pub fn ensure_dir(path: &Path) -> TreeResult<DirOutcome> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    match builder.create(path) {
        Ok(()) => Ok(DirOutcome::Created),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(DirOutcome::AlreadyExisted),
        Err(source) => Err(TreeError::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payments");

        assert_eq!(ensure_dir(&path).unwrap(), DirOutcome::Created);
        assert_eq!(ensure_dir(&path).unwrap(), DirOutcome::AlreadyExisted);
        assert!(path.is_dir());
    }

    #[test]
    fn test_path_segments() {
        assert!(is_path_segment("payments"));
        assert!(is_path_segment("eu-west.1"));
        assert!(!is_path_segment(""));
        assert!(!is_path_segment("."));
        assert!(!is_path_segment(".."));
        assert!(!is_path_segment("/escaped"));
        assert!(!is_path_segment("a/b"));
        assert!(!is_path_segment("db/"));
    }

    #[test]
    fn test_missing_parent_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("child");

        let err = ensure_dir(&path).unwrap_err();
        assert!(matches!(err, TreeError::CreateDir { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_created_with_directory_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("payments");
        ensure_dir(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask can only clear bits
        assert_eq!(mode & !DIR_MODE, 0);
        assert_eq!(mode & 0o700, 0o700);
    }
}
