//! Filesystem housekeeping for the ban log.
//!
//! Both the limiter (writer) and the stats scan (reader) expect the log path
//! to be usable. [`ensure_file_exists`] creates whatever is missing and leaves
//! everything that already exists alone.

use crate::iplimit::error::{Error, Result};
use std::fs::{DirBuilder, OpenOptions};
use std::path::Path;

/// Mode for created directories: owner rwx, group/other r-x
pub const DIR_MODE: u32 = 0o755;

/// Mode for a created log file: owner rw, group/other r
pub const FILE_MODE: u32 = 0o644;

/// Create `path` and any missing parent directories.
///
/// An existing file is opened and closed without being truncated, so calling
/// this repeatedly (or racing another creator) is harmless.
///
/// # Errors
///
/// Returns [`Error::CreateDir`] or [`Error::CreateFile`] with the underlying
/// I/O error. Nothing is retried.
///
/// # Examples
///
/// ```no_run
/// use iplimit_stats::utils::fs::ensure_file_exists;
///
/// ensure_file_exists("/var/log/x-ui/3xipl.log").unwrap();
/// ```
pub fn ensure_file_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        dir_builder()
            .create(dir)
            .map_err(|source| Error::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
    }

    file_options()
        .open(path)
        .map_err(|source| Error::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}

fn dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}

fn file_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_creates_nested_dirs_and_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("3xipl.log");

        ensure_file_exists(&path).unwrap();

        assert!(path.is_file());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_existing_content_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("3xipl.log");
        fs::write(&path, "X").unwrap();

        ensure_file_exists(&path).unwrap();
        ensure_file_exists(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "X");
    }

    #[test]
    fn test_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = ensure_file_exists(blocker.join("3xipl.log")).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
    }

    #[test]
    fn test_path_is_a_directory() {
        let dir = TempDir::new().unwrap();

        let err = ensure_file_exists(dir.path()).unwrap_err();
        assert!(matches!(err, Error::CreateFile { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_created_file_not_world_writable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("3xipl.log");
        ensure_file_exists(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o600, 0o600);
        assert_eq!(mode & 0o022, 0);
        let dir_mode = fs::metadata(path.parent().unwrap()).unwrap().permissions().mode();
        assert_eq!(dir_mode & 0o700, 0o700);
    }
}
