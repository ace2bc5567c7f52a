//! Whole-file save and load.

use super::codec::DirectoryCodec;
use crate::error::{PersistenceError, PersistenceResult};
use crate::repositories::Directory;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Result of [`load`].
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read and decoded.
    Loaded(Directory),
    /// No file exists at the path. Not an error: a first run starts empty.
    Missing,
}

/// Write the whole directory to `path`, replacing any existing file.
///
/// The bytes go to a temporary file next to the target which is then
/// renamed over it, so a failed write leaves the previous file intact.
/// A symlinked `path` is followed and its target replaced; an existing
/// file keeps its permissions.
///
/// Returns the number of records written.
pub fn save(
    directory: &Directory,
    path: impl AsRef<Path>,
    codec: &dyn DirectoryCodec,
) -> PersistenceResult<usize> {
    let path = path.as_ref();
    let bytes = codec.encode(directory)?;

    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PersistenceError::io(path, e))?;
    tmp.write_all(&bytes)
        .and_then(|()| tmp.flush())
        .map_err(|e| PersistenceError::io(path, e))?;

    match fs::metadata(&target) {
        Ok(existing) => tmp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| PersistenceError::io(path, e))?,
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(PersistenceError::io(path, e)),
    }

    tmp.persist(&target)
        .map_err(|e| PersistenceError::io(path, e.error))?;

    info!(
        path = %path.display(),
        format = %codec.format(),
        records = directory.len(),
        bytes = bytes.len(),
        "Contacts saved"
    );
    Ok(directory.len())
}

/// The real file behind `path`, or `path` itself when nothing exists yet.
fn resolve_target(path: &Path) -> PersistenceResult<PathBuf> {
    match fs::canonicalize(path) {
        Ok(target) => Ok(target),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(PersistenceError::io(path, e)),
    }
}

/// Read a directory from `path`.
///
/// A missing file yields [`LoadOutcome::Missing`]; any other read failure
/// is an I/O error and unreadable content is a deserialization error.
pub fn load(path: impl AsRef<Path>, codec: &dyn DirectoryCodec) -> PersistenceResult<LoadOutcome> {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No contacts file");
            return Ok(LoadOutcome::Missing);
        }
        Err(e) => return Err(PersistenceError::io(path, e)),
    };

    let directory = codec.decode(&bytes)?;
    info!(
        path = %path.display(),
        format = %codec.format(),
        records = directory.len(),
        "Contacts loaded"
    );
    Ok(LoadOutcome::Loaded(directory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, Phone};
    use crate::models::Record;
    use crate::persistence::{BinaryCodec, JsonCodec};
    use tempfile::tempdir;

    fn sample() -> Directory {
        let mut directory = Directory::new();
        directory.add_record(Record::with_phone(
            Name::new("Bob").unwrap(),
            Phone::new("+12-345-678-90-11").unwrap(),
        ));
        directory
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let outcome = load(dir.path().join("absent.bin"), &BinaryCodec).unwrap();
        assert!(matches!(outcome, LoadOutcome::Missing));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        assert_eq!(save(&sample(), &path, &JsonCodec).unwrap(), 1);
        match load(&path, &JsonCodec).unwrap() {
            LoadOutcome::Loaded(directory) => assert_eq!(directory, sample()),
            LoadOutcome::Missing => panic!("file was just written"),
        }
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");

        save(&sample(), &path, &BinaryCodec).unwrap();
        save(&Directory::new(), &path, &BinaryCodec).unwrap();

        match load(&path, &BinaryCodec).unwrap() {
            LoadOutcome::Loaded(directory) => assert!(directory.is_empty()),
            LoadOutcome::Missing => panic!("file was just written"),
        }
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"garbage").unwrap();

        let err = load(&path, &BinaryCodec).unwrap_err();
        assert!(matches!(err, PersistenceError::Deserialization(_)));
    }

    #[test]
    fn test_load_directory_path_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load(dir.path(), &BinaryCodec).unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save(&sample(), &path, &BinaryCodec).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_through_symlink_updates_target() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real.bin");
        let link = dir.path().join("data.bin");
        fs::write(&real, b"old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        save(&sample(), &link, &BinaryCodec).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        match load(&real, &BinaryCodec).unwrap() {
            LoadOutcome::Loaded(directory) => assert_eq!(directory, sample()),
            LoadOutcome::Missing => panic!("target was just written"),
        }
    }

    #[test]
    fn test_save_into_missing_folder_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("data.bin");
        let err = save(&sample(), &path, &BinaryCodec).unwrap_err();
        assert!(matches!(err, PersistenceError::Io { .. }));
    }
}
