//! Ref-counted ephemeral files.
//!
//! A string- or bytes-backed value has no natural filesystem path, but
//! callers may still ask for one. Each such source owns a [`TempFile`] that
//! materializes the value into the OS temp directory the first time a path is
//! requested and deletes it again when the last outstanding reference is
//! released. Managers are never shared between sources, even for identical
//! content.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::trace;

/// A lazily-created temporary file that is deleted when the last reference
/// to it is released.
///
/// Invariant: the file exists on disk iff `refs > 0`, and its path does not
/// change while any reference is outstanding. After a full release cycle the
/// next acquisition creates a fresh file.
#[derive(Debug, Default)]
pub(crate) struct TempFile {
    state: Mutex<TempState>,
}

#[derive(Debug, Default)]
struct TempState {
    path: Option<PathBuf>,
    refs: u64,
}

impl TempFile {
    /// Acquires a reference to the backing file, creating and populating it
    /// via `write` if this is the first reference.
    ///
    /// On creation failure the count is not incremented and no partial file
    /// is left behind; a later call retries creation. Every successful call
    /// must be paired with exactly one [`dec_ref`](Self::dec_ref).
    pub(crate) fn add_ref<F>(&self, write: F) -> io::Result<PathBuf>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut state = self.state.lock();

        let path = match state.path.as_ref() {
            Some(path) if state.refs > 0 => path.clone(),
            _ => {
                let path = create(write)?;
                state.path = Some(path.clone());
                path
            }
        };

        state.refs += 1;

        Ok(path)
    }

    /// Releases a reference acquired with [`add_ref`](Self::add_ref),
    /// deleting the backing file when the count reaches zero.
    ///
    /// A deletion failure is surfaced, but the manager already considers the
    /// file gone; the count is never re-incremented.
    pub(crate) fn dec_ref(&self) -> io::Result<()> {
        let mut state = self.state.lock();

        state.refs -= 1;

        if state.refs == 0 {
            if let Some(path) = state.path.take() {
                trace!(path = %path.display(), "deleting ephemeral configuration file");
                fs::remove_file(path)?;
            }
        }

        Ok(())
    }
}

/// Creates a uniquely-named file in the OS temp directory, populates it via
/// `write` and syncs it to disk.
fn create<F>(write: F) -> io::Result<PathBuf>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let mut file = tempfile::Builder::new().prefix("cask-").tempfile()?;

    // Until keep() succeeds the file is removed when dropped, so any failure
    // below cleans up after itself.
    write(&mut file)?;
    file.as_file().sync_all()?;

    let path = file.into_temp_path().keep().map_err(|err| err.error)?;
    trace!(path = %path.display(), "created ephemeral configuration file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_content(content: &'static [u8]) -> impl FnOnce(&mut dyn Write) -> io::Result<()> {
        move |w| w.write_all(content)
    }

    #[test]
    fn test_file_created_on_first_ref_and_deleted_on_last() {
        let temp = TempFile::default();

        let path = temp.add_ref(write_content(b"<content>")).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"<content>");

        temp.dec_ref().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_file_persists_until_last_reference_released() {
        let temp = TempFile::default();

        let p1 = temp.add_ref(write_content(b"x")).unwrap();
        let p2 = temp.add_ref(write_content(b"x")).unwrap();
        let p3 = temp.add_ref(write_content(b"x")).unwrap();

        // All acquisitions observe the same path while the file is alive.
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);

        temp.dec_ref().unwrap();
        assert!(p1.exists());
        temp.dec_ref().unwrap();
        assert!(p1.exists());
        temp.dec_ref().unwrap();
        assert!(!p1.exists());
    }

    #[test]
    fn test_file_recreated_after_full_release() {
        let temp = TempFile::default();

        let first = temp.add_ref(write_content(b"x")).unwrap();
        temp.dec_ref().unwrap();

        let second = temp.add_ref(write_content(b"x")).unwrap();
        assert!(second.exists());
        assert_eq!(fs::read(&second).unwrap(), b"x");

        temp.dec_ref().unwrap();
        assert!(!first.exists());
        assert!(!second.exists());
    }

    #[test]
    fn test_writer_failure_leaves_manager_consistent() {
        let temp = TempFile::default();

        let err = temp
            .add_ref(|_| Err(io::Error::other("writer failed")))
            .unwrap_err();
        assert_eq!(err.to_string(), "writer failed");

        // The failed acquisition did not count; a retry starts from scratch.
        let path = temp.add_ref(write_content(b"retry")).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"retry");
        temp.dec_ref().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_concurrent_acquisitions_share_one_file() {
        let temp = TempFile::default();

        let paths: Vec<PathBuf> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| temp.add_ref(write_content(b"shared")).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for path in &paths {
            assert_eq!(path, &paths[0]);
        }
        assert!(paths[0].exists());

        for _ in 0..8 {
            temp.dec_ref().unwrap();
        }
        assert!(!paths[0].exists());
    }
}
