//! One-shot release handles.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

type ReleaseFn = Box<dyn Fn() -> io::Result<()> + Send + Sync>;

/// A handle whose release operation runs at most once.
///
/// A `Closer` is returned by [`Value::as_path`](crate::Value::as_path) and
/// must be released exactly once when the path is no longer needed. Releasing
/// is idempotent: any call after the first is a no-op, even when calls race
/// from multiple threads. Dropping an unclosed `Closer` releases it too, so
/// the handle cannot leak its reference by going out of scope.
pub struct Closer {
    release: Option<ReleaseFn>,
    done: AtomicBool,
}

impl Closer {
    /// Creates a closer that invokes `release` on first close.
    pub(crate) fn new<F>(release: F) -> Self
    where
        F: Fn() -> io::Result<()> + Send + Sync + 'static,
    {
        Self {
            release: Some(Box::new(release)),
            done: AtomicBool::new(false),
        }
    }

    /// Creates a closer with nothing to release.
    pub(crate) fn noop() -> Self {
        Self {
            release: None,
            done: AtomicBool::new(true),
        }
    }

    /// Releases the handle.
    ///
    /// Only the first call runs the underlying release operation; every later
    /// call returns `Ok(())`.
    pub fn close(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        match &self.release {
            Some(release) => release(),
            None => Ok(()),
        }
    }
}

impl Drop for Closer {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!(%err, "failed to release configuration value path");
        }
    }
}

impl std::fmt::Debug for Closer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Closer")
            .field("done", &self.done.load(Ordering::SeqCst))
            .finish()
    }
}
