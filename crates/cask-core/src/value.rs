//! The polymorphic configuration value.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use crate::closer::Closer;
use crate::error::{ValueError, ValueResult};
use crate::source::{BytesSource, FailSource, FileSource, Source, StringSource};

/// A configuration value.
///
/// A `Value` may physically originate as an in-memory string, an in-memory
/// byte buffer, or a file on disk, yet can be consumed uniformly as a stream,
/// a file path, a string, or a byte buffer. Callers never learn which
/// representation is native.
///
/// Values are cheap to clone: clones share the backing source, so every copy
/// derived from the same lookup participates in the same ephemeral-file
/// reference count.
///
/// The default `Value` is *empty*: it has no data source at all, and every
/// consumption method fails with [`ValueError::Undefined`]. Note that an
/// empty value is not the same as a value whose content happens to be empty.
#[derive(Clone, Default)]
pub struct Value {
    src: Option<Arc<dyn Source>>,
}

impl Value {
    /// Creates a value specified as a string.
    pub fn from_string(value: impl Into<String>) -> Self {
        Self {
            src: Some(Arc::new(StringSource::new(value.into()))),
        }
    }

    /// Creates a value specified as a byte buffer.
    pub fn from_bytes(value: impl Into<Vec<u8>>) -> Self {
        Self {
            src: Some(Arc::new(BytesSource::new(value.into()))),
        }
    }

    /// Creates a value specified as a path to an existing file.
    ///
    /// The file's existence is not checked here; a missing or unreadable
    /// file surfaces naturally on first consumption.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            src: Some(Arc::new(FileSource::new(path.into()))),
        }
    }

    /// Creates a value that fails with `err` whenever it is consumed.
    ///
    /// Bucket implementations use this to defer decode failures until the
    /// value is actually read, so that an invalid, unused key never aborts
    /// unrelated code paths.
    pub fn from_error(err: ValueError) -> Self {
        Self {
            src: Some(Arc::new(FailSource::new(err))),
        }
    }

    /// Returns `true` if this value has no data source.
    pub fn is_empty(&self) -> bool {
        self.src.is_none()
    }

    /// Opens the value as a byte stream.
    pub fn as_reader(&self) -> ValueResult<Box<dyn Read + Send>> {
        match &self.src {
            Some(src) => src.as_reader(),
            None => Err(ValueError::Undefined),
        }
    }

    /// Returns the path to a real file on disk containing the value.
    ///
    /// If the value was originally specified as a file, this is the original
    /// path; otherwise it is the path to an ephemeral file holding a copy of
    /// the content. The returned [`Closer`] must be released exactly once
    /// when the path is no longer needed, regardless of which case applies —
    /// callers must not special-case based on where the value came from.
    ///
    /// Prefer [`as_reader`](Self::as_reader), [`as_string`](Self::as_string)
    /// or [`as_bytes`](Self::as_bytes); this method exists for code that
    /// requires a real file path.
    pub fn as_path(&self) -> ValueResult<(PathBuf, Closer)> {
        match &self.src {
            Some(src) => src.as_path(),
            None => Err(ValueError::Undefined),
        }
    }

    /// Reads the value as a string.
    pub fn as_string(&self) -> ValueResult<String> {
        match &self.src {
            Some(src) => src.as_string(),
            None => Err(ValueError::Undefined),
        }
    }

    /// Reads the value as a byte buffer.
    pub fn as_bytes(&self) -> ValueResult<Vec<u8>> {
        match &self.src {
            Some(src) => src.as_bytes(),
            None => Err(ValueError::Undefined),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Deliberately omits the content; values are routinely secrets.
        f.debug_struct("Value")
            .field("source", &self.src.as_ref().map(|s| s.kind()))
            .finish()
    }
}
