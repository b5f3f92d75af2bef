//! File-backed values.

use std::fs::{self, File};
use std::io::Read;
use std::path::PathBuf;

use crate::closer::Closer;
use crate::error::{ValueError, ValueResult};

/// A value specified as a path to an existing file on disk.
///
/// The file is read from, never written to or deleted; `as_path` hands out
/// the original path, so its closer has nothing to release.
pub(crate) struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl super::Source for FileSource {
    fn as_reader(&self) -> ValueResult<Box<dyn Read + Send>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(file))
    }

    fn as_path(&self) -> ValueResult<(PathBuf, Closer)> {
        Ok((self.path.clone(), Closer::noop()))
    }

    fn as_string(&self) -> ValueResult<String> {
        let buf = self.as_bytes()?;
        String::from_utf8(buf).map_err(|err| ValueError::Decode(err.to_string()))
    }

    fn as_bytes(&self) -> ValueResult<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}
