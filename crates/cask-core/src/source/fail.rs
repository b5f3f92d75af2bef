//! Deferred-failure values.

use std::io::Read;
use std::path::PathBuf;

use crate::closer::Closer;
use crate::error::{ValueError, ValueResult};

/// A value whose decoding has already failed.
///
/// Every consumption method replays the captured error. This is what lets a
/// bucket defer decode failures to consumption time: a malformed value that
/// is never read never fails anything.
pub(crate) struct FailSource {
    err: ValueError,
}

impl FailSource {
    pub(crate) fn new(err: ValueError) -> Self {
        Self { err }
    }
}

impl super::Source for FailSource {
    fn as_reader(&self) -> ValueResult<Box<dyn Read + Send>> {
        Err(self.err.clone())
    }

    fn as_path(&self) -> ValueResult<(PathBuf, Closer)> {
        Err(self.err.clone())
    }

    fn as_string(&self) -> ValueResult<String> {
        Err(self.err.clone())
    }

    fn as_bytes(&self) -> ValueResult<Vec<u8>> {
        Err(self.err.clone())
    }

    fn kind(&self) -> &'static str {
        "error"
    }
}
