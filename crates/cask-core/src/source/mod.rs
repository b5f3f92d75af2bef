//! Physical backings for configuration values.
//!
//! Each backing adapts one physical representation (string, byte buffer,
//! file on disk, captured failure) to the [`Source`] capability contract.
//! The trait is crate-private: values are always consumed through
//! [`Value`](crate::Value), which is oblivious to which backing it holds.

mod bytes;
mod fail;
mod file;
mod string;

pub(crate) use bytes::BytesSource;
pub(crate) use fail::FailSource;
pub(crate) use file::FileSource;
pub(crate) use string::StringSource;

use std::io::Read;
use std::path::PathBuf;

use crate::closer::Closer;
use crate::error::ValueResult;

/// The capability contract implemented by every physical value backing.
pub(crate) trait Source: Send + Sync {
    /// Opens the value as a byte stream.
    fn as_reader(&self) -> ValueResult<Box<dyn Read + Send>>;

    /// Materializes the value as a real file on disk.
    ///
    /// The returned [`Closer`] releases the path when it is no longer needed.
    fn as_path(&self) -> ValueResult<(PathBuf, Closer)>;

    /// Reads the value as a string.
    fn as_string(&self) -> ValueResult<String>;

    /// Reads the value as a byte buffer.
    fn as_bytes(&self) -> ValueResult<Vec<u8>>;

    /// A short label for the backing, used in `Debug` output instead of the
    /// value itself (configuration values are routinely secrets).
    fn kind(&self) -> &'static str;
}
