//! Byte-buffer-backed values.

use std::io::{Cursor, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::closer::Closer;
use crate::error::{ValueError, ValueResult};
use crate::temp::TempFile;

/// A value specified as an in-memory byte buffer.
pub(crate) struct BytesSource {
    value: Vec<u8>,
    temp: Arc<TempFile>,
}

impl BytesSource {
    pub(crate) fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            temp: Arc::new(TempFile::default()),
        }
    }
}

impl super::Source for BytesSource {
    fn as_reader(&self) -> ValueResult<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.value.clone())))
    }

    fn as_path(&self) -> ValueResult<(PathBuf, Closer)> {
        let path = self
            .temp
            .add_ref(|w: &mut dyn Write| w.write_all(&self.value))?;

        let temp = Arc::clone(&self.temp);
        Ok((path, Closer::new(move || temp.dec_ref())))
    }

    fn as_string(&self) -> ValueResult<String> {
        String::from_utf8(self.value.clone())
            .map_err(|err| ValueError::Decode(err.to_string()))
    }

    fn as_bytes(&self) -> ValueResult<Vec<u8>> {
        Ok(self.value.clone())
    }

    fn kind(&self) -> &'static str {
        "bytes"
    }
}
