//! String-backed values.

use std::io::{Cursor, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::closer::Closer;
use crate::error::ValueResult;
use crate::temp::TempFile;

/// A value specified as an in-memory string.
pub(crate) struct StringSource {
    value: String,
    temp: Arc<TempFile>,
}

impl StringSource {
    pub(crate) fn new(value: String) -> Self {
        Self {
            value,
            temp: Arc::new(TempFile::default()),
        }
    }
}

impl super::Source for StringSource {
    fn as_reader(&self) -> ValueResult<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.value.clone().into_bytes())))
    }

    fn as_path(&self) -> ValueResult<(PathBuf, Closer)> {
        let path = self
            .temp
            .add_ref(|w: &mut dyn Write| w.write_all(self.value.as_bytes()))?;

        let temp = Arc::clone(&self.temp);
        Ok((path, Closer::new(move || temp.dec_ref())))
    }

    fn as_string(&self) -> ValueResult<String> {
        Ok(self.value.clone())
    }

    fn as_bytes(&self) -> ValueResult<Vec<u8>> {
        Ok(self.value.clone().into_bytes())
    }

    fn kind(&self) -> &'static str {
        "string"
    }
}
