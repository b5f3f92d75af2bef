//! # cask-adapter-env
//!
//! A [`Bucket`] over the operating system's environment variables.
//!
//! For any environment variable `K`, the sibling variable `K__DATASOURCE`
//! controls how the content of `K` is interpreted:
//!
//! - unset, empty, or `string:plain` — the content of `K` is the value;
//! - `string:hex` — the content is a binary value encoded as hexadecimal;
//! - `string:base64` — the content is a binary value encoded as a
//!   standard-alphabet base-64 string;
//! - `file` — the content is a path to a file containing the value.
//!
//! Decode failures and unrecognized directives are not raised at lookup
//! time: the returned [`Value`] captures the error and fails on consumption,
//! so an invalid variable that is never read never aborts anything.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cask_adapter_env::Environment;
//! use cask_core::Bucket;
//!
//! let listen = Environment.get_default("LISTEN_ADDR", "0.0.0.0:8080");
//! println!("listening on {}", listen.as_string().unwrap());
//! ```

mod datasource;

pub use datasource::DATASOURCE_SUFFIX;

use std::env;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use tracing::debug;

use cask_core::{Bucket, Value, ValueError};

use crate::datasource::SourceType;

/// A [`Bucket`] that produces configuration values from the process
/// environment.
///
/// The bucket is a stateless view: every lookup re-reads the environment, so
/// changes made between calls are visible on the next call. An empty
/// variable is treated identically to an unset one (OS environments cannot
/// represent "present but unset").
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl Bucket for Environment {
    fn get(&self, key: &str) -> Value {
        if key.ends_with(DATASOURCE_SUFFIX) {
            // Control variables are metadata, never values.
            return Value::default();
        }

        let raw = match env::var(key) {
            Ok(raw) if !raw.is_empty() => raw,
            _ => return Value::default(),
        };

        let directive = env::var(format!("{key}{DATASOURCE_SUFFIX}")).unwrap_or_default();

        decode(key, &raw, &directive)
    }

    fn each(&self, visit: &mut dyn FnMut(&str, &Value) -> bool) -> bool {
        for (key, _) in env::vars_os() {
            let Some(key) = key.to_str() else {
                continue;
            };

            if key.ends_with(DATASOURCE_SUFFIX) {
                continue;
            }

            let value = self.get(key);

            if !visit(key, &value) {
                return false;
            }
        }

        true
    }
}

/// Decodes a primary variable's text according to its data-source directive.
fn decode(key: &str, raw: &str, directive: &str) -> Value {
    match SourceType::from_directive(directive) {
        SourceType::Plain => Value::from_string(raw),

        SourceType::Hex => match hex::decode(raw) {
            Ok(buf) => Value::from_bytes(buf),
            Err(err) => {
                debug!(key, %err, "deferring hex decode failure");
                Value::from_error(ValueError::Decode(err.to_string()))
            }
        },

        SourceType::Base64 => match BASE64_STANDARD.decode(raw) {
            Ok(buf) => Value::from_bytes(buf),
            Err(err) => {
                debug!(key, %err, "deferring base64 decode failure");
                Value::from_error(ValueError::Decode(err.to_string()))
            }
        },

        SourceType::File => Value::from_file(raw),

        SourceType::Unknown(source) => {
            debug!(key, %source, "deferring unrecognized data source");
            Value::from_error(ValueError::UnrecognizedSource(source))
        }
    }
}
