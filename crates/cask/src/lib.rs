//! # cask
//!
//! Polymorphic configuration values from the environment, files and memory.
//!
//! A configuration value handed to a process may physically be an in-memory
//! string, a decoded byte buffer, or a file on disk. cask lets callers
//! consume any of them uniformly — as a stream, a file path, a string, or a
//! byte buffer — without knowing which representation is native:
//!
//! - a [`Bucket`](cask_core::Bucket) resolves a key to a
//!   [`Value`](cask_core::Value);
//! - the value is consumed through one of four methods; a non-file value
//!   requested as a path is materialized into a ref-counted ephemeral file
//!   that is deleted when the last consumer releases it;
//! - decode failures surface only when a value is consumed, never at lookup.
//!
//! The [`Environment`](cask_adapter_env::Environment) bucket (the `env`
//! feature, on by default) reads the process environment, where a sibling
//! `K__DATASOURCE` variable selects how `K`'s text is decoded (`string:plain`,
//! `string:hex`, `string:base64` or `file`).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cask::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // TLS_CERT may be plain text, hex, base64, or a file path; the
//!     // consuming code is identical either way.
//!     let cert = Environment.get("TLS_CERT");
//!     let (path, _closer) = cert.as_path()?;
//!     println!("certificate at {}", path.display());
//!
//!     let workers: usize = typed::get_default(&Environment, "WORKERS", 4)?;
//!     println!("{workers} workers");
//!     Ok(())
//! }
//! ```

pub use cask_core as core;

#[cfg(feature = "env")]
pub use cask_adapter_env as env;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use cask::prelude::*;
/// ```
pub mod prelude {
    pub use cask_core::typed;
    pub use cask_core::{Bucket, Closer, KeyError, KeyResult, Value, ValueError, ValueResult};

    #[cfg(feature = "env")]
    pub use cask_adapter_env::{DATASOURCE_SUFFIX, Environment};
}
