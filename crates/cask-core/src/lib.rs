//! # cask-core
//!
//! The value-resolution engine of the cask configuration library.
//!
//! cask supplies a process with named configuration values that may
//! physically originate as an in-memory string, an in-memory byte buffer, or
//! a file on disk, yet are consumable uniformly as a stream, a file path, a
//! string, or a byte buffer.
//!
//! ## Architecture
//!
//! - **[`Value`]**: the public, cheaply-clonable box around a configuration
//!   value, including the "empty" (undefined) state. Exposes the four
//!   consumption methods.
//! - **Sources**: crate-private backings adapting each physical
//!   representation (string, bytes, file, captured failure) to one
//!   capability contract. String and byte values materialize a real file on
//!   demand through a ref-counted ephemeral file that is deleted when the
//!   last [`Closer`] obtained from [`Value::as_path`] is released.
//! - **[`Bucket`]**: the key → [`Value`] lookup surface, with
//!   `HashMap<String, Value>` as the in-memory reference implementation.
//! - **[`typed`]**: parsing accessors (integers, floats, booleans,
//!   durations, URLs, anything `FromStr`) over any [`Bucket`].
//!
//! Buckets that decode raw representations (such as the environment adapter)
//! defer their decode failures via [`Value::from_error`]: the error is
//! captured at lookup time but only surfaces when the value is actually
//! consumed, so an invalid key that is never read never aborts anything.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use cask_core::Value;
//!
//! let bucket: HashMap<String, Value> =
//!     HashMap::from([("LISTEN_PORT".to_string(), Value::from_string("8080"))]);
//!
//! let port: u16 = cask_core::typed::get_default(&bucket, "LISTEN_PORT", 80)?;
//! assert_eq!(port, 8080);
//! # Ok::<(), cask_core::KeyError>(())
//! ```

mod bucket;
mod closer;
mod error;
mod source;
mod temp;
mod value;

pub mod typed;

pub use bucket::Bucket;
pub use closer::Closer;
pub use error::{KeyError, KeyResult, ValueError, ValueResult};
pub use value::Value;
