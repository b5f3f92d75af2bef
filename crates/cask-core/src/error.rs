//! Unified error types for the cask core crate.
//!
//! Consumption-time errors ([`ValueError`]) are deliberately `Clone`: a value
//! whose decoding already failed keeps the captured error and returns it from
//! every consumption method, however many times it is consumed.

use thiserror::Error;

// =============================================================================
// Value Errors
// =============================================================================

/// Errors returned when consuming a [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value has no backing data source.
    ///
    /// Returned by every consumption method of an empty `Value`.
    #[error("value is not defined")]
    Undefined,

    /// The raw representation of the value could not be decoded.
    #[error("failed to decode value: {0}")]
    Decode(String),

    /// A data-source directive named a source type this crate does not
    /// implement.
    #[error("unrecognized data source type: {0:?}")]
    UnrecognizedSource(String),

    /// An underlying filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ValueError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// =============================================================================
// Key Errors
// =============================================================================

/// Errors produced by the typed accessor functions in [`typed`](crate::typed).
///
/// Unlike [`ValueError`], these carry the configuration key they relate to,
/// so the message alone tells an operator which variable to fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The requested key is not defined.
    #[error("{key} is not defined")]
    NotDefined {
        /// The key that was requested.
        key: String,
    },

    /// The key is defined but its value could not be read.
    #[error("cannot read {key}: {source}")]
    Unreadable {
        /// The key that was requested.
        key: String,
        /// The consumption error.
        source: ValueError,
    },

    /// The key is defined but its value is not well-formed.
    #[error("{key} has an invalid value ({value:?}): {reason}")]
    InvalidValue {
        /// The key that was requested.
        key: String,
        /// The raw value as read from the bucket.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The default supplied for the key is itself not well-formed.
    #[error("{key} has an invalid default value ({value:?}): {reason}")]
    InvalidDefault {
        /// The key that was requested.
        key: String,
        /// The rejected default value.
        value: String,
        /// Why the default was rejected.
        reason: String,
    },
}

impl KeyError {
    /// Returns the configuration key this error relates to.
    pub fn key(&self) -> &str {
        match self {
            Self::NotDefined { key }
            | Self::Unreadable { key, .. }
            | Self::InvalidValue { key, .. }
            | Self::InvalidDefault { key, .. } => key,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for value consumption.
pub type ValueResult<T> = Result<T, ValueError>;

/// Result type for typed key access.
pub type KeyResult<T> = Result<T, KeyError>;
