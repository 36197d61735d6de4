//! Error types for tree registration, lookup and help output.
//!
//! Lookup failures are coarse: the caller only learns whether the
//! input was ambiguous or matched nothing, never the depth at which it failed.

use alloc::string::String;
use thiserror::Error;

/// Dispatch error type.
///
/// Lookup only ever produces `Ambiguous` or `NotFound`. The remaining variants
/// come from registration and help rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A query prefix matched more than one key at some tree level
    #[error("Command is ambiguous")]
    Ambiguous,

    /// A query matched no key, the input was empty, or the resolved node
    /// was not of the requested kind
    #[error("Command not found")]
    NotFound,

    /// Key already registered at this tree level
    #[error("Key `{0}` is already registered")]
    DuplicateKey(String),

    /// Shortcut is empty or spans more than one field
    #[error("Invalid shortcut `{0}`")]
    InvalidShortcut(String),

    /// Help output sink refused a write
    #[error("Failed to write help output")]
    Output(#[from] core::fmt::Error),
}
