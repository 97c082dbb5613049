//! Shared error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers the core
//! types' own parsing.

use thiserror::Error;

/// Errors raised by `dc-core` types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),
}
