//! Error types for the record store
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. The model has a single raising condition:
//! asking for the string form of a field that does not exist.
//! Every other failure mode (missing assignment source, invalid
//! `set_fields` entry, empty query result) is ordinary control
//! flow and is represented as a no-op or a `None`/empty result.

use thiserror::Error;

/// Result type alias for record store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the record store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Field not present on the record
    #[error("field not present: {field}")]
    FieldNotFound {
        /// Name of the missing field
        field: String,
    },
}
