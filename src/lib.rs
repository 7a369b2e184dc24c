//! recstore: minimal in-memory workflow record store
//!
//! This crate defines the two-type data model and its query/mutation
//! contract:
//! - [`Record`]: a dynamically-keyed attribute bag with an optional
//!   numeric and string identifier and a tree of linked child records
//! - [`Records`]: an ordered, append-only collection of records with
//!   lookup, filtering, projection, and bulk identifier assignment
//! - [`FieldValue`]: the closed sum type of legal field values
//! - [`Error`]: error type (field projection is the only raising path)
//!
//! ## Example
//!
//! ```
//! use recstore::{FieldValue, Record, Records};
//!
//! let mut record = Record::new("test");
//! record.set_fields(vec![
//!     ("id", FieldValue::Int(25)),
//!     ("description", FieldValue::from("hello")),
//! ]);
//!
//! let mut records = Records::new();
//! records.add(record);
//! records.assign_ids("id");
//!
//! assert!(records.find_by_id(25).is_some());
//! ```
//!
//! The data structures are single-threaded; callers sharing a
//! [`Records`] across threads must serialize access externally.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod records;
pub mod value;

pub use error::{Error, Result};
pub use record::{Record, SetFieldsOutcome};
pub use records::Records;
pub use value::FieldValue;
