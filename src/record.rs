//! Record: a single dynamically-keyed attribute bag
//!
//! ## Design
//!
//! A `Record` holds a `workflow_type` tag classifying its role, a map
//! of named [`FieldValue`]s, two derived identifiers, and an owned
//! [`Records`] collection of linked children.
//!
//! ## Identifier semantics
//!
//! `id` and `id2` are derived state. They are never touched by field
//! mutation; they change only through [`Record::assign_id`] /
//! [`Record::assign_id2`], and those silently keep the prior value
//! when the source field is absent or of the wrong kind.
//!
//! ## Tree search
//!
//! [`Record::find_by_workflow_type`] walks a single branch: at each
//! node it tests the node, then descends into the *first* linked
//! child only. Siblings beyond the first are never visited. Linked
//! records form a linear chain in the workflows this models, so the
//! walk is a chain scan, not a general tree search. Callers that need
//! the latter must iterate the children themselves.

use crate::records::Records;
use crate::value::FieldValue;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single entity: a tagged bag of named fields with optional
/// numeric/string identifiers and a tree of linked child records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    workflow_type: String,
    fields: HashMap<String, FieldValue>,
    id: i64,
    id2: Option<String>,
    linked_records: Records,
}

/// Per-entry result of [`Record::set_fields`]
///
/// The default call path ignores it: valid entries are stored,
/// invalid ones dropped. Callers that want to observe the drops
/// inspect `rejected`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetFieldsOutcome {
    /// Names of entries that were stored
    pub accepted: Vec<String>,
    /// Names of entries that failed validation and were dropped
    pub rejected: Vec<String>,
}

impl Record {
    /// Sentinel meaning "no numeric identifier assigned"
    pub const UNASSIGNED_ID: i64 = -1;

    /// Create a record with the given workflow type and no fields
    pub fn new(workflow_type: impl Into<String>) -> Self {
        Self {
            workflow_type: workflow_type.into(),
            fields: HashMap::new(),
            id: Self::UNASSIGNED_ID,
            id2: None,
            linked_records: Records::new(),
        }
    }

    /// The workflow type tag classifying this record's role
    pub fn workflow_type(&self) -> &str {
        &self.workflow_type
    }

    /// Numeric identifier, [`Record::UNASSIGNED_ID`] until assigned
    pub fn id(&self) -> i64 {
        self.id
    }

    /// String identifier, `None` until assigned
    pub fn id2(&self) -> Option<&str> {
        self.id2.as_deref()
    }

    /// Linked child records
    pub fn linked_records(&self) -> &Records {
        &self.linked_records
    }

    /// Mutable access to the linked child records
    pub fn linked_records_mut(&mut self) -> &mut Records {
        &mut self.linked_records
    }

    // ========== Tree search ==========

    /// Find the first record with the given workflow type along the
    /// first-child chain
    ///
    /// Tests this record, then descends into the first linked child
    /// only, recursively. Returns `None` if the chain ends without a
    /// match. A match in a second or later child is not found; see
    /// the module docs.
    pub fn find_by_workflow_type(&self, workflow_type: &str) -> Option<&Record> {
        if self.workflow_type == workflow_type {
            return Some(self);
        }
        self.linked_records
            .rows()
            .first()?
            .find_by_workflow_type(workflow_type)
    }

    /// Mutable twin of [`Record::find_by_workflow_type`]
    pub fn find_by_workflow_type_mut(&mut self, workflow_type: &str) -> Option<&mut Record> {
        if self.workflow_type == workflow_type {
            Some(self)
        } else {
            self.linked_records
                .rows_mut()
                .first_mut()?
                .find_by_workflow_type_mut(workflow_type)
        }
    }

    // ========== Identifier assignment ==========

    /// Set `id` from the named field, if present and an integer
    ///
    /// Silent no-op when the field is missing or not `Int`; the
    /// prior value is retained.
    pub fn assign_id(&mut self, field_name: &str) {
        if let Some(FieldValue::Int(id)) = self.fields.get(field_name) {
            self.id = *id;
        }
    }

    /// Set `id2` from the named field, if present and a string
    ///
    /// Silent no-op when the field is missing or not `Str`; the
    /// prior value is retained.
    pub fn assign_id2(&mut self, field_name: &str) {
        if let Some(FieldValue::Str(id2)) = self.fields.get(field_name) {
            self.id2 = Some(id2.clone());
        }
    }

    // ========== Field mutation ==========

    /// Store every valid entry, silently dropping invalid ones
    ///
    /// Each entry is independent: a rejected entry (an empty string
    /// list is the only invalid [`FieldValue`]) does not affect the
    /// others, and an existing field with the same name is
    /// overwritten. The returned [`SetFieldsOutcome`] lists which
    /// names were stored and which were dropped.
    pub fn set_fields<K, V, I>(&mut self, entries: I) -> SetFieldsOutcome
    where
        K: Into<String>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut outcome = SetFieldsOutcome::default();
        for (name, value) in entries {
            let name = name.into();
            let value = value.into();
            if value.is_valid() {
                self.fields.insert(name.clone(), value);
                outcome.accepted.push(name);
            } else {
                outcome.rejected.push(name);
            }
        }
        outcome
    }

    /// Store a single field; returns whether the value was accepted
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> bool {
        let value = value.into();
        if value.is_valid() {
            self.fields.insert(name.into(), value);
            true
        } else {
            false
        }
    }

    /// Delete the named field; no-op when absent
    pub fn remove_field(&mut self, field_name: &str) {
        self.fields.remove(field_name);
    }

    // ========== Field queries ==========

    /// Whether the record has a field with the given name
    pub fn has_field(&self, field_name: &str) -> bool {
        self.fields.contains_key(field_name)
    }

    /// The stored value of the named field, if present
    pub fn field(&self, field_name: &str) -> Option<&FieldValue> {
        self.fields.get(field_name)
    }

    /// Whether the named field exists and its stored value equals
    /// `value` (structural equality, not the stringified form)
    pub fn matches(&self, field_name: &str, value: impl Into<FieldValue>) -> bool {
        self.fields.get(field_name) == Some(&value.into())
    }

    /// Number of fields on this record
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The set of field names in use on this record
    pub fn field_names(&self) -> HashSet<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// The string form of the named field
    ///
    /// Null stays `None`; a string is returned as-is; an integer is
    /// converted to decimal; a string list is joined with `;`.
    ///
    /// # Errors
    /// Returns [`Error::FieldNotFound`] when the field does not exist.
    pub fn field_as_string(&self, field_name: &str) -> Result<Option<String>> {
        match self.fields.get(field_name) {
            Some(value) => Ok(value.to_display_string()),
            None => Err(Error::FieldNotFound {
                field: field_name.to_string(),
            }),
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new("")
    }
}
