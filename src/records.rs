//! Records: an ordered collection of [`Record`]
//!
//! ## Design
//!
//! `Records` is a thin wrapper over a `Vec<Record>`. Rows keep
//! insertion order, duplicates are permitted, and the documented
//! contract is append-only: rows are added, never removed. No
//! uniqueness is enforced on `id`/`id2`.
//!
//! Every instance allocates its own row vector; collections never
//! share backing storage.
//!
//! ## Thread safety
//!
//! Not designed for concurrent mutation. Callers exposing a
//! `Records` to multiple threads must serialize access externally,
//! one exclusive lock per top-level collection.

use crate::record::Record;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// An ordered, append-only collection of [`Record`]s with lookup,
/// filtering, projection, and bulk identifier assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Records {
    rows: Vec<Record>,
}

impl Records {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a collection from an existing row sequence
    pub fn from_rows(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    /// The rows in insertion order
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Mutable access to the rows
    ///
    /// A slice, so rows may be mutated in place but not added or
    /// removed; additions go through [`Records::add`].
    pub fn rows_mut(&mut self) -> &mut [Record] {
        &mut self.rows
    }

    /// Iterate the rows in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.rows.iter()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the collection holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // ========== Mutation ==========

    /// Append a record to the end of the collection
    pub fn add(&mut self, record: Record) {
        self.rows.push(record);
    }

    /// Append several records, preserving their order
    pub fn add_all(&mut self, records: impl IntoIterator<Item = Record>) {
        self.rows.extend(records);
    }

    /// Apply [`Record::assign_id`] to every row in order
    ///
    /// Each row is independent; rows whose field is missing or
    /// wrongly typed keep their prior `id`.
    pub fn assign_ids(&mut self, field_name: &str) {
        for row in &mut self.rows {
            row.assign_id(field_name);
        }
    }

    /// Apply [`Record::assign_id2`] to every row in order
    pub fn assign_id2s(&mut self, field_name: &str) {
        for row in &mut self.rows {
            row.assign_id2(field_name);
        }
    }

    // ========== Lookup ==========

    /// First row (in insertion order) whose `id` equals `id`
    pub fn find_by_id(&self, id: i64) -> Option<&Record> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Mutable twin of [`Records::find_by_id`]
    pub fn find_by_id_mut(&mut self, id: i64) -> Option<&mut Record> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    /// First row (in insertion order) whose `id2` equals `id2`
    ///
    /// Rows with an unassigned `id2` never match.
    pub fn find_by_id2(&self, id2: &str) -> Option<&Record> {
        self.rows.iter().find(|row| row.id2() == Some(id2))
    }

    /// Mutable twin of [`Records::find_by_id2`]
    pub fn find_by_id2_mut(&mut self, id2: &str) -> Option<&mut Record> {
        self.rows.iter_mut().find(|row| row.id2() == Some(id2))
    }

    /// Every row, in insertion order, whose named field exists and
    /// equals `value`
    pub fn find_all_by_value(
        &self,
        field_name: &str,
        value: impl Into<FieldValue>,
    ) -> Vec<&Record> {
        let value = value.into();
        self.rows
            .iter()
            .filter(|row| row.field(field_name) == Some(&value))
            .collect()
    }

    /// First row whose named field equals `value`, if any
    pub fn find_by_value(&self, field_name: &str, value: impl Into<FieldValue>) -> Option<&Record> {
        let value = value.into();
        self.rows
            .iter()
            .find(|row| row.field(field_name) == Some(&value))
    }

    /// Mutable twin of [`Records::find_by_value`]
    pub fn find_by_value_mut(
        &mut self,
        field_name: &str,
        value: impl Into<FieldValue>,
    ) -> Option<&mut Record> {
        let value = value.into();
        self.rows
            .iter_mut()
            .find(|row| row.field(field_name) == Some(&value))
    }

    // ========== Projection & aggregates ==========

    /// The string form of the named field for every row, in order
    ///
    /// Rows missing the field contribute `None` and emit a debug
    /// diagnostic; the projection itself never fails.
    pub fn column_values(&self, field_name: &str) -> Vec<Option<String>> {
        let mut values = Vec::with_capacity(self.rows.len());
        for (idx, row) in self.rows.iter().enumerate() {
            match row.field(field_name) {
                Some(value) => values.push(value.to_display_string()),
                None => {
                    debug!(
                        target: "recstore::records",
                        field = %field_name,
                        row = idx,
                        "row is missing projected field"
                    );
                    values.push(None);
                }
            }
        }
        values
    }

    /// Union of every row's field names
    pub fn all_field_names(&self) -> HashSet<String> {
        self.rows
            .iter()
            .flat_map(|row| row.field_names().into_iter().map(String::from))
            .collect()
    }

    /// The `id` of every row, duplicates collapsed
    ///
    /// Includes [`Record::UNASSIGNED_ID`] when any row never had an
    /// id assigned.
    pub fn all_ids(&self) -> HashSet<i64> {
        self.rows.iter().map(Record::id).collect()
    }

    /// The `id2` of every row, duplicates collapsed
    ///
    /// Includes `None` when any row never had an id2 assigned.
    pub fn all_id2s(&self) -> HashSet<Option<String>> {
        self.rows
            .iter()
            .map(|row| row.id2().map(String::from))
            .collect()
    }

    /// Number of distinct field names across all rows
    pub fn field_count(&self) -> usize {
        self.all_field_names().len()
    }
}

impl FromIterator<Record> for Records {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Records {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
