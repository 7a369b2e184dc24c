//! Field value types for the record store
//!
//! This module defines:
//! - FieldValue: Unified enum for all field value kinds
//!
//! ## Canonical Value Model
//!
//! The FieldValue enum has exactly 4 variants:
//! - Null, Str, Int, StrList
//!
//! ### Type Rules
//!
//! - Four kinds only; no implicit type coercions
//! - Different kinds are NEVER equal: `Int(1) != Str("1")`
//! - An empty `StrList` is representable but fails validation
//!   (`is_valid` returns false), so it is never stored in a record
//!
//! Anything outside these four kinds (floats, booleans, maps,
//! heterogeneous arrays) is rejected at the conversion boundary:
//! see [`FieldValue::from_json`].

use serde::{Deserialize, Serialize};

/// Canonical value type for record fields
///
/// Fields hold exactly one of four kinds: null, a UTF-8 string, a
/// 64-bit signed integer, or a list of strings (a "multi-value"
/// field). Equality is structural and kind-strict: values of
/// different kinds are never equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Null value (field present, no data)
    Null,
    /// UTF-8 string
    Str(String),
    /// 64-bit signed integer
    Int(i64),
    /// List of strings (multi-value field)
    StrList(Vec<String>),
}

impl FieldValue {
    /// Get the kind name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "Null",
            FieldValue::Str(_) => "Str",
            FieldValue::Int(_) => "Int",
            FieldValue::StrList(_) => "StrList",
        }
    }

    /// Check whether this value may be stored in a record field
    ///
    /// True for `Null`, `Str`, `Int`, and a non-empty `StrList`.
    /// An empty `StrList` fails the check; [`Record::set_fields`]
    /// drops such entries instead of storing them.
    ///
    /// [`Record::set_fields`]: crate::Record::set_fields
    pub fn is_valid(&self) -> bool {
        match self {
            FieldValue::StrList(items) => !items.is_empty(),
            _ => true,
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Check if this is a string value
    pub fn is_str(&self) -> bool {
        matches!(self, FieldValue::Str(_))
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, FieldValue::Int(_))
    }

    /// Check if this is a string-list value
    pub fn is_str_list(&self) -> bool {
        matches!(self, FieldValue::StrList(_))
    }

    /// Get as &str if this is a Str value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as &[String] if this is a StrList value
    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::StrList(items) => Some(items),
            _ => None,
        }
    }

    /// Render the value as a display string
    ///
    /// `Null` stays `None`; a string is returned as-is; an integer
    /// is converted to its decimal form; a string list is joined
    /// with `;`. This is the rendering used by
    /// [`Record::field_as_string`].
    ///
    /// [`Record::field_as_string`]: crate::Record::field_as_string
    pub fn to_display_string(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Str(s) => Some(s.clone()),
            FieldValue::Int(i) => Some(i.to_string()),
            FieldValue::StrList(items) => Some(items.join(";")),
        }
    }

    /// Convert a `serde_json::Value` into a field value
    ///
    /// Returns `None` for anything outside the four-kind model:
    /// floats, booleans, objects, arrays containing a non-string
    /// element, and the empty array (which would fail `is_valid`
    /// anyway). Numbers must fit in i64.
    pub fn from_json(value: serde_json::Value) -> Option<FieldValue> {
        match value {
            serde_json::Value::Null => Some(FieldValue::Null),
            serde_json::Value::String(s) => Some(FieldValue::Str(s)),
            serde_json::Value::Number(n) => n.as_i64().map(FieldValue::Int),
            serde_json::Value::Array(items) if !items.is_empty() => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(FieldValue::StrList),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::StrList(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::StrList(items.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for FieldValue {
    fn from(items: &[&str]) -> Self {
        FieldValue::StrList(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<()> for FieldValue {
    fn from(_: ()) -> Self {
        FieldValue::Null
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(v: FieldValue) -> Self {
        match v {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Str(s) => serde_json::Value::String(s),
            FieldValue::Int(i) => serde_json::Value::Number(i.into()),
            FieldValue::StrList(items) => serde_json::Value::Array(
                items.into_iter().map(serde_json::Value::String).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_null() {
        let value = FieldValue::Null;
        assert!(value.is_null());
        assert!(value.is_valid());
    }

    #[test]
    fn test_value_str() {
        let value = FieldValue::Str("hello world".to_string());
        assert!(value.is_str());
        assert!(value.is_valid());
        assert_eq!(value.as_str(), Some("hello world"));
    }

    #[test]
    fn test_value_int() {
        let value = FieldValue::Int(42);
        assert!(value.is_int());
        assert!(value.is_valid());
        assert_eq!(value.as_int(), Some(42));

        let negative = FieldValue::Int(-100);
        assert_eq!(negative.as_int(), Some(-100));
    }

    #[test]
    fn test_value_str_list() {
        let value = FieldValue::StrList(vec!["a".to_string(), "b".to_string()]);
        assert!(value.is_str_list());
        assert!(value.is_valid());
        assert_eq!(
            value.as_str_list(),
            Some(["a".to_string(), "b".to_string()].as_slice())
        );
    }

    #[test]
    fn test_empty_str_list_is_invalid() {
        let value = FieldValue::StrList(vec![]);
        assert!(value.is_str_list());
        assert!(!value.is_valid());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(FieldValue::Null.type_name(), "Null");
        assert_eq!(FieldValue::Str(String::new()).type_name(), "Str");
        assert_eq!(FieldValue::Int(1).type_name(), "Int");
        assert_eq!(FieldValue::StrList(vec![]).type_name(), "StrList");
    }

    // Different kinds are NEVER equal
    #[test]
    fn test_cross_kind_inequality() {
        assert_ne!(FieldValue::Int(1), FieldValue::Str("1".to_string()));
        assert_ne!(FieldValue::Null, FieldValue::Str(String::new()));
        assert_ne!(FieldValue::Null, FieldValue::Int(0));
        assert_ne!(
            FieldValue::Str("a".to_string()),
            FieldValue::StrList(vec!["a".to_string()])
        );
    }

    // ====================================================================
    // Display rendering
    // ====================================================================

    #[test]
    fn test_display_string_null() {
        assert_eq!(FieldValue::Null.to_display_string(), None);
    }

    #[test]
    fn test_display_string_str_as_is() {
        let value = FieldValue::Str("hello".to_string());
        assert_eq!(value.to_display_string(), Some("hello".to_string()));
    }

    #[test]
    fn test_display_string_int_decimal() {
        assert_eq!(FieldValue::Int(7).to_display_string(), Some("7".to_string()));
        assert_eq!(
            FieldValue::Int(-13).to_display_string(),
            Some("-13".to_string())
        );
    }

    #[test]
    fn test_display_string_list_joined_with_semicolon() {
        let value = FieldValue::from(vec!["a", "b"]);
        assert_eq!(value.to_display_string(), Some("a;b".to_string()));
    }

    #[test]
    fn test_display_string_single_element_list_has_no_separator() {
        let value = FieldValue::from(vec!["only"]);
        assert_eq!(value.to_display_string(), Some("only".to_string()));
    }

    // ====================================================================
    // From conversions
    // ====================================================================

    #[test]
    fn test_from_i64() {
        let v: FieldValue = 42i64.into();
        assert_eq!(v, FieldValue::Int(42));
    }

    #[test]
    fn test_from_i32() {
        let v: FieldValue = 42i32.into();
        assert_eq!(v, FieldValue::Int(42));
    }

    #[test]
    fn test_from_str_ref() {
        let v: FieldValue = "hello".into();
        assert_eq!(v, FieldValue::Str("hello".to_string()));
    }

    #[test]
    fn test_from_string() {
        let v: FieldValue = String::from("hello").into();
        assert_eq!(v, FieldValue::Str("hello".to_string()));
    }

    #[test]
    fn test_from_vec_str() {
        let v: FieldValue = vec!["x", "y"].into();
        assert_eq!(
            v,
            FieldValue::StrList(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_from_unit() {
        let v: FieldValue = ().into();
        assert_eq!(v, FieldValue::Null);
    }

    // ====================================================================
    // serde_json interop
    // ====================================================================

    #[test]
    fn test_from_json_accepts_model_kinds() {
        assert_eq!(
            FieldValue::from_json(serde_json::json!(null)),
            Some(FieldValue::Null)
        );
        assert_eq!(
            FieldValue::from_json(serde_json::json!("s")),
            Some(FieldValue::Str("s".to_string()))
        );
        assert_eq!(
            FieldValue::from_json(serde_json::json!(25)),
            Some(FieldValue::Int(25))
        );
        assert_eq!(
            FieldValue::from_json(serde_json::json!(["a", "b"])),
            Some(FieldValue::from(vec!["a", "b"]))
        );
    }

    #[test]
    fn test_from_json_rejects_foreign_kinds() {
        assert_eq!(FieldValue::from_json(serde_json::json!(1.5)), None);
        assert_eq!(FieldValue::from_json(serde_json::json!(true)), None);
        assert_eq!(FieldValue::from_json(serde_json::json!({"a": 1})), None);
        assert_eq!(FieldValue::from_json(serde_json::json!([1, "b"])), None);
    }

    #[test]
    fn test_from_json_rejects_empty_array() {
        assert_eq!(FieldValue::from_json(serde_json::json!([])), None);
    }

    #[test]
    fn test_json_roundtrip() {
        for original in [
            FieldValue::Null,
            FieldValue::Int(42),
            FieldValue::Str("test".to_string()),
            FieldValue::from(vec!["a", "b"]),
        ] {
            let json: serde_json::Value = original.clone().into();
            let restored = FieldValue::from_json(json);
            assert_eq!(restored, Some(original));
        }
    }

    #[test]
    fn test_serde_roundtrip_all_variants() {
        let test_values = vec![
            FieldValue::Null,
            FieldValue::Int(42),
            FieldValue::Str("test".to_string()),
            FieldValue::StrList(vec!["a".to_string(), "b".to_string()]),
        ];

        for value in test_values {
            let serialized = serde_json::to_string(&value).unwrap();
            let deserialized: FieldValue = serde_json::from_str(&serialized).unwrap();
            assert_eq!(value, deserialized);
        }
    }

    #[test]
    fn test_as_wrong_kind_returns_none() {
        let v = FieldValue::Int(42);
        assert!(v.as_str().is_none());
        assert!(v.as_str_list().is_none());

        let v = FieldValue::Str("hello".to_string());
        assert!(v.as_int().is_none());
        assert!(v.as_str_list().is_none());
    }
}
