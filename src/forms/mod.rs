//! Request body binding and validation.
//!
//! Writes go through three explicit steps: [`decode`] turns the raw body
//! into a [`Submission`], a draft type binds that submission onto the
//! current values of the target under a [`BindMode`], and the draft's
//! `validate` yields either a typed input or [`FieldErrors`].

pub mod favorite;
pub mod transport;
pub mod transport_type;
pub mod user;

use axum::http::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

pub const NOT_BLANK: &str = "This value should not be blank.";
pub const NOT_VALID: &str = "This value is not valid.";
pub const EXTRA_FIELDS: &str = "This form should not contain extra fields.";

/// Key under which errors not tied to a single field are reported.
pub const FORM_KEY: &str = "form";

/// The body could not be turned into a submission at all.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("body must be a JSON object")]
    NotAnObject,
}

/// How fields absent from a submission are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMode {
    /// Absent fields are cleared (POST, PUT).
    Replace,
    /// Absent fields keep their current value (PATCH).
    Merge,
}

impl BindMode {
    #[must_use]
    pub fn for_method(method: &Method) -> Self {
        if method == Method::PATCH {
            Self::Merge
        } else {
            Self::Replace
        }
    }
}

/// Decoded request body: the submitted fields, not yet bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    fields: Map<String, Value>,
}

impl Submission {
    /// Returns the value a field takes after binding.
    ///
    /// A submitted value always wins; otherwise `current` survives only in
    /// [`BindMode::Merge`].
    pub fn bind(&mut self, name: &str, current: Option<Value>, mode: BindMode) -> Option<Value> {
        match self.fields.remove(name) {
            Some(value) => Some(value),
            None => match mode {
                BindMode::Merge => current,
                BindMode::Replace => None,
            },
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Names of fields that no draft consumed.
    #[must_use]
    pub fn into_extra_fields(self) -> Vec<String> {
        self.fields.into_iter().map(|(name, _)| name).collect()
    }
}

impl From<Map<String, Value>> for Submission {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Structural decode of a request body.
///
/// An empty body or a JSON `null` decodes to an empty submission; any
/// other non-object JSON is rejected.
pub fn decode(body: &[u8]) -> Result<Submission, DecodeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Submission::default());
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Object(fields) => Ok(Submission { fields }),
        Value::Null => Ok(Submission::default()),
        _ => Err(DecodeError::NotAnObject),
    }
}

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub(crate) fn add_extra_fields(&mut self, extra: &[String]) {
        if !extra.is_empty() {
            self.add(FORM_KEY, EXTRA_FIELDS);
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Outcome of reading a bound value as a particular type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Coerced<T> {
    Blank,
    Invalid,
    Value(T),
}

/// Reads an `i32` from a JSON integer, an integral float or a numeric
/// string. `null`, `""` and absence are blank.
pub(crate) fn coerce_i32(value: Option<&Value>) -> Coerced<i32> {
    match value {
        None | Some(Value::Null) => Coerced::Blank,
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map_or(Coerced::Invalid, Coerced::Value)
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .and_then(|f| format!("{f:.0}").parse::<i32>().ok())
                    .map_or(Coerced::Invalid, Coerced::Value)
            }
        }
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Coerced::Blank
            } else {
                trimmed.parse::<i32>().map_or(Coerced::Invalid, Coerced::Value)
            }
        }
        Some(_) => Coerced::Invalid,
    }
}

/// Reads a trimmed, non-empty string. Numbers are accepted as their
/// textual form; other JSON types are invalid.
pub(crate) fn coerce_text(value: Option<&Value>) -> Coerced<String> {
    let text = match value {
        None | Some(Value::Null) => return Coerced::Blank,
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Coerced::Invalid,
    };

    if text.is_empty() {
        Coerced::Blank
    } else {
        Coerced::Value(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_accepts_objects_and_empty_bodies() {
        assert!(decode(b"").unwrap().into_extra_fields().is_empty());
        assert!(decode(b"  \n").unwrap().into_extra_fields().is_empty());
        assert!(decode(b"null").unwrap().into_extra_fields().is_empty());

        let submission = decode(br#"{"number": 5}"#).unwrap();
        assert!(submission.contains("number"));
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        assert!(matches!(decode(b"{not json"), Err(DecodeError::Malformed(_))));
        assert!(matches!(decode(b"[1, 2]"), Err(DecodeError::NotAnObject)));
        assert!(matches!(decode(b"42"), Err(DecodeError::NotAnObject)));
        assert!(matches!(decode(br#""text""#), Err(DecodeError::NotAnObject)));
    }

    #[test]
    fn test_bind_modes() {
        let mut submission = decode(br#"{"a": 1}"#).unwrap();

        assert_eq!(
            submission.bind("a", Some(json!(0)), BindMode::Replace),
            Some(json!(1))
        );
        assert_eq!(submission.bind("b", Some(json!(2)), BindMode::Replace), None);
        assert_eq!(
            submission.bind("c", Some(json!(3)), BindMode::Merge),
            Some(json!(3))
        );
    }

    #[test]
    fn test_bind_mode_for_method() {
        assert_eq!(BindMode::for_method(&Method::PATCH), BindMode::Merge);
        assert_eq!(BindMode::for_method(&Method::PUT), BindMode::Replace);
        assert_eq!(BindMode::for_method(&Method::POST), BindMode::Replace);
    }

    #[test]
    fn test_coerce_i32() {
        assert_eq!(coerce_i32(None), Coerced::Blank);
        assert_eq!(coerce_i32(Some(&json!(null))), Coerced::Blank);
        assert_eq!(coerce_i32(Some(&json!(""))), Coerced::Blank);
        assert_eq!(coerce_i32(Some(&json!(1001))), Coerced::Value(1001));
        assert_eq!(coerce_i32(Some(&json!("1002"))), Coerced::Value(1002));
        assert_eq!(coerce_i32(Some(&json!(12.0))), Coerced::Value(12));
        assert_eq!(coerce_i32(Some(&json!(12.5))), Coerced::Invalid);
        assert_eq!(coerce_i32(Some(&json!("fail"))), Coerced::Invalid);
        assert_eq!(coerce_i32(Some(&json!(true))), Coerced::Invalid);
        assert_eq!(coerce_i32(Some(&json!(i64::MAX))), Coerced::Invalid);
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.add("number", NOT_VALID);
        errors.add("type", NOT_BLANK);

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value["number"][0], NOT_VALID);
        assert_eq!(value["type"][0], NOT_BLANK);
        assert_eq!(errors.fields(), vec!["number", "type"]);
    }
}
